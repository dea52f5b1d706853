//! In-memory local repository implementation.
//!
//! Suitable for unit testing and local development. All data is stored in a
//! HashMap behind a lock, giving fast, deterministic and isolated execution.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::repository::{ErrorContext, PersonRepository, RepositoryError, RepositoryResult};
use crate::models::{NewPerson, Person, PersonId};

/// In-memory local repository.
///
/// # Example
/// ```
/// use person_api::db::repositories::LocalRepository;
/// use person_api::db::PersonRepository;
/// use person_api::models::NewPerson;
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// runtime.block_on(async {
///     let repo = LocalRepository::new();
///     let stored = repo
///         .insert(NewPerson {
///             first_name: "Frank".into(),
///             last_name: "Tank".into(),
///             occupation: "Programmer".into(),
///         })
///         .await
///         .unwrap();
///     assert_eq!(repo.find_all().await.unwrap(), vec![stored]);
/// });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    people: HashMap<PersonId, Person>,
    // None once the id space is exhausted
    next_person_id: Option<PersonId>,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            people: HashMap::new(),
            next_person_id: Some(PersonId(1)),
            is_healthy: true,
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    ///
    /// While unhealthy every operation fails with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository and restart id generation.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of people stored.
    pub fn person_count(&self) -> usize {
        self.data.read().people.len()
    }

    fn ensure_healthy(data: &LocalData, operation: &str) -> RepositoryResult<()> {
        if data.is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection_with_context(
                "Local repository is marked unhealthy",
                ErrorContext::new(operation).with_entity("person"),
            ))
        }
    }
}

#[async_trait]
impl PersonRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn insert(&self, person: NewPerson) -> RepositoryResult<Person> {
        let mut data = self.data.write();
        Self::ensure_healthy(&data, "insert_person")?;

        let id = data.next_person_id.ok_or_else(|| {
            RepositoryError::internal_with_context(
                "Person id space exhausted",
                ErrorContext::new("insert_person").with_entity("person"),
            )
        })?;
        data.next_person_id = id.0.checked_add(1).map(PersonId);

        let stored = person.with_id(id);
        data.people.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: PersonId) -> RepositoryResult<Option<Person>> {
        let data = self.data.read();
        Self::ensure_healthy(&data, "find_person_by_id")?;
        Ok(data.people.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Person>> {
        let data = self.data.read();
        Self::ensure_healthy(&data, "find_all_people")?;
        Ok(data.people.values().cloned().collect())
    }
}
