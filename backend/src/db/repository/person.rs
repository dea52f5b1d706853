//! Person repository trait for the core storage operations.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewPerson, Person, PersonId};

/// Repository trait for person storage.
///
/// Implementations operate on plain records; nothing is tracked between
/// calls. Implementations must be `Send + Sync` so a single instance can be
/// shared across request handlers.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Check if the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Persist a new person and return it with the id the store assigned.
    async fn insert(&self, person: NewPerson) -> RepositoryResult<Person>;

    /// Look up a person by exact id. `Ok(None)` when absent.
    async fn find_by_id(&self, id: PersonId) -> RepositoryResult<Option<Person>>;

    /// Return every stored person. No ordering is guaranteed.
    async fn find_all(&self) -> RepositoryResult<Vec<Person>>;
}
