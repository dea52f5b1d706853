//! High-level person service layer.
//!
//! Repository-agnostic operations that work with any [`PersonRepository`].
//! This is where validation runs before persistence, so the rules hold
//! regardless of the storage backend.
//!
//! # Usage
//!
//! ```no_run
//! use person_api::api::CreatePersonRequest;
//! use person_api::db::{services, PersonRepository, ServiceError};
//!
//! async fn register_frank(repo: &dyn PersonRepository) -> Result<(), ServiceError> {
//!     let request = CreatePersonRequest::new("Frank", "Tank", "Programmer");
//!     let person = services::create_person(repo, request).await?;
//!     println!("Created person {}", person.id);
//!     Ok(())
//! }
//! ```

use log::{debug, info};

use super::repository::{PersonRepository, RepositoryError, RepositoryResult};
use crate::api::CreatePersonRequest;
use crate::models::{NewPerson, Person, PersonId};
use crate::services::validation::{validate_create_person, ValidationErrors};

/// Errors produced by [`create_person`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request was rejected before reaching storage.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// The store failed while persisting a valid request.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Check if the database connection is healthy.
pub async fn health_check<R: PersonRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// List every stored person. An empty store yields an empty vector.
pub async fn list_people<R: PersonRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Person>> {
    let people = repo.find_all().await?;
    debug!("Listed {} people", people.len());
    Ok(people)
}

/// Fetch a single person. `Ok(None)` means no person has that id.
pub async fn get_person<R: PersonRepository + ?Sized>(
    repo: &R,
    id: PersonId,
) -> RepositoryResult<Option<Person>> {
    repo.find_by_id(id).await
}

/// Validate and store a new person.
///
/// Validation failures return [`ServiceError::Validation`] without any call
/// into the repository.
pub async fn create_person<R: PersonRepository + ?Sized>(
    repo: &R,
    request: CreatePersonRequest,
) -> Result<Person, ServiceError> {
    validate_create_person(&request)?;

    let person = repo.insert(NewPerson::from(request)).await?;
    info!("Created person {}", person.id);
    Ok(person)
}
