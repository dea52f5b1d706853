//! Repository trait definitions for database operations.
//!
//! - [`error`]: Error types for repository operations
//! - [`person`]: Storage operations for the person entity

pub mod error;
pub mod person;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use person::PersonRepository;
