//! Database module for person storage.
//!
//! Storage is reached through the [`PersonRepository`] trait so that
//! backends can be swapped:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers                                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - validation, logging      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  PersonRepository trait                                 │
//! └───────────┬─────────────────────────────┬───────────────┘
//!             │                             │
//! ┌───────────▼────────────┐   ┌────────────▼──────────────┐
//! │ PostgresRepository     │   │ LocalRepository           │
//! │ (Diesel + r2d2)        │   │ (in-memory)               │
//! └────────────────────────┘   └───────────────────────────┘
//! ```
//!
//! Use [`factory::RepositoryFactory`] to build the backend selected by the
//! environment or a `repository.toml` file.

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;


#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::PostgresConfig;

pub use services::{create_person, get_person, health_check, list_people, ServiceError};

pub use repo_config::RepositoryConfig;

pub use factory::{RepositoryFactory, RepositoryType};
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresRepository;
pub use repository::{ErrorContext, PersonRepository, RepositoryError, RepositoryResult};
