//! Data Transfer Objects for the HTTP API.
//!
//! Person request/response bodies live in [`crate::api`] and are re-exported
//! here for handler use.

use serde::{Deserialize, Serialize};

pub use crate::api::{CreatePersonRequest, PersonResponse};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
