//! HTTP error handling and problem-details responses.
//!
//! Error bodies follow RFC 9457 and are served as
//! `application/problem+json`. Storage failures are logged with a trace id
//! and only a generic message reaches the client.

use std::collections::BTreeMap;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::db::repository::RepositoryError;
use crate::db::services::ServiceError;
use crate::services::validation::ValidationErrors;

pub const PROBLEM_JSON: &str = "application/problem+json";

const BAD_REQUEST_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
const INTERNAL_ERROR_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.6.1";

/// Message returned for any failure whose detail must stay server-side.
pub const GENERIC_ERROR_DETAIL: &str = "An error occurred.";

/// Problem-details response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Field name -> messages, present on validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
    /// Correlates the response with the server log entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ProblemDetails {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            problem_type: BAD_REQUEST_TYPE.to_string(),
            title: "Bad Request".to_string(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            detail: Some(detail.into()),
            errors: None,
            trace_id: None,
        }
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        Self {
            title: "One or more validation errors occurred.".to_string(),
            errors: Some(errors.by_field()),
            ..Self::bad_request(errors.to_string())
        }
    }

    pub fn internal(trace_id: impl Into<String>) -> Self {
        Self {
            problem_type: INTERNAL_ERROR_TYPE.to_string(),
            title: "An error occurred while processing your request.".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: Some(GENERIC_ERROR_DETAIL.to_string()),
            errors: None,
            trace_id: Some(trace_id.into()),
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found; rendered with an empty body
    NotFound,
    /// Malformed request (bad JSON, bad path parameter)
    BadRequest(String),
    /// Request failed validation
    Validation(ValidationErrors),
    /// Storage failure
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::BadRequest(msg) => ProblemDetails::bad_request(msg).into_response(),
            AppError::Validation(errors) => ProblemDetails::validation(&errors).into_response(),
            AppError::Repository(e) => {
                let trace_id = Uuid::new_v4().to_string();
                error!(trace_id = %trace_id, "Request failed: {}", e);
                ProblemDetails::internal(trace_id).into_response()
            }
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => AppError::Validation(e),
            ServiceError::Repository(e) => AppError::Repository(e),
        }
    }
}
