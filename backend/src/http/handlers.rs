//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer in [`crate::db::services`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{CreatePersonRequest, HealthResponse, PersonResponse};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::PersonId;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Path of the resource for a single person.
pub fn person_location(id: PersonId) -> String {
    format!("/person/{}", id)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Person
// =============================================================================

/// GET /person
///
/// List every stored person. Order is not guaranteed.
pub async fn list_people(State(state): State<AppState>) -> HandlerResult<Vec<PersonResponse>> {
    let people = db_services::list_people(state.repository.as_ref()).await?;
    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

/// GET /person/{id}
///
/// 404 with an empty body when no person has the id.
pub async fn get_person(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> HandlerResult<PersonResponse> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;

    db_services::get_person(state.repository.as_ref(), PersonId::new(id))
        .await?
        .map(|person| Json(PersonResponse::from(person)))
        .ok_or(AppError::NotFound)
}

/// POST /person
///
/// 201 with a `Location` header and empty body on success.
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let person = db_services::create_person(state.repository.as_ref(), request).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, person_location(person.id))],
    )
        .into_response())
}
