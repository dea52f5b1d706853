//! Public API surface for the Person service.
//!
//! Wire types for the HTTP API. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::models::{NewPerson, Person};

pub use crate::models::PersonId;

/// Request body for `POST /person`.
///
/// Missing fields deserialize to empty strings so that the validator, not the
/// JSON decoder, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePersonRequest {
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
}

impl CreatePersonRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        occupation: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            occupation: occupation.into(),
        }
    }
}

impl From<CreatePersonRequest> for NewPerson {
    fn from(request: CreatePersonRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            occupation: request.occupation,
        }
    }
}

/// Read projection of a stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            first_name: person.first_name,
            last_name: person.last_name,
            occupation: person.occupation,
        }
    }
}
