//! Field-presence validation for incoming person records.
//!
//! Validation runs before any storage interaction. A record is valid when each
//! required string field is non-empty; whitespace-only values are accepted.

use std::collections::BTreeMap;
use std::fmt;

use crate::api::CreatePersonRequest;

/// A single failed rule on one named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field (e.g. `firstName`)
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn must_not_be_empty(field: &'static str, display_name: &str) -> Self {
        Self {
            field,
            message: format!("'{}' must not be empty.", display_name),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every rule violation found on a record, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", summarize(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Names of the fields that failed, in declaration order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }

    /// Messages grouped by field, suitable for a problem-details `errors` map.
    pub fn by_field(&self) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            map.entry(error.field.to_string())
                .or_default()
                .push(error.message.clone());
        }
        map
    }
}

fn require_non_empty(
    errors: &mut Vec<FieldError>,
    value: &str,
    field: &'static str,
    display_name: &str,
) {
    if value.is_empty() {
        errors.push(FieldError::must_not_be_empty(field, display_name));
    }
}

/// Check that first name, last name and occupation are all present.
pub fn validate_create_person(request: &CreatePersonRequest) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    require_non_empty(&mut errors, &request.first_name, "firstName", "First Name");
    require_non_empty(&mut errors, &request.last_name, "lastName", "Last Name");
    require_non_empty(&mut errors, &request.occupation, "occupation", "Occupation");

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}
