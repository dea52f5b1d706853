//! Business rules that sit in front of the repositories.

pub mod validation;

pub use validation::{validate_create_person, FieldError, ValidationErrors};
