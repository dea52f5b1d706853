//! Domain models shared by the repositories and the service layer.

pub mod person;

pub use person::{NewPerson, Person, PersonId};
