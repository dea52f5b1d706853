//! Person entity as stored by the repositories.

use serde::{Deserialize, Serialize};

/// Person identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(pub i32);

impl PersonId {
    pub fn new(value: i32) -> Self {
        PersonId(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted person.
///
/// All three string fields are non-empty for every stored record; the
/// service layer validates before insert and the table carries matching
/// `CHECK` constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
}

/// Insert record for a person that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
}

impl NewPerson {
    /// Attach the id generated by the store.
    pub fn with_id(self, id: PersonId) -> Person {
        Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            occupation: self.occupation,
        }
    }
}
