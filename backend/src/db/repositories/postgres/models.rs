use diesel::prelude::*;

use super::schema::person;
use crate::models::{NewPerson, Person, PersonId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = person)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PersonRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: PersonId(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            occupation: row.occupation,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = person)]
pub struct NewPersonRow {
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
}

impl From<NewPerson> for NewPersonRow {
    fn from(person: NewPerson) -> Self {
        NewPersonRow {
            first_name: person.first_name,
            last_name: person.last_name,
            occupation: person.occupation,
        }
    }
}
