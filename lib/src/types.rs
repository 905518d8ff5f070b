use serde::{Deserialize, Serialize};

/// Database-generated row identifier.
pub type Id = i64;

/// A named participant.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Racer {
    pub name: String,
}

/// An object as stored in the database.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Stored<T> {
    pub id: Id,
    #[serde(flatten)]
    pub data: T,
}

pub type StoredRacer = Stored<Racer>;
