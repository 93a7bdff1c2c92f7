use crate::{persist::EntityIdentity, value::Value};
use std::fmt;

///
/// Track
///
/// Single-field-identifier fixture entity.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Track {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) genre: &'static str,
}

impl Track {
    pub(crate) fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            genre: "pop",
        }
    }

    pub(crate) fn with_genre(mut self, genre: &'static str) -> Self {
        self.genre = genre;
        self
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl EntityIdentity for Track {
    const ENTITY_NAME: &'static str = "Track";
    const ID_FIELDS: &'static [&'static str] = &["id"];

    fn identifier_values(&self) -> Vec<Value> {
        vec![Value::Nat(self.id)]
    }
}

///
/// Seat
///
/// Composite-identifier fixture entity.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Seat {
    pub(crate) row: u64,
    pub(crate) col: u64,
}

impl Seat {
    pub(crate) const fn new(row: u64, col: u64) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

impl EntityIdentity for Seat {
    const ENTITY_NAME: &'static str = "Seat";
    const ID_FIELDS: &'static [&'static str] = &["row", "col"];

    fn identifier_values(&self) -> Vec<Value> {
        vec![Value::Nat(self.row), Value::Nat(self.col)]
    }
}
