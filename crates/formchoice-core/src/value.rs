//! Scalar identifier values and their normalized form-facing encodings.
//!
//! Invariants:
//! - A `Value`'s canonical text form is stable; it is what binds a form
//!   submission back to an entity.
//! - `ChoiceIndex` only contains key-safe characters; construction normalizes.

use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Value
///
/// One scalar identifier value read from entity metadata.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Value {
    Text(String),
    Int(i64),
    Nat(u64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Nat(n) => write!(f, "{n}"),
            Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Nat(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

///
/// ChoiceValue
///
/// Normalized submission value for one choice. This is the string the
/// rendering layer writes into the form and reads back on submit.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("{_0}")]
pub struct ChoiceValue(String);

impl ChoiceValue {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&Value> for ChoiceValue {
    fn from(value: &Value) -> Self {
        Self(value.to_string())
    }
}

///
/// ChoiceIndex
///
/// Key under which a choice is stored in a list. Indices must be usable as
/// form field name fragments, so construction maps anything outside
/// `[A-Za-z0-9_-]` to `_`.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("{_0}")]
pub struct ChoiceIndex(String);

impl ChoiceIndex {
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        let fixed = raw
            .as_ref()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        Self(fixed)
    }

    /// Position-based index for lists without a usable identifier field.
    #[must_use]
    pub fn synthetic(position: usize) -> Self {
        Self(position.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Value> for ChoiceIndex {
    fn from(value: &Value) -> Self {
        Self::new(value.to_string())
    }
}

impl From<&ChoiceValue> for ChoiceIndex {
    fn from(value: &ChoiceValue) -> Self {
        Self::new(value.as_str())
    }
}

///
/// TESTS
///
