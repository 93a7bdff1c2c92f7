//! Shared fixtures: sample entities and call-counting persistence doubles.

mod doubles;
mod entity;

pub(crate) use doubles::{CountingLoader, CountingManager};
pub(crate) use entity::{Seat, Track};
