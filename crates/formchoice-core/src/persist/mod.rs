//! Persistence seam: the traits the entity adapter loads through.
//!
//! Invariants:
//! - `EntityIdentity::identifier_values` returns one value per entry in
//!   `ID_FIELDS`, in the same order.
//! - Managers never hand out entities they would not `contains`.

mod memory;

pub use memory::MemoryManager;

use crate::value::Value;
use std::rc::Rc;
use thiserror::Error as ThisError;

///
/// PersistError
///

#[derive(Debug, ThisError)]
pub enum PersistError {
    #[error("persistence backend failure: {message}")]
    Backend { message: String },

    #[error("unknown identifier field \"{field}\" for entity \"{entity}\"")]
    UnknownIdField {
        entity: &'static str,
        field: String,
    },
}

///
/// EntityIdentity
///
/// Identifier metadata for an entity type.
///
/// ## Semantics
/// - `ID_FIELDS` is the ordered primary-key field list
/// - A single-entry `ID_FIELDS` enables identifier fast paths in lists
///

pub trait EntityIdentity {
    const ENTITY_NAME: &'static str;
    const ID_FIELDS: &'static [&'static str];

    /// Ordered identifier values, aligned with `ID_FIELDS`.
    fn identifier_values(&self) -> Vec<Value>;
}

///
/// PersistenceManager
///
/// The slice of an object manager the adapter needs: identity-map membership,
/// placeholder realization, and a full scan of one entity class.
///

pub trait PersistenceManager {
    type Entity: EntityIdentity;

    /// Whether the identity map currently tracks this entity.
    fn contains(&self, entity: &Self::Entity) -> bool;

    /// Realize a placeholder before its identifier fields are read.
    /// Managers without lazy placeholders keep the default no-op.
    fn initialize_object(&self, entity: &Self::Entity) -> Result<(), PersistError> {
        let _ = entity;
        Ok(())
    }

    /// Full repository scan of the configured entity class.
    fn find_all(&self) -> Result<Vec<Self::Entity>, PersistError>;
}

///
/// EntityLoader
///
/// Pluggable fetch strategy that bypasses the default repository scan, for
/// callers that can load the choice set (or a by-identifier subset) cheaper.
///

pub trait EntityLoader {
    type Entity;

    /// The full entity set for the choice list.
    fn entities(&self) -> Result<Vec<Self::Entity>, PersistError>;

    /// The subset whose identifier `field` matches any of `values`.
    /// Values originate from form submissions, so implementations match on
    /// the canonical text form. Result order follows `values`; unmatched
    /// values are omitted.
    fn entities_by_ids(
        &self,
        field: &str,
        values: &[Value],
    ) -> Result<Vec<Self::Entity>, PersistError>;
}

// Shared handles satisfy both seams, so one manager instance can serve a
// request-scoped adapter and its caller at the same time.
impl<M: PersistenceManager + ?Sized> PersistenceManager for Rc<M> {
    type Entity = M::Entity;

    fn contains(&self, entity: &Self::Entity) -> bool {
        (**self).contains(entity)
    }

    fn initialize_object(&self, entity: &Self::Entity) -> Result<(), PersistError> {
        (**self).initialize_object(entity)
    }

    fn find_all(&self) -> Result<Vec<Self::Entity>, PersistError> {
        (**self).find_all()
    }
}

impl<L: EntityLoader + ?Sized> EntityLoader for Rc<L> {
    type Entity = L::Entity;

    fn entities(&self) -> Result<Vec<Self::Entity>, PersistError> {
        (**self).entities()
    }

    fn entities_by_ids(
        &self,
        field: &str,
        values: &[Value],
    ) -> Result<Vec<Self::Entity>, PersistError> {
        (**self).entities_by_ids(field, values)
    }
}
