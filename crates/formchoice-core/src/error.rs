//! Shared error surface for choice lists and the entity adapter.

use crate::{label::LabelError, persist::PersistError};
use thiserror::Error as ThisError;

///
/// ChoiceError
///
/// Everything a choice-list accessor can fail with. Persistence and loader
/// failures pass through untranslated; label failures are rewrapped once at
/// the entity load boundary.
///

#[derive(Debug, ThisError)]
pub enum ChoiceError {
    /// Label extraction failed while building list views.
    #[error(transparent)]
    Label(#[from] LabelError),

    /// Label extraction failed during an entity load. Same failure as
    /// `Label`, reworded against the adapter's own configuration surface.
    #[error(
        "entities passed to the choice field could not be cast to display labels; \
         configure the \"label\" option with a readable extractor"
    )]
    EntityLabel {
        #[source]
        source: LabelError,
    },

    /// Persistence or loader failure, passed through untranslated.
    #[error(transparent)]
    Persist(#[from] PersistError),

    /// Identifier extraction was attempted on an entity the persistence
    /// layer does not track.
    #[error("entities of type \"{entity}\" passed to the choice field must be managed")]
    UnmanagedEntity { entity: &'static str },
}
