//! formchoice: lazily-loaded choice lists bridging persisted entities to
//! form fields.
//!
//! ## Crate layout
//! - `core`: choice lists, the entity adapter, labelers, and the persistence
//!   seam they load through.
//!
//! The `prelude` module mirrors the surface a form-rendering integration
//! uses.

pub use formchoice_core as core;

pub use formchoice_core::error::ChoiceError;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use formchoice_core::{
        entity::{EntityChoiceList, EntityChoiceListBuilder},
        error::ChoiceError,
        label::{LabelError, Labeler},
        list::{ChoiceList, IndexPolicy, ObjectChoiceList},
        persist::{
            EntityIdentity, EntityLoader, MemoryManager, PersistError, PersistenceManager,
        },
        value::{ChoiceIndex, ChoiceValue, Value},
        view::{ChoiceView, ViewPartition},
    };
}
