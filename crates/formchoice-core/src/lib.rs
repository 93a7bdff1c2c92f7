//! Core runtime for formchoice: choice lists, the lazily-loaded entity
//! adapter, labelers, and the persistence seam they load through.
#![warn(unreachable_pub)]

pub mod entity;
pub mod error;
pub mod label;
pub mod list;
pub mod persist;
pub mod value;
pub mod view;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, fixtures, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        list::{ChoiceList, IndexPolicy},
        persist::{EntityIdentity, EntityLoader, PersistenceManager},
        value::{ChoiceIndex, ChoiceValue, Value},
        view::{ChoiceView, ViewPartition},
    };
}
