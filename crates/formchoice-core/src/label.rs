//! Label extraction for choice entities.

use std::fmt::{self, Debug, Display};
use thiserror::Error as ThisError;

///
/// LabelError
///

#[derive(Debug, ThisError)]
pub enum LabelError {
    #[error("choice at index \"{index}\" could not be cast to a display label by labeler \"{labeler}\"")]
    Cast { labeler: &'static str, index: String },
}

///
/// Labeler
///
/// Named label-extraction strategy for one entity type.
///
/// ## Semantics
/// - `extract` returns `None` when the entity has no readable label
/// - `name` is diagnostic only; it appears in cast errors
///

pub struct Labeler<T> {
    name: &'static str,
    extract: Box<dyn Fn(&T) -> Option<String>>,
}

impl<T> Labeler<T> {
    /// Label entities through their `Display` implementation.
    #[must_use]
    pub fn from_display() -> Self
    where
        T: Display,
    {
        Self {
            name: "display",
            extract: Box::new(|entity| Some(entity.to_string())),
        }
    }

    /// Label entities through a named extraction function, the analog of a
    /// label property path.
    #[must_use]
    pub fn from_fn(name: &'static str, extract: impl Fn(&T) -> Option<String> + 'static) -> Self {
        Self {
            name,
            extract: Box::new(extract),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn label(&self, entity: &T, index: &str) -> Result<String, LabelError> {
        (self.extract)(entity).ok_or_else(|| LabelError::Cast {
            labeler: self.name,
            index: index.to_owned(),
        })
    }
}

impl<T> Debug for Labeler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Labeler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_labeler_uses_display_impl() {
        let labeler = Labeler::<u64>::from_display();
        assert_eq!(labeler.label(&7, "0").unwrap(), "7");
    }

    #[test]
    fn fn_labeler_reports_its_name_on_cast_failure() {
        let labeler = Labeler::<u64>::from_fn("title", |_| None);
        let err = labeler.label(&7, "3").unwrap_err();

        assert!(matches!(err, LabelError::Cast { labeler: "title", .. }));
        assert!(err.to_string().contains("\"title\""));
        assert!(err.to_string().contains("\"3\""));
    }
}
