//! Choice lists: the accessor surface a form-rendering layer consumes.

mod object;
mod policy;


pub use object::{GroupFn, ObjectChoiceList};
pub use policy::IndexPolicy;

use crate::{
    error::ChoiceError,
    value::{ChoiceIndex, ChoiceValue},
    view::ViewPartition,
};

///
/// ChoiceList
///
/// Selectable choices for one form field. All accessors are fallible:
/// implementations may defer a persistence fetch until first use, so any
/// accessor can surface a load failure.
///
/// Lookup accessors return only matches; supplied values or choices with no
/// counterpart in the list are omitted, not errors.
///

pub trait ChoiceList<T> {
    /// The underlying choices, in list order.
    fn choices(&self) -> Result<Vec<T>, ChoiceError>;

    /// The submission values, in list order.
    fn values(&self) -> Result<Vec<ChoiceValue>, ChoiceError>;

    /// Views for the preferred partition.
    fn preferred_views(&self) -> Result<ViewPartition, ChoiceError>;

    /// Views for everything not preferred.
    fn remaining_views(&self) -> Result<ViewPartition, ChoiceError>;

    /// The choices bound to the given submission values.
    fn choices_for_values(&self, values: &[ChoiceValue]) -> Result<Vec<T>, ChoiceError>;

    /// The submission values of the given choices.
    fn values_for_choices(&self, choices: &[T]) -> Result<Vec<ChoiceValue>, ChoiceError>;

    /// The list indices of the given choices.
    fn indices_for_choices(&self, choices: &[T]) -> Result<Vec<ChoiceIndex>, ChoiceError>;

    /// The list indices bound to the given submission values.
    fn indices_for_values(&self, values: &[ChoiceValue]) -> Result<Vec<ChoiceIndex>, ChoiceError>;
}
