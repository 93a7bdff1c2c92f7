use crate::{
    persist::EntityIdentity,
    value::{ChoiceIndex, ChoiceValue, Value},
};

///
/// IndexPolicy
///
/// How a list derives the index and submission value for one entity.
/// Selected at construction, never switched afterwards.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum IndexPolicy {
    /// Use the entity's single identifier field value directly.
    IdentifierField,

    /// Position-based synthetic indices, for composite identifiers.
    #[default]
    SyntheticCounter,
}

impl IndexPolicy {
    /// The policy an entity type's identifier shape calls for.
    #[must_use]
    pub fn for_entity<T: EntityIdentity>() -> Self {
        if T::ID_FIELDS.len() == 1 {
            Self::IdentifierField
        } else {
            Self::SyntheticCounter
        }
    }

    pub(crate) fn index_for<T: EntityIdentity>(self, entity: &T, position: usize) -> ChoiceIndex {
        match (self, single_id_value(entity)) {
            (Self::IdentifierField, Some(id)) => ChoiceIndex::from(&id),
            _ => ChoiceIndex::synthetic(position),
        }
    }

    pub(crate) fn value_for<T: EntityIdentity>(self, entity: &T, position: usize) -> ChoiceValue {
        match (self, single_id_value(entity)) {
            (Self::IdentifierField, Some(id)) => ChoiceValue::from(&id),
            _ => ChoiceValue::new(position.to_string()),
        }
    }
}

fn single_id_value<T: EntityIdentity>(entity: &T) -> Option<Value> {
    entity.identifier_values().into_iter().next()
}
