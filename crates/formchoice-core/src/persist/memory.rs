use crate::{
    persist::{EntityIdentity, EntityLoader, PersistError, PersistenceManager},
    value::Value,
};
use indexmap::IndexMap;

///
/// MemoryManager
///
/// In-memory persistence manager: an ordered identity map keyed by the
/// canonical text form of an entity's identifier values. Doubles as an
/// `EntityLoader` over the same map.
///

#[derive(Debug, Default)]
pub struct MemoryManager<T> {
    entities: IndexMap<String, T>,
}

impl<T: EntityIdentity> MemoryManager<T> {
    #[must_use]
    pub fn new(entities: impl IntoIterator<Item = T>) -> Self {
        let mut manager = Self {
            entities: IndexMap::new(),
        };
        for entity in entities {
            manager.insert(entity);
        }

        manager
    }

    /// Track an entity. Re-inserting an identifier replaces the entity but
    /// keeps its original position.
    pub fn insert(&mut self, entity: T) {
        self.entities.insert(Self::identity_key(&entity), entity);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn identity_key(entity: &T) -> String {
        let parts: Vec<String> = entity
            .identifier_values()
            .iter()
            .map(Value::to_string)
            .collect();

        parts.join(":")
    }

    fn id_field_position(field: &str) -> Result<usize, PersistError> {
        T::ID_FIELDS
            .iter()
            .position(|candidate| *candidate == field)
            .ok_or_else(|| PersistError::UnknownIdField {
                entity: T::ENTITY_NAME,
                field: field.to_owned(),
            })
    }
}

impl<T: EntityIdentity + Clone> PersistenceManager for MemoryManager<T> {
    type Entity = T;

    fn contains(&self, entity: &T) -> bool {
        self.entities.contains_key(&Self::identity_key(entity))
    }

    fn find_all(&self) -> Result<Vec<T>, PersistError> {
        Ok(self.entities.values().cloned().collect())
    }
}

impl<T: EntityIdentity + Clone> EntityLoader for MemoryManager<T> {
    type Entity = T;

    fn entities(&self) -> Result<Vec<T>, PersistError> {
        self.find_all()
    }

    // Values usually arrive as form submissions, so matching is by the
    // canonical text form rather than by value variant.
    fn entities_by_ids(&self, field: &str, values: &[Value]) -> Result<Vec<T>, PersistError> {
        let position = Self::id_field_position(field)?;

        let mut found = Vec::with_capacity(values.len());
        for value in values {
            let wanted = value.to_string();
            let hit = self.entities.values().find(|entity| {
                entity
                    .identifier_values()
                    .get(position)
                    .is_some_and(|id| id.to_string() == wanted)
            });
            if let Some(entity) = hit {
                found.push(entity.clone());
            }
        }

        Ok(found)
    }
}

///
/// TESTS
///
