//! Lazily-loaded choice list over persisted entities.
//!
//! Invariants:
//! - `loaded` transitions once, from false to true; it never reverts.
//! - The identifier descriptor is read once at construction and never
//!   mutated.
//! - Instances are request-scoped and single-threaded; interior mutability
//!   is unsynchronized on purpose.


use crate::{
    error::ChoiceError,
    label::Labeler,
    list::{ChoiceList, GroupFn, IndexPolicy, ObjectChoiceList},
    persist::{EntityIdentity, EntityLoader, PersistenceManager},
    value::{ChoiceIndex, ChoiceValue, Value},
    view::ViewPartition,
};
use std::cell::{Cell, RefCell};
use tracing::{debug, trace};

///
/// EntityChoiceList
///
/// Choice list whose choices are entities fetched from a persistence layer.
/// The fetch is deferred until an accessor actually needs live data; lookups
/// that can be answered from a single identifier field alone never fetch.
///

pub struct EntityChoiceList<T, M>
where
    T: EntityIdentity,
    M: PersistenceManager<Entity = T>,
{
    manager: M,
    loader: Option<Box<dyn EntityLoader<Entity = T>>>,
    id_fields: &'static [&'static str],
    single_id: bool,
    loaded: Cell<bool>,
    list: RefCell<ObjectChoiceList<T>>,
}

impl<T, M> EntityChoiceList<T, M>
where
    T: EntityIdentity,
    M: PersistenceManager<Entity = T>,
{
    pub fn builder(manager: M, labeler: Labeler<T>) -> EntityChoiceListBuilder<T, M> {
        EntityChoiceListBuilder {
            manager,
            labeler,
            loader: None,
            entities: None,
            preferred: None,
            group_by: None,
        }
    }

    /// Whether the entity collection has been fetched (or was supplied at
    /// construction).
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    fn ensure_loaded(&self) -> Result<(), ChoiceError> {
        if self.loaded.get() {
            return Ok(());
        }

        self.load()
    }

    fn load(&self) -> Result<(), ChoiceError> {
        debug!(
            entity = T::ENTITY_NAME,
            via_loader = self.loader.is_some(),
            "loading entity choices"
        );

        let entities = match &self.loader {
            Some(loader) => loader.entities()?,
            None => self.manager.find_all()?,
        };

        self.list
            .borrow_mut()
            .initialize(entities)
            .map_err(|err| match err {
                // Reword against the adapter's own configuration surface;
                // the original cast failure stays attached as the cause.
                ChoiceError::Label(source) => ChoiceError::EntityLabel { source },
                other => other,
            })?;
        self.loaded.set(true);

        Ok(())
    }

    /// Ordered identifier values for `entity`.
    ///
    /// Fast paths call this without loading, so nothing here checks that
    /// the result exists in the full choice set.
    fn identifier_values(&self, entity: &T) -> Result<Vec<Value>, ChoiceError> {
        if !self.manager.contains(entity) {
            return Err(ChoiceError::UnmanagedEntity {
                entity: T::ENTITY_NAME,
            });
        }
        self.manager.initialize_object(entity)?;

        Ok(entity.identifier_values())
    }

    fn single_id_value(&self, entity: &T) -> Result<Option<Value>, ChoiceError> {
        Ok(self.identifier_values(entity)?.into_iter().next())
    }
}

impl<T, M> ChoiceList<T> for EntityChoiceList<T, M>
where
    T: EntityIdentity + Clone + PartialEq,
    M: PersistenceManager<Entity = T>,
{
    fn choices(&self) -> Result<Vec<T>, ChoiceError> {
        self.ensure_loaded()?;
        self.list.borrow().choices()
    }

    fn values(&self) -> Result<Vec<ChoiceValue>, ChoiceError> {
        self.ensure_loaded()?;
        self.list.borrow().values()
    }

    fn preferred_views(&self) -> Result<ViewPartition, ChoiceError> {
        self.ensure_loaded()?;
        self.list.borrow().preferred_views()
    }

    fn remaining_views(&self) -> Result<ViewPartition, ChoiceError> {
        self.ensure_loaded()?;
        self.list.borrow().remaining_views()
    }

    fn choices_for_values(&self, values: &[ChoiceValue]) -> Result<Vec<T>, ChoiceError> {
        if self.single_id
            && let Some(loader) = &self.loader
        {
            trace!(entity = T::ENTITY_NAME, "by-id fetch without load");
            let ids: Vec<Value> = values
                .iter()
                .map(|value| Value::from(value.as_str()))
                .collect();

            return Ok(loader.entities_by_ids(self.id_fields[0], &ids)?);
        }

        self.ensure_loaded()?;
        self.list.borrow().choices_for_values(values)
    }

    /// With a single-field identifier this reads identifier values directly
    /// and does not verify they exist in the (unloaded) full set.
    fn values_for_choices(&self, choices: &[T]) -> Result<Vec<ChoiceValue>, ChoiceError> {
        if self.single_id {
            trace!(entity = T::ENTITY_NAME, "identifier values without load");
            let mut found = Vec::with_capacity(choices.len());
            for entity in choices {
                if let Some(id) = self.single_id_value(entity)? {
                    found.push(ChoiceValue::from(&id));
                }
            }

            return Ok(found);
        }

        self.ensure_loaded()?;
        self.list.borrow().values_for_choices(choices)
    }

    /// Same fast-path shape and caveats as `values_for_choices`.
    fn indices_for_choices(&self, choices: &[T]) -> Result<Vec<ChoiceIndex>, ChoiceError> {
        if self.single_id {
            trace!(entity = T::ENTITY_NAME, "identifier indices without load");
            let mut found = Vec::with_capacity(choices.len());
            for entity in choices {
                if let Some(id) = self.single_id_value(entity)? {
                    found.push(ChoiceIndex::from(&id));
                }
            }

            return Ok(found);
        }

        self.ensure_loaded()?;
        self.list.borrow().indices_for_choices(choices)
    }

    /// With a single-field identifier, values are their own indices modulo
    /// normalization; existence is not verified.
    fn indices_for_values(&self, values: &[ChoiceValue]) -> Result<Vec<ChoiceIndex>, ChoiceError> {
        if self.single_id {
            return Ok(values.iter().map(ChoiceIndex::from).collect());
        }

        self.ensure_loaded()?;
        self.list.borrow().indices_for_values(values)
    }
}

impl<T, M> std::fmt::Debug for EntityChoiceList<T, M>
where
    T: EntityIdentity,
    M: PersistenceManager<Entity = T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityChoiceList")
            .field("entity", &T::ENTITY_NAME)
            .field("id_fields", &self.id_fields)
            .field("loaded", &self.loaded.get())
            .finish_non_exhaustive()
    }
}

///
/// EntityChoiceListBuilder
///

pub struct EntityChoiceListBuilder<T, M>
where
    T: EntityIdentity,
    M: PersistenceManager<Entity = T>,
{
    manager: M,
    labeler: Labeler<T>,
    loader: Option<Box<dyn EntityLoader<Entity = T>>>,
    entities: Option<Vec<T>>,
    preferred: Option<Box<dyn Fn(&T) -> bool>>,
    group_by: Option<GroupFn<T>>,
}

impl<T, M> EntityChoiceListBuilder<T, M>
where
    T: EntityIdentity,
    M: PersistenceManager<Entity = T>,
{
    /// Fetch through this loader instead of a repository scan.
    #[must_use]
    pub fn loader(mut self, loader: impl EntityLoader<Entity = T> + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Supply the entity collection directly; the list is loaded immediately
    /// and never fetches.
    #[must_use]
    pub fn entities(mut self, entities: Vec<T>) -> Self {
        self.entities = Some(entities);
        self
    }

    /// Mark matching entities as preferred; they render in their own
    /// partition ahead of the rest.
    #[must_use]
    pub fn preferred(mut self, preferred: impl Fn(&T) -> bool + 'static) -> Self {
        self.preferred = Some(Box::new(preferred));
        self
    }

    /// Group views under the returned group label.
    #[must_use]
    pub fn group_by(mut self, group_by: impl Fn(&T) -> Option<String> + 'static) -> Self {
        self.group_by = Some(Box::new(group_by));
        self
    }

    pub fn build(self) -> Result<EntityChoiceList<T, M>, ChoiceError> {
        let policy = IndexPolicy::for_entity::<T>();
        let mut list = ObjectChoiceList::empty(self.labeler, policy, self.preferred, self.group_by);

        let loaded = match self.entities {
            Some(entities) => {
                list.initialize(entities)?;
                true
            }
            None => false,
        };

        Ok(EntityChoiceList {
            manager: self.manager,
            loader: self.loader,
            id_fields: T::ID_FIELDS,
            single_id: T::ID_FIELDS.len() == 1,
            loaded: Cell::new(loaded),
            list: RefCell::new(list),
        })
    }
}
