use crate::{
    persist::{EntityIdentity, EntityLoader, MemoryManager, PersistError, PersistenceManager},
    value::Value,
};
use std::cell::Cell;

///
/// CountingManager
///
/// MemoryManager wrapper that counts repository scans and can refuse them,
/// for asserting that fast paths never touch the repository.
///

pub(crate) struct CountingManager<T> {
    inner: MemoryManager<T>,
    find_all_calls: Cell<usize>,
    refuse_fetch: bool,
}

impl<T: EntityIdentity> CountingManager<T> {
    pub(crate) fn new(entities: impl IntoIterator<Item = T>) -> Self {
        Self {
            inner: MemoryManager::new(entities),
            find_all_calls: Cell::new(0),
            refuse_fetch: false,
        }
    }

    /// Fail any repository scan instead of serving it.
    pub(crate) fn refusing_fetch(mut self) -> Self {
        self.refuse_fetch = true;
        self
    }

    pub(crate) fn find_all_calls(&self) -> usize {
        self.find_all_calls.get()
    }
}

impl<T: EntityIdentity + Clone> PersistenceManager for CountingManager<T> {
    type Entity = T;

    fn contains(&self, entity: &T) -> bool {
        self.inner.contains(entity)
    }

    fn find_all(&self) -> Result<Vec<T>, PersistError> {
        if self.refuse_fetch {
            return Err(PersistError::Backend {
                message: "unexpected repository scan".to_owned(),
            });
        }
        self.find_all_calls.set(self.find_all_calls.get() + 1);

        self.inner.find_all()
    }
}

///
/// CountingLoader
///
/// MemoryManager-backed loader that counts both fetch shapes.
///

pub(crate) struct CountingLoader<T> {
    inner: MemoryManager<T>,
    entities_calls: Cell<usize>,
    by_ids_calls: Cell<usize>,
}

impl<T: EntityIdentity> CountingLoader<T> {
    pub(crate) fn new(entities: impl IntoIterator<Item = T>) -> Self {
        Self {
            inner: MemoryManager::new(entities),
            entities_calls: Cell::new(0),
            by_ids_calls: Cell::new(0),
        }
    }

    pub(crate) fn entities_calls(&self) -> usize {
        self.entities_calls.get()
    }

    pub(crate) fn by_ids_calls(&self) -> usize {
        self.by_ids_calls.get()
    }
}

impl<T: EntityIdentity + Clone> EntityLoader for CountingLoader<T> {
    type Entity = T;

    fn entities(&self) -> Result<Vec<T>, PersistError> {
        self.entities_calls.set(self.entities_calls.get() + 1);

        self.inner.entities()
    }

    fn entities_by_ids(&self, field: &str, values: &[Value]) -> Result<Vec<T>, PersistError> {
        self.by_ids_calls.set(self.by_ids_calls.get() + 1);

        self.inner.entities_by_ids(field, values)
    }
}
