//! In-memory record store implementation

use std::collections::HashSet;
use std::sync::Mutex;

use tracing::debug;

use crate::domain::{RecordStore, RegistryError};

/// In-memory implementation of RecordStore tracking a set of known ids
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    ids: Mutex<HashSet<i32>>,
}

impl InMemoryRecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that knows the given ids
    pub fn with_ids(ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            ids: Mutex::new(ids.into_iter().collect()),
        }
    }

    pub fn contains(&self, id: i32) -> Result<bool, RegistryError> {
        Ok(self.lock()?.contains(&id))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashSet<i32>>, RegistryError> {
        self.ids
            .lock()
            .map_err(|_| RegistryError::store("Record store lock poisoned"))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn delete(&self, id: i32) -> Result<bool, RegistryError> {
        let removed = self.lock()?.remove(&id);
        debug!(id, removed, "Record store delete");
        Ok(removed)
    }
}
