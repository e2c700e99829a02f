//! Lock-guarded registry handle for concurrent callers

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::registry::UserRegistry;
use crate::domain::{RegistryError, UserRecord};

/// Cloneable handle serializing access to a [`UserRegistry`]
///
/// Readers share the lock; `add` takes it exclusively so each batch lands
/// contiguously. Results are returned as owned copies.
#[derive(Debug, Clone)]
pub struct SharedUserRegistry {
    inner: Arc<RwLock<UserRegistry>>,
}

impl SharedUserRegistry {
    pub fn new(registry: UserRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub async fn add<I>(&self, records: I)
    where
        I: IntoIterator<Item = UserRecord>,
    {
        let records: Vec<UserRecord> = records.into_iter().collect();
        debug!(count = records.len(), "Adding user records");

        self.inner.write().await.add(records);
    }

    /// Snapshot of all records in insertion order
    pub async fn list(&self) -> Vec<UserRecord> {
        self.inner.read().await.list().to_vec()
    }

    pub async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<UserRecord>, RegistryError> {
        let registry = self.inner.read().await;
        Ok(registry.login(username, password)?.cloned())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, RegistryError> {
        self.inner.read().await.delete(id)
    }

    pub async fn index_by_id(&self) -> Result<HashMap<i32, UserRecord>, RegistryError> {
        let registry = self.inner.read().await;
        let index = registry.index_by_id()?;

        Ok(index
            .into_iter()
            .map(|(id, user)| (id, user.clone()))
            .collect())
    }
}
