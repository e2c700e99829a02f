//! User Registry
//!
//! An in-process collection of user records with support for:
//! - Ordered insertion without id validation
//! - Exact-match username/password login
//! - Deletion delegated to a pluggable record store
//! - Strict id-keyed indexing that rejects duplicate ids

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use domain::{RecordStore, RegistryError, UserRecord};
pub use infrastructure::user::{InMemoryRecordStore, SharedUserRegistry, UserRegistry};

use std::sync::Arc;

use crate::config::RegistryConfig;
use tracing::info;

/// Build a registry seeded from configuration
///
/// When the store is enabled it starts out knowing every seeded id.
pub fn create_registry(config: &RegistryConfig) -> UserRegistry {
    let store: Option<Arc<dyn RecordStore>> = if config.store_enabled {
        let ids = config.users.iter().map(UserRecord::id);
        Some(Arc::new(InMemoryRecordStore::with_ids(ids)))
    } else {
        info!("Record store disabled, delete will be unavailable");
        None
    };

    let mut registry = UserRegistry::with_store(store);
    registry.add(config.users.iter().cloned());

    info!("Registry seeded with {} users", registry.len());
    registry
}

/// Build a lock-guarded registry seeded from configuration
pub fn create_shared_registry(config: &RegistryConfig) -> SharedUserRegistry {
    SharedUserRegistry::new(create_registry(config))
}
