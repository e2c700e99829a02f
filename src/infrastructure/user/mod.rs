//! User infrastructure module
//!
//! This module provides the in-memory user registry, a lock-guarded handle
//! for concurrent callers, and an in-memory record store.

mod in_memory_store;
mod registry;
mod shared;

pub use in_memory_store::InMemoryRecordStore;
pub use registry::UserRegistry;
pub use shared::SharedUserRegistry;
