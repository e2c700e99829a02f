//! Domain layer - Core types and traits

pub mod error;
pub mod user;

pub use error::RegistryError;
pub use user::{RecordStore, UserRecord};
