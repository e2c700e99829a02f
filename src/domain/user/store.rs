//! Record store trait

use crate::domain::RegistryError;

#[cfg(test)]
use mockall::automock;

/// External store backing persistent deletion of user records
#[cfg_attr(test, automock)]
pub trait RecordStore: Send + Sync {
    /// Removes the record with the given id, returns true if it was removed
    fn delete(&self, id: i32) -> Result<bool, RegistryError>;
}
