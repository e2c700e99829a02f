//! User domain
//!
//! Provides the user record value type and the record store trait the
//! registry delegates deletions to.

mod entity;
mod store;

pub use entity::UserRecord;
pub use store::RecordStore;

#[cfg(test)]
pub use store::MockRecordStore;
