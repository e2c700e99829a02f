//! Infrastructure layer - Registry, record store and logging implementations

pub mod logging;
pub mod user;
