use thiserror::Error;

/// Errors raised by the user registry and its record store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Duplicate key: {id}")]
    DuplicateKey { id: i32 },

    #[error("Record store not configured")]
    StoreUnavailable,

    #[error("Store error: {message}")]
    Store { message: String },
}

impl RegistryError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn duplicate_key(id: i32) -> Self {
        Self::DuplicateKey { id }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}
