//! User record entity

use serde::{Deserialize, Serialize};

/// Immutable user record: identifier, username and password
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    id: i32,
    username: String,
    password: String,
}

impl UserRecord {
    /// Create a new user record
    pub fn new(id: i32, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Check whether both credentials match exactly
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
