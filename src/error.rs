use thiserror::Error;

/// Returned by lookups and removals when no entry matches the key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("key '{key}' does not exist in the hash table")]
pub struct KeyNotFound {
    key: String,
}

impl KeyNotFound {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The key that was looked up.
    pub fn key(&self) -> &str {
        &self.key
    }
}

pub type Result<T, E = KeyNotFound> = core::result::Result<T, E>;
