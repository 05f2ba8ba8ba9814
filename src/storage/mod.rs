// ABOUTME: Key-value storage abstraction for persisting the recipe collection
// ABOUTME: Pluggable backend support (in-memory, file-per-key) behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Storage factory for configuration-based backend selection
pub mod factory;
/// File-per-key storage implementation
pub mod file;
/// In-memory storage implementation
pub mod memory;

pub use factory::Storage;
pub use file::FileStore;
pub use memory::InMemoryStore;

use recipe_core::errors::{AppError, AppResult};

/// String key-value store the recipe collection is persisted into
///
/// Mirrors browser local storage: values are opaque strings and a missing key
/// is `Ok(None)`, never an error.
///
/// # Examples
///
/// ```rust,no_run
/// use recipe_box::storage::{InMemoryStore, KeyValueStore};
/// # async fn example() -> recipe_core::errors::AppResult<()> {
/// let store = InMemoryStore::new();
/// store.set("recipes", "[]").await?;
/// assert_eq!(store.get("recipes").await?.as_deref(), Some("[]"));
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`; removing an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Reject keys that cannot be used as a file name on every platform
///
/// # Errors
///
/// Returns an invalid-input error for empty keys or keys containing anything
/// other than ASCII alphanumerics, `-`, and `_`
pub fn validate_key(key: &str) -> AppResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "invalid storage key '{key}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_key;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("recipes").is_ok());
        assert!(validate_key("recipes_v2-backup").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a b").is_err());
    }
}
