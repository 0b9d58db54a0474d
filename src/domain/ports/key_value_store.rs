//! Token storage port

use async_trait::async_trait;

use super::errors::StorageError;

/// Persistent string key-value storage
///
/// Writes to the same key from concurrent callers are last-write-wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` if present
    /// * `Ok(None)` if nothing is stored under `key`
    /// * `Err(StorageError)` on backend failure
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
