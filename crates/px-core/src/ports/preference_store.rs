use async_trait::async_trait;

use crate::ports::errors::StorageError;
use crate::preferences::PreferenceKey;

/// Durable key-value storage for preference entries.
///
/// Implementations keep no cache: every `get` goes to the backing store and a
/// value written by `set` is visible to the next `get` once `set` returns.
#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    /// Read an entry. Read failures are swallowed and reported as `None`.
    async fn get(&self, key: PreferenceKey) -> Option<String>;

    /// Write an entry durably.
    async fn set(&self, key: PreferenceKey, value: &str) -> Result<(), StorageError>;
}

