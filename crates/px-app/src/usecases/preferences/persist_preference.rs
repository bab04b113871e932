//! Use case for writing a preference entry

use std::sync::Arc;

use tracing::{debug, warn};
use px_core::{ports::PreferenceStorePort, preferences::PreferenceKey};

/// Best-effort preference write.
///
/// A failed write is logged and reported as `false`; the caller keeps the
/// in-memory value for the session and a restart may lose it.
pub struct PersistPreference {
    store: Arc<dyn PreferenceStorePort>,
}

impl PersistPreference {
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, key: PreferenceKey, value: &str) -> bool {
        match self.store.set(key, value).await {
            Ok(()) => {
                debug!(key = %key, value, "preference saved");
                true
            }
            Err(err) => {
                warn!(key = %key, value, error = %err, "preference write failed, keeping in-memory value");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use px_core::ports::StorageError;

    struct BrokenStore;

    #[async_trait]
    impl PreferenceStorePort for BrokenStore {
        async fn get(&self, _key: PreferenceKey) -> Option<String> {
            None
        }

        async fn set(&self, _key: PreferenceKey, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn write_failure_is_reported_not_raised() {
        let usecase = PersistPreference::new(Arc::new(BrokenStore));

        assert!(!usecase.execute(PreferenceKey::Theme, "dark").await);
    }
}
