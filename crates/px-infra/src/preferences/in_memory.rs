use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;
use px_core::{
    ports::{PreferenceStorePort, StorageError},
    preferences::PreferenceKey,
};

/// Process-local preference store.
///
/// Used when no data directory is available and as a test double. Writes can
/// be made to fail to exercise best-effort persistence.
pub struct InMemoryPreferenceStore {
    entries: RwLock<HashMap<PreferenceKey, String>>,
    fail_writes: AtomicBool,
    write_count: AtomicUsize,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
            write_count: AtomicUsize::new(0),
        }
    }

    /// Seeds the store with existing entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (PreferenceKey, &'a str)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect();
        Self {
            entries: RwLock::new(entries),
            ..Self::new()
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.write_count.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStorePort for InMemoryPreferenceStore {
    async fn get(&self, key: PreferenceKey) -> Option<String> {
        self.entries.read().await.get(&key).cloned()
    }

    async fn set(&self, key: PreferenceKey, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io(format!("write rejected for {key}")));
        }
        self.entries.write().await.insert(key, value.to_string());
        self.write_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_entries_are_readable() {
        let store = InMemoryPreferenceStore::with_entries([(PreferenceKey::Theme, "dark")]);

        assert_eq!(store.get(PreferenceKey::Theme).await.as_deref(), Some("dark"));
        assert_eq!(store.get(PreferenceKey::BiometricEnabled).await, None);
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn failing_writes_leave_entries_untouched() {
        let store = InMemoryPreferenceStore::new();
        store.set_fail_writes(true);

        let err = store.set(PreferenceKey::Theme, "dark").await.unwrap_err();

        assert!(matches!(err, StorageError::Io(_)));
        assert_eq!(store.get(PreferenceKey::Theme).await, None);
        assert_eq!(store.write_count(), 0);
    }
}
