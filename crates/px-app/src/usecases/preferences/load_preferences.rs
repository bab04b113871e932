//! Use case for reading persisted preferences

use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use px_core::{
    ports::PreferenceStorePort,
    preferences::{PreferenceKey, Preferences},
};

/// Reads preference entries and substitutes defaults.
///
/// ## Behavior
/// - A missing, unreadable or unrecognized entry yields its default
///   (`light`, `false`); nothing is ever surfaced as an error
/// - Every call goes to the store; callers cache the result
pub struct LoadPreferences {
    store: Arc<dyn PreferenceStorePort>,
}

impl LoadPreferences {
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Preferences {
        let span = info_span!("usecase.load_preferences.execute");

        async {
            let theme = self.store.get(PreferenceKey::Theme).await;
            let biometric_enabled = self.store.get(PreferenceKey::BiometricEnabled).await;
            let preferences =
                Preferences::from_stored(theme.as_deref(), biometric_enabled.as_deref());
            info!(
                theme = %preferences.theme,
                biometric_enabled = preferences.biometric_enabled,
                "preferences loaded"
            );
            preferences
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use px_core::{ports::StorageError, preferences::ThemeMode};
    use std::collections::HashMap;

    struct MapStore(HashMap<PreferenceKey, String>);

    #[async_trait]
    impl PreferenceStorePort for MapStore {
        async fn get(&self, key: PreferenceKey) -> Option<String> {
            self.0.get(&key).cloned()
        }

        async fn set(&self, _key: PreferenceKey, _value: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn usecase(entries: &[(PreferenceKey, &str)]) -> LoadPreferences {
        let map = entries
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect();
        LoadPreferences::new(Arc::new(MapStore(map)))
    }

    #[tokio::test]
    async fn empty_store_yields_defaults() {
        let preferences = usecase(&[]).execute().await;

        assert_eq!(preferences, Preferences::default());
    }

    #[tokio::test]
    async fn stored_entries_are_decoded() {
        let preferences = usecase(&[
            (PreferenceKey::Theme, "dark"),
            (PreferenceKey::BiometricEnabled, "true"),
        ])
        .execute()
        .await;

        assert_eq!(preferences.theme, ThemeMode::Dark);
        assert!(preferences.biometric_enabled);
    }

    #[tokio::test]
    async fn garbage_entries_fall_back_to_defaults() {
        let preferences = usecase(&[
            (PreferenceKey::Theme, "DARK"),
            (PreferenceKey::BiometricEnabled, "1"),
        ])
        .execute()
        .await;

        assert_eq!(preferences, Preferences::default());
    }
}
