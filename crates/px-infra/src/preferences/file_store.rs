use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::{fs, sync::Mutex};
use tracing::{debug, warn};
use px_core::{
    ports::{PreferenceStorePort, StorageError},
    preferences::PreferenceKey,
};

pub const DEFAULT_PREFERENCES_FILE: &str = "preferences.json";

/// Preference store backed by a single JSON object file.
///
/// Every entry is a string value keyed by its storage name:
///
/// ```json
/// { "theme": "dark", "biometricEnabled": "true" }
/// ```
///
/// Writes are serialized: each `set` holds `write_lock` from the read of the
/// current entries through the rename of the temp file.
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    /// Creates a store that reads and writes the given file.
    ///
    /// # Examples
    ///
    /// ```
    /// use px_infra::FilePreferenceStore;
    ///
    /// let store = FilePreferenceStore::new("config/preferences.json");
    /// assert!(store.path().ends_with("preferences.json"));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create store with base dir and the default file name
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create preferences dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Reads all entries. A missing or empty file has no entries.
    ///
    /// Non-string values are skipped.
    async fn read_entries(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read preferences failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        let mut entries: Map<String, Value> = serde_json::from_str(&content)
            .with_context(|| format!("parse preferences failed: {}", self.path.display()))?;
        entries.retain(|_, value| value.is_string());
        Ok(entries)
    }

    /// Writes the content to a temporary sibling file, then renames it over
    /// the target so readers see either the old or the new file.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp preferences failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp preferences to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl PreferenceStorePort for FilePreferenceStore {
    async fn get(&self, key: PreferenceKey) -> Option<String> {
        match self.read_entries().await {
            Ok(entries) => entries
                .get(key.as_str())
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(err) => {
                warn!(key = %key, error = %err, "preference read failed");
                None
            }
        }
    }

    async fn set(&self, key: PreferenceKey, value: &str) -> Result<(), StorageError> {
        let _write_guard = self.write_lock.lock().await;
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    error = %err,
                    "existing preferences unreadable, rewriting file"
                );
                Map::new()
            }
        };
        entries.insert(key.as_str().to_string(), Value::String(value.to_string()));

        let content = serde_json::to_string_pretty(&entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.atomic_write(&content)
            .await
            .map_err(|e| StorageError::Io(format!("{e:#}")))?;

        debug!(key = %key, value, "preference persisted");
        Ok(())
    }
}
