//! Application configuration domain model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::biometric::VerificationPrompt;

pub const DEFAULT_UNLOCK_PROMPT: &str = "Unlock ProXplore";
pub const DEFAULT_FALLBACK_LABEL: &str = "Use Passcode";
pub const DEFAULT_ENABLE_PROMPT: &str = "Verify identity to enable biometric lock";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Preference file location. `None` uses the platform data directory.
    pub preferences_path: Option<PathBuf>,

    /// Biometric adapter settings
    pub biometric: BiometricConfig,
}

/// Which platform biometric service backs the adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiometricBackend {
    /// fprintd over its command line tools (Linux).
    #[default]
    Fprintd,
    /// No biometric hardware.
    None,
}

impl BiometricBackend {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "fprintd" => Ok(BiometricBackend::Fprintd),
            "none" => Ok(BiometricBackend::None),
            other => Err(anyhow::anyhow!("unknown biometric backend: {other}")),
        }
    }
}

/// Biometric configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometricConfig {
    pub backend: BiometricBackend,

    /// Account whose enrolled fingerprints are used. `None` means the OS user.
    pub user: Option<String>,

    pub unlock_prompt: String,
    pub fallback_label: Option<String>,
    pub enable_prompt: String,
}

impl BiometricConfig {
    /// Prompt shown when unlocking the app.
    pub fn unlock_prompt(&self) -> VerificationPrompt {
        let prompt = VerificationPrompt::new(self.unlock_prompt.clone());
        match &self.fallback_label {
            Some(label) => prompt.with_fallback_label(label.clone()),
            None => prompt,
        }
    }

    /// Prompt shown when turning the biometric lock on.
    pub fn enable_prompt(&self) -> VerificationPrompt {
        VerificationPrompt::new(self.enable_prompt.clone())
    }
}

impl Default for BiometricConfig {
    fn default() -> Self {
        Self {
            backend: BiometricBackend::default(),
            user: None,
            unlock_prompt: DEFAULT_UNLOCK_PROMPT.to_string(),
            fallback_label: Some(DEFAULT_FALLBACK_LABEL.to_string()),
            enable_prompt: DEFAULT_ENABLE_PROMPT.to_string(),
        }
    }
}

impl AppConfig {
    /// Maps a parsed TOML document onto the configuration.
    ///
    /// Missing keys keep their defaults; empty strings count as missing.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = BiometricConfig::default();
        let biometric = toml_value.get("biometric");
        let biometric_str = |key: &str| {
            biometric
                .and_then(|b| b.get(key))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let backend = match biometric_str("backend") {
            Some(value) => BiometricBackend::parse(&value)?,
            None => defaults.backend,
        };

        Ok(Self {
            preferences_path: toml_value
                .get("storage")
                .and_then(|s| s.get("preferences_path"))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            biometric: BiometricConfig {
                backend,
                user: biometric_str("user"),
                unlock_prompt: biometric_str("unlock_prompt").unwrap_or(defaults.unlock_prompt),
                fallback_label: biometric_str("fallback_label").or(defaults.fallback_label),
                enable_prompt: biometric_str("enable_prompt").unwrap_or(defaults.enable_prompt),
            },
        })
    }
}
