//! Configuration loading.
//!
//! Pure data loading: read the file, parse TOML, map onto `AppConfig`.
//! Defaults for missing keys live in `AppConfig::from_toml`.

use anyhow::Context;
use std::path::PathBuf;
use tracing::{debug, info};
use px_app::app_paths::AppPaths;
use px_core::{config::AppConfig, ports::AppDirsPort};
use px_platform::app_dirs::DirsAppDirsAdapter;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML, or if a
/// value cannot be mapped (unknown biometric backend).
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

/// Picks the configuration source.
///
/// An explicit path must load. Otherwise `config.toml` in the app data
/// directory is used when present, and defaults when it is not.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading config");
        return load_config(path);
    }

    let default_path = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .ok()
        .map(|dirs| AppPaths::from_app_dirs(&dirs).config_path);

    match default_path {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "loading config");
            load_config(path)
        }
        _ => {
            debug!("no config file, using defaults");
            Ok(AppConfig::default())
        }
    }
}
