//! Dependency wiring.
//!
//! The only place that depends on px-infra, px-platform and px-app at once.
//! Assembly only: picks adapters from the configuration and hands them to
//! the gate as ports.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use px_app::{app_paths::AppPaths, AppAccessGate, AppAccessGateDeps, GatePrompts};
use px_core::{
    config::{AppConfig, BiometricBackend, BiometricConfig},
    ports::{AppDirsPort, BiometricPort, PreferenceStorePort, ThemeApplierPort},
};
use px_infra::{FilePreferenceStore, InMemoryPreferenceStore, InMemorySessionProvider};
use px_platform::{
    app_dirs::DirsAppDirsAdapter,
    biometric::{FprintdBiometricAdapter, UnsupportedBiometricAdapter},
};

/// Wired application.
pub struct AppDeps {
    pub gate: Arc<AppAccessGate>,
    /// Stand-in for the external account provider; the shell drives it.
    pub session: Arc<InMemorySessionProvider>,
}

/// Where preferences are stored: the configured file, else the app data
/// directory. `None` when neither is available.
fn preferences_path(config: &AppConfig, app_dirs: &dyn AppDirsPort) -> Option<PathBuf> {
    if let Some(path) = &config.preferences_path {
        return Some(path.clone());
    }
    match app_dirs.get_app_dirs() {
        Ok(dirs) => Some(AppPaths::from_app_dirs(&dirs).preferences_path),
        Err(err) => {
            warn!(error = %err, "no app data directory");
            None
        }
    }
}

fn create_preference_store(
    config: &AppConfig,
    app_dirs: &dyn AppDirsPort,
) -> Arc<dyn PreferenceStorePort> {
    match preferences_path(config, app_dirs) {
        Some(path) => {
            info!(path = %path.display(), "using file preference store");
            Arc::new(FilePreferenceStore::new(path))
        }
        None => {
            warn!("preferences will not survive a restart");
            Arc::new(InMemoryPreferenceStore::new())
        }
    }
}

fn create_biometric(config: &BiometricConfig) -> Arc<dyn BiometricPort> {
    match config.backend {
        BiometricBackend::Fprintd => {
            info!(user = ?config.user, "using fprintd biometric backend");
            Arc::new(FprintdBiometricAdapter::for_user(config.user.clone()))
        }
        BiometricBackend::None => {
            info!("biometric backend disabled");
            Arc::new(UnsupportedBiometricAdapter)
        }
    }
}

pub fn wire_dependencies(
    config: &AppConfig,
    theme_applier: Arc<dyn ThemeApplierPort>,
) -> AppDeps {
    wire_with_app_dirs(config, &DirsAppDirsAdapter::new(), theme_applier)
}

fn wire_with_app_dirs(
    config: &AppConfig,
    app_dirs: &dyn AppDirsPort,
    theme_applier: Arc<dyn ThemeApplierPort>,
) -> AppDeps {
    let session = Arc::new(InMemorySessionProvider::new());

    let gate = AppAccessGate::new(AppAccessGateDeps {
        preferences: create_preference_store(config, app_dirs),
        biometric: create_biometric(&config.biometric),
        session: session.clone(),
        theme_applier,
        prompts: GatePrompts {
            unlock: config.biometric.unlock_prompt(),
            enable: config.biometric.enable_prompt(),
        },
    });

    AppDeps {
        gate: Arc::new(gate),
        session,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use px_core::{gate::GatePhase, preferences::ThemeMode};
    use tempfile::TempDir;

    struct NoopTheme;

    #[async_trait]
    impl ThemeApplierPort for NoopTheme {
        async fn apply(&self, _theme: ThemeMode) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn configured_preferences_path_wins() {
        let config = AppConfig {
            preferences_path: Some(PathBuf::from("/custom/prefs.json")),
            ..AppConfig::default()
        };
        let app_dirs = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/data"));

        assert_eq!(
            preferences_path(&config, &app_dirs),
            Some(PathBuf::from("/custom/prefs.json"))
        );
    }

    #[tokio::test]
    async fn wired_gate_persists_theme_under_app_dir() {
        let temp_dir = TempDir::new().unwrap();
        let app_dirs = DirsAppDirsAdapter::with_base_data_local_dir(temp_dir.path().to_path_buf());
        let config = AppConfig {
            biometric: BiometricConfig {
                backend: BiometricBackend::None,
                ..BiometricConfig::default()
            },
            ..AppConfig::default()
        };

        let deps = wire_with_app_dirs(&config, &app_dirs, Arc::new(NoopTheme));
        let snapshot = deps.gate.initialize().await;
        assert_eq!(snapshot.gate.phase, GatePhase::Bypassed);

        deps.gate.toggle_theme().await;

        let expected = AppPaths::from_app_dirs(&app_dirs.get_app_dirs().unwrap()).preferences_path;
        let raw = std::fs::read_to_string(expected).unwrap();
        assert!(raw.contains("\"theme\": \"dark\""));
    }
}
