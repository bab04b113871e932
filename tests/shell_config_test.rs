use std::io::Write;

use proxplore_lib::bootstrap::{load_config, resolve_config};
use proxplore_lib::shell::{ShellCommand, HELP};
use px_core::config::{BiometricBackend, DEFAULT_ENABLE_PROMPT};
use tempfile::NamedTempFile;

#[test]
fn shell_config_test_explicit_config_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[biometric]\nbackend = \"none\"\nfallback_label = \"PIN\"\n")
        .unwrap();

    let config = resolve_config(Some(file.path().to_path_buf())).unwrap();

    assert_eq!(config.biometric.backend, BiometricBackend::None);
    assert_eq!(
        config.biometric.unlock_prompt().fallback_label.as_deref(),
        Some("PIN")
    );
    assert_eq!(config.biometric.enable_prompt().message, DEFAULT_ENABLE_PROMPT);
}

#[test]
fn shell_config_test_unknown_backend_names_the_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[biometric]\nbackend = \"retina\"\n").unwrap();

    let err = load_config(file.path().to_path_buf()).unwrap_err();

    assert!(format!("{err:#}").contains("retina"));
    assert!(err.to_string().contains("Invalid config file"));
}

#[test]
fn shell_config_test_help_lists_every_command() {
    for word in ["login", "logout", "unlock", "theme", "biometric", "status", "quit"] {
        assert!(HELP.contains(word), "help is missing {word}");
    }
    assert_eq!(ShellCommand::parse("status").unwrap(), Some(ShellCommand::Status));
}
