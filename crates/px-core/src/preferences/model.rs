use std::fmt;

use serde::{Deserialize, Serialize};

/// Color scheme applied to the rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Decodes a stored value. Anything but `"light"` or `"dark"` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User preferences persisted across restarts.
///
/// Each field is stored as an independent scalar entry. A missing or
/// unreadable entry decodes to the field's default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub biometric_enabled: bool,
}

impl Preferences {
    /// Builds preferences from raw stored values.
    pub fn from_stored(theme: Option<&str>, biometric_enabled: Option<&str>) -> Self {
        Self {
            theme: theme.and_then(ThemeMode::parse).unwrap_or_default(),
            biometric_enabled: biometric_enabled.and_then(decode_bool).unwrap_or(false),
        }
    }
}

pub fn encode_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub fn decode_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_decode_to_defaults() {
        let prefs = Preferences::from_stored(None, None);
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert!(!prefs.biometric_enabled);
    }

    #[test]
    fn unknown_values_decode_to_defaults() {
        let prefs = Preferences::from_stored(Some("sepia"), Some("yes"));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn stored_values_are_decoded() {
        let prefs = Preferences::from_stored(Some("dark"), Some("true"));
        assert_eq!(prefs.theme, ThemeMode::Dark);
        assert!(prefs.biometric_enabled);
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn theme_serializes_as_snake_case() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
