use px_core::{
    gate::{AccessDecision, GateState},
    preferences::ThemeMode,
    session::SessionSnapshot,
};

/// Observable value published to the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessSnapshot {
    pub theme: ThemeMode,
    pub gate: GateState,
    pub session: SessionSnapshot,
}

impl AccessSnapshot {
    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn is_biometric_enabled(&self) -> bool {
        self.gate.biometric_enabled
    }

    /// Biometric gate passed or bypassed.
    pub fn is_authenticated(&self) -> bool {
        self.gate.unlocked()
    }

    /// Preferences have not been read yet.
    pub fn is_loading(&self) -> bool {
        !self.gate.preferences_loaded
    }

    pub fn decision(&self) -> AccessDecision {
        AccessDecision::resolve(&self.session, &self.gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use px_core::{gate::GatePhase, session::UserRef};

    #[test]
    fn default_snapshot_is_loading() {
        let snapshot = AccessSnapshot::default();

        assert!(snapshot.is_loading());
        assert!(!snapshot.is_authenticated());
        assert!(!snapshot.is_dark_mode());
        assert_eq!(snapshot.decision(), AccessDecision::Loading);
    }

    #[test]
    fn bypassed_gate_with_user_shows_app() {
        let snapshot = AccessSnapshot {
            theme: ThemeMode::Dark,
            gate: GateState {
                phase: GatePhase::Bypassed,
                preferences_loaded: true,
                biometric_enabled: false,
                session_user: Some(UserRef::new("alice")),
            },
            session: SessionSnapshot::signed_in(UserRef::new("alice")),
        };

        assert!(snapshot.is_dark_mode());
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.decision(), AccessDecision::App);
    }
}
