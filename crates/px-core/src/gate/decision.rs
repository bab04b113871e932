use serde::Serialize;

use crate::gate::state::{GatePhase, GateState};
use crate::session::SessionSnapshot;

/// What the rendering layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Preferences or the session are still resolving.
    Loading,
    /// No session user: login / signup surface.
    SignIn,
    /// Session present, biometric check owed. Offers a manual unlock trigger.
    Locked,
    /// Main application.
    App,
}

impl AccessDecision {
    /// Session presence is checked before biometric state, so an
    /// unauthenticated user never sees the lock screen.
    pub fn resolve(session: &SessionSnapshot, gate: &GateState) -> Self {
        if !gate.preferences_loaded || session.loading {
            return AccessDecision::Loading;
        }
        if !session.has_user() {
            return AccessDecision::SignIn;
        }
        match gate.phase {
            GatePhase::Unlocked | GatePhase::Bypassed => AccessDecision::App,
            GatePhase::Locked | GatePhase::PreferencesLoaded => AccessDecision::Locked,
            GatePhase::Initializing => AccessDecision::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserRef;

    fn gate(phase: GatePhase) -> GateState {
        GateState {
            phase,
            preferences_loaded: phase != GatePhase::Initializing,
            biometric_enabled: true,
            session_user: None,
        }
    }

    fn signed_in() -> SessionSnapshot {
        SessionSnapshot::signed_in(UserRef::new("user-1"))
    }

    #[test]
    fn loading_while_preferences_or_session_resolve() {
        assert_eq!(
            AccessDecision::resolve(&signed_in(), &gate(GatePhase::Initializing)),
            AccessDecision::Loading
        );
        assert_eq!(
            AccessDecision::resolve(&SessionSnapshot::resolving(), &gate(GatePhase::Unlocked)),
            AccessDecision::Loading
        );
    }

    #[test]
    fn sign_in_takes_precedence_over_lock() {
        assert_eq!(
            AccessDecision::resolve(&SessionSnapshot::signed_out(), &gate(GatePhase::Locked)),
            AccessDecision::SignIn
        );
    }

    #[test]
    fn locked_and_pending_show_lock_screen() {
        assert_eq!(
            AccessDecision::resolve(&signed_in(), &gate(GatePhase::Locked)),
            AccessDecision::Locked
        );
        assert_eq!(
            AccessDecision::resolve(&signed_in(), &gate(GatePhase::PreferencesLoaded)),
            AccessDecision::Locked
        );
    }

    #[test]
    fn app_only_when_unlocked_or_bypassed() {
        assert_eq!(
            AccessDecision::resolve(&signed_in(), &gate(GatePhase::Unlocked)),
            AccessDecision::App
        );
        assert_eq!(
            AccessDecision::resolve(&signed_in(), &gate(GatePhase::Bypassed)),
            AccessDecision::App
        );
    }
}
