use serde::{Deserialize, Serialize};

use crate::session::UserRef;

/// Lifecycle phase of the access gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatePhase {
    /// Preferences are still being read.
    Initializing,
    /// Biometric lock is enabled and its check has not resolved yet.
    ///
    /// The check starts once a session user is present.
    PreferencesLoaded,
    /// Verification succeeded.
    Unlocked,
    /// Verification failed or was cancelled. Retry through `UnlockRequested`.
    Locked,
    /// No check required: lock disabled, or capability lost since opt-in.
    Bypassed,
}

/// Authoritative state owned by the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateState {
    pub phase: GatePhase,
    /// Becomes `true` once and never reverts.
    pub preferences_loaded: bool,
    pub biometric_enabled: bool,
    pub session_user: Option<UserRef>,
}

impl GateState {
    pub fn initializing() -> Self {
        Self {
            phase: GatePhase::Initializing,
            preferences_loaded: false,
            biometric_enabled: false,
            session_user: None,
        }
    }

    /// Whether the biometric gate has been passed or bypassed.
    ///
    /// Only meaningful once `preferences_loaded` is `true`.
    pub fn unlocked(&self) -> bool {
        self.preferences_loaded && matches!(self.phase, GatePhase::Unlocked | GatePhase::Bypassed)
    }

    /// A biometric check is still owed before the app can be shown.
    pub fn awaiting_check(&self) -> bool {
        matches!(self.phase, GatePhase::PreferencesLoaded | GatePhase::Locked)
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self::initializing()
    }
}
