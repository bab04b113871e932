//! Access gate state machine.
//!
//! Defines a pure state transition function for the app access gate. Side
//! effects (capability queries, verification prompts) are returned as actions
//! and their results are fed back in as events.

use crate::biometric::BiometricCapability;
use crate::gate::state::{GatePhase, GateState};
use crate::session::UserRef;

/// Events that drive the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEvent {
    /// Persisted preferences were read (defaults substituted on failure).
    PreferencesLoaded { biometric_enabled: bool },
    /// The account provider published a new session user (or none).
    SessionChanged { user: Option<UserRef> },
    /// Capability query finished.
    CapabilityResolved { capability: BiometricCapability },
    /// Verification prompt finished. Cancellation arrives as `success = false`.
    VerificationResolved { success: bool },
    /// User asked to retry from the lock screen.
    UnlockRequested,
    /// Biometric lock was switched on after a successful verification.
    BiometricEnabled,
    /// Biometric lock was switched off.
    BiometricDisabled,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    /// Query hardware presence and enrollment.
    CheckCapability,
    /// Show the platform verification prompt.
    RequestVerification,
}

/// Pure gate state machine.
pub struct GateStateMachine;

impl GateStateMachine {
    pub fn transition(state: GateState, event: GateEvent) -> (GateState, Vec<GateAction>) {
        match (state.phase, event) {
            (GatePhase::Initializing, GateEvent::PreferencesLoaded { biometric_enabled }) => {
                let mut next = GateState {
                    preferences_loaded: true,
                    biometric_enabled,
                    ..state
                };
                if !biometric_enabled {
                    next.phase = GatePhase::Bypassed;
                    return (next, Vec::new());
                }
                next.phase = GatePhase::PreferencesLoaded;
                let actions = if next.session_user.is_some() {
                    vec![GateAction::CheckCapability]
                } else {
                    Vec::new()
                };
                (next, actions)
            }
            (phase, GateEvent::SessionChanged { user }) => {
                let signed_in = state.session_user.is_none() && user.is_some();
                let next = GateState {
                    session_user: user,
                    ..state
                };
                if signed_in && phase == GatePhase::PreferencesLoaded {
                    (next, vec![GateAction::CheckCapability])
                } else {
                    (next, Vec::new())
                }
            }
            (
                GatePhase::PreferencesLoaded | GatePhase::Locked,
                GateEvent::CapabilityResolved { capability },
            ) if state.session_user.is_some() => {
                if capability.is_available() {
                    (state, vec![GateAction::RequestVerification])
                } else {
                    (
                        GateState {
                            phase: GatePhase::Bypassed,
                            ..state
                        },
                        Vec::new(),
                    )
                }
            }
            (
                GatePhase::PreferencesLoaded | GatePhase::Locked,
                GateEvent::VerificationResolved { success },
            ) if state.session_user.is_some() => {
                let phase = if success {
                    GatePhase::Unlocked
                } else {
                    GatePhase::Locked
                };
                (GateState { phase, ..state }, Vec::new())
            }
            (GatePhase::PreferencesLoaded | GatePhase::Locked, GateEvent::UnlockRequested)
                if state.session_user.is_some() =>
            {
                (state, vec![GateAction::CheckCapability])
            }
            (GatePhase::Unlocked | GatePhase::Bypassed, GateEvent::BiometricEnabled) => (
                GateState {
                    biometric_enabled: true,
                    ..state
                },
                Vec::new(),
            ),
            (GatePhase::Unlocked | GatePhase::Bypassed, GateEvent::BiometricDisabled) => (
                GateState {
                    biometric_enabled: false,
                    ..state
                },
                Vec::new(),
            ),
            (_, _event) => (state, Vec::new()),
        }
    }
}
