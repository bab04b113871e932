//! App access gate.
//!
//! Owns theme, biometric lock state and the session view, and decides what
//! the rendering layer may show.

mod context;
mod errors;
mod orchestrator;
mod snapshot;

pub use context::GateContext;
pub use errors::{CapabilityGap, ToggleBiometricError};
pub use orchestrator::{AppAccessGate, AppAccessGateDeps, GatePrompts};
pub use snapshot::AccessSnapshot;
