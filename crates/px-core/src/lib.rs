//! # px-core
//!
//! Core domain models and business logic for the ProXplore access gate.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod biometric;
pub mod config;
pub mod gate;
pub mod ports;
pub mod preferences;
pub mod session;

// Re-export commonly used types at the crate root
pub use biometric::{BiometricCapability, VerificationOutcome, VerificationPrompt};
pub use config::AppConfig;
pub use gate::{AccessDecision, GateAction, GateEvent, GatePhase, GateState, GateStateMachine};
pub use preferences::{PreferenceKey, Preferences, ThemeMode};
pub use session::{SessionSnapshot, UserRef};
