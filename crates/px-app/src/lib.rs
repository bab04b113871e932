//! ProXplore application orchestration layer
//!
//! This crate contains the access gate use cases and the orchestrator that
//! drives the gate state machine against the injected ports.

pub mod app_paths;
pub mod usecases;

pub use usecases::access_gate::{
    AccessSnapshot, AppAccessGate, AppAccessGateDeps, CapabilityGap, GatePrompts,
    ToggleBiometricError,
};
