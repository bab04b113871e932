//! Business logic use cases
//!
//! Capability use cases (preferences, biometric capability) are small and
//! stateless; `access_gate` composes them into the gate lifecycle.

pub mod access_gate;
pub mod biometric;
pub mod preferences;

pub use biometric::CheckBiometricCapability;
pub use preferences::{LoadPreferences, PersistPreference};
