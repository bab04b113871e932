pub mod check_capability;

pub use check_capability::CheckBiometricCapability;
