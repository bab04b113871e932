use std::fmt;

use px_core::biometric::BiometricCapability;

/// Why biometrics cannot be enabled on this device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityGap {
    NoHardware,
    NotEnrolled,
}

impl CapabilityGap {
    /// `None` when the capability is sufficient.
    pub fn of(capability: &BiometricCapability) -> Option<Self> {
        if !capability.hardware_present {
            Some(CapabilityGap::NoHardware)
        } else if !capability.enrolled {
            Some(CapabilityGap::NotEnrolled)
        } else {
            None
        }
    }
}

impl fmt::Display for CapabilityGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityGap::NoHardware => {
                f.write_str("Biometric hardware not available on this device.")
            }
            CapabilityGap::NotEnrolled => f.write_str(
                "No biometrics enrolled on this device. Please set up in device settings.",
            ),
        }
    }
}

/// Errors returned by `AppAccessGate::toggle_biometric`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleBiometricError {
    #[error("biometric lock can only be changed while unlocked")]
    NotUnlocked,
    #[error("{0}")]
    CapabilityUnavailable(CapabilityGap),
    #[error("verification failed: {reason}")]
    VerificationFailed { reason: String },
    #[error("verification superseded by a newer request")]
    Superseded,
}
