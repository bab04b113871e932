//! Biometric value types.
//!
//! All of these are transient: device capability can change between checks
//! (a sensor removed, a fingerprint deleted), so nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Snapshot of the device's biometric capability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometricCapability {
    pub hardware_present: bool,
    pub enrolled: bool,
}

impl BiometricCapability {
    pub fn new(hardware_present: bool, enrolled: bool) -> Self {
        Self {
            hardware_present,
            enrolled,
        }
    }

    /// Both a sensor and at least one enrolled credential are present.
    pub fn is_available(&self) -> bool {
        self.hardware_present && self.enrolled
    }
}

/// User-facing text shown by the platform verification UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationPrompt {
    pub message: String,
    pub fallback_label: Option<String>,
}

impl VerificationPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fallback_label: None,
        }
    }

    pub fn with_fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = Some(label.into());
        self
    }
}

/// Result of a single verification attempt.
///
/// Cancellation by the user is reported as `success = false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub success: bool,
    pub error_reason: Option<String>,
}

impl VerificationOutcome {
    pub fn passed() -> Self {
        Self {
            success: true,
            error_reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error_reason: Some(reason.into()),
        }
    }

    pub fn cancelled() -> Self {
        Self::failed("user_cancel")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_requires_hardware_and_enrollment() {
        assert!(BiometricCapability::new(true, true).is_available());
        assert!(!BiometricCapability::new(true, false).is_available());
        assert!(!BiometricCapability::new(false, true).is_available());
        assert!(!BiometricCapability::default().is_available());
    }

    #[test]
    fn cancelled_outcome_is_a_failure() {
        let outcome = VerificationOutcome::cancelled();
        assert!(!outcome.success);
        assert_eq!(outcome.error_reason.as_deref(), Some("user_cancel"));
    }
}
