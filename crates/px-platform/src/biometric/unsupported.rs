use async_trait::async_trait;
use tracing::debug;
use px_core::{
    biometric::{VerificationOutcome, VerificationPrompt},
    ports::BiometricPort,
};

pub const HARDWARE_UNAVAILABLE: &str = "biometric hardware unavailable";

/// Adapter for devices without a biometric service.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedBiometricAdapter;

#[async_trait]
impl BiometricPort for UnsupportedBiometricAdapter {
    async fn has_hardware(&self) -> bool {
        false
    }

    async fn is_enrolled(&self) -> bool {
        false
    }

    async fn verify(&self, _prompt: &VerificationPrompt) -> VerificationOutcome {
        debug!("verify requested without biometric hardware");
        VerificationOutcome::failed(HARDWARE_UNAVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_no_capability_and_fails_verification() {
        let adapter = UnsupportedBiometricAdapter;

        assert!(!adapter.has_hardware().await);
        assert!(!adapter.is_enrolled().await);
        let outcome = adapter.verify(&VerificationPrompt::new("Unlock")).await;
        assert_eq!(outcome, VerificationOutcome::failed(HARDWARE_UNAVAILABLE));
    }
}
