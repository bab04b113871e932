use async_trait::async_trait;

use crate::biometric::{VerificationOutcome, VerificationPrompt};

/// Platform biometric service.
///
/// Capability queries never fail: any platform error reads as `false`.
#[async_trait]
pub trait BiometricPort: Send + Sync {
    async fn has_hardware(&self) -> bool;

    async fn is_enrolled(&self) -> bool;

    /// Show the platform prompt and wait for the user.
    ///
    /// May wait indefinitely, but must resolve with `success = false` when the
    /// user cancels.
    async fn verify(&self, prompt: &VerificationPrompt) -> VerificationOutcome;
}

