use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use px_core::{biometric::BiometricCapability, ports::BiometricPort};

/// Use case for querying biometric capability.
///
/// Capability is recomputed on every call since a sensor can be removed or a
/// credential deleted between checks.
pub struct CheckBiometricCapability {
    biometric: Arc<dyn BiometricPort>,
}

impl CheckBiometricCapability {
    pub fn new(biometric: Arc<dyn BiometricPort>) -> Self {
        Self { biometric }
    }

    pub async fn execute(&self) -> BiometricCapability {
        let span = info_span!("usecase.check_biometric_capability.execute");

        async {
            let hardware_present = self.biometric.has_hardware().await;
            let enrolled = if hardware_present {
                self.biometric.is_enrolled().await
            } else {
                false
            };
            let capability = BiometricCapability::new(hardware_present, enrolled);
            info!(hardware_present, enrolled, "biometric capability resolved");
            capability
        }
        .instrument(span)
        .await
    }
}
