//! Fingerprint adapter over the fprintd command line tools.
//!
//! `fprintd-list <user>` answers both capability queries and
//! `fprintd-verify <user>` runs one verification. Every platform error is
//! folded into `false` / a failed outcome.

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, info_span, warn, Instrument};
use px_core::{
    biometric::{VerificationOutcome, VerificationPrompt},
    ports::BiometricPort,
};

const LIST_BIN: &str = "fprintd-list";
const VERIFY_BIN: &str = "fprintd-verify";

/// What `fprintd-list` reported for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FprintdListing {
    NoDevices,
    NotEnrolled,
    Enrolled { fingers: usize },
}

/// Result line printed by `fprintd-verify`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FprintdVerifyResult {
    Match,
    NoMatch,
    Other(String),
    Missing,
}

pub fn parse_list_output(output: &str) -> FprintdListing {
    if output.contains("No devices available") {
        return FprintdListing::NoDevices;
    }
    let fingers = output
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with("- #"))
        .count();
    if fingers == 0 {
        FprintdListing::NotEnrolled
    } else {
        FprintdListing::Enrolled { fingers }
    }
}

pub fn parse_verify_output(output: &str) -> FprintdVerifyResult {
    let Some(result) = output
        .lines()
        .filter_map(|line| line.trim().strip_prefix("Verify result:"))
        .last()
        .and_then(|rest| rest.split_whitespace().next())
    else {
        return FprintdVerifyResult::Missing;
    };

    match result {
        "verify-match" => FprintdVerifyResult::Match,
        "verify-no-match" => FprintdVerifyResult::NoMatch,
        other => FprintdVerifyResult::Other(other.to_string()),
    }
}

pub struct FprintdBiometricAdapter {
    user: String,
    list_bin: PathBuf,
    verify_bin: PathBuf,
}

impl FprintdBiometricAdapter {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            list_bin: PathBuf::from(LIST_BIN),
            verify_bin: PathBuf::from(VERIFY_BIN),
        }
    }

    /// Uses the configured user, or the OS user from `$USER`.
    pub fn for_user(user: Option<String>) -> Self {
        let user = user
            .or_else(|| std::env::var("USER").ok())
            .unwrap_or_default();
        Self::new(user)
    }

    /// Overrides the tool locations.
    pub fn with_binaries(mut self, list_bin: impl Into<PathBuf>, verify_bin: impl Into<PathBuf>) -> Self {
        self.list_bin = list_bin.into();
        self.verify_bin = verify_bin.into();
        self
    }

    async fn list(&self) -> Result<FprintdListing> {
        let output = Command::new(&self.list_bin)
            .arg(&self.user)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("spawn {} failed", self.list_bin.display()))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        let listing = parse_list_output(&text);
        debug!(status = %output.status, ?listing, "fprintd listing");
        Ok(listing)
    }
}

#[async_trait]
impl BiometricPort for FprintdBiometricAdapter {
    async fn has_hardware(&self) -> bool {
        match self.list().await {
            Ok(listing) => listing != FprintdListing::NoDevices,
            Err(err) => {
                warn!(error = %err, "fprintd hardware query failed");
                false
            }
        }
    }

    async fn is_enrolled(&self) -> bool {
        match self.list().await {
            Ok(listing) => matches!(listing, FprintdListing::Enrolled { .. }),
            Err(err) => {
                warn!(error = %err, "fprintd enrollment query failed");
                false
            }
        }
    }

    async fn verify(&self, prompt: &VerificationPrompt) -> VerificationOutcome {
        let span = info_span!("platform.fprintd.verify", user = %self.user);

        async {
            info!(prompt = %prompt.message, "waiting for fingerprint");
            if let Some(label) = &prompt.fallback_label {
                debug!(fallback_label = %label, "fallback handled by the OS");
            }

            let output = match Command::new(&self.verify_bin)
                .arg(&self.user)
                .stdin(Stdio::null())
                .kill_on_drop(true)
                .output()
                .await
            {
                Ok(output) => output,
                Err(err) => {
                    warn!(error = %err, "fprintd verify could not start");
                    return VerificationOutcome::failed(format!("fprintd unavailable: {err}"));
                }
            };

            if output.status.code().is_none() {
                info!("fprintd verify interrupted");
                return VerificationOutcome::cancelled();
            }

            let stdout = String::from_utf8_lossy(&output.stdout);
            match parse_verify_output(&stdout) {
                FprintdVerifyResult::Match if output.status.success() => {
                    info!("fingerprint matched");
                    VerificationOutcome::passed()
                }
                FprintdVerifyResult::Match => {
                    VerificationOutcome::failed(format!("fprintd exited with {}", output.status))
                }
                FprintdVerifyResult::NoMatch => VerificationOutcome::failed("verify-no-match"),
                FprintdVerifyResult::Other(result) => VerificationOutcome::failed(result),
                FprintdVerifyResult::Missing => {
                    VerificationOutcome::failed(format!("fprintd exited with {}", output.status))
                }
            }
        }
        .instrument(span)
        .await
    }
}
