//! Access gate orchestrator.
//!
//! Feeds events into `GateStateMachine`, executes the returned actions against
//! the injected ports and publishes the resulting snapshot.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use px_core::{
    biometric::VerificationPrompt,
    gate::{GateAction, GateEvent, GateStateMachine},
    ports::{BiometricPort, PreferenceStorePort, SessionPort, ThemeApplierPort},
    preferences::{encode_bool, PreferenceKey, ThemeMode},
    session::SessionSnapshot,
};

use super::context::GateContext;
use super::errors::{CapabilityGap, ToggleBiometricError};
use super::snapshot::AccessSnapshot;
use crate::usecases::{CheckBiometricCapability, LoadPreferences, PersistPreference};

/// Prompts shown by the platform verification UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePrompts {
    /// Shown when unlocking the app.
    pub unlock: VerificationPrompt,
    /// Shown before the biometric lock is switched on.
    pub enable: VerificationPrompt,
}

pub struct AppAccessGateDeps {
    pub preferences: Arc<dyn PreferenceStorePort>,
    pub biometric: Arc<dyn BiometricPort>,
    pub session: Arc<dyn SessionPort>,
    pub theme_applier: Arc<dyn ThemeApplierPort>,
    pub prompts: GatePrompts,
}

/// Gate between the session provider and the main application.
pub struct AppAccessGate {
    context: GateContext,
    initialized: AtomicBool,

    load_preferences: LoadPreferences,
    persist_preference: PersistPreference,
    check_capability: CheckBiometricCapability,
    biometric: Arc<dyn BiometricPort>,
    session: Arc<dyn SessionPort>,
    theme_applier: Arc<dyn ThemeApplierPort>,
    prompts: GatePrompts,
}

impl AppAccessGate {
    pub fn new(deps: AppAccessGateDeps) -> Self {
        let AppAccessGateDeps {
            preferences,
            biometric,
            session,
            theme_applier,
            prompts,
        } = deps;

        Self {
            context: GateContext::default(),
            initialized: AtomicBool::new(false),
            load_preferences: LoadPreferences::new(preferences.clone()),
            persist_preference: PersistPreference::new(preferences),
            check_capability: CheckBiometricCapability::new(biometric.clone()),
            biometric,
            session,
            theme_applier,
            prompts,
        }
    }

    pub fn snapshot(&self) -> AccessSnapshot {
        self.context.snapshot()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<AccessSnapshot> {
        self.context.subscribe()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.snapshot().is_dark_mode()
    }

    pub fn is_biometric_enabled(&self) -> bool {
        self.snapshot().is_biometric_enabled()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot().is_loading()
    }

    /// Loads preferences, applies the theme and runs the first biometric
    /// check when one is owed.
    ///
    /// Preferences are read under the dispatch lock, so a theme toggle issued
    /// during startup lands after the stored theme.
    ///
    /// Runs once; later calls return the current snapshot. Waits for the
    /// verification prompt when one is shown.
    pub async fn initialize(&self) -> AccessSnapshot {
        if self.initialized.swap(true, Ordering::SeqCst) {
            debug!("access gate already initialized");
            return self.snapshot();
        }

        let span = info_span!("usecase.access_gate.initialize");
        async {
            self.record_session(self.session.current()).await;

            let actions = {
                let _guard = self.context.acquire_dispatch_lock().await;
                let preferences = self.load_preferences.execute().await;
                self.context
                    .update(|snapshot| snapshot.theme = preferences.theme);
                self.apply_theme(preferences.theme).await;
                self.transition(GateEvent::PreferencesLoaded {
                    biometric_enabled: preferences.biometric_enabled,
                })
            };
            self.drive(actions).await;

            self.snapshot()
        }
        .instrument(span)
        .await
    }

    /// Retries the biometric check from the lock screen.
    ///
    /// Does nothing unless a check is owed and a session user is present.
    pub async fn authenticate(&self) -> AccessSnapshot {
        let span = info_span!("usecase.access_gate.authenticate");
        async {
            let actions = self.dispatch(GateEvent::UnlockRequested).await;
            if actions.is_empty() {
                debug!("no biometric check owed");
            }
            self.drive(actions).await;
            self.snapshot()
        }
        .instrument(span)
        .await
    }

    /// Flips the theme, applies it and persists it. Returns the new theme.
    pub async fn toggle_theme(&self) -> ThemeMode {
        let span = info_span!("usecase.access_gate.toggle_theme");
        async {
            let _guard = self.context.acquire_dispatch_lock().await;
            let theme = self.context.snapshot().theme.toggled();
            self.context.update(|snapshot| snapshot.theme = theme);
            self.apply_theme(theme).await;
            self.persist_preference
                .execute(PreferenceKey::Theme, theme.as_str())
                .await;
            info!(theme = %theme, "theme toggled");
            theme
        }
        .instrument(span)
        .await
    }

    /// Switches the biometric lock. Only allowed while unlocked.
    ///
    /// Enabling requires enrolled hardware and one successful verification;
    /// disabling is unconditional. Returns the resulting flag.
    pub async fn toggle_biometric(&self, enabled: bool) -> Result<bool, ToggleBiometricError> {
        let span = info_span!("usecase.access_gate.toggle_biometric", enabled);
        async {
            let current = self.snapshot();
            if !current.is_authenticated() {
                warn!(phase = ?current.gate.phase, "biometric toggle rejected while locked");
                return Err(ToggleBiometricError::NotUnlocked);
            }

            if !enabled {
                self.commit_biometric(false).await?;
                return Ok(false);
            }

            if current.is_biometric_enabled() {
                debug!("biometric lock already enabled");
                return Ok(true);
            }

            let capability = self.check_capability.execute().await;
            if let Some(gap) = CapabilityGap::of(&capability) {
                info!(gap = ?gap, "biometric lock cannot be enabled");
                return Err(ToggleBiometricError::CapabilityUnavailable(gap));
            }

            let generation = self.context.next_generation();
            let outcome = self.biometric.verify(&self.prompts.enable).await;
            if !self.context.is_current(generation) {
                debug!(generation, "discarding superseded enable verification");
                return Err(ToggleBiometricError::Superseded);
            }
            if !outcome.success {
                let reason = outcome
                    .error_reason
                    .unwrap_or_else(|| "verification failed".to_string());
                info!(reason = %reason, "enable verification failed");
                return Err(ToggleBiometricError::VerificationFailed { reason });
            }

            self.commit_biometric(true).await?;
            Ok(true)
        }
        .instrument(span)
        .await
    }

    /// Discards the result of any in-flight capability query or verification.
    pub fn cancel_pending(&self) {
        debug!("cancelling pending gate requests");
        self.context.bump_generation();
    }

    /// Records a session change and runs a biometric check when the change
    /// makes one due. Waits for the verification prompt.
    pub async fn on_session_changed(&self, session: SessionSnapshot) -> AccessSnapshot {
        let actions = self.record_session(session).await;
        self.drive(actions).await;
        self.snapshot()
    }

    /// Follows the session provider in a background task.
    ///
    /// Changes are recorded in order; biometric checks they trigger run in
    /// their own tasks so later changes are never blocked by an open prompt.
    pub fn spawn_session_listener(self: &Arc<Self>) -> JoinHandle<()> {
        let gate = Arc::clone(self);
        let mut rx = self.session.subscribe();

        tokio::spawn(
            async move {
                while rx.changed().await.is_ok() {
                    let session = rx.borrow_and_update().clone();
                    let actions = gate.record_session(session).await;
                    if actions.is_empty() {
                        continue;
                    }
                    let driver = Arc::clone(&gate);
                    tokio::spawn(async move { driver.drive(actions).await });
                }
                debug!("session provider closed");
            }
            .instrument(info_span!("usecase.access_gate.session_listener")),
        )
    }

    async fn record_session(&self, session: SessionSnapshot) -> Vec<GateAction> {
        let user = session.user.clone();
        let _guard = self.context.acquire_dispatch_lock().await;
        if user.is_none() && self.context.snapshot().gate.session_user.is_some() {
            debug!("signed out, discarding pending verification");
            self.context.bump_generation();
        }
        self.context.update(|snapshot| snapshot.session = session);
        self.transition(GateEvent::SessionChanged { user })
    }

    async fn dispatch(&self, event: GateEvent) -> Vec<GateAction> {
        let _guard = self.context.acquire_dispatch_lock().await;
        self.transition(event)
    }

    /// Applies a request result unless a newer request superseded it.
    async fn dispatch_if_current(&self, generation: u64, event: GateEvent) -> Option<Vec<GateAction>> {
        let _guard = self.context.acquire_dispatch_lock().await;
        if !self.context.is_current(generation) {
            return None;
        }
        Some(self.transition(event))
    }

    /// Call with the dispatch lock held.
    fn transition(&self, event: GateEvent) -> Vec<GateAction> {
        let from = self.context.snapshot().gate;
        let event_name = format!("{:?}", event);
        let (next, actions) = GateStateMachine::transition(from.clone(), event);
        if next != from {
            info!(from = ?from.phase, to = ?next.phase, event = %event_name, "gate state transition");
            self.context.update(|snapshot| snapshot.gate = next);
        }
        actions
    }

    /// Executes actions without holding the dispatch lock and feeds the
    /// results back as events.
    async fn drive(&self, actions: Vec<GateAction>) {
        let mut pending: VecDeque<GateAction> = actions.into();

        while let Some(action) = pending.pop_front() {
            debug!(?action, "gate executing action");
            let generation = self.context.next_generation();
            let event = match action {
                GateAction::CheckCapability => GateEvent::CapabilityResolved {
                    capability: self.check_capability.execute().await,
                },
                GateAction::RequestVerification => {
                    let outcome = self.biometric.verify(&self.prompts.unlock).await;
                    if let Some(reason) = &outcome.error_reason {
                        info!(reason = %reason, "unlock verification failed");
                    }
                    GateEvent::VerificationResolved {
                        success: outcome.success,
                    }
                }
            };

            match self.dispatch_if_current(generation, event).await {
                Some(follow_up) => pending.extend(follow_up),
                None => debug!(generation, "discarding superseded gate result"),
            }
        }
    }

    async fn commit_biometric(&self, enabled: bool) -> Result<(), ToggleBiometricError> {
        let event = if enabled {
            GateEvent::BiometricEnabled
        } else {
            GateEvent::BiometricDisabled
        };
        {
            let _guard = self.context.acquire_dispatch_lock().await;
            self.transition(event);
            if self.context.snapshot().gate.biometric_enabled != enabled {
                return Err(ToggleBiometricError::NotUnlocked);
            }
            self.persist_preference
                .execute(PreferenceKey::BiometricEnabled, encode_bool(enabled))
                .await;
        }
        info!(enabled, "biometric lock updated");
        Ok(())
    }

    async fn apply_theme(&self, theme: ThemeMode) {
        if let Err(err) = self.theme_applier.apply(theme).await {
            warn!(theme = %theme, error = %err, "failed to apply theme");
        }
    }
}
