//! In-process account session provider.
//!
//! Stands in for the external account provider: it owns the session value and
//! publishes every change through a watch channel.

use tokio::sync::watch;
use tracing::info;
use px_core::{
    ports::SessionPort,
    session::{SessionSnapshot, UserRef},
};

pub struct InMemorySessionProvider {
    tx: watch::Sender<SessionSnapshot>,
}

impl InMemorySessionProvider {
    /// Starts in the resolving state.
    pub fn new() -> Self {
        Self::with_snapshot(SessionSnapshot::resolving())
    }

    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        let (tx, _rx) = watch::channel(snapshot);
        Self { tx }
    }

    pub fn sign_in(&self, user: UserRef) {
        info!(user = %user, "session signed in");
        self.tx.send_replace(SessionSnapshot::signed_in(user));
    }

    pub fn sign_out(&self) {
        info!("session signed out");
        self.tx.send_replace(SessionSnapshot::signed_out());
    }

    pub fn set_loading(&self, loading: bool) {
        self.tx.send_modify(|snapshot| snapshot.loading = loading);
    }
}

impl Default for InMemorySessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionPort for InMemorySessionProvider {
    fn current(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_provider_is_resolving() {
        let provider = InMemorySessionProvider::new();

        let snapshot = provider.current();

        assert!(snapshot.loading);
        assert!(!snapshot.has_user());
    }

    #[tokio::test]
    async fn subscribers_observe_sign_in_and_sign_out() {
        let provider = InMemorySessionProvider::new();
        let mut rx = provider.subscribe();

        provider.sign_in(UserRef::new("alice"));
        rx.changed().await.unwrap();
        assert_eq!(
            *rx.borrow_and_update(),
            SessionSnapshot::signed_in(UserRef::new("alice"))
        );

        provider.sign_out();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), SessionSnapshot::signed_out());
    }

    #[test]
    fn set_loading_keeps_user() {
        let provider =
            InMemorySessionProvider::with_snapshot(SessionSnapshot::signed_in(UserRef::new("bob")));

        provider.set_loading(true);

        let snapshot = provider.current();
        assert!(snapshot.loading);
        assert_eq!(snapshot.user, Some(UserRef::new("bob")));
    }
}
