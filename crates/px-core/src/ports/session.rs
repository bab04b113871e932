use tokio::sync::watch;

use crate::session::SessionSnapshot;

/// Read side of the external account session provider.
pub trait SessionPort: Send + Sync {
    /// Current session value.
    fn current(&self) -> SessionSnapshot;

    /// Subscribe to session changes.
    fn subscribe(&self) -> watch::Receiver<SessionSnapshot>;
}
