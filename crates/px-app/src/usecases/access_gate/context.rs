use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{watch, Mutex, MutexGuard};

use super::snapshot::AccessSnapshot;

/// Shared gate context: observable snapshot, dispatch lock and the
/// verification generation counter.
///
/// ## Locking
/// - `dispatch_lock` serializes state transitions. It is never held while a
///   capability query or a verification prompt is in flight.
/// - Reads go straight to the watch channel and never take the lock.
///
/// ## Generations
/// Each capability query and verification takes a fresh generation. Its
/// result is applied only while the counter still equals that generation.
pub struct GateContext {
    state: watch::Sender<AccessSnapshot>,
    dispatch_lock: Mutex<()>,
    generation: AtomicU64,
}

impl GateContext {
    pub fn new(initial: AccessSnapshot) -> Self {
        let (state, _rx) = watch::channel(initial);
        Self {
            state,
            dispatch_lock: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> AccessSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AccessSnapshot> {
        self.state.subscribe()
    }

    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Publishes a change. Call with the dispatch lock held.
    pub fn update(&self, f: impl FnOnce(&mut AccessSnapshot)) {
        self.state.send_modify(f);
    }

    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Invalidates every in-flight request.
    pub fn bump_generation(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for GateContext {
    fn default() -> Self {
        Self::new(AccessSnapshot::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use px_core::preferences::ThemeMode;

    #[test]
    fn newer_generation_supersedes_older() {
        let context = GateContext::default();

        let first = context.next_generation();
        assert!(context.is_current(first));

        let second = context.next_generation();
        assert!(!context.is_current(first));
        assert!(context.is_current(second));

        context.bump_generation();
        assert!(!context.is_current(second));
    }

    #[tokio::test]
    async fn updates_reach_subscribers() {
        let context = GateContext::default();
        let mut rx = context.subscribe();

        {
            let _guard = context.acquire_dispatch_lock().await;
            context.update(|snapshot| snapshot.theme = ThemeMode::Dark);
        }

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().theme, ThemeMode::Dark);
        assert_eq!(context.snapshot().theme, ThemeMode::Dark);
    }
}
