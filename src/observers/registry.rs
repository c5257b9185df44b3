//! # Non-blocking event fan-out to registered observers.
//!
//! Provides [`ObserverRegistry`], the subject each façade notifies. It keeps
//! an ordered set of observers and distributes events to all of them
//! concurrently without blocking the caller.
//!
//! ## Architecture
//! ```text
//! notify(Arc<Event>)
//!     │  read lock → snapshot Vec<Arc<dyn Observer>> → unlock
//!     │
//!     ├──► spawn ──► obs1.update()
//!     │                └──► Err / panic → tracing::warn!, swallowed
//!     ├──► spawn ──► obs2.update()
//!     └──► spawn ──► obsN.update()
//! ```
//!
//! ## Rules
//! - **Set semantics**: registering an id that is already present is a no-op.
//! - **Insertion order** is kept for snapshots and `ids()`.
//! - **No cross-observer ordering**: observer A may handle event N after B handles N+1.
//! - **Snapshot iteration**: delivery tasks never hold the registry lock, so
//!   register/unregister can run while deliveries are in flight, and an
//!   observer removed after `notify` still receives that event.
//! - **Isolation**: a failing or panicking observer does not affect the others.
//!
//! ## Panic handling
//! Delivery tasks use `catch_unwind`. `AssertUnwindSafe` is used, which can
//! leave an observer's own shared state inconsistent if it panics while
//! holding a lock.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use futures::FutureExt;
use tokio::task::JoinHandle;

use crate::events::Event;

use super::Observer;

/// Thread-safe ordered set of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RwLock<Vec<Arc<dyn Observer>>>,
}

impl ObserverRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `observer` unless an observer with the same id is registered.
    ///
    /// Returns `true` if it was added.
    pub fn register(&self, observer: Arc<dyn Observer>) -> bool {
        let mut observers = self.write();
        if observers.iter().any(|o| o.id() == observer.id()) {
            return false;
        }
        observers.push(observer);
        true
    }

    /// Removes the observer with `id`, returning it if it was present.
    pub fn unregister(&self, id: &str) -> Option<Arc<dyn Observer>> {
        let mut observers = self.write();
        let pos = observers.iter().position(|o| o.id() == id)?;
        Some(observers.remove(pos))
    }

    /// True if an observer with `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.snapshot().iter().any(|o| o.id() == id)
    }

    /// True if at least one observer is registered.
    pub fn has_observers(&self) -> bool {
        !self.read().is_empty()
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True if no observer is registered.
    pub fn is_empty(&self) -> bool {
        !self.has_observers()
    }

    /// Ids of the registered observers, in registration order.
    pub fn ids(&self) -> Vec<String> {
        self.snapshot().iter().map(|o| o.id().to_string()).collect()
    }

    /// Delivers `event` to every registered observer, one task each.
    ///
    /// - Returns immediately; the handles may be dropped (fire-and-forget).
    /// - Outside a tokio runtime nothing is delivered and a warning is logged.
    pub fn notify(&self, event: Arc<Event>) -> Vec<JoinHandle<()>> {
        let observers = self.snapshot();
        if observers.is_empty() {
            return Vec::new();
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(
                event_code = event.event_code,
                observers = observers.len(),
                "no tokio runtime; observer notification dropped"
            );
            return Vec::new();
        };

        observers
            .into_iter()
            .map(|observer| {
                let event = Arc::clone(&event);
                runtime.spawn(async move {
                    let fut = observer.update(event.as_ref());
                    match std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                        Ok(Ok(())) => {}
                        Ok(Err(err)) => {
                            tracing::warn!(
                                observer = observer.id(),
                                event_code = event.event_code,
                                error = %err,
                                "observer update failed"
                            );
                        }
                        Err(panic_err) => {
                            let info = if let Some(msg) = panic_err.downcast_ref::<&'static str>() {
                                (*msg).to_string()
                            } else if let Some(msg) = panic_err.downcast_ref::<String>() {
                                msg.clone()
                            } else {
                                "unknown panic".to_string()
                            };
                            tracing::warn!(
                                observer = observer.id(),
                                event_code = event.event_code,
                                panic = %info,
                                "observer panicked"
                            );
                        }
                    }
                })
            })
            .collect()
    }

    fn snapshot(&self) -> Vec<Arc<dyn Observer>> {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<dyn Observer>>> {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<dyn Observer>>> {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::error::SzError;
    use crate::events::Details;
    use crate::observers::{ChannelObserver, FnObserver};

    fn event(code: u32) -> Arc<Event> {
        Arc::new(Event::new("t", Component::Engine, code, None, Details::new()))
    }

    async fn join_all(handles: Vec<JoinHandle<()>>) {
        for h in handles {
            h.await.unwrap();
        }
    }

    #[test]
    fn duplicate_ids_collapse() {
        let registry = ObserverRegistry::new();
        let (a, _rx_a) = ChannelObserver::new("a");
        let (a2, _rx_a2) = ChannelObserver::new("a");
        assert!(registry.register(Arc::new(a)));
        assert!(!registry.register(Arc::new(a2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn keeps_registration_order() {
        let registry = ObserverRegistry::new();
        for id in ["c", "a", "b"] {
            let (obs, _rx) = ChannelObserver::new(id);
            registry.register(Arc::new(obs));
        }
        assert_eq!(registry.ids(), vec!["c", "a", "b"]);
        assert!(registry.unregister("a").is_some());
        assert_eq!(registry.ids(), vec!["c", "b"]);
        assert!(registry.unregister("a").is_none());
        assert!(registry.contains("b"));
    }

    #[test]
    fn empty_after_last_removal() {
        let registry = ObserverRegistry::new();
        let (obs, _rx) = ChannelObserver::new("only");
        registry.register(Arc::new(obs));
        assert!(registry.has_observers());
        registry.unregister("only");
        assert!(!registry.has_observers());
        assert!(registry.is_empty());
    }

    #[test]
    fn notify_without_runtime_is_dropped() {
        let registry = ObserverRegistry::new();
        let (obs, mut rx) = ChannelObserver::new("x");
        registry.register(Arc::new(obs));
        assert!(registry.notify(event(8001)).is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn every_observer_receives_the_event() {
        let registry = ObserverRegistry::new();
        let (a, mut rx_a) = ChannelObserver::new("a");
        let (b, mut rx_b) = ChannelObserver::new("b");
        registry.register(Arc::new(a));
        registry.register(Arc::new(b));

        let ev = event(8005);
        join_all(registry.notify(Arc::clone(&ev))).await;

        assert_eq!(rx_a.recv().await.unwrap().seq, ev.seq);
        assert_eq!(rx_b.recv().await.unwrap().seq, ev.seq);
    }

    #[tokio::test]
    async fn failing_and_panicking_observers_are_isolated() {
        let registry = ObserverRegistry::new();
        registry.register(FnObserver::arc("panics", |_ev| async {
            if true {
                panic!("observer exploded");
            }
            Ok(())
        }));
        registry.register(FnObserver::arc("fails", |_ev| async {
            Err(SzError::observer_failure("fails", "nope"))
        }));
        let (ok, mut rx) = ChannelObserver::new("ok");
        registry.register(Arc::new(ok));

        join_all(registry.notify(event(8001))).await;
        assert_eq!(rx.recv().await.unwrap().event_code, 8001);
    }

    #[tokio::test]
    async fn observer_removed_after_notify_still_receives() {
        let registry = ObserverRegistry::new();
        let (obs, mut rx) = ChannelObserver::new("leaving");
        registry.register(Arc::new(obs));

        let handles = registry.notify(event(8013));
        registry.unregister("leaving");
        join_all(handles).await;

        assert_eq!(rx.recv().await.unwrap().event_code, 8013);
        assert!(!registry.has_observers());
    }
}
