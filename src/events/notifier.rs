//! # Notifier: build an event and hand it to the registry.
//!
//! ```text
//! notify(origin, component, code, error, details)
//!     │
//!     ├─► Event::new(..)   (timestamp + seq)
//!     └─► registry.notify(Arc<Event>) ──► one task per observer
//! ```
//!
//! ## Rules
//! - **Non-blocking**: returns as soon as the per-observer tasks are spawned.
//! - **Fire-and-forget**: the returned join handles may be dropped.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::component::Component;
use crate::error::SzError;
use crate::observers::ObserverRegistry;

use super::{Details, Event};

/// Assembles an [`Event`] and dispatches it to every observer in `registry`.
///
/// Returns the handles of the spawned delivery tasks.
pub fn notify(
    registry: &ObserverRegistry,
    origin: &str,
    component: Component,
    event_code: u32,
    error: Option<SzError>,
    details: Details,
) -> Vec<JoinHandle<()>> {
    let event = Event::new(origin, component, event_code, error, details);
    registry.notify(Arc::new(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::ChannelObserver;

    #[tokio::test]
    async fn delivers_packaged_event() {
        let registry = ObserverRegistry::new();
        let (observer, mut rx) = ChannelObserver::new("obs");
        registry.register(Arc::new(observer));

        let handles = notify(
            &registry,
            "tests",
            Component::Diagnostic,
            8004,
            None,
            Details::from([("featureID", "7")]),
        );
        for h in handles {
            h.await.unwrap();
        }

        let ev = rx.recv().await.unwrap();
        assert_eq!(ev.origin, "tests");
        assert_eq!(ev.component_id, 6033);
        assert_eq!(ev.event_code, 8004);
        assert_eq!(ev.details.get("featureID"), Some("7"));
    }

    #[tokio::test]
    async fn empty_registry_spawns_nothing() {
        let registry = ObserverRegistry::new();
        let handles = notify(&registry, "", Component::Engine, 8001, None, Details::new());
        assert!(handles.is_empty());
    }
}
