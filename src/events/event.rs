//! # Events delivered to observers.
//!
//! An [`Event`] records one instrumented call on a façade: who emitted it
//! (`origin`, `component_id`), which operation (`event_code`), whether it
//! failed (`error`), and the call-specific [`Details`].
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically in construction order. Delivery itself is unordered: two
//! observers may see the same event in any order, and events of consecutive
//! calls may arrive out of order. Use `seq` to restore construction order.
//!
//! ## Example
//! ```rust
//! use szmock::{Component, Details, Event};
//!
//! let ev = Event::new("my-app", Component::Engine, 8001, None,
//!     Details::from([("recordID", "1001")]));
//!
//! assert_eq!(ev.component_id, 6034);
//! assert_eq!(ev.details.get("recordID"), Some("1001"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::component::Component;
use crate::error::SzError;

use super::Details;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Structured record of one façade call, handed to every observer.
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp taken at construction.
    pub at: SystemTime,
    /// Application-supplied tag copied from the façade.
    pub origin: String,
    /// Numeric id of the emitting component (6031, 6032, ...).
    pub component_id: u32,
    /// Per-operation 8000-series code.
    pub event_code: u32,
    /// Error the operation returned, if any.
    pub error: Option<SzError>,
    /// Call-specific parameters and results.
    pub details: Details,
}

impl Event {
    /// Creates an event stamped with the current time and the next sequence number.
    pub fn new(
        origin: impl Into<String>,
        component: Component,
        event_code: u32,
        error: Option<SzError>,
        details: Details,
    ) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            origin: origin.into(),
            component_id: component.id(),
            event_code,
            error,
            details,
        }
    }

    /// True if the reported operation failed.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic() {
        let a = Event::new("", Component::Config, 8001, None, Details::new());
        let b = Event::new("", Component::Config, 8002, None, Details::new());
        assert!(b.seq > a.seq);
        assert!(b.at >= a.at);
    }

    #[test]
    fn carries_component_and_error() {
        let err = SzError::invalid_argument(Component::Product, "nope");
        let ev = Event::new(
            "origin",
            Component::Product,
            8003,
            Some(err.clone()),
            Details::new(),
        );
        assert_eq!(ev.component_id, 6036);
        assert_eq!(ev.origin, "origin");
        assert!(ev.is_error());
        assert_eq!(ev.error, Some(err));
    }
}
