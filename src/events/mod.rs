//! Observer events: payload types and the notifier.
//!
//! This module groups the event **data model** and the **notifier** used by
//! the call envelope to hand events to an [`ObserverRegistry`](crate::ObserverRegistry).
//!
//! ## Contents
//! - [`Details`] ordered string→string payload of call-specific parameters
//! - [`Event`] record delivered to observers
//! - [`notify`] builds an event and dispatches it (non-blocking)
//!
//! ## Quick reference
//! - **Publishers**: every façade operation (through the envelope) and the
//!   observer-management operations (`RegisterObserver`, `UnregisterObserver`, ...).
//! - **Consumers**: registered [`Observer`](crate::Observer)s, each on its own task.

mod details;
mod event;
mod notifier;

pub use details::Details;
pub use event::Event;
pub use notifier::notify;
