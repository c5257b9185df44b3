//! # Observer trait.
//!
//! Provides [`Observer`], the extension point for receiving façade events.
//!
//! Each notification gets:
//! - **Dedicated task** (spawned per observer per event)
//! - **Failure isolation** (errors and panics are logged, never propagated)
//!
//! ## Rules
//! - Observers are identified by [`Observer::id`]; two observers with the same
//!   id are the same observer as far as the registry is concerned.
//! - Events may arrive on any worker thread and in any order.
//! - A slow observer only delays its own task.

use async_trait::async_trait;

use crate::error::SzResult;
use crate::events::Event;

/// Receiver of façade events.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Return [`SzError::ObserverFailure`](crate::SzError::ObserverFailure) rather than panicking.
#[async_trait]
pub trait Observer: Send + Sync + 'static {
    /// Stable identifier. Equality of observers is equality of ids.
    fn id(&self) -> &str;

    /// Handles one event.
    ///
    /// Called from a spawned task, never in the caller's context.
    /// An `Err` is logged and discarded.
    async fn update(&self, event: &Event) -> SzResult<()>;
}

/// True if both observers carry the same id.
pub fn same_observer(a: &dyn Observer, b: &dyn Observer) -> bool {
    a.id() == b.id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::FnObserver;

    #[test]
    fn identity_is_by_id() {
        let a = FnObserver::new("same", |_ev| async { Ok(()) });
        let b = FnObserver::new("same", |_ev| async { Ok(()) });
        let c = FnObserver::new("other", |_ev| async { Ok(()) });
        assert!(same_observer(&a, &b));
        assert!(!same_observer(&a, &c));
    }
}
