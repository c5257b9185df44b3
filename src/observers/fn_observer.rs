//! # Function-backed observer (`FnObserver`)
//!
//! [`FnObserver`] wraps a closure `F: Fn(Event) -> Fut`, producing a fresh
//! future per delivered event. The closure receives an owned clone of the
//! event so the future can be `'static`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use szmock::{FnObserver, Observer};
//!
//! let obs: Arc<dyn Observer> = FnObserver::arc("printer", |ev| async move {
//!     println!("event {} from {}", ev.event_code, ev.component_id);
//!     Ok(())
//! });
//!
//! assert_eq!(obs.id(), "printer");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SzResult;
use crate::events::Event;

use super::Observer;

/// Closure-backed observer.
pub struct FnObserver<F> {
    id: Cow<'static, str>,
    f: F,
}

impl<F, Fut> FnObserver<F>
where
    F: Fn(Event) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = SzResult<()>> + Send + 'static,
{
    /// Creates a new function-backed observer.
    ///
    /// Prefer [`FnObserver::arc`] when you immediately need an `Arc<dyn Observer>`.
    pub fn new(id: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { id: id.into(), f }
    }

    /// Creates the observer and returns it as a shared handle.
    pub fn arc(id: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(id, f))
    }
}

impl<F> fmt::Debug for FnObserver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnObserver").field("id", &self.id).finish()
    }
}

#[async_trait]
impl<F, Fut> Observer for FnObserver<F>
where
    F: Fn(Event) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = SzResult<()>> + Send + 'static,
{
    fn id(&self) -> &str {
        &self.id
    }

    async fn update(&self, event: &Event) -> SzResult<()> {
        (self.f)(event.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::error::SzError;
    use crate::events::Details;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn invokes_closure_per_event() {
        let seen = Arc::new(AtomicU32::new(0));
        let seen_in = Arc::clone(&seen);
        let obs = FnObserver::new("counter", move |ev| {
            let seen = Arc::clone(&seen_in);
            async move {
                seen.fetch_add(ev.event_code, Ordering::SeqCst);
                Ok(())
            }
        });

        let ev = Event::new("", Component::Engine, 8001, None, Details::new());
        obs.update(&ev).await.unwrap();
        obs.update(&ev).await.unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 16002);
    }

    #[tokio::test]
    async fn propagates_closure_error() {
        let obs = FnObserver::new("failing", |_ev| async {
            Err(SzError::observer_failure("failing", "nope"))
        });
        let ev = Event::new("", Component::Config, 8001, None, Details::new());
        assert!(obs.update(&ev).await.is_err());
    }
}
