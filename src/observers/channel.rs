//! # ChannelObserver: forward events into a channel
//!
//! A minimal observer that clones every event into an unbounded tokio
//! channel. Useful in tests (await the next event with a timeout) and to
//! bridge events into another subsystem.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use szmock::ChannelObserver;
//!
//! let (observer, mut rx) = ChannelObserver::new("collector");
//! let observer = Arc::new(observer);
//! // façade.register_observer(&ctx, observer.clone()).await?;
//! // let ev = rx.recv().await;
//! # drop(rx);
//! ```

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::{SzError, SzResult};
use crate::events::Event;

use super::Observer;

/// Observer that sends each event into an `mpsc` channel.
#[derive(Debug)]
pub struct ChannelObserver {
    id: String,
    tx: mpsc::UnboundedSender<Event>,
}

impl ChannelObserver {
    /// Creates the observer and the receiving end of its channel.
    #[must_use]
    pub fn new(id: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { id: id.into(), tx }, rx)
    }
}

#[async_trait]
impl Observer for ChannelObserver {
    fn id(&self) -> &str {
        &self.id
    }

    async fn update(&self, event: &Event) -> SzResult<()> {
        self.tx
            .send(event.clone())
            .map_err(|_| SzError::observer_failure(self.id.as_str(), "receiver dropped"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::events::Details;

    #[tokio::test]
    async fn forwards_events() {
        let (obs, mut rx) = ChannelObserver::new("c");
        let ev = Event::new("o", Component::Product, 8002, None, Details::new());
        obs.update(&ev).await.unwrap();
        let got = rx.recv().await.unwrap();
        assert_eq!(got.seq, ev.seq);
        assert_eq!(obs.id(), "c");
    }

    #[tokio::test]
    async fn dropped_receiver_is_an_observer_failure() {
        let (obs, rx) = ChannelObserver::new("gone");
        drop(rx);
        let ev = Event::new("", Component::Product, 8002, None, Details::new());
        let err = obs.update(&ev).await.unwrap_err();
        assert_eq!(err.as_label(), "sz_observer_failure");
    }
}
