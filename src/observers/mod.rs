//! # Observers of façade calls.
//!
//! This module provides the [`Observer`] trait, the [`ObserverRegistry`]
//! (the subject every façade notifies), and a few ready-made observers.
//!
//! ## Architecture
//! ```text
//! façade op ──► envelope ──► notify(..) ──► ObserverRegistry::notify(Arc<Event>)
//!                                               │  (snapshot under lock)
//!                                               ├──► task 1 ──► obs1.update(&Event)
//!                                               ├──► task 2 ──► obs2.update(&Event)
//!                                               └──► task N ──► obsN.update(&Event)
//! ```
//!
//! ## Observer types
//! - [`ChannelObserver`] forwards events into a tokio channel (tests, bridges)
//! - [`FnObserver`] wraps an async closure
//! - `LogObserver` writes events through `tracing` (feature `logging`)
//!
//! ## Implementing custom observers
//! ```no_run
//! use szmock::{Event, Observer, SzResult};
//! use async_trait::async_trait;
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Observer for Audit {
//!     fn id(&self) -> &str {
//!         "audit"
//!     }
//!
//!     async fn update(&self, event: &Event) -> SzResult<()> {
//!         if event.component_id == 6034 {
//!             // record engine activity
//!         }
//!         Ok(())
//!     }
//! }
//! ```

mod channel;
mod fn_observer;
#[cfg(feature = "logging")]
mod log;
mod observer;
mod registry;

pub use channel::ChannelObserver;
pub use fn_observer::FnObserver;
#[cfg(feature = "logging")]
pub use log::LogObserver;
pub use observer::{same_observer, Observer};
pub use registry::ObserverRegistry;
