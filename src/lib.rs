//! # szmock
//!
//! **szmock** is a mock client library for the Senzing entity-resolution SDK.
//!
//! It provides stand-in implementations of the five Senzing services
//! ([`SzConfig`], [`SzConfigManager`], [`SzDiagnostic`], [`SzEngine`],
//! [`SzProduct`]) and an [`AbstractFactory`] that builds them. No operation does
//! real work: each one returns a caller-supplied canned value, optionally writes
//! entry/exit traces and optionally notifies registered observers. Applications
//! and SDK-consuming tests can run without the native engine.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!    ┌────────────────────┐        ┌───────────────────────────────────────────┐
//!    │  CannedValues bag  │──────► │ AbstractFactory (+ Config)                │
//!    │ "<Op>Result" → val │        │ create_config / _manager / _engine / ...  │
//!    └────────────────────┘        └─────┬─────────────────────────────────────┘
//!                                        ▼
//!    ┌───────────────────────────────────────────────────────────────────────┐
//!    │ Façade (MockConfig, MockConfigManager, MockDiagnostic, MockEngine,    │
//!    │         MockProduct): <op>_result fields + Envelope                   │
//!    └──────┬─────────────────────────────────────────────────────┬──────────┘
//!           │ op(ctx, args…)                                      │
//!           ▼                                                     │
//!    ┌──────────────────────────────┐                             │
//!    │ Envelope::run                │                             │
//!    │  1. entry trace (TRACE only) │──► Logger ──► tracing       │
//!    │  2. read canned value        │                             │
//!    │  3. notify (if observers) ───┼──► ObserverRegistry ──┐     │
//!    │  4. exit trace (drop guard)  │──► Logger             │     │
//!    └──────────────────────────────┘                       ▼     │
//!                                          task 1 ─► obs1.update(&Event)
//!                                          task 2 ─► obs2.update(&Event)
//!                                          task N ─► obsN.update(&Event)
//! ```
//!
//! ### Observer registry lifecycle
//! ```text
//! Absent ──register_observer──► Present ──unregister_observer(last)──► Absent
//!
//! unregister_observer(O):
//!   ├─► build UnregisterObserver event {observerID: O.id}
//!   ├─► notify all observers, O included
//!   ├─► remove O
//!   └─► registry empty? ─► drop it (has_observers() == false)
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                         |
//! |-------------------|---------------------------------------------------------------|--------------------------------------------|
//! | **Services**      | The five Senzing service interfaces and their mocks.          | [`SzEngine`], [`MockEngine`], ...          |
//! | **Factory**       | Builds façades from one bag of canned values.                 | [`AbstractFactory`], [`CannedValues`]      |
//! | **Observers**     | Receive one [`Event`] per call, each on its own task.         | [`Observer`], [`ChannelObserver`]          |
//! | **Logging**       | Entry/exit traces at `TRACE`, written through `tracing`.      | [`Logger`], [`TracingLogger`], [`LogLevel`]|
//! | **Redaction**     | Mask sensitive detail values before they leave a façade.      | [`Redact`], [`RedactKeys`]                 |
//! | **Errors**        | Typed errors carrying Senzing message ids.                    | [`SzError`]                                |
//! | **Configuration** | Origin, initial level and redaction applied by the factory.   | [`Config`]                                 |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogObserver`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use szmock::{AbstractFactory, CannedValues, ChannelObserver, SzAbstractFactory, SzEngine, SzObservable};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let canned = CannedValues::new()
//!         .with_string("GetRecordResult", r#"{"DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1001"}"#);
//!     let factory = AbstractFactory::new(canned);
//!     let ctx = CancellationToken::new();
//!
//!     let engine = factory.create_engine(&ctx).await?;
//!     let (observer, mut events) = ChannelObserver::new("audit");
//!     engine.register_observer(&ctx, Arc::new(observer)).await?;
//!
//!     let record = engine.get_record(&ctx, "CUSTOMERS", "1001", 0).await?;
//!     assert!(record.contains("1001"));
//!
//!     let event = events.recv().await.expect("event");
//!     assert_eq!(event.component_id, 6034);
//!     Ok(())
//! }
//! ```
mod canned;
mod component;
mod config;
mod envelope;
mod error;
mod events;
mod factory;
mod logging;
mod observers;
mod szconfig;
mod szconfigmanager;
mod szdiagnostic;
mod szengine;
mod szproduct;
mod traits;

// ---- Public re-exports ----

pub use canned::{CannedValue, CannedValues, Handle};
pub use component::Component;
pub use config::Config;
pub use envelope::{Redact, RedactKeys};
pub use error::{SzError, SzResult};
pub use events::{Details, Event};
pub use factory::AbstractFactory;
pub use logging::{LogLevel, Logger, TracingLogger};
pub use observers::{same_observer, ChannelObserver, FnObserver, Observer, ObserverRegistry};
pub use szconfig::MockConfig;
pub use szconfigmanager::MockConfigManager;
pub use szdiagnostic::MockDiagnostic;
pub use szengine::MockEngine;
pub use szproduct::MockProduct;
pub use traits::{
    StringFragments, SzAbstractFactory, SzConfig, SzConfigManager, SzDiagnostic, SzEngine,
    SzObservable, SzProduct,
};

// Optional: expose a simple built-in observer that logs every event.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
