//! # LogObserver: write events through `tracing`
//!
//! A minimal observer that logs every incoming [`Event`] at INFO level (or
//! WARN when the event carries an error). Use it for tests or demos.
//!
//! ## Example output (with a `tracing_subscriber::fmt` subscriber)
//! ```text
//! INFO szmock::observer: event origin="demo" component_id=6034 event_code=8001 details={"dataSourceCode": "CUSTOMERS", "flags": "0", "recordID": "1001"}
//! WARN szmock::observer: event origin="demo" component_id=6034 event_code=8039 error=... details={"logLevel": "BOGUS"}
//! ```

use async_trait::async_trait;

use crate::error::SzResult;
use crate::events::Event;

use super::Observer;

/// Event-logging observer.
#[derive(Debug, Clone)]
pub struct LogObserver {
    id: String,
}

impl LogObserver {
    /// Construct a new [`LogObserver`] with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("LogObserver")
    }
}

#[async_trait]
impl Observer for LogObserver {
    fn id(&self) -> &str {
        &self.id
    }

    async fn update(&self, e: &Event) -> SzResult<()> {
        match &e.error {
            Some(err) => tracing::warn!(
                target: "szmock::observer",
                origin = %e.origin,
                component_id = e.component_id,
                event_code = e.event_code,
                error = %err,
                details = %e.details,
                "event"
            ),
            None => tracing::info!(
                target: "szmock::observer",
                origin = %e.origin,
                component_id = e.component_id,
                event_code = e.event_code,
                details = %e.details,
                "event"
            ),
        }
        Ok(())
    }
}
