//! # Factory configuration.
//!
//! Provides [`Config`], the settings an [`AbstractFactory`](crate::AbstractFactory)
//! applies to every façade it creates.
//!
//! ## Sentinel values
//! - `observer_origin = ""` → events carry an empty origin
//! - `redact_keys = []` → detail values are passed through verbatim

use std::sync::Arc;

use crate::envelope::{Redact, RedactKeys};
use crate::logging::LogLevel;

/// Settings shared by the façades of one factory.
///
/// ## Field semantics
/// - `observer_origin`: tag copied into every event (`SetObserverOrigin` can change it later)
/// - `log_level`: initial level of each façade's logger; `Trace` also turns on entry/exit tracing
/// - `redact_keys`: detail keys (e.g. `"settings"`) whose values are masked in events and traces
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Application-supplied tag copied into every event.
    pub observer_origin: String,

    /// Initial log level of each created façade.
    ///
    /// Applied when the façade's logger is first built; does not emit an event.
    pub log_level: LogLevel,

    /// Keys whose detail values are replaced by [`RedactKeys::MASK`].
    ///
    /// Engine settings usually carry database credentials; list `"settings"`
    /// here to keep them out of events and trace records.
    pub redact_keys: Vec<String>,
}

impl Config {
    /// True if façades start with entry/exit tracing on.
    #[inline]
    pub fn trace_enabled(&self) -> bool {
        self.log_level == LogLevel::Trace
    }

    /// Returns the redactor built from `redact_keys`.
    ///
    /// - `None` → nothing to redact
    /// - `Some(r)` → masks the configured keys
    pub fn redactor(&self) -> Option<Arc<dyn Redact>> {
        if self.redact_keys.is_empty() {
            None
        } else {
            Some(Arc::new(RedactKeys::new(self.redact_keys.iter().cloned())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.observer_origin, "");
        assert_eq!(cfg.log_level, LogLevel::Info);
        assert!(!cfg.trace_enabled());
        assert!(cfg.redactor().is_none());
    }

    #[test]
    fn trace_level_enables_tracing() {
        let cfg = Config {
            log_level: LogLevel::Trace,
            ..Config::default()
        };
        assert!(cfg.trace_enabled());
    }

    #[test]
    fn redactor_masks_listed_keys() {
        let cfg = Config {
            redact_keys: vec!["settings".into()],
            ..Config::default()
        };
        let redactor = cfg.redactor().unwrap();
        assert_eq!(
            redactor.redact("settings", "{\"SQL\":{}}").as_deref(),
            Some(RedactKeys::MASK)
        );
        assert_eq!(redactor.redact("instanceName", "demo"), None);
    }
}
