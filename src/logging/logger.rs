//! # Logger sink.
//!
//! Façades never format log lines themselves: they hand a message number and
//! a [`Details`] map to a [`Logger`]. The default [`TracingLogger`] filters by
//! its own level and forwards to `tracing`.
//!
//! ## Example
//! ```rust
//! use szmock::{Component, Details, LogLevel, Logger, TracingLogger};
//!
//! let logger = TracingLogger::new(Component::Engine);
//! logger.set_log_level(LogLevel::Trace).unwrap();
//! assert!(logger.is_enabled(1));
//! logger.log(1, &Details::new().with("recordID", "1001"));
//! ```

use std::sync::atomic::{AtomicU8, Ordering};

use crate::component::Component;
use crate::error::SzResult;
use crate::events::Details;

use super::LogLevel;

/// Opaque log sink used by the call envelope.
///
/// Implementations must be cheap to call and safe to share between tasks.
pub trait Logger: Send + Sync + 'static {
    /// Writes message `code` with its details regardless of the current level.
    fn write(&self, code: u32, details: &Details);

    /// Writes message `code` with its details if the level allows it.
    fn log(&self, code: u32, details: &Details) {
        if self.is_enabled(code) {
            self.write(code, details);
        }
    }

    /// Changes the minimum level written by this logger.
    fn set_log_level(&self, level: LogLevel) -> SzResult<()>;

    /// Returns the current minimum level.
    fn log_level(&self) -> LogLevel;

    /// True if `name` is a level this logger understands.
    fn is_valid_log_level_name(&self, name: &str) -> bool {
        LogLevel::is_valid_name(name)
    }

    /// True if message `code` would currently be written.
    fn is_enabled(&self, code: u32) -> bool {
        LogLevel::for_message(code) >= self.log_level()
    }
}

/// Default [`Logger`] writing through the `tracing` facade.
///
/// FATAL and PANIC messages are emitted at `tracing::Level::ERROR`.
#[derive(Debug)]
pub struct TracingLogger {
    component: Component,
    level: AtomicU8,
}

impl TracingLogger {
    /// Creates a logger for `component` at [`LogLevel::Info`].
    pub fn new(component: Component) -> Self {
        Self::with_level(component, LogLevel::default())
    }

    /// Creates a logger for `component` at `level`.
    pub fn with_level(component: Component, level: LogLevel) -> Self {
        Self {
            component,
            level: AtomicU8::new(level as u8),
        }
    }

    /// Component whose message ids this logger writes.
    pub fn component(&self) -> Component {
        self.component
    }
}

impl Logger for TracingLogger {
    fn write(&self, code: u32, details: &Details) {
        let message_id = self.component.message_id(code);
        let component = self.component.name();
        match LogLevel::for_message(code) {
            LogLevel::Trace => {
                tracing::trace!(target: "szmock", %message_id, component, %details)
            }
            LogLevel::Debug => {
                tracing::debug!(target: "szmock", %message_id, component, %details)
            }
            LogLevel::Info => {
                tracing::info!(target: "szmock", %message_id, component, %details)
            }
            LogLevel::Warn => {
                tracing::warn!(target: "szmock", %message_id, component, %details)
            }
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => {
                tracing::error!(target: "szmock", %message_id, component, %details)
            }
        }
    }

    fn set_log_level(&self, level: LogLevel) -> SzResult<()> {
        self.level.store(level as u8, Ordering::Relaxed);
        Ok(())
    }

    fn log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info() {
        let logger = TracingLogger::new(Component::Product);
        assert_eq!(logger.log_level(), LogLevel::Info);
        assert!(!logger.is_enabled(1));
        assert!(logger.is_enabled(2001));
    }

    #[test]
    fn set_level_round_trips() {
        let logger = TracingLogger::new(Component::Engine);
        for level in LogLevel::ALL {
            logger.set_log_level(level).unwrap();
            assert_eq!(logger.log_level(), level);
        }
    }

    #[test]
    fn trace_level_enables_envelope_codes() {
        let logger = TracingLogger::with_level(Component::Config, LogLevel::Trace);
        assert!(logger.is_enabled(1));
        assert!(logger.is_enabled(2));
        logger.log(1, &Details::new().with("dataSourceCode", "CUSTOMERS"));
    }

    #[test]
    fn write_ignores_the_level() {
        struct Counting(std::sync::atomic::AtomicUsize);
        impl Logger for Counting {
            fn write(&self, _code: u32, _details: &Details) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
            fn set_log_level(&self, _level: LogLevel) -> SzResult<()> {
                Ok(())
            }
            fn log_level(&self) -> LogLevel {
                LogLevel::Info
            }
        }

        let logger = Counting(std::sync::atomic::AtomicUsize::new(0));
        logger.log(2, &Details::new());
        assert_eq!(logger.0.load(Ordering::Relaxed), 0);
        logger.write(2, &Details::new());
        logger.log(2001, &Details::new());
        assert_eq!(logger.0.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn validates_names() {
        let logger = TracingLogger::new(Component::Diagnostic);
        assert!(logger.is_valid_log_level_name("PANIC"));
        assert!(!logger.is_valid_log_level_name("VERBOSE"));
    }
}
