//! Logger adapter: severity levels and the opaque log sink.
//!
//! ## Contents
//! - [`LogLevel`] severity names accepted by `SetLogLevel`
//! - [`Logger`] the sink every façade writes trace records to
//! - [`TracingLogger`] default sink backed by the `tracing` crate
//!
//! ## Message numbers
//! The severity of a message is derived from its number:
//! ```text
//!    0.. 999  TRACE   (entry/exit records of the call envelope)
//! 1000..1999  DEBUG
//! 2000..2999  INFO
//! 3000..3999  WARN
//! 4000..4999  ERROR
//! 5000..5999  FATAL
//! 6000..6999  PANIC
//! ```

mod level;
mod logger;

pub use level::LogLevel;
pub use logger::{Logger, TracingLogger};
