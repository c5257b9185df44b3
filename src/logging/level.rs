//! # Log levels.
//!
//! [`LogLevel`] is ordered by severity, `Trace` being the most verbose.
//! Setting a façade to `TRACE` is what turns the call envelope's entry/exit
//! records on.

use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl LogLevel {
    /// All levels, most verbose first.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Panic,
    ];

    /// Upper-case level name (`"TRACE"`, `"DEBUG"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Panic => "PANIC",
        }
    }

    /// Severity of message number `code`.
    ///
    /// # Example
    /// ```
    /// use szmock::LogLevel;
    ///
    /// assert_eq!(LogLevel::for_message(1), LogLevel::Trace);
    /// assert_eq!(LogLevel::for_message(4002), LogLevel::Error);
    /// ```
    pub const fn for_message(code: u32) -> LogLevel {
        match code {
            0..=999 => LogLevel::Trace,
            1000..=1999 => LogLevel::Debug,
            2000..=2999 => LogLevel::Info,
            3000..=3999 => LogLevel::Warn,
            4000..=4999 => LogLevel::Error,
            5000..=5999 => LogLevel::Fatal,
            6000..=6999 => LogLevel::Panic,
            _ => LogLevel::Info,
        }
    }

    /// Level stored as `level as u8`; out-of-range values read as the default.
    pub(crate) fn from_u8(raw: u8) -> LogLevel {
        LogLevel::ALL
            .get(usize::from(raw))
            .copied()
            .unwrap_or_default()
    }

    /// True if `name` parses as a level.
    pub fn is_valid_name(name: &str) -> bool {
        name.parse::<LogLevel>().is_ok()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a level name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLogLevel(pub String);

impl fmt::Display for UnknownLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level {:?}", self.0)
    }
}

impl std::error::Error for UnknownLogLevel {}

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLogLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_name() {
        for level in LogLevel::ALL {
            assert_eq!(level.as_str().parse::<LogLevel>(), Ok(level));
        }
        assert_eq!("trace".parse::<LogLevel>(), Ok(LogLevel::Trace));
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(!LogLevel::is_valid_name("BOGUS"));
        assert!(!LogLevel::is_valid_name(""));
        assert_eq!(
            "BOGUS".parse::<LogLevel>(),
            Err(UnknownLogLevel("BOGUS".to_string()))
        );
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Error < LogLevel::Panic);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn u8_round_trip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level as u8), level);
        }
        assert_eq!(LogLevel::from_u8(200), LogLevel::Info);
    }

    #[test]
    fn message_ranges() {
        assert_eq!(LogLevel::for_message(0), LogLevel::Trace);
        assert_eq!(LogLevel::for_message(999), LogLevel::Trace);
        assert_eq!(LogLevel::for_message(1000), LogLevel::Debug);
        assert_eq!(LogLevel::for_message(3500), LogLevel::Warn);
        assert_eq!(LogLevel::for_message(5999), LogLevel::Fatal);
        assert_eq!(LogLevel::for_message(6000), LogLevel::Panic);
        assert_eq!(LogLevel::for_message(8001), LogLevel::Info);
    }
}
