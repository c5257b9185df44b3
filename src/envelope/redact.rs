//! # Redaction of detail values.
//!
//! Event details and trace records carry call arguments verbatim. Arguments
//! such as engine `settings` may contain credentials, so every façade accepts
//! a [`Redact`] hook that can rewrite a value before it leaves the façade.

use std::collections::HashSet;

/// Rewrites sensitive detail values.
pub trait Redact: Send + Sync + 'static {
    /// Returns a replacement for `value` stored under `key`, or `None` to keep it.
    fn redact(&self, key: &str, value: &str) -> Option<String>;
}

/// Masks the values of a fixed set of keys.
///
/// ## Example
/// ```rust
/// use szmock::{Redact, RedactKeys};
///
/// let redactor = RedactKeys::new(["settings"]);
/// assert_eq!(redactor.redact("settings", "{...}").as_deref(), Some(RedactKeys::MASK));
/// assert_eq!(redactor.redact("instanceName", "demo"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RedactKeys {
    keys: HashSet<String>,
}

impl RedactKeys {
    /// Replacement written in place of a redacted value.
    pub const MASK: &'static str = "****";

    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl Redact for RedactKeys {
    fn redact(&self, key: &str, _value: &str) -> Option<String> {
        self.keys.contains(key).then(|| Self::MASK.to_string())
    }
}
