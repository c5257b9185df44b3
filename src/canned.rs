//! # Canned values.
//!
//! A [`CannedValues`] bag maps `"<Operation>Result"` keys to the values the
//! mock façades return. Reads never fail: an absent key, or a key holding a
//! value of another type, yields the type's zero value (`0`, `""`,
//! [`Handle::ZERO`]). Tests therefore only name the values they care about.
//!
//! ## Example
//! ```rust
//! use szmock::{CannedValues, Handle};
//!
//! let canned = CannedValues::new()
//!     .with_string("GetLicenseResult", r#"{"customer":"Senzing"}"#)
//!     .with_int64("GetActiveConfigIDResult", 4_019_066_234)
//!     .with_handle("ExportJSONEntityReportResult", Handle(1));
//!
//! assert_eq!(canned.int64("GetActiveConfigIDResult"), 4_019_066_234);
//! assert_eq!(canned.int64("CountRedoRecordsResult"), 0);
//! assert_eq!(canned.string("GetVersionResult"), "");
//! ```

use std::collections::HashMap;
use std::fmt;

/// Opaque export cursor returned by `ExportJSONEntityReport` / `ExportCsvEntityReport`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Handle(pub u64);

impl Handle {
    /// The zero handle.
    pub const ZERO: Handle = Handle(0);
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Handle {
    fn from(raw: u64) -> Self {
        Handle(raw)
    }
}

/// One canned value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CannedValue {
    Int64(i64),
    String(String),
    Handle(Handle),
}

/// Keyed bag of canned values with zero-default reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CannedValues {
    values: HashMap<String, CannedValue>,
}

impl CannedValues {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: CannedValue) -> &mut Self {
        self.values.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn with_int64(mut self, key: impl Into<String>, value: i64) -> Self {
        self.insert(key, CannedValue::Int64(value));
        self
    }

    #[must_use]
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, CannedValue::String(value.into()));
        self
    }

    #[must_use]
    pub fn with_handle(mut self, key: impl Into<String>, value: impl Into<Handle>) -> Self {
        self.insert(key, CannedValue::Handle(value.into()));
        self
    }

    /// Integer stored under `key`, or `0`.
    pub fn int64(&self, key: &str) -> i64 {
        match self.values.get(key) {
            Some(CannedValue::Int64(v)) => *v,
            _ => 0,
        }
    }

    /// String stored under `key`, or `""`.
    pub fn string(&self, key: &str) -> String {
        match self.values.get(key) {
            Some(CannedValue::String(v)) => v.clone(),
            _ => String::new(),
        }
    }

    /// Handle stored under `key`, or [`Handle::ZERO`].
    pub fn handle(&self, key: &str) -> Handle {
        match self.values.get(key) {
            Some(CannedValue::Handle(v)) => *v,
            _ => Handle::ZERO,
        }
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&CannedValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CannedValue)> for CannedValues {
    fn from_iter<I: IntoIterator<Item = (K, CannedValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
