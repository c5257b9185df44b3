//! # Call details.
//!
//! [`Details`] is the ordered string→string map carried by events and trace
//! records. Keys are operation specific (`"dataSourceCode"`, `"recordID"`,
//! `"flags"`, ...); values are already stringified (integers in base 10).
//!
//! ## Example
//! ```rust
//! use szmock::Details;
//!
//! let details = Details::new()
//!     .with("dataSourceCode", "CUSTOMERS")
//!     .with("flags", 0);
//!
//! assert_eq!(details.get("flags"), Some("0"));
//! assert_eq!(details, Details::from([("dataSourceCode", "CUSTOMERS"), ("flags", "0")]));
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Ordered mapping of detail keys to stringified values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details(BTreeMap<String, String>);

impl Details {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds `key = value` (stringified with `Display`) and returns the map.
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts `key = value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// True if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Rewrites every value through `f(key, value)`.
    pub(crate) fn map_values(&mut self, mut f: impl FnMut(&str, &str) -> Option<String>) {
        for (key, value) in self.0.iter_mut() {
            if let Some(replacement) = f(key, value) {
                *value = replacement;
            }
        }
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {value:?}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Details {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(k, v)| (k.into(), v.into()));
        Self(entries.collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Details {
    fn from(entries: [(&str, &str); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Details {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
