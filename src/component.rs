//! # Component identifiers.
//!
//! Every Senzing service kind has a fixed numeric identifier. It is stamped on
//! every observer [`Event`](crate::Event), prefixes every message id written
//! by the logger, and appears in every [`SzError`](crate::SzError) that is
//! bound to a component.
//!
//! | Component       | Id   |
//! |-----------------|------|
//! | `Config`        | 6031 |
//! | `ConfigManager` | 6032 |
//! | `Diagnostic`    | 6033 |
//! | `Engine`        | 6034 |
//! | `Product`       | 6036 |

use std::fmt;

/// Service kind a façade, event or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Config,
    ConfigManager,
    Diagnostic,
    Engine,
    Product,
}

impl Component {
    /// Returns the fixed numeric identifier.
    ///
    /// # Example
    /// ```
    /// use szmock::Component;
    ///
    /// assert_eq!(Component::Engine.id(), 6034);
    /// assert_eq!(Component::Product.id(), 6036);
    /// ```
    pub const fn id(self) -> u32 {
        match self {
            Component::Config => 6031,
            Component::ConfigManager => 6032,
            Component::Diagnostic => 6033,
            Component::Engine => 6034,
            Component::Product => 6036,
        }
    }

    /// Returns the SDK type name (e.g. `"SzEngine"`).
    pub const fn name(self) -> &'static str {
        match self {
            Component::Config => "SzConfig",
            Component::ConfigManager => "SzConfigManager",
            Component::Diagnostic => "SzDiagnostic",
            Component::Engine => "SzEngine",
            Component::Product => "SzProduct",
        }
    }

    /// Formats a message id for `code`, e.g. `SZSDK60340001`.
    pub fn message_id(self, code: u32) -> String {
        format!("SZSDK{}{:04}", self.id(), code)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_fixed() {
        assert_eq!(Component::Config.id(), 6031);
        assert_eq!(Component::ConfigManager.id(), 6032);
        assert_eq!(Component::Diagnostic.id(), 6033);
        assert_eq!(Component::Engine.id(), 6034);
        assert_eq!(Component::Product.id(), 6036);
    }

    #[test]
    fn message_id_pads_code() {
        assert_eq!(Component::Engine.message_id(1), "SZSDK60340001");
        assert_eq!(Component::Config.message_id(8001), "SZSDK60318001");
    }
}
