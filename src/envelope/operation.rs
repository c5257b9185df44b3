//! # Operation descriptors.
//!
//! An [`Operation`] freezes the numbers one façade method uses: its trace
//! entry/exit codes and its observer event code. Each façade keeps a table of
//! these constants in its `codes` module; the envelope is driven entirely by
//! them.
//!
//! ```text
//! Operation { name: "AddRecord", entry: 1, exit: 2, event: Some(8001), returns: false }
//!                                  │        │             │                  │
//!                   trace on entry ┘        │             │                  │
//!                        trace on exit ─────┘             │                  │
//!                                  observer event code ───┘                  │
//!                      include the result under "return" in event details ──┘
//! ```

use crate::canned::Handle;

/// Per-operation code assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// SDK method name (`"AddRecord"`).
    pub name: &'static str,
    /// Trace code written on entry (odd).
    pub entry: u32,
    /// Trace code written on exit (`entry + 1`).
    pub exit: u32,
    /// Observer event code; `None` for operations that are traced only.
    pub event: Option<u32>,
    /// Whether event details carry the result under `"return"`.
    pub returns: bool,
}

impl Operation {
    /// Traced operation that also notifies observers with `event`.
    pub const fn new(name: &'static str, entry: u32, event: u32) -> Self {
        Self {
            name,
            entry,
            exit: entry + 1,
            event: Some(event),
            returns: false,
        }
    }

    /// Operation that is traced but never notifies observers.
    pub const fn traced(name: &'static str, entry: u32) -> Self {
        Self {
            name,
            entry,
            exit: entry + 1,
            event: None,
            returns: false,
        }
    }

    /// Same operation, with the result included in event details.
    pub const fn with_return(self) -> Self {
        Self {
            returns: true,
            ..self
        }
    }
}

/// Codes of the observer-management operations every façade carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservableCodes {
    pub get_observer_origin: Operation,
    pub register_observer: Operation,
    pub set_log_level: Operation,
    pub set_observer_origin: Operation,
    pub unregister_observer: Operation,
}

/// Value an instrumented operation can return.
///
/// `detail` renders the value for the `"return"` key of events and traces;
/// `None` means "nothing worth recording".
pub trait Outcome {
    fn detail(&self) -> Option<String>;
}

impl Outcome for () {
    fn detail(&self) -> Option<String> {
        None
    }
}

impl Outcome for String {
    fn detail(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl Outcome for i64 {
    fn detail(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Outcome for usize {
    fn detail(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Outcome for Handle {
    fn detail(&self) -> Option<String> {
        Some(self.to_string())
    }
}
