//! Error types returned by the mock façades and raised by observers.
//!
//! A single enum, [`SzError`], covers the three failure classes the mock knows:
//!
//! - [`SzError::InvalidArgument`]: bad caller input (e.g. an unknown log level name).
//! - [`SzError::ObserverFailure`]: an observer's `update` failed. These stay inside
//!   the observer's task and never reach the caller of a service operation.
//! - [`SzError::Sdk`]: an error bubbled up from a collaborator (logger adapter, SDK).
//!
//! Helper methods (`as_label`, `as_message`) mirror the ones used for logs/metrics.

use thiserror::Error;

use crate::component::Component;

/// Result alias used by every service operation.
pub type SzResult<T> = Result<T, SzError>;

/// # Errors produced by the mock SDK.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SzError {
    /// Caller supplied a value the component cannot accept.
    #[error("{component} ({}): invalid argument: {message}", component_id(.component))]
    InvalidArgument {
        /// Component that rejected the argument.
        component: Component,
        /// What was wrong with it.
        message: String,
    },

    /// An observer failed while handling an event.
    #[error("observer {observer:?} failed: {reason}")]
    ObserverFailure {
        /// Identifier of the failing observer.
        observer: String,
        /// Failure description.
        reason: String,
    },

    /// Error bubbled up from the logger adapter or another SDK collaborator.
    #[error("{}: {message}", message_id(.component, .code))]
    Sdk {
        /// Component the error was raised in.
        component: Component,
        /// Message number within the component's catalogue.
        code: u32,
        /// Underlying error message.
        message: String,
    },
}

fn component_id(component: &Component) -> u32 {
    component.id()
}

fn message_id(component: &Component, code: &u32) -> String {
    component.message_id(*code)
}

impl SzError {
    /// Creates an [`SzError::InvalidArgument`].
    pub fn invalid_argument(component: Component, message: impl Into<String>) -> Self {
        SzError::InvalidArgument {
            component,
            message: message.into(),
        }
    }

    /// Creates an [`SzError::ObserverFailure`].
    pub fn observer_failure(observer: impl Into<String>, reason: impl Into<String>) -> Self {
        SzError::ObserverFailure {
            observer: observer.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`SzError::Sdk`].
    pub fn sdk(component: Component, code: u32, message: impl Into<String>) -> Self {
        SzError::Sdk {
            component,
            code,
            message: message.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use szmock::{Component, SzError};
    ///
    /// let err = SzError::invalid_argument(Component::Engine, "bad level");
    /// assert_eq!(err.as_label(), "sz_invalid_argument");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SzError::InvalidArgument { .. } => "sz_invalid_argument",
            SzError::ObserverFailure { .. } => "sz_observer_failure",
            SzError::Sdk { .. } => "sz_sdk",
        }
    }

    /// Returns the bare message without the component prefix.
    pub fn as_message(&self) -> String {
        match self {
            SzError::InvalidArgument { message, .. } => format!("invalid argument: {message}"),
            SzError::ObserverFailure { reason, .. } => format!("observer failure: {reason}"),
            SzError::Sdk { message, .. } => format!("sdk: {message}"),
        }
    }

    /// Returns the component the error is bound to, if any.
    pub fn component(&self) -> Option<Component> {
        match self {
            SzError::InvalidArgument { component, .. } | SzError::Sdk { component, .. } => {
                Some(*component)
            }
            SzError::ObserverFailure { .. } => None,
        }
    }

    /// True for [`SzError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SzError::InvalidArgument { .. })
    }
}
