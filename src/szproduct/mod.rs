//! # Mock `SzProduct`.
//!
//! Returns canned license and version documents.
//!
//! ## Example
//! ```rust
//! use szmock::{MockProduct, SzProduct};
//! use tokio_util::sync::CancellationToken;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut product = MockProduct::new();
//! product.get_license_result = r#"{"customer":"Acme"}"#.into();
//!
//! let ctx = CancellationToken::new();
//! assert_eq!(product.get_license(&ctx).await.unwrap(), r#"{"customer":"Acme"}"#);
//! # });
//! ```

mod codes;

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::canned::CannedValues;
use crate::component::Component;
use crate::envelope::{Envelope, Redact};
use crate::error::SzResult;
use crate::events::Details;
use crate::logging::Logger;
use crate::traits::{sealed::Instrumented, SzProduct};

/// Canned `SzProduct`.
#[derive(Debug)]
pub struct MockProduct {
    pub get_license_result: String,
    pub get_version_result: String,
    envelope: Envelope,
}

impl MockProduct {
    /// Façade with every canned value at its zero value.
    pub fn new() -> Self {
        Self::from_canned(&CannedValues::new())
    }

    /// Façade populated from `GetLicenseResult` and `GetVersionResult`.
    pub fn from_canned(values: &CannedValues) -> Self {
        Self {
            get_license_result: values.string("GetLicenseResult"),
            get_version_result: values.string("GetVersionResult"),
            envelope: Envelope::new(Component::Product, &codes::OBSERVABLE),
        }
    }

    /// Replaces the lazily-built logger.
    ///
    /// Only takes effect before the façade first traces or changes its log
    /// level. After that the injected logger is dropped and a warning is
    /// written through `tracing`.
    pub fn with_logger(self, logger: Arc<dyn Logger>) -> Self {
        self.envelope.set_logger(logger);
        self
    }

    /// Installs a redaction hook for event and trace details.
    pub fn with_redactor(self, redactor: Arc<dyn Redact>) -> Self {
        self.envelope.set_redactor(Some(redactor));
        self
    }
}

impl Default for MockProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrumented for MockProduct {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[async_trait]
impl SzProduct for MockProduct {
    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()> {
        self.envelope.call(ctx, &codes::DESTROY, Details::new(), || ())
    }

    async fn get_license(&self, ctx: &CancellationToken) -> SzResult<String> {
        self.envelope.call(ctx, &codes::GET_LICENSE, Details::new(), || {
            self.get_license_result.clone()
        })
    }

    async fn get_version(&self, ctx: &CancellationToken) -> SzResult<String> {
        self.envelope.call(ctx, &codes::GET_VERSION, Details::new(), || {
            self.get_version_result.clone()
        })
    }

    async fn initialize(
        &self,
        ctx: &CancellationToken,
        instance_name: &str,
        settings: &str,
        verbose_logging: i64,
    ) -> SzResult<()> {
        let args = Details::new()
            .with("instanceName", instance_name)
            .with("settings", settings)
            .with("verboseLogging", verbose_logging);
        self.envelope.call(ctx, &codes::INITIALIZE, args, || ())
    }
}
