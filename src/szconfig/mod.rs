//! # Mock `SzConfig`.
//!
//! Configuration-authoring façade. Config definitions handed to `import` and
//! `verify_config_definition` are accepted but never copied into events.

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
use crate::traits::{sealed::Instrumented, SzConfig};

/// Canned `SzConfig`.
#[derive(Debug)]
pub struct MockConfig {
    pub add_data_source_result: String,
    pub delete_data_source_result: String,
    pub export_result: String,
    pub get_data_sources_result: String,
    envelope: Envelope,
}

impl MockConfig {
    pub fn new() -> Self {
        Self::from_canned(&CannedValues::new())
    }

    /// Reads `AddDataSourceResult`, `DeleteDataSourceResult`, `ExportResult`
    /// and `GetDataSourcesResult`.
    pub fn from_canned(values: &CannedValues) -> Self {
        Self {
            add_data_source_result: values.string("AddDataSourceResult"),
            delete_data_source_result: values.string("DeleteDataSourceResult"),
            export_result: values.string("ExportResult"),
            get_data_sources_result: values.string("GetDataSourcesResult"),
            envelope: Envelope::new(Component::Config, &codes::OBSERVABLE),
        }
    }

    /// Injects `logger`; ignored with a warning once a logger is in use.
    pub fn with_logger(self, logger: Arc<dyn Logger>) -> Self {
        self.envelope.set_logger(logger);
        self
    }

    pub fn with_redactor(self, redactor: Arc<dyn Redact>) -> Self {
        self.envelope.set_redactor(Some(redactor));
        self
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrumented for MockConfig {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[async_trait]
impl SzConfig for MockConfig {
    async fn add_data_source(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
    ) -> SzResult<String> {
        let args = Details::new().with("dataSourceCode", data_source_code);
        self.envelope.call(ctx, &codes::ADD_DATA_SOURCE, args, || {
            self.add_data_source_result.clone()
        })
    }

    async fn delete_data_source(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
    ) -> SzResult<String> {
        let args = Details::new().with("dataSourceCode", data_source_code);
        self.envelope.call(ctx, &codes::DELETE_DATA_SOURCE, args, || {
            self.delete_data_source_result.clone()
        })
    }

    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()> {
        self.envelope.call(ctx, &codes::DESTROY, Details::new(), || ())
    }

    async fn export(&self, ctx: &CancellationToken) -> SzResult<String> {
        self.envelope.call(ctx, &codes::EXPORT, Details::new(), || {
            self.export_result.clone()
        })
    }

    async fn get_data_sources(&self, ctx: &CancellationToken) -> SzResult<String> {
        self.envelope.call(ctx, &codes::GET_DATA_SOURCES, Details::new(), || {
            self.get_data_sources_result.clone()
        })
    }

    async fn import(&self, ctx: &CancellationToken, _config_definition: &str) -> SzResult<()> {
        self.envelope.call(ctx, &codes::IMPORT, Details::new(), || ())
    }

    async fn import_template(&self, ctx: &CancellationToken) -> SzResult<()> {
        self.envelope.call(ctx, &codes::IMPORT_TEMPLATE, Details::new(), || ())
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

    async fn verify_config_definition(
        &self,
        ctx: &CancellationToken,
        _config_definition: &str,
    ) -> SzResult<()> {
        self.envelope.call(ctx, &codes::VERIFY_CONFIG_DEFINITION, Details::new(), || ())
    }
}
