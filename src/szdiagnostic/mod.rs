//! # Mock `SzDiagnostic`.

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
use crate::traits::{sealed::Instrumented, SzDiagnostic};

/// Canned `SzDiagnostic`.
#[derive(Debug)]
pub struct MockDiagnostic {
    pub check_datastore_performance_result: String,
    pub get_datastore_info_result: String,
    pub get_feature_result: String,
    envelope: Envelope,
}

impl MockDiagnostic {
    pub fn new() -> Self {
        Self::from_canned(&CannedValues::new())
    }

    pub fn from_canned(values: &CannedValues) -> Self {
        Self {
            check_datastore_performance_result: values.string("CheckDatastorePerformanceResult"),
            get_datastore_info_result: values.string("GetDatastoreInfoResult"),
            get_feature_result: values.string("GetFeatureResult"),
            envelope: Envelope::new(Component::Diagnostic, &codes::OBSERVABLE),
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

impl Default for MockDiagnostic {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrumented for MockDiagnostic {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[async_trait]
impl SzDiagnostic for MockDiagnostic {
    async fn check_datastore_performance(
        &self,
        ctx: &CancellationToken,
        seconds_to_run: i64,
    ) -> SzResult<String> {
        let args = Details::new().with("secondsToRun", seconds_to_run);
        self.envelope.call(ctx, &codes::CHECK_DATASTORE_PERFORMANCE, args, || {
            self.check_datastore_performance_result.clone()
        })
    }

    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()> {
        self.envelope.call(ctx, &codes::DESTROY, Details::new(), || ())
    }

    async fn get_datastore_info(&self, ctx: &CancellationToken) -> SzResult<String> {
        self.envelope.call(ctx, &codes::GET_DATASTORE_INFO, Details::new(), || {
            self.get_datastore_info_result.clone()
        })
    }

    async fn get_feature(&self, ctx: &CancellationToken, feature_id: i64) -> SzResult<String> {
        let args = Details::new().with("featureID", feature_id);
        self.envelope.call(ctx, &codes::GET_FEATURE, args, || {
            self.get_feature_result.clone()
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

    async fn initialize_with_config_id(
        &self,
        ctx: &CancellationToken,
        instance_name: &str,
        settings: &str,
        config_id: i64,
        verbose_logging: i64,
    ) -> SzResult<()> {
        let args = Details::new()
            .with("instanceName", instance_name)
            .with("settings", settings)
            .with("configID", config_id)
            .with("verboseLogging", verbose_logging);
        self.envelope.call(ctx, &codes::INITIALIZE_WITH_CONFIG_ID, args, || ())
    }

    async fn purge_repository(&self, ctx: &CancellationToken) -> SzResult<()> {
        self.envelope.call(ctx, &codes::PURGE_REPOSITORY, Details::new(), || ())
    }

    async fn reinitialize(&self, ctx: &CancellationToken, config_id: i64) -> SzResult<()> {
        let args = Details::new().with("configID", config_id);
        self.envelope.call(ctx, &codes::REINITIALIZE, args, || ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::ChannelObserver;
    use crate::traits::SzObservable;
    use std::time::Duration;

    #[tokio::test]
    async fn check_datastore_performance_is_canned() {
        let report = r#"{"numRecordsInserted":0}"#;
        let values = CannedValues::new()
            .with_string("CheckDatastorePerformanceResult", report);
        let diagnostic = MockDiagnostic::from_canned(&values);
        let ctx = CancellationToken::new();

        let first = diagnostic
            .check_datastore_performance(&ctx, 1)
            .await
            .unwrap();
        let second = diagnostic
            .check_datastore_performance(&ctx, 1)
            .await
            .unwrap();
        assert_eq!(first, report);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn initialize_with_config_id_reports_all_arguments() {
        let diagnostic = MockDiagnostic::new();
        let ctx = CancellationToken::new();
        let (obs, mut rx) = ChannelObserver::new("o");
        diagnostic
            .register_observer(&ctx, Arc::new(obs))
            .await
            .unwrap();

        diagnostic
            .initialize_with_config_id(&ctx, "diag", "{}", 4019066234, 0)
            .await
            .unwrap();

        let ev = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(ev.component_id, 6033);
        assert_eq!(ev.event_code, 8006);
        assert_eq!(ev.details.get("configID"), Some("4019066234"));
        assert_eq!(ev.details.len(), 4);
    }

    #[tokio::test]
    async fn no_op_operations_succeed() {
        let diagnostic = MockDiagnostic::new();
        let ctx = CancellationToken::new();
        diagnostic.purge_repository(&ctx).await.unwrap();
        diagnostic.reinitialize(&ctx, 1).await.unwrap();
        diagnostic.destroy(&ctx).await.unwrap();
        assert_eq!(diagnostic.get_feature(&ctx, 1).await.unwrap(), "");
        assert_eq!(diagnostic.get_datastore_info(&ctx).await.unwrap(), "");
    }
}
