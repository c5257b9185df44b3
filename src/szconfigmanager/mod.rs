//! # Mock `SzConfigManager`.
//!
//! Besides its own canned values the manager keeps a second bag,
//! `config_values`, from which the `create_config_from_*` operations build
//! [`MockConfig`] façades:
//!
//! ```text
//! MockConfigManager ──create_config_from_template──► MockConfig::from_canned(config_values)
//!        │                                                  │
//!        └──── origin, log level, trace flag, redactor ─────┘ (copied at creation)
//! ```
//!
//! Observers are not shared: a created config starts without observers.

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
use crate::szconfig::MockConfig;
use crate::traits::{sealed::Instrumented, SzConfig, SzConfigManager};

/// Canned `SzConfigManager`.
#[derive(Debug)]
pub struct MockConfigManager {
    pub add_config_result: i64,
    pub get_config_result: String,
    pub get_configs_result: String,
    pub get_default_config_id_result: i64,
    pub register_config_result: i64,
    pub set_default_config_result: i64,
    /// Bag used to populate configs created by this manager.
    pub config_values: CannedValues,
    envelope: Envelope,
}

impl MockConfigManager {
    pub fn new() -> Self {
        Self::from_canned(&CannedValues::new())
    }

    /// Reads the manager's `<Operation>Result` keys and keeps a copy of
    /// `values` for the configs it creates.
    pub fn from_canned(values: &CannedValues) -> Self {
        Self {
            add_config_result: values.int64("AddConfigResult"),
            get_config_result: values.string("GetConfigResult"),
            get_configs_result: values.string("GetConfigsResult"),
            get_default_config_id_result: values.int64("GetDefaultConfigIDResult"),
            register_config_result: values.int64("RegisterConfigResult"),
            set_default_config_result: values.int64("SetDefaultConfigResult"),
            config_values: values.clone(),
            envelope: Envelope::new(Component::ConfigManager, &codes::OBSERVABLE),
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

    fn child_config(&self) -> Box<dyn SzConfig> {
        let config = MockConfig::from_canned(&self.config_values);
        config.envelope().inherit(&self.envelope);
        Box::new(config)
    }
}

impl Default for MockConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrumented for MockConfigManager {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[async_trait]
impl SzConfigManager for MockConfigManager {
    async fn add_config(
        &self,
        ctx: &CancellationToken,
        _config_definition: &str,
        config_comment: &str,
    ) -> SzResult<i64> {
        let args = Details::new().with("configComment", config_comment);
        self.envelope.call(ctx, &codes::ADD_CONFIG, args, || self.add_config_result)
    }

    async fn create_config_from_config_id(
        &self,
        ctx: &CancellationToken,
        config_id: i64,
    ) -> SzResult<Box<dyn SzConfig>> {
        let args = Details::new().with("configID", config_id);
        self.envelope.call(ctx, &codes::CREATE_CONFIG_FROM_CONFIG_ID, args, || {
            self.child_config()
        })
    }

    async fn create_config_from_string(
        &self,
        ctx: &CancellationToken,
        _config_definition: &str,
    ) -> SzResult<Box<dyn SzConfig>> {
        self.envelope.call(ctx, &codes::CREATE_CONFIG_FROM_STRING, Details::new(), || {
            self.child_config()
        })
    }

    async fn create_config_from_template(
        &self,
        ctx: &CancellationToken,
    ) -> SzResult<Box<dyn SzConfig>> {
        self.envelope.call(
            ctx,
            &codes::CREATE_CONFIG_FROM_TEMPLATE,
            Details::new(),
            || self.child_config(),
        )
    }

    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()> {
        self.envelope.call(ctx, &codes::DESTROY, Details::new(), || ())
    }

    async fn get_config(&self, ctx: &CancellationToken, config_id: i64) -> SzResult<String> {
        let args = Details::new().with("configID", config_id);
        self.envelope.call(ctx, &codes::GET_CONFIG, args, || {
            self.get_config_result.clone()
        })
    }

    async fn get_configs(&self, ctx: &CancellationToken) -> SzResult<String> {
        self.envelope.call(ctx, &codes::GET_CONFIGS, Details::new(), || {
            self.get_configs_result.clone()
        })
    }

    async fn get_default_config_id(&self, ctx: &CancellationToken) -> SzResult<i64> {
        self.envelope.call(ctx, &codes::GET_DEFAULT_CONFIG_ID, Details::new(), || {
            self.get_default_config_id_result
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

    async fn register_config(
        &self,
        ctx: &CancellationToken,
        _config_definition: &str,
        config_comment: &str,
    ) -> SzResult<i64> {
        let args = Details::new().with("configComment", config_comment);
        self.envelope.call(ctx, &codes::REGISTER_CONFIG, args, || {
            self.register_config_result
        })
    }

    async fn replace_default_config_id(
        &self,
        ctx: &CancellationToken,
        current_default_config_id: i64,
        new_default_config_id: i64,
    ) -> SzResult<()> {
        let args = Details::new()
            .with("currentDefaultConfigID", current_default_config_id)
            .with("newDefaultConfigID", new_default_config_id);
        self.envelope.call(ctx, &codes::REPLACE_DEFAULT_CONFIG_ID, args, || ())
    }

    async fn set_default_config(
        &self,
        ctx: &CancellationToken,
        _config_definition: &str,
        config_comment: &str,
    ) -> SzResult<i64> {
        let args = Details::new().with("configComment", config_comment);
        self.envelope.call(ctx, &codes::SET_DEFAULT_CONFIG, args, || {
            self.set_default_config_result
        })
    }

    async fn set_default_config_id(&self, ctx: &CancellationToken, config_id: i64) -> SzResult<()> {
        let args = Details::new().with("configID", config_id);
        self.envelope.call(ctx, &codes::SET_DEFAULT_CONFIG_ID, args, || ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::ChannelObserver;
    use crate::traits::SzObservable;
    use std::time::Duration;

    async fn recv(rx: &mut tokio::sync::mpsc::UnboundedReceiver<crate::Event>) -> crate::Event {
        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn register_config_returns_canned_id() {
        let values = CannedValues::new().with_int64("RegisterConfigResult", 4019066234);
        let manager = MockConfigManager::from_canned(&values);
        let ctx = CancellationToken::new();
        let (obs, mut rx) = ChannelObserver::new("o");
        manager
            .register_observer(&ctx, Arc::new(obs))
            .await
            .unwrap();

        let id = manager
            .register_config(&ctx, r#"{"G2_CONFIG":{}}"#, "initial")
            .await
            .unwrap();
        assert_eq!(id, 4019066234);

        let ev = recv(&mut rx).await;
        assert_eq!(ev.component_id, 6032);
        assert_eq!(ev.event_code, 8010);
        assert_eq!(
            ev.details,
            Details::from([("configComment", "initial"), ("return", "4019066234")])
        );
    }

    #[tokio::test]
    async fn created_configs_use_config_values() {
        let values = CannedValues::new()
            .with_string("GetDataSourcesResult", r#"{"DATA_SOURCES":[]}"#);
        let manager = MockConfigManager::from_canned(&values);
        let ctx = CancellationToken::new();

        let config = manager.create_config_from_template(&ctx).await.unwrap();
        assert_eq!(
            config.get_data_sources(&ctx).await.unwrap(),
            r#"{"DATA_SOURCES":[]}"#
        );
        assert!(!config.has_observers());
    }

    #[tokio::test]
    async fn created_configs_inherit_origin_and_trace() {
        let manager = MockConfigManager::new();
        let ctx = CancellationToken::new();
        manager.set_observer_origin(&ctx, "registry").await.unwrap();
        manager.set_log_level(&ctx, "TRACE").await.unwrap();

        let config = manager.create_config_from_config_id(&ctx, 7).await.unwrap();
        assert_eq!(config.get_observer_origin(&ctx).await.unwrap(), "registry");

        let (obs, mut rx) = ChannelObserver::new("child");
        config.register_observer(&ctx, Arc::new(obs)).await.unwrap();
        config.add_data_source(&ctx, "CUSTOMERS").await.unwrap();
        let ev = recv(&mut rx).await;
        assert_eq!(ev.origin, "registry");
        assert_eq!(ev.component_id, 6031);
    }

    #[tokio::test]
    async fn unregister_delivers_final_event() {
        let manager = MockConfigManager::new();
        let ctx = CancellationToken::new();
        let (obs, mut rx) = ChannelObserver::new("leaving");
        let obs = Arc::new(obs);
        manager.register_observer(&ctx, obs.clone()).await.unwrap();
        manager
            .unregister_observer(&ctx, obs.as_ref())
            .await
            .unwrap();

        let ev = recv(&mut rx).await;
        assert_eq!(ev.event_code, 8018);
        assert_eq!(ev.details, Details::from([("observerID", "leaving")]));
        assert!(!manager.has_observers());
    }
}
