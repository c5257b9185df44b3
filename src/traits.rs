//! # Service interfaces.
//!
//! The five Senzing service traits plus the factory that builds them. Tests
//! written against these traits can swap the mock façades for real clients.
//!
//! Every service operation takes a [`CancellationToken`] first. A cancelled
//! token never changes the returned value; it only suppresses the observer
//! notification of that call.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use tokio_util::sync::CancellationToken;

use crate::canned::Handle;
use crate::envelope::Outcome;
use crate::error::SzResult;
use crate::observers::Observer;

/// Lazy, finite, non-restartable sequence of export fragments.
///
/// Consumers stop on the first `Err`; the stream ends on end-of-data.
pub type StringFragments = BoxStream<'static, SzResult<String>>;

pub(crate) mod sealed {
    use crate::envelope::Envelope;

    /// Façades that run their operations inside an [`Envelope`].
    pub trait Instrumented: Send + Sync {
        fn envelope(&self) -> &Envelope;
    }
}

/// Observer management and logging controls shared by every service.
#[async_trait]
pub trait SzObservable: Send + Sync {
    /// Registers `observer`; registering the same id twice is a no-op.
    async fn register_observer(
        &self,
        ctx: &CancellationToken,
        observer: Arc<dyn Observer>,
    ) -> SzResult<()>;

    /// Sends the unregistration event (to `observer` as well), then removes it.
    async fn unregister_observer(
        &self,
        ctx: &CancellationToken,
        observer: &dyn Observer,
    ) -> SzResult<()>;

    /// True if at least one observer is registered.
    fn has_observers(&self) -> bool;

    /// Sets the log level by name (`"TRACE"`, `"INFO"`, ...).
    async fn set_log_level(&self, ctx: &CancellationToken, log_level_name: &str) -> SzResult<()>;

    /// Sets the origin copied into subsequent events.
    async fn set_observer_origin(&self, ctx: &CancellationToken, origin: &str) -> SzResult<()>;

    /// Returns the current observer origin.
    async fn get_observer_origin(&self, ctx: &CancellationToken) -> SzResult<String>;
}

#[async_trait]
impl<T> SzObservable for T
where
    T: sealed::Instrumented,
{
    async fn register_observer(
        &self,
        _ctx: &CancellationToken,
        observer: Arc<dyn Observer>,
    ) -> SzResult<()> {
        self.envelope().register_observer(observer)
    }

    async fn unregister_observer(
        &self,
        _ctx: &CancellationToken,
        observer: &dyn Observer,
    ) -> SzResult<()> {
        self.envelope().unregister_observer(observer)
    }

    fn has_observers(&self) -> bool {
        self.envelope().has_observers()
    }

    async fn set_log_level(&self, ctx: &CancellationToken, log_level_name: &str) -> SzResult<()> {
        self.envelope().set_log_level(ctx, log_level_name)
    }

    async fn set_observer_origin(&self, ctx: &CancellationToken, origin: &str) -> SzResult<()> {
        self.envelope().set_observer_origin(ctx, origin)
    }

    async fn get_observer_origin(&self, ctx: &CancellationToken) -> SzResult<String> {
        self.envelope().get_observer_origin(ctx)
    }
}

/// Configuration authoring.
#[async_trait]
pub trait SzConfig: SzObservable {
    async fn add_data_source(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
    ) -> SzResult<String>;
    async fn delete_data_source(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
    ) -> SzResult<String>;
    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()>;
    async fn export(&self, ctx: &CancellationToken) -> SzResult<String>;
    async fn get_data_sources(&self, ctx: &CancellationToken) -> SzResult<String>;
    async fn import(&self, ctx: &CancellationToken, config_definition: &str) -> SzResult<()>;
    async fn import_template(&self, ctx: &CancellationToken) -> SzResult<()>;
    async fn initialize(
        &self,
        ctx: &CancellationToken,
        instance_name: &str,
        settings: &str,
        verbose_logging: i64,
    ) -> SzResult<()>;
    async fn verify_config_definition(
        &self,
        ctx: &CancellationToken,
        config_definition: &str,
    ) -> SzResult<()>;
}

/// Configuration registry.
#[async_trait]
pub trait SzConfigManager: SzObservable {
    async fn add_config(
        &self,
        ctx: &CancellationToken,
        config_definition: &str,
        config_comment: &str,
    ) -> SzResult<i64>;
    async fn create_config_from_config_id(
        &self,
        ctx: &CancellationToken,
        config_id: i64,
    ) -> SzResult<Box<dyn SzConfig>>;
    async fn create_config_from_string(
        &self,
        ctx: &CancellationToken,
        config_definition: &str,
    ) -> SzResult<Box<dyn SzConfig>>;
    async fn create_config_from_template(
        &self,
        ctx: &CancellationToken,
    ) -> SzResult<Box<dyn SzConfig>>;
    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()>;
    async fn get_config(&self, ctx: &CancellationToken, config_id: i64) -> SzResult<String>;
    async fn get_configs(&self, ctx: &CancellationToken) -> SzResult<String>;
    async fn get_default_config_id(&self, ctx: &CancellationToken) -> SzResult<i64>;
    async fn initialize(
        &self,
        ctx: &CancellationToken,
        instance_name: &str,
        settings: &str,
        verbose_logging: i64,
    ) -> SzResult<()>;
    async fn register_config(
        &self,
        ctx: &CancellationToken,
        config_definition: &str,
        config_comment: &str,
    ) -> SzResult<i64>;
    async fn replace_default_config_id(
        &self,
        ctx: &CancellationToken,
        current_default_config_id: i64,
        new_default_config_id: i64,
    ) -> SzResult<()>;
    async fn set_default_config(
        &self,
        ctx: &CancellationToken,
        config_definition: &str,
        config_comment: &str,
    ) -> SzResult<i64>;
    async fn set_default_config_id(&self, ctx: &CancellationToken, config_id: i64) -> SzResult<()>;
}

/// Diagnostics.
#[async_trait]
pub trait SzDiagnostic: SzObservable {
    async fn check_datastore_performance(
        &self,
        ctx: &CancellationToken,
        seconds_to_run: i64,
    ) -> SzResult<String>;
    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()>;
    async fn get_datastore_info(&self, ctx: &CancellationToken) -> SzResult<String>;
    async fn get_feature(&self, ctx: &CancellationToken, feature_id: i64) -> SzResult<String>;
    async fn initialize(
        &self,
        ctx: &CancellationToken,
        instance_name: &str,
        settings: &str,
        verbose_logging: i64,
    ) -> SzResult<()>;
    async fn initialize_with_config_id(
        &self,
        ctx: &CancellationToken,
        instance_name: &str,
        settings: &str,
        config_id: i64,
        verbose_logging: i64,
    ) -> SzResult<()>;
    async fn purge_repository(&self, ctx: &CancellationToken) -> SzResult<()>;
    async fn reinitialize(&self, ctx: &CancellationToken, config_id: i64) -> SzResult<()>;
}

/// The resolution engine.
///
/// `record_definition`, `redo_record` and `attributes` arguments are accepted
/// but never copied into event details.
#[async_trait]
pub trait SzEngine: SzObservable {
    async fn add_record(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        record_definition: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn close_export_report(
        &self,
        ctx: &CancellationToken,
        export_handle: Handle,
    ) -> SzResult<()>;
    async fn count_redo_records(&self, ctx: &CancellationToken) -> SzResult<i64>;
    async fn delete_record(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()>;
    async fn export_csv_entity_report(
        &self,
        ctx: &CancellationToken,
        csv_column_list: &str,
        flags: i64,
    ) -> SzResult<Handle>;
    /// Lazy stream of CSV fragments; nothing happens until it is polled.
    fn export_csv_entity_report_iterator(
        &self,
        ctx: &CancellationToken,
        csv_column_list: &str,
        flags: i64,
    ) -> StringFragments;
    async fn export_json_entity_report(
        &self,
        ctx: &CancellationToken,
        flags: i64,
    ) -> SzResult<Handle>;
    /// Lazy stream of JSON fragments; nothing happens until it is polled.
    fn export_json_entity_report_iterator(
        &self,
        ctx: &CancellationToken,
        flags: i64,
    ) -> StringFragments;
    async fn fetch_next(&self, ctx: &CancellationToken, export_handle: Handle) -> SzResult<String>;
    async fn find_interesting_entities_by_entity_id(
        &self,
        ctx: &CancellationToken,
        entity_id: i64,
        flags: i64,
    ) -> SzResult<String>;
    async fn find_interesting_entities_by_record_id(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn find_network_by_entity_id(
        &self,
        ctx: &CancellationToken,
        entity_ids: &str,
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> SzResult<String>;
    async fn find_network_by_record_id(
        &self,
        ctx: &CancellationToken,
        record_keys: &str,
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> SzResult<String>;
    #[allow(clippy::too_many_arguments)]
    async fn find_path_by_entity_id(
        &self,
        ctx: &CancellationToken,
        start_entity_id: i64,
        end_entity_id: i64,
        max_degrees: i64,
        avoid_entity_ids: &str,
        required_data_sources: &str,
        flags: i64,
    ) -> SzResult<String>;
    #[allow(clippy::too_many_arguments)]
    async fn find_path_by_record_id(
        &self,
        ctx: &CancellationToken,
        start_data_source_code: &str,
        start_record_id: &str,
        end_data_source_code: &str,
        end_record_id: &str,
        max_degrees: i64,
        avoid_record_keys: &str,
        required_data_sources: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn get_active_config_id(&self, ctx: &CancellationToken) -> SzResult<i64>;
    async fn get_entity_by_entity_id(
        &self,
        ctx: &CancellationToken,
        entity_id: i64,
        flags: i64,
    ) -> SzResult<String>;
    async fn get_entity_by_record_id(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn get_record(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn get_redo_record(&self, ctx: &CancellationToken) -> SzResult<String>;
    async fn get_stats(&self, ctx: &CancellationToken) -> SzResult<String>;
    async fn get_virtual_entity_by_record_id(
        &self,
        ctx: &CancellationToken,
        record_keys: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn how_entity_by_entity_id(
        &self,
        ctx: &CancellationToken,
        entity_id: i64,
        flags: i64,
    ) -> SzResult<String>;
    async fn initialize(
        &self,
        ctx: &CancellationToken,
        instance_name: &str,
        settings: &str,
        config_id: i64,
        verbose_logging: i64,
    ) -> SzResult<()>;
    async fn preprocess_record(
        &self,
        ctx: &CancellationToken,
        record_definition: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn prime_engine(&self, ctx: &CancellationToken) -> SzResult<()>;
    async fn process_redo_record(
        &self,
        ctx: &CancellationToken,
        redo_record: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn reevaluate_entity(
        &self,
        ctx: &CancellationToken,
        entity_id: i64,
        flags: i64,
    ) -> SzResult<String>;
    async fn reevaluate_record(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn reinitialize(&self, ctx: &CancellationToken, config_id: i64) -> SzResult<()>;
    async fn search_by_attributes(
        &self,
        ctx: &CancellationToken,
        attributes: &str,
        search_profile: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn why_entities(
        &self,
        ctx: &CancellationToken,
        entity_id_1: i64,
        entity_id_2: i64,
        flags: i64,
    ) -> SzResult<String>;
    async fn why_record_in_entity(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;
    #[allow(clippy::too_many_arguments)]
    async fn why_records(
        &self,
        ctx: &CancellationToken,
        data_source_code_1: &str,
        record_id_1: &str,
        data_source_code_2: &str,
        record_id_2: &str,
        flags: i64,
    ) -> SzResult<String>;
    async fn why_search(
        &self,
        ctx: &CancellationToken,
        attributes: &str,
        entity_id: i64,
        search_profile: &str,
        flags: i64,
    ) -> SzResult<String>;
}

/// Product metadata.
#[async_trait]
pub trait SzProduct: SzObservable {
    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()>;
    async fn get_license(&self, ctx: &CancellationToken) -> SzResult<String>;
    async fn get_version(&self, ctx: &CancellationToken) -> SzResult<String>;
    async fn initialize(
        &self,
        ctx: &CancellationToken,
        instance_name: &str,
        settings: &str,
        verbose_logging: i64,
    ) -> SzResult<()>;
}

/// Builds the five services.
#[async_trait]
pub trait SzAbstractFactory: Send + Sync {
    async fn create_config(&self, ctx: &CancellationToken) -> SzResult<Box<dyn SzConfig>>;
    async fn create_config_manager(
        &self,
        ctx: &CancellationToken,
    ) -> SzResult<Box<dyn SzConfigManager>>;
    async fn create_diagnostic(&self, ctx: &CancellationToken) -> SzResult<Box<dyn SzDiagnostic>>;
    async fn create_engine(&self, ctx: &CancellationToken) -> SzResult<Box<dyn SzEngine>>;
    async fn create_product(&self, ctx: &CancellationToken) -> SzResult<Box<dyn SzProduct>>;
    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()>;
    async fn reinitialize(&self, ctx: &CancellationToken, config_id: i64) -> SzResult<()>;
}

impl Outcome for Box<dyn SzConfig> {
    fn detail(&self) -> Option<String> {
        None
    }
}

