//! # Mock `SzEngine`.
//!
//! The largest façade: every resolution, search, redo and export operation of
//! the engine, each returning its `<operation>_result` field.
//!
//! Record definitions, redo records and search attributes are opaque documents
//! and never appear in event details; identifiers, flags and handles do, in
//! base 10.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use szmock::{ChannelObserver, MockEngine, SzEngine, SzObservable};
//! use tokio_util::sync::CancellationToken;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let engine = MockEngine::new();
//! let ctx = CancellationToken::new();
//! let (observer, mut events) = ChannelObserver::new("test");
//! engine.register_observer(&ctx, Arc::new(observer)).await.unwrap();
//!
//! engine.add_record(&ctx, "CUSTOMERS", "1001", r#"{"NAME_FULL":"Bob"}"#, 0).await.unwrap();
//!
//! let event = events.recv().await.unwrap();
//! assert_eq!((event.component_id, event.event_code), (6034, 8001));
//! assert_eq!(event.details.get("recordID"), Some("1001"));
//! # });
//! ```

mod codes;
mod export;

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::canned::{CannedValues, Handle};
use crate::component::Component;
use crate::envelope::{Envelope, Redact};
use crate::error::SzResult;
use crate::events::Details;
use crate::logging::Logger;
use crate::traits::{sealed::Instrumented, StringFragments, SzEngine};

/// Canned `SzEngine`.
///
/// The two `*_iterator_result` fields hold the fragments the export streams
/// yield; they are empty unless set directly, so the streams close at once.
#[derive(Debug)]
pub struct MockEngine {
    pub add_record_result: String,
    pub count_redo_records_result: i64,
    pub delete_record_result: String,
    pub export_csv_entity_report_result: Handle,
    pub export_csv_entity_report_iterator_result: Vec<String>,
    pub export_json_entity_report_result: Handle,
    pub export_json_entity_report_iterator_result: Vec<String>,
    pub fetch_next_result: String,
    pub find_interesting_entities_by_entity_id_result: String,
    pub find_interesting_entities_by_record_id_result: String,
    pub find_network_by_entity_id_result: String,
    pub find_network_by_record_id_result: String,
    pub find_path_by_entity_id_result: String,
    pub find_path_by_record_id_result: String,
    pub get_active_config_id_result: i64,
    pub get_entity_by_entity_id_result: String,
    pub get_entity_by_record_id_result: String,
    pub get_record_result: String,
    pub get_redo_record_result: String,
    pub get_stats_result: String,
    pub get_virtual_entity_by_record_id_result: String,
    pub how_entity_by_entity_id_result: String,
    pub preprocess_record_result: String,
    pub process_redo_record_result: String,
    pub reevaluate_entity_result: String,
    pub reevaluate_record_result: String,
    pub search_by_attributes_result: String,
    pub why_entities_result: String,
    pub why_record_in_entity_result: String,
    pub why_records_result: String,
    pub why_search_result: String,
    envelope: Envelope,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::from_canned(&CannedValues::new())
    }

    /// Reads every `<Operation>Result` key of the engine from `values`.
    pub fn from_canned(values: &CannedValues) -> Self {
        let virtual_entity = values.string("GetVirtualEntityByRecordIDResult");
        Self {
            add_record_result: values.string("AddRecordResult"),
            count_redo_records_result: values.int64("CountRedoRecordsResult"),
            delete_record_result: values.string("DeleteRecordResult"),
            export_csv_entity_report_result: values.handle("ExportCsvEntityReportResult"),
            export_csv_entity_report_iterator_result: Vec::new(),
            export_json_entity_report_result: values.handle("ExportJSONEntityReportResult"),
            export_json_entity_report_iterator_result: Vec::new(),
            fetch_next_result: values.string("FetchNextResult"),
            find_interesting_entities_by_entity_id_result: values
                .string("FindInterestingEntitiesByEntityIDResult"),
            find_interesting_entities_by_record_id_result: values
                .string("FindInterestingEntitiesByRecordIDResult"),
            find_network_by_entity_id_result: values.string("FindNetworkByEntityIDResult"),
            find_network_by_record_id_result: values.string("FindNetworkByRecordIDResult"),
            find_path_by_entity_id_result: values.string("FindPathByEntityIDResult"),
            find_path_by_record_id_result: values.string("FindPathByRecordIDResult"),
            get_active_config_id_result: values.int64("GetActiveConfigIDResult"),
            get_entity_by_entity_id_result: values.string("GetEntityByEntityIDResult"),
            get_entity_by_record_id_result: values.string("GetEntityByRecordIDResult"),
            get_record_result: values.string("GetRecordResult"),
            get_redo_record_result: values.string("GetRedoRecordResult"),
            get_stats_result: values.string("GetStatsResult"),
            get_virtual_entity_by_record_id_result: virtual_entity,
            how_entity_by_entity_id_result: values.string("HowEntityByEntityIDResult"),
            preprocess_record_result: values.string("PreprocessRecordResult"),
            process_redo_record_result: values.string("ProcessRedoRecordResult"),
            reevaluate_entity_result: values.string("ReevaluateEntityResult"),
            reevaluate_record_result: values.string("ReevaluateRecordResult"),
            search_by_attributes_result: values.string("SearchByAttributesResult"),
            why_entities_result: values.string("WhyEntitiesResult"),
            why_record_in_entity_result: values.string("WhyRecordInEntityResult"),
            why_records_result: values.string("WhyRecordsResult"),
            why_search_result: values.string("WhySearchResult"),
            envelope: Envelope::new(Component::Engine, &codes::OBSERVABLE),
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

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrumented for MockEngine {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// `{dataSourceCode, recordID, flags}`, the details of most record operations.
fn record_args(data_source_code: &str, record_id: &str, flags: i64) -> Details {
    Details::new()
        .with("dataSourceCode", data_source_code)
        .with("recordID", record_id)
        .with("flags", flags)
}

fn entity_args(entity_id: i64, flags: i64) -> Details {
    Details::new()
        .with("entityID", entity_id)
        .with("flags", flags)
}

#[async_trait]
impl SzEngine for MockEngine {
    async fn add_record(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        _record_definition: &str,
        flags: i64,
    ) -> SzResult<String> {
        let args = record_args(data_source_code, record_id, flags);
        self.envelope.call(ctx, &codes::ADD_RECORD, args, || {
            self.add_record_result.clone()
        })
    }

    async fn close_export_report(
        &self,
        ctx: &CancellationToken,
        export_handle: Handle,
    ) -> SzResult<()> {
        let args = Details::new().with("exportHandle", export_handle);
        self.envelope.call(ctx, &codes::CLOSE_EXPORT_REPORT, args, || ())
    }

    async fn count_redo_records(&self, ctx: &CancellationToken) -> SzResult<i64> {
        self.envelope.call(ctx, &codes::COUNT_REDO_RECORDS, Details::new(), || {
            self.count_redo_records_result
        })
    }

    async fn delete_record(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        let args = record_args(data_source_code, record_id, flags);
        self.envelope.call(ctx, &codes::DELETE_RECORD, args, || {
            self.delete_record_result.clone()
        })
    }

    async fn destroy(&self, ctx: &CancellationToken) -> SzResult<()> {
        self.envelope.call(ctx, &codes::DESTROY, Details::new(), || ())
    }

    async fn export_csv_entity_report(
        &self,
        ctx: &CancellationToken,
        csv_column_list: &str,
        flags: i64,
    ) -> SzResult<Handle> {
        let args = Details::new()
            .with("csvColumnList", csv_column_list)
            .with("flags", flags);
        self.envelope.call(ctx, &codes::EXPORT_CSV_ENTITY_REPORT, args, || {
            self.export_csv_entity_report_result
        })
    }

    fn export_csv_entity_report_iterator(
        &self,
        ctx: &CancellationToken,
        csv_column_list: &str,
        flags: i64,
    ) -> StringFragments {
        let args = Details::new()
            .with("csvColumnList", csv_column_list)
            .with("flags", flags);
        export::fragments(
            &self.envelope,
            ctx,
            codes::EXPORT_CSV_ENTITY_REPORT_ITERATOR,
            args,
            self.export_csv_entity_report_iterator_result.clone(),
        )
    }

    async fn export_json_entity_report(
        &self,
        ctx: &CancellationToken,
        flags: i64,
    ) -> SzResult<Handle> {
        let args = Details::new().with("flags", flags);
        self.envelope.call(ctx, &codes::EXPORT_JSON_ENTITY_REPORT, args, || {
            self.export_json_entity_report_result
        })
    }

    fn export_json_entity_report_iterator(
        &self,
        ctx: &CancellationToken,
        flags: i64,
    ) -> StringFragments {
        let args = Details::new().with("flags", flags);
        export::fragments(
            &self.envelope,
            ctx,
            codes::EXPORT_JSON_ENTITY_REPORT_ITERATOR,
            args,
            self.export_json_entity_report_iterator_result.clone(),
        )
    }

    async fn fetch_next(&self, ctx: &CancellationToken, export_handle: Handle) -> SzResult<String> {
        let args = Details::new().with("exportHandle", export_handle);
        self.envelope.call(ctx, &codes::FETCH_NEXT, args, || {
            self.fetch_next_result.clone()
        })
    }

    async fn find_interesting_entities_by_entity_id(
        &self,
        ctx: &CancellationToken,
        entity_id: i64,
        flags: i64,
    ) -> SzResult<String> {
        self.envelope.call(
            ctx,
            &codes::FIND_INTERESTING_ENTITIES_BY_ENTITY_ID,
            entity_args(entity_id, flags),
            || self.find_interesting_entities_by_entity_id_result.clone(),
        )
    }

    async fn find_interesting_entities_by_record_id(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        self.envelope.call(
            ctx,
            &codes::FIND_INTERESTING_ENTITIES_BY_RECORD_ID,
            record_args(data_source_code, record_id, flags),
            || self.find_interesting_entities_by_record_id_result.clone(),
        )
    }

    async fn find_network_by_entity_id(
        &self,
        ctx: &CancellationToken,
        entity_ids: &str,
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> SzResult<String> {
        let args = Details::new()
            .with("entityIDs", entity_ids)
            .with("maxDegrees", max_degrees)
            .with("buildOutDegrees", build_out_degrees)
            .with("buildOutMaxEntities", build_out_max_entities)
            .with("flags", flags);
        self.envelope.call(ctx, &codes::FIND_NETWORK_BY_ENTITY_ID, args, || {
            self.find_network_by_entity_id_result.clone()
        })
    }

    async fn find_network_by_record_id(
        &self,
        ctx: &CancellationToken,
        record_keys: &str,
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> SzResult<String> {
        let args = Details::new()
            .with("recordKeys", record_keys)
            .with("maxDegrees", max_degrees)
            .with("buildOutDegrees", build_out_degrees)
            .with("buildOutMaxEntities", build_out_max_entities)
            .with("flags", flags);
        self.envelope.call(ctx, &codes::FIND_NETWORK_BY_RECORD_ID, args, || {
            self.find_network_by_record_id_result.clone()
        })
    }

    async fn find_path_by_entity_id(
        &self,
        ctx: &CancellationToken,
        start_entity_id: i64,
        end_entity_id: i64,
        max_degrees: i64,
        avoid_entity_ids: &str,
        required_data_sources: &str,
        flags: i64,
    ) -> SzResult<String> {
        let args = Details::new()
            .with("startEntityID", start_entity_id)
            .with("endEntityID", end_entity_id)
            .with("maxDegrees", max_degrees)
            .with("avoidEntityIDs", avoid_entity_ids)
            .with("requiredDataSources", required_data_sources)
            .with("flags", flags);
        self.envelope.call(ctx, &codes::FIND_PATH_BY_ENTITY_ID, args, || {
            self.find_path_by_entity_id_result.clone()
        })
    }

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
    ) -> SzResult<String> {
        let args = Details::new()
            .with("startDataSourceCode", start_data_source_code)
            .with("startRecordID", start_record_id)
            .with("endDataSourceCode", end_data_source_code)
            .with("endRecordID", end_record_id)
            .with("maxDegrees", max_degrees)
            .with("avoidRecordKeys", avoid_record_keys)
            .with("requiredDataSources", required_data_sources)
            .with("flags", flags);
        self.envelope.call(ctx, &codes::FIND_PATH_BY_RECORD_ID, args, || {
            self.find_path_by_record_id_result.clone()
        })
    }

    async fn get_active_config_id(&self, ctx: &CancellationToken) -> SzResult<i64> {
        self.envelope.call(ctx, &codes::GET_ACTIVE_CONFIG_ID, Details::new(), || {
            self.get_active_config_id_result
        })
    }

    async fn get_entity_by_entity_id(
        &self,
        ctx: &CancellationToken,
        entity_id: i64,
        flags: i64,
    ) -> SzResult<String> {
        self.envelope.call(
            ctx,
            &codes::GET_ENTITY_BY_ENTITY_ID,
            entity_args(entity_id, flags),
            || self.get_entity_by_entity_id_result.clone(),
        )
    }

    async fn get_entity_by_record_id(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        self.envelope.call(
            ctx,
            &codes::GET_ENTITY_BY_RECORD_ID,
            record_args(data_source_code, record_id, flags),
            || self.get_entity_by_record_id_result.clone(),
        )
    }

    async fn get_record(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        self.envelope.call(
            ctx,
            &codes::GET_RECORD,
            record_args(data_source_code, record_id, flags),
            || self.get_record_result.clone(),
        )
    }

    async fn get_redo_record(&self, ctx: &CancellationToken) -> SzResult<String> {
        self.envelope.call(ctx, &codes::GET_REDO_RECORD, Details::new(), || {
            self.get_redo_record_result.clone()
        })
    }

    async fn get_stats(&self, ctx: &CancellationToken) -> SzResult<String> {
        self.envelope.call(ctx, &codes::GET_STATS, Details::new(), || {
            self.get_stats_result.clone()
        })
    }

    async fn get_virtual_entity_by_record_id(
        &self,
        ctx: &CancellationToken,
        record_keys: &str,
        flags: i64,
    ) -> SzResult<String> {
        let args = Details::new()
            .with("recordKeys", record_keys)
            .with("flags", flags);
        self.envelope.call(ctx, &codes::GET_VIRTUAL_ENTITY_BY_RECORD_ID, args, || {
            self.get_virtual_entity_by_record_id_result.clone()
        })
    }

    async fn how_entity_by_entity_id(
        &self,
        ctx: &CancellationToken,
        entity_id: i64,
        flags: i64,
    ) -> SzResult<String> {
        self.envelope.call(
            ctx,
            &codes::HOW_ENTITY_BY_ENTITY_ID,
            entity_args(entity_id, flags),
            || self.how_entity_by_entity_id_result.clone(),
        )
    }

    async fn initialize(
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
        self.envelope.call(ctx, &codes::INITIALIZE, args, || ())
    }

    async fn preprocess_record(
        &self,
        ctx: &CancellationToken,
        _record_definition: &str,
        flags: i64,
    ) -> SzResult<String> {
        let args = Details::new().with("flags", flags);
        self.envelope.call(ctx, &codes::PREPROCESS_RECORD, args, || {
            self.preprocess_record_result.clone()
        })
    }

    async fn prime_engine(&self, ctx: &CancellationToken) -> SzResult<()> {
        self.envelope.call(ctx, &codes::PRIME_ENGINE, Details::new(), || ())
    }

    async fn process_redo_record(
        &self,
        ctx: &CancellationToken,
        _redo_record: &str,
        flags: i64,
    ) -> SzResult<String> {
        let args = Details::new().with("flags", flags);
        self.envelope.call(ctx, &codes::PROCESS_REDO_RECORD, args, || {
            self.process_redo_record_result.clone()
        })
    }

    async fn reevaluate_entity(
        &self,
        ctx: &CancellationToken,
        entity_id: i64,
        flags: i64,
    ) -> SzResult<String> {
        self.envelope.call(
            ctx,
            &codes::REEVALUATE_ENTITY,
            entity_args(entity_id, flags),
            || self.reevaluate_entity_result.clone(),
        )
    }

    async fn reevaluate_record(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        self.envelope.call(
            ctx,
            &codes::REEVALUATE_RECORD,
            record_args(data_source_code, record_id, flags),
            || self.reevaluate_record_result.clone(),
        )
    }

    async fn reinitialize(&self, ctx: &CancellationToken, config_id: i64) -> SzResult<()> {
        let args = Details::new().with("configID", config_id);
        self.envelope.call(ctx, &codes::REINITIALIZE, args, || ())
    }

    async fn search_by_attributes(
        &self,
        ctx: &CancellationToken,
        _attributes: &str,
        search_profile: &str,
        flags: i64,
    ) -> SzResult<String> {
        let args = Details::new()
            .with("searchProfile", search_profile)
            .with("flags", flags);
        self.envelope.call(ctx, &codes::SEARCH_BY_ATTRIBUTES, args, || {
            self.search_by_attributes_result.clone()
        })
    }

    async fn why_entities(
        &self,
        ctx: &CancellationToken,
        entity_id_1: i64,
        entity_id_2: i64,
        flags: i64,
    ) -> SzResult<String> {
        let args = Details::new()
            .with("entityID1", entity_id_1)
            .with("entityID2", entity_id_2)
            .with("flags", flags);
        self.envelope.call(ctx, &codes::WHY_ENTITIES, args, || {
            self.why_entities_result.clone()
        })
    }

    async fn why_record_in_entity(
        &self,
        ctx: &CancellationToken,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        self.envelope.call(
            ctx,
            &codes::WHY_RECORD_IN_ENTITY,
            record_args(data_source_code, record_id, flags),
            || self.why_record_in_entity_result.clone(),
        )
    }

    async fn why_records(
        &self,
        ctx: &CancellationToken,
        data_source_code_1: &str,
        record_id_1: &str,
        data_source_code_2: &str,
        record_id_2: &str,
        flags: i64,
    ) -> SzResult<String> {
        let args = Details::new()
            .with("dataSourceCode1", data_source_code_1)
            .with("recordID1", record_id_1)
            .with("dataSourceCode2", data_source_code_2)
            .with("recordID2", record_id_2)
            .with("flags", flags);
        self.envelope.call(ctx, &codes::WHY_RECORDS, args, || {
            self.why_records_result.clone()
        })
    }

    async fn why_search(
        &self,
        ctx: &CancellationToken,
        _attributes: &str,
        entity_id: i64,
        search_profile: &str,
        flags: i64,
    ) -> SzResult<String> {
        let args = Details::new()
            .with("entityID", entity_id)
            .with("searchProfile", search_profile)
            .with("flags", flags);
        self.envelope.call(ctx, &codes::WHY_SEARCH, args, || {
            self.why_search_result.clone()
        })
    }
}
