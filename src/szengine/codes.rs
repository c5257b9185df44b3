//! Frozen code table of `SzEngine`.
//!
//! The n-th operation traces with `2n-1` / `2n` and, if it notifies, uses
//! event code `8000 + n`.

use crate::envelope::{ObservableCodes, Operation};

pub const ADD_RECORD: Operation = Operation::new("AddRecord", 1, 8001);
pub const CLOSE_EXPORT_REPORT: Operation = Operation::new("CloseExportReport", 3, 8002);
pub const COUNT_REDO_RECORDS: Operation = Operation::new("CountRedoRecords", 5, 8003).with_return();
pub const DELETE_RECORD: Operation = Operation::new("DeleteRecord", 7, 8004);
pub const DESTROY: Operation = Operation::new("Destroy", 9, 8005);
pub const EXPORT_CSV_ENTITY_REPORT: Operation =
    Operation::new("ExportCsvEntityReport", 11, 8006).with_return();
pub const EXPORT_CSV_ENTITY_REPORT_ITERATOR: Operation =
    Operation::new("ExportCsvEntityReportIterator", 13, 8007);
pub const EXPORT_JSON_ENTITY_REPORT: Operation =
    Operation::new("ExportJSONEntityReport", 15, 8008).with_return();
pub const EXPORT_JSON_ENTITY_REPORT_ITERATOR: Operation =
    Operation::new("ExportJSONEntityReportIterator", 17, 8009);
pub const FETCH_NEXT: Operation = Operation::new("FetchNext", 19, 8010);
pub const FIND_INTERESTING_ENTITIES_BY_ENTITY_ID: Operation =
    Operation::new("FindInterestingEntitiesByEntityID", 21, 8011);
pub const FIND_INTERESTING_ENTITIES_BY_RECORD_ID: Operation =
    Operation::new("FindInterestingEntitiesByRecordID", 23, 8012);
pub const FIND_NETWORK_BY_ENTITY_ID: Operation = Operation::new("FindNetworkByEntityID", 25, 8013);
pub const FIND_NETWORK_BY_RECORD_ID: Operation = Operation::new("FindNetworkByRecordID", 27, 8014);
pub const FIND_PATH_BY_ENTITY_ID: Operation = Operation::new("FindPathByEntityID", 29, 8015);
pub const FIND_PATH_BY_RECORD_ID: Operation = Operation::new("FindPathByRecordID", 31, 8016);
pub const GET_ACTIVE_CONFIG_ID: Operation =
    Operation::new("GetActiveConfigID", 33, 8017).with_return();
pub const GET_ENTITY_BY_ENTITY_ID: Operation = Operation::new("GetEntityByEntityID", 35, 8018);
pub const GET_ENTITY_BY_RECORD_ID: Operation = Operation::new("GetEntityByRecordID", 37, 8019);
pub const GET_RECORD: Operation = Operation::new("GetRecord", 39, 8020);
pub const GET_REDO_RECORD: Operation = Operation::new("GetRedoRecord", 41, 8021);
pub const GET_STATS: Operation = Operation::new("GetStats", 43, 8022);
pub const GET_VIRTUAL_ENTITY_BY_RECORD_ID: Operation =
    Operation::new("GetVirtualEntityByRecordID", 45, 8023);
pub const HOW_ENTITY_BY_ENTITY_ID: Operation = Operation::new("HowEntityByEntityID", 47, 8024);
pub const INITIALIZE: Operation = Operation::new("Initialize", 49, 8025);
pub const PREPROCESS_RECORD: Operation = Operation::new("PreprocessRecord", 51, 8026);
pub const PRIME_ENGINE: Operation = Operation::new("PrimeEngine", 53, 8027);
pub const PROCESS_REDO_RECORD: Operation = Operation::new("ProcessRedoRecord", 55, 8028);
pub const REEVALUATE_ENTITY: Operation = Operation::new("ReevaluateEntity", 57, 8029);
pub const REEVALUATE_RECORD: Operation = Operation::new("ReevaluateRecord", 59, 8030);
pub const REINITIALIZE: Operation = Operation::new("Reinitialize", 61, 8031);
pub const SEARCH_BY_ATTRIBUTES: Operation = Operation::new("SearchByAttributes", 63, 8032);
pub const WHY_ENTITIES: Operation = Operation::new("WhyEntities", 65, 8033);
pub const WHY_RECORD_IN_ENTITY: Operation = Operation::new("WhyRecordInEntity", 67, 8034);
pub const WHY_RECORDS: Operation = Operation::new("WhyRecords", 69, 8035);
pub const WHY_SEARCH: Operation = Operation::new("WhySearch", 71, 8036);

pub static OBSERVABLE: ObservableCodes = ObservableCodes {
    get_observer_origin: Operation::traced("GetObserverOrigin", 73),
    register_observer: Operation::new("RegisterObserver", 75, 8038),
    set_log_level: Operation::new("SetLogLevel", 77, 8039),
    set_observer_origin: Operation::new("SetObserverOrigin", 79, 8040),
    unregister_observer: Operation::new("UnregisterObserver", 81, 8041),
};
