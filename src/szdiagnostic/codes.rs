//! Frozen code table of `SzDiagnostic`.

use crate::envelope::{ObservableCodes, Operation};

pub const CHECK_DATASTORE_PERFORMANCE: Operation =
    Operation::new("CheckDatastorePerformance", 1, 8001);
pub const DESTROY: Operation = Operation::new("Destroy", 3, 8002);
pub const GET_DATASTORE_INFO: Operation = Operation::new("GetDatastoreInfo", 5, 8003);
pub const GET_FEATURE: Operation = Operation::new("GetFeature", 7, 8004);
pub const INITIALIZE: Operation = Operation::new("Initialize", 9, 8005);
pub const INITIALIZE_WITH_CONFIG_ID: Operation = Operation::new("InitializeWithConfigID", 11, 8006);
pub const PURGE_REPOSITORY: Operation = Operation::new("PurgeRepository", 13, 8007);
pub const REINITIALIZE: Operation = Operation::new("Reinitialize", 15, 8008);

pub static OBSERVABLE: ObservableCodes = ObservableCodes {
    get_observer_origin: Operation::traced("GetObserverOrigin", 17),
    register_observer: Operation::new("RegisterObserver", 19, 8010),
    set_log_level: Operation::new("SetLogLevel", 21, 8011),
    set_observer_origin: Operation::new("SetObserverOrigin", 23, 8012),
    unregister_observer: Operation::new("UnregisterObserver", 25, 8013),
};
