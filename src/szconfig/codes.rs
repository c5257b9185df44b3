//! Frozen code table of `SzConfig`.

use crate::envelope::{ObservableCodes, Operation};

pub const ADD_DATA_SOURCE: Operation = Operation::new("AddDataSource", 1, 8001).with_return();
pub const DELETE_DATA_SOURCE: Operation = Operation::new("DeleteDataSource", 3, 8002);
pub const DESTROY: Operation = Operation::new("Destroy", 5, 8003);
pub const EXPORT: Operation = Operation::new("Export", 7, 8004);
pub const GET_DATA_SOURCES: Operation = Operation::new("GetDataSources", 9, 8005);
pub const IMPORT: Operation = Operation::new("Import", 11, 8006);
pub const IMPORT_TEMPLATE: Operation = Operation::new("ImportTemplate", 13, 8007);
pub const INITIALIZE: Operation = Operation::new("Initialize", 15, 8008);
pub const VERIFY_CONFIG_DEFINITION: Operation = Operation::new("VerifyConfigDefinition", 17, 8009);

pub static OBSERVABLE: ObservableCodes = ObservableCodes {
    get_observer_origin: Operation::traced("GetObserverOrigin", 19),
    register_observer: Operation::new("RegisterObserver", 21, 8011),
    set_log_level: Operation::new("SetLogLevel", 23, 8012),
    set_observer_origin: Operation::new("SetObserverOrigin", 25, 8013),
    unregister_observer: Operation::new("UnregisterObserver", 27, 8014),
};
