//! Frozen code table of `SzConfigManager`.

use crate::envelope::{ObservableCodes, Operation};

pub const ADD_CONFIG: Operation = Operation::new("AddConfig", 1, 8001).with_return();
pub const CREATE_CONFIG_FROM_CONFIG_ID: Operation =
    Operation::new("CreateConfigFromConfigID", 3, 8002);
pub const CREATE_CONFIG_FROM_STRING: Operation = Operation::new("CreateConfigFromString", 5, 8003);
pub const CREATE_CONFIG_FROM_TEMPLATE: Operation =
    Operation::new("CreateConfigFromTemplate", 7, 8004);
pub const DESTROY: Operation = Operation::new("Destroy", 9, 8005);
pub const GET_CONFIG: Operation = Operation::new("GetConfig", 11, 8006);
pub const GET_CONFIGS: Operation = Operation::new("GetConfigs", 13, 8007);
pub const GET_DEFAULT_CONFIG_ID: Operation =
    Operation::new("GetDefaultConfigID", 15, 8008).with_return();
pub const INITIALIZE: Operation = Operation::new("Initialize", 17, 8009);
pub const REGISTER_CONFIG: Operation = Operation::new("RegisterConfig", 19, 8010).with_return();
pub const REPLACE_DEFAULT_CONFIG_ID: Operation = Operation::new("ReplaceDefaultConfigID", 21, 8011);
pub const SET_DEFAULT_CONFIG: Operation =
    Operation::new("SetDefaultConfig", 23, 8012).with_return();
pub const SET_DEFAULT_CONFIG_ID: Operation = Operation::new("SetDefaultConfigID", 25, 8013);

pub static OBSERVABLE: ObservableCodes = ObservableCodes {
    get_observer_origin: Operation::traced("GetObserverOrigin", 27),
    register_observer: Operation::new("RegisterObserver", 29, 8015),
    set_log_level: Operation::new("SetLogLevel", 31, 8016),
    set_observer_origin: Operation::new("SetObserverOrigin", 33, 8017),
    unregister_observer: Operation::new("UnregisterObserver", 35, 8018),
};
