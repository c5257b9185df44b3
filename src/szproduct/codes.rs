//! Frozen code table of `SzProduct`.

use crate::envelope::{ObservableCodes, Operation};

pub const DESTROY: Operation = Operation::new("Destroy", 1, 8001);
pub const GET_LICENSE: Operation = Operation::new("GetLicense", 3, 8002);
pub const GET_VERSION: Operation = Operation::new("GetVersion", 5, 8003);
pub const INITIALIZE: Operation = Operation::new("Initialize", 7, 8004);

pub static OBSERVABLE: ObservableCodes = ObservableCodes {
    get_observer_origin: Operation::traced("GetObserverOrigin", 9),
    register_observer: Operation::new("RegisterObserver", 11, 8006),
    set_log_level: Operation::new("SetLogLevel", 13, 8007),
    set_observer_origin: Operation::new("SetObserverOrigin", 15, 8008),
    unregister_observer: Operation::new("UnregisterObserver", 17, 8009),
};
