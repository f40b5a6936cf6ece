//! Storage keys, one per top-level collection.
//!
//! Each collection persists independently so one unreadable value never
//! takes the rest of the inventory down with it.

pub const DEVICES: &str = "inventory.devices";
pub const USERS: &str = "inventory.users";
pub const DEPARTMENTS: &str = "inventory.departments";
pub const LOCATIONS: &str = "inventory.locations";
pub const DEVICE_TYPES: &str = "inventory.deviceTypes";
pub const DEVICE_CATALOG: &str = "inventory.deviceCatalog";
pub const ACTIVITY_LOG: &str = "inventory.activityLog";

/// Every key, in save order.
pub const ALL: [&str; 7] = [
    DEVICES,
    USERS,
    DEPARTMENTS,
    LOCATIONS,
    DEVICE_TYPES,
    DEVICE_CATALOG,
    ACTIVITY_LOG,
];
