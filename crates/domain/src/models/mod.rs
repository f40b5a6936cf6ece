//! Domain models for the asset inventory.

pub mod activity;
pub mod catalog;
pub mod device;
pub mod snapshot;
pub mod user;

pub use activity::{ActivityAction, ActivityEntry, ActivityMeta, EntityType};
pub use catalog::{CatalogEntry, DisplayFields, NewCatalogEntry};
pub use device::{Device, DeviceStatus, DeviceUpdate, NewDevice};
pub use snapshot::InventorySnapshot;
pub use user::{NewUser, User, UserStatus, UserUpdate};
