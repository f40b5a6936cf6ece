//! Domain services for the asset inventory tracker.
//!
//! Services contain pure business logic that operates on domain models.

pub mod activity;
pub mod catalog;
pub mod status;

pub use activity::{
    changed_device_fields, device_created, device_updated, inventory_reset, settings_updated,
    user_created, user_updated, ListChange,
};

pub use catalog::{
    find_catalog_item_id, make_catalog_id, normalize_label, resolve_display_fields, slugify,
    unique_catalog_id,
};

pub use status::{derive_status, normalize_assignee};
