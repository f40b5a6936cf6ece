//! Activity entry construction for each state-changing operation.
//!
//! Store operations call these helpers with the before/after state and get
//! back the entries to prepend, in emission order.

use crate::models::{ActivityAction, ActivityEntry, Device, EntityType, User};
use crate::services::status::normalize_assignee;

/// Whether a configuration list gained or lost a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    Added,
    Removed,
}

/// Diff two device records, returning changed wire-level field names.
///
/// Assignment and status are tracked through dedicated assignment entries and
/// are excluded here.
pub fn changed_device_fields(previous: &Device, current: &Device) -> Vec<String> {
    let mut fields = Vec::new();
    if previous.id != current.id {
        fields.push("id".to_string());
    }
    if previous.serial_number != current.serial_number {
        fields.push("serialNumber".to_string());
    }
    if previous.device_type != current.device_type {
        fields.push("type".to_string());
    }
    if previous.make != current.make {
        fields.push("make".to_string());
    }
    if previous.model != current.model {
        fields.push("model".to_string());
    }
    if previous.catalog_item_id != current.catalog_item_id {
        fields.push("catalogItemId".to_string());
    }
    if previous.location != current.location {
        fields.push("location".to_string());
    }
    if previous.notes != current.notes {
        fields.push("notes".to_string());
    }
    fields
}

/// Entries for a newly added device, including its initial assignment.
pub fn device_created(device: &Device) -> Vec<ActivityEntry> {
    let mut entries = vec![ActivityEntry::new(
        ActivityAction::DeviceCreated,
        EntityType::Device,
        &device.id,
        format!("Added device {}", device.id),
    )];
    if let Some(user_id) = normalize_assignee(device.assigned_to_user_id.as_deref()) {
        entries.push(device_assigned(&device.id, &user_id));
    }
    entries
}

/// Entries for a device update.
///
/// An assignment transition emits `DEVICE_UNASSIGNED` for the departing
/// assignee and/or `DEVICE_ASSIGNED` for the arriving one; changed
/// non-assignment fields emit a single `DEVICE_UPDATED` carrying their names.
pub fn device_updated(previous: &Device, current: &Device) -> Vec<ActivityEntry> {
    let mut entries = Vec::new();

    let before = normalize_assignee(previous.assigned_to_user_id.as_deref());
    let after = normalize_assignee(current.assigned_to_user_id.as_deref());
    if before != after {
        if let Some(user_id) = before.as_deref() {
            entries.push(device_unassigned(&current.id, user_id));
        }
        if let Some(user_id) = after.as_deref() {
            entries.push(device_assigned(&current.id, user_id));
        }
    }

    let fields = changed_device_fields(previous, current);
    if !fields.is_empty() {
        entries.push(
            ActivityEntry::new(
                ActivityAction::DeviceUpdated,
                EntityType::Device,
                &current.id,
                format!("Updated device {}", current.id),
            )
            .with_fields(fields),
        );
    }

    entries
}

/// Entry for a newly added user.
pub fn user_created(user: &User) -> ActivityEntry {
    ActivityEntry::new(
        ActivityAction::UserCreated,
        EntityType::User,
        &user.id,
        format!("Added user {}", user.name),
    )
}

/// Entry for a user update.
pub fn user_updated(user: &User) -> ActivityEntry {
    ActivityEntry::new(
        ActivityAction::UserUpdated,
        EntityType::User,
        &user.id,
        format!("Updated user {}", user.name),
    )
}

/// Entry for a configuration-list change.
///
/// `list` is the wire-level collection name (`departments`, `locations`,
/// `deviceTypes`, `deviceCatalog`); for catalog changes `value` is the
/// entry id.
pub fn settings_updated(list: &str, change: ListChange, value: &str) -> ActivityEntry {
    let summary = match change {
        ListChange::Added => format!("Added \"{}\" to {}", value, list),
        ListChange::Removed => format!("Removed \"{}\" from {}", value, list),
    };
    ActivityEntry::new(
        ActivityAction::SettingsUpdated,
        EntityType::Settings,
        list,
        summary,
    )
    .with_list_change(list, value)
}

/// The single entry surviving a full reset.
pub fn inventory_reset() -> ActivityEntry {
    ActivityEntry::new(
        ActivityAction::SettingsUpdated,
        EntityType::Settings,
        "inventory",
        "Reset inventory to seed data",
    )
}

fn device_assigned(device_id: &str, user_id: &str) -> ActivityEntry {
    ActivityEntry::new(
        ActivityAction::DeviceAssigned,
        EntityType::Device,
        device_id,
        format!("Assigned device {} to user {}", device_id, user_id),
    )
    .with_user(user_id)
}

fn device_unassigned(device_id: &str, user_id: &str) -> ActivityEntry {
    ActivityEntry::new(
        ActivityAction::DeviceUnassigned,
        EntityType::Device,
        device_id,
        format!("Unassigned device {} from user {}", device_id, user_id),
    )
    .with_user(user_id)
}
