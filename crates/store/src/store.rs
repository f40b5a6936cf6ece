//! The in-memory state container and its mutation operations.
//!
//! Every operation validates its input, builds the next snapshot, derives
//! status and activity entries from the transition, then commits: the
//! snapshot is replaced wholesale and subscribers are notified. A rejected
//! operation leaves the prior snapshot untouched.

use validator::Validate;

use domain::models::{
    ActivityEntry, CatalogEntry, Device, DeviceUpdate, InventorySnapshot, NewCatalogEntry,
    NewDevice, NewUser, User, UserUpdate,
};
use domain::services::activity::{self, ListChange};
use domain::services::{derive_status, make_catalog_id, normalize_assignee, unique_catalog_id};

use crate::error::StoreError;
use crate::seed;

type Subscriber = Box<dyn FnMut(&InventorySnapshot) + Send>;

/// Sole writer of inventory state.
pub struct InventoryStore {
    snapshot: InventorySnapshot,
    subscribers: Vec<Subscriber>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// Create a store holding the seed data.
    pub fn new() -> Self {
        Self::from_snapshot(seed::seed_snapshot())
    }

    /// Create a store from a previously captured snapshot.
    ///
    /// Assignees are re-normalized and statuses re-derived so the
    /// status/assignment invariant holds even for snapshots written by
    /// older code.
    pub fn from_snapshot(mut snapshot: InventorySnapshot) -> Self {
        for device in &mut snapshot.devices {
            device.assigned_to_user_id = normalize_assignee(device.assigned_to_user_id.as_deref());
            device.status = derive_status(device.assigned_to_user_id.as_deref());
        }
        Self {
            snapshot,
            subscribers: Vec::new(),
        }
    }

    /// The current snapshot. Read-only to everything outside the store.
    pub fn snapshot(&self) -> &InventorySnapshot {
        &self.snapshot
    }

    /// Register a callback invoked with the new snapshot after every
    /// successful mutation.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&InventorySnapshot) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Add a device. The id must be non-blank and unused.
    pub fn add_device(&mut self, new_device: NewDevice) -> Result<(), StoreError> {
        new_device.validate()?;
        let id = new_device.id.trim().to_string();
        if self.snapshot.device(&id).is_some() {
            return Err(StoreError::DuplicateId { kind: "device", id });
        }

        let assigned_to_user_id = normalize_assignee(new_device.assigned_to_user_id.as_deref());
        let device = Device {
            id: id.clone(),
            serial_number: new_device.serial_number.trim().to_string(),
            device_type: new_device.device_type.trim().to_string(),
            make: new_device.make.trim().to_string(),
            model: new_device.model.trim().to_string(),
            catalog_item_id: blank_to_none(new_device.catalog_item_id.as_deref()),
            location: new_device.location.trim().to_string(),
            status: derive_status(assigned_to_user_id.as_deref()),
            assigned_to_user_id,
            notes: new_device.notes.trim().to_string(),
        };

        let entries = activity::device_created(&device);
        let mut next = self.snapshot.clone();
        next.devices.push(device);
        self.commit(next, entries);
        tracing::info!(device_id = %id, "Added device");
        Ok(())
    }

    /// Merge a partial update onto a device, recomputing its status.
    ///
    /// An unknown id is upserted as the minimal record the update describes;
    /// since that record is also the transition's "previous" state, the
    /// upsert emits no activity entries.
    pub fn update_device(&mut self, id: &str, update: DeviceUpdate) -> Result<(), StoreError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(StoreError::Validation(
                "Device id must not be blank".to_string(),
            ));
        }

        let existing = self.snapshot.device(id).cloned();
        let known = existing.is_some();
        let previous = existing.unwrap_or_else(|| {
            tracing::warn!(device_id = %id, "Updating unknown device, upserting a minimal record");
            let mut minimal = apply_device_update(
                Device {
                    id: id.to_string(),
                    ..Default::default()
                },
                &update,
            );
            minimal.status = derive_status(minimal.assigned_to_user_id.as_deref());
            minimal
        });

        let mut current = apply_device_update(previous.clone(), &update);
        current.status = derive_status(current.assigned_to_user_id.as_deref());

        let entries = activity::device_updated(&previous, &current);
        let mut next = self.snapshot.clone();
        if known {
            if let Some(slot) = next.devices.iter_mut().find(|d| d.id == id) {
                *slot = current;
            }
        } else {
            next.devices.push(current);
        }
        self.commit(next, entries);
        tracing::info!(device_id = %id, "Updated device");
        Ok(())
    }

    /// Add a user. The id must be non-blank and unused, the name non-blank.
    pub fn add_user(&mut self, new_user: NewUser) -> Result<(), StoreError> {
        new_user.validate()?;
        let id = new_user.id.trim().to_string();
        if self.snapshot.user(&id).is_some() {
            return Err(StoreError::DuplicateId { kind: "user", id });
        }

        let user = User {
            id: id.clone(),
            name: new_user.name.trim().to_string(),
            email: new_user.email.trim().to_string(),
            department: new_user.department.trim().to_string(),
            location: new_user.location.trim().to_string(),
            role: new_user.role.trim().to_string(),
            status: new_user.status,
        };

        let entry = activity::user_created(&user);
        let mut next = self.snapshot.clone();
        next.users.push(user);
        self.commit(next, vec![entry]);
        tracing::info!(user_id = %id, "Added user");
        Ok(())
    }

    /// Merge a partial update onto a user. Always records one entry.
    pub fn update_user(&mut self, id: &str, update: UserUpdate) -> Result<(), StoreError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(StoreError::Validation(
                "User id must not be blank".to_string(),
            ));
        }
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(StoreError::Validation(
                    "User name must not be blank".to_string(),
                ));
            }
        }

        let existing = self.snapshot.user(id).cloned();
        let known = existing.is_some();
        let previous = existing.unwrap_or_else(|| {
            tracing::warn!(user_id = %id, "Updating unknown user, upserting a minimal record");
            apply_user_update(
                User {
                    id: id.to_string(),
                    ..Default::default()
                },
                &update,
            )
        });

        let current = apply_user_update(previous, &update);

        let entry = activity::user_updated(&current);
        let mut next = self.snapshot.clone();
        if known {
            if let Some(slot) = next.users.iter_mut().find(|u| u.id == id) {
                *slot = current;
            }
        } else {
            next.users.push(current);
        }
        self.commit(next, vec![entry]);
        tracing::info!(user_id = %id, "Updated user");
        Ok(())
    }

    /// Append a department label. Duplicate prevention is the caller's
    /// concern.
    pub fn add_department(&mut self, value: &str) -> Result<(), StoreError> {
        self.add_list_value("departments", value, |s| &mut s.departments)
    }

    /// Remove every occurrence of a department label. Absent values are a
    /// no-op.
    pub fn remove_department(&mut self, value: &str) {
        self.remove_list_value("departments", value, |s| &mut s.departments)
    }

    /// Append a location label.
    pub fn add_location(&mut self, value: &str) -> Result<(), StoreError> {
        self.add_list_value("locations", value, |s| &mut s.locations)
    }

    /// Remove every occurrence of a location label.
    pub fn remove_location(&mut self, value: &str) {
        self.remove_list_value("locations", value, |s| &mut s.locations)
    }

    /// Append a device-type label.
    pub fn add_device_type(&mut self, value: &str) -> Result<(), StoreError> {
        self.add_list_value("deviceTypes", value, |s| &mut s.device_types)
    }

    /// Remove every occurrence of a device-type label.
    pub fn remove_device_type(&mut self, value: &str) {
        self.remove_list_value("deviceTypes", value, |s| &mut s.device_types)
    }

    /// Add a catalog entry, returning its final id.
    ///
    /// The id derives from the normalized (type, make, model) triple; a
    /// collision with an existing entry gets the first free numeric suffix
    /// and never renames the existing entry.
    pub fn add_catalog_item(&mut self, new_entry: NewCatalogEntry) -> Result<String, StoreError> {
        new_entry.validate()?;
        let device_type = new_entry.device_type.trim().to_string();
        let make = new_entry.make.trim().to_string();
        let model = new_entry.model.trim().to_string();

        let base = make_catalog_id(&device_type, &make, &model);
        let id = unique_catalog_id(&base, &self.snapshot.device_catalog);

        let entry = CatalogEntry {
            id: id.clone(),
            device_type,
            make,
            model,
        };
        let log_entry = activity::settings_updated("deviceCatalog", ListChange::Added, &id);
        let mut next = self.snapshot.clone();
        next.device_catalog.push(entry);
        self.commit(next, vec![log_entry]);
        tracing::info!(catalog_id = %id, "Added catalog entry");
        Ok(id)
    }

    /// Remove a catalog entry by id.
    ///
    /// Devices referencing the entry keep their reference; display
    /// resolution falls back to their inline fields.
    pub fn remove_catalog_item(&mut self, id: &str) {
        let mut next = self.snapshot.clone();
        let before = next.device_catalog.len();
        next.device_catalog.retain(|entry| entry.id != id);
        if next.device_catalog.len() == before {
            return;
        }
        let entry = activity::settings_updated("deviceCatalog", ListChange::Removed, id);
        self.commit(next, vec![entry]);
        tracing::info!(catalog_id = %id, "Removed catalog entry");
    }

    /// Replace every collection with its seed value, leaving a single
    /// reset entry as the whole activity log.
    pub fn reset_all(&mut self) {
        self.commit(seed::seed_snapshot(), vec![activity::inventory_reset()]);
        tracing::info!("Reset inventory to seed data");
    }

    fn add_list_value(
        &mut self,
        list: &'static str,
        value: &str,
        field: fn(&mut InventorySnapshot) -> &mut Vec<String>,
    ) -> Result<(), StoreError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(StoreError::Validation(format!(
                "Cannot add a blank value to {}",
                list
            )));
        }
        let mut next = self.snapshot.clone();
        field(&mut next).push(value.to_string());
        let entry = activity::settings_updated(list, ListChange::Added, value);
        self.commit(next, vec![entry]);
        tracing::info!(list = %list, value = %value, "Added configuration value");
        Ok(())
    }

    fn remove_list_value(
        &mut self,
        list: &'static str,
        value: &str,
        field: fn(&mut InventorySnapshot) -> &mut Vec<String>,
    ) {
        let value = value.trim();
        let mut next = self.snapshot.clone();
        let target = field(&mut next);
        let before = target.len();
        target.retain(|v| v != value);
        if target.len() == before {
            return;
        }
        let entry = activity::settings_updated(list, ListChange::Removed, value);
        self.commit(next, vec![entry]);
        tracing::info!(list = %list, value = %value, "Removed configuration value");
    }

    fn commit(&mut self, mut next: InventorySnapshot, entries: Vec<ActivityEntry>) {
        for entry in entries {
            next.activity_log.insert(0, entry);
        }
        self.snapshot = next;
        let snapshot = &self.snapshot;
        for subscriber in &mut self.subscribers {
            subscriber(snapshot);
        }
    }
}

fn apply_device_update(mut device: Device, update: &DeviceUpdate) -> Device {
    if let Some(value) = &update.serial_number {
        device.serial_number = value.trim().to_string();
    }
    if let Some(value) = &update.device_type {
        device.device_type = value.trim().to_string();
    }
    if let Some(value) = &update.make {
        device.make = value.trim().to_string();
    }
    if let Some(value) = &update.model {
        device.model = value.trim().to_string();
    }
    if let Some(value) = &update.catalog_item_id {
        device.catalog_item_id = blank_to_none(value.as_deref());
    }
    if let Some(value) = &update.location {
        device.location = value.trim().to_string();
    }
    if let Some(value) = &update.assigned_to_user_id {
        device.assigned_to_user_id = normalize_assignee(value.as_deref());
    }
    if let Some(value) = &update.notes {
        device.notes = value.trim().to_string();
    }
    device
}

fn apply_user_update(mut user: User, update: &UserUpdate) -> User {
    if let Some(value) = &update.name {
        user.name = value.trim().to_string();
    }
    if let Some(value) = &update.email {
        user.email = value.trim().to_string();
    }
    if let Some(value) = &update.department {
        user.department = value.trim().to_string();
    }
    if let Some(value) = &update.location {
        user.location = value.trim().to_string();
    }
    if let Some(value) = &update.role {
        user.role = value.trim().to_string();
    }
    if let Some(value) = update.status {
        user.status = value;
    }
    user
}

fn blank_to_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
