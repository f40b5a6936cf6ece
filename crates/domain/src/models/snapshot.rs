//! Full inventory state as one value.

use serde::{Deserialize, Serialize};

use crate::models::{ActivityEntry, CatalogEntry, Device, User};

/// Every collection the tracker manages, snapshotted together.
///
/// The activity log is ordered newest-first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub device_types: Vec<String>,
    #[serde(default)]
    pub device_catalog: Vec<CatalogEntry>,
    #[serde(default)]
    pub activity_log: Vec<ActivityEntry>,
}

impl InventorySnapshot {
    /// Look up a device by id.
    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Look up a user by id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up a catalog entry by id.
    pub fn catalog_entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.device_catalog.iter().find(|c| c.id == id)
    }
}
