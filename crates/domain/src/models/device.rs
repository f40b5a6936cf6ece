//! Device domain model.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Deployment status of a device.
///
/// The status is never set by callers; it is derived from the assignment
/// reference on every write path (see `services::status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Deployed,
    #[default]
    NotDeployed,
}

impl DeviceStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Deployed => "Deployed",
            DeviceStatus::NotDeployed => "Not deployed",
        }
    }

    /// Map an arbitrary stored string onto a status.
    ///
    /// Anything that is not "deployed" after trimming and lowercasing counts
    /// as not deployed, so malformed persisted values never fail a load.
    pub fn normalize(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "deployed" => DeviceStatus::Deployed,
            _ => DeviceStatus::NotDeployed,
        }
    }

    fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .as_deref()
            .map_or(DeviceStatus::NotDeployed, DeviceStatus::normalize))
    }
}

impl FromStr for DeviceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deployed" => Ok(DeviceStatus::Deployed),
            "not_deployed" => Ok(DeviceStatus::NotDeployed),
            _ => Err(format!("Unknown device status: {}", s)),
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceStatus::Deployed => write!(f, "deployed"),
            DeviceStatus::NotDeployed => write!(f, "not_deployed"),
        }
    }
}

/// A tracked physical asset.
///
/// `device_type`, `make`, and `model` are the inline hardware fields; when
/// `catalog_item_id` points at a catalog entry, the entry's fields take
/// precedence at display time (see `services::catalog`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(rename = "type", default)]
    pub device_type: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_item_id: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub assigned_to_user_id: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, deserialize_with = "DeviceStatus::deserialize_lenient")]
    pub status: DeviceStatus,
}

/// Input payload for registering a new device.
///
/// There is no `status` field: status is derived from the assignment.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewDevice {
    #[validate(custom(function = "crate::validation::validate_entity_id"))]
    pub id: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(rename = "type", default)]
    pub device_type: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub catalog_item_id: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub assigned_to_user_id: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// Partial update for an existing device. `None` fields are left untouched.
///
/// The assignment and catalog reference are doubly optional so that
/// "clear the value" (`Some(None)`) and "leave it alone" (`None`) stay
/// distinct operations.
#[derive(Debug, Clone, Default)]
pub struct DeviceUpdate {
    pub serial_number: Option<String>,
    pub device_type: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub catalog_item_id: Option<Option<String>>,
    pub location: Option<String>,
    pub assigned_to_user_id: Option<Option<String>>,
    pub notes: Option<String>,
}
