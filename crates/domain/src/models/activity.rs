//! Activity log domain models.
//!
//! The log is a prepend-only, reverse-chronological record of every
//! state-changing action. Actions form a closed set; free-text only appears
//! in the human-readable summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// The closed set of recordable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    DeviceCreated,
    DeviceAssigned,
    DeviceUnassigned,
    DeviceUpdated,
    UserCreated,
    UserUpdated,
    SettingsUpdated,
}

impl FromStr for ActivityAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEVICE_CREATED" => Ok(ActivityAction::DeviceCreated),
            "DEVICE_ASSIGNED" => Ok(ActivityAction::DeviceAssigned),
            "DEVICE_UNASSIGNED" => Ok(ActivityAction::DeviceUnassigned),
            "DEVICE_UPDATED" => Ok(ActivityAction::DeviceUpdated),
            "USER_CREATED" => Ok(ActivityAction::UserCreated),
            "USER_UPDATED" => Ok(ActivityAction::UserUpdated),
            "SETTINGS_UPDATED" => Ok(ActivityAction::SettingsUpdated),
            _ => Err(format!("Unknown activity action: {}", s)),
        }
    }
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ActivityAction::DeviceCreated => "DEVICE_CREATED",
            ActivityAction::DeviceAssigned => "DEVICE_ASSIGNED",
            ActivityAction::DeviceUnassigned => "DEVICE_UNASSIGNED",
            ActivityAction::DeviceUpdated => "DEVICE_UPDATED",
            ActivityAction::UserCreated => "USER_CREATED",
            ActivityAction::UserUpdated => "USER_UPDATED",
            ActivityAction::SettingsUpdated => "SETTINGS_UPDATED",
        };
        write!(f, "{}", s)
    }
}

/// The kind of entity an entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Device,
    User,
    Settings,
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "device" => Ok(EntityType::Device),
            "user" => Ok(EntityType::User),
            "settings" => Ok(EntityType::Settings),
            _ => Err(format!("Unknown entity type: {}", s)),
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Device => write!(f, "device"),
            EntityType::User => write!(f, "user"),
            EntityType::Settings => write!(f, "settings"),
        }
    }
}

/// Structured context attached to an entry.
///
/// `user_id` carries the affected assignee on assignment entries, `fields`
/// the changed wire-level field names on update entries, and `list`/`value`
/// the touched configuration list on settings entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ActivityMeta {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.fields.is_none()
            && self.list.is_none()
            && self.value.is_none()
    }
}

/// One record of a state-changing action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: Uuid,
    pub ts: DateTime<Utc>,
    pub action: ActivityAction,
    pub entity_type: EntityType,
    pub entity_id: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "ActivityMeta::is_empty")]
    pub meta: ActivityMeta,
}

impl ActivityEntry {
    /// Create an entry stamped with a fresh id and the current time.
    pub fn new(
        action: ActivityAction,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            ts: Utc::now(),
            action,
            entity_type,
            entity_id: entity_id.into(),
            summary: summary.into(),
            meta: ActivityMeta::default(),
        }
    }

    /// Attach the affected assignee.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.meta.user_id = Some(user_id.into());
        self
    }

    /// Attach the list of changed field names.
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.meta.fields = Some(fields);
        self
    }

    /// Attach the touched configuration list and value.
    pub fn with_list_change(
        mut self,
        list: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.meta.list = Some(list.into());
        self.meta.value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_action_from_str() {
        assert_eq!(
            ActivityAction::from_str("DEVICE_ASSIGNED").unwrap(),
            ActivityAction::DeviceAssigned
        );
        assert_eq!(
            ActivityAction::from_str("SETTINGS_UPDATED").unwrap(),
            ActivityAction::SettingsUpdated
        );
        assert!(ActivityAction::from_str("DEVICE_DELETED").is_err());
    }

    #[test]
    fn test_activity_action_display() {
        assert_eq!(ActivityAction::DeviceCreated.to_string(), "DEVICE_CREATED");
        assert_eq!(
            ActivityAction::DeviceUnassigned.to_string(),
            "DEVICE_UNASSIGNED"
        );
    }

    #[test]
    fn test_entity_type_round_trip() {
        assert_eq!(EntityType::from_str("device").unwrap(), EntityType::Device);
        assert_eq!(EntityType::from_str("Settings").unwrap(), EntityType::Settings);
        assert!(EntityType::from_str("group").is_err());
        assert_eq!(EntityType::User.to_string(), "user");
    }

    #[test]
    fn test_entry_builder_attaches_meta() {
        let entry = ActivityEntry::new(
            ActivityAction::DeviceAssigned,
            EntityType::Device,
            "PC-1001",
            "Assigned device PC-1001 to user user-2",
        )
        .with_user("user-2");

        assert_eq!(entry.entity_id, "PC-1001");
        assert_eq!(entry.meta.user_id.as_deref(), Some("user-2"));
        assert!(entry.meta.fields.is_none());
    }

    #[test]
    fn test_entry_serialization_uses_wire_names() {
        let entry = ActivityEntry::new(
            ActivityAction::DeviceUpdated,
            EntityType::Device,
            "PC-1001",
            "Updated device PC-1001",
        )
        .with_fields(vec!["notes".to_string()]);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"action\":\"DEVICE_UPDATED\""));
        assert!(json.contains("\"entityType\":\"device\""));
        assert!(json.contains("\"entityId\":\"PC-1001\""));
        assert!(json.contains("\"fields\":[\"notes\"]"));
    }

    #[test]
    fn test_empty_meta_is_omitted() {
        let entry = ActivityEntry::new(
            ActivityAction::UserCreated,
            EntityType::User,
            "user-4",
            "Added user Pat Reyes",
        );

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"meta\""));

        let parsed: ActivityEntry = serde_json::from_str(&json).unwrap();
        assert!(parsed.meta.is_empty());
    }
}
