//! User domain model.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Whether a user is an active employee.
///
/// Unrelated to device deployment status; an inactive user can still have
/// devices assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, UserStatus::Active)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(format!("Unknown user status: {}", s)),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// An employee record that devices can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: UserStatus,
}

/// Input payload for registering a new user.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(custom(function = "crate::validation::validate_entity_id"))]
    pub id: String,
    #[validate(custom(function = "crate::validation::validate_non_blank"))]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: UserStatus,
}

/// Partial update for an existing user. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub role: Option<String>,
    pub status: Option<UserStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_status_from_str() {
        assert_eq!(UserStatus::from_str("active").unwrap(), UserStatus::Active);
        assert_eq!(UserStatus::from_str("Inactive").unwrap(), UserStatus::Inactive);
        assert!(UserStatus::from_str("retired").is_err());
    }

    #[test]
    fn test_user_status_display() {
        assert_eq!(UserStatus::Active.to_string(), "active");
        assert_eq!(UserStatus::Inactive.to_string(), "inactive");
    }

    #[test]
    fn test_user_status_helpers() {
        assert!(UserStatus::Active.is_active());
        assert!(!UserStatus::Inactive.is_active());
        assert_eq!(UserStatus::Inactive.label(), "Inactive");
    }

    #[test]
    fn test_user_serialization_round_trip() {
        let json = r#"{
            "id": "user-1",
            "name": "Jane Smith",
            "email": "jsmith@example.com",
            "department": "Underwriting",
            "location": "HQ",
            "role": "Analyst",
            "status": "active"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Jane Smith");
        assert_eq!(user.status, UserStatus::Active);

        let out = serde_json::to_string(&user).unwrap();
        assert!(out.contains("\"status\":\"active\""));
    }

    #[test]
    fn test_new_user_requires_id_and_name() {
        let input = NewUser {
            id: "user-9".to_string(),
            name: "  ".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let input = NewUser {
            id: String::new(),
            name: "Sam Field".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let input = NewUser {
            id: "user-9".to_string(),
            name: "Sam Field".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }
}
