//! Seed data for a fresh inventory.
//!
//! Also the fallback when a persisted collection is absent or unreadable,
//! and what [`crate::InventoryStore::reset_all`] restores.

use domain::models::{Device, InventorySnapshot, User, UserStatus};

pub fn seed_devices() -> Vec<Device> {
    vec![
        Device {
            id: "PC-1001".to_string(),
            serial_number: "SN123456".to_string(),
            device_type: "laptop".to_string(),
            make: "Dell".to_string(),
            model: "Latitude 5520".to_string(),
            location: "HQ".to_string(),
            ..Default::default()
        },
        Device {
            id: "MON-2001".to_string(),
            serial_number: "SN987654".to_string(),
            device_type: "monitor".to_string(),
            make: "Dell".to_string(),
            model: "U2720Q".to_string(),
            location: "HQ".to_string(),
            ..Default::default()
        },
    ]
}

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "user-1".to_string(),
            name: "Jane Smith".to_string(),
            email: "jsmith@example.com".to_string(),
            department: "Underwriting".to_string(),
            location: "HQ".to_string(),
            role: "Analyst".to_string(),
            status: UserStatus::Active,
        },
        User {
            id: "user-2".to_string(),
            name: "John Doe".to_string(),
            email: "jdoe@example.com".to_string(),
            department: "Claims".to_string(),
            location: "Remote".to_string(),
            role: "Adjuster".to_string(),
            status: UserStatus::Active,
        },
        User {
            id: "user-3".to_string(),
            name: "Emily Brown".to_string(),
            email: "ebrown@example.com".to_string(),
            department: "IT".to_string(),
            location: "HQ".to_string(),
            role: "Support".to_string(),
            status: UserStatus::Inactive,
        },
    ]
}

pub fn seed_departments() -> Vec<String> {
    vec![
        "Underwriting".to_string(),
        "Claims".to_string(),
        "IT".to_string(),
    ]
}

pub fn seed_locations() -> Vec<String> {
    vec!["HQ".to_string(), "Remote".to_string(), "Storage".to_string()]
}

pub fn seed_device_types() -> Vec<String> {
    vec![
        "laptop".to_string(),
        "desktop".to_string(),
        "monitor".to_string(),
        "docking_station".to_string(),
    ]
}

/// The full starting state. The catalog and activity log start empty.
pub fn seed_snapshot() -> InventorySnapshot {
    InventorySnapshot {
        devices: seed_devices(),
        users: seed_users(),
        departments: seed_departments(),
        locations: seed_locations(),
        device_types: seed_device_types(),
        device_catalog: Vec::new(),
        activity_log: Vec::new(),
    }
}
