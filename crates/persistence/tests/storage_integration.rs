//! End-to-end tests for the file-backed persistence mirror.

use domain::models::{ActivityAction, DeviceStatus, NewDevice, NewUser};
use persistence::{keys, mirror, FileBackend, StorageConfig};

fn data_file(dir: &std::path::Path, key: &str) -> std::path::PathBuf {
    dir.join(format!("{}.json", key))
}

#[test]
fn test_open_empty_dir_starts_from_seed() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = mirror::open(FileBackend::new(dir.path()));

    assert_eq!(store.snapshot().devices.len(), 2);
    assert_eq!(store.snapshot().users.len(), 3);
    assert!(store.snapshot().activity_log.is_empty());
    // Nothing is written until the first mutation.
    assert!(!data_file(dir.path(), keys::DEVICES).exists());
    Ok(())
}

#[test]
fn test_mutations_survive_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let mut store = mirror::open(FileBackend::new(dir.path()));
    store.add_device(NewDevice {
        id: "PC-9001".to_string(),
        device_type: "laptop".to_string(),
        assigned_to_user_id: Some("user-2".to_string()),
        ..Default::default()
    })?;
    store.add_department("Finance")?;
    drop(store);

    // Every collection is mirrored on save, not only the touched ones.
    for key in keys::ALL {
        assert!(data_file(dir.path(), key).exists());
    }

    let reopened = mirror::open(FileBackend::new(dir.path()));
    let snapshot = reopened.snapshot();

    let device = snapshot.device("PC-9001").unwrap();
    assert_eq!(device.status, DeviceStatus::Deployed);
    assert_eq!(device.assigned_to_user_id.as_deref(), Some("user-2"));
    assert!(snapshot.departments.contains(&"Finance".to_string()));

    let log = &snapshot.activity_log;
    assert_eq!(log.len(), 3);
    assert_eq!(log[0].action, ActivityAction::SettingsUpdated);
    assert_eq!(log[1].action, ActivityAction::DeviceAssigned);
    assert_eq!(log[2].action, ActivityAction::DeviceCreated);
    Ok(())
}

#[test]
fn test_corrupt_collection_reseeds_alone() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let mut store = mirror::open(FileBackend::new(dir.path()));
    store.add_user(NewUser {
        id: "user-9".to_string(),
        name: "Pat Quinn".to_string(),
        ..Default::default()
    })?;
    store.add_device(NewDevice {
        id: "PC-9002".to_string(),
        ..Default::default()
    })?;
    drop(store);

    std::fs::write(data_file(dir.path(), keys::USERS), "not json")?;

    let reopened = mirror::open(FileBackend::new(dir.path()));
    // Users fall back to seed data, the other collections keep their state.
    assert_eq!(reopened.snapshot().users.len(), 3);
    assert!(reopened.snapshot().user("user-9").is_none());
    assert!(reopened.snapshot().device("PC-9002").is_some());
    Ok(())
}

#[test]
fn test_reset_clears_persisted_state() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let mut store = mirror::open(FileBackend::new(dir.path()));
    store.add_department("Finance")?;
    store.reset_all();
    drop(store);

    let reopened = mirror::open(FileBackend::new(dir.path()));
    assert_eq!(
        reopened.snapshot().departments,
        ["Underwriting", "Claims", "IT"]
    );
    let log = &reopened.snapshot().activity_log;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].summary, "Reset inventory to seed data");
    Ok(())
}

#[test]
fn test_config_file_backend_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = StorageConfig {
        data_dir: dir.path().display().to_string(),
    };

    let mut store = mirror::open(config.file_backend());
    store.add_location("Warehouse")?;
    drop(store);

    let reopened = mirror::open(config.file_backend());
    assert!(reopened
        .snapshot()
        .locations
        .contains(&"Warehouse".to_string()));
    Ok(())
}
