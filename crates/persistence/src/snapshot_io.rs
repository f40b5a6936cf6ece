//! Snapshot serialization, one storage key per collection.
//!
//! Loading never fails: a key that is absent, unreadable, or holds JSON of
//! the wrong shape falls back to that collection's seed value without
//! touching the other collections. Saving stops at the first error so the
//! caller sees what went wrong.

use serde::de::DeserializeOwned;
use serde::Serialize;

use domain::models::InventorySnapshot;
use store::seed;

use crate::backend::StorageBackend;
use crate::error::PersistenceError;
use crate::keys;

/// Load the full snapshot, collection by collection.
pub fn load_snapshot<B: StorageBackend>(backend: &B) -> InventorySnapshot {
    InventorySnapshot {
        devices: load_collection(backend, keys::DEVICES, seed::seed_devices),
        users: load_collection(backend, keys::USERS, seed::seed_users),
        departments: load_collection(backend, keys::DEPARTMENTS, seed::seed_departments),
        locations: load_collection(backend, keys::LOCATIONS, seed::seed_locations),
        device_types: load_collection(backend, keys::DEVICE_TYPES, seed::seed_device_types),
        device_catalog: load_collection(backend, keys::DEVICE_CATALOG, Vec::new),
        activity_log: load_collection(backend, keys::ACTIVITY_LOG, Vec::new),
    }
}

/// Persist the full snapshot, collection by collection.
pub fn save_snapshot<B: StorageBackend>(
    backend: &mut B,
    snapshot: &InventorySnapshot,
) -> Result<(), PersistenceError> {
    save_collection(backend, keys::DEVICES, &snapshot.devices)?;
    save_collection(backend, keys::USERS, &snapshot.users)?;
    save_collection(backend, keys::DEPARTMENTS, &snapshot.departments)?;
    save_collection(backend, keys::LOCATIONS, &snapshot.locations)?;
    save_collection(backend, keys::DEVICE_TYPES, &snapshot.device_types)?;
    save_collection(backend, keys::DEVICE_CATALOG, &snapshot.device_catalog)?;
    save_collection(backend, keys::ACTIVITY_LOG, &snapshot.activity_log)?;
    Ok(())
}

fn load_collection<B, T, F>(backend: &B, key: &str, seed: F) -> Vec<T>
where
    B: StorageBackend,
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    match backend.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Persisted collection is unreadable, using seed");
                seed()
            }
        },
        Ok(None) => {
            tracing::debug!(key = %key, "No persisted collection, using seed");
            seed()
        }
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "Failed to read persisted collection, using seed");
            seed()
        }
    }
}

fn save_collection<B, T>(backend: &mut B, key: &str, value: &[T]) -> Result<(), PersistenceError>
where
    B: StorageBackend,
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(|source| PersistenceError::Serialize {
        key: key.to_string(),
        source,
    })?;
    backend.write(key, &raw)
}
