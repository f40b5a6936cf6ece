//! Keyed string storage.
//!
//! The storage model is a flat string-to-string map, so backends stay
//! trivial: an in-memory map for tests and ephemeral use, and a directory
//! of one JSON file per key for durable use.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;

/// A keyed string store. `read` of an absent key is `Ok(None)`, `remove`
/// of an absent key succeeds.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// Backend holding everything in a map. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Backend storing each key as `<dir>/<key>.json`.
///
/// The directory is created on first write, not on construction.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::io(key, err)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir).map_err(|err| PersistenceError::io(key, err))?;
        fs::write(self.path_for(key), value).map_err(|err| PersistenceError::io(key, err))
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PersistenceError::io(key, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.read("inventory.devices").unwrap(), None);

        backend.write("inventory.devices", "[]").unwrap();
        assert_eq!(
            backend.read("inventory.devices").unwrap().as_deref(),
            Some("[]")
        );

        backend.remove("inventory.devices").unwrap();
        assert_eq!(backend.read("inventory.devices").unwrap(), None);
        backend.remove("inventory.devices").unwrap();
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("data"));

        assert_eq!(backend.read("inventory.users").unwrap(), None);

        backend.write("inventory.users", "[{\"id\":\"user-1\"}]").unwrap();
        assert!(backend.dir().join("inventory.users.json").exists());
        assert_eq!(
            backend.read("inventory.users").unwrap().as_deref(),
            Some("[{\"id\":\"user-1\"}]")
        );

        backend.remove("inventory.users").unwrap();
        assert_eq!(backend.read("inventory.users").unwrap(), None);
        backend.remove("inventory.users").unwrap();
    }

    #[test]
    fn test_file_backend_overwrites_existing_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());

        backend.write("inventory.locations", "[\"HQ\"]").unwrap();
        backend
            .write("inventory.locations", "[\"HQ\",\"Remote\"]")
            .unwrap();
        assert_eq!(
            backend.read("inventory.locations").unwrap().as_deref(),
            Some("[\"HQ\",\"Remote\"]")
        );
    }
}
