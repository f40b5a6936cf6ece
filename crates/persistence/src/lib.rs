//! Persistence layer for the asset inventory tracker.
//!
//! This crate contains:
//! - The keyed string-storage backend abstraction (in-memory and on-disk)
//! - Per-collection snapshot serialization with seed fallback
//! - The store mirror that persists every snapshot a store publishes
//! - Storage configuration

pub mod backend;
pub mod config;
pub mod error;
pub mod keys;
pub mod mirror;
pub mod snapshot_io;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use config::StorageConfig;
pub use error::PersistenceError;
pub use mirror::{attach, open};
pub use snapshot_io::{load_snapshot, save_snapshot};
