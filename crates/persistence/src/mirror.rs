//! Keeps a storage backend in sync with a store.
//!
//! The mirror is an ordinary store subscriber: after every successful
//! mutation it writes the published snapshot to the backend. A failed write
//! is logged and dropped; the in-memory state stays authoritative and the
//! next mutation retries the whole snapshot anyway.

use store::InventoryStore;

use crate::backend::StorageBackend;
use crate::snapshot_io::{load_snapshot, save_snapshot};

/// Subscribe the backend to the store. The backend is moved into the
/// subscription and owned by it from here on.
pub fn attach<B>(store: &mut InventoryStore, mut backend: B)
where
    B: StorageBackend + Send + 'static,
{
    store.subscribe(move |snapshot| {
        if let Err(err) = save_snapshot(&mut backend, snapshot) {
            tracing::error!(error = %err, "Failed to persist inventory snapshot");
        }
    });
}

/// Load a store from the backend and mirror every change back to it.
pub fn open<B>(backend: B) -> InventoryStore
where
    B: StorageBackend + Send + 'static,
{
    let snapshot = load_snapshot(&backend);
    let mut store = InventoryStore::from_snapshot(snapshot);
    attach(&mut store, backend);
    store
}
