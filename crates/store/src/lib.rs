//! In-memory inventory store.
//!
//! [`InventoryStore`] owns the full [`domain::models::InventorySnapshot`] and
//! is the only place state changes happen. Every successful mutation appends
//! to the activity log and notifies subscribers with the new snapshot, which
//! is how persistence mirrors state without the store knowing about storage.
//!
//! - `store`: the store itself and its mutation operations
//! - `query`: read-side views and dashboard aggregation
//! - `seed`: the data a fresh inventory starts from
//! - `error`: the store error type

pub mod error;
pub mod query;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use store::InventoryStore;
