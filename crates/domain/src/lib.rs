//! Domain layer for the asset inventory tracker.
//!
//! This crate contains:
//! - Inventory models (Device, User, CatalogEntry, ActivityEntry)
//! - Pure decision services (status derivation, catalog identity, activity recording)
//! - Validation helpers shared by the input models

pub mod models;
pub mod services;
pub mod validation;
