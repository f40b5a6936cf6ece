//! Device catalog domain models.
//!
//! A catalog entry is a de-duplicated (type, make, model) definition that
//! multiple devices can reference through `catalog_item_id`. Entry ids are
//! derived slugs and are never rewritten once assigned.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A canonical hardware definition shared by multiple devices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    #[serde(rename = "type", default)]
    pub device_type: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
}

/// Input payload for adding a catalog entry. All three fields are required;
/// the id is derived, not supplied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCatalogEntry {
    #[serde(rename = "type")]
    #[validate(custom(function = "crate::validation::validate_non_blank"))]
    pub device_type: String,
    #[validate(custom(function = "crate::validation::validate_non_blank"))]
    pub make: String,
    #[validate(custom(function = "crate::validation::validate_non_blank"))]
    pub model: String,
}

/// The display triple for a device after catalog resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFields {
    #[serde(rename = "type")]
    pub device_type: String,
    pub make: String,
    pub model: String,
}
