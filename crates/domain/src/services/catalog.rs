//! Catalog id generation and display-field resolution.
//!
//! Catalog entries describe hardware models (type, make, model). Devices may
//! reference an entry by id; resolution prefers the referenced entry's fields
//! and falls back to the device's inline copies.

use crate::models::{CatalogEntry, Device, DisplayFields};

lazy_static::lazy_static! {
    static ref NON_SLUG_CHARS: regex::Regex = regex::Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Lowercase and trim a label for comparison.
pub fn normalize_label(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Reduce a label to its slug form: lowercase, runs of characters outside
/// `[a-z0-9]` become single hyphens, leading and trailing hyphens are
/// stripped. Identity derivation only, never shown to users.
pub fn slugify(value: &str) -> String {
    NON_SLUG_CHARS
        .replace_all(&normalize_label(value), "-")
        .trim_matches('-')
        .to_string()
}

/// Build the deterministic catalog id for a (type, make, model) triple.
///
/// Each part is slugged and empty parts are skipped, so triples differing
/// only in case, whitespace, or punctuation map to the same id.
pub fn make_catalog_id(device_type: &str, make: &str, model: &str) -> String {
    let slug = [device_type, make, model]
        .iter()
        .map(|part| slugify(part))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("catalog-{}", slug)
}

/// Resolve an id collision by appending a numeric suffix.
///
/// Existing entries are never renamed; the second entry with the same base id
/// becomes `{base}-2`, the third `{base}-3`, and so on.
pub fn unique_catalog_id(base: &str, catalog: &[CatalogEntry]) -> String {
    if !catalog.iter().any(|c| c.id == base) {
        return base.to_string();
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !catalog.iter().any(|c| c.id == candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Find the catalog entry matching a (type, make, model) triple.
///
/// Comparison ignores case and surrounding whitespace on all three fields;
/// the first match wins. Used to bind a device to an existing entry when its
/// fields happen to match one.
pub fn find_catalog_item_id<'a>(
    catalog: &'a [CatalogEntry],
    device_type: &str,
    make: &str,
    model: &str,
) -> Option<&'a str> {
    let device_type = normalize_label(device_type);
    let make = normalize_label(make);
    let model = normalize_label(model);
    catalog
        .iter()
        .find(|c| {
            normalize_label(&c.device_type) == device_type
                && normalize_label(&c.make) == make
                && normalize_label(&c.model) == model
        })
        .map(|c| c.id.as_str())
}

/// Resolve the display fields for a device.
///
/// A device referencing a catalog entry shows that entry's fields, falling
/// back per-field to its inline copies where the entry leaves one empty. A
/// dangling or absent reference shows the inline fields unchanged.
pub fn resolve_display_fields(device: &Device, catalog: &[CatalogEntry]) -> DisplayFields {
    let entry = match device.catalog_item_id.as_deref() {
        Some(id) => catalog.iter().find(|c| c.id == id),
        None => None,
    };
    match entry {
        Some(entry) => DisplayFields {
            device_type: pick(&entry.device_type, &device.device_type),
            make: pick(&entry.make, &device.make),
            model: pick(&entry.model, &device.model),
        },
        None => DisplayFields {
            device_type: device.device_type.clone(),
            make: device.make.clone(),
            model: device.model.clone(),
        },
    }
}

fn pick(primary: &str, fallback: &str) -> String {
    if primary.is_empty() {
        fallback.to_string()
    } else {
        primary.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, device_type: &str, make: &str, model: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            device_type: device_type.to_string(),
            make: make.to_string(),
            model: model.to_string(),
        }
    }

    fn device_with_fields(device_type: &str, make: &str, model: &str) -> Device {
        Device {
            device_type: device_type.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Laptop "), "laptop");
        assert_eq!(normalize_label("DELL"), "dell");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn test_slugify_collapses_symbol_runs() {
        assert_eq!(slugify("Latitude 5520"), "latitude-5520");
        assert_eq!(slugify("  USB-C / G5!  "), "usb-c-g5");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_make_catalog_id_slugs_parts() {
        assert_eq!(
            make_catalog_id("Laptop", "Dell", "Latitude 5520"),
            "catalog-laptop-dell-latitude-5520"
        );
    }

    #[test]
    fn test_make_catalog_id_ignores_case_and_whitespace() {
        assert_eq!(
            make_catalog_id("Laptop", " dell ", "LATITUDE 5520"),
            make_catalog_id("laptop", "Dell", "Latitude 5520")
        );
    }

    #[test]
    fn test_make_catalog_id_skips_empty_parts() {
        assert_eq!(make_catalog_id("", "Dell", "U2720Q"), "catalog-dell-u2720q");
        assert_eq!(make_catalog_id("", "", ""), "catalog-");
    }

    #[test]
    fn test_make_catalog_id_collapses_symbols() {
        assert_eq!(
            make_catalog_id("Docking station", "HP", "USB-C G5!"),
            "catalog-docking-station-hp-usb-c-g5"
        );
    }

    #[test]
    fn test_unique_catalog_id_without_collision() {
        let catalog = vec![entry("catalog-other", "", "", "")];
        assert_eq!(unique_catalog_id("catalog-laptop-dell", &catalog), "catalog-laptop-dell");
    }

    #[test]
    fn test_unique_catalog_id_appends_suffix() {
        let catalog = vec![
            entry("catalog-laptop-dell", "laptop", "Dell", "A"),
            entry("catalog-laptop-dell-2", "laptop", "Dell", "B"),
        ];
        assert_eq!(
            unique_catalog_id("catalog-laptop-dell", &catalog),
            "catalog-laptop-dell-3"
        );
    }

    #[test]
    fn test_find_catalog_item_id_ignores_case_and_whitespace() {
        let catalog = vec![entry("catalog-1", "Laptop", "Dell", "Latitude 5520")];
        assert_eq!(
            find_catalog_item_id(&catalog, " laptop ", "DELL", "latitude 5520"),
            Some("catalog-1")
        );
    }

    #[test]
    fn test_find_catalog_item_id_requires_all_three_fields() {
        let catalog = vec![entry("catalog-1", "laptop", "Dell", "Latitude 5520")];
        assert_eq!(find_catalog_item_id(&catalog, "laptop", "Dell", "Latitude 7420"), None);
    }

    #[test]
    fn test_find_catalog_item_id_returns_first_match() {
        let catalog = vec![
            entry("catalog-1", "laptop", "Dell", "Latitude 5520"),
            entry("catalog-9", "Laptop", "DELL", "Latitude 5520"),
        ];
        assert_eq!(
            find_catalog_item_id(&catalog, "laptop", "dell", "latitude 5520"),
            Some("catalog-1")
        );
    }

    #[test]
    fn test_resolve_prefers_catalog_fields() {
        let catalog = vec![entry("catalog-1", "laptop", "Dell", "Latitude 5520")];
        let mut device = device_with_fields("desktop", "HP", "EliteDesk");
        device.catalog_item_id = Some("catalog-1".to_string());

        let fields = resolve_display_fields(&device, &catalog);
        assert_eq!(fields.device_type, "laptop");
        assert_eq!(fields.make, "Dell");
        assert_eq!(fields.model, "Latitude 5520");
    }

    #[test]
    fn test_resolve_falls_back_on_empty_catalog_field() {
        let catalog = vec![entry("catalog-1", "laptop", "", "Latitude 5520")];
        let mut device = device_with_fields("desktop", "Dell", "EliteDesk");
        device.catalog_item_id = Some("catalog-1".to_string());

        let fields = resolve_display_fields(&device, &catalog);
        assert_eq!(fields.device_type, "laptop");
        assert_eq!(fields.make, "Dell");
        assert_eq!(fields.model, "Latitude 5520");
    }

    #[test]
    fn test_resolve_dangling_reference_uses_inline_fields() {
        let catalog = vec![entry("catalog-1", "laptop", "Dell", "Latitude 5520")];
        let mut device = device_with_fields("monitor", "Dell", "U2720Q");
        device.catalog_item_id = Some("catalog-missing".to_string());

        let fields = resolve_display_fields(&device, &catalog);
        assert_eq!(fields.device_type, "monitor");
        assert_eq!(fields.make, "Dell");
        assert_eq!(fields.model, "U2720Q");
    }

    #[test]
    fn test_resolve_without_reference_uses_inline_fields() {
        let device = device_with_fields("monitor", "Dell", "U2720Q");
        let fields = resolve_display_fields(&device, &[]);
        assert_eq!(fields.device_type, "monitor");
        assert_eq!(fields.make, "Dell");
        assert_eq!(fields.model, "U2720Q");
    }
}
