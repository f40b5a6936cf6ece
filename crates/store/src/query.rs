//! Read-side views over a snapshot.
//!
//! Everything here is a pure function of [`InventorySnapshot`]. Device rows
//! always display catalog-resolved fields, assignment is the single source
//! of deployment truth, and free-text labels are trimmed with blank values
//! bucketed as "Unknown".

use serde::Serialize;

use domain::models::{
    ActivityEntry, Device, DeviceStatus, EntityType, InventorySnapshot, UserStatus,
};
use domain::services::{normalize_label, resolve_display_fields};

/// Optional criteria for device listings. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct DeviceFilter {
    pub status: Option<DeviceStatus>,
    pub search: Option<String>,
}

/// One device row, with display fields already resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceView {
    pub id: String,
    pub serial_number: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub make: String,
    pub model: String,
    pub location: String,
    pub status: DeviceStatus,
    /// Assignee's name, or their raw id when the user record is gone.
    pub assigned_user: Option<String>,
}

impl DeviceView {
    pub fn from_device(device: &Device, snapshot: &InventorySnapshot) -> Self {
        let resolved = resolve_display_fields(device, &snapshot.device_catalog);
        let assigned_user = device.assigned_to_user_id.as_deref().map(|id| {
            snapshot
                .user(id)
                .map(|user| user.name.clone())
                .unwrap_or_else(|| id.to_string())
        });
        Self {
            id: device.id.clone(),
            serial_number: device.serial_number.clone(),
            device_type: resolved.device_type,
            make: resolved.make,
            model: resolved.model,
            location: device.location.clone(),
            status: device.status,
            assigned_user,
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        let mut haystacks = vec![
            &self.id,
            &self.serial_number,
            &self.device_type,
            &self.make,
            &self.model,
            &self.location,
        ];
        if let Some(assigned) = &self.assigned_user {
            haystacks.push(assigned);
        }
        haystacks
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

/// Headline dashboard numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryKpis {
    pub total_devices: usize,
    pub deployed_devices: usize,
    pub not_deployed_devices: usize,
    pub total_users: usize,
    pub unassigned_in_storage: usize,
    pub fully_equipped_users: usize,
}

/// What a user still needs for a standard desk setup: one computer, two
/// monitors, and a dock when they work on a laptop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentGap {
    pub user_id: String,
    pub user_name: String,
    pub computer_count: usize,
    pub monitor_count: usize,
    pub dock_count: usize,
    pub missing_computer: bool,
    pub missing_monitors: usize,
    pub missing_dock: bool,
}

impl EquipmentGap {
    pub fn has_gap(&self) -> bool {
        self.missing_computer || self.missing_monitors > 0 || self.missing_dock
    }

    /// What the user still needs, as display strings: `["computer",
    /// "2 monitors", "dock"]`. Empty when fully equipped.
    pub fn missing_items(&self) -> Vec<String> {
        let mut items = Vec::new();
        if self.missing_computer {
            items.push("computer".to_string());
        }
        if self.missing_monitors > 0 {
            items.push(format_count_label(self.missing_monitors, "monitor"));
        }
        if self.missing_dock {
            items.push("dock".to_string());
        }
        items
    }
}

/// Device counts for one location label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationBreakdown {
    pub location: String,
    pub total: usize,
    pub deployed: usize,
    pub not_deployed: usize,
}

/// Device count for one device-type label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeBreakdown {
    pub label: String,
    pub count: usize,
}

/// Device count for one "make model" label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCount {
    pub label: String,
    pub count: usize,
}

/// Everything the dashboard renders, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub kpis: InventoryKpis,
    pub equipment_gaps: Vec<EquipmentGap>,
    pub floating_devices: Vec<DeviceView>,
    pub devices_by_location: Vec<LocationBreakdown>,
    pub devices_by_type: Vec<TypeBreakdown>,
    pub top_models: Vec<ModelCount>,
    pub recent_activity: Vec<ActivityEntry>,
}

/// One row of the user list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOverview {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub location: String,
    pub role: String,
    pub status: UserStatus,
    pub device_count: usize,
}

/// User list headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTotals {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Devices matching a filter, as display rows.
pub fn devices(snapshot: &InventorySnapshot, filter: &DeviceFilter) -> Vec<DeviceView> {
    snapshot
        .devices
        .iter()
        .map(|device| DeviceView::from_device(device, snapshot))
        .filter(|view| match filter.status {
            Some(status) => view.status == status,
            None => true,
        })
        .filter(|view| match filter.search.as_deref() {
            Some(needle) if !needle.trim().is_empty() => view.matches_search(needle.trim()),
            _ => true,
        })
        .collect()
}

/// Devices assigned to one user.
pub fn devices_for_user(snapshot: &InventorySnapshot, user_id: &str) -> Vec<DeviceView> {
    snapshot
        .devices
        .iter()
        .filter(|device| device.assigned_to_user_id.as_deref() == Some(user_id))
        .map(|device| DeviceView::from_device(device, snapshot))
        .collect()
}

/// Newest activity involving one user, either as the entry's subject or as
/// the assignee recorded in an assignment entry.
pub fn user_activity(
    snapshot: &InventorySnapshot,
    user_id: &str,
    limit: usize,
) -> Vec<ActivityEntry> {
    snapshot
        .activity_log
        .iter()
        .filter(|entry| {
            (entry.entity_type == EntityType::User && entry.entity_id == user_id)
                || entry.meta.user_id.as_deref() == Some(user_id)
        })
        .take(limit)
        .cloned()
        .collect()
}

/// All users as list rows with their device counts.
pub fn user_overviews(snapshot: &InventorySnapshot) -> Vec<UserOverview> {
    snapshot
        .users
        .iter()
        .map(|user| UserOverview {
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
            location: user.location.clone(),
            role: user.role.clone(),
            status: user.status,
            device_count: snapshot
                .devices
                .iter()
                .filter(|device| device.assigned_to_user_id.as_deref() == Some(user.id.as_str()))
                .count(),
        })
        .collect()
}

pub fn user_totals(snapshot: &InventorySnapshot) -> UserTotals {
    let total = snapshot.users.len();
    let active = snapshot
        .users
        .iter()
        .filter(|user| user.status.is_active())
        .count();
    UserTotals {
        total,
        active,
        inactive: total - active,
    }
}

/// Derive the full dashboard from a snapshot.
pub fn dashboard_summary(snapshot: &InventorySnapshot) -> DashboardSummary {
    let total_devices = snapshot.devices.len();
    let deployed_devices = snapshot.devices.iter().filter(|d| is_assigned(d)).count();
    let unassigned_in_storage = snapshot
        .devices
        .iter()
        .filter(|d| !is_assigned(d) && location_label(d) == "Storage")
        .count();

    let mut equipment_gaps: Vec<EquipmentGap> = snapshot
        .users
        .iter()
        .map(|user| equipment_gap(&user.id, &user.name, snapshot))
        .filter(EquipmentGap::has_gap)
        .collect();
    equipment_gaps.sort_by(|a, b| {
        b.missing_computer
            .cmp(&a.missing_computer)
            .then(b.missing_monitors.cmp(&a.missing_monitors))
            .then(b.missing_dock.cmp(&a.missing_dock))
            .then_with(|| a.user_name.cmp(&b.user_name))
    });

    let kpis = InventoryKpis {
        total_devices,
        deployed_devices,
        not_deployed_devices: total_devices - deployed_devices,
        total_users: snapshot.users.len(),
        unassigned_in_storage,
        fully_equipped_users: snapshot.users.len() - equipment_gaps.len(),
    };

    let floating_devices = snapshot
        .devices
        .iter()
        .filter(|d| !is_assigned(d) && location_label(d) != "Storage")
        .map(|d| DeviceView::from_device(d, snapshot))
        .collect();

    DashboardSummary {
        kpis,
        equipment_gaps,
        floating_devices,
        devices_by_location: location_rows(snapshot),
        devices_by_type: type_rows(snapshot),
        top_models: top_models(snapshot),
        recent_activity: snapshot.activity_log.iter().take(5).cloned().collect(),
    }
}

fn is_assigned(device: &Device) -> bool {
    device
        .assigned_to_user_id
        .as_deref()
        .map_or(false, |id| !id.trim().is_empty())
}

/// "1 monitor", "2 monitors".
fn format_count_label(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}

fn location_label(device: &Device) -> String {
    let trimmed = device.location.trim();
    if trimmed.is_empty() {
        "Unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalized type bucket for a device; blank types land in `unknown`.
fn type_key(device: &Device, snapshot: &InventorySnapshot) -> String {
    let resolved = resolve_display_fields(device, &snapshot.device_catalog);
    let key = normalize_label(&resolved.device_type);
    if key.is_empty() {
        "unknown".to_string()
    } else {
        key
    }
}

fn equipment_gap(user_id: &str, user_name: &str, snapshot: &InventorySnapshot) -> EquipmentGap {
    let mut laptop_count = 0;
    let mut desktop_count = 0;
    let mut monitor_count = 0;
    let mut dock_count = 0;
    for device in snapshot
        .devices
        .iter()
        .filter(|d| d.assigned_to_user_id.as_deref() == Some(user_id))
    {
        match type_key(device, snapshot).as_str() {
            "laptop" => laptop_count += 1,
            "desktop" => desktop_count += 1,
            "monitor" => monitor_count += 1,
            "docking_station" => dock_count += 1,
            _ => {}
        }
    }

    let computer_count = laptop_count + desktop_count;
    EquipmentGap {
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        computer_count,
        monitor_count,
        dock_count,
        missing_computer: computer_count == 0,
        missing_monitors: 2usize.saturating_sub(monitor_count),
        missing_dock: laptop_count > 0 && dock_count == 0,
    }
}

fn location_rows(snapshot: &InventorySnapshot) -> Vec<LocationBreakdown> {
    // Configured labels first (trimmed, blanks dropped), then labels
    // discovered on devices.
    let mut order: Vec<String> = Vec::new();
    for configured in &snapshot.locations {
        let label = configured.trim();
        if label.is_empty() || order.iter().any(|existing| existing == label) {
            continue;
        }
        order.push(label.to_string());
    }
    for device in &snapshot.devices {
        let label = location_label(device);
        if !order.contains(&label) {
            order.push(label);
        }
    }

    order
        .into_iter()
        .map(|label| {
            let mut total = 0;
            let mut deployed = 0;
            for device in &snapshot.devices {
                if location_label(device) == label {
                    total += 1;
                    if is_assigned(device) {
                        deployed += 1;
                    }
                }
            }
            LocationBreakdown {
                location: label,
                total,
                deployed,
                not_deployed: total - deployed,
            }
        })
        .collect()
}

fn type_rows(snapshot: &InventorySnapshot) -> Vec<TypeBreakdown> {
    // Configured labels first (first spelling wins, blanks and
    // case-insensitive duplicates dropped), then types discovered on devices,
    // with the blank bucket shown as "Unknown".
    let mut order: Vec<(String, String)> = Vec::new();
    for configured in &snapshot.device_types {
        let key = normalize_label(configured);
        if key.is_empty() || order.iter().any(|(k, _)| *k == key) {
            continue;
        }
        order.push((key, configured.clone()));
    }
    for device in &snapshot.devices {
        let key = type_key(device, snapshot);
        if order.iter().any(|(k, _)| *k == key) {
            continue;
        }
        let label = if key == "unknown" {
            "Unknown".to_string()
        } else {
            resolve_display_fields(device, &snapshot.device_catalog)
                .device_type
                .trim()
                .to_string()
        };
        order.push((key, label));
    }

    order
        .into_iter()
        .map(|(key, label)| {
            let count = snapshot
                .devices
                .iter()
                .filter(|device| type_key(device, snapshot) == key)
                .count();
            TypeBreakdown { label, count }
        })
        .collect()
}

/// "Make Model", whichever half is present, or "Unknown model".
fn model_label(device: &Device, snapshot: &InventorySnapshot) -> String {
    let resolved = resolve_display_fields(device, &snapshot.device_catalog);
    let make = resolved.make.trim();
    let model = resolved.model.trim();
    match (make.is_empty(), model.is_empty()) {
        (false, false) => format!("{} {}", make, model),
        (false, true) => make.to_string(),
        (true, false) => model.to_string(),
        (true, true) => "Unknown model".to_string(),
    }
}

fn top_models(snapshot: &InventorySnapshot) -> Vec<ModelCount> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for device in &snapshot.devices {
        let label = model_label(device, snapshot);
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
        .into_iter()
        .take(5)
        .map(|(label, count)| ModelCount { label, count })
        .collect()
}
