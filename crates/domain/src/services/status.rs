//! Assignment-derived device status.
//!
//! Status is never stored independently of assignment: a device is deployed
//! exactly when it has a non-blank assignee.

use crate::models::DeviceStatus;

/// Trim an assignee id, collapsing blank values to `None`.
pub fn normalize_assignee(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(id) => {
            let trimmed = id.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}

/// Derive the status implied by an assignee id.
pub fn derive_status(assignee: Option<&str>) -> DeviceStatus {
    match assignee {
        Some(id) if !id.trim().is_empty() => DeviceStatus::Deployed,
        _ => DeviceStatus::NotDeployed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_assignee_trims() {
        assert_eq!(normalize_assignee(Some(" user-1 ")), Some("user-1".to_string()));
        assert_eq!(normalize_assignee(Some("user-2")), Some("user-2".to_string()));
    }

    #[test]
    fn test_normalize_assignee_collapses_blank() {
        assert_eq!(normalize_assignee(None), None);
        assert_eq!(normalize_assignee(Some("")), None);
        assert_eq!(normalize_assignee(Some("   ")), None);
        assert_eq!(normalize_assignee(Some("\t")), None);
    }

    #[test]
    fn test_derive_status_deployed_when_assigned() {
        assert_eq!(derive_status(Some("user-1")), DeviceStatus::Deployed);
        assert_eq!(derive_status(Some(" user-1 ")), DeviceStatus::Deployed);
    }

    #[test]
    fn test_derive_status_not_deployed_when_unassigned() {
        assert_eq!(derive_status(None), DeviceStatus::NotDeployed);
        assert_eq!(derive_status(Some("")), DeviceStatus::NotDeployed);
        assert_eq!(derive_status(Some("   ")), DeviceStatus::NotDeployed);
    }
}
