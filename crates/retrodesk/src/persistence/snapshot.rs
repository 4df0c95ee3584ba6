//! Snapshot serialization for desktop state

use serde::{Deserialize, Serialize};
use crate::files::FileNode;
use crate::icons::DesktopIcon;
use crate::settings::Settings;
use crate::users::User;
use crate::window::Window;

/// Snapshot of desktop state for persistence
///
/// A `None` section was missing or unreadable; restoring leaves that part of the
/// desktop at its default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version for migration support
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<Vec<Window>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<DesktopIcon>>,
}

impl Snapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create an empty snapshot stamped with the current version
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Version 0 predates the stamp; its sections are already in the current shape
        self.version = Self::CURRENT_VERSION;
    }

    /// True when no section survived
    pub fn is_empty(&self) -> bool {
        self.windows.is_none()
            && self.users.is_none()
            && self.files.is_none()
            && self.settings.is_none()
            && self.icons.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_creation() {
        let snapshot = Snapshot::new();
        assert_eq!(snapshot.version, Snapshot::CURRENT_VERSION);
        assert!(!snapshot.needs_migration());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_snapshot_serialization_skips_missing_sections() {
        let mut snapshot = Snapshot::new();
        snapshot.settings = Some(Settings {
            zoom: 1.5,
            ..Default::default()
        });

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("windows"));

        let restored: Snapshot = serde_json::from_str(&json).unwrap();
        assert!((restored.settings.unwrap().zoom - 1.5).abs() < 0.001);
        assert!(restored.windows.is_none());
    }

    #[test]
    fn test_snapshot_migration() {
        let mut snapshot: Snapshot = serde_json::from_str(r#"{"version":0}"#).unwrap();
        assert!(snapshot.needs_migration());
        snapshot.migrate();
        assert_eq!(snapshot.version, Snapshot::CURRENT_VERSION);
    }
}
