//! Snapshot export/import and the storage mirror

use tracing::info;
use crate::error::DeskResult;
use crate::files::FileTree;
use crate::persistence::{self, Snapshot, Storage};
use crate::users::UserDirectory;
use super::DesktopEngine;

impl DesktopEngine {
    /// Capture everything the storage mirror keeps
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            windows: Some(self.windows.all_windows().cloned().collect()),
            users: Some(self.users.list().to_vec()),
            files: Some(self.files.nodes()),
            settings: Some(self.settings.clone()),
            icons: Some(self.icons.icons().to_vec()),
            ..Snapshot::new()
        }
    }

    /// Apply a snapshot; sections that are `None` keep their current state
    pub fn restore_snapshot(&mut self, mut snapshot: Snapshot) {
        if snapshot.needs_migration() {
            snapshot.migrate();
        }
        self.input.cancel();
        self.menu.close();

        if let Some(settings) = snapshot.settings {
            self.settings = settings.sanitized();
        }
        if let Some(windows) = snapshot.windows {
            self.windows.replace_all(windows);
        }
        if let Some(users) = snapshot.users {
            self.users = UserDirectory::from_users(users);
        }
        if let Some(nodes) = snapshot.files {
            self.files = FileTree::from_nodes(nodes);
        }
        if let Some(icons) = snapshot.icons {
            self.icons.replace_all(icons);
        }
        self.sync_menu();
        info!(
            windows = self.windows.count(),
            users = self.users.len(),
            files = self.files.len(),
            "desktop state restored"
        );
    }

    /// Mirror the current state into storage
    pub fn save_to<S: Storage + ?Sized>(&self, storage: &mut S) -> DeskResult<()> {
        persistence::save(storage, &self.snapshot())?;
        Ok(())
    }

    /// Restore whatever readable state the storage holds
    pub fn load_from<S: Storage + ?Sized>(&mut self, storage: &S) {
        self.restore_snapshot(persistence::load(storage));
    }
}
