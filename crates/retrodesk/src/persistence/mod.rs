//! Persistence module for state serialization
//!
//! The snapshot is mirrored into a key/value store one section per key, so a
//! corrupt section only loses that section.

mod snapshot;
mod storage;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use crate::error::PersistenceError;

pub use snapshot::Snapshot;
pub use storage::{MemoryStorage, Storage};

pub const VERSION_KEY: &str = "retrodesk.version";
pub const WINDOWS_KEY: &str = "retrodesk.windows";
pub const USERS_KEY: &str = "retrodesk.users";
pub const FILES_KEY: &str = "retrodesk.files";
pub const SETTINGS_KEY: &str = "retrodesk.settings";
pub const ICONS_KEY: &str = "retrodesk.icons";

/// Every key the mirror writes
pub const ALL_KEYS: [&str; 6] = [
    VERSION_KEY,
    WINDOWS_KEY,
    USERS_KEY,
    FILES_KEY,
    SETTINGS_KEY,
    ICONS_KEY,
];

/// Write every present section of a snapshot
pub fn save<S: Storage + ?Sized>(storage: &mut S, snapshot: &Snapshot) -> Result<(), PersistenceError> {
    write_section(storage, WINDOWS_KEY, "windows", snapshot.windows.as_ref())?;
    write_section(storage, USERS_KEY, "users", snapshot.users.as_ref())?;
    write_section(storage, FILES_KEY, "files", snapshot.files.as_ref())?;
    write_section(storage, SETTINGS_KEY, "settings", snapshot.settings.as_ref())?;
    write_section(storage, ICONS_KEY, "icons", snapshot.icons.as_ref())?;
    storage.set(VERSION_KEY, &snapshot.version.to_string())?;
    info!(version = snapshot.version, "desktop state saved");
    Ok(())
}

/// Read a snapshot, skipping missing or unreadable sections
pub fn load<S: Storage + ?Sized>(storage: &S) -> Snapshot {
    let version = match storage.get(VERSION_KEY) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(value = %raw, "ignoring unreadable snapshot version");
            0
        }),
        None => 0,
    };

    let mut snapshot = Snapshot {
        version,
        windows: read_section(storage, WINDOWS_KEY),
        users: read_section(storage, USERS_KEY),
        files: read_section(storage, FILES_KEY),
        settings: read_section(storage, SETTINGS_KEY),
        icons: read_section(storage, ICONS_KEY),
    };
    if snapshot.needs_migration() {
        debug!(from = snapshot.version, "migrating snapshot");
        snapshot.migrate();
    }
    snapshot
}

/// Drop every mirrored key
pub fn clear<S: Storage + ?Sized>(storage: &mut S) {
    for key in ALL_KEYS {
        storage.remove(key);
    }
}

fn write_section<S: Storage + ?Sized, T: Serialize>(
    storage: &mut S,
    key: &str,
    section: &'static str,
    value: Option<&T>,
) -> Result<(), PersistenceError> {
    let Some(value) = value else {
        return Ok(());
    };
    let json = serde_json::to_string(value)
        .map_err(|source| PersistenceError::Encode { section, source })?;
    storage.set(key, &json)
}

fn read_section<S: Storage + ?Sized, T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "skipping corrupt persisted section");
            None
        }
    }
}
