//! WASM exports for the desktop
//!
//! This module provides wasm-bindgen exports for the DesktopEngine, so the page
//! renders from JSON getters and forwards DOM events to the handlers below.

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::engine::DesktopEngine;
use crate::error::PersistenceError;
use crate::input::InputResult;
use crate::monitor::SortColumn;
use crate::notifications::NotificationLevel;
use crate::persistence::{self, Storage};
use crate::settings::Settings;
use crate::shortcuts::KeyEvent;
use crate::users::{NewUser, UserFilter, UserUpdate};

/// `Storage` backed by the browser's `window.localStorage`
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// Open `localStorage`; fails in workers or when storage is disabled
    pub fn open() -> Result<Self, PersistenceError> {
        let window = web_sys::window().ok_or(PersistenceError::Unavailable)?;
        let inner = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(PersistenceError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.inner
            .set_item(key, value)
            .map_err(|err| PersistenceError::WriteFailed {
                key: key.to_string(),
                reason: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
            })
    }

    fn remove(&mut self, key: &str) {
        if let Err(err) = self.inner.remove_item(key) {
            warn!(key, error = ?err, "failed to remove storage key");
        }
    }
}

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn input_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

/// Desktop handle for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopHandle {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl DesktopHandle {
    /// Create a desktop from an optional (partial) JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<DesktopHandle, JsValue> {
        let engine = match config_json {
            Some(json) => DesktopEngine::from_config_json(&json).map_err(to_js)?,
            None => DesktopEngine::default(),
        };
        let mut handle = Self { engine };
        handle.engine.tick(js_sys::Date::now());
        Ok(handle)
    }

    // =========================================================================
    // Screen & clock
    // =========================================================================

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize_screen(width, height);
    }

    /// Advance the clock; call from a timer to expire notifications
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.engine.tick(js_sys::Date::now());
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8, shift: bool) -> String {
        input_json(&self.engine.handle_pointer_down(x, y, button, shift))
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        input_json(&self.engine.handle_pointer_move(x, y))
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        input_json(&self.engine.handle_pointer_up())
    }

    #[wasm_bindgen]
    pub fn double_click(&mut self, x: f32, y: f32) -> String {
        input_json(&self.engine.handle_double_click(x, y))
    }

    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str, ctrl: bool, meta: bool, shift: bool, alt: bool) -> String {
        let event = KeyEvent {
            key: key.to_string(),
            ctrl,
            meta,
            shift,
            alt,
        };
        input_json(&self.engine.handle_key(&event))
    }

    /// Start a window drag from a DOM title bar
    #[wasm_bindgen]
    pub fn start_window_drag(&mut self, window_id: &str, x: f32, y: f32) {
        self.engine.start_move_drag(window_id, x, y);
    }

    /// Start a window resize from a DOM edge handle ("n", "se", ...)
    #[wasm_bindgen]
    pub fn start_window_resize(&mut self, window_id: &str, direction: &str, x: f32, y: f32) {
        self.engine.start_resize_drag(window_id, direction, x, y);
    }

    /// Drag outline as `{id, x, y, width, height}`, or `null`
    #[wasm_bindgen]
    pub fn drag_preview_json(&self) -> String {
        match self.engine.drag_preview() {
            Some((id, rect)) => serde_json::json!({
                "id": id,
                "x": rect.x,
                "y": rect.y,
                "width": rect.width,
                "height": rect.height,
            })
            .to_string(),
            None => "null".to_string(),
        }
    }

    // =========================================================================
    // Windows
    // =========================================================================

    #[wasm_bindgen]
    pub fn launch_app(&mut self, app_id: &str) -> Result<String, JsValue> {
        self.engine.launch_app_by_id(app_id).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) {
        self.engine.close_window(id);
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.engine.focus_window(id);
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) {
        self.engine.minimize_window(id);
    }

    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: &str) {
        self.engine.restore_window(id);
    }

    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: &str) {
        self.engine.maximize_window(id);
    }

    #[wasm_bindgen]
    pub fn collapse_window(&mut self, id: &str) {
        self.engine.collapse_window(id);
    }

    #[wasm_bindgen]
    pub fn focused_window(&self) -> Option<String> {
        self.engine.windows.focused().map(str::to_string)
    }

    /// Windows back to front
    #[wasm_bindgen]
    pub fn windows_json(&self) -> String {
        serde_json::to_string(&self.engine.windows.windows_by_z()).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Menu bar
    // =========================================================================

    #[wasm_bindgen]
    pub fn menu_json(&self) -> String {
        serde_json::to_string(&self.engine.menu).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen]
    pub fn menu_toggle(&mut self, index: usize) {
        self.engine.menu.toggle(index);
    }

    #[wasm_bindgen]
    pub fn menu_hover(&mut self, index: usize) {
        self.engine.menu.hover(index);
    }

    #[wasm_bindgen]
    pub fn menu_close(&mut self) {
        self.engine.menu.close();
    }

    /// Returns whether an enabled item was run
    #[wasm_bindgen]
    pub fn menu_select(&mut self, menu: usize, item: usize) -> bool {
        self.engine.select_menu_item(menu, item)
    }

    // =========================================================================
    // Desktop icons
    // =========================================================================

    #[wasm_bindgen]
    pub fn icons_json(&self) -> String {
        serde_json::to_string(&serde_json::json!({
            "icons": self.engine.icons.icons(),
            "selected": self.engine.icons.selected(),
            "dragging": self.engine.icon_drag_preview().map(|(id, pos)| {
                serde_json::json!({ "id": id, "x": pos.x, "y": pos.y })
            }),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen]
    pub fn arrange_icons(&mut self) {
        self.engine.icons.arrange();
    }

    // =========================================================================
    // Files
    // =========================================================================

    #[wasm_bindgen]
    pub fn list_dir_json(&self, path: &str) -> Result<String, JsValue> {
        let entries = self.engine.files.list(path).map_err(to_js)?;
        serde_json::to_string(&entries).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn search_files_json(&self, query: &str) -> String {
        serde_json::to_string(&self.engine.files.search(query)).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen]
    pub fn read_file(&self, path: &str) -> Result<String, JsValue> {
        self.engine.files.read_file(path).map(str::to_string).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn mkdir(&mut self, path: &str) -> Result<(), JsValue> {
        self.engine.files.mkdir(path).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), JsValue> {
        self.engine.files.write_file(path, content).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn rename(&mut self, path: &str, new_name: &str) -> Result<String, JsValue> {
        self.engine.files.rename(path, new_name).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn move_to(&mut self, path: &str, dest_dir: &str) -> Result<String, JsValue> {
        self.engine.files.move_to(path, dest_dir).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn trash(&mut self, path: &str) -> Result<String, JsValue> {
        self.engine.trash_path(path).map_err(to_js)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Users matching a `UserFilter` JSON document (`"{}"` for all)
    #[wasm_bindgen]
    pub fn users_json(&self, filter_json: &str) -> Result<String, JsValue> {
        let filter: UserFilter = serde_json::from_str(filter_json).map_err(to_js)?;
        serde_json::to_string(&self.engine.users.filter(&filter)).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn add_user(&mut self, new_user_json: &str) -> Result<u32, JsValue> {
        let new: NewUser = serde_json::from_str(new_user_json).map_err(to_js)?;
        self.engine.add_user(new).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn update_user(&mut self, id: u32, update_json: &str) -> Result<(), JsValue> {
        let update: UserUpdate = serde_json::from_str(update_json).map_err(to_js)?;
        self.engine.users.update(id, update).map(|_| ()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn remove_user(&mut self, id: u32) -> Result<(), JsValue> {
        self.engine.remove_user(id).map_err(to_js)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    #[wasm_bindgen]
    pub fn notifications_json(&self, limit: usize) -> String {
        serde_json::to_string(&serde_json::json!({
            "items": self.engine.notifications.latest(limit),
            "unread": self.engine.notifications.unread_count(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    /// Post a notification; `level` is "info", "success", "warning" or "error"
    #[wasm_bindgen]
    pub fn notify(&mut self, level: &str, title: &str, message: &str) -> f64 {
        let level: NotificationLevel =
            serde_json::from_value(serde_json::Value::from(level)).unwrap_or_default();
        self.engine.notify(level, title, message) as f64
    }

    #[wasm_bindgen]
    pub fn dismiss_notification(&mut self, id: f64) -> bool {
        self.engine.notifications.dismiss(id as u64)
    }

    #[wasm_bindgen]
    pub fn mark_all_read(&mut self) {
        self.engine.notifications.mark_all_read();
    }

    // =========================================================================
    // Settings
    // =========================================================================

    #[wasm_bindgen]
    pub fn settings_json(&self) -> String {
        serde_json::to_string(&self.engine.settings).unwrap_or_else(|_| "{}".to_string())
    }

    /// Merge a partial settings document; values are clamped
    #[wasm_bindgen]
    pub fn update_settings(&mut self, patch_json: &str) -> Result<(), JsValue> {
        let patch: serde_json::Value = serde_json::from_str(patch_json).map_err(to_js)?;
        let mut current = serde_json::to_value(&self.engine.settings).map_err(to_js)?;
        if let (Some(target), Some(patch)) = (current.as_object_mut(), patch.as_object()) {
            for (key, value) in patch {
                target.insert(key.clone(), value.clone());
            }
        }
        let settings: Settings = serde_json::from_value(current).map_err(to_js)?;
        self.engine.settings = settings.sanitized();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_zoom(&mut self, zoom: f32) {
        self.engine.settings.set_zoom(zoom);
    }

    // =========================================================================
    // Activity monitor
    // =========================================================================

    #[wasm_bindgen]
    pub fn tasks_json(&self) -> String {
        serde_json::to_string(&serde_json::json!({
            "column": self.engine.monitor.column,
            "direction": self.engine.monitor.direction,
            "tasks": self.engine.monitor.rows(&self.engine.windows),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    /// Sort by "title", "state" or "z"; clicking the same column flips direction
    #[wasm_bindgen]
    pub fn sort_tasks(&mut self, column: &str) {
        if let Ok(column) = serde_json::from_value::<SortColumn>(serde_json::Value::from(column)) {
            self.engine.monitor.sort_by(column);
        }
    }

    #[wasm_bindgen]
    pub fn end_task(&mut self, id: &str) -> bool {
        self.engine.end_task(id)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Mirror state into localStorage
    #[wasm_bindgen]
    pub fn persist(&self) -> Result<(), JsValue> {
        let mut storage = LocalStorage::open().map_err(to_js)?;
        self.engine.save_to(&mut storage).map_err(to_js)
    }

    /// Restore state from localStorage; unreadable sections keep their defaults
    #[wasm_bindgen]
    pub fn hydrate(&mut self) -> Result<(), JsValue> {
        let storage = LocalStorage::open().map_err(to_js)?;
        self.engine.load_from(&storage);
        Ok(())
    }

    /// Forget everything mirrored into localStorage
    #[wasm_bindgen]
    pub fn clear_storage(&self) -> Result<(), JsValue> {
        let mut storage = LocalStorage::open().map_err(to_js)?;
        persistence::clear(&mut storage);
        Ok(())
    }

    /// Full snapshot as one JSON document (export/debugging)
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.engine.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}
