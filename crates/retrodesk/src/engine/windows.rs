//! Window lifecycle, app launching and menu commands

use tracing::info;
use crate::apps::{self, AppId};
use crate::error::{DeskError, DeskResult};
use crate::math::{Size, Vec2};
use crate::menu::MenuAction;
use crate::notifications::NotificationLevel;
use crate::users::{NewUser, UserId};
use crate::window::{WindowConfig, WindowId};
use super::DesktopEngine;

impl DesktopEngine {
    /// Open a window
    pub fn create_window(&mut self, config: WindowConfig) -> WindowId {
        let id = self.windows.open(config);
        self.sync_menu();
        id
    }

    /// Launch a built-in app, or bring its window forward if already running
    pub fn launch_app(&mut self, app: AppId) -> WindowId {
        let config = apps::window_config(app, self.windows.bounds());
        info!(app = app.as_str(), "launching app");
        self.create_window(config)
    }

    /// Launch an app by its string id
    pub fn launch_app_by_id(&mut self, app_id: &str) -> DeskResult<WindowId> {
        let app = AppId::parse(app_id).ok_or_else(|| DeskError::UnknownApp(app_id.to_string()))?;
        Ok(self.launch_app(app))
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) {
        if self.input.drag_state().and_then(|d| d.window_id()) == Some(id) {
            self.input.cancel();
        }
        self.windows.close(id);
        self.sync_menu();
    }

    /// Focus a window (brings to top)
    pub fn focus_window(&mut self, id: &str) {
        self.windows.focus(id);
        self.sync_menu();
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: &str) {
        self.windows.minimize(id);
        self.sync_menu();
    }

    /// Restore a minimized window
    pub fn restore_window(&mut self, id: &str) {
        self.windows.restore(id);
        self.sync_menu();
    }

    /// Maximize or un-maximize a window
    pub fn maximize_window(&mut self, id: &str) {
        self.windows.toggle_maximize(id);
        self.sync_menu();
    }

    /// Move a window (clamped to the work area)
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) {
        self.windows.move_window(id, Vec2::new(x, y));
    }

    /// Resize a window (clamped to its size limits)
    pub fn resize_window(&mut self, id: &str, width: f32, height: f32) {
        self.windows.resize(id, Size::new(width, height));
    }

    /// Window-shade a window
    pub fn collapse_window(&mut self, id: &str) {
        self.windows.toggle_collapse(id);
    }

    /// End a task from the activity monitor; returns whether the window closed
    pub fn end_task(&mut self, id: &str) -> bool {
        if !self.windows.is_open(id) {
            return false;
        }
        self.close_window(id);
        let closed = !self.windows.is_open(id);
        if closed {
            self.notify(NotificationLevel::Info, "Task ended", id.to_string());
        }
        closed
    }

    /// Run a menu command
    pub fn dispatch(&mut self, action: MenuAction) {
        let focused = self.windows.focused().map(str::to_string);
        match action {
            MenuAction::OpenApp(app) => {
                self.launch_app(app);
            }
            MenuAction::CloseWindow => {
                if let Some(id) = focused {
                    self.close_window(&id);
                }
            }
            MenuAction::MinimizeWindow => {
                if let Some(id) = focused {
                    self.minimize_window(&id);
                }
            }
            MenuAction::CollapseWindow => {
                if let Some(id) = focused {
                    self.collapse_window(&id);
                }
            }
            MenuAction::ZoomIn => self.settings.zoom_in(),
            MenuAction::ZoomOut => self.settings.zoom_out(),
            MenuAction::ZoomReset => self.settings.reset_zoom(),
            MenuAction::ArrangeIcons => self.icons.arrange(),
            MenuAction::EmptyTrash => {
                let removed = self.files.empty_trash();
                if removed > 0 {
                    self.notify(
                        NotificationLevel::Success,
                        "Trash emptied",
                        format!("{} item(s) deleted", removed),
                    );
                }
            }
            MenuAction::ClearNotifications => self.notifications.clear(),
        }
        self.sync_menu();
    }

    /// Pick a menu item by position and run it
    pub fn select_menu_item(&mut self, menu: usize, item: usize) -> bool {
        match self.menu.select(menu, item) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Add a user and announce it
    pub fn add_user(&mut self, new: NewUser) -> DeskResult<UserId> {
        let id = self.users.add(new, self.now_ms)?;
        let name = self
            .users
            .get(id)
            .map(|u| u.display_name.clone())
            .unwrap_or_default();
        self.notify(NotificationLevel::Success, "User added", name);
        Ok(id)
    }

    /// Remove a user and announce it
    pub fn remove_user(&mut self, id: UserId) -> DeskResult<()> {
        let user = self.users.remove(id)?;
        self.notify(NotificationLevel::Warning, "User removed", user.display_name);
        Ok(())
    }

    /// Move a file or folder to the trash
    pub fn trash_path(&mut self, path: &str) -> DeskResult<String> {
        Ok(self.files.trash(path)?)
    }
}
