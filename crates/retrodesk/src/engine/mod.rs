//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer event handling and drag commits
//! - `windows`: Window lifecycle, app launching and menu commands
//! - `state`: Snapshot export/import and the storage mirror

mod input;
mod windows;
mod state;

use tracing::debug;
use crate::config::DesktopConfig;
use crate::error::DeskResult;
use crate::files::FileTree;
use crate::icons::DesktopIcons;
use crate::input::{InputResult, InputRouter};
use crate::math::{Size, Vec2};
use crate::menu::MenuBar;
use crate::monitor::ActivityMonitor;
use crate::notifications::{NotificationCenter, NotificationId, NotificationLevel};
use crate::settings::Settings;
use crate::shortcuts::{self, Command, KeyEvent};
use crate::users::UserDirectory;
use crate::window::WindowManager;

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window manager (window CRUD, focus, z-order)
/// - Input router (drag/resize state machine)
/// - Menu bar, desktop icons and keyboard shortcuts
/// - The app state containers (files, users, settings, notifications)
pub struct DesktopEngine {
    pub config: DesktopConfig,
    /// Window manager
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    pub menu: MenuBar,
    pub icons: DesktopIcons,
    pub settings: Settings,
    pub users: UserDirectory,
    pub files: FileTree,
    pub notifications: NotificationCenter,
    /// Activity monitor sort state
    pub monitor: ActivityMonitor,
    /// Host clock at the last `tick` (ms)
    pub(crate) now_ms: f64,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl DesktopEngine {
    /// Create a new desktop engine
    pub fn new(config: DesktopConfig) -> Self {
        let work_area = config.work_area();
        let mut engine = Self {
            windows: WindowManager::new(&config),
            input: InputRouter::new(config.drag_threshold),
            menu: MenuBar::standard(),
            icons: DesktopIcons::standard(work_area, config.icon_grid),
            settings: Settings::default(),
            users: UserDirectory::new(),
            files: FileTree::with_skeleton(),
            notifications: NotificationCenter::new(
                config.notification_capacity,
                config.notification_ttl_ms,
            ),
            monitor: ActivityMonitor::default(),
            now_ms: 0.0,
            config,
        };
        engine.sync_menu();
        engine
    }

    /// Create an engine from a (possibly partial) JSON config
    pub fn from_config_json(json: &str) -> DeskResult<Self> {
        Ok(Self::new(DesktopConfig::from_json(json)?))
    }

    /// Resize the screen; the work area shrinks or grows with it
    pub fn resize_screen(&mut self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() {
            return;
        }
        let screen = Size::new(width, height);
        if screen.is_empty() {
            return;
        }
        self.config.screen = screen;
        let work_area = self.config.work_area();
        self.windows.set_bounds(work_area);
        self.icons.set_bounds(work_area);
        debug!(width, height, "screen resized");
    }

    /// Advance the host clock and expire stale notifications
    pub fn tick(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        let expired = self.notifications.expire(now_ms);
        if expired > 0 {
            debug!(expired, "notifications expired");
        }
    }

    /// Convert screen coordinates to desktop coordinates
    pub fn screen_to_desktop(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y) / self.settings.zoom
    }

    /// Post a notification stamped with the current host time
    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.notifications.push(level, title, message, self.now_ms)
    }

    /// Handle a key press
    pub fn handle_key(&mut self, event: &KeyEvent) -> InputResult {
        match shortcuts::resolve(event) {
            Some(Command::Action(action)) => {
                self.dispatch(action);
                InputResult::Handled
            }
            Some(Command::CloseMenu) => {
                if self.input.is_dragging() {
                    self.input.cancel();
                    return InputResult::Handled;
                }
                if self.menu.is_open() {
                    self.menu.close();
                    return InputResult::Handled;
                }
                InputResult::Unhandled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Enable menu items according to current window state
    pub(crate) fn sync_menu(&mut self) {
        let has_window = self.windows.focused().is_some();
        self.menu
            .set_enabled_where(crate::menu::MenuAction::needs_window, has_window);
    }
}
