//! Desktop configuration
//!
//! Every field has a default, so a host may pass a partial JSON document.

use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::math::{Rect, Size};

/// Static desktop configuration supplied by the host page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Screen size in CSS pixels at zoom 1.0
    pub screen: Size,
    /// Height of the menu bar pinned to the top edge
    pub menu_bar_height: f32,
    /// Offset between successive auto-placed windows
    pub cascade_offset: f32,
    /// Number of cascade steps before wrapping back to the first slot
    pub cascade_steps: u32,
    /// First z-index handed out; keeps windows above desktop icons
    pub base_z_index: u32,
    /// Notification queue capacity
    pub notification_capacity: usize,
    /// Default notification lifetime in ms (0 = sticky)
    pub notification_ttl_ms: f64,
    /// Desktop icon grid cell
    pub icon_grid: Size,
    /// Pointer travel in px before a press on an icon becomes a drag
    pub drag_threshold: f32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            screen: Size::new(1280.0, 800.0),
            menu_bar_height: 20.0,
            cascade_offset: 24.0,
            cascade_steps: 8,
            base_z_index: 10,
            notification_capacity: 20,
            notification_ttl_ms: 6000.0,
            icon_grid: Size::new(80.0, 84.0),
            drag_threshold: 3.0,
        }
    }
}

impl DesktopConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the layout math cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "screen",
                reason: "width and height must be positive",
            });
        }
        if self.menu_bar_height < 0.0 || self.menu_bar_height >= self.screen.height {
            return Err(ConfigError::InvalidValue {
                field: "menu_bar_height",
                reason: "must be non-negative and smaller than the screen",
            });
        }
        if self.notification_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notification_capacity",
                reason: "must be at least 1",
            });
        }
        if self.icon_grid.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "icon_grid",
                reason: "width and height must be positive",
            });
        }
        Ok(())
    }

    /// Area available to windows (screen minus the menu bar)
    pub fn work_area(&self) -> Rect {
        Rect::new(
            0.0,
            self.menu_bar_height,
            self.screen.width,
            self.screen.height - self.menu_bar_height,
        )
    }
}
