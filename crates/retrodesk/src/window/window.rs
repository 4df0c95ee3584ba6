//! The window record

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use super::WindowId;

/// What the user is allowed to do with a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowCapabilities {
    pub resizable: bool,
    pub closable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
}

impl Default for WindowCapabilities {
    fn default() -> Self {
        Self {
            resizable: true,
            closable: true,
            minimizable: true,
            maximizable: true,
        }
    }
}

impl WindowCapabilities {
    /// Fixed-size dialog: closable only
    pub const DIALOG: WindowCapabilities = WindowCapabilities {
        resizable: false,
        closable: true,
        minimizable: false,
        maximizable: false,
    };
}

/// One simulated desktop window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    /// Top-left corner in desktop coordinates
    pub position: Vec2,
    /// Full frame size (title bar included)
    pub size: Size,
    pub min_size: Size,
    pub max_size: Option<Size>,
    pub minimized: bool,
    pub maximized: bool,
    /// Window-shaded: only the title bar is drawn
    pub collapsed: bool,
    pub z_index: u32,
    #[serde(default)]
    pub capabilities: WindowCapabilities,
    /// Frame to return to when leaving the maximized state
    #[serde(default)]
    pub restore_rect: Option<Rect>,
}

impl Window {
    /// Drawn frame; collapsed windows shrink to their title bar
    pub fn rect(&self) -> Rect {
        if self.collapsed {
            Rect::from_pos_size(
                self.position,
                Size::new(self.size.width, FRAME_STYLE.title_bar_height),
            )
        } else {
            Rect::from_pos_size(self.position, self.size)
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }

    /// Whether edge handles are live right now
    #[inline]
    pub fn can_resize(&self) -> bool {
        self.capabilities.resizable && !self.maximized && !self.collapsed
    }

    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Close box, pinned to the left of the title bar
    pub fn close_button_rect(&self) -> Option<Rect> {
        if !self.capabilities.closable {
            return None;
        }
        Some(self.button_rect(self.position.x + FRAME_STYLE.button_margin))
    }

    /// Zoom box, pinned to the right of the title bar
    pub fn maximize_button_rect(&self) -> Option<Rect> {
        if !self.capabilities.maximizable {
            return None;
        }
        Some(self.button_rect(self.right_slot_x(0)))
    }

    /// Minimize box, left of the zoom box (or in its slot when there is none)
    pub fn minimize_button_rect(&self) -> Option<Rect> {
        if !self.capabilities.minimizable {
            return None;
        }
        let slot = if self.capabilities.maximizable { 1 } else { 0 };
        Some(self.button_rect(self.right_slot_x(slot)))
    }

    fn right_slot_x(&self, slot: u32) -> f32 {
        let step = FRAME_STYLE.button_size + FRAME_STYLE.button_margin;
        self.position.x + self.size.width - step - step * slot as f32
    }

    fn button_rect(&self, x: f32) -> Rect {
        let inset = (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(
            x,
            self.position.y + inset,
            FRAME_STYLE.button_size,
            FRAME_STYLE.button_size,
        )
    }
}
