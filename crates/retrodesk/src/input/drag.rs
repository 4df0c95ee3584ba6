//! Drag state for pointer interactions

use crate::math::{Rect, Size, Vec2};
use crate::window::{WindowId, WindowRegion};

/// In-flight pointer interaction.
///
/// Each variant carries a preview that tracks the pointer; the shared state is only
/// touched when the drag ends.
#[derive(Clone, Debug)]
pub enum DragState {
    /// Moving a window by its title bar
    MoveWindow {
        window_id: WindowId,
        /// Offset from window origin to cursor
        offset: Vec2,
        /// Where the window would land if released now
        preview: Vec2,
    },
    /// Resizing a window from an edge or corner
    ResizeWindow {
        window_id: WindowId,
        handle: WindowRegion,
        start_pos: Vec2,
        start_size: Size,
        /// Pointer position at start (desktop coords)
        start_mouse: Vec2,
        min_size: Size,
        max_size: Option<Size>,
        /// Frame the window would take if released now
        preview: Rect,
    },
    /// Pressing or dragging a desktop icon
    MoveIcon {
        icon_id: String,
        offset: Vec2,
        start_mouse: Vec2,
        preview: Vec2,
        /// Set once the pointer travels past the drag threshold
        moved: bool,
    },
}

impl DragState {
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }

    /// Get the window ID if this is a window operation
    pub fn window_id(&self) -> Option<&str> {
        match self {
            DragState::MoveWindow { window_id, .. }
            | DragState::ResizeWindow { window_id, .. } => Some(window_id),
            DragState::MoveIcon { .. } => None,
        }
    }

    /// Live preview frame for window drags, given the window's current size
    pub fn preview_rect(&self, current_size: Size) -> Option<Rect> {
        match self {
            DragState::MoveWindow { preview, .. } => Some(Rect::from_pos_size(*preview, current_size)),
            DragState::ResizeWindow { preview, .. } => Some(*preview),
            DragState::MoveIcon { .. } => None,
        }
    }
}
