//! Input router state machine

use crate::math::{Rect, Size, Vec2};
use crate::window::{WindowId, WindowRegion};
use super::{calculate_resize, DragState};

/// Input router holding the in-flight drag
pub struct InputRouter {
    drag: Option<DragState>,
    /// Pointer travel before an icon press turns into a drag
    drag_threshold: f32,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(3.0)
    }
}

impl InputRouter {
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            drag: None,
            drag_threshold,
        }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start window move operation
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2, origin: Vec2) {
        self.drag = Some(DragState::MoveWindow {
            window_id,
            offset,
            preview: origin,
        });
    }

    /// Start window resize operation
    #[allow(clippy::too_many_arguments)]
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        handle: WindowRegion,
        start_pos: Vec2,
        start_size: Size,
        start_mouse: Vec2,
        min_size: Size,
        max_size: Option<Size>,
    ) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_pos,
            start_size,
            start_mouse,
            min_size,
            max_size,
            preview: Rect::from_pos_size(start_pos, start_size),
        });
    }

    /// Start pressing a desktop icon
    pub fn start_icon_press(&mut self, icon_id: String, icon_pos: Vec2, pointer: Vec2) {
        self.drag = Some(DragState::MoveIcon {
            icon_id,
            offset: pointer - icon_pos,
            start_mouse: pointer,
            preview: icon_pos,
            moved: false,
        });
    }

    /// Update the preview for the pointer's new desktop position
    pub fn update(&mut self, pointer: Vec2) -> Option<&DragState> {
        let threshold = self.drag_threshold;
        match self.drag.as_mut()? {
            DragState::MoveWindow { offset, preview, .. } => {
                *preview = pointer - *offset;
            }
            DragState::ResizeWindow {
                handle,
                start_pos,
                start_size,
                start_mouse,
                min_size,
                max_size,
                preview,
                ..
            } => {
                let (pos, size) = calculate_resize(
                    *handle,
                    *start_pos,
                    *start_size,
                    pointer - *start_mouse,
                    *min_size,
                    *max_size,
                );
                *preview = Rect::from_pos_size(pos, size);
            }
            DragState::MoveIcon {
                offset,
                start_mouse,
                preview,
                moved,
                ..
            } => {
                if !*moved && pointer.distance(*start_mouse) >= threshold {
                    *moved = true;
                }
                if *moved {
                    *preview = pointer - *offset;
                }
            }
        }
        self.drag.as_ref()
    }

    /// End current drag operation, handing back the final state to commit
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Abandon current drag operation without committing
    #[inline]
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_updates_preview_only() {
        let mut router = InputRouter::default();
        assert!(!router.is_dragging());

        router.start_window_move("a".to_string(), Vec2::new(10.0, 5.0), Vec2::new(100.0, 100.0));
        router.update(Vec2::new(210.0, 155.0));

        match router.drag_state() {
            Some(DragState::MoveWindow { preview, .. }) => {
                assert!((preview.x - 200.0).abs() < 0.001);
                assert!((preview.y - 150.0).abs() < 0.001);
            }
            other => panic!("Expected MoveWindow, got {:?}", other),
        }

        let finished = router.end_drag().unwrap();
        assert!(finished.is_move());
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_resize_preview_clamps() {
        let mut router = InputRouter::default();
        router.start_window_resize(
            "a".to_string(),
            WindowRegion::ResizeSE,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(500.0, 400.0),
            Size::new(200.0, 120.0),
            None,
        );

        router.update(Vec2::new(0.0, 0.0));
        let rect = router.drag_state().unwrap().preview_rect(Size::ZERO).unwrap();
        assert!((rect.width - 200.0).abs() < 0.001);
        assert!((rect.height - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_icon_press_needs_threshold() {
        let mut router = InputRouter::new(5.0);
        router.start_icon_press("trash".to_string(), Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));

        router.update(Vec2::new(21.0, 21.0));
        match router.drag_state() {
            Some(DragState::MoveIcon { moved, preview, .. }) => {
                assert!(!moved);
                assert!((preview.x - 10.0).abs() < 0.001);
            }
            other => panic!("Expected MoveIcon, got {:?}", other),
        }

        router.update(Vec2::new(40.0, 20.0));
        match router.drag_state() {
            Some(DragState::MoveIcon { moved, preview, .. }) => {
                assert!(moved);
                assert!((preview.x - 30.0).abs() < 0.001);
            }
            other => panic!("Expected MoveIcon, got {:?}", other),
        }
    }

    #[test]
    fn test_update_without_drag_is_none() {
        let mut router = InputRouter::default();
        assert!(router.update(Vec2::new(1.0, 1.0)).is_none());
        router.start_window_move("a".to_string(), Vec2::ZERO, Vec2::ZERO);
        router.cancel();
        assert!(router.end_drag().is_none());
    }
}
