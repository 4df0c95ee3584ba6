//! Input handling for pointer events and drag operations
//!
//! Pointer moves only update the drag preview; the window manager and icon
//! positions change when the pointer is released.

use tracing::debug;
use crate::input::{DragState, InputResult};
use crate::math::{Rect, Vec2};
use crate::window::{WindowId, WindowRegion};
use super::DesktopEngine;

impl DesktopEngine {
    /// Start move drag
    pub fn start_move_drag(&mut self, id: &str, screen_x: f32, screen_y: f32) {
        let window_position = match self.windows.get(id) {
            Some(window) if !window.maximized => window.position,
            _ => return,
        };

        let pos = self.screen_to_desktop(screen_x, screen_y);
        self.focus_window(id);
        self.input
            .start_window_move(id.to_string(), pos - window_position, window_position);
    }

    /// Start resize drag
    pub fn start_resize_drag(&mut self, id: &str, direction: &str, screen_x: f32, screen_y: f32) {
        let Some(handle) = WindowRegion::from_direction(direction) else {
            return;
        };
        let pos = self.screen_to_desktop(screen_x, screen_y);
        self.begin_resize(id.to_string(), handle, pos);
    }

    /// Handle pointer down
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8, shift: bool) -> InputResult {
        if button != 0 {
            return InputResult::Unhandled;
        }
        self.menu.close();
        let pos = self.screen_to_desktop(x, y);

        if let Some((window_id, region)) = self.windows.region_at(pos, self.settings.zoom) {
            self.icons.clear_selection();
            return self.handle_window_click(window_id, region, pos);
        }

        let icon = self.icons.icon_at(pos).map(|i| (i.id.clone(), i.position));
        match icon {
            Some((icon_id, icon_pos)) => {
                self.icons.select(&icon_id, shift);
                self.input.start_icon_press(icon_id, icon_pos, pos);
                InputResult::Handled
            }
            None => {
                self.icons.clear_selection();
                InputResult::Unhandled
            }
        }
    }

    /// Handle left click on a window region
    fn handle_window_click(&mut self, window_id: WindowId, region: WindowRegion, pos: Vec2) -> InputResult {
        match region {
            WindowRegion::CloseButton => {
                self.close_window(&window_id);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.minimize_window(&window_id);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.maximize_window(&window_id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => self.handle_title_bar_click(window_id, pos),
            WindowRegion::Content => self.handle_content_click(window_id, pos),
            handle => {
                self.begin_resize(window_id, handle, pos);
                InputResult::Handled
            }
        }
    }

    /// Handle click on title bar - starts window move
    fn handle_title_bar_click(&mut self, window_id: WindowId, pos: Vec2) -> InputResult {
        self.focus_window(&window_id);
        if let Some(window) = self.windows.get(&window_id) {
            if !window.maximized {
                let origin = window.position;
                self.input.start_window_move(window_id, pos - origin, origin);
            }
        }
        InputResult::Handled
    }

    /// Handle click on content area - focus and forward to the app
    fn handle_content_click(&mut self, window_id: WindowId, pos: Vec2) -> InputResult {
        self.focus_window(&window_id);
        let local = match self.windows.get(&window_id) {
            Some(window) => pos - window.position,
            None => return InputResult::Unhandled,
        };
        InputResult::Forward {
            window_id,
            local_x: local.x,
            local_y: local.y,
        }
    }

    fn begin_resize(&mut self, window_id: WindowId, handle: WindowRegion, pos: Vec2) {
        self.focus_window(&window_id);
        let Some(window) = self.windows.get(&window_id) else {
            return;
        };
        if !handle.is_resize() || !window.can_resize() {
            return;
        }
        let (start_pos, start_size) = (window.position, window.size);
        let (min_size, max_size) = (window.min_size, window.max_size);
        self.input
            .start_window_resize(window_id, handle, start_pos, start_size, pos, min_size, max_size);
    }

    /// Handle pointer move
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pos = self.screen_to_desktop(x, y);
        match self.input.update(pos) {
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer up, committing the drag
    pub fn handle_pointer_up(&mut self) -> InputResult {
        let Some(drag) = self.input.end_drag() else {
            return InputResult::Unhandled;
        };

        match drag {
            DragState::MoveWindow { window_id, preview, .. } => {
                self.windows.move_window(&window_id, preview);
            }
            DragState::ResizeWindow { window_id, preview, .. } => {
                self.windows
                    .set_rect(&window_id, preview.position(), preview.size());
            }
            DragState::MoveIcon { icon_id, preview, moved, .. } => {
                if moved {
                    self.icons.move_icon(&icon_id, preview, self.settings.snap_icons);
                    debug!(icon = %icon_id, "icon moved");
                }
            }
        }
        InputResult::Handled
    }

    /// Handle double click: window-shade on a title bar, launch on an icon
    pub fn handle_double_click(&mut self, x: f32, y: f32) -> InputResult {
        let pos = self.screen_to_desktop(x, y);

        if let Some((window_id, region)) = self.windows.region_at(pos, self.settings.zoom) {
            if region == WindowRegion::TitleBar {
                self.input.cancel();
                self.collapse_window(&window_id);
                return InputResult::Handled;
            }
            return InputResult::Unhandled;
        }

        let app = self.icons.icon_at(pos).map(|i| i.app);
        match app {
            Some(app) => {
                self.input.cancel();
                self.launch_app(app);
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Outline of the window being dragged, for the host to draw
    pub fn drag_preview(&self) -> Option<(WindowId, Rect)> {
        let drag = self.input.drag_state()?;
        let id = drag.window_id()?;
        let window = self.windows.get(id)?;
        Some((id.to_string(), drag.preview_rect(window.size)?))
    }

    /// Position of the icon being dragged, once past the threshold
    pub fn icon_drag_preview(&self) -> Option<(&str, Vec2)> {
        match self.input.drag_state()? {
            DragState::MoveIcon { icon_id, preview, moved: true, .. } => {
                Some((icon_id.as_str(), *preview))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::AppId;
    use crate::math::Size;
    use crate::window::WindowConfig;

    fn create_test_engine() -> DesktopEngine {
        DesktopEngine::default()
    }

    fn create_test_window(engine: &mut DesktopEngine, id: &str, x: f32, y: f32) -> WindowId {
        engine.create_window(WindowConfig {
            position: Some(Vec2::new(x, y)),
            size: Size::new(400.0, 300.0),
            ..WindowConfig::new(id, "Test Window")
        })
    }

    #[test]
    fn test_pointer_down_non_primary_unhandled() {
        let mut engine = create_test_engine();
        create_test_window(&mut engine, "a", 100.0, 100.0);
        let result = engine.handle_pointer_down(250.0, 110.0, 2, false);
        assert_eq!(result, InputResult::Unhandled);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_pointer_down_on_empty_area_unhandled() {
        let mut engine = create_test_engine();
        engine.icons.select("file-browser", false);
        let result = engine.handle_pointer_down(900.0, 600.0, 0, false);
        assert_eq!(result, InputResult::Unhandled);
        assert!(engine.icons.selected().is_empty());
    }

    #[test]
    fn test_title_bar_drag_previews_then_commits() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, "a", 100.0, 100.0);

        assert!(engine.handle_pointer_down(250.0, 110.0, 0, false).is_handled());
        assert!(engine.input.drag_state().unwrap().is_move());

        engine.handle_pointer_move(300.0, 160.0);
        // Preview moved, window did not
        let (_, preview) = engine.drag_preview().unwrap();
        assert!((preview.x - 150.0).abs() < 0.001);
        assert!((preview.y - 150.0).abs() < 0.001);
        assert!((engine.windows.get(&id).unwrap().position.x - 100.0).abs() < 0.001);

        assert!(engine.handle_pointer_up().is_handled());
        let window = engine.windows.get(&id).unwrap();
        assert!((window.position.x - 150.0).abs() < 0.001);
        assert!((window.position.y - 150.0).abs() < 0.001);
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);
    }

    #[test]
    fn test_drag_is_clamped_on_commit() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, "a", 100.0, 100.0);

        engine.handle_pointer_down(250.0, 110.0, 0, false);
        engine.handle_pointer_move(250.0, -500.0);
        engine.handle_pointer_up();
        let window = engine.windows.get(&id).unwrap();
        assert!((window.position.y - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_from_corner_respects_min_size() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, "a", 100.0, 100.0);

        engine.handle_pointer_down(495.0, 395.0, 0, false);
        assert!(engine.input.drag_state().unwrap().is_resize());

        engine.handle_pointer_move(545.0, 445.0);
        let (_, preview) = engine.drag_preview().unwrap();
        assert!((preview.width - 450.0).abs() < 0.001);

        engine.handle_pointer_move(0.0, 0.0);
        engine.handle_pointer_up();
        let window = engine.windows.get(&id).unwrap();
        assert!((window.size.width - 200.0).abs() < 0.001);
        assert!((window.size.height - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_start_resize_drag_by_direction() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, "a", 100.0, 100.0);
        engine.start_resize_drag(&id, "w", 100.0, 200.0);
        engine.handle_pointer_move(50.0, 200.0);
        engine.handle_pointer_up();
        let window = engine.windows.get(&id).unwrap();
        assert!((window.position.x - 50.0).abs() < 0.001);
        assert!((window.size.width - 450.0).abs() < 0.001);

        engine.start_resize_drag(&id, "diagonal", 0.0, 0.0);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_buttons() {
        let mut engine = create_test_engine();
        let a = create_test_window(&mut engine, "a", 100.0, 100.0);
        let b = create_test_window(&mut engine, "b", 600.0, 100.0);

        // Close box of b
        engine.handle_pointer_down(610.0, 110.0, 0, false);
        assert!(!engine.windows.is_open(&b));
        assert_eq!(engine.windows.focused(), Some(a.as_str()));

        // Zoom box of a: right edge 500, slot x = 500 - 19
        engine.handle_pointer_down(488.0, 110.0, 0, false);
        assert!(engine.windows.get(&a).unwrap().maximized);

        // Maximized windows do not start a move
        engine.handle_pointer_down(400.0, 30.0, 0, false);
        assert!(!engine.input.is_dragging());
    }

    #[test]
    fn test_content_click_forwards_local_coordinates() {
        let mut engine = create_test_engine();
        let a = create_test_window(&mut engine, "a", 100.0, 100.0);
        create_test_window(&mut engine, "b", 700.0, 100.0);

        let result = engine.handle_pointer_down(250.0, 250.0, 0, false);
        match result {
            InputResult::Forward { window_id, local_x, local_y } => {
                assert_eq!(window_id, a);
                assert!((local_x - 150.0).abs() < 0.001);
                assert!((local_y - 150.0).abs() < 0.001);
            }
            other => panic!("expected forward, got {:?}", other),
        }
        assert_eq!(engine.windows.focused(), Some(a.as_str()));
    }

    #[test]
    fn test_pointer_uses_zoom() {
        let mut engine = create_test_engine();
        let id = create_test_window(&mut engine, "a", 100.0, 100.0);
        engine.settings.set_zoom(2.0);

        // Screen (500, 220) is desktop (250, 110): the title bar
        engine.handle_pointer_down(500.0, 220.0, 0, false);
        engine.handle_pointer_move(600.0, 320.0);
        engine.handle_pointer_up();
        let window = engine.windows.get(&id).unwrap();
        assert!((window.position.x - 150.0).abs() < 0.001);
        assert!((window.position.y - 150.0).abs() < 0.001);
    }

    #[test]
    fn test_icon_click_below_threshold_does_not_move() {
        let mut engine = create_test_engine();
        let before = engine.icons.get("file-browser").unwrap().position;

        engine.handle_pointer_down(40.0, 60.0, 0, false);
        assert!(engine.icons.is_selected("file-browser"));
        engine.handle_pointer_move(41.0, 61.0);
        assert!(engine.icon_drag_preview().is_none());
        engine.handle_pointer_up();
        assert_eq!(engine.icons.get("file-browser").unwrap().position, before);
    }

    #[test]
    fn test_icon_drag_snaps_on_release() {
        let mut engine = create_test_engine();
        engine.handle_pointer_down(40.0, 60.0, 0, false);
        engine.handle_pointer_move(370.0, 250.0);
        assert!(engine.icon_drag_preview().is_some());
        engine.handle_pointer_up();

        let pos = engine.icons.get("file-browser").unwrap().position;
        // Raw (330, 210) snaps to the 80x84 grid anchored at (0, 20)
        assert!((pos.x - 320.0).abs() < 0.001);
        assert!((pos.y - 188.0).abs() < 0.001);
    }

    #[test]
    fn test_double_click() {
        let mut engine = create_test_engine();
        engine.handle_double_click(40.0, 60.0);
        assert!(engine.windows.is_open(AppId::FileBrowser.as_str()));

        let id = create_test_window(&mut engine, "a", 300.0, 300.0);
        assert!(engine.handle_double_click(450.0, 310.0).is_handled());
        assert!(engine.windows.get(&id).unwrap().collapsed);
        assert_eq!(engine.handle_double_click(1200.0, 700.0), InputResult::Unhandled);
    }

    #[test]
    fn test_pointer_down_closes_menu() {
        let mut engine = create_test_engine();
        engine.menu.open(1);
        engine.handle_pointer_down(900.0, 600.0, 0, false);
        assert!(!engine.menu.is_open());
    }
}
