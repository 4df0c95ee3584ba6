//! Window manager for lifecycle, focus, and z-order

use tracing::{debug, info};
use crate::config::DesktopConfig;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use super::{Window, WindowConfig, WindowId, WindowRegion, DEFAULT_MIN_SIZE};

/// Window manager handling window lifecycle, z-order, and focus
///
/// Invariant: when a window is focused its z-index is the highest of all windows.
/// Every focus takes a fresh value from the monotonic `top_z` counter.
pub struct WindowManager {
    /// Open windows, in opening order
    windows: Vec<Window>,
    /// Currently focused window
    focused: Option<WindowId>,
    /// Last z-index handed out
    top_z: u32,
    /// Work area windows live in (screen minus menu bar)
    bounds: Rect,
    cascade_offset: f32,
    cascade_steps: u32,
    /// Number of auto-placed windows so far
    cascade_index: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(&DesktopConfig::default())
    }
}

impl WindowManager {
    /// Create a window manager for the config's work area
    pub fn new(config: &DesktopConfig) -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
            top_z: config.base_z_index,
            bounds: config.work_area(),
            cascade_offset: config.cascade_offset,
            cascade_steps: config.cascade_steps.max(1),
            cascade_index: 0,
        }
    }

    /// Open a window, or focus it if the id is already open
    pub fn open(&mut self, config: WindowConfig) -> WindowId {
        if let Some(idx) = self.index_of(&config.id) {
            let id = self.windows[idx].id.clone();
            debug!(window = %id, "window already open, focusing existing");
            self.windows[idx].minimized = false;
            self.focus(&id);
            return id;
        }

        let min_size = config.min_size.unwrap_or(DEFAULT_MIN_SIZE);
        let size = config.size.constrain(min_size, config.max_size);
        let position = match config.position {
            Some(position) => position,
            None => self.next_cascade_position(),
        };

        let z_index = self.next_z();
        let window = Window {
            id: config.id,
            title: config.title,
            icon: config.icon,
            position: clamp_position(self.bounds, position, size),
            size,
            min_size,
            max_size: config.max_size,
            minimized: false,
            maximized: false,
            collapsed: false,
            z_index,
            capabilities: config.capabilities,
            restore_rect: None,
        };

        let id = window.id.clone();
        info!(window = %id, z = window.z_index, "window opened");
        self.windows.push(window);
        self.focused = Some(id.clone());
        id
    }

    /// Close a window, handing focus to the highest remaining window
    pub fn close(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        if !self.windows[idx].capabilities.closable {
            debug!(window = %id, "close ignored, window is not closable");
            return;
        }

        self.windows.remove(idx);
        info!(window = %id, "window closed");

        if self.focused.as_deref() == Some(id) {
            self.focused = self
                .windows
                .iter()
                .max_by_key(|w| w.z_index)
                .map(|w| w.id.clone());
        }
    }

    /// Get a window by ID
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Check whether a window is open
    #[inline]
    pub fn is_open(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Focus a window (brings to top)
    pub fn focus(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let z_index = self.next_z();
        self.windows[idx].z_index = z_index;
        self.focused = Some(self.windows[idx].id.clone());
    }

    /// Get the currently focused window ID
    #[inline]
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Get the currently focused window
    pub fn focused_window(&self) -> Option<&Window> {
        self.focused.as_deref().and_then(|id| self.get(id))
    }

    /// Move a window, keeping its title bar reachable
    pub fn move_window(&mut self, id: &str, position: Vec2) {
        let bounds = self.bounds;
        if let Some(window) = self.get_mut(id) {
            if window.maximized {
                return;
            }
            window.position = clamp_position(bounds, position, window.size);
        }
    }

    /// Resize a window, clamped to its min/max size
    pub fn resize(&mut self, id: &str, size: Size) {
        if let Some(window) = self.get_mut(id) {
            if !window.capabilities.resizable || window.maximized {
                return;
            }
            window.size = size.constrain(window.min_size, window.max_size);
        }
    }

    /// Commit a resize that also moved the origin (north/west handles)
    pub fn set_rect(&mut self, id: &str, position: Vec2, size: Size) {
        let bounds = self.bounds;
        if let Some(window) = self.get_mut(id) {
            if !window.capabilities.resizable || window.maximized {
                return;
            }
            window.size = size.constrain(window.min_size, window.max_size);
            window.position = clamp_position(bounds, position, window.size);
        }
    }

    /// Minimize a window
    pub fn minimize(&mut self, id: &str) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        if !window.capabilities.minimizable || window.minimized {
            return;
        }
        window.minimized = true;
        debug!(window = %id, "window minimized");

        if self.focused.as_deref() == Some(id) {
            let next = self
                .windows
                .iter()
                .filter(|w| !w.minimized)
                .max_by_key(|w| w.z_index)
                .map(|w| w.id.clone());
            match next {
                Some(next) => self.focus(&next),
                None => self.focused = None,
            }
        }
    }

    /// Restore a minimized window and focus it
    pub fn restore(&mut self, id: &str) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.minimized = false;
        self.focus(id);
    }

    /// Maximize a window to the work area, or restore it if already maximized
    pub fn toggle_maximize(&mut self, id: &str) {
        let bounds = self.bounds;
        let Some(window) = self.get_mut(id) else {
            return;
        };
        if !window.capabilities.maximizable {
            return;
        }

        if window.maximized {
            window.maximized = false;
            if let Some(rect) = window.restore_rect.take() {
                window.size = rect.size().constrain(window.min_size, window.max_size);
                window.position = clamp_position(bounds, rect.position(), window.size);
            }
        } else {
            window.restore_rect = Some(Rect::from_pos_size(window.position, window.size));
            window.maximized = true;
            window.collapsed = false;
            fit_to_bounds(window, bounds);
        }
        self.focus(id);
    }

    /// Toggle window-shade
    pub fn toggle_collapse(&mut self, id: &str) {
        if let Some(window) = self.get_mut(id) {
            window.collapsed = !window.collapsed;
        }
    }

    /// Update the work area (screen resize, menu bar change)
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        for window in &mut self.windows {
            if window.maximized {
                fit_to_bounds(window, bounds);
            } else {
                window.position = clamp_position(bounds, window.position, window.size);
            }
        }
    }

    /// Current work area
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Last z-index handed out
    #[inline]
    pub fn top_z(&self) -> u32 {
        self.top_z
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Non-minimized windows, back to front
    pub fn visible_windows(&self) -> Vec<&Window> {
        let mut windows = self.windows_by_z();
        windows.retain(|w| w.is_visible());
        windows
    }

    /// All windows in opening order
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Get the number of windows
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Replace all windows with a restored set
    ///
    /// Duplicate ids keep the first record. The z counter resumes above the highest
    /// restored z-index and the topmost visible window takes focus.
    pub fn replace_all(&mut self, windows: Vec<Window>) {
        self.windows.clear();
        self.focused = None;

        for mut window in windows {
            if self.is_open(&window.id) {
                debug!(window = %window.id, "dropping duplicate restored window");
                continue;
            }
            window.size = window.size.constrain(window.min_size, window.max_size);
            if window.maximized {
                fit_to_bounds(&mut window, self.bounds);
            } else {
                window.position = clamp_position(self.bounds, window.position, window.size);
            }
            self.top_z = self.top_z.max(window.z_index);
            self.windows.push(window);
        }

        let top = self
            .windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id.clone());
        if let Some(id) = top {
            self.focus(&id);
        }
        self.cascade_index = self.windows.len() as u32;
    }

    /// Find the topmost visible window at a desktop position
    pub fn window_at(&self, pos: Vec2) -> Option<&Window> {
        self.visible_windows()
            .into_iter()
            .rev()
            .find(|w| w.rect().contains(pos))
    }

    /// Find which region of which window is at a desktop position
    ///
    /// `zoom` widens the grab handles when the desktop is zoomed out so they stay
    /// usable in screen pixels.
    pub fn region_at(&self, pos: Vec2, zoom: f32) -> Option<(WindowId, WindowRegion)> {
        let window = self.window_at(pos)?;
        Some((window.id.clone(), hit_test_window(window, pos, zoom)))
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Hand out the next z-index. When the counter is exhausted (restored data can
    /// carry any value) the windows are re-ranked 1..n in their current order first.
    fn next_z(&mut self) -> u32 {
        if self.top_z == u32::MAX {
            let mut order: Vec<usize> = (0..self.windows.len()).collect();
            order.sort_by_key(|&i| self.windows[i].z_index);
            for (rank, idx) in order.into_iter().enumerate() {
                self.windows[idx].z_index = rank as u32 + 1;
            }
            self.top_z = self.windows.len() as u32;
            debug!(windows = self.windows.len(), "z-order renumbered");
        }
        self.top_z += 1;
        self.top_z
    }

    fn next_cascade_position(&mut self) -> Vec2 {
        let step = (self.cascade_index % self.cascade_steps) as f32 + 1.0;
        self.cascade_index += 1;
        Vec2::new(
            self.bounds.x + self.cascade_offset * step,
            self.bounds.y + self.cascade_offset * step,
        )
    }
}

/// Keep at least `min_visible_width` of the frame and the whole title bar strip
/// inside the work area.
fn clamp_position(bounds: Rect, position: Vec2, size: Size) -> Vec2 {
    let visible = FRAME_STYLE.min_visible_width.min(size.width);
    let x = clamp_axis(
        position.x,
        bounds.x - size.width + visible,
        bounds.right() - visible,
    );
    let y = clamp_axis(
        position.y,
        bounds.y,
        bounds.bottom() - FRAME_STYLE.title_bar_height,
    );
    Vec2::new(x, y)
}

/// Like `f32::clamp` but tolerates `hi < lo` (lower bound wins)
#[inline]
fn clamp_axis(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

fn fit_to_bounds(window: &mut Window, bounds: Rect) {
    window.position = bounds.position();
    window.size = bounds.size().constrain(window.min_size, window.max_size);
}

// =============================================================================
// Hit testing helper functions
// =============================================================================

/// Hit test a specific window at a position
fn hit_test_window(window: &Window, pos: Vec2, zoom: f32) -> WindowRegion {
    if let Some(region) = hit_test_buttons(window, pos) {
        return region;
    }

    if window.can_resize() {
        if let Some(region) = hit_test_resize_corners(window, pos, zoom) {
            return region;
        }
    }

    if window.title_bar_rect().contains(pos) {
        return WindowRegion::TitleBar;
    }

    if window.can_resize() {
        if let Some(region) = hit_test_resize_edges(window, pos, zoom) {
            return region;
        }
    }

    WindowRegion::Content
}

/// Hit test window buttons (close, maximize, minimize)
fn hit_test_buttons(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    let hit = |rect: Option<Rect>| rect.map_or(false, |r| r.contains(pos));

    if hit(window.close_button_rect()) {
        return Some(WindowRegion::CloseButton);
    }
    if hit(window.maximize_button_rect()) {
        return Some(WindowRegion::MaximizeButton);
    }
    if hit(window.minimize_button_rect()) {
        return Some(WindowRegion::MinimizeButton);
    }
    None
}

fn handle_size(zoom: f32, base: f32, cap: f32) -> f32 {
    (base / zoom.max(0.1)).min(cap)
}

/// Hit test resize corner handles
fn hit_test_resize_corners(window: &Window, pos: Vec2, zoom: f32) -> Option<WindowRegion> {
    let corner = handle_size(zoom, FRAME_STYLE.resize_handle_size * 2.0, 16.0);
    let rect = window.rect();

    let left = pos.x < rect.x + corner;
    let right = pos.x >= rect.right() - corner;
    let top = pos.y < rect.y + corner;
    let bottom = pos.y >= rect.bottom() - corner;

    match (top, bottom, left, right) {
        (true, _, true, _) => Some(WindowRegion::ResizeNW),
        (true, _, _, true) => Some(WindowRegion::ResizeNE),
        (_, true, true, _) => Some(WindowRegion::ResizeSW),
        (_, true, _, true) => Some(WindowRegion::ResizeSE),
        _ => None,
    }
}

/// Hit test resize edge handles (non-corner)
fn hit_test_resize_edges(window: &Window, pos: Vec2, zoom: f32) -> Option<WindowRegion> {
    let edge = handle_size(zoom, FRAME_STYLE.resize_handle_size, 12.0);
    let rect = window.rect();

    if pos.y < rect.y + edge {
        return Some(WindowRegion::ResizeN);
    }
    if pos.y >= rect.bottom() - edge {
        return Some(WindowRegion::ResizeS);
    }
    if pos.x < rect.x + edge {
        return Some(WindowRegion::ResizeW);
    }
    if pos.x >= rect.right() - edge {
        return Some(WindowRegion::ResizeE);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowCapabilities;

    fn config(id: &str) -> WindowConfig {
        WindowConfig {
            position: Some(Vec2::new(100.0, 100.0)),
            size: Size::new(400.0, 300.0),
            ..WindowConfig::new(id, id)
        }
    }

    fn assert_focus_on_top(wm: &WindowManager) {
        if let Some(focused) = wm.focused_window() {
            for w in wm.all_windows() {
                assert!(focused.z_index >= w.z_index, "{} above focused {}", w.id, focused.id);
            }
        }
    }

    #[test]
    fn test_open_window() {
        let mut wm = WindowManager::default();
        let id = wm.open(config("finder"));

        assert_eq!(id, "finder");
        assert!(wm.get("finder").is_some());
        assert_eq!(wm.count(), 1);
        assert_eq!(wm.focused(), Some("finder"));
    }

    #[test]
    fn test_open_existing_id_focuses_instead_of_duplicating() {
        let mut wm = WindowManager::default();
        wm.open(config("finder"));
        wm.open(config("users"));
        assert_eq!(wm.focused(), Some("users"));

        wm.minimize("finder");
        let id = wm.open(config("finder"));

        assert_eq!(id, "finder");
        assert_eq!(wm.count(), 2);
        assert_eq!(wm.focused(), Some("finder"));
        assert!(!wm.get("finder").unwrap().minimized);
        assert_focus_on_top(&wm);
    }

    #[test]
    fn test_focus_raises_z() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        wm.open(config("b"));

        let a_before = wm.get("a").unwrap().z_index;
        wm.focus("a");
        let a = wm.get("a").unwrap().z_index;
        let b = wm.get("b").unwrap().z_index;

        assert!(a > a_before);
        assert!(a > b);
        assert_eq!(a, wm.top_z());
        assert_eq!(wm.focused(), Some("a"));
    }

    #[test]
    fn test_focus_unknown_is_noop() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        let z = wm.top_z();
        wm.focus("missing");
        assert_eq!(wm.top_z(), z);
        assert_eq!(wm.focused(), Some("a"));
    }

    #[test]
    fn test_close_transfers_focus_to_highest_z() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        wm.open(config("b"));
        wm.open(config("c"));
        wm.focus("a");
        // z order now: b < c < a

        wm.close("a");
        assert_eq!(wm.focused(), Some("c"));

        wm.close("c");
        assert_eq!(wm.focused(), Some("b"));

        wm.close("b");
        assert_eq!(wm.focused(), None);
        assert_eq!(wm.count(), 0);
    }

    #[test]
    fn test_close_unfocused_keeps_focus() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        wm.open(config("b"));
        wm.close("a");
        assert_eq!(wm.focused(), Some("b"));
    }

    #[test]
    fn test_close_respects_closable() {
        let mut wm = WindowManager::default();
        wm.open(WindowConfig {
            capabilities: WindowCapabilities {
                closable: false,
                ..Default::default()
            },
            ..config("pinned")
        });
        wm.close("pinned");
        assert!(wm.is_open("pinned"));
        wm.close("missing");
        assert_eq!(wm.count(), 1);
    }

    #[test]
    fn test_resize_clamps_to_min_and_max() {
        let mut wm = WindowManager::default();
        wm.open(WindowConfig {
            min_size: Some(Size::new(250.0, 150.0)),
            max_size: Some(Size::new(600.0, 500.0)),
            ..config("a")
        });

        wm.resize("a", Size::new(10.0, 10.0));
        let w = wm.get("a").unwrap();
        assert!((w.size.width - 250.0).abs() < 0.001);
        assert!((w.size.height - 150.0).abs() < 0.001);

        wm.resize("a", Size::new(5000.0, 5000.0));
        let w = wm.get("a").unwrap();
        assert!((w.size.width - 600.0).abs() < 0.001);
        assert!((w.size.height - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_open_clamps_initial_size() {
        let mut wm = WindowManager::default();
        wm.open(WindowConfig {
            size: Size::new(50.0, 50.0),
            ..config("tiny")
        });
        let w = wm.get("tiny").unwrap();
        assert!((w.size.width - DEFAULT_MIN_SIZE.width).abs() < 0.001);
        assert!((w.size.height - DEFAULT_MIN_SIZE.height).abs() < 0.001);
    }

    #[test]
    fn test_resize_respects_resizable() {
        let mut wm = WindowManager::default();
        wm.open(WindowConfig {
            capabilities: WindowCapabilities::DIALOG,
            ..config("about")
        });
        wm.resize("about", Size::new(900.0, 900.0));
        assert!((wm.get("about").unwrap().size.width - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_move_clamps_into_work_area() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        let bounds = wm.bounds();

        wm.move_window("a", Vec2::new(-10_000.0, -10_000.0));
        let w = wm.get("a").unwrap();
        assert!((w.position.y - bounds.y).abs() < 0.001);
        assert!(w.position.x + w.size.width >= bounds.x + FRAME_STYLE.min_visible_width - 0.001);

        wm.move_window("a", Vec2::new(10_000.0, 10_000.0));
        let w = wm.get("a").unwrap();
        assert!(w.position.x <= bounds.right() - FRAME_STYLE.min_visible_width + 0.001);
        assert!(w.position.y <= bounds.bottom() - FRAME_STYLE.title_bar_height + 0.001);
    }

    #[test]
    fn test_minimize_focused_moves_focus() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        wm.open(config("b"));

        wm.minimize("b");
        assert!(wm.get("b").unwrap().minimized);
        assert_eq!(wm.focused(), Some("a"));
        assert_focus_on_top(&wm);

        wm.minimize("a");
        assert_eq!(wm.focused(), None);

        wm.restore("b");
        assert!(!wm.get("b").unwrap().minimized);
        assert_eq!(wm.focused(), Some("b"));
        assert_focus_on_top(&wm);
    }

    #[test]
    fn test_maximize_and_restore() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        let bounds = wm.bounds();

        wm.toggle_maximize("a");
        let w = wm.get("a").unwrap();
        assert!(w.maximized);
        assert!((w.size.width - bounds.width).abs() < 0.001);
        assert!((w.position.y - bounds.y).abs() < 0.001);

        // Maximized windows ignore move and resize
        wm.move_window("a", Vec2::new(300.0, 300.0));
        wm.resize("a", Size::new(300.0, 300.0));
        assert!((wm.get("a").unwrap().size.width - bounds.width).abs() < 0.001);

        wm.toggle_maximize("a");
        let w = wm.get("a").unwrap();
        assert!(!w.maximized);
        assert!((w.size.width - 400.0).abs() < 0.001);
        assert!((w.position.x - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_maximize_respects_max_size() {
        let mut wm = WindowManager::default();
        wm.open(WindowConfig {
            max_size: Some(Size::new(500.0, 400.0)),
            ..config("a")
        });
        wm.toggle_maximize("a");
        let w = wm.get("a").unwrap();
        assert!((w.size.width - 500.0).abs() < 0.001);
        assert!((w.size.height - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_collapse_toggles() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        wm.toggle_collapse("a");
        assert!(wm.get("a").unwrap().collapsed);
        wm.toggle_collapse("a");
        assert!(!wm.get("a").unwrap().collapsed);
    }

    #[test]
    fn test_maximize_clears_collapse() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        wm.toggle_collapse("a");
        wm.toggle_maximize("a");
        assert!(!wm.get("a").unwrap().collapsed);
    }

    #[test]
    fn test_cascade_positions_differ() {
        let mut wm = WindowManager::default();
        wm.open(WindowConfig::new("a", "A"));
        wm.open(WindowConfig::new("b", "B"));
        let a = wm.get("a").unwrap().position;
        let b = wm.get("b").unwrap().position;
        assert!(b.x > a.x);
        assert!(b.y > a.y);
    }

    #[test]
    fn test_set_bounds_refits_maximized() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        wm.toggle_maximize("a");
        wm.set_bounds(Rect::new(0.0, 20.0, 1024.0, 748.0));
        let w = wm.get("a").unwrap();
        assert!((w.size.width - 1024.0).abs() < 0.001);
        assert!((w.size.height - 748.0).abs() < 0.001);
    }

    #[test]
    fn test_replace_all_dedupes_and_resumes_z() {
        let mut source = WindowManager::default();
        source.open(config("a"));
        source.open(config("b"));
        let mut windows: Vec<Window> = source.all_windows().cloned().collect();
        windows.push(windows[0].clone());

        let mut wm = WindowManager::default();
        wm.replace_all(windows);

        assert_eq!(wm.count(), 2);
        assert_eq!(wm.focused(), Some("b"));
        assert!(wm.top_z() > source.get("b").unwrap().z_index);
        assert_focus_on_top(&wm);
    }

    #[test]
    fn test_replace_all_with_exhausted_z_renumbers() {
        let mut source = WindowManager::default();
        source.open(config("a"));
        source.open(config("b"));
        source.open(config("c"));
        let mut windows: Vec<Window> = source.all_windows().cloned().collect();
        windows[0].z_index = u32::MAX;
        windows[2].z_index = u32::MAX - 1;

        let mut wm = WindowManager::default();
        wm.replace_all(windows);

        // Order b < c < a survives the renumbering
        assert_eq!(wm.focused(), Some("a"));
        assert_eq!(wm.get("b").unwrap().z_index, 1);
        assert_eq!(wm.get("c").unwrap().z_index, 2);
        assert_eq!(wm.get("a").unwrap().z_index, 4);
        assert_focus_on_top(&wm);

        wm.open(config("d"));
        wm.focus("b");
        assert_eq!(wm.focused(), Some("b"));
        assert_focus_on_top(&wm);
    }

    #[test]
    fn test_unmaximize_after_work_area_shrinks() {
        let mut wm = WindowManager::default();
        wm.open(WindowConfig {
            position: Some(Vec2::new(1000.0, 600.0)),
            ..config("a")
        });
        wm.toggle_maximize("a");
        wm.set_bounds(Rect::new(0.0, 20.0, 640.0, 460.0));
        wm.toggle_maximize("a");

        let w = wm.get("a").unwrap();
        let bounds = wm.bounds();
        assert!(!w.maximized);
        assert!((w.size.width - 400.0).abs() < 0.001);
        assert!(w.position.x <= bounds.right() - FRAME_STYLE.min_visible_width);
        assert!(w.position.y <= bounds.bottom() - FRAME_STYLE.title_bar_height);
        assert!(w.title_bar_rect().intersects(&bounds));
    }

    #[test]
    fn test_hit_testing() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));

        let (id, region) = wm.region_at(Vec2::new(250.0, 110.0), 1.0).unwrap();
        assert_eq!(id, "a");
        assert_eq!(region, WindowRegion::TitleBar);

        let (_, region) = wm.region_at(Vec2::new(300.0, 250.0), 1.0).unwrap();
        assert_eq!(region, WindowRegion::Content);

        let (_, region) = wm.region_at(Vec2::new(499.0, 399.0), 1.0).unwrap();
        assert_eq!(region, WindowRegion::ResizeSE);

        let close = wm.get("a").unwrap().close_button_rect().unwrap().center();
        let (_, region) = wm.region_at(close, 1.0).unwrap();
        assert_eq!(region, WindowRegion::CloseButton);

        assert!(wm.region_at(Vec2::new(50.0, 50.0), 1.0).is_none());
    }

    #[test]
    fn test_hit_testing_topmost_wins_and_skips_minimized() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        wm.open(config("b"));
        let p = Vec2::new(300.0, 250.0);

        assert_eq!(wm.window_at(p).unwrap().id, "b");
        wm.minimize("b");
        assert_eq!(wm.window_at(p).unwrap().id, "a");
    }

    #[test]
    fn test_collapsed_window_has_no_content_hit() {
        let mut wm = WindowManager::default();
        wm.open(config("a"));
        wm.toggle_collapse("a");
        assert!(wm.window_at(Vec2::new(300.0, 250.0)).is_none());
        let (_, region) = wm.region_at(Vec2::new(250.0, 110.0), 1.0).unwrap();
        assert_eq!(region, WindowRegion::TitleBar);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Open(u8),
        Close(u8),
        Focus(u8),
        Minimize(u8),
        Restore(u8),
        Maximize(u8),
        Collapse(u8),
        Resize(u8, f32, f32),
    }

    fn op() -> impl Strategy<Value = Op> {
        let id = 0u8..5;
        prop_oneof![
            id.clone().prop_map(Op::Open),
            id.clone().prop_map(Op::Close),
            id.clone().prop_map(Op::Focus),
            id.clone().prop_map(Op::Minimize),
            id.clone().prop_map(Op::Restore),
            id.clone().prop_map(Op::Maximize),
            id.clone().prop_map(Op::Collapse),
            (id, -100.0f32..2000.0, -100.0f32..2000.0).prop_map(|(i, w, h)| Op::Resize(i, w, h)),
        ]
    }

    proptest! {
        /// Focus stays on top, ids stay unique, sizes never drop below minimum
        #[test]
        fn window_invariants_hold(ops in proptest::collection::vec(op(), 1..60)) {
            let mut wm = WindowManager::default();
            for op in ops {
                match op {
                    Op::Open(i) => { wm.open(WindowConfig::new(format!("w{}", i), "W")); }
                    Op::Close(i) => wm.close(&format!("w{}", i)),
                    Op::Focus(i) => wm.focus(&format!("w{}", i)),
                    Op::Minimize(i) => wm.minimize(&format!("w{}", i)),
                    Op::Restore(i) => wm.restore(&format!("w{}", i)),
                    Op::Maximize(i) => wm.toggle_maximize(&format!("w{}", i)),
                    Op::Collapse(i) => wm.toggle_collapse(&format!("w{}", i)),
                    Op::Resize(i, w, h) => wm.resize(&format!("w{}", i), Size::new(w, h)),
                }

                let mut ids: Vec<&str> = wm.all_windows().map(|w| w.id.as_str()).collect();
                let count = ids.len();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), count);

                for w in wm.all_windows() {
                    prop_assert!(w.size.width >= w.min_size.width);
                    prop_assert!(w.size.height >= w.min_size.height);
                }

                if let Some(focused) = wm.focused_window() {
                    for w in wm.all_windows() {
                        prop_assert!(focused.z_index >= w.z_index);
                    }
                } else {
                    prop_assert!(wm.focused().is_none());
                }

                if wm.count() == 0 {
                    prop_assert!(wm.focused().is_none());
                }
            }
        }
    }
}
