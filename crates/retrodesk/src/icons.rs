//! Desktop icons: placement, selection, and grid arrangement

use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::apps::AppId;
use crate::math::{Rect, Size, Vec2};

/// An icon on the desktop surface that launches an app
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub id: String,
    pub label: String,
    pub icon: String,
    /// Top-left of the icon's grid cell
    pub position: Vec2,
    pub app: AppId,
}

/// Icons laid out over the work area
#[derive(Clone, Debug)]
pub struct DesktopIcons {
    icons: Vec<DesktopIcon>,
    selected: Vec<String>,
    bounds: Rect,
    cell: Size,
}

impl DesktopIcons {
    pub fn new(bounds: Rect, cell: Size) -> Self {
        Self {
            icons: Vec::new(),
            selected: Vec::new(),
            bounds,
            cell,
        }
    }

    /// One icon per launchable app, arranged in the default grid
    pub fn standard(bounds: Rect, cell: Size) -> Self {
        let mut icons = Self::new(bounds, cell);
        for app in AppId::ALL.into_iter().filter(|app| *app != AppId::About) {
            icons.icons.push(DesktopIcon {
                id: app.as_str().to_string(),
                label: app.title().to_string(),
                icon: app.icon().to_string(),
                position: Vec2::ZERO,
                app,
            });
        }
        icons.arrange();
        icons
    }

    /// Replace all icons with persisted ones; duplicate ids are dropped and
    /// positions are clamped to the current bounds
    pub fn replace_all(&mut self, icons: Vec<DesktopIcon>) {
        self.icons.clear();
        self.selected.clear();
        for mut icon in icons {
            if self.get(&icon.id).is_some() {
                continue;
            }
            icon.position = self.clamp(icon.position);
            self.icons.push(icon);
        }
    }

    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    pub fn get(&self, id: &str) -> Option<&DesktopIcon> {
        self.icons.iter().find(|i| i.id == id)
    }

    #[inline]
    pub fn cell(&self) -> Size {
        self.cell
    }

    /// Screen rect occupied by an icon
    pub fn rect(&self, icon: &DesktopIcon) -> Rect {
        Rect::from_pos_size(icon.position, self.cell)
    }

    /// Topmost icon under a desktop point (later icons draw on top)
    pub fn icon_at(&self, pos: Vec2) -> Option<&DesktopIcon> {
        self.icons.iter().rev().find(|i| self.rect(i).contains(pos))
    }

    /// Select an icon; `additive` toggles it within the current selection
    pub fn select(&mut self, id: &str, additive: bool) {
        if self.get(id).is_none() {
            return;
        }
        if additive {
            match self.selected.iter().position(|s| s == id) {
                Some(idx) => {
                    self.selected.remove(idx);
                }
                None => self.selected.push(id.to_string()),
            }
        } else {
            self.selected.clear();
            self.selected.push(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Move an icon, clamped to the work area and optionally snapped to the grid
    pub fn move_icon(&mut self, id: &str, position: Vec2, snap: bool) {
        let mut target = self.clamp(position);
        if snap {
            target = self.clamp(self.snap(target));
        }
        if let Some(icon) = self.icons.iter_mut().find(|i| i.id == id) {
            icon.position = target;
        }
    }

    /// Lay icons out top-to-bottom, then left-to-right
    pub fn arrange(&mut self) {
        let rows = ((self.bounds.height / self.cell.height).floor() as usize).max(1);
        for (idx, icon) in self.icons.iter_mut().enumerate() {
            let col = (idx / rows) as f32;
            let row = (idx % rows) as f32;
            icon.position = Vec2::new(
                self.bounds.x + col * self.cell.width,
                self.bounds.y + row * self.cell.height,
            );
        }
        debug!(count = self.icons.len(), "icons arranged");
    }

    /// App launched by activating (double-clicking) an icon
    pub fn activate(&self, id: &str) -> Option<AppId> {
        self.get(id).map(|i| i.app)
    }

    /// Update the work area, pulling icons back inside it
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        for idx in 0..self.icons.len() {
            self.icons[idx].position = self.clamp(self.icons[idx].position);
        }
    }

    /// Snap to the grid anchored at the work area origin
    fn snap(&self, pos: Vec2) -> Vec2 {
        let origin = self.bounds.position();
        (pos - origin).snap(self.cell.width, self.cell.height) + origin
    }

    fn clamp(&self, pos: Vec2) -> Vec2 {
        let max = Vec2::new(
            self.bounds.right() - self.cell.width,
            self.bounds.bottom() - self.cell.height,
        );
        pos.clamp(self.bounds.position(), max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons() -> DesktopIcons {
        DesktopIcons::standard(Rect::new(0.0, 20.0, 400.0, 200.0), Size::new(80.0, 84.0))
    }

    #[test]
    fn test_standard_layout_is_column_major() {
        let icons = icons();
        assert_eq!(icons.icons().len(), 5);
        // 200 / 84 -> two rows per column
        let pos: Vec<Vec2> = icons.icons().iter().map(|i| i.position).collect();
        assert_eq!(pos[0], Vec2::new(0.0, 20.0));
        assert_eq!(pos[1], Vec2::new(0.0, 104.0));
        assert_eq!(pos[2], Vec2::new(80.0, 20.0));
        assert_eq!(pos[4], Vec2::new(160.0, 20.0));
    }

    #[test]
    fn test_selection() {
        let mut icons = icons();
        icons.select("file-browser", false);
        icons.select("user-manager", true);
        assert_eq!(icons.selected().len(), 2);

        icons.select("file-browser", true);
        assert!(!icons.is_selected("file-browser"));
        assert!(icons.is_selected("user-manager"));

        icons.select("control-panel", false);
        assert_eq!(icons.selected(), ["control-panel".to_string()]);

        icons.select("nope", false);
        assert_eq!(icons.selected().len(), 1);

        icons.clear_selection();
        assert!(icons.selected().is_empty());
    }

    #[test]
    fn test_move_clamps_and_snaps() {
        let mut icons = icons();
        icons.move_icon("file-browser", Vec2::new(-50.0, 1000.0), false);
        let pos = icons.get("file-browser").unwrap().position;
        assert!((pos.x - 0.0).abs() < 0.001);
        assert!((pos.y - 136.0).abs() < 0.001);

        icons.move_icon("file-browser", Vec2::new(130.0, 50.0), true);
        let pos = icons.get("file-browser").unwrap().position;
        assert!((pos.x - 160.0).abs() < 0.001);
        assert!((pos.y - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_icon_at_and_activate() {
        let icons = icons();
        let hit = icons.icon_at(Vec2::new(90.0, 30.0)).unwrap();
        assert_eq!(hit.app, AppId::ControlPanel);
        assert_eq!(icons.activate(&hit.id), Some(AppId::ControlPanel));
        assert!(icons.icon_at(Vec2::new(390.0, 210.0)).is_none());
        assert_eq!(icons.activate("nope"), None);
    }

    #[test]
    fn test_replace_all_drops_duplicates() {
        let mut icons = icons();
        let mut saved = icons.icons().to_vec();
        saved.push(saved[0].clone());
        saved[1].position = Vec2::new(5000.0, 5000.0);
        icons.replace_all(saved);
        assert_eq!(icons.icons().len(), 5);
        let pos = icons.icons()[1].position;
        assert!((pos.x - 320.0).abs() < 0.001);
    }
}
