//! Menu bar state

use serde::Serialize;
use crate::apps::AppId;

/// Command behind a menu item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "app", rename_all = "snake_case")]
pub enum MenuAction {
    OpenApp(AppId),
    CloseWindow,
    MinimizeWindow,
    CollapseWindow,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ArrangeIcons,
    EmptyTrash,
    ClearNotifications,
}

impl MenuAction {
    /// Actions that need a focused window
    pub fn needs_window(self) -> bool {
        matches!(
            self,
            MenuAction::CloseWindow | MenuAction::MinimizeWindow | MenuAction::CollapseWindow
        )
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct MenuItem {
    pub label: String,
    /// Shortcut hint shown right-aligned
    pub shortcut: Option<String>,
    /// `None` renders a separator
    pub action: Option<MenuAction>,
    pub enabled: bool,
}

impl MenuItem {
    fn new(label: &str, action: MenuAction) -> Self {
        Self {
            label: label.to_string(),
            shortcut: None,
            action: Some(action),
            enabled: true,
        }
    }

    fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }

    fn separator() -> Self {
        Self {
            label: String::new(),
            shortcut: None,
            action: None,
            enabled: false,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Menu {
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// Menu bar with at most one open menu
#[derive(Clone, Debug, Serialize)]
pub struct MenuBar {
    menus: Vec<Menu>,
    open: Option<usize>,
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::standard()
    }
}

impl MenuBar {
    pub fn new(menus: Vec<Menu>) -> Self {
        Self { menus, open: None }
    }

    /// The desktop's stock menus
    pub fn standard() -> Self {
        let menu = |title: &str, items: Vec<MenuItem>| Menu {
            title: title.to_string(),
            items,
        };
        Self::new(vec![
            menu(
                "\u{25c6}",
                vec![
                    MenuItem::new("About This Desktop", MenuAction::OpenApp(AppId::About)),
                    MenuItem::separator(),
                    MenuItem::new("Control Panels", MenuAction::OpenApp(AppId::ControlPanel)),
                    MenuItem::new("Activity Monitor", MenuAction::OpenApp(AppId::ActivityMonitor)),
                ],
            ),
            menu(
                "File",
                vec![
                    MenuItem::new("Open Files", MenuAction::OpenApp(AppId::FileBrowser)),
                    MenuItem::new("Close Window", MenuAction::CloseWindow).with_shortcut("\u{2318}W"),
                ],
            ),
            menu(
                "View",
                vec![
                    MenuItem::new("Zoom In", MenuAction::ZoomIn).with_shortcut("\u{2318}+"),
                    MenuItem::new("Zoom Out", MenuAction::ZoomOut).with_shortcut("\u{2318}-"),
                    MenuItem::new("Actual Size", MenuAction::ZoomReset).with_shortcut("\u{2318}0"),
                    MenuItem::separator(),
                    MenuItem::new("Clean Up Desktop", MenuAction::ArrangeIcons),
                ],
            ),
            menu(
                "Window",
                vec![
                    MenuItem::new("Minimize", MenuAction::MinimizeWindow).with_shortcut("\u{2318}M"),
                    MenuItem::new("Collapse", MenuAction::CollapseWindow),
                ],
            ),
            menu(
                "Special",
                vec![
                    MenuItem::new("Users & Groups", MenuAction::OpenApp(AppId::UserManager)),
                    MenuItem::new("Notifications", MenuAction::OpenApp(AppId::Notifications)),
                    MenuItem::separator(),
                    MenuItem::new("Clear Notifications", MenuAction::ClearNotifications),
                    MenuItem::new("Empty Trash", MenuAction::EmptyTrash),
                ],
            ),
        ])
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    #[inline]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open(&mut self, index: usize) {
        if index < self.menus.len() {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Click on a menu title
    pub fn toggle(&mut self, index: usize) {
        if self.open == Some(index) {
            self.close();
        } else {
            self.open(index);
        }
    }

    /// Pointer over a menu title; only switches while a menu is already open
    pub fn hover(&mut self, index: usize) {
        if self.is_open() {
            self.open(index);
        }
    }

    /// Pick an item; closes the menu and returns the action if enabled
    pub fn select(&mut self, menu: usize, item: usize) -> Option<MenuAction> {
        let item = self.menus.get(menu)?.items.get(item)?;
        if !item.enabled {
            return None;
        }
        let action = item.action;
        self.close();
        action
    }

    /// Enable or disable every item bound to actions matching `pred`
    pub fn set_enabled_where(&mut self, pred: impl Fn(MenuAction) -> bool, enabled: bool) {
        for item in self.menus.iter_mut().flat_map(|m| m.items.iter_mut()) {
            if item.action.is_some_and(&pred) {
                item.enabled = enabled;
            }
        }
    }

    /// Find an item by action
    pub fn find(&self, action: MenuAction) -> Option<&MenuItem> {
        self.menus
            .iter()
            .flat_map(|m| m.items.iter())
            .find(|i| i.action == Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_hover() {
        let mut bar = MenuBar::standard();
        bar.hover(1);
        assert!(!bar.is_open());

        bar.toggle(1);
        assert_eq!(bar.open_index(), Some(1));
        bar.hover(2);
        assert_eq!(bar.open_index(), Some(2));
        bar.toggle(2);
        assert!(!bar.is_open());

        bar.open(99);
        assert!(!bar.is_open());
    }

    #[test]
    fn test_select_returns_action_and_closes() {
        let mut bar = MenuBar::standard();
        bar.open(1);
        assert_eq!(bar.select(1, 0), Some(MenuAction::OpenApp(AppId::FileBrowser)));
        assert!(!bar.is_open());
        assert_eq!(bar.select(1, 42), None);
    }

    #[test]
    fn test_separator_and_disabled_items_do_nothing() {
        let mut bar = MenuBar::standard();
        bar.open(0);
        assert_eq!(bar.select(0, 1), None);
        assert!(bar.is_open());

        bar.set_enabled_where(MenuAction::needs_window, false);
        assert!(!bar.find(MenuAction::CloseWindow).unwrap().enabled);
        assert!(bar.find(MenuAction::ZoomIn).unwrap().enabled);
        assert_eq!(bar.select(1, 1), None);
    }
}
