//! Keyboard shortcuts

use serde::{Deserialize, Serialize};
use crate::menu::MenuAction;

/// Key press as reported by the host (`KeyboardEvent.key` plus modifiers)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Same key with Ctrl held
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Same key with Cmd/Meta held
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ctrl on most platforms, Cmd on macOS
    #[inline]
    pub fn command_key(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What a shortcut asks the desktop to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Action(MenuAction),
    CloseMenu,
}

/// Map a key event to a desktop command
pub fn resolve(event: &KeyEvent) -> Option<Command> {
    if event.key == "Escape" {
        return Some(Command::CloseMenu);
    }
    if !event.command_key() || event.alt {
        return None;
    }

    let action = match event.key.as_str() {
        "0" => MenuAction::ZoomReset,
        "=" | "+" => MenuAction::ZoomIn,
        "-" | "_" => MenuAction::ZoomOut,
        "w" | "W" => MenuAction::CloseWindow,
        "m" | "M" => MenuAction::MinimizeWindow,
        _ => return None,
    };
    Some(Command::Action(action))
}
