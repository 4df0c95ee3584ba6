//! Retro desktop shell state
//!
//! This crate provides the state layer behind a classic-OS styled admin desktop:
//! - Window management (open, close, focus, z-order, minimize/maximize/collapse)
//! - Drag and resize interaction with live previews
//! - Menu bar, desktop icons and keyboard shortcuts
//! - App state containers: file tree, users, settings, notifications, tasks
//! - A key/value mirror for browser storage
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`window`]: Window lifecycle, focus and hit testing
//! - [`input`]: Drag state machine and resize math
//! - [`files`], [`users`], [`notifications`], [`settings`], [`monitor`]: app state
//! - [`persistence`]: Snapshot and storage mirror
//!
//! ## Example
//!
//! ```rust
//! use retrodesk::{AppId, DesktopEngine, Size, Vec2, WindowConfig};
//!
//! let mut engine = DesktopEngine::default();
//! engine.launch_app(AppId::FileBrowser);
//!
//! let id = engine.create_window(WindowConfig {
//!     position: Some(Vec2::new(100.0, 100.0)),
//!     size: Size::new(400.0, 300.0),
//!     ..WindowConfig::new("notes", "Notes")
//! });
//! assert_eq!(engine.windows.focused(), Some(id.as_str()));
//! ```
//!
//! Everything is synchronous and single-threaded; the host calls in from UI
//! event handlers. Logging goes through `tracing` and the host picks the
//! subscriber.

pub mod apps;
pub mod config;
pub mod error;
pub mod files;
pub mod icons;
pub mod input;
pub mod math;
pub mod menu;
pub mod monitor;
pub mod notifications;
pub mod persistence;
pub mod settings;
pub mod shortcuts;
pub mod users;
pub mod window;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use apps::AppId;
pub use config::DesktopConfig;
pub use engine::DesktopEngine;
pub use error::{ConfigError, DeskError, DeskResult, FsError, PersistenceError, UserError};
pub use input::{DragState, InputResult, InputRouter};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use menu::{MenuAction, MenuBar};
pub use persistence::{MemoryStorage, Snapshot, Storage};
pub use shortcuts::KeyEvent;
pub use window::{Window, WindowCapabilities, WindowConfig, WindowId, WindowManager, WindowRegion};
