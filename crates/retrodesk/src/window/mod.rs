//! Window management module
//!
//! Provides the window record, focus and z-order bookkeeping, and hit testing.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod region;
mod manager;

pub use window::{Window, WindowCapabilities};
pub use config::{WindowConfig, DEFAULT_MIN_SIZE};
pub use region::WindowRegion;
pub use manager::WindowManager;

/// Window identifier, stable per logical window (usually the app id)
pub type WindowId = String;
