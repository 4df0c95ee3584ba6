//! Window configuration for opening a window

use crate::math::{Size, Vec2};
use super::{WindowCapabilities, WindowId};

/// Smallest size any window may shrink to unless its config says otherwise
pub const DEFAULT_MIN_SIZE: Size = Size::new(200.0, 120.0);

/// Configuration for opening a window
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Stable identifier; opening an id that is already open focuses it instead
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Icon name shown in the title bar and the activity monitor
    pub icon: String,
    /// Initial position (None = cascade inside the work area)
    pub position: Option<Vec2>,
    /// Initial size, clamped to min/max
    pub size: Size,
    /// Minimum size constraint (None = DEFAULT_MIN_SIZE)
    pub min_size: Option<Size>,
    /// Maximum size constraint
    pub max_size: Option<Size>,
    pub capabilities: WindowCapabilities,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            icon: "window".to_string(),
            position: None,
            size: Size::new(480.0, 320.0),
            min_size: None,
            max_size: None,
            capabilities: WindowCapabilities::default(),
        }
    }
}

impl WindowConfig {
    /// Config with an id and title, everything else default
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}
