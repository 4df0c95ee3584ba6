//! 2D size type for window dimensions

use serde::{Deserialize, Serialize};

/// Width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Clamp to a minimum and an optional maximum.
    ///
    /// The minimum wins when `max` is smaller than `min` on an axis.
    pub fn constrain(self, min: Size, max: Option<Size>) -> Self {
        let mut width = self.width;
        let mut height = self.height;

        if let Some(max) = max {
            width = width.min(max.width);
            height = height.min(max.height);
        }

        Self::new(width.max(min.width), height.max(min.height))
    }
}
