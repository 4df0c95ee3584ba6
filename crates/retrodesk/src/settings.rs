//! Control panel settings
//!
//! Setters clamp out-of-range input instead of failing.

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Platinum,
    Midnight,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub wallpaper: String,
    /// Desktop zoom factor (screen px per desktop px)
    pub zoom: f32,
    pub sound_enabled: bool,
    /// 0-100
    pub volume: u8,
    pub clock_24h: bool,
    /// Max gap between clicks of a double-click
    pub double_click_ms: u32,
    /// Snap dragged icons to the grid
    pub snap_icons: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Classic,
            wallpaper: "tiles".to_string(),
            zoom: 1.0,
            sound_enabled: true,
            volume: 60,
            clock_24h: false,
            double_click_ms: 400,
            snap_icons: true,
        }
    }
}

impl Settings {
    /// Set zoom, clamped and rounded to the zoom step
    pub fn set_zoom(&mut self, zoom: f32) {
        if !zoom.is_finite() {
            return;
        }
        let stepped = (zoom / ZOOM_STEP).round() * ZOOM_STEP;
        self.zoom = stepped.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Set volume from arbitrary slider input
    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, 100) as u8;
    }

    pub fn set_double_click_ms(&mut self, ms: u32) {
        self.double_click_ms = ms.clamp(200, 900);
    }

    /// Re-apply clamps to values that came from storage
    pub fn sanitized(mut self) -> Self {
        let zoom = self.zoom;
        self.zoom = 1.0;
        self.set_zoom(zoom);
        self.volume = self.volume.min(100);
        self.set_double_click_ms(self.double_click_ms);
        self
    }
}
