//! Geometry primitives in desktop coordinates
//!
//! Desktop coordinates are CSS pixels at zoom 1.0, origin top-left, y down.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;

/// Window chrome metrics shared by hit testing and layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    /// Height of the title bar strip
    pub title_bar_height: f32,
    /// Square size of a title bar button
    pub button_size: f32,
    /// Gap between title bar buttons and the frame edge
    pub button_margin: f32,
    /// Thickness of the edge resize handles
    pub resize_handle_size: f32,
    /// Horizontal span of a window that must stay on screen while moving
    pub min_visible_width: f32,
}

/// Classic chrome: narrow striped title bar, 13px boxes
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 22.0,
    button_size: 13.0,
    button_margin: 6.0,
    resize_handle_size: 5.0,
    min_visible_width: 64.0,
};
