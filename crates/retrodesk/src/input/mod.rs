//! Input routing module
//!
//! Pointer interactions keep a temporary drag state that is updated on every
//! pointer-move and only committed to the window manager on pointer-up.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;

use crate::math::{Size, Vec2};
use crate::window::WindowRegion;

/// Which frame edges a resize handle drags: (north, south, east, west)
fn handle_edges(handle: WindowRegion) -> (bool, bool, bool, bool) {
    match handle {
        WindowRegion::ResizeN => (true, false, false, false),
        WindowRegion::ResizeS => (false, true, false, false),
        WindowRegion::ResizeE => (false, false, true, false),
        WindowRegion::ResizeW => (false, false, false, true),
        WindowRegion::ResizeNE => (true, false, true, false),
        WindowRegion::ResizeNW => (true, false, false, true),
        WindowRegion::ResizeSE => (false, true, true, false),
        WindowRegion::ResizeSW => (false, true, false, true),
        _ => (false, false, false, false),
    }
}

/// Calculate new position and size after a resize drag of `delta`.
///
/// Sizes are clamped to `min`/`max`. When a north or west edge hits a limit the
/// opposite edge stays where it was.
pub fn calculate_resize(
    handle: WindowRegion,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    min: Size,
    max: Option<Size>,
) -> (Vec2, Size) {
    let max_width = max.map_or(f32::INFINITY, |m| m.width.max(min.width));
    let max_height = max.map_or(f32::INFINITY, |m| m.height.max(min.height));
    let (north, south, east, west) = handle_edges(handle);

    let mut new_pos = start_pos;
    let mut new_size = start_size;

    if east {
        new_size.width = (start_size.width + delta.x).clamp(min.width, max_width);
    }
    if west {
        new_size.width = (start_size.width - delta.x).clamp(min.width, max_width);
        new_pos.x = start_pos.x + start_size.width - new_size.width;
    }
    if south {
        new_size.height = (start_size.height + delta.y).clamp(min.height, max_height);
    }
    if north {
        new_size.height = (start_size.height - delta.y).clamp(min.height, max_height);
        new_pos.y = start_pos.y + start_size.height - new_size.height;
    }

    (new_pos, new_size)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn handle() -> impl Strategy<Value = WindowRegion> {
        prop_oneof![
            Just(WindowRegion::ResizeN),
            Just(WindowRegion::ResizeS),
            Just(WindowRegion::ResizeE),
            Just(WindowRegion::ResizeW),
            Just(WindowRegion::ResizeNE),
            Just(WindowRegion::ResizeNW),
            Just(WindowRegion::ResizeSE),
            Just(WindowRegion::ResizeSW),
        ]
    }

    proptest! {
        /// Resizing never produces a size below the minimum
        #[test]
        fn resize_never_below_min(
            handle in handle(),
            dx in -3000.0f32..3000.0,
            dy in -3000.0f32..3000.0,
        ) {
            let min = Size::new(200.0, 120.0);
            let (_, size) = calculate_resize(
                handle,
                Vec2::new(100.0, 100.0),
                Size::new(400.0, 300.0),
                Vec2::new(dx, dy),
                min,
                None,
            );
            prop_assert!(size.width >= min.width);
            prop_assert!(size.height >= min.height);
        }

        /// The edge opposite the dragged handle does not move
        #[test]
        fn resize_keeps_opposite_edge(
            handle in handle(),
            dx in -3000.0f32..3000.0,
            dy in -3000.0f32..3000.0,
        ) {
            let start_pos = Vec2::new(100.0, 100.0);
            let start_size = Size::new(400.0, 300.0);
            let (pos, size) = calculate_resize(
                handle, start_pos, start_size, Vec2::new(dx, dy), Size::new(200.0, 120.0), None,
            );
            let (north, south, east, west) = handle_edges(handle);
            if west {
                prop_assert!((pos.x + size.width - 500.0).abs() < 0.01);
            }
            if east || !west {
                prop_assert!((pos.x - 100.0).abs() < 0.01);
            }
            if north {
                prop_assert!((pos.y + size.height - 400.0).abs() < 0.01);
            }
            if south || !north {
                prop_assert!((pos.y - 100.0).abs() < 0.01);
            }
        }
    }
}
