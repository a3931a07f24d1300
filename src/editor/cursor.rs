//! Pointer-to-tile mapping
//!
//! The board is rendered into a fixed 1920x1080 logical buffer which is
//! blitted to an on-screen rectangle of arbitrary size. Paint and erase
//! gestures must land on the same tile for the same pointer position, so
//! the mapping uses exact floor arithmetic and nothing else.

use crate::board::{HEIGHT, WIDTH};
use crate::render::{BUFFER_HEIGHT, BUFFER_WIDTH};
use crate::ui::Rect;

/// Pointer position outside the board area. Not a user-facing error;
/// callers treat it as "no tile".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds;

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pointer outside the board")
    }
}

/// Map a pointer position (device pixels) to a tile index, given the
/// on-screen rectangle the logical buffer is blitted into.
pub fn tile_at(pointer_x: f32, pointer_y: f32, board_rect: Rect) -> Result<usize, OutOfBounds> {
    let scale_x = BUFFER_WIDTH as f32 / board_rect.w;
    let scale_y = BUFFER_HEIGHT as f32 / board_rect.h;
    let local_x = (pointer_x - board_rect.x) * scale_x;
    let local_y = (pointer_y - board_rect.y) * scale_y;

    let tile_w = BUFFER_WIDTH as f32 / WIDTH as f32;
    let tile_h = BUFFER_HEIGHT as f32 / HEIGHT as f32;
    let column = (local_x / tile_w).floor();
    let row = (local_y / tile_h).floor();

    if column < 0.0 || row < 0.0 || column >= WIDTH as f32 || row >= HEIGHT as f32 {
        return Err(OutOfBounds);
    }

    Ok(column as usize + row as usize * WIDTH)
}
