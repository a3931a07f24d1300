//! Dirty-tracked board renderer
//!
//! The board is drawn into a fixed 1920x1080 render target, but only when
//! something actually changed since the last frame. Mutations, overlay
//! toggles and dark-mode changes set the dirty flag; a frame tick redraws
//! and clears it; a tick on a clean renderer does no drawing at all. That
//! decouples redraw cost from mutation frequency: a paint drag touching
//! forty tiles between two frames costs one redraw.

use crate::assets::BlockArt;
use crate::board::{Board, HEIGHT, WIDTH};
use crate::ui::Rect;
use macroquad::prelude::*;

/// Logical buffer width in pixels
pub const BUFFER_WIDTH: u32 = 1920;
/// Logical buffer height in pixels
pub const BUFFER_HEIGHT: u32 = 1080;

pub struct BoardRenderer {
    dirty: bool,
    grid_enabled: bool,
    dark: bool,
    target: Option<RenderTarget>,
}

impl BoardRenderer {
    /// New renderer, dirty so the first tick draws the initial board
    pub fn new() -> Self {
        Self {
            dirty: true,
            grid_enabled: true,
            dark: false,
            target: None,
        }
    }

    /// Flag that the board changed and the next tick must redraw
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn grid_enabled(&self) -> bool {
        self.grid_enabled
    }

    /// Toggle the grid-line overlay. Purely visual, never serialized.
    pub fn set_grid(&mut self, enabled: bool) {
        if self.grid_enabled != enabled {
            self.grid_enabled = enabled;
            self.dirty = true;
        }
    }

    /// Toggle the dark-mode shade drawn over the tile layer
    pub fn set_dark(&mut self, dark: bool) {
        if self.dark != dark {
            self.dark = dark;
            self.dirty = true;
        }
    }

    /// Consume the dirty flag. True means the caller owes a redraw.
    fn take_redraw(&mut self) -> bool {
        let redraw = self.dirty;
        self.dirty = false;
        redraw
    }

    /// Frame tick: redraw the buffer if anything changed. Returns whether a
    /// redraw happened.
    pub fn draw_frame(&mut self, board: &Board, art: &BlockArt) -> bool {
        if !self.take_redraw() {
            return false;
        }

        let target = self
            .target
            .get_or_insert_with(|| {
                let t = render_target(BUFFER_WIDTH, BUFFER_HEIGHT);
                t.texture.set_filter(FilterMode::Nearest);
                t
            })
            .clone();

        let camera = Camera2D {
            zoom: vec2(2.0 / BUFFER_WIDTH as f32, 2.0 / BUFFER_HEIGHT as f32),
            target: vec2(BUFFER_WIDTH as f32 * 0.5, BUFFER_HEIGHT as f32 * 0.5),
            render_target: Some(target),
            ..Default::default()
        };
        set_camera(&camera);

        self.draw_background(art);
        self.draw_tiles(board, art);
        if self.dark {
            draw_rectangle(
                0.0,
                0.0,
                BUFFER_WIDTH as f32,
                BUFFER_HEIGHT as f32,
                Color::new(0.0, 0.0, 0.0, 0.55),
            );
        }
        if self.grid_enabled {
            self.draw_grid_overlay();
        }

        set_default_camera();
        true
    }

    fn draw_background(&self, art: &BlockArt) {
        clear_background(Color::from_rgba(20, 20, 25, 255));
        if let Some(bg) = art.background() {
            draw_texture_ex(
                bg,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(BUFFER_WIDTH as f32, BUFFER_HEIGHT as f32)),
                    ..Default::default()
                },
            );
        }
    }

    fn draw_tiles(&self, board: &Board, art: &BlockArt) {
        let tile_w = BUFFER_WIDTH as f32 / WIDTH as f32;
        let tile_h = BUFFER_HEIGHT as f32 / HEIGHT as f32;

        for (i, block) in board.tiles().iter().enumerate() {
            if block.is_empty() {
                continue;
            }
            let (col, row) = Board::position(i);
            draw_texture_ex(
                art.get(block.asset_name()),
                col as f32 * tile_w,
                row as f32 * tile_h,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(tile_w, tile_h)),
                    ..Default::default()
                },
            );
        }
    }

    /// One outlined rectangle per tile, covering the whole buffer
    fn draw_grid_overlay(&self) {
        let tile_w = BUFFER_WIDTH as f32 / WIDTH as f32;
        let tile_h = BUFFER_HEIGHT as f32 / HEIGHT as f32;
        let color = Color::new(1.0, 1.0, 1.0, 0.25);

        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                draw_rectangle_lines(
                    col as f32 * tile_w,
                    row as f32 * tile_h,
                    tile_w,
                    tile_h,
                    2.0,
                    color,
                );
            }
        }
    }

    /// Blit the buffer to an on-screen rectangle
    pub fn blit(&self, dest: Rect) {
        if let Some(target) = &self.target {
            draw_texture_ex(
                &target.texture,
                dest.x,
                dest.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(dest.w, dest.h)),
                    ..Default::default()
                },
            );
        }
    }

    /// Copy the current buffer out as an RGBA image (PNG snapshot export).
    /// None until the first frame has been drawn.
    pub fn snapshot(&self) -> Option<image::RgbaImage> {
        let target = self.target.as_ref()?;
        let img = target.texture.get_texture_data();
        image::RgbaImage::from_raw(u32::from(img.width), u32::from(img.height), img.bytes)
    }
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self::new()
    }
}
