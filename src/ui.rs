//! UI helpers
//!
//! Small immediate-mode chrome around the board view: layout rectangles,
//! palette buttons, status bar. All drawing is plain macroquad calls.

use macroquad::prelude::*;

/// A rectangle defined by position and size, in screen pixels
#[derive(Debug, Clone, Copy, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Largest rect of the given aspect ratio centered inside this one
    pub fn aspect_fit(&self, aspect: f32) -> Self {
        let (w, h) = if self.w / self.h > aspect {
            (self.h * aspect, self.h)
        } else {
            (self.w, self.w / aspect)
        };
        Self::new(
            self.x + (self.w - w) * 0.5,
            self.y + (self.h - h) * 0.5,
            w,
            h,
        )
    }
}

/// One palette cell. Returns true when clicked this frame.
pub fn block_button(rect: Rect, texture: &Texture2D, selected: bool) -> bool {
    let (mx, my) = mouse_position();
    let hovered = rect.contains(mx, my);

    draw_texture_ex(
        texture,
        rect.x,
        rect.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(rect.w, rect.h)),
            ..Default::default()
        },
    );

    if selected {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 3.0, GOLD);
    } else if hovered {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, LIGHTGRAY);
    }

    hovered && is_mouse_button_pressed(MouseButton::Left)
}

/// Bottom status line: current message on the left, mode flags on the right
pub fn draw_status_bar(rect: Rect, message: &str, dark: bool, grid: bool) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::from_rgba(25, 25, 30, 255));
    draw_text(message, rect.x + 8.0, rect.bottom() - 8.0, 20.0, LIGHTGRAY);

    let flags = format!(
        "dark {}  grid {}",
        if dark { "on" } else { "off" },
        if grid { "on" } else { "off" }
    );
    let width = measure_text(&flags, None, 20, 1.0).width;
    draw_text(
        &flags,
        rect.right() - width - 8.0,
        rect.bottom() - 8.0,
        20.0,
        GRAY,
    );
}
