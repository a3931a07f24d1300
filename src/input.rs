//! Input snapshot
//!
//! One plain struct, built fresh from macroquad's polled state at the top
//! of every frame and passed by reference into the editor. Components
//! never read input globals themselves, so event handling stays an
//! explicit, testable data flow.

use macroquad::prelude::*;

/// Per-frame pointer and keyboard state
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Pointer position in screen pixels
    pub pointer: (f32, f32),
    pub left_down: bool,
    pub right_down: bool,
    pub ctrl: bool,
    /// Ctrl+Z, edge-triggered
    pub undo_pressed: bool,
    /// G, edge-triggered
    pub grid_toggle_pressed: bool,
    /// F, edge-triggered (dark mode)
    pub dark_toggle_pressed: bool,
    /// Ctrl+N
    pub new_pressed: bool,
    /// Ctrl+O
    pub open_pressed: bool,
    /// Ctrl+S
    pub save_pressed: bool,
    /// Ctrl+E (array-format dev export)
    pub export_dev_pressed: bool,
    /// Ctrl+P (PNG snapshot)
    pub snapshot_pressed: bool,
}

impl InputState {
    /// Snapshot the current frame's input
    pub fn poll() -> Self {
        let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
        Self {
            pointer: mouse_position(),
            left_down: is_mouse_button_down(MouseButton::Left),
            right_down: is_mouse_button_down(MouseButton::Right),
            ctrl,
            undo_pressed: ctrl && is_key_pressed(KeyCode::Z),
            grid_toggle_pressed: !ctrl && is_key_pressed(KeyCode::G),
            dark_toggle_pressed: !ctrl && is_key_pressed(KeyCode::F),
            new_pressed: ctrl && is_key_pressed(KeyCode::N),
            open_pressed: ctrl && is_key_pressed(KeyCode::O),
            save_pressed: ctrl && is_key_pressed(KeyCode::S),
            export_dev_pressed: ctrl && is_key_pressed(KeyCode::E),
            snapshot_pressed: ctrl && is_key_pressed(KeyCode::P),
        }
    }
}
