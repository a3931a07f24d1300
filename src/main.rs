//! Blockforge: a tile-grid level editor
//!
//! A 32x18 board of placeable blocks, rendered into a fixed 1920x1080
//! buffer and redrawn only when something changed. Levels serialize to a
//! line-per-tile text format and a legacy array-literal export; imports
//! sniff the format. Left-drag paints the active block, right-drag
//! erases, Ctrl+Z undoes one edit at a time.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod board;
mod codec;
mod config;
mod editor;
mod input;
mod render;
mod ui;

use app::AppState;
use assets::BlockArt;
use board::Block;
use config::EditorConfig;
use input::InputState;
use macroquad::prelude::*;
use ui::Rect;

/// Width of the palette strip on the left
const PALETTE_WIDTH: f32 = 136.0;
/// Palette cell size
const CELL: f32 = 48.0;
/// Height of the status bar
const STATUS_HEIGHT: f32 = 28.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Blockforge v{}", VERSION),
        window_width: 1600,
        window_height: 900,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    println!("Blockforge v{}", VERSION);

    let config = EditorConfig::load();
    let art = BlockArt::load().await;
    let mut app = AppState::new(art, config);

    loop {
        let input = InputState::poll();

        // Layout: palette strip left, status bar bottom, board fills the
        // rest at a fixed 16:9 aspect
        let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());
        let status_rect = Rect::new(0.0, screen.h - STATUS_HEIGHT, screen.w, STATUS_HEIGHT);
        let palette_rect = Rect::new(0.0, 0.0, PALETTE_WIDTH, screen.h - STATUS_HEIGHT);
        let board_area = Rect::new(
            PALETTE_WIDTH,
            0.0,
            screen.w - PALETTE_WIDTH,
            screen.h - STATUS_HEIGHT,
        );
        let board_rect = board_area.aspect_fit(16.0 / 9.0);

        handle_shortcuts(&input, &mut app);

        // Pointer events over the board (positions over the palette fall
        // outside the board rect and are ignored by the mapper). A held
        // Ctrl means a shortcut chord, not a paint gesture.
        if !input.ctrl {
            if let Some(e) = app.editor.handle_pointer(&input, board_rect) {
                app.status.set(format!("{}", e));
            }
        }

        app.update();

        // Frame tick: redraw the logical buffer only when dirty, then blit
        clear_background(Color::from_rgba(12, 12, 15, 255));
        if app.editor.is_dirty() {
            app.editor.draw_frame(&app.art);
        }
        app.editor.renderer.blit(board_rect);

        draw_palette(palette_rect, &mut app);
        ui::draw_status_bar(
            status_rect,
            app.status.current(),
            app.editor.dark(),
            app.editor.grid_enabled(),
        );

        next_frame().await
    }
}

fn handle_shortcuts(input: &InputState, app: &mut AppState) {
    if input.undo_pressed {
        if !app.editor.undo() {
            app.status.set("Nothing to undo");
        }
    }
    if input.grid_toggle_pressed {
        if app.editor.grid_enabled() {
            app.editor.disable_grid();
        } else {
            app.editor.enable_grid();
        }
        app.remember_grid();
    }
    if input.dark_toggle_pressed {
        let enable = !app.editor.dark();
        match app.editor.set_dark(enable) {
            Ok(()) => app
                .status
                .set(if enable { "Dark mode on" } else { "Dark mode off" }),
            Err(e) => app.status.set(format!("{}", e)),
        }
    }
    if input.new_pressed {
        app.new_level();
    }
    if input.open_pressed {
        app.open_level();
    }
    if input.save_pressed {
        app.save_level();
    }
    if input.export_dev_pressed {
        app.export_dev();
    }
    if input.snapshot_pressed {
        app.save_snapshot();
    }
}

/// Palette strip: one cell per placeable block, click to select, click the
/// selected block again to drop back to no tool
fn draw_palette(rect: Rect, app: &mut AppState) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::from_rgba(30, 30, 36, 255));
    draw_text("blocks", rect.x + 8.0, rect.y + 22.0, 22.0, LIGHTGRAY);

    let margin = 8.0;
    let columns = ((rect.w - margin) / (CELL + margin)).floor().max(1.0) as usize;

    let mut clicked: Option<Block> = None;
    for (i, block) in Block::palette().iter().enumerate() {
        let col = i % columns;
        let row = i / columns;
        let cell = Rect::new(
            rect.x + margin + col as f32 * (CELL + margin),
            rect.y + 32.0 + row as f32 * (CELL + margin),
            CELL,
            CELL,
        );
        if cell.bottom() > rect.bottom() {
            break;
        }

        let selected = app.editor.active() == Some(block);
        if ui::block_button(cell, app.art.get(block.asset_name()), selected) {
            clicked = Some(block.clone());
        }
    }

    if let Some(block) = clicked {
        if app.editor.active() == Some(&block) {
            app.editor.set_active(None);
        } else {
            app.editor.set_active(Some(block));
        }
    }
}
