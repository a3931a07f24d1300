//! Application state
//!
//! Ties the editor core to the shell: current file, preferences, the
//! status line, and the file operations behind the keyboard shortcuts.
//! Dialogs and disk IO are native-only; on WASM the shortcuts report that
//! they are unavailable.

use crate::assets::BlockArt;
use crate::codec::LevelFormat;
use crate::config::EditorConfig;
use crate::editor::EditorState;
use macroquad::prelude::get_time;
use std::path::PathBuf;

/// How long a status message stays up, in seconds
const STATUS_SECONDS: f64 = 4.0;

/// One transient message above the status bar
pub struct StatusLine {
    text: String,
    shown_at: f64,
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            shown_at: 0.0,
        }
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.shown_at = get_time();
        println!("{}", self.text);
    }

    /// Current message, empty once it expired
    pub fn current(&self) -> &str {
        if get_time() - self.shown_at < STATUS_SECONDS {
            &self.text
        } else {
            ""
        }
    }
}

pub struct AppState {
    pub editor: EditorState,
    pub art: BlockArt,
    pub config: EditorConfig,
    /// File backing the current board, if it was opened from or saved to one
    pub file_path: Option<PathBuf>,
    pub status: StatusLine,
}

impl AppState {
    pub fn new(art: BlockArt, config: EditorConfig) -> Self {
        let mut editor = EditorState::new();
        if !config.grid_enabled {
            editor.disable_grid();
        }
        Self {
            editor,
            art,
            config,
            file_path: None,
            status: StatusLine::new(),
        }
    }

    /// Per-frame housekeeping hook for time-based state
    pub fn update(&mut self) {
        // Status expiry is handled lazily by StatusLine::current; nothing
        // else is time-based yet.
    }

    /// Drop the board and start over
    pub fn new_level(&mut self) {
        self.editor.clear_board();
        self.file_path = None;
        self.status.set("New level");
    }

    /// Pick a file, sniff its format and replace the board
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_level(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("Level", &["txt", "lvl"]);
        if let Some(dir) = &self.config.last_dir {
            dialog = dialog.set_directory(dir);
        }
        let path = match dialog.pick_file() {
            Some(path) => path,
            None => return,
        };

        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) => {
                self.status.set(format!("Failed to read {}: {}", path.display(), e));
                return;
            }
        };

        match self.editor.import(&data) {
            Ok(format) => {
                self.status
                    .set(format!("Loaded {} ({:?} format)", path.display(), format));
                self.remember_dir(&path);
                self.file_path = Some(path);
            }
            Err(e) => {
                self.status.set(format!("Failed to load file: {}", e));
            }
        }
    }

    /// Save the line format to the current file, or ask for one
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_level(&mut self) {
        let path = match self.file_path.clone() {
            Some(path) => path,
            None => {
                let mut dialog = rfd::FileDialog::new()
                    .add_filter("Level", &["txt", "lvl"])
                    .set_file_name("level.txt");
                if let Some(dir) = &self.config.last_dir {
                    dialog = dialog.set_directory(dir);
                }
                match dialog.save_file() {
                    Some(path) => path,
                    None => return,
                }
            }
        };

        let data = self.editor.export(LevelFormat::Lines);
        match std::fs::write(&path, data) {
            Ok(()) => {
                self.status.set(format!("Saved {}", path.display()));
                self.remember_dir(&path);
                self.file_path = Some(path);
            }
            Err(e) => {
                self.status.set(format!("Failed to save {}: {}", path.display(), e));
            }
        }
    }

    /// Array-format export for the game's dev level registry
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_dev(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Array export", &["txt"])
            .set_file_name("level_array.txt");
        if let Some(dir) = &self.config.last_dir {
            dialog = dialog.set_directory(dir);
        }
        let path = match dialog.save_file() {
            Some(path) => path,
            None => return,
        };

        let data = self.editor.export(LevelFormat::Array);
        match std::fs::write(&path, data) {
            Ok(()) => {
                self.status.set(format!("Exported {}", path.display()));
                self.remember_dir(&path);
            }
            Err(e) => {
                self.status.set(format!("Failed to export {}: {}", path.display(), e));
            }
        }
    }

    /// Save the rendered board as a PNG image
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_snapshot(&mut self) {
        let img = match self.editor.renderer.snapshot() {
            Some(img) => img,
            None => {
                self.status.set("Nothing rendered yet");
                return;
            }
        };

        let path = match rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name("level.png")
            .save_file()
        {
            Some(path) => path,
            None => return,
        };

        match img.save(&path) {
            Ok(()) => self.status.set(format!("Snapshot saved to {}", path.display())),
            Err(e) => self.status.set(format!("Failed to save snapshot: {}", e)),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn open_level(&mut self) {
        self.status.set("File dialogs are not available in the browser");
    }

    #[cfg(target_arch = "wasm32")]
    pub fn save_level(&mut self) {
        self.status.set("File dialogs are not available in the browser");
    }

    #[cfg(target_arch = "wasm32")]
    pub fn export_dev(&mut self) {
        self.status.set("File dialogs are not available in the browser");
    }

    #[cfg(target_arch = "wasm32")]
    pub fn save_snapshot(&mut self) {
        self.status.set("File dialogs are not available in the browser");
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn remember_dir(&mut self, path: &std::path::Path) {
        let dir = path.parent().map(|p| p.to_path_buf());
        if dir != self.config.last_dir {
            self.config.last_dir = dir;
            if let Err(e) = self.config.save() {
                eprintln!("Failed to save config: {}", e);
            }
        }
    }

    /// Persist the grid preference when the overlay is toggled
    pub fn remember_grid(&mut self) {
        let enabled = self.editor.grid_enabled();
        if enabled != self.config.grid_enabled {
            self.config.grid_enabled = enabled;
            if let Err(e) = self.config.save() {
                eprintln!("Failed to save config: {}", e);
            }
        }
    }
}
