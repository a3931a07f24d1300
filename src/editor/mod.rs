//! Editor controller
//!
//! Composes the board, the edit history and the renderer. All mutation
//! funnels through here: pointer events resolve to tiles, paints record
//! history and mark the renderer dirty, dark mode manages its mask tile,
//! import/export speak both wire formats.

mod cursor;
mod history;

pub use cursor::{tile_at, OutOfBounds};
pub use history::{EditEntry, EditHistory};

use crate::board::{Block, Board, BoardError};
use crate::codec::{self, DecodeError, LevelFormat};
use crate::input::InputState;
use crate::render::BoardRenderer;
use crate::ui::Rect;

/// Error type for editor operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Dark mode needs an empty tile for its mask and the board has none
    BoardFull,
    Board(BoardError),
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorError::BoardFull => write!(f, "cannot enable dark mode: board is full"),
            EditorError::Board(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EditorError {}

impl From<BoardError> for EditorError {
    fn from(e: BoardError) -> Self {
        EditorError::Board(e)
    }
}

pub struct EditorState {
    board: Board,
    history: EditHistory,
    active: Option<Block>,
    dark: bool,
    /// Identifier written into array-format exports
    level: Option<String>,
    pub renderer: BoardRenderer,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: EditHistory::new(),
            active: None,
            dark: false,
            level: None,
            renderer: BoardRenderer::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    // ------------------------------------------------------------------
    // Tool selection
    // ------------------------------------------------------------------

    /// Set the active block, or `None` to deselect the tool
    pub fn set_active(&mut self, block: Option<Block>) {
        self.active = block;
    }

    pub fn active(&self) -> Option<&Block> {
        self.active.as_ref()
    }

    // ------------------------------------------------------------------
    // Painting and undo
    // ------------------------------------------------------------------

    /// Write one tile, recording history and marking the renderer dirty.
    ///
    /// Painting `Empty` is an erase and is always allowed; placing any
    /// other block is a no-op while no tool is active. Re-painting a tile
    /// with the value it already holds records nothing and stays clean.
    pub fn paint(&mut self, index: usize, block: Block) -> Result<(), BoardError> {
        if !block.is_empty() && self.active.is_none() {
            return Ok(());
        }

        let prev = self.board.set_tile(index, block.clone())?;
        if prev == block {
            return Ok(());
        }

        self.history.record(EditEntry {
            index,
            old: prev,
            new: block,
        });
        self.renderer.mark_dirty();
        Ok(())
    }

    /// Revert the most recent edit. Returns false when there is nothing to
    /// undo. The replay itself is not recorded: undo must never generate
    /// new undoable entries.
    pub fn undo(&mut self) -> bool {
        let entry = match self.history.pop_last() {
            Some(entry) => entry,
            None => return false,
        };
        match self.board.restore_tile(entry.index, entry.old.clone()) {
            Ok(prev) => {
                if prev != entry.old {
                    self.renderer.mark_dirty();
                }
                true
            }
            Err(_) => false,
        }
    }

    /// Dispatch one pointer event: left button paints the active block,
    /// right button erases. A pointer outside the board is ignored; a
    /// rejected paint (mask onto an occupied tile) is handed back for the
    /// status line.
    pub fn handle_pointer(&mut self, input: &InputState, board_rect: Rect) -> Option<BoardError> {
        let index = match tile_at(input.pointer.0, input.pointer.1, board_rect) {
            Ok(index) => index,
            Err(OutOfBounds) => return None,
        };

        let result = if input.left_down {
            match self.active.clone() {
                Some(block) => self.paint(index, block),
                None => Ok(()),
            }
        } else if input.right_down {
            self.paint(index, Block::Empty)
        } else {
            Ok(())
        };
        result.err()
    }

    // ------------------------------------------------------------------
    // Dark mode
    // ------------------------------------------------------------------

    /// Enable or disable dark mode.
    ///
    /// Enabling places the mask circle on the first empty tile and fails
    /// with `BoardFull` (flag unchanged) when the board has none. Disabling
    /// clears every mask tile.
    pub fn set_dark(&mut self, enabled: bool) -> Result<(), EditorError> {
        if enabled == self.dark {
            return Ok(());
        }

        if enabled {
            let index = self.board.find_first_empty().ok_or(EditorError::BoardFull)?;
            self.board.set_tile(index, Block::Mask)?;
            self.dark = true;
        } else {
            for index in self.board.mask_tiles() {
                self.board.clear_tile(index)?;
            }
            self.dark = false;
        }

        self.renderer.set_dark(self.dark);
        Ok(())
    }

    pub fn dark(&self) -> bool {
        self.dark
    }

    // ------------------------------------------------------------------
    // Grid overlay and frame tick
    // ------------------------------------------------------------------

    pub fn enable_grid(&mut self) {
        self.renderer.set_grid(true);
    }

    pub fn disable_grid(&mut self) {
        self.renderer.set_grid(false);
    }

    pub fn grid_enabled(&self) -> bool {
        self.renderer.grid_enabled()
    }

    pub fn is_dirty(&self) -> bool {
        self.renderer.is_dirty()
    }

    /// Frame tick. Redraws into the logical buffer only when dirty.
    pub fn draw_frame(&mut self, art: &crate::assets::BlockArt) -> bool {
        self.renderer.draw_frame(&self.board, art)
    }

    // ------------------------------------------------------------------
    // Level identifier
    // ------------------------------------------------------------------

    pub fn set_level(&mut self, level: Option<String>) {
        self.level = level;
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    // ------------------------------------------------------------------
    // Import / export / reset
    // ------------------------------------------------------------------

    /// Serialize the board. Array exports use the current level identifier,
    /// falling back to "0" when none is set.
    pub fn export(&self, format: LevelFormat) -> String {
        match format {
            LevelFormat::Lines => codec::encode_lines(self.board.tiles()),
            LevelFormat::Array => {
                codec::encode_array(self.level.as_deref().unwrap_or("0"), self.board.tiles())
            }
        }
    }

    /// Replace the board from serialized data of either format.
    ///
    /// All-or-nothing: on any decode failure the board, flags and history
    /// are exactly as before. On success the dark flag follows the mask
    /// tile (first one wins, duplicates are dropped) and the history is
    /// cleared, since its indices described the old board.
    pub fn import(&mut self, data: &str) -> Result<LevelFormat, DecodeError> {
        let decoded = codec::decode_any(data)?;

        let mut blocks = decoded.blocks;
        let mut dark = false;
        for block in blocks.iter_mut() {
            if *block == Block::Mask {
                if dark {
                    *block = Block::Empty;
                } else {
                    dark = true;
                }
            }
        }

        self.board.replace_tiles(blocks);
        self.dark = dark;
        if decoded.level.is_some() {
            self.level = decoded.level;
        }
        self.history.clear();
        self.renderer.set_dark(dark);
        self.renderer.mark_dirty();
        Ok(decoded.format)
    }

    /// Wipe the board back to the empty session state
    pub fn clear_board(&mut self) {
        self.board.clear_all();
        self.history.clear();
        self.dark = false;
        self.renderer.set_dark(false);
        self.renderer.mark_dirty();
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TILE_COUNT;

    #[test]
    fn test_paint_then_get() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        editor.paint(10, Block::Brick).unwrap();
        assert_eq!(editor.board().get_tile(10).unwrap(), &Block::Brick);
    }

    #[test]
    fn test_paint_requires_active_tool() {
        let mut editor = EditorState::new();
        // No tool: placing is a no-op, not an error
        editor.paint(0, Block::Brick).unwrap();
        assert_eq!(editor.board().get_tile(0).unwrap(), &Block::Empty);
        assert!(editor.history().is_empty());
    }

    #[test]
    fn test_erase_always_allowed() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        editor.paint(0, Block::Brick).unwrap();
        editor.set_active(None);
        editor.paint(0, Block::Empty).unwrap();
        assert_eq!(editor.board().get_tile(0).unwrap(), &Block::Empty);
    }

    #[test]
    fn test_paint_is_idempotent() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        editor.paint(10, Block::Brick).unwrap();
        let history_len = editor.history().len();

        editor.paint(10, Block::Brick).unwrap();
        assert_eq!(editor.history().len(), history_len);
    }

    #[test]
    fn test_paint_records_prior_content() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        editor.paint(5, Block::Brick).unwrap();
        editor.set_active(Some(Block::Exit));
        editor.paint(5, Block::Exit).unwrap();

        assert!(editor.undo());
        assert_eq!(editor.board().get_tile(5).unwrap(), &Block::Brick);
        assert!(editor.undo());
        assert_eq!(editor.board().get_tile(5).unwrap(), &Block::Empty);
    }

    #[test]
    fn test_undo_does_not_record() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        editor.paint(5, Block::Brick).unwrap();

        assert_eq!(editor.history().len(), 1);
        assert!(editor.undo());
        assert_eq!(editor.history().len(), 0);
        // Undo of undo is impossible: nothing new was recorded
        assert!(!editor.undo());
    }

    #[test]
    fn test_undo_restores_mask_over_occupied_tile() {
        let mut editor = EditorState::new();
        editor.set_dark(true).unwrap();
        let mask_index = editor.board().mask_tiles()[0];

        // Overwrite the mask with a brick, then undo
        editor.set_active(Some(Block::Brick));
        editor.paint(mask_index, Block::Brick).unwrap();
        assert!(editor.undo());
        assert_eq!(editor.board().get_tile(mask_index).unwrap(), &Block::Mask);
    }

    #[test]
    fn test_dark_mode_places_mask_on_first_empty() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        editor.paint(0, Block::Brick).unwrap();

        editor.set_dark(true).unwrap();
        assert!(editor.dark());
        assert_eq!(editor.board().get_tile(1).unwrap(), &Block::Mask);

        editor.set_dark(false).unwrap();
        assert!(!editor.dark());
        assert_eq!(editor.board().get_tile(1).unwrap(), &Block::Empty);
        // The brick is untouched
        assert_eq!(editor.board().get_tile(0).unwrap(), &Block::Brick);
    }

    #[test]
    fn test_dark_mode_on_full_board_fails() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        for i in 0..TILE_COUNT {
            editor.paint(i, Block::Brick).unwrap();
        }

        assert_eq!(editor.set_dark(true), Err(EditorError::BoardFull));
        assert!(!editor.dark());
    }

    #[test]
    fn test_import_lines() {
        let mut editor = EditorState::new();
        let mut blocks = vec![Block::Empty; TILE_COUNT];
        blocks[3] = Block::Exit;
        let data = codec::encode_lines(&blocks);

        assert_eq!(editor.import(&data), Ok(LevelFormat::Lines));
        assert_eq!(editor.board().get_tile(3).unwrap(), &Block::Exit);
        assert!(editor.history().is_empty());
    }

    #[test]
    fn test_import_array_sets_level_id() {
        let mut editor = EditorState::new();
        let blocks = vec![Block::Empty; TILE_COUNT];
        let data = codec::encode_array("42", &blocks);

        assert_eq!(editor.import(&data), Ok(LevelFormat::Array));
        assert_eq!(editor.level(), Some("42"));
    }

    #[test]
    fn test_import_derives_dark_flag_and_dedups_masks() {
        let mut editor = EditorState::new();
        let mut blocks = vec![Block::Empty; TILE_COUNT];
        blocks[10] = Block::Mask;
        blocks[20] = Block::Mask;
        let data = codec::encode_lines(&blocks);

        editor.import(&data).unwrap();
        assert!(editor.dark());
        assert_eq!(editor.board().get_tile(10).unwrap(), &Block::Mask);
        assert_eq!(editor.board().get_tile(20).unwrap(), &Block::Empty);
    }

    #[test]
    fn test_failed_import_leaves_board_unchanged() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        editor.paint(0, Block::Brick).unwrap();
        editor.set_dark(true).unwrap();
        let before: Vec<Block> = editor.board().tiles().to_vec();

        assert_eq!(
            editor.import("certainly not a level"),
            Err(DecodeError::UnrecognizedFormat)
        );
        assert_eq!(editor.board().tiles(), &before[..]);
        assert!(editor.dark());
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn test_export_round_trips_through_import() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Spawn));
        editor.paint(100, Block::Spawn).unwrap();
        editor.set_level(Some("7".to_string()));

        let mut other = EditorState::new();
        other.import(&editor.export(LevelFormat::Array)).unwrap();
        assert_eq!(other.board().tiles(), editor.board().tiles());
        assert_eq!(other.level(), Some("7"));
    }

    #[test]
    fn test_paint_marks_dirty() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        editor.paint(0, Block::Brick).unwrap();
        editor.paint(1, Block::Brick).unwrap();
        // Two mutations, one pending redraw
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_mask_paint_on_occupied_tile_is_reported() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Mask));
        editor.paint(0, Block::Mask).unwrap();
        editor.set_active(Some(Block::Brick));
        editor.paint(1, Block::Brick).unwrap();

        editor.set_active(Some(Block::Mask));
        assert_eq!(
            editor.paint(1, Block::Mask),
            Err(BoardError::TileOccupied(1))
        );
    }

    #[test]
    fn test_clear_board_resets_session_state() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        editor.paint(0, Block::Brick).unwrap();
        editor.set_dark(true).unwrap();

        editor.clear_board();
        assert!(editor.board().tiles().iter().all(Block::is_empty));
        assert!(!editor.dark());
        assert!(editor.history().is_empty());
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_pointer_outside_board_is_ignored() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        let board_rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let input = InputState {
            pointer: (5000.0, 5000.0),
            left_down: true,
            ..Default::default()
        };

        assert_eq!(editor.handle_pointer(&input, board_rect), None);
        assert!(editor.board().tiles().iter().all(Block::is_empty));
    }

    #[test]
    fn test_pointer_paint_and_erase_hit_same_tile() {
        let mut editor = EditorState::new();
        editor.set_active(Some(Block::Brick));
        let board_rect = Rect::new(100.0, 50.0, 960.0, 540.0);
        let pointer = (400.0, 300.0);

        let paint = InputState {
            pointer,
            left_down: true,
            ..Default::default()
        };
        editor.handle_pointer(&paint, board_rect);
        let index = editor
            .board()
            .tiles()
            .iter()
            .position(|b| !b.is_empty())
            .unwrap();

        let erase = InputState {
            pointer,
            right_down: true,
            ..Default::default()
        };
        editor.handle_pointer(&erase, board_rect);
        assert_eq!(editor.board().get_tile(index).unwrap(), &Block::Empty);
    }
}
