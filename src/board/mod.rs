//! Board model
//!
//! The fixed 32x18 tile grid. Tiles are stored row-major; index `i` maps to
//! column `i % WIDTH`, row `i / WIDTH`. All mutation goes through the
//! editor so invariants (mask placement, exactly-one-mask in dark mode)
//! hold board-wide.

mod block;

pub use block::{Backdrop, Block, Direction};

/// Board width in tiles
pub const WIDTH: usize = 32;
/// Board height in tiles
pub const HEIGHT: usize = 18;
/// Total tile count
pub const TILE_COUNT: usize = WIDTH * HEIGHT;

/// Error type for board access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Index outside `[0, TILE_COUNT)` - a programming error, the board is
    /// left untouched
    IndexOutOfRange(usize),
    /// Mask placement on a tile that already holds content
    TileOccupied(usize),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::IndexOutOfRange(i) => {
                write!(f, "tile index {} out of range (max {})", i, TILE_COUNT - 1)
            }
            BoardError::TileOccupied(i) => write!(f, "tile {} is occupied", i),
        }
    }
}

impl std::error::Error for BoardError {}

/// The tile grid. Storage length is always exactly `TILE_COUNT`.
pub struct Board {
    tiles: Vec<Block>,
}

impl Board {
    /// Create an all-empty board
    pub fn new() -> Self {
        Self {
            tiles: vec![Block::Empty; TILE_COUNT],
        }
    }

    /// Replace the content of one tile, returning the previous content.
    ///
    /// Setting a tile to the value it already holds is a no-op. Placing the
    /// mask circle on an occupied tile fails with `TileOccupied`; every
    /// other block fully replaces whatever was there.
    pub fn set_tile(&mut self, index: usize, block: Block) -> Result<Block, BoardError> {
        let slot = self
            .tiles
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange(index))?;

        if *slot == block {
            return Ok(block);
        }
        if block == Block::Mask && !slot.is_empty() {
            return Err(BoardError::TileOccupied(index));
        }

        Ok(std::mem::replace(slot, block))
    }

    /// Shorthand for `set_tile(index, Empty)`
    pub fn clear_tile(&mut self, index: usize) -> Result<Block, BoardError> {
        self.set_tile(index, Block::Empty)
    }

    /// Write a tile without the mask-placement guard.
    ///
    /// Undo replay restores a previously valid state and must not be
    /// re-validated against the current one; only the index is checked.
    pub(crate) fn restore_tile(&mut self, index: usize, block: Block) -> Result<Block, BoardError> {
        let slot = self
            .tiles
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange(index))?;
        Ok(std::mem::replace(slot, block))
    }

    /// Read one tile
    pub fn get_tile(&self, index: usize) -> Result<&Block, BoardError> {
        self.tiles
            .get(index)
            .ok_or(BoardError::IndexOutOfRange(index))
    }

    /// All tiles in board order
    pub fn tiles(&self) -> &[Block] {
        &self.tiles
    }

    /// First empty tile in row-major order (left-to-right, top-to-bottom)
    pub fn find_first_empty(&self) -> Option<usize> {
        self.tiles.iter().position(Block::is_empty)
    }

    /// Indices of every tile holding the mask circle
    pub fn mask_tiles(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == Block::Mask)
            .map(|(i, _)| i)
            .collect()
    }

    /// Reset every tile to empty
    pub fn clear_all(&mut self) {
        self.tiles.fill(Block::Empty);
    }

    /// Swap in a whole new tile array (import path). Short input is padded
    /// with empties, excess is dropped, mirroring the lenient line decode.
    pub fn replace_tiles(&mut self, mut tiles: Vec<Block>) {
        tiles.resize(TILE_COUNT, Block::Empty);
        self.tiles = tiles;
    }

    /// Column/row of a tile index
    pub fn position(index: usize) -> (usize, usize) {
        (index % WIDTH, index / WIDTH)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut board = Board::new();
        for index in [0, 1, WIDTH, TILE_COUNT - 1] {
            board.set_tile(index, Block::Brick).unwrap();
            assert_eq!(board.get_tile(index).unwrap(), &Block::Brick);
        }
    }

    #[test]
    fn test_index_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.set_tile(TILE_COUNT, Block::Brick),
            Err(BoardError::IndexOutOfRange(TILE_COUNT))
        );
        assert_eq!(
            board.get_tile(usize::MAX),
            Err(BoardError::IndexOutOfRange(usize::MAX))
        );
        // Board unaffected by the failed write
        assert!(board.tiles().iter().all(Block::is_empty));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut board = Board::new();
        assert_eq!(board.set_tile(7, Block::Key).unwrap(), Block::Empty);
        assert_eq!(board.set_tile(7, Block::Exit).unwrap(), Block::Key);
        assert_eq!(board.clear_tile(7).unwrap(), Block::Exit);
    }

    #[test]
    fn test_set_same_value_is_noop() {
        let mut board = Board::new();
        board.set_tile(3, Block::Wire).unwrap();
        assert_eq!(board.set_tile(3, Block::Wire).unwrap(), Block::Wire);
        assert_eq!(board.get_tile(3).unwrap(), &Block::Wire);
    }

    #[test]
    fn test_mask_requires_empty_tile() {
        let mut board = Board::new();
        board.set_tile(4, Block::Brick).unwrap();
        assert_eq!(
            board.set_tile(4, Block::Mask),
            Err(BoardError::TileOccupied(4))
        );
        assert_eq!(board.get_tile(4).unwrap(), &Block::Brick);
        // Empty tile accepts the mask
        assert_eq!(board.set_tile(5, Block::Mask).unwrap(), Block::Empty);
    }

    #[test]
    fn test_restore_bypasses_mask_guard() {
        let mut board = Board::new();
        board.set_tile(9, Block::Brick).unwrap();
        assert_eq!(board.restore_tile(9, Block::Mask).unwrap(), Block::Brick);
        assert_eq!(board.get_tile(9).unwrap(), &Block::Mask);
    }

    #[test]
    fn test_find_first_empty() {
        let mut board = Board::new();
        assert_eq!(board.find_first_empty(), Some(0));

        board.set_tile(0, Block::Brick).unwrap();
        board.set_tile(1, Block::Brick).unwrap();
        assert_eq!(board.find_first_empty(), Some(2));

        for i in 0..TILE_COUNT {
            board.set_tile(i, Block::Brick).unwrap();
        }
        assert_eq!(board.find_first_empty(), None);
    }

    #[test]
    fn test_clear_all() {
        let mut board = Board::new();
        board.set_tile(0, Block::Brick).unwrap();
        board.set_tile(100, Block::Exit).unwrap();
        board.clear_all();
        assert!(board.tiles().iter().all(Block::is_empty));
        assert_eq!(board.tiles().len(), TILE_COUNT);
    }

    #[test]
    fn test_replace_tiles_pads_and_truncates() {
        let mut board = Board::new();
        board.replace_tiles(vec![Block::Brick; 10]);
        assert_eq!(board.tiles().len(), TILE_COUNT);
        assert_eq!(board.get_tile(9).unwrap(), &Block::Brick);
        assert_eq!(board.get_tile(10).unwrap(), &Block::Empty);

        board.replace_tiles(vec![Block::Exit; TILE_COUNT + 50]);
        assert_eq!(board.tiles().len(), TILE_COUNT);
    }

    #[test]
    fn test_position() {
        assert_eq!(Board::position(0), (0, 0));
        assert_eq!(Board::position(5 + 3 * WIDTH), (5, 3));
        assert_eq!(Board::position(TILE_COUNT - 1), (WIDTH - 1, HEIGHT - 1));
    }
}
