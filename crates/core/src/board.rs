//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the colour of
//! a settled piece. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). The active piece is never part of the board.

use arrayvec::ArrayVec;

use crate::types::{Block, Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices touched by one settling piece (at most one per block).
pub type RowSet = ArrayVec<u8, 4>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Occupied(_)))
    }

    /// Whether a block of the active piece may stand at `block`.
    ///
    /// The column must be on the board and the row above the floor. Blocks
    /// above the visible board (negative y) skip the occupancy check.
    pub fn admits(&self, block: Block) -> bool {
        if block.x < 0 || block.x >= BOARD_WIDTH as i8 || block.y >= BOARD_HEIGHT as i8 {
            return false;
        }
        block.y < 0 || !self.is_occupied(block.x, block.y)
    }

    /// Whether every block passes [`Board::admits`].
    pub fn admits_all(&self, blocks: &[Block]) -> bool {
        blocks.iter().all(|&b| self.admits(b))
    }

    /// Write `color` into every block's cell.
    ///
    /// Nothing is written unless every block is inside the board.
    pub fn place(&mut self, blocks: &[Block], color: Color) -> bool {
        if !blocks.iter().all(|b| b.in_bounds()) {
            return false;
        }
        for b in blocks {
            self.set(b.x, b.y, Cell::Occupied(color));
        }
        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_occupied())
    }

    /// Full rows among the rows touched by `blocks`, without duplicates,
    /// in the order the blocks first mention them.
    pub fn full_rows(&self, blocks: &[Block]) -> RowSet {
        let mut rows = RowSet::new();
        for b in blocks {
            if b.y < 0 {
                continue;
            }
            let y = b.y as u8;
            if rows.contains(&y) || rows.is_full() {
                continue;
            }
            if self.is_row_full(y as usize) {
                rows.push(y);
            }
        }
        rows
    }

    /// Remove row `y` and shift every row above it down by one.
    ///
    /// Row 0 is left empty afterwards. Returns false if `y` is out of bounds.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        self.cells[..width].fill(Cell::Empty);
        true
    }

    /// Remove each listed row, in the given order, returning how many were removed.
    ///
    /// Removing a row moves everything above it down one, so pending rows
    /// that sat above an already-removed row are bumped by one before they
    /// are processed. Duplicate entries are ignored.
    pub fn clear_rows(&mut self, rows: &[u8]) -> usize {
        let mut pending = RowSet::new();
        for &y in rows {
            if !pending.contains(&y) && !pending.is_full() {
                pending.push(y);
            }
        }

        let mut cleared = 0;
        for i in 0..pending.len() {
            let row = pending[i];
            if !self.clear_row(row as usize) {
                continue;
            }
            cleared += 1;
            for later in pending[i + 1..].iter_mut() {
                if *later < row {
                    *later += 1;
                }
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy of the board as rows of cells (`grid[y][x]`).
    pub fn to_grid(&self) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let width = BOARD_WIDTH as usize;
        let mut grid = [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (y, row) in grid.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
        grid
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
