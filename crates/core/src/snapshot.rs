use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{Cell, GameMode, BOARD_HEIGHT, BOARD_WIDTH};

pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Transient decoration drawn on top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Rows highlighted during the line-clear flash (`rows[y]`).
    Flash { rows: [bool; BOARD_HEIGHT as usize] },
    /// Pre-roll countdown digit (3, 2, 1).
    Countdown(u8),
}

impl Overlay {
    pub fn flash(rows: &[u8]) -> Self {
        let mut mask = [false; BOARD_HEIGHT as usize];
        for &y in rows {
            if let Some(slot) = mask.get_mut(y as usize) {
                *slot = true;
            }
        }
        Overlay::Flash { rows: mask }
    }
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: Option<Piece>,
    pub mode: GameMode,
    pub overlay: Overlay,
}

impl GameSnapshot {
    pub fn capture(board: &Board, active: Option<Piece>, mode: GameMode) -> Self {
        Self {
            board: board.to_grid(),
            active,
            mode,
            overlay: Overlay::None,
        }
    }

    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = overlay;
        self
    }

    /// Board cell at (x, y); out-of-range reads are empty.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(Cell::Empty)
    }

    pub fn playable(&self) -> bool {
        self.mode == GameMode::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            mode: GameMode::default(),
            overlay: Overlay::None,
        }
    }
}
