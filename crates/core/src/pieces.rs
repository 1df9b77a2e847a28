//! Pieces module - tetromino catalog and rotation geometry
//!
//! Every piece is four absolute blocks. `blocks[0]` is the pivot: it never
//! moves during a rotation. No wall kicks are attempted; a rotation either
//! fits where it lands or is rejected by the caller.

use crate::types::{Block, Color, Direction, PieceKind};

/// Four blocks of a piece, pivot first.
pub type PieceBlocks = [Block; 4];

const fn b(x: i8, y: i8) -> Block {
    Block::new(x, y)
}

/// Canonical spawn configuration for each variant, pivot first.
pub const fn spawn_template(kind: PieceKind) -> PieceBlocks {
    match kind {
        PieceKind::I => [b(4, 0), b(3, 0), b(5, 0), b(6, 0)],
        PieceKind::L => [b(4, 0), b(5, 0), b(3, 0), b(3, 1)],
        PieceKind::J => [b(4, 0), b(3, 0), b(5, 0), b(5, 1)],
        PieceKind::O => [b(4, 0), b(4, 1), b(5, 0), b(5, 1)],
        PieceKind::S => [b(4, 0), b(5, 0), b(3, 1), b(4, 1)],
        PieceKind::Z => [b(4, 0), b(3, 0), b(4, 1), b(5, 1)],
        PieceKind::T => [b(4, 0), b(5, 0), b(3, 0), b(4, 1)],
    }
}

/// A tetromino on (or above) the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub blocks: PieceBlocks,
}

impl Piece {
    /// Fresh piece at its spawn template.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            color: kind.color(),
            blocks: spawn_template(kind),
        }
    }

    pub fn pivot(&self) -> Block {
        self.blocks[0]
    }

    /// Blocks after moving one cell in `dir`.
    pub fn shifted(&self, dir: Direction) -> PieceBlocks {
        let (dx, dy) = dir.delta();
        self.blocks.map(|blk| b(blk.x + dx, blk.y + dy))
    }

    /// Blocks after one clockwise rotation, or `None` for pieces that do not rotate.
    ///
    /// The I piece toggles between two fixed layouts around the pivot because
    /// its centre of rotation is not one of its cells. Everything else turns
    /// each non-pivot block 90° clockwise about the pivot: (rx, ry) -> (-ry, rx).
    pub fn rotated(&self) -> Option<PieceBlocks> {
        let p = self.pivot();
        match self.kind {
            PieceKind::O => None,
            PieceKind::I => {
                if self.is_horizontal() {
                    Some([p, b(p.x, p.y - 1), b(p.x, p.y + 1), b(p.x, p.y + 2)])
                } else {
                    Some([p, b(p.x - 1, p.y), b(p.x + 1, p.y), b(p.x + 2, p.y)])
                }
            }
            PieceKind::T | PieceKind::S | PieceKind::Z | PieceKind::J | PieceKind::L => {
                let mut out = self.blocks;
                for blk in out.iter_mut().skip(1) {
                    let rel_x = blk.x - p.x;
                    let rel_y = blk.y - p.y;
                    *blk = b(p.x - rel_y, p.y + rel_x);
                }
                Some(out)
            }
        }
    }

    /// Whether the first non-pivot block shares the pivot's row.
    pub fn is_horizontal(&self) -> bool {
        self.blocks[1].y == self.blocks[0].y
    }

    /// Whether any block is still above the visible board.
    pub fn is_above_board(&self) -> bool {
        self.blocks.iter().any(|blk| blk.y < 0)
    }

    pub fn with_blocks(self, blocks: PieceBlocks) -> Self {
        Self { blocks, ..self }
    }
}
