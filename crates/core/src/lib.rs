//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the data model of the game with **no** locking, timing,
//! or I/O. The concurrent engine wraps these types in locks and drives them.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of cells, collision predicate and line removal
//! - [`pieces`]: the seven spawn templates and rotation geometry
//! - [`rng`]: uniform piece selection (seeded LCG or any closure)
//! - [`snapshot`]: copyable frame description handed to renderers
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{Board, Piece};
//! use term_tetris_types::{Direction, PieceKind};
//!
//! let board = Board::new();
//! let piece = Piece::spawn(PieceKind::T);
//!
//! let moved = piece.shifted(Direction::Left);
//! assert!(board.admits_all(&moved));
//!
//! let rotated = piece.rotated().unwrap();
//! assert_eq!(rotated[0], piece.pivot());
//! ```

pub mod board;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use term_tetris_types as types;

pub use board::{Board, RowSet};
pub use pieces::{spawn_template, Piece, PieceBlocks};
pub use rng::{PieceSource, SimpleRng};
pub use snapshot::{GameSnapshot, Grid, Overlay};
