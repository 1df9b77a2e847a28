//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! used by the engine, the renderer and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Both must fit in a `u8`. Blocks of the active piece use signed `i8`
//! coordinates because a piece may sit partly above the board (negative y)
//! right after it spawns or rotates.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DROP_MS` | 1000 | Gravity tick period |
//! | `DEFAULT_FLASH_MS` | 250 | Pause between line-clear flash phases |
//! | `DEFAULT_COUNTDOWN_MS` | 1000 | Length of each 3-2-1 countdown step |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{GameMode, PieceKind, Color, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(PieceKind::O.color(), Color::Red);
//!
//! assert!(GameMode::Paused.can_transition(GameMode::Playing));
//! assert!(!GameMode::Paused.can_transition(GameMode::GameOver));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest usable terminal width: the board plus its frame, two columns per cell.
pub const MIN_VIEWPORT_WIDTH: u16 = (BOARD_WIDTH as u16 + 2) * 2;

/// Smallest usable terminal height: the board plus its frame.
pub const MIN_VIEWPORT_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;

/// Gravity tick period in milliseconds (one row per second).
pub const DEFAULT_DROP_MS: u32 = 1000;

/// Pause between the phases of the line-clear flash. Always below one tick.
pub const DEFAULT_FLASH_MS: u32 = 250;

/// Duration of each step of the pre-roll countdown.
pub const DEFAULT_COUNTDOWN_MS: u32 = 1000;

/// The seven tetromino shapes.
///
/// The shape decides how a piece rotates; the colour is only a rendering
/// attribute derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every variant, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Parse a piece kind from a string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("I"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Colour used when the piece is drawn or settled on the board.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::L => Color::Yellow,
            PieceKind::J => Color::Blue,
            PieceKind::O => Color::Red,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Magenta,
            PieceKind::T => Color::White,
        }
    }
}

/// Colour tag stored in occupied board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Blue,
    Red,
    Green,
    Magenta,
    White,
}

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(*color),
        }
    }
}

/// A signed board coordinate. `y < 0` means above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block {
    pub x: i8,
    pub y: i8,
}

impl Block {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Whether the block lies inside the visible board.
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < BOARD_WIDTH as i8 && self.y >= 0 && self.y < BOARD_HEIGHT as i8
    }
}

/// Movement directions. Pieces never move up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// `(dx, dy)` applied to every block of a piece.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Play mode of a session.
///
/// ```text
/// Paused ──resume──▶ Playing ──pause──▶ Paused
///                      │ ▲
///            game over │ │ new game
///                      ▼ │
///                    GameOver
/// (any) ──quit──▶ Quitting
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    Playing,
    #[default]
    Paused,
    GameOver,
    Quitting,
}

impl GameMode {
    /// Whether `self -> to` is one of the legal transitions.
    ///
    /// Staying in the same mode is never a transition; `Quitting` is terminal.
    pub fn can_transition(self, to: GameMode) -> bool {
        use GameMode::*;
        match (self, to) {
            (Quitting, _) => false,
            (_, Quitting) => true,
            (Paused, Playing) | (Playing, Paused) => true,
            (Playing, GameOver) | (GameOver, Playing) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Playing => "playing",
            GameMode::Paused => "paused",
            GameMode::GameOver => "game_over",
            GameMode::Quitting => "quitting",
        }
    }
}

/// Player requests produced by the input layer.
///
/// Whether an action does anything depends on the current [`GameMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece until it settles
    HardDrop,
    /// Pause while playing, resume while paused
    TogglePause,
    /// Start a new game after game over
    Confirm,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Parse action from a camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "togglepause" => Some(GameAction::TogglePause),
            "confirm" => Some(GameAction::Confirm),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::TogglePause => "togglePause",
            GameAction::Confirm => "confirm",
            GameAction::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use GameMode::*;
        let modes = [Playing, Paused, GameOver, Quitting];
        let legal = [
            (Paused, Playing),
            (Playing, Paused),
            (Playing, GameOver),
            (GameOver, Playing),
            (Playing, Quitting),
            (Paused, Quitting),
            (GameOver, Quitting),
        ];
        for from in modes {
            for to in modes {
                assert_eq!(
                    from.can_transition(to),
                    legal.contains(&(from, to)),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_piece_colors_are_distinct() {
        let colors: std::collections::HashSet<Color> =
            PieceKind::ALL.iter().map(|k| k.color()).collect();
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn test_block_bounds() {
        assert!(Block::new(0, 0).in_bounds());
        assert!(Block::new(9, 19).in_bounds());
        assert!(!Block::new(-1, 0).in_bounds());
        assert!(!Block::new(0, -1).in_bounds());
        assert!(!Block::new(10, 0).in_bounds());
        assert!(!Block::new(0, 20).in_bounds());
    }

    #[test]
    fn test_action_names_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveDown,
            GameAction::Rotate,
            GameAction::HardDrop,
            GameAction::TogglePause,
            GameAction::Confirm,
            GameAction::Quit,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
