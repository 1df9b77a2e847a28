//! Whole sessions driven by keyboard events through the real key map.

mod common;

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use common::{controller_with, still_timing};
use term_tetris::engine::{ExitReason, InputSource};
use term_tetris::input::handle_key_event;
use term_tetris::types::{GameAction, GameMode, PieceKind};

const O_ONLY: &[PieceKind] = &[PieceKind::O];

/// Replays key presses, then quits.
struct Keys(VecDeque<KeyEvent>);

impl Keys {
    fn new(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self(
            codes
                .into_iter()
                .map(|code| KeyEvent::new(code, KeyModifiers::NONE))
                .collect(),
        )
    }
}

impl InputSource for Keys {
    fn poll_action(&mut self, _timeout: Duration) -> io::Result<Option<GameAction>> {
        Ok(match self.0.pop_front() {
            Some(key) => handle_key_event(key),
            None => Some(GameAction::Quit),
        })
    }
}

#[test]
fn test_game_lifecycle() {
    let (controller, surface) = controller_with(O_ONLY, still_timing());
    let keys = Keys::new([
        KeyCode::Left,
        KeyCode::Left,
        KeyCode::Char(' '),
        KeyCode::Char('x'),
        KeyCode::Esc,
    ]);

    let reason = controller.run(keys).unwrap();

    assert_eq!(reason, ExitReason::Quit);
    let board = controller.engine().board();
    assert!(board.is_occupied(2, 19) && board.is_occupied(3, 18));
    assert_eq!(board.occupied_count(), 4);
    assert_eq!(surface.last().unwrap().mode, GameMode::Playing);
}

#[test]
fn test_game_pause_blocks_movement() {
    let (controller, _) = controller_with(O_ONLY, still_timing());
    let keys = Keys::new([
        KeyCode::Char('p'),
        KeyCode::Char(' '),
        KeyCode::Left,
        KeyCode::Char('P'),
        KeyCode::Right,
        KeyCode::Char(' '),
    ]);

    controller.run(keys).unwrap();

    let board = controller.engine().board();
    assert_eq!(board.occupied_count(), 4);
    assert!(board.is_occupied(5, 19) && board.is_occupied(6, 19));
}

#[test]
fn test_game_over_and_restart() {
    let (controller, surface) = controller_with(O_ONLY, still_timing());

    // Ten O pieces stack the centre columns to the top; the next spawn is blocked.
    let mut codes = vec![KeyCode::Char(' '); 10];
    codes.push(KeyCode::Left);
    codes.push(KeyCode::Enter);
    let keys = Keys::new(codes);

    controller.run(keys).unwrap();

    let frames = surface.frames();
    let over = frames
        .iter()
        .position(|f| f.mode == GameMode::GameOver)
        .expect("game should end");
    assert_eq!(frames[over].board[0][4], frames[over].board[19][4]);
    assert!(frames[over..].iter().any(|f| f.mode == GameMode::Playing));

    // The restart left a fresh board behind.
    assert_eq!(controller.engine().board().occupied_count(), 0);
}

#[test]
fn test_ctrl_c_key_quits() {
    let (controller, _) = controller_with(O_ONLY, still_timing());
    let mut keys = Keys::new([]);
    keys.0
        .push_back(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    keys.0.push_back(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));

    let reason = controller.run(keys).unwrap();

    assert_eq!(reason, ExitReason::Quit);
    // The move after the quit was never served.
    let active = controller.engine().active().unwrap();
    assert_eq!(active.pivot().x, 4);
}
