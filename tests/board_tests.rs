//! Board tests

use term_tetris::core::Board;
use term_tetris::types::{Block, Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, color: Color) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Cell::Occupied(color));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.occupied_count(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(Cell::Empty), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(5, 10, Cell::Occupied(Color::Magenta)));
    assert_eq!(board.get(5, 10), Some(Cell::Occupied(Color::Magenta)));
    assert!(board.is_occupied(5, 10));

    assert!(!board.set(10, 0, Cell::Occupied(Color::Red)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_admits_walls_floor_and_stack() {
    let mut board = Board::new();
    board.set(3, 19, Cell::Occupied(Color::Blue));

    assert!(board.admits(Block::new(0, 0)));
    assert!(board.admits(Block::new(9, 19)));
    assert!(!board.admits(Block::new(-1, 5)));
    assert!(!board.admits(Block::new(10, 5)));
    assert!(!board.admits(Block::new(4, 20)));
    assert!(!board.admits(Block::new(3, 19)));
    // Above the board only the column matters.
    assert!(board.admits(Block::new(3, -2)));
    assert!(!board.admits(Block::new(-1, -2)));
}

#[test]
fn test_place_writes_every_block() {
    let mut board = Board::new();
    let blocks = [
        Block::new(0, 19),
        Block::new(1, 19),
        Block::new(2, 19),
        Block::new(1, 18),
    ];
    assert!(board.place(&blocks, Color::Magenta));
    for b in blocks {
        assert_eq!(board.get(b.x, b.y), Some(Cell::Occupied(Color::Magenta)));
    }
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_full_rows_only_reports_touched_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, Color::Red);
    fill_row(&mut board, 10, Color::Red);

    let rows = board.full_rows(&[Block::new(0, 19), Block::new(0, 18)]);
    assert_eq!(rows.as_slice(), &[19]);
    assert!(board.full_rows(&[Block::new(0, 5)]).is_empty());
}

#[test]
fn test_clear_rows_shifts_stack_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, Color::Red);
    fill_row(&mut board, 17, Color::Red);
    board.set(2, 18, Cell::Occupied(Color::Green));
    board.set(7, 16, Cell::Occupied(Color::Yellow));

    assert_eq!(board.clear_rows(&[19, 17]), 2);

    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(2, 19), Some(Cell::Occupied(Color::Green)));
    assert_eq!(board.get(7, 18), Some(Cell::Occupied(Color::Yellow)));
}

#[test]
fn test_clear_rows_ignores_out_of_range() {
    let mut board = Board::new();
    fill_row(&mut board, 19, Color::Red);
    assert_eq!(board.clear_rows(&[20, 19, 19]), 1);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_clear_resets_everything() {
    let mut board = Board::new();
    fill_row(&mut board, 0, Color::Cyan);
    board.clear();
    assert_eq!(board, Board::new());
}
