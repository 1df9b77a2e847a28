//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Overlay};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, Color, GameMode, MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

use term_tetris_engine::StartupError;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Size of the attached terminal.
    pub fn current() -> std::io::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::new(width, height))
    }

    /// Fail unless the board and its frame fit.
    pub fn ensure_fits(&self) -> Result<(), StartupError> {
        if self.width < MIN_VIEWPORT_WIDTH || self.height < MIN_VIEWPORT_HEIGHT {
            return Err(StartupError::ViewportTooSmall {
                width: self.width,
                height: self.height,
                min_width: MIN_VIEWPORT_WIDTH,
                min_height: MIN_VIEWPORT_HEIGHT,
            });
        }
        Ok(())
    }
}

const BLOCK: char = '█';

const FRAME: Rgb = Rgb::new(200, 200, 200);
const HIGHLIGHT: Rgb = Rgb::WHITE;

/// Countdown digits as board cells, drawn in red, yellow and green.
const DIGIT_THREE: &[(u16, u16)] = &[
    (3, 5), (4, 5), (5, 5), (6, 6), (6, 7), (6, 8), (4, 9), (5, 9),
    (6, 10), (6, 11), (6, 12), (6, 13), (3, 14), (4, 14), (5, 14),
];
const DIGIT_TWO: &[(u16, u16)] = &[
    (3, 6), (4, 6), (5, 6), (6, 7), (6, 8), (6, 9), (5, 10), (4, 11),
    (3, 12), (3, 13), (4, 13), (5, 13), (6, 13),
];
const DIGIT_ONE: &[(u16, u16)] = &[
    (5, 5), (5, 6), (4, 6), (3, 7), (4, 7), (5, 7), (4, 8), (5, 8),
    (4, 9), (5, 9), (4, 10), (5, 10), (4, 11), (5, 11), (4, 12), (5, 12),
    (4, 13), (5, 13), (3, 14), (4, 14), (5, 14), (6, 14),
];

/// Renders the board as double-width blocks inside a one-cell frame.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for the typical glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render one frame into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame_w = (BOARD_WIDTH as u16 + 2) * self.cell_w;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;
        let mut canvas = Canvas {
            fb,
            origin_x,
            origin_y,
            cell_w: self.cell_w,
        };

        // Frame: one board cell thick on every side.
        for x in -1..=BOARD_WIDTH as i16 {
            canvas.block(x, -1, FRAME);
            canvas.block(x, BOARD_HEIGHT as i16, FRAME);
        }
        for y in 0..BOARD_HEIGHT as i16 {
            canvas.block(-1, y, FRAME);
            canvas.block(BOARD_WIDTH as i16, y, FRAME);
        }

        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                match snap.cell(x, y) {
                    Cell::Occupied(color) => canvas.block(x as i16, y as i16, color_rgb(color)),
                    Cell::Empty => canvas.empty(x as i16, y as i16),
                }
            }
        }

        // Blocks above the board are not drawn.
        if let Some(piece) = snap.active {
            for b in piece.blocks.iter().filter(|b| b.in_bounds()) {
                canvas.block(b.x as i16, b.y as i16, color_rgb(piece.color));
            }
        }

        match snap.overlay {
            Overlay::None => {}
            Overlay::Flash { rows } => {
                for (y, _) in rows.iter().enumerate().filter(|(_, lit)| **lit) {
                    for x in 0..BOARD_WIDTH as i16 {
                        canvas.block(x, y as i16, HIGHLIGHT);
                    }
                }
            }
            Overlay::Countdown(digit) => {
                canvas.countdown(digit);
                return;
            }
        }

        match snap.mode {
            GameMode::Paused => canvas.banner("PAUSED"),
            GameMode::GameOver => canvas.banner("GAME OVER"),
            GameMode::Playing | GameMode::Quitting => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

/// Framebuffer addressed in board coordinates (frame cells at -1 and W/H).
struct Canvas<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
}

impl Canvas<'_> {
    fn column(&self, x: i16) -> u16 {
        self.origin_x + ((x + 1) as u16) * self.cell_w
    }

    fn row(&self, y: i16) -> u16 {
        self.origin_y + (y + 1) as u16
    }

    fn block(&mut self, x: i16, y: i16, color: Rgb) {
        let style = Style::new(color, Rgb::BLACK);
        let (px, py) = (self.column(x), self.row(y));
        self.fb.fill_rect(px, py, self.cell_w, 1, BLOCK, style);
    }

    fn empty(&mut self, x: i16, y: i16) {
        let style = Style::new(Rgb::new(60, 60, 70), Rgb::BLACK);
        let (px, py) = (self.column(x), self.row(y));
        self.fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
        self.fb.put_str(px, py, "·", style);
    }

    fn countdown(&mut self, digit: u8) {
        let (cells, color) = match digit {
            3 => (DIGIT_THREE, Rgb::new(220, 60, 60)),
            2 => (DIGIT_TWO, Rgb::new(230, 210, 60)),
            _ => (DIGIT_ONE, Rgb::new(80, 210, 100)),
        };
        for y in 3..BOARD_HEIGHT as i16 {
            for x in 2..BOARD_WIDTH as i16 {
                self.empty(x, y);
            }
        }
        for &(x, y) in cells {
            self.block(x as i16, y as i16, color);
        }
    }

    fn banner(&mut self, text: &str) {
        let frame_w = (BOARD_WIDTH as u16 + 2) * self.cell_w;
        let text_w = text.chars().count() as u16;
        let x = self.origin_x + frame_w.saturating_sub(text_w) / 2;
        let y = self.row(BOARD_HEIGHT as i16 / 2 - 2);
        let style = Style::new(Rgb::WHITE, Rgb::new(180, 30, 30)).bold();
        self.fb.put_str(x, y, text, style);
    }
}

pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Magenta => Rgb::new(200, 100, 220),
        Color::White => Rgb::new(235, 235, 235),
    }
}
