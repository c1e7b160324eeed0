//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a square grid of [`BOARD_SIZE`] × [`BOARD_SIZE`] cells,
//! addressed as `(row, col)` with both indices 0-based. Row 0 is the top row.
//!
//! # Surface Coordinates
//!
//! The drawable surface is measured in terminal character cells. A
//! [`ScreenPoint`] is `(x, y)` with `x` growing to the right and `y` growing
//! downwards, origin at the top-left corner of the terminal.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 60 | Target frame rate of the draw/update loop |
//! | `MAX_FPS` | 240 | Upper bound accepted from the command line |
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Axis, Mark, Player, WinningLine, BOARD_SIZE};
//!
//! assert_eq!(Player::X.opponent(), Player::O);
//! assert_eq!(Mark::from(Player::O).glyph(), 'O');
//!
//! let line = WinningLine::new(Axis::Diagonal, 1);
//! let cells: Vec<_> = line.positions().collect();
//! assert_eq!(cells, vec![(0, 2), (1, 1), (2, 0)]);
//! assert_eq!(BOARD_SIZE, 3);
//! ```

use std::fmt;

/// Board side length (3x3)
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of diagonals tracked for win detection (main and anti)
pub const DIAGONAL_COUNT: usize = 2;

/// Default frame rate of the game loop
pub const DEFAULT_FPS: u32 = 60;

/// Highest accepted frame rate
pub const MAX_FPS: u32 = 240;

/// The two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves after `self`
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Occupancy of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// The player owning this mark, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// Character drawn for this mark (a blank for `Empty`)
    pub fn glyph(self) -> char {
        self.player().map(Player::glyph).unwrap_or(' ')
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// Presentation state attached to a cell
///
/// - **None**: drawn as an outline
/// - **Flashing**: drawn filled for exactly one frame (rejected click feedback)
/// - **WonHighlight**: drawn filled until the game is reset (part of the winning line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlashState {
    #[default]
    None,
    Flashing,
    WonHighlight,
}

impl FlashState {
    /// Whether the cell is drawn as a filled rectangle this frame
    pub fn is_filled(self) -> bool {
        !matches!(self, FlashState::None)
    }
}

/// Kind of line a win can be scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
    /// Index 0 is the main diagonal (`row == col`), index 1 the anti-diagonal
    /// (`row + col == BOARD_SIZE - 1`).
    Diagonal,
}

/// A completed line: the axis it lies on and its index along that axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub axis: Axis,
    pub index: usize,
}

impl WinningLine {
    pub fn new(axis: Axis, index: usize) -> Self {
        Self { axis, index }
    }

    /// The `(row, col)` positions covered by this line, in ascending row order
    /// (column order for rows).
    pub fn positions(self) -> impl Iterator<Item = (usize, usize)> {
        (0..BOARD_SIZE).map(move |i| match (self.axis, self.index) {
            (Axis::Row, r) => (r, i),
            (Axis::Column, c) => (i, c),
            (Axis::Diagonal, 0) => (i, i),
            (Axis::Diagonal, _) => (i, BOARD_SIZE - 1 - i),
        })
    }

    pub fn contains(self, row: usize, col: usize) -> bool {
        self.positions().any(|p| p == (row, col))
    }
}

impl fmt::Display for WinningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.axis, self.index) {
            (Axis::Row, r) => write!(f, "row {}", r + 1),
            (Axis::Column, c) => write!(f, "column {}", c + 1),
            (Axis::Diagonal, 0) => write!(f, "main diagonal"),
            (Axis::Diagonal, _) => write!(f, "anti-diagonal"),
        }
    }
}

/// A point on the drawable surface, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPoint {
    pub x: u16,
    pub y: u16,
}

impl ScreenPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Width/height pair in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle; `x`/`y` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: ScreenPoint) -> bool {
        let x = p.x as u32;
        let y = p.y as u32;
        x >= self.x as u32
            && x < self.x as u32 + self.width as u32
            && y >= self.y as u32
            && y < self.y as u32 + self.height as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Logical events produced by the input layer, once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// The user asked to leave the game
    CloseRequested,
    /// Primary pointer pressed at a surface coordinate
    PointerDown(ScreenPoint),
    /// Start a new game on the same board
    Restart,
    /// The terminal was resized to the given size
    Resize(Size),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn mark_player_roundtrip() {
        assert_eq!(Mark::default(), Mark::Empty);
        assert_eq!(Mark::Empty.player(), None);
        assert_eq!(Mark::from(Player::X).player(), Some(Player::X));
        assert_eq!(Mark::from(Player::O).player(), Some(Player::O));
        assert_eq!(Mark::Empty.glyph(), ' ');
    }

    #[test]
    fn winning_line_positions_cover_each_axis() {
        let row: Vec<_> = WinningLine::new(Axis::Row, 2).positions().collect();
        assert_eq!(row, vec![(2, 0), (2, 1), (2, 2)]);

        let col: Vec<_> = WinningLine::new(Axis::Column, 0).positions().collect();
        assert_eq!(col, vec![(0, 0), (1, 0), (2, 0)]);

        let main: Vec<_> = WinningLine::new(Axis::Diagonal, 0).positions().collect();
        assert_eq!(main, vec![(0, 0), (1, 1), (2, 2)]);

        assert!(WinningLine::new(Axis::Diagonal, 1).contains(2, 0));
        assert!(!WinningLine::new(Axis::Diagonal, 1).contains(0, 0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 5);
        assert!(r.contains(ScreenPoint::new(2, 3)));
        assert!(r.contains(ScreenPoint::new(5, 7)));
        assert!(!r.contains(ScreenPoint::new(6, 3)));
        assert!(!r.contains(ScreenPoint::new(2, 8)));
        assert!(!r.contains(ScreenPoint::new(1, 3)));
    }

    #[test]
    fn rect_near_u16_max_does_not_overflow() {
        let r = Rect::new(u16::MAX - 1, 0, 10, 1);
        assert!(r.contains(ScreenPoint::new(u16::MAX, 0)));
    }

    #[test]
    fn flash_state_fill() {
        assert!(!FlashState::None.is_filled());
        assert!(FlashState::Flashing.is_filled());
        assert!(FlashState::WonHighlight.is_filled());
    }
}
