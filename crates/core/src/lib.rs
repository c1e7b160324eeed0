//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the tic-tac-toe rules and state. It has **no
//! dependencies** on terminal I/O, so it can be driven by a frame loop, a test,
//! or a benchmark alike.
//!
//! # Module Structure
//!
//! - [`cell`]: a single board position with its mark and flash state
//! - [`board`]: 3x3 grid, hit-test geometry and incremental win detection
//! - [`controller`]: turn order and the in-progress/over state machine
//! - [`snapshot`]: plain copy of the state for renderers
//! - [`error`]: typed errors for board and cell mutations
//!
//! # Game Rules
//!
//! - X moves first; turns alternate after every mark placed.
//! - Clicking an occupied cell, or any cell after the game has ended, does not
//!   change the game. The cell flashes for one frame instead.
//! - Three identical marks in a row, column or diagonal win. Rows are checked
//!   before columns, columns before diagonals.
//! - A full board without a winning line is a tie.
//! - The winning line stays highlighted until the game is reset.
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{GameController, GameStatus, Outcome};
//! use tui_tictactoe_types::{Axis, Player, ScreenPoint, Size, WinningLine};
//!
//! // A 30x9 surface gives 10x3 cells.
//! let mut game = GameController::new(Size::new(30, 9));
//!
//! // X takes the left column, O plays in the middle column.
//! for (x, y) in [(0, 0), (10, 0), (0, 3), (10, 3), (0, 6)] {
//!     game.handle_select(ScreenPoint::new(x, y));
//! }
//!
//! assert_eq!(
//!     game.status(),
//!     GameStatus::Over(Outcome::Win {
//!         winner: Player::X,
//!         line: WinningLine::new(Axis::Column, 0),
//!     })
//! );
//! ```
//!
//! # Frames
//!
//! Renderers read a [`GameSnapshot`] each frame and then call
//! [`GameController::end_frame`] so that a rejected-click flash is visible for
//! exactly one frame.

pub mod board;
pub mod cell;
pub mod controller;
pub mod error;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::{cell_bounds, Accumulator, Board, MoveReport};
pub use cell::Cell;
pub use controller::{GameController, GameStatus, Outcome, SelectOutcome};
pub use error::CoreError;
pub use snapshot::{CellSnapshot, GameSnapshot};
