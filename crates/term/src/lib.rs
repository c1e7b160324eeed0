//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw exactly the rectangles the board hit-tests against
//! - Pace the loop with a frame clock instead of blocking in the draw path

pub mod board_view;
pub mod fb;
pub mod frame_clock;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use board_view::{BoardView, Theme, Viewport, STATUS_ROWS};
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use frame_clock::FrameClock;
pub use renderer::TerminalRenderer;
