//! TUI tic-tac-toe (workspace facade crate).
//!
//! The game rules live in `tui_tictactoe_core`, terminal input in
//! `tui_tictactoe_input`, drawing and pacing in `tui_tictactoe_term`. This
//! package re-exports them as `tui_tictactoe::{core,input,term,types}` and adds
//! the pieces the binary is made of: the [`App`](app::App) that owns one game,
//! command-line configuration and logging setup.

pub mod app;
pub mod config;
pub mod logging;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;
