//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into [`crate::types::InputEvent`] and hands them to the
//! game loop in per-frame batches through the [`EventSource`] trait.

pub mod map;
pub mod source;

pub use tui_tictactoe_types as types;

pub use map::{map_event, should_quit};
pub use source::{EventSource, FrameEvents, ScriptedEvents, TerminalEvents, MAX_EVENTS_PER_FRAME};
