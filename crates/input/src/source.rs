//! Per-frame event sources.
//!
//! The game loop asks its source for the events of one frame, processes them in
//! arrival order, renders, and asks again. Batches are fixed-capacity so the
//! loop never allocates; anything past capacity waits for the next frame.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event;

use crate::map::map_event;
use crate::types::InputEvent;

/// Maximum events handed to the game in one frame
pub const MAX_EVENTS_PER_FRAME: usize = 32;

pub type FrameEvents = ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>;

/// Something that produces the input events for a frame.
pub trait EventSource {
    /// Replace the contents of `out` with the events that arrived since the
    /// previous call. Must not block.
    fn poll_frame(&mut self, out: &mut FrameEvents) -> Result<()>;
}

/// Events read from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl TerminalEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for TerminalEvents {
    fn poll_frame(&mut self, out: &mut FrameEvents) -> Result<()> {
        out.clear();
        while !out.is_full() && event::poll(Duration::ZERO)? {
            if let Some(ev) = map_event(event::read()?) {
                out.push(ev);
            }
        }
        Ok(())
    }
}

/// Pre-recorded frames of events, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<VecDeque<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one frame's worth of events.
    pub fn frame(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.frames.push_back(events.into_iter().collect());
        self
    }

    /// Number of frames not yet delivered
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_frame(&mut self, out: &mut FrameEvents) -> Result<()> {
        out.clear();
        let Some(front) = self.frames.front_mut() else {
            return Ok(());
        };
        while !out.is_full() {
            match front.pop_front() {
                Some(ev) => out.push(ev),
                None => break,
            }
        }
        if front.is_empty() {
            self.frames.pop_front();
        }
        Ok(())
    }
}
