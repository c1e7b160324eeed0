//! The running application: one game, its view, and the per-frame sequence.
//!
//! Each frame:
//!
//! 1. drain the input source and apply its events in arrival order;
//! 2. render a snapshot of the game into the framebuffer;
//! 3. hand the framebuffer to the presenter (the terminal, or a test);
//! 4. end the frame on the game, which clears single-frame flashes.
//!
//! Pacing is left to the caller so that tests can run frames back to back.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::core::{GameController, GameSnapshot, SelectOutcome};
use crate::input::{EventSource, FrameEvents};
use crate::term::{BoardView, FrameBuffer, Viewport};
use crate::types::{InputEvent, BOARD_SIZE};

/// Whether the loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Close,
}

pub struct App {
    game: GameController,
    view: BoardView,
    viewport: Viewport,
    snapshot: GameSnapshot,
    events: FrameEvents,
    fb: FrameBuffer,
    frames: u64,
}

impl App {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_view(viewport, BoardView::default())
    }

    pub fn with_view(viewport: Viewport, view: BoardView) -> Self {
        let game = GameController::new(view.board_surface(viewport));
        Self {
            game,
            view,
            viewport,
            snapshot: GameSnapshot::default(),
            events: FrameEvents::new(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            frames: 0,
        }
    }

    pub fn game(&self) -> &GameController {
        &self.game
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Adopt a new terminal size; the board is laid out again, the game kept.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        let surface = self.view.board_surface(viewport);
        if (surface.width as usize) < BOARD_SIZE || (surface.height as usize) < BOARD_SIZE {
            warn!(
                width = viewport.width,
                height = viewport.height,
                "terminal too small for the board"
            );
        }
        self.game.relayout(surface);
    }

    /// Apply one input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::CloseRequested => {
                info!(frames = self.frames, "close requested");
                return Flow::Close;
            }
            InputEvent::PointerDown(point) => {
                if let SelectOutcome::Placed { report, status } = self.game.handle_select(point) {
                    debug!(?report, ?status, "move applied");
                }
            }
            InputEvent::Restart => self.game.reset(),
            InputEvent::Resize(size) => self.resize(Viewport::new(size.width, size.height)),
        }
        Flow::Continue
    }

    /// Drain one frame of input. Events after a close request are dropped.
    pub fn process_input<S: EventSource>(&mut self, source: &mut S) -> Result<Flow> {
        source.poll_frame(&mut self.events)?;
        let events = std::mem::take(&mut self.events);
        let mut flow = Flow::Continue;
        for event in &events {
            if self.handle_event(*event) == Flow::Close {
                flow = Flow::Close;
                break;
            }
        }
        self.events = events;
        Ok(flow)
    }

    /// Render the current state into the app's framebuffer.
    pub fn render(&mut self) -> &mut FrameBuffer {
        self.game.snapshot_into(&mut self.snapshot);
        self.view
            .render_into(&self.snapshot, self.viewport, &mut self.fb);
        &mut self.fb
    }

    /// Run one complete frame; `present` receives the rendered framebuffer.
    pub fn frame<S, P>(&mut self, source: &mut S, present: P) -> Result<Flow>
    where
        S: EventSource,
        P: FnOnce(&mut FrameBuffer) -> Result<()>,
    {
        if self.process_input(source)? == Flow::Close {
            return Ok(Flow::Close);
        }
        present(self.render())?;
        self.game.end_frame();
        self.frames += 1;
        Ok(Flow::Continue)
    }
}
