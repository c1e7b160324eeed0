use std::thread;
use std::time::{Duration, Instant};

use crate::types::MAX_FPS;

/// Caps the game loop at a fixed number of frames per second.
///
/// Like a classic game clock `tick`: each call waits until at least one frame
/// interval has passed since the previous call returned. A slow frame is not
/// made up for later.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    /// `fps` is clamped to `1..=MAX_FPS`.
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, start: Instant) -> Self {
        let fps = fps.clamp(1, MAX_FPS);
        Self {
            frame: Duration::from_secs(1) / fps,
            last: start,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// How long to wait at `now`, and mark the frame as finished.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let wait = (self.last + self.frame).saturating_duration_since(now);
        self.last = now + wait;
        wait
    }

    /// Sleep out the rest of the current frame.
    pub fn tick(&mut self) {
        let wait = self.tick_at(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}
