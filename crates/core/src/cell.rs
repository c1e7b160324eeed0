//! Cell module - a single board position
//!
//! A cell knows where it sits on the grid and on the drawable surface, which
//! mark occupies it, and how it should be highlighted on the next frame.

use crate::error::{CoreError, Result};
use crate::types::{FlashState, Mark, Rect, ScreenPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    bounds: Rect,
    mark: Mark,
    flash: FlashState,
}

impl Cell {
    pub fn new(row: usize, col: usize, bounds: Rect) -> Self {
        Self {
            row,
            col,
            bounds,
            mark: Mark::Empty,
            flash: FlashState::None,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn flash(&self) -> FlashState {
        self.flash
    }

    pub fn is_empty(&self) -> bool {
        self.mark.is_empty()
    }

    /// Is the point inside this cell's bounds?
    pub fn contains(&self, point: ScreenPoint) -> bool {
        self.bounds.contains(point)
    }

    /// Place a mark. Legality (turn order, game over) is the caller's job;
    /// this only refuses to overwrite an existing mark.
    pub fn set_mark(&mut self, mark: Mark) -> Result<()> {
        if !self.mark.is_empty() {
            return Err(CoreError::InvalidState {
                row: self.row,
                col: self.col,
            });
        }
        self.mark = mark;
        Ok(())
    }

    /// Ask for highlight on the next frame.
    ///
    /// `is_winning_cell == false` requests a single-frame pulse; `true` pins the
    /// cell as part of the winning line until [`Cell::clear`]. A pulse never
    /// downgrades a pinned highlight.
    pub fn request_flash(&mut self, is_winning_cell: bool) {
        if is_winning_cell {
            self.flash = FlashState::WonHighlight;
        } else if self.flash != FlashState::WonHighlight {
            self.flash = FlashState::Flashing;
        }
    }

    /// Called once per rendered frame, after the cell has been drawn.
    pub fn consume_flash_pulse(&mut self) {
        if self.flash == FlashState::Flashing {
            self.flash = FlashState::None;
        }
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Forget mark and highlight (new game).
    pub fn clear(&mut self) {
        self.mark = Mark::Empty;
        self.flash = FlashState::None;
    }
}
