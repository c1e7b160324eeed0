//! Board module - manages the game grid
//!
//! The board is a 3x3 grid of [`Cell`]s stored in a flat, row-major array.
//! Coordinates: `(row, col)` where both range `0..BOARD_SIZE`, row 0 at the top.
//!
//! Win detection is incremental. Every successful move appends its mark to the
//! accumulator of its row, its column and (when it lies on one) each diagonal.
//! A line is won when its accumulator holds `BOARD_SIZE` identical marks, so a
//! win check only looks at `2 * BOARD_SIZE + 2` short sequences instead of
//! rescanning the grid.
//!
//! The board also owns the hit-test geometry: the drawable surface is split
//! into `BOARD_SIZE` equal columns and rows using integer division, and the
//! remainder is absorbed by the last column and the last row.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::cell::Cell;
use crate::error::{CoreError, Result};
use crate::types::{
    Axis, Mark, Player, Rect, ScreenPoint, Size, WinningLine, BOARD_SIZE, CELL_COUNT,
    DIAGONAL_COUNT,
};

/// Marks placed along one line, in placement order
pub type Accumulator = ArrayVec<Mark, BOARD_SIZE>;

/// Result of a successful [`Board::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub row: usize,
    pub col: usize,
    pub player: Player,
    /// Number of occupied cells after the move
    pub filled: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * BOARD_SIZE + col)
    cells: [Cell; CELL_COUNT],
    rows: [Accumulator; BOARD_SIZE],
    cols: [Accumulator; BOARD_SIZE],
    diags: [Accumulator; DIAGONAL_COUNT],
    filled: usize,
    winning_line: Option<WinningLine>,
    surface: Size,
}

impl Board {
    /// Create an empty board laid out over a surface of the given size
    pub fn new(surface: Size) -> Self {
        let cells = std::array::from_fn(|i| {
            let (row, col) = (i / BOARD_SIZE, i % BOARD_SIZE);
            Cell::new(row, col, cell_bounds(surface, row, col))
        });

        Self {
            cells,
            rows: std::array::from_fn(|_| ArrayVec::new()),
            cols: std::array::from_fn(|_| ArrayVec::new()),
            diags: std::array::from_fn(|_| ArrayVec::new()),
            filled: 0,
            winning_line: None,
            surface,
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Surface the geometry was computed for
    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `(row, col)`, or `None` if out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        Self::index(row, col).map(|i| &self.cells[i])
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        Self::index(row, col).map(move |i| &mut self.cells[i])
    }

    /// Map a surface coordinate to the `(row, col)` of the cell containing it.
    ///
    /// Returns `None` for points outside the surface.
    pub fn locate(&self, point: ScreenPoint) -> Option<(usize, usize)> {
        self.cell_at(point).map(Cell::position)
    }

    /// The cell whose bounds contain `point`
    pub fn cell_at(&self, point: ScreenPoint) -> Option<&Cell> {
        self.cells.iter().find(|c| c.contains(point))
    }

    pub fn filled_count(&self) -> usize {
        self.filled
    }

    pub fn is_full(&self) -> bool {
        self.filled == CELL_COUNT
    }

    /// Place `player`'s mark at `(row, col)` and record it in the accumulators.
    ///
    /// The board is left untouched on error.
    pub fn apply(&mut self, row: usize, col: usize, player: Player) -> Result<MoveReport> {
        let idx = Self::index(row, col).ok_or(CoreError::OutOfBounds { row, col })?;
        if !self.cells[idx].is_empty() {
            return Err(CoreError::CellOccupied { row, col });
        }

        let mark = Mark::from(player);
        self.cells[idx].set_mark(mark)?;
        self.filled += 1;

        push(&mut self.rows[row], mark)?;
        push(&mut self.cols[col], mark)?;
        if row == col {
            push(&mut self.diags[0], mark)?;
        }
        if row + col == BOARD_SIZE - 1 {
            push(&mut self.diags[1], mark)?;
        }

        debug!(row, col, %player, filled = self.filled, "mark placed");

        Ok(MoveReport {
            row,
            col,
            player,
            filled: self.filled,
        })
    }

    /// Return the winning line, detecting it on first call after it completes.
    ///
    /// Rows are scanned first, then columns, then diagonals; the first complete
    /// line found is recorded and returned by every later call.
    pub fn check_win(&mut self) -> Option<WinningLine> {
        if self.winning_line.is_some() {
            return self.winning_line;
        }

        let found = first_complete(&self.rows, Axis::Row)
            .or_else(|| first_complete(&self.cols, Axis::Column))
            .or_else(|| first_complete(&self.diags, Axis::Diagonal));

        if let Some(line) = found {
            debug!(%line, "winning line detected");
            self.winning_line = Some(line);
        }
        found
    }

    /// Previously detected winning line, without scanning
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Owner of the detected winning line
    pub fn winner(&self) -> Option<Player> {
        let line = self.winning_line?;
        let (row, col) = line.positions().next()?;
        self.cell(row, col)?.mark().player()
    }

    /// Every cell is occupied and no line is complete.
    pub fn is_tie(&mut self) -> bool {
        self.is_full() && self.check_win().is_none()
    }

    /// Marks accumulated along a line, in placement order
    pub fn accumulator(&self, axis: Axis, index: usize) -> Option<&[Mark]> {
        let acc = match axis {
            Axis::Row => self.rows.get(index),
            Axis::Column => self.cols.get(index),
            Axis::Diagonal => self.diags.get(index),
        };
        acc.map(|a| a.as_slice())
    }

    /// End-of-frame hook: clear single-frame flashes on every cell
    pub fn consume_flash_pulses(&mut self) {
        for cell in &mut self.cells {
            cell.consume_flash_pulse();
        }
    }

    /// Recompute cell bounds for a new surface. Game state is untouched.
    pub fn relayout(&mut self, surface: Size) {
        if surface == self.surface {
            return;
        }
        self.surface = surface;
        for cell in &mut self.cells {
            let (row, col) = cell.position();
            cell.set_bounds(cell_bounds(surface, row, col));
        }
    }

    /// Clear marks, highlights and accumulators for a new game
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
        self.rows.iter_mut().for_each(ArrayVec::clear);
        self.cols.iter_mut().for_each(ArrayVec::clear);
        self.diags.iter_mut().for_each(ArrayVec::clear);
        self.filled = 0;
        self.winning_line = None;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Size::default())
    }
}

fn push(acc: &mut Accumulator, mark: Mark) -> Result<()> {
    acc.try_push(mark)
        .map_err(|_| CoreError::InvariantViolation("line accumulator overflow"))
}

fn is_complete(acc: &Accumulator) -> bool {
    acc.len() == BOARD_SIZE && acc.iter().all(|m| *m == acc[0])
}

fn first_complete(accs: &[Accumulator], axis: Axis) -> Option<WinningLine> {
    accs.iter()
        .position(is_complete)
        .map(|index| WinningLine::new(axis, index))
}

/// Bounds of cell `(row, col)` on a surface of the given size.
///
/// Cells are `surface / BOARD_SIZE` wide and tall; the last column and the last
/// row also take the division remainder.
pub fn cell_bounds(surface: Size, row: usize, col: usize) -> Rect {
    let (x, width) = split_axis(surface.width, col);
    let (y, height) = split_axis(surface.height, row);
    Rect::new(x, y, width, height)
}

fn split_axis(extent: u16, i: usize) -> (u16, u16) {
    let step = extent / BOARD_SIZE as u16;
    let start = step * i as u16;
    if i == BOARD_SIZE - 1 {
        (start, extent - start)
    } else {
        (start, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 2), Some(2));
        assert_eq!(Board::index(1, 0), Some(3));
        assert_eq!(Board::index(2, 2), Some(8));
        assert_eq!(Board::index(3, 0), None);
        assert_eq!(Board::index(0, 3), None);
    }

    #[test]
    fn test_cell_bounds_absorb_remainder() {
        // 500x400 surface: 166 wide / 133 tall, remainder 2 and 1.
        let s = Size::new(500, 400);
        assert_eq!(cell_bounds(s, 0, 0), Rect::new(0, 0, 166, 133));
        assert_eq!(cell_bounds(s, 1, 1), Rect::new(166, 133, 166, 133));
        assert_eq!(cell_bounds(s, 2, 2), Rect::new(332, 266, 168, 134));
    }

    #[test]
    fn test_accumulators_follow_placement_order() {
        let mut board = Board::new(Size::new(9, 9));
        board.apply(0, 2, Player::X).unwrap();
        board.apply(1, 1, Player::O).unwrap();
        board.apply(2, 0, Player::X).unwrap();

        assert_eq!(board.accumulator(Axis::Row, 0), Some(&[Mark::X][..]));
        assert_eq!(board.accumulator(Axis::Column, 1), Some(&[Mark::O][..]));
        assert_eq!(
            board.accumulator(Axis::Diagonal, 1),
            Some(&[Mark::X, Mark::O, Mark::X][..])
        );
        assert_eq!(board.accumulator(Axis::Diagonal, 0), Some(&[Mark::O][..]));
        assert_eq!(board.accumulator(Axis::Diagonal, 2), None);
    }

    #[test]
    fn test_center_feeds_both_diagonals() {
        let mut board = Board::new(Size::new(9, 9));
        board.apply(1, 1, Player::X).unwrap();
        assert_eq!(board.accumulator(Axis::Diagonal, 0).unwrap().len(), 1);
        assert_eq!(board.accumulator(Axis::Diagonal, 1).unwrap().len(), 1);
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let mut board = Board::new(Size::new(9, 9));
        assert_eq!(
            board.apply(3, 0, Player::X),
            Err(CoreError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_winner_reads_line_owner() {
        let mut board = Board::new(Size::new(9, 9));
        for col in 0..3 {
            board.apply(2, col, Player::O).unwrap();
        }
        assert_eq!(board.winner(), None);
        assert_eq!(board.check_win(), Some(WinningLine::new(Axis::Row, 2)));
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_reset_keeps_geometry() {
        let mut board = Board::new(Size::new(30, 12));
        board.apply(0, 0, Player::X).unwrap();
        board.reset();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.surface(), Size::new(30, 12));
        assert!(board.cells().iter().all(Cell::is_empty));
        assert_eq!(board.accumulator(Axis::Row, 0), Some(&[][..]));
    }
}
