//! Game controller - turn order and the in-progress/over state machine
//!
//! The controller owns the [`Board`] and decides what a click means:
//!
//! - a click outside every cell is ignored;
//! - a click on an occupied cell, or any click once the game is over, only
//!   flashes the cell for one frame;
//! - a click on an empty cell places the current player's mark, then the
//!   controller checks for a win (highlighting the winning line), a tie, or
//!   hands the turn to the other player.

use tracing::{debug, error, info, instrument};

use crate::board::{Board, MoveReport};
use crate::error::CoreError;
use crate::snapshot::{CellSnapshot, GameSnapshot};
use crate::types::{Player, ScreenPoint, Size, WinningLine};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win { winner: Player, line: WinningLine },
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Over(Outcome),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

/// What [`GameController::handle_select`] did with a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The point is not on the board
    Ignored,
    /// The click could not place a mark; the cell flashes for one frame
    Flashed { row: usize, col: usize },
    /// A mark was placed; `status` is the state after the move
    Placed {
        report: MoveReport,
        status: GameStatus,
    },
    /// The board refused a move the controller considered legal
    Rejected(CoreError),
}

#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    turn: Player,
    status: GameStatus,
    /// Completed resets since start (the first game is game 0)
    games_played: u32,
}

impl GameController {
    /// New game on a surface of the given size; X moves first
    pub fn new(surface: Size) -> Self {
        Self {
            board: Board::new(surface),
            turn: Player::X,
            status: GameStatus::InProgress,
            games_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Player whose mark the next successful click places
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn move_count(&self) -> usize {
        self.board.filled_count()
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Route a pointer press to the board.
    #[instrument(level = "trace", skip(self))]
    pub fn handle_select(&mut self, point: ScreenPoint) -> SelectOutcome {
        let Some((row, col)) = self.board.locate(point) else {
            return SelectOutcome::Ignored;
        };

        let occupied = self
            .board
            .cell(row, col)
            .map_or(true, |cell| !cell.is_empty());

        if self.status.is_over() || occupied {
            if let Some(cell) = self.board.cell_mut(row, col) {
                cell.request_flash(false);
            }
            debug!(row, col, over = self.status.is_over(), "click rejected");
            return SelectOutcome::Flashed { row, col };
        }

        match self.board.apply(row, col, self.turn) {
            Ok(report) => {
                let status = self.settle();
                SelectOutcome::Placed { report, status }
            }
            Err(err) => {
                // Occupancy was checked above, so this is a bug in the board.
                error!(%err, row, col, "board rejected a pre-checked move");
                debug_assert!(false, "board rejected a pre-checked move: {err}");
                SelectOutcome::Rejected(err)
            }
        }
    }

    /// Decide the game state after a successful move.
    fn settle(&mut self) -> GameStatus {
        if let Some(line) = self.board.check_win() {
            let winner = self.board.winner().unwrap_or(self.turn);
            for (row, col) in line.positions() {
                if let Some(cell) = self.board.cell_mut(row, col) {
                    cell.request_flash(true);
                }
            }
            self.status = GameStatus::Over(Outcome::Win { winner, line });
            info!(%winner, %line, moves = self.move_count(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Over(Outcome::Tie);
            info!(moves = self.move_count(), "game tied");
        } else {
            self.turn = self.turn.opponent();
        }
        self.status
    }

    /// Start a new game on the same geometry. X moves first again.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Player::X;
        self.status = GameStatus::InProgress;
        self.games_played = self.games_played.wrapping_add(1);
        info!(game = self.games_played, "new game");
    }

    /// Re-derive cell bounds for a resized surface
    pub fn relayout(&mut self, surface: Size) {
        if surface != self.board.surface() {
            debug!(width = surface.width, height = surface.height, "relayout");
        }
        self.board.relayout(surface);
    }

    /// Call once after each rendered frame so flashes last a single frame.
    pub fn end_frame(&mut self) {
        self.board.consume_flash_pulses();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.surface = self.board.surface();
        for (slot, cell) in out.cells.iter_mut().zip(self.board.cells()) {
            *slot = CellSnapshot::from(cell);
        }
        out.turn = self.turn;
        out.status = self.status;
        out.moves = self.move_count();
        out.games_played = self.games_played;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Axis, FlashState, Mark, BOARD_SIZE};

    // 3x3 surface: cell (row, col) is exactly the point (col, row).
    fn game() -> GameController {
        GameController::new(Size::new(BOARD_SIZE as u16, BOARD_SIZE as u16))
    }

    fn click(g: &mut GameController, row: u16, col: u16) -> SelectOutcome {
        g.handle_select(ScreenPoint::new(col, row))
    }

    #[test]
    fn test_new_game_state() {
        let g = game();
        assert_eq!(g.turn(), Player::X);
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.move_count(), 0);
        assert_eq!(g.games_played(), 0);
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let mut g = game();
        assert_eq!(
            g.handle_select(ScreenPoint::new(3, 0)),
            SelectOutcome::Ignored
        );
        assert_eq!(g.turn(), Player::X);
    }

    #[test]
    fn test_place_alternates_turn() {
        let mut g = game();
        let out = click(&mut g, 0, 0);
        assert!(matches!(
            out,
            SelectOutcome::Placed {
                report: MoveReport {
                    player: Player::X,
                    filled: 1,
                    ..
                },
                status: GameStatus::InProgress
            }
        ));
        assert_eq!(g.turn(), Player::O);
        assert_eq!(g.board().cell(0, 0).unwrap().mark(), Mark::X);
    }

    #[test]
    fn test_row_win_highlights_line() {
        let mut g = game();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            click(&mut g, r, c);
        }
        let line = WinningLine::new(Axis::Row, 0);
        assert_eq!(
            g.status(),
            GameStatus::Over(Outcome::Win {
                winner: Player::X,
                line
            })
        );
        for cell in g.board().cells() {
            let expected = if line.contains(cell.row(), cell.col()) {
                FlashState::WonHighlight
            } else {
                FlashState::None
            };
            assert_eq!(cell.flash(), expected);
        }
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut g = game();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            click(&mut g, r, c);
        }
        g.reset();
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.turn(), Player::X);
        assert_eq!(g.games_played(), 1);
        assert!(g
            .board()
            .cells()
            .iter()
            .all(|c| c.is_empty() && c.flash() == FlashState::None));
        assert_eq!(g.board_mut().check_win(), None);
    }

    #[test]
    fn test_snapshot_mirrors_board() {
        let mut g = game();
        click(&mut g, 2, 1);
        click(&mut g, 2, 1);
        let snap = g.snapshot();
        let cell = snap.cell(2, 1).unwrap();
        assert_eq!(cell.mark, Mark::X);
        assert_eq!(cell.flash, FlashState::Flashing);
        assert_eq!(snap.turn, Player::O);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.surface, Size::new(3, 3));
    }
}
