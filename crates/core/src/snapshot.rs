use crate::cell::Cell;
use crate::controller::GameStatus;
use crate::types::{FlashState, Mark, Player, Rect, Size, BOARD_SIZE, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSnapshot {
    pub row: usize,
    pub col: usize,
    pub bounds: Rect,
    pub mark: Mark,
    pub flash: FlashState,
}

impl From<&Cell> for CellSnapshot {
    fn from(value: &Cell) -> Self {
        Self {
            row: value.row(),
            col: value.col(),
            bounds: value.bounds(),
            mark: value.mark(),
            flash: value.flash(),
        }
    }
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub surface: Size,
    /// Row-major, like the board
    pub cells: [CellSnapshot; CELL_COUNT],
    pub turn: Player,
    pub status: GameStatus,
    pub moves: usize,
    pub games_played: u32,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellSnapshot> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        self.cells.get(row * BOARD_SIZE + col)
    }

    pub fn playable(&self) -> bool {
        !self.status.is_over()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            surface: Size::default(),
            cells: std::array::from_fn(|i| CellSnapshot {
                row: i / BOARD_SIZE,
                col: i % BOARD_SIZE,
                ..CellSnapshot::default()
            }),
            turn: Player::X,
            status: GameStatus::InProgress,
            moves: 0,
            games_played: 0,
        }
    }
}
