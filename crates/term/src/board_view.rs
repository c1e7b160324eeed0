//! BoardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: the board takes the whole viewport except the bottom row, which is
//! the status line. Cell rectangles come straight from the snapshot, so what is
//! drawn is exactly what the board hit-tests against.

use crate::core::{CellSnapshot, GameSnapshot, GameStatus, Outcome};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Axis, FlashState, Mark, Player, Rect, Size, WinningLine};

/// Rows reserved below the board for the status line
pub const STATUS_ROWS: u16 = 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: CellStyle,
    pub outline: CellStyle,
    pub flash_bg: Rgb,
    pub won_bg: Rgb,
    pub x_fg: Rgb,
    pub o_fg: Rgb,
    pub status: CellStyle,
    pub status_hint: CellStyle,
}

impl Default for Theme {
    fn default() -> Self {
        let bg = Rgb::new(0, 0, 0);
        Self {
            background: CellStyle::new(Rgb::new(220, 220, 220), bg),
            outline: CellStyle::new(Rgb::new(255, 255, 255), bg),
            flash_bg: Rgb::new(255, 255, 255),
            won_bg: Rgb::new(240, 200, 80),
            x_fg: Rgb::new(235, 90, 90),
            o_fg: Rgb::new(90, 160, 235),
            status: CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(30, 30, 40)).bold(),
            status_hint: CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(30, 30, 40)),
        }
    }
}

const BIG_X: [&str; 3] = ["╲ ╱", " ╳ ", "╱ ╲"];
const BIG_O: [&str; 3] = ["╭─╮", "│ │", "╰─╯"];

/// Terminal renderer for the tic-tac-toe board.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    theme: Theme,
}

impl BoardView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Drawable area handed to the board for a given viewport.
    pub fn board_surface(&self, viewport: Viewport) -> Size {
        Size::new(
            viewport.width,
            viewport.height.saturating_sub(STATUS_ROWS),
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.theme.background.glyph(' '));

        for cell in &snap.cells {
            self.draw_cell(fb, cell);
        }

        if viewport.height >= STATUS_ROWS {
            self.draw_status(fb, snap, viewport.width, viewport.height - STATUS_ROWS);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, cell: &CellSnapshot) {
        let bounds = cell.bounds;
        if bounds.is_empty() {
            return;
        }

        let fill = match cell.flash {
            FlashState::None => None,
            FlashState::Flashing => Some(self.theme.flash_bg),
            FlashState::WonHighlight => Some(self.theme.won_bg),
        };

        let mark_fg = match cell.mark {
            Mark::X => self.theme.x_fg,
            Mark::O => self.theme.o_fg,
            Mark::Empty => self.theme.background.fg,
        };

        let mark_style = match fill {
            Some(bg) => {
                fb.fill_rect(bounds, ' ', CellStyle::new(Rgb::new(0, 0, 0), bg));
                CellStyle::new(Rgb::new(0, 0, 0), bg).bold()
            }
            None => {
                fb.draw_box(bounds, self.theme.outline);
                CellStyle::new(mark_fg, self.theme.background.bg).bold()
            }
        };

        if let Some(player) = cell.mark.player() {
            draw_mark(fb, bounds, player, mark_style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, width: u16, y: u16) {
        fb.fill_rect(Rect::new(0, y, width, STATUS_ROWS), ' ', self.theme.status);

        let mut line = StatusLine { fb, x: 1, y };
        let (em, hint) = (self.theme.status, self.theme.status_hint);
        match snap.status {
            GameStatus::InProgress => {
                line.glyph(snap.turn.glyph(), em);
                line.text(" to move", em);
                line.text("  move ", hint);
                line.number(snap.moves as u32 + 1, hint);
                line.text("  click a cell · r restart · q quit", hint);
            }
            GameStatus::Over(Outcome::Win { winner, line: won }) => {
                line.glyph(winner.glyph(), em);
                line.text(" wins on ", em);
                line.line_name(won, em);
                line.text("  r new game · q quit", hint);
            }
            GameStatus::Over(Outcome::Tie) => {
                line.text("Tie game", em);
                line.text("  r new game · q quit", hint);
            }
        }
    }
}

/// Draw the mark centered in `bounds`: a 3x3 figure when the cell interior
/// fits one, a single character otherwise.
fn draw_mark(fb: &mut FrameBuffer, bounds: Rect, player: Player, style: CellStyle) {
    if bounds.width >= 5 && bounds.height >= 5 {
        let art = match player {
            Player::X => &BIG_X,
            Player::O => &BIG_O,
        };
        let x = bounds.x + (bounds.width - 3) / 2;
        let y = bounds.y + (bounds.height - 3) / 2;
        for (dy, row) in art.iter().enumerate() {
            fb.put_str(x, y + dy as u16, row, style);
        }
    } else {
        fb.put_char(
            bounds.x + bounds.width / 2,
            bounds.y + bounds.height / 2,
            player.glyph(),
            style,
        );
    }
}

struct StatusLine<'a> {
    fb: &'a mut FrameBuffer,
    x: u16,
    y: u16,
}

impl StatusLine<'_> {
    fn text(&mut self, s: &str, style: CellStyle) {
        self.fb.put_str(self.x, self.y, s, style);
        self.x = self.x.saturating_add(s.chars().count() as u16);
    }

    fn glyph(&mut self, ch: char, style: CellStyle) {
        self.fb.put_char(self.x, self.y, ch, style);
        self.x = self.x.saturating_add(1);
    }

    fn number(&mut self, n: u32, style: CellStyle) {
        let written = self.fb.put_u32(self.x, self.y, n, style);
        self.x = self.x.saturating_add(written);
    }

    fn line_name(&mut self, line: WinningLine, style: CellStyle) {
        match (line.axis, line.index) {
            (Axis::Row, i) => {
                self.text("row ", style);
                self.number(i as u32 + 1, style);
            }
            (Axis::Column, i) => {
                self.text("column ", style);
                self.number(i as u32 + 1, style);
            }
            (Axis::Diagonal, 0) => self.text("the main diagonal", style),
            (Axis::Diagonal, _) => self.text("the anti-diagonal", style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameController;
    use crate::types::ScreenPoint;

    #[test]
    fn board_surface_reserves_status_row() {
        let view = BoardView::default();
        assert_eq!(view.board_surface(Viewport::new(30, 10)), Size::new(30, 9));
        assert_eq!(view.board_surface(Viewport::new(30, 0)), Size::new(30, 0));
    }

    #[test]
    fn small_cells_use_single_glyph() {
        let view = BoardView::default();
        let vp = Viewport::new(12, 10);
        let mut game = GameController::new(view.board_surface(vp));
        // Cell (0, 0) is 4x3 at the origin.
        game.handle_select(ScreenPoint::new(0, 0));
        let fb = view.render(&game.snapshot(), vp);
        assert_eq!(fb.get(2, 1).unwrap().ch, 'X');
    }

    #[test]
    fn large_cells_use_figure() {
        let view = BoardView::default();
        let vp = Viewport::new(30, 16);
        let mut game = GameController::new(view.board_surface(vp));
        // 10x5 cells; O plays the center after X takes a corner.
        game.handle_select(ScreenPoint::new(0, 0));
        game.handle_select(ScreenPoint::new(15, 7));
        let fb = view.render(&game.snapshot(), vp);
        // Cell (1, 1) spans x 10..20, y 5..10: figure top-left at (13, 6).
        assert_eq!(fb.get(13, 6).unwrap().ch, '╭');
        assert_eq!(fb.get(14, 7).unwrap().ch, ' ');
        assert_eq!(fb.get(15, 8).unwrap().ch, '╯');
        // Cell (0, 0) spans x 0..10, y 0..5: figure top-left at (3, 1).
        assert_eq!(fb.get(3, 1).unwrap().ch, '╲');
        assert_eq!(fb.get(4, 2).unwrap().ch, '╳');
    }
}
