//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame, and any frame after a size change, is a full redraw. Every
//! other frame only rewrites the runs of glyphs that differ from the previous
//! frame.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into an arbitrary writer (a byte buffer in tests).
    pub fn with_writer(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Switch to the alternate screen in raw mode with mouse reporting on.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(EnableMouseCapture)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.out.flush()?;
        Ok(())
    }

    /// Undo [`enter`](Self::enter). Safe to call after a partial `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(DisableMouseCapture)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. After the
    /// call it holds the previous frame, ready to be overwritten.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.diff_redraw(fb, &prev)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            _ => {
                self.full_redraw(fb)?;
                self.last = Some(fb.clone());
            }
        }
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;

        let mut current_style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            self.out.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let glyph = fb.get(x, y).unwrap_or_default();
                if current_style != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    current_style = Some(glyph.style);
                }
                self.out.queue(Print(glyph.ch))?;
            }
        }

        self.finish()
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut current_style: Option<CellStyle> = None;

        for (x, y, len) in changed_runs(prev, next) {
            self.out.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let glyph = next.get(x + dx, y).unwrap_or_default();
                if current_style != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    current_style = Some(glyph.style);
                }
                self.out.queue(Print(glyph.ch))?;
            }
        }

        self.finish()
    }

    fn finish(&mut self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Runs of changed glyphs between two equally sized frames, as `(x, y, len)`.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let w = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < w && !differs(x) {
                x += 1;
            }
            if x >= w {
                return None;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}
