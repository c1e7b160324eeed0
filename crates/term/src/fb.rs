//! Framebuffer and style types for terminal rendering.

use crate::types::Rect;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn glyph(self, ch: char) -> Glyph {
        Glyph { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One terminal character position: a character and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Glyph {
    fn default() -> Self {
        CellStyle::default().glyph(' ')
    }
}

/// 2D framebuffer of styled glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.glyphs.resize(len, Glyph::default());
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    /// Write one glyph; out-of-range positions are clipped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.glyph(ch));
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write a decimal number without allocating. Returns the number of glyphs written.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char, style);
        }
        len as u16
    }

    pub fn fill_rect(&mut self, rect: Rect, ch: char, style: CellStyle) {
        for dy in 0..rect.height {
            for dx in 0..rect.width {
                self.put_char(
                    rect.x.saturating_add(dx),
                    rect.y.saturating_add(dy),
                    ch,
                    style,
                );
            }
        }
    }

    /// Outline `rect` with box-drawing characters.
    ///
    /// Rectangles thinner than two glyphs in either direction are filled with
    /// the matching straight line instead.
    pub fn draw_box(&mut self, rect: Rect, style: CellStyle) {
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = rect;
        match (w, h) {
            (0, _) | (_, 0) => {}
            (1, _) => self.fill_rect(rect, '│', style),
            (_, 1) => self.fill_rect(rect, '─', style),
            _ => {
                let right = x.saturating_add(w - 1);
                let bottom = y.saturating_add(h - 1);
                for dx in 1..w - 1 {
                    self.put_char(x.saturating_add(dx), y, '─', style);
                    self.put_char(x.saturating_add(dx), bottom, '─', style);
                }
                for dy in 1..h - 1 {
                    self.put_char(x, y.saturating_add(dy), '│', style);
                    self.put_char(right, y.saturating_add(dy), '│', style);
                }
                self.put_char(x, y, '┌', style);
                self.put_char(right, y, '┐', style);
                self.put_char(x, bottom, '└', style);
                self.put_char(right, bottom, '┘', style);
            }
        }
    }

    /// Render every row as a `String`, one line per row (for tests and logs).
    pub fn to_lines(&self) -> Vec<String> {
        self.glyphs
            .chunks(self.width.max(1) as usize)
            .take(self.height as usize)
            .map(|row| row.iter().map(|g| g.ch).collect())
            .collect()
    }
}
