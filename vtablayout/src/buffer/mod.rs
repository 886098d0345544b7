//! Grid of styled terminal cells.
//!
//! The strip renderer paints into a [`Buffer`]; the terminal compares two
//! buffers and writes only the cells that changed. Writes outside the grid are
//! dropped.

use crate::layout::Rect;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a double-width character drawn in the cell before.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

/// Foreground, optional background and style applied to drawn text.
///
/// Without a background the text keeps whatever is already under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    pub fg: Rgb,
    pub bg: Option<Rgb>,
    pub style: TextStyle,
}

impl Brush {
    pub const fn new(fg: Rgb, style: TextStyle) -> Self {
        Self {
            fg,
            bg: None,
            style,
        }
    }

    pub const fn on(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.offset(x, y).map(|i| &mut self.cells[i])
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Set the background of `width` cells starting at `x`, keeping their text.
    pub fn paint_bg(&mut self, x: u16, y: u16, width: u16, bg: Rgb) {
        for x in x..x.saturating_add(width) {
            match self.get_mut(x, y) {
                Some(cell) => cell.bg = bg,
                None => break,
            }
        }
    }

    /// Replace the glyph and foreground of a cell, keeping its background.
    pub fn put_glyph(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.ch = ch;
            cell.fg = fg;
            cell.wide_continuation = false;
        }
    }

    /// Draw `text` from `x`, stopping before a character would cross `right`.
    ///
    /// Zero-width characters are skipped. Returns the column after the last
    /// drawn character.
    pub fn put_str(&mut self, x: u16, y: u16, right: u16, text: &str, brush: Brush) -> u16 {
        let mut x = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if x.saturating_add(w) > right {
                break;
            }

            let Some(cell) = self.get_mut(x, y) else {
                break;
            };
            let bg = brush.bg.unwrap_or(cell.bg);
            *cell = Cell {
                ch,
                fg: brush.fg,
                bg,
                style: brush.style,
                wide_continuation: false,
            };

            if w == 2 {
                if let Some(next) = self.get_mut(x + 1, y) {
                    *next = Cell {
                        ch: ' ',
                        fg: brush.fg,
                        bg,
                        style: brush.style,
                        wide_continuation: true,
                    };
                }
            }
            x = x.saturating_add(w);
        }
        x
    }

    /// Visible text of row `y`, without wide-character continuations.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.ch)
            .collect()
    }

    /// Cells of `self` that differ from `previous`, with their coordinates.
    ///
    /// Both buffers must have the same size.
    pub fn changes_since<'a>(
        &'a self,
        previous: &'a Buffer,
    ) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }
}
