//! Full-screen crossterm terminal that redraws only changed cells.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::style::{
    Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, queue, terminal};

use crate::buffer::{Buffer, Cell};
use crate::layout::Rect;
use crate::types::{Rgb, TextStyle};

/// Raw-mode, alternate-screen terminal with mouse capture. Restored on drop.
pub struct Terminal {
    out: Stdout,
    /// Frame being drawn.
    next: Buffer,
    /// Frame currently on screen.
    shown: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        queue!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;
        out.flush()?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            out,
            next: Buffer::new(width, height),
            shown: Buffer::new(width, height),
        })
    }

    /// Area of the whole screen as of the last frame.
    pub fn area(&self) -> Rect {
        self.next.area()
    }

    /// Wait up to `timeout` for input, then drain everything already queued.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Draw a frame and write the cells that changed since the last one.
    ///
    /// `draw` receives a cleared buffer covering the whole screen.
    pub fn render(&mut self, draw: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if (width, height) != (self.next.width(), self.next.height()) {
            log::debug!("[terminal] resized to {width}x{height}");
            self.next = Buffer::new(width, height);
            self.shown = Buffer::new(width, height);
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }

        self.next.clear();
        draw(&mut self.next);

        let mut pen = Pen::default();
        for (x, y, cell) in self.next.changes_since(&self.shown) {
            // The wide character to the left already covers it
            if cell.wide_continuation {
                continue;
            }
            queue!(self.out, cursor::MoveTo(x, y))?;
            pen.write(&mut self.out, cell)?;
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;

        std::mem::swap(&mut self.next, &mut self.shown);
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(
            self.out,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// Colours and attributes last sent to the terminal within one frame.
#[derive(Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    style: Option<TextStyle>,
}

impl Pen {
    fn write(&mut self, out: &mut impl Write, cell: &Cell) -> io::Result<()> {
        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(term_color(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(term_color(cell.bg)))?;
            self.bg = Some(cell.bg);
        }
        if self.style != Some(cell.style) {
            // Bold and dim share one reset
            queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            if cell.style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if cell.style.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(cell.style);
        }
        queue!(out, Print(cell.ch))
    }
}

fn term_color(rgb: Rgb) -> TermColor {
    TermColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
