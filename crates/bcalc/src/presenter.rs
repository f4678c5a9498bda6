#![forbid(unsafe_code)]

//! Turns buffers into terminal output.
//!
//! The presenter keeps the last buffer it drew and only emits cells that
//! changed. A size change (or [`Presenter::invalidate`]) forces a full
//! redraw. Cursor moves are skipped when the next changed cell directly
//! follows the previous one, and style escapes are emitted only when the
//! style changes.

use std::io::{self, Write};

use bcalc_widgets::{Buffer, Cell, Color, StyleFlags};
use crossterm::style::{
    Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, queue, terminal};

/// Colors and attributes currently active on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pen {
    fg: Color,
    bg: Color,
    attrs: StyleFlags,
}

impl Pen {
    fn of(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

const RESET_PEN: Pen = Pen {
    fg: Color::Reset,
    bg: Color::Reset,
    attrs: StyleFlags::empty(),
};

pub struct Presenter<W: Write> {
    out: W,
    prev: Option<Buffer>,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, prev: None }
    }

    /// Forget the previous frame so the next present redraws everything.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draw `buf`, returning how many cells were written.
    pub fn present(&mut self, buf: &Buffer) -> io::Result<usize> {
        let full = match &self.prev {
            Some(prev) => prev.width() != buf.width() || prev.height() != buf.height(),
            None => true,
        };
        let changed = match (&self.prev, full) {
            (Some(prev), false) => buf.diff(prev),
            _ => (0..buf.height())
                .flat_map(|y| (0..buf.width()).map(move |x| (x, y)))
                .collect(),
        };

        if full {
            queue!(
                self.out,
                SetAttribute(Attribute::Reset),
                terminal::Clear(terminal::ClearType::All)
            )?;
        }

        let mut pen = RESET_PEN;
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut written = 0usize;

        for (x, y) in changed {
            let Some(cell) = buf.get(x, y) else {
                continue;
            };
            if cell.continuation {
                continue;
            }
            if cursor_at != Some((x, y)) {
                queue!(self.out, cursor::MoveTo(x, y))?;
            }
            let next = Pen::of(cell);
            if next != pen {
                self.apply_pen(pen, next)?;
                pen = next;
            }
            queue!(self.out, Print(cell.ch))?;
            let width = if buf.get(x + 1, y).is_some_and(|c| c.continuation) { 2 } else { 1 };
            cursor_at = Some((x + width, y));
            written += 1;
        }

        if pen != RESET_PEN {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
        }
        if written > 0 || full {
            self.out.flush()?;
        }

        tracing::trace!(cells = written, full, "frame presented");
        self.prev = Some(buf.clone());
        Ok(written)
    }

    fn apply_pen(&mut self, from: Pen, to: Pen) -> io::Result<()> {
        let mut from = from;
        // Attributes can only be cleared wholesale, which also resets colors.
        if !to.attrs.contains(from.attrs) {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
            from = RESET_PEN;
        }
        for (flag, attr) in ATTRIBUTES {
            if to.attrs.contains(flag) && !from.attrs.contains(flag) {
                queue!(self.out, SetAttribute(attr))?;
            }
        }
        if to.fg != from.fg {
            queue!(self.out, SetForegroundColor(term_color(to.fg)))?;
        }
        if to.bg != from.bg {
            queue!(self.out, SetBackgroundColor(term_color(to.bg)))?;
        }
        Ok(())
    }
}

const ATTRIBUTES: [(StyleFlags, Attribute); 5] = [
    (StyleFlags::BOLD, Attribute::Bold),
    (StyleFlags::DIM, Attribute::Dim),
    (StyleFlags::ITALIC, Attribute::Italic),
    (StyleFlags::UNDERLINE, Attribute::Underlined),
    (StyleFlags::REVERSE, Attribute::Reverse),
];

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
    }
}
