#![forbid(unsafe_code)]

//! Cell grid that widgets draw into and the presenter diffs.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`, row-major.
//! 2. A double-width glyph occupies its cell plus a `continuation` cell to
//!    the right; presenters skip continuation cells.
//! 3. Writes outside the grid are dropped silently.

use unicode_width::UnicodeWidthChar;

use crate::geometry::Rect;
use crate::style::{Color, Style, StyleFlags};

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub attrs: StyleFlags,
    /// Right half of a double-width glyph.
    pub continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            attrs: StyleFlags::empty(),
            continuation: false,
        }
    }
}

impl Cell {
    pub fn from_char(ch: char) -> Self {
        Self {
            ch,
            ..Self::default()
        }
    }

    /// Apply the set fields of `style`.
    pub fn apply(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = fg;
        }
        if let Some(bg) = style.bg {
            self.bg = bg;
        }
        if let Some(attrs) = style.attrs {
            self.attrs |= attrs;
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.apply(style);
        self
    }
}

/// A width × height grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
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
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Overwrite every cell of `area` (clipped) with `cell`.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let area = area.intersection(&self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Apply `style` to every cell of `area` without touching glyphs.
    pub fn set_style(&mut self, area: Rect, style: Style) {
        if style.is_empty() {
            return;
        }
        let area = area.intersection(&self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.apply(style);
                }
            }
        }
    }

    /// Write `text` from `(x, y)`, stopping before `max_x`.
    ///
    /// Zero-width and control characters are skipped. A double-width glyph
    /// that would straddle `max_x` is not drawn. Returns the x after the
    /// last written cell.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        let mut cx = x;
        for ch in text.chars() {
            let w = match ch.width() {
                Some(w) if w > 0 => w as u16,
                _ => continue,
            };
            if cx.saturating_add(w) > max_x {
                break;
            }
            if let Some(cell) = self.get_mut(cx, y) {
                cell.ch = ch;
                cell.continuation = false;
                cell.apply(style);
            }
            if w == 2
                && let Some(cell) = self.get_mut(cx + 1, y)
            {
                cell.ch = ' ';
                cell.continuation = true;
                cell.apply(style);
            }
            cx += w;
        }
        cx
    }

    /// Reset every cell to the default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Row `y` as plain text, continuation cells omitted.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.continuation)
            .map(|c| c.ch)
            .collect()
    }

    /// Every row as plain text, trailing spaces trimmed.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect()
    }

    /// Positions whose cells differ from `prev`, row-major.
    ///
    /// A size mismatch reports every cell.
    pub fn diff(&self, prev: &Buffer) -> Vec<(u16, u16)> {
        let same_size = self.width == prev.width && self.height == prev.height;
        let mut changed = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if !same_size || self.get(x, y) != prev.get(x, y) {
                    changed.push((x, y));
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_string_clips_at_max_x() {
        let mut buf = Buffer::new(10, 1);
        let end = buf.set_string(2, 0, "budget", Style::default(), 6);
        assert_eq!(end, 6);
        assert_eq!(buf.row_text(0), "  budg    ");
    }

    #[test]
    fn wide_glyph_uses_continuation() {
        let mut buf = Buffer::new(4, 1);
        buf.set_string(0, 0, "日x", Style::default(), 4);
        assert!(buf.get(1, 0).unwrap().continuation);
        assert_eq!(buf.row_text(0), "日x ");
    }

    #[test]
    fn wide_glyph_not_split_at_edge() {
        let mut buf = Buffer::new(3, 1);
        let end = buf.set_string(2, 0, "日", Style::default(), 3);
        assert_eq!(end, 2);
        assert_eq!(buf.row_text(0), "   ");
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut buf = Buffer::new(2, 2);
        buf.set(5, 5, Cell::from_char('x'));
        buf.fill(Rect::new(1, 1, 10, 10), Cell::from_char('#'));
        assert_eq!(buf.to_lines(), vec!["".to_string(), " #".to_string()]);
    }

    #[test]
    fn diff_reports_changed_cells() {
        let prev = Buffer::new(3, 2);
        let mut next = prev.clone();
        next.set(2, 1, Cell::from_char('z'));
        assert_eq!(next.diff(&prev), vec![(2, 1)]);
        assert_eq!(Buffer::new(1, 1).diff(&prev).len(), 1);
    }

    #[test]
    fn set_style_keeps_glyphs() {
        let mut buf = Buffer::new(3, 1);
        buf.set_string(0, 0, "abc", Style::default(), 3);
        buf.set_style(buf.area(), Style::new().bold());
        assert_eq!(buf.row_text(0), "abc");
        assert!(buf.get(0, 0).unwrap().attrs.contains(StyleFlags::BOLD));
    }
}
