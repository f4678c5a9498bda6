#![forbid(unsafe_code)]

use crate::borders::{BorderType, Borders};
use crate::buffer::{Buffer, Cell};
use crate::geometry::Rect;
use crate::style::Style;
use crate::{Widget, draw_text_span, set_style_area, text_width};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// X offset of a `content`-wide run inside `available` cells.
    pub fn offset(self, available: u16, content: u16) -> u16 {
        let slack = available.saturating_sub(content);
        match self {
            Alignment::Left => 0,
            Alignment::Center => slack / 2,
            Alignment::Right => slack,
        }
    }
}

/// A frame with optional borders and a title on the top edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    borders: Borders,
    border_style: Style,
    border_type: BorderType,
    title: Option<&'a str>,
    title_alignment: Alignment,
    title_style: Style,
    style: Style,
}

impl<'a> Block<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bordered() -> Self {
        Self::default().borders(Borders::ALL)
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    /// Style for the title, layered over the border style.
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    /// Base style painted over the whole block area.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The area left inside the borders.
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = area;
        if self.borders.contains(Borders::LEFT) {
            inner.x = inner.x.saturating_add(1);
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::TOP) {
            inner.y = inner.y.saturating_add(1);
            inner.height = inner.height.saturating_sub(1);
        }
        if self.borders.contains(Borders::RIGHT) {
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::BOTTOM) {
            inner.height = inner.height.saturating_sub(1);
        }
        inner
    }

    fn border_cell(&self, c: char) -> Cell {
        Cell::from_char(c).with_style(self.style.patch(self.border_style))
    }

    fn render_borders(&self, area: Rect, buf: &mut Buffer) {
        let set = self.border_type.border_set();
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                buf.set(area.x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            for y in area.y..area.bottom() {
                buf.set(right, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                buf.set(x, area.y, self.border_cell(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            for x in area.x..area.right() {
                buf.set(x, bottom, self.border_cell(set.horizontal));
            }
        }

        // Corners overwrite edge glyphs.
        let corners = [
            (Borders::LEFT | Borders::TOP, area.x, area.y, set.top_left),
            (Borders::RIGHT | Borders::TOP, right, area.y, set.top_right),
            (Borders::LEFT | Borders::BOTTOM, area.x, bottom, set.bottom_left),
            (Borders::RIGHT | Borders::BOTTOM, right, bottom, set.bottom_right),
        ];
        for (edges, x, y, glyph) in corners {
            if self.borders.contains(edges) {
                buf.set(x, y, self.border_cell(glyph));
            }
        }
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let Some(title) = self.title else {
            return;
        };
        if !self.borders.contains(Borders::TOP) || area.width < 3 {
            return;
        }

        // One cell of padding either side of the title.
        let padded = format!(" {title} ");
        let available = area.width - 2;
        let width = (text_width(&padded) as u16).min(available);
        let x = area.x + 1 + self.title_alignment.offset(available, width);
        let style = self
            .style
            .patch(self.border_style)
            .patch(self.title_style);
        draw_text_span(buf, x, area.y, &padded, style, area.right() - 1);
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(&buf.area());
        if area.is_empty() {
            return;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("block", title = self.title.unwrap_or("")).entered();

        set_style_area(buf, area, self.style);
        self.render_borders(area, buf);
        self.render_title(area, buf);
    }
}
