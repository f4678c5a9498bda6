#![forbid(unsafe_code)]

//! Modal overlay: a dimmed backdrop over the whole area, then the content
//! widget in a cleared, centered rectangle.

use crate::buffer::{Buffer, Cell};
use crate::geometry::Rect;
use crate::style::Style;
use crate::{Widget, set_style_area};

/// A centered overlay around a content widget.
#[derive(Debug, Clone)]
pub struct Modal<C> {
    content: C,
    width: u16,
    height: u16,
    backdrop: Style,
}

impl<C> Modal<C> {
    /// A modal of the given preferred size; it shrinks to fit the area.
    pub fn new(content: C, width: u16, height: u16) -> Self {
        Self {
            content,
            width,
            height,
            backdrop: Style::new().dim(),
        }
    }

    /// Style painted over everything behind the modal.
    pub fn backdrop(mut self, style: Style) -> Self {
        self.backdrop = style;
        self
    }

    pub fn content_rect(&self, area: Rect) -> Rect {
        area.centered(self.width, self.height)
    }
}

impl<C: Widget> Widget for Modal<C> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        // Backdrop keeps the glyphs underneath.
        set_style_area(buf, area, self.backdrop);

        let content_area = self.content_rect(area);
        if content_area.is_empty() {
            return;
        }
        buf.fill(content_area, Cell::default());
        self.content.render(content_area, buf);
    }
}
