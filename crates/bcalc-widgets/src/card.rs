#![forbid(unsafe_code)]

use crate::block::{Alignment, Block};
use crate::borders::BorderType;
use crate::buffer::Buffer;
use crate::geometry::{Rect, Sides};
use crate::style::Style;
use crate::{Widget, draw_text_span, text_width};

/// A bordered card showing one headline figure with a caption below.
///
/// ```text
/// ╭ Marketing budget ─────────╮
/// │   $5,000,000 - $10,000,000 │
/// │ 5-10% of annual revenue    │
/// ╰────────────────────────────╯
/// ```
#[derive(Debug, Clone, Default)]
pub struct SummaryCard<'a> {
    title: &'a str,
    value: String,
    caption: Option<String>,
    value_style: Style,
    caption_style: Style,
    border_style: Style,
}

impl<'a> SummaryCard<'a> {
    pub fn new(title: &'a str, value: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }

    pub fn caption_style(mut self, style: Style) -> Self {
        self.caption_style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Rows needed including borders.
    pub fn height(&self) -> u16 {
        if self.caption.is_some() { 4 } else { 3 }
    }
}

impl Widget for SummaryCard<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style)
            .title(self.title);
        block.render(area, buf);
        let inner = block.inner(area).inner(Sides::symmetric(0, 1));
        if inner.is_empty() {
            return;
        }

        let width = (text_width(&self.value) as u16).min(inner.width);
        let x = inner.x + Alignment::Center.offset(inner.width, width);
        draw_text_span(buf, x, inner.y, &self.value, self.value_style, inner.right());

        if let Some(caption) = &self.caption
            && inner.height > 1
        {
            draw_text_span(buf, inner.x, inner.y + 1, caption, self.caption_style, inner.right());
        }
    }
}
