#![forbid(unsafe_code)]

use unicode_width::UnicodeWidthChar;

use crate::block::{Alignment, Block};
use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::style::Style;
use crate::{Widget, draw_text_span, set_style_area, text_width};

/// One line of paragraph text with its own style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub text: String,
    pub style: Style,
}

impl Line {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::raw(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::raw(text)
    }
}

/// Multi-line text, optionally word-wrapped and framed.
#[derive(Debug, Clone, Default)]
pub struct Paragraph<'a> {
    lines: Vec<Line>,
    block: Option<Block<'a>>,
    style: Style,
    wrap: bool,
    alignment: Alignment,
}

impl<'a> Paragraph<'a> {
    /// Split `text` on newlines into unstyled lines.
    pub fn new(text: &str) -> Self {
        Self::from_lines(text.lines().map(Line::raw))
    }

    pub fn from_lines(lines: impl IntoIterator<Item = Line>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Wrap at word boundaries instead of clipping at the right edge.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Number of rows this paragraph needs at `width` (excluding any block).
    pub fn line_count(&self, width: u16) -> usize {
        if !self.wrap {
            return self.lines.len();
        }
        self.lines
            .iter()
            .map(|line| wrap_words(&line.text, width).len())
            .sum()
    }
}

impl Widget for Paragraph<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "widget_render",
            widget = "Paragraph",
            w = area.width,
            h = area.height
        )
        .entered();

        set_style_area(buf, area, self.style);
        let text_area = match &self.block {
            Some(block) => {
                block.render(area, buf);
                block.inner(area)
            }
            None => area,
        };
        if text_area.is_empty() {
            return;
        }

        let rows = self.lines.iter().flat_map(|line| {
            let style = self.style.patch(line.style);
            let pieces = if self.wrap {
                wrap_words(&line.text, text_area.width)
            } else {
                vec![line.text.clone()]
            };
            pieces.into_iter().map(move |piece| (piece, style))
        });

        for (y, (text, style)) in (text_area.y..text_area.bottom()).zip(rows) {
            let width = (text_width(&text) as u16).min(text_area.width);
            let x = text_area.x + self.alignment.offset(text_area.width, width);
            draw_text_span(buf, x, y, &text, style, text_area.right());
        }
    }
}

/// Greedy word wrap to `width` cells.
///
/// Runs of whitespace collapse to one space between words; a word wider
/// than `width` is broken across rows. Always yields at least one row.
pub fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = text_width(word);
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Hard-break an oversized word.
        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}
