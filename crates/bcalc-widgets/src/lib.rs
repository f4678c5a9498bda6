#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Terminal widgets for the budget calculator.
//!
//! Widgets draw into a [`Buffer`] within a [`Rect`]; the application's
//! presenter turns buffer diffs into terminal output. Nothing in this crate
//! touches the terminal directly.

pub mod block;
pub mod borders;
pub mod buffer;
pub mod card;
pub mod chart;
pub mod geometry;
pub mod layout;
pub mod modal;
pub mod paragraph;
pub mod style;
pub mod table;

pub use block::{Alignment, Block};
pub use borders::{BorderSet, BorderType, Borders};
pub use buffer::{Buffer, Cell};
pub use card::SummaryCard;
pub use chart::{Dataset, LineChart};
pub use geometry::{Rect, Sides};
pub use layout::{Constraint, Direction, Flex};
pub use modal::Modal;
pub use paragraph::{Line, Paragraph};
pub use style::{Color, Style, StyleFlags};
pub use table::{Row, Table, TableCell, TableState};

/// A renderable component.
pub trait Widget {
    /// Render into `buf` within `area`.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A widget that renders against mutable state.
pub trait StatefulWidget {
    type State;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

/// Draw `text` at `(x, y)` clipped at `max_x`; returns the next x.
pub(crate) fn draw_text_span(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    buf.set_string(x, y, text, style, max_x)
}

/// Paint `style` over `area` without touching glyphs.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    buf.set_style(area, style);
}

/// Display width of `text` in cells.
pub fn text_width(text: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(text)
}
