#![forbid(unsafe_code)]

use crate::block::{Alignment, Block};
use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::layout::{Constraint, Flex};
use crate::style::Style;
use crate::{StatefulWidget, Widget, draw_text_span, set_style_area, text_width};

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableCell {
    text: String,
    style: Style,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for TableCell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TableCell {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A row in a table.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<TableCell>,
    style: Style,
    bottom_margin: u16,
}

impl Row {
    pub fn new(cells: impl IntoIterator<Item = impl Into<TableCell>>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            style: Style::default(),
            bottom_margin: 0,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn bottom_margin(mut self, margin: u16) -> Self {
        self.bottom_margin = margin;
        self
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }
}

/// Selected cell as `(row, column)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableState {
    pub selected: Option<(usize, usize)>,
}

impl TableState {
    pub fn select(&mut self, cell: Option<(usize, usize)>) {
        self.selected = cell;
    }
}

/// A grid of single-line cells with column constraints and an optional
/// highlighted cell.
#[derive(Debug, Clone, Default)]
pub struct Table<'a> {
    rows: Vec<Row>,
    widths: Vec<Constraint>,
    alignments: Vec<Alignment>,
    header: Option<Row>,
    block: Option<Block<'a>>,
    style: Style,
    highlight_style: Style,
    column_spacing: u16,
}

impl<'a> Table<'a> {
    pub fn new(
        rows: impl IntoIterator<Item = Row>,
        widths: impl IntoIterator<Item = Constraint>,
    ) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            widths: widths.into_iter().collect(),
            column_spacing: 1,
            ..Self::default()
        }
    }

    pub fn header(mut self, header: Row) -> Self {
        self.header = Some(header);
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    pub fn column_spacing(mut self, spacing: u16) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Per-column text alignment; missing entries align left.
    pub fn alignments(mut self, alignments: impl IntoIterator<Item = Alignment>) -> Self {
        self.alignments = alignments.into_iter().collect();
        self
    }

    fn render_row(
        &self,
        row: &Row,
        columns: &[Rect],
        y: u16,
        selected: Option<usize>,
        buf: &mut Buffer,
    ) {
        let row_style = self.style.patch(row.style);
        for (col, (cell, rect)) in row.cells.iter().zip(columns).enumerate() {
            let area = Rect::new(rect.x, y, rect.width, 1);
            let mut style = row_style.patch(cell.style);
            if selected == Some(col) {
                style = style.patch(self.highlight_style);
            }
            set_style_area(buf, area, style);

            let align = self.alignments.get(col).copied().unwrap_or_default();
            let width = (text_width(&cell.text) as u16).min(area.width);
            let x = area.x + align.offset(area.width, width);
            draw_text_span(buf, x, y, &cell.text, style, area.right());
        }
    }
}

impl Widget for Table<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut state = TableState::default();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}

impl StatefulWidget for Table<'_> {
    type State = TableState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "widget_render",
            widget = "Table",
            rows = self.rows.len(),
            selected = ?state.selected
        )
        .entered();

        let table_area = match &self.block {
            Some(block) => {
                block.render(area, buf);
                block.inner(area)
            }
            None => area,
        };
        if table_area.is_empty() {
            return;
        }

        let columns = Flex::horizontal()
            .constraints(self.widths.iter().copied())
            .gap(self.column_spacing)
            .split(Rect::new(table_area.x, table_area.y, table_area.width, 1));

        let mut y = table_area.y;
        let max_y = table_area.bottom();

        if let Some(header) = &self.header {
            self.render_row(header, &columns, y, None, buf);
            y = y.saturating_add(1 + header.bottom_margin);
        }

        for (i, row) in self.rows.iter().enumerate() {
            if y >= max_y {
                break;
            }
            let selected = state
                .selected
                .and_then(|(r, c)| (r == i).then_some(c));
            self.render_row(row, &columns, y, selected, buf);
            y = y.saturating_add(1 + row.bottom_margin);
        }
    }
}
