#![forbid(unsafe_code)]

//! Braille line chart.
//!
//! Each terminal cell holds a 2×4 grid of braille dots, so a plot area of
//! `w × h` cells has `2w × 4h` addressable points. Lines between
//! consecutive data points are rasterized with Bresenham's algorithm.
//!
//! # Layout
//!
//! ```text
//! ━ Simple  ━ Average            legend (optional)
//! $30K │⠀⠀⠀⠀⣀⠤⠒⠉
//!  $0K │⣀⠤⠒⠉⠀⠀⠀⠀
//!      └────────
//!      $20M  $200M                x labels
//! ```

use crate::block::Block;
use crate::buffer::{Buffer, Cell};
use crate::geometry::Rect;
use crate::style::Style;
use crate::{Widget, draw_text_span, text_width};

const BRAILLE_BASE: u32 = 0x2800;

/// Dot bit for `(column, row)` inside one braille cell.
const DOT_BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

/// A dot raster with one style per cell.
#[derive(Debug, Clone)]
pub struct BrailleGrid {
    width: u16,
    height: u16,
    masks: Vec<u8>,
    styles: Vec<Style>,
}

impl BrailleGrid {
    /// A grid of `width × height` terminal cells.
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            masks: vec![0; len],
            styles: vec![Style::default(); len],
        }
    }

    /// Dot resolution as `(columns, rows)`.
    pub fn resolution(&self) -> (u32, u32) {
        (u32::from(self.width) * 2, u32::from(self.height) * 4)
    }

    /// Light the dot at `(dx, dy)`; out-of-range dots are ignored.
    pub fn set(&mut self, dx: u32, dy: u32, style: Style) {
        let (cols, rows) = self.resolution();
        if dx >= cols || dy >= rows {
            return;
        }
        let idx = (dy / 4) as usize * usize::from(self.width) + (dx / 2) as usize;
        self.masks[idx] |= DOT_BITS[(dx % 2) as usize][(dy % 4) as usize];
        self.styles[idx] = style;
    }

    /// Bresenham line between two dots, both ends included.
    pub fn line(&mut self, from: (u32, u32), to: (u32, u32), style: Style) {
        let (mut x0, mut y0) = (i64::from(from.0), i64::from(from.1));
        let (x1, y1) = (i64::from(to.0), i64::from(to.1));
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x0 as u32, y0 as u32, style);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// The braille glyph for cell `(x, y)`; `None` when no dot is lit.
    pub fn glyph(&self, x: u16, y: u16) -> Option<(char, Style)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = usize::from(y) * usize::from(self.width) + usize::from(x);
        let mask = self.masks[idx];
        if mask == 0 {
            return None;
        }
        char::from_u32(BRAILLE_BASE + u32::from(mask)).map(|c| (c, self.styles[idx]))
    }
}

/// One named series of `(x, y)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<'a> {
    name: &'a str,
    points: Vec<(f64, f64)>,
    style: Style,
}

impl<'a> Dataset<'a> {
    pub fn new(name: &'a str, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            name,
            points: points.into_iter().collect(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

/// Axis label formatter.
pub type LabelFn = fn(f64) -> String;

fn default_label(value: f64) -> String {
    format!("{value:.0}")
}

/// A multi-series line chart with labelled axes.
///
/// The y axis always starts at zero; the x axis spans the data.
#[derive(Debug, Clone)]
pub struct LineChart<'a> {
    datasets: Vec<Dataset<'a>>,
    block: Option<Block<'a>>,
    x_label: LabelFn,
    y_label: LabelFn,
    y_ticks: u16,
    axis_style: Style,
    legend: bool,
}

impl<'a> LineChart<'a> {
    pub fn new(datasets: impl IntoIterator<Item = Dataset<'a>>) -> Self {
        Self {
            datasets: datasets.into_iter().collect(),
            block: None,
            x_label: default_label,
            y_label: default_label,
            y_ticks: 3,
            axis_style: Style::default(),
            legend: true,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn x_labels(mut self, format: LabelFn) -> Self {
        self.x_label = format;
        self
    }

    pub fn y_labels(mut self, format: LabelFn) -> Self {
        self.y_label = format;
        self
    }

    /// Number of y axis labels, at least 2 (bottom and top).
    pub fn y_ticks(mut self, ticks: u16) -> Self {
        self.y_ticks = ticks.max(2);
        self
    }

    pub fn axis_style(mut self, style: Style) -> Self {
        self.axis_style = style;
        self
    }

    pub fn legend(mut self, show: bool) -> Self {
        self.legend = show;
        self
    }

    /// `(x_min, x_max, y_max)` over all finite points.
    fn bounds(&self) -> Option<(f64, f64, f64)> {
        let mut points = self.datasets.iter().flat_map(Dataset::finite_points).peekable();
        points.peek()?;
        let (mut x_min, mut x_max, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY, 0.0f64);
        for (x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
        if x_max <= x_min {
            x_max = x_min + 1.0;
        }
        if y_max <= 0.0 {
            y_max = 1.0;
        }
        Some((x_min, x_max, y_max))
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let mut x = area.x;
        for dataset in &self.datasets {
            x = draw_text_span(buf, x, area.y, "━ ", dataset.style, area.right());
            x = draw_text_span(buf, x, area.y, dataset.name, Style::default(), area.right());
            x = x.saturating_add(2);
        }
    }
}

impl Widget for LineChart<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "widget_render",
            widget = "LineChart",
            datasets = self.datasets.len()
        )
        .entered();

        let mut area = match &self.block {
            Some(block) => {
                block.render(area, buf);
                block.inner(area)
            }
            None => area,
        };
        if area.is_empty() {
            return;
        }

        if self.legend && area.height > 1 {
            self.render_legend(Rect::new(area.x, area.y, area.width, 1), buf);
            area.y += 1;
            area.height -= 1;
        }

        let Some((x_min, x_max, y_max)) = self.bounds() else {
            return;
        };

        let y_labels: Vec<String> = (0..self.y_ticks)
            .map(|i| (self.y_label)(y_max * f64::from(i) / f64::from(self.y_ticks - 1)))
            .collect();
        let label_width = y_labels.iter().map(|l| text_width(l)).max().unwrap_or(0) as u16;

        // Two rows below the plot: axis line and x labels.
        if area.height < 3 || area.width <= label_width + 2 {
            return;
        }
        let axis_x = area.x + label_width + 1;
        let plot = Rect::new(
            axis_x + 1,
            area.y,
            area.right() - axis_x - 1,
            area.height - 2,
        );
        let axis_y = plot.bottom();

        for y in plot.y..axis_y {
            buf.set(axis_x, y, Cell::from_char('│').with_style(self.axis_style));
        }
        buf.set(axis_x, axis_y, Cell::from_char('└').with_style(self.axis_style));
        for x in plot.x..plot.right() {
            buf.set(x, axis_y, Cell::from_char('─').with_style(self.axis_style));
        }

        // Tick labels from the bottom row up, evenly spread.
        let span = u32::from(plot.height.saturating_sub(1));
        let last = u32::from(self.y_ticks - 1);
        for (i, label) in y_labels.iter().enumerate() {
            let row = axis_y - 1 - (span * i as u32 / last) as u16;
            let x = area.x + label_width - text_width(label) as u16;
            draw_text_span(buf, x, row, label, self.axis_style, axis_x);
        }

        let label_row = axis_y + 1;
        let left = (self.x_label)(x_min);
        let right = (self.x_label)(x_max);
        draw_text_span(buf, plot.x, label_row, &left, self.axis_style, area.right());
        let right_x = area.right().saturating_sub(text_width(&right) as u16);
        if right_x > plot.x + text_width(&left) as u16 {
            draw_text_span(buf, right_x, label_row, &right, self.axis_style, area.right());
        }

        let mut grid = BrailleGrid::new(plot.width, plot.height);
        let (cols, rows) = grid.resolution();
        let to_dot = |(x, y): (f64, f64)| -> (u32, u32) {
            let fx = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
            let fy = (y / y_max).clamp(0.0, 1.0);
            let dx = (fx * f64::from(cols - 1)).round() as u32;
            let dy = ((1.0 - fy) * f64::from(rows - 1)).round() as u32;
            (dx, dy)
        };
        for dataset in &self.datasets {
            let dots: Vec<(u32, u32)> = dataset.finite_points().map(to_dot).collect();
            match dots.as_slice() {
                [] => {}
                [only] => grid.set(only.0, only.1, dataset.style),
                _ => {
                    for pair in dots.windows(2) {
                        grid.line(pair[0], pair[1], dataset.style);
                    }
                }
            }
        }

        for y in 0..plot.height {
            for x in 0..plot.width {
                if let Some((glyph, style)) = grid.glyph(x, y) {
                    buf.set(plot.x + x, plot.y + y, Cell::from_char(glyph).with_style(style));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_bits_map_to_braille() {
        let mut grid = BrailleGrid::new(1, 1);
        grid.set(0, 3, Style::default());
        assert_eq!(grid.glyph(0, 0).map(|g| g.0), Some('⡀'));
        grid.set(1, 0, Style::default());
        assert_eq!(grid.glyph(0, 0).map(|g| g.0), Some('⡈'));
    }

    #[test]
    fn full_cell_is_all_dots() {
        let mut grid = BrailleGrid::new(1, 1);
        for dx in 0..2 {
            for dy in 0..4 {
                grid.set(dx, dy, Style::default());
            }
        }
        assert_eq!(grid.glyph(0, 0).map(|g| g.0), Some('⣿'));
    }

    #[test]
    fn line_is_contiguous() {
        let mut grid = BrailleGrid::new(4, 2);
        grid.line((0, 7), (7, 0), Style::default());
        for x in 0..4 {
            assert!(
                (0..2).any(|y| grid.glyph(x, y).is_some()),
                "column {x} has no dots"
            );
        }
    }

    #[test]
    fn out_of_range_dots_are_ignored() {
        let mut grid = BrailleGrid::new(1, 1);
        grid.set(2, 0, Style::default());
        grid.set(0, 4, Style::default());
        assert_eq!(grid.glyph(0, 0), None);
    }

    #[test]
    fn renders_axes_labels_and_legend() {
        let mut buf = Buffer::new(30, 8);
        LineChart::new([Dataset::new("Simple", [(1.0, 0.0), (10.0, 100.0)])])
            .y_ticks(2)
            .render(buf.area(), &mut buf);
        let lines = buf.to_lines();
        assert!(lines[0].starts_with("━ Simple"));
        assert!(lines[1].starts_with("100 │"));
        assert!(lines[5].starts_with("  0 │"));
        assert!(lines[6].starts_with("    └───"));
        assert!(lines[7].starts_with("     1"));
        assert!(lines[7].ends_with("10"));
        // Top-right of the plot carries the line's end point.
        assert!(buf.get(29, 1).is_some_and(|c| c.ch != ' '));
    }

    #[test]
    fn very_tall_plot_places_ticks() {
        let mut buf = Buffer::new(20, 40_000);
        LineChart::new([Dataset::new("Tall", [(0.0, 0.0), (1.0, 9.0)])])
            .y_ticks(4)
            .render(buf.area(), &mut buf);
        let lines = buf.to_lines();
        assert!(lines[1].starts_with("9 │"));
        assert!(lines[39_997].starts_with("0 │"));
    }

    #[test]
    fn empty_data_draws_only_legend() {
        let mut buf = Buffer::new(20, 5);
        LineChart::new([Dataset::new("Flat", [])]).render(buf.area(), &mut buf);
        assert_eq!(buf.to_lines()[0], "━ Flat");
        assert!(buf.to_lines()[1..].iter().all(String::is_empty));
    }
}
