#![forbid(unsafe_code)]

//! Screen layout for the calculator.
//!
//! ```text
//! Budget Calculator
//! ╭ Annual revenue ─────────────────────────────╮
//! │ $ 100000000▏                 $100,000,000   │
//! ╰─────────────────────────────────────────────╯
//! (low-revenue advisory)
//! ╭ Marketing budget ─╮ ╭ Website budget ───────╮
//! ╰───────────────────╯ ╰───────────────────────╯
//! ┌ matrix table ───────────────────────────────┐
//! ┌ midpoint chart ─────────────────────────────┐
//! key hints
//! ```

use bcalc_core::revenue::BASELINE_REVENUE;
use bcalc_core::{BudgetRange, Complexity, Priority, format_axis, format_currency, format_range};
use bcalc_widgets::{
    Alignment, Block, BorderType, Buffer, Constraint, Dataset, Flex, Line, LineChart, Modal,
    Paragraph, Rect, Row, StatefulWidget, SummaryCard, Table, TableState, Widget, text_width,
};

use crate::app::{CalculatorApp, Figure};
use crate::theme;

/// Widest the details modal gets.
const DETAILS_WIDTH: u16 = 64;

pub fn render(app: &CalculatorApp, area: Rect, buf: &mut Buffer) {
    let rows = Flex::vertical()
        .constraints([
            Constraint::Fixed(1),
            Constraint::Fixed(3),
            Constraint::Fixed(1),
            Constraint::Fixed(4),
            Constraint::Fixed(6),
            Constraint::Min(6),
            Constraint::Fixed(1),
        ])
        .split(area);

    buf.set_string(rows[0].x, rows[0].y, "Budget Calculator", theme::TITLE, rows[0].right());
    render_input(app, rows[1], buf);
    if app.is_low_revenue() {
        render_advisory(rows[2], buf);
    }
    render_cards(app, rows[3], buf);
    render_matrix(app, rows[4], buf);
    render_chart(app, rows[5], buf);
    render_hints(app, rows[6], buf);

    if app.details_open() {
        render_details(app, area, buf);
    }
}

fn render_input(app: &CalculatorApp, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::BORDER)
        .title("Annual revenue")
        .title_style(theme::LABEL);
    block.render(area, buf);
    let inner = block.inner(area);
    if inner.is_empty() {
        return;
    }

    let x = buf.set_string(inner.x + 1, inner.y, "$ ", theme::HINT, inner.right());
    let x = buf.set_string(x, inner.y, app.input(), theme::LABEL, inner.right());
    buf.set_string(x, inner.y, "▏", theme::FIGURE, inner.right());

    let formatted = format_currency(app.revenue() as f64);
    let width = text_width(&formatted) as u16;
    let fx = inner.right().saturating_sub(width + 1);
    if fx > x + 1 {
        buf.set_string(fx, inner.y, &formatted, theme::HINT, inner.right());
    }
}

fn render_advisory(area: Rect, buf: &mut Buffer) {
    let baseline = format_currency(BASELINE_REVENUE as f64);
    let text = format!(
        "Revenue under {baseline} is estimated as {baseline}; budgets below reflect that baseline."
    );
    Paragraph::new(&text)
        .style(theme::ADVISORY)
        .render(area, buf);
}

fn render_cards(app: &CalculatorApp, area: Rect, buf: &mut Buffer) {
    let cols = Flex::horizontal()
        .gap(1)
        .constraints([Constraint::Percentage(50.0), Constraint::Min(0)])
        .split(area);

    let marketing = app.displayed_range(Figure::MarketingMin, Figure::MarketingMax);
    SummaryCard::new("Marketing budget", format_range(marketing))
        .caption("5-10% of annual revenue")
        .value_style(theme::FIGURE)
        .caption_style(theme::HINT)
        .border_style(theme::BORDER)
        .render(cols[0], buf);

    let website = app.displayed_range(Figure::WebsiteMin, Figure::WebsiteMax);
    SummaryCard::new("Website budget", format_range(website))
        .caption("Significant influence, average complexity")
        .value_style(theme::FIGURE)
        .caption_style(theme::HINT)
        .border_style(theme::BORDER)
        .render(cols[1], buf);
}

/// `"$188K - $300K"`, narrow enough for three columns on 80 cells.
fn compact_range(range: BudgetRange) -> String {
    format!("{} - {}", format_axis(range.min as f64), format_axis(range.max as f64))
}

fn render_matrix(app: &CalculatorApp, area: Rect, buf: &mut Buffer) {
    let header = Row::new(
        std::iter::once("Priority").chain(Complexity::ALL.iter().map(|c| c.label())),
    )
    .style(theme::LABEL);
    let rows = app.matrix().rows().map(|(priority, cells)| {
        Row::new(
            std::iter::once(priority.label().to_string())
                .chain(cells.iter().map(|range| compact_range(*range))),
        )
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fixed(21),
            Constraint::Min(13),
            Constraint::Min(13),
            Constraint::Min(13),
        ],
    )
    .header(header)
    .alignments([
        Alignment::Left,
        Alignment::Center,
        Alignment::Center,
        Alignment::Center,
    ])
    .highlight_style(theme::SELECTED)
    .block(
        Block::bordered()
            .border_style(theme::BORDER)
            .title("Website budget by priority and complexity")
            .title_style(theme::LABEL),
    );

    let (priority, complexity) = app.selected();
    let mut state = TableState::default();
    state.select(Some((priority.index(), complexity.index() + 1)));
    StatefulWidget::render(&table, area, buf, &mut state);
}

fn render_chart(app: &CalculatorApp, area: Rect, buf: &mut Buffer) {
    let datasets = Complexity::ALL.map(|complexity| {
        Dataset::new(
            complexity.label(),
            app.series()
                .iter()
                .map(|point| (point.revenue, point.value(complexity) as f64)),
        )
        .style(theme::series(complexity))
    });

    LineChart::new(datasets)
        .x_labels(format_axis)
        .y_labels(format_axis)
        .axis_style(theme::HINT)
        .block(
            Block::bordered()
                .border_style(theme::BORDER)
                .title("Website budget midpoint vs. revenue")
                .title_style(theme::LABEL),
        )
        .render(area, buf);
}

fn render_hints(app: &CalculatorApp, area: Rect, buf: &mut Buffer) {
    let hints = if app.details_open() {
        "Esc close  q quit"
    } else {
        "+/- step  0-9 type  hjkl select  Enter details  q quit"
    };
    buf.set_string(area.x, area.y, hints, theme::HINT, area.right());
}

fn render_details(app: &CalculatorApp, area: Rect, buf: &mut Buffer) {
    let (priority, complexity) = app.selected();
    let range = app.matrix().get(priority, complexity);
    let body = Paragraph::from_lines(details_lines(priority, complexity, range))
        .wrap(true)
        .block(
            Block::bordered()
                .border_type(BorderType::Double)
                .border_style(theme::MODAL_BORDER)
                .title("Details")
                .title_style(theme::LABEL),
        );

    let width = DETAILS_WIDTH.min(area.width.saturating_sub(4));
    let height = (body.line_count(width.saturating_sub(2)) as u16).saturating_add(2);
    Modal::new(body, width, height)
        .backdrop(theme::BACKDROP)
        .render(area, buf);
}

fn details_lines(priority: Priority, complexity: Complexity, range: BudgetRange) -> Vec<Line> {
    vec![
        Line::styled(
            format!("{} × {}", priority.label(), complexity.label()),
            theme::TITLE,
        ),
        Line::styled(format_range(range), theme::FIGURE),
        Line::raw(""),
        Line::styled(priority.label(), theme::LABEL),
        Line::raw(priority.description()),
        Line::raw(""),
        Line::styled(complexity.label(), theme::LABEL),
        Line::raw(complexity.description()),
        Line::raw(""),
        Line::styled("Esc to close", theme::HINT),
    ]
}
