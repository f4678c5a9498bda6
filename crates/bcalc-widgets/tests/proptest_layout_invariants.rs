//! Property-based invariants for layout, text placement, and chart rendering.
//!
//! 1. `Flex::split` yields one rect per constraint, all inside the area,
//!    in order, never overlapping.
//! 2. `Buffer::set_string` never writes at or past `max_x`.
//! 3. `wrap_words` rows fit the width and preserve the word sequence.
//! 4. `LineChart` renders arbitrary data into any area without panicking.

use bcalc_widgets::paragraph::wrap_words;
use bcalc_widgets::{Buffer, Constraint, Dataset, Flex, LineChart, Rect, Style, Widget, text_width};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn constraint_strategy() -> impl Strategy<Value = Constraint> {
    prop_oneof![
        (0u16..40).prop_map(Constraint::Fixed),
        (0.0f32..=100.0).prop_map(Constraint::Percentage),
        (0u16..20).prop_map(Constraint::Min),
    ]
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..50, 0u16..50, 0u16..200, 0u16..80).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,12}", 0..20)
}

// ═════════════════════════════════════════════════════════════════════════
// Flex
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn flex_rects_stay_inside_and_ordered(
        area in rect_strategy(),
        constraints in prop::collection::vec(constraint_strategy(), 1..6),
        gap in 0u16..3,
        horizontal in any::<bool>(),
    ) {
        let flex = if horizontal { Flex::horizontal() } else { Flex::vertical() };
        let rects = flex.constraints(constraints.clone()).gap(gap).split(area);
        prop_assert_eq!(rects.len(), constraints.len());

        let mut cursor = if horizontal { area.x } else { area.y };
        for rect in rects.iter().filter(|r| !r.is_empty()) {
            prop_assert!(rect.x >= area.x && rect.right() <= area.right());
            prop_assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
            let start = if horizontal { rect.x } else { rect.y };
            prop_assert!(start >= cursor, "overlap at {:?}", rect);
            cursor = if horizontal { rect.right() } else { rect.bottom() };
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Text placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_string_respects_max_x(
        text in "\\PC{0,40}",
        x in 0u16..30,
        max_x in 0u16..30,
    ) {
        let mut buf = Buffer::new(30, 1);
        let end = buf.set_string(x, 0, &text, Style::default(), max_x);
        if x <= max_x {
            prop_assert!(end <= max_x);
        }
        for col in max_x.max(x)..30 {
            prop_assert_eq!(buf.get(col, 0).map(|c| c.ch), Some(' '));
        }
    }

    #[test]
    fn wrapped_rows_fit_and_keep_words(words in words_strategy(), width in 12u16..60) {
        let text = words.join("  ");
        let rows = wrap_words(&text, width);
        prop_assert!(!rows.is_empty());
        for row in &rows {
            prop_assert!(text_width(row) <= usize::from(width));
        }
        let rejoined: Vec<&str> = rows.iter().flat_map(|r| r.split_whitespace()).collect();
        prop_assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Chart
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn chart_renders_any_data(
        points in prop::collection::vec((any::<f64>(), any::<f64>()), 0..30),
        width in 0u16..80,
        height in 0u16..30,
    ) {
        let mut buf = Buffer::new(width, height);
        LineChart::new([Dataset::new("series", points)]).render(buf.area(), &mut buf);
        prop_assert_eq!(buf.to_lines().len(), usize::from(height));
    }
}
