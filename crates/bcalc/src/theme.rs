#![forbid(unsafe_code)]

//! Colors and styles used by the calculator screen.

use bcalc_core::Complexity;
use bcalc_widgets::{Color, Style};

pub const ACCENT: Color = Color::rgb(94, 172, 255);
pub const MUTED: Color = Color::rgb(128, 134, 146);
pub const WARNING: Color = Color::rgb(255, 190, 92);
pub const HIGHLIGHT_BG: Color = Color::rgb(48, 76, 122);

pub const TITLE: Style = Style::new().fg(ACCENT).bold();
pub const LABEL: Style = Style::new().bold();
pub const HINT: Style = Style::new().fg(MUTED);
pub const BORDER: Style = Style::new().fg(MUTED);
pub const FIGURE: Style = Style::new().fg(ACCENT).bold();
pub const ADVISORY: Style = Style::new().fg(WARNING);
pub const SELECTED: Style = Style::new().bg(HIGHLIGHT_BG).bold();
pub const MODAL_BORDER: Style = Style::new().fg(ACCENT);
pub const BACKDROP: Style = Style::new().dim();

/// Line color for one complexity series in the chart.
pub const fn series(complexity: Complexity) -> Style {
    match complexity {
        Complexity::Simple => Style::new().fg(Color::rgb(120, 220, 140)),
        Complexity::Average => Style::new().fg(Color::rgb(94, 172, 255)),
        Complexity::Complex => Style::new().fg(Color::rgb(240, 120, 150)),
    }
}
