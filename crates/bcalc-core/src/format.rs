#![forbid(unsafe_code)]

//! Currency and axis-label formatting.
//!
//! ```
//! use bcalc_core::format::{format_axis, format_currency};
//!
//! assert_eq!(format_currency(1_234_567.0), "$1,234,567");
//! assert_eq!(format_axis(1_500_000_000.0), "$1.5B");
//! assert_eq!(format_axis(20_000_000.0), "$20M");
//! ```

use crate::estimator::BudgetRange;

/// Suffixes for abbreviated axis labels, largest first.
const AXIS_UNITS: &[(f64, &str)] = &[(1.0e9, "B"), (1.0e6, "M"), (1.0e3, "K")];

/// Whole-unit currency with thousands separators and no cents.
///
/// Fractional input is rounded to the nearest unit; negative values keep
/// their sign in front of the symbol.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let magnitude = rounded.abs() as u64;
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(magnitude))
}

/// `"$188,000 - $300,000"`.
#[must_use]
pub fn format_range(range: BudgetRange) -> String {
    format!(
        "{} - {}",
        format_currency(range.min as f64),
        format_currency(range.max as f64)
    )
}

/// Abbreviated chart tick label: `$1.5B`, `$20M`, `$500K`, `$0`.
///
/// One decimal place, dropped when it is zero.
#[must_use]
pub fn format_axis(value: f64) -> String {
    for &(unit, suffix) in AXIS_UNITS {
        if value.abs() >= unit {
            return format!("${}{suffix}", one_decimal(value / unit));
        }
    }
    format!("${}", one_decimal(value))
}

/// Insert `,` every three digits from the right.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn one_decimal(value: f64) -> String {
    let tenths = (value * 10.0).round() / 10.0;
    if tenths.fract() == 0.0 {
        format!("{tenths:.0}")
    } else {
        format!("{tenths:.1}")
    }
}
