#![forbid(unsafe_code)]

//! Revenue input rules: free-text sanitizing, stepping, and the low-revenue advisory.

/// Revenue shown when the calculator starts.
pub const DEFAULT_REVENUE: u64 = 100_000_000;

/// Increment/decrement step.
pub const REVENUE_STEP: u64 = 1_000_000;

/// Decrement never goes below this.
pub const MIN_STEPPED_REVENUE: u64 = 1_000_000;

/// Below this, displayed budgets are pinned to the baseline.
pub const BASELINE_REVENUE: u64 = 10_000_000;

/// Convert free text to a revenue figure.
///
/// Every non-digit character is dropped, so `"$1,250,000"` and `"1 250 000"`
/// both read as `1_250_000`. Text without digits reads as zero. Values past
/// `u64::MAX` saturate.
#[must_use]
pub fn sanitize_revenue_input(text: &str) -> u64 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Keep only the ASCII digits of `text`, as the input field displays them.
#[must_use]
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// One step up.
#[inline]
#[must_use]
pub const fn increment(revenue: u64) -> u64 {
    revenue.saturating_add(REVENUE_STEP)
}

/// One step down, floored at [`MIN_STEPPED_REVENUE`].
#[inline]
#[must_use]
pub fn decrement(revenue: u64) -> u64 {
    revenue
        .saturating_sub(REVENUE_STEP)
        .max(MIN_STEPPED_REVENUE)
}

/// Whether the low-revenue advisory applies.
#[inline]
#[must_use]
pub const fn is_low_revenue(revenue: u64) -> bool {
    revenue < BASELINE_REVENUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_punctuation() {
        assert_eq!(sanitize_revenue_input("$1,250,000"), 1_250_000);
        assert_eq!(sanitize_revenue_input(" 42 000 "), 42_000);
        assert_eq!(sanitize_revenue_input("12.50"), 1_250);
    }

    #[test]
    fn garbage_reads_as_zero() {
        assert_eq!(sanitize_revenue_input(""), 0);
        assert_eq!(sanitize_revenue_input("abc"), 0);
        assert_eq!(sanitize_revenue_input("-"), 0);
    }

    #[test]
    fn minus_sign_is_dropped() {
        assert_eq!(sanitize_revenue_input("-5000000"), 5_000_000);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(sanitize_revenue_input(&"9".repeat(40)), u64::MAX);
    }

    #[test]
    fn unicode_digits_are_not_revenue() {
        // Arabic-Indic digits are not ASCII; `to_digit(10)` rejects them too.
        assert_eq!(sanitize_revenue_input("٣٤"), 0);
        assert_eq!(digits_only("٣4"), "4");
    }

    #[test]
    fn step_up_and_down() {
        assert_eq!(increment(100_000_000), 101_000_000);
        assert_eq!(decrement(100_000_000), 99_000_000);
        assert_eq!(increment(u64::MAX), u64::MAX);
    }

    #[test]
    fn decrement_floors_at_one_million() {
        assert_eq!(decrement(1_500_000), 1_000_000);
        assert_eq!(decrement(1_000_000), 1_000_000);
        assert_eq!(decrement(0), 1_000_000);
    }

    #[test]
    fn advisory_below_baseline_only() {
        assert!(is_low_revenue(0));
        assert!(is_low_revenue(9_999_999));
        assert!(!is_low_revenue(10_000_000));
        assert!(!is_low_revenue(DEFAULT_REVENUE));
    }
}
