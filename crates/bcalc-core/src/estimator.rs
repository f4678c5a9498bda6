#![forbid(unsafe_code)]

//! Budget estimator: revenue → rounded budget range.
//!
//! The estimator applies the "5–10% of revenue" marketing heuristic to a
//! baseline revenue, then scales the envelope by a tier coefficient pair.
//!
//! # Invariants
//!
//! 1. Revenue at or below [`BASELINE_REVENUE`] (including zero, negative and
//!    NaN input) produces the same result as the baseline itself.
//! 2. Above [`ENVELOPE_CAP_THRESHOLD`] the envelope is pinned to
//!    `50M..100M`, so the result depends only on the coefficients.
//! 3. Every returned bound is an exact multiple of 1000.
//! 4. [`marketing_suggestion`] is never capped; matrix cells always are.

use serde::{Deserialize, Serialize};

use crate::matrix::{Complexity, Priority, coefficients};

/// Floor applied to revenue before any calculation.
pub const BASELINE_REVENUE: f64 = 10_000_000.0;

/// Revenue above which the envelope stops scaling.
pub const ENVELOPE_CAP_THRESHOLD: f64 = 1_000_000_000.0;

/// Fixed low envelope used above the cap threshold.
pub const CAPPED_ENVELOPE_LOW: f64 = 50_000_000.0;

/// Fixed high envelope used above the cap threshold.
pub const CAPPED_ENVELOPE_HIGH: f64 = 100_000_000.0;

const LOW_SHARE: f64 = 0.05;
const HIGH_SHARE: f64 = 0.10;
const ROUNDING_UNIT: f64 = 1000.0;

/// A suggested spend interval, both bounds rounded to the nearest thousand.
///
/// `min <= max` holds for every coefficient pair in the matrix but is not
/// enforced for arbitrary coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u64,
    pub max: u64,
}

impl BudgetRange {
    #[inline]
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range, as plotted on the comparison chart.
    ///
    /// Both bounds are multiples of 1000, so the midpoint is exact.
    #[inline]
    #[must_use]
    pub const fn midpoint(&self) -> u64 {
        // Halve separately so u64::MAX-sized bounds cannot overflow.
        self.min / 2 + self.max / 2 + (self.min % 2 + self.max % 2) / 2
    }
}

/// The `(low_pct, high_pct)` pair locating a matrix cell within the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierCoefficients {
    pub low_pct: f64,
    pub high_pct: f64,
}

impl TierCoefficients {
    #[inline]
    #[must_use]
    pub const fn new(low_pct: f64, high_pct: f64) -> Self {
        Self { low_pct, high_pct }
    }
}

/// Effective revenue used in every calculation: `max(revenue, 10M)`.
///
/// `f64::max` ignores NaN, so NaN input also lands on the baseline.
#[inline]
#[must_use]
pub fn baseline_revenue(revenue: f64) -> f64 {
    revenue.max(BASELINE_REVENUE)
}

/// Estimate a budget range for `revenue` scaled by `low_pct` / `high_pct`.
///
/// Total over all inputs: there is no error path.
#[must_use]
pub fn estimate(revenue: f64, low_pct: f64, high_pct: f64) -> BudgetRange {
    let base = baseline_revenue(revenue);

    let (envelope_low, envelope_high) = if base > ENVELOPE_CAP_THRESHOLD {
        (CAPPED_ENVELOPE_LOW, CAPPED_ENVELOPE_HIGH)
    } else {
        (base * LOW_SHARE, base * HIGH_SHARE)
    };

    let range = BudgetRange {
        min: round_to_thousand(envelope_low * low_pct),
        max: round_to_thousand(envelope_high * high_pct),
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        revenue,
        low_pct,
        high_pct,
        min = range.min,
        max = range.max,
        "estimate"
    );

    range
}

/// [`estimate`] for a whole-unit revenue and a coefficient pair.
#[inline]
#[must_use]
pub fn estimate_revenue(revenue: u64, tier: TierCoefficients) -> BudgetRange {
    estimate(revenue as f64, tier.low_pct, tier.high_pct)
}

/// The un-tiered 5%–10% envelope, rounded to the nearest thousand.
///
/// Unlike matrix cells this is not capped above 1B revenue.
#[must_use]
pub fn marketing_suggestion(revenue: u64) -> BudgetRange {
    let base = baseline_revenue(revenue as f64);
    BudgetRange {
        min: round_to_thousand(base * LOW_SHARE),
        max: round_to_thousand(base * HIGH_SHARE),
    }
}

/// Headline website budget: the Significant Influence × Average cell.
#[must_use]
pub fn website_suggestion(revenue: u64) -> BudgetRange {
    estimate_revenue(
        revenue,
        coefficients(Priority::SignificantInfluence, Complexity::Average),
    )
}

/// Round to the nearest thousand, halves away from zero.
///
/// Callers only pass non-negative values; the float-to-int cast saturates
/// for anything out of range.
fn round_to_thousand(value: f64) -> u64 {
    ((value / ROUNDING_UNIT).round() * ROUNDING_UNIT) as u64
}
