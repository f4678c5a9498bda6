//! Property-based invariant tests for the estimator and chart series.
//!
//! 1. Revenue at or below the baseline gives the baseline result.
//! 2. Revenue above 1B gives a result independent of magnitude.
//! 3. Monotonic between the baseline and 1B.
//! 4. Every bound is a multiple of 1000.
//! 5. Every matrix cell keeps min <= max.
//! 6. Series: always 10 points at revenue * i / 5.
//! 7. Series: midpoints match the Significant Influence matrix row.

use bcalc_core::matrix::{BudgetMatrix, Complexity, Priority, coefficients};
use bcalc_core::series::generate_series;
use bcalc_core::{TierCoefficients, estimate};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn arb_tier() -> impl Strategy<Value = TierCoefficients> {
    (0usize..3, 0usize..3)
        .prop_map(|(p, c)| coefficients(Priority::ALL[p], Complexity::ALL[c]))
}

const BASELINE: f64 = 10_000_000.0;
const CAP: f64 = 1_000_000_000.0;

// ═════════════════════════════════════════════════════════════════════════
// 1. Baseline floor
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn at_or_below_baseline_is_constant(
        revenue in -1.0e9f64..=BASELINE,
        tier in arb_tier(),
    ) {
        prop_assert_eq!(
            estimate(revenue, tier.low_pct, tier.high_pct),
            estimate(BASELINE, tier.low_pct, tier.high_pct)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Capped envelope
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn above_cap_ignores_magnitude(
        a in (CAP + 1.0)..1.0e15f64,
        b in (CAP + 1.0)..1.0e15f64,
        tier in arb_tier(),
    ) {
        prop_assert_eq!(
            estimate(a, tier.low_pct, tier.high_pct),
            estimate(b, tier.low_pct, tier.high_pct)
        );
    }

    #[test]
    fn arbitrary_coefficients_also_capped(
        lo in 0.0f64..1.0,
        hi in 0.0f64..1.0,
    ) {
        prop_assert_eq!(estimate(2.0e9, lo, hi), estimate(5.0e9, lo, hi));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn monotonic_inside_scaling_band(
        x in BASELINE..=CAP,
        y in BASELINE..=CAP,
        tier in arb_tier(),
    ) {
        let (r1, r2) = if x <= y { (x, y) } else { (y, x) };
        let lo = estimate(r1, tier.low_pct, tier.high_pct);
        let hi = estimate(r2, tier.low_pct, tier.high_pct);
        prop_assert!(lo.min <= hi.min);
        prop_assert!(lo.max <= hi.max);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–5. Rounding and ordering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bounds_are_whole_thousands(
        revenue in -1.0e6f64..1.0e13,
        lo in 0.0f64..0.5,
        hi in 0.0f64..0.5,
    ) {
        let range = estimate(revenue, lo, hi);
        prop_assert_eq!(range.min % 1000, 0);
        prop_assert_eq!(range.max % 1000, 0);
    }

    #[test]
    fn matrix_cells_are_ordered(revenue in any::<u64>()) {
        let matrix = BudgetMatrix::compute(revenue);
        for (_, row) in matrix.rows() {
            for range in row {
                prop_assert!(range.min <= range.max);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6–7. Chart series
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn series_has_ten_swept_points(revenue in 0u64..10_000_000_000_000) {
        let series = generate_series(revenue);
        prop_assert_eq!(series.len(), 10);
        for (i, point) in series.iter().enumerate() {
            let expected = revenue as f64 * (i + 1) as f64 / 5.0;
            prop_assert_eq!(point.revenue, expected);
        }
        if revenue > 0 {
            prop_assert!(series.windows(2).all(|w| w[0].revenue < w[1].revenue));
        }
    }

    #[test]
    fn series_midpoints_match_estimator(revenue in 0u64..50_000_000_000) {
        for point in generate_series(revenue) {
            for complexity in Complexity::ALL {
                let tier = coefficients(Priority::SignificantInfluence, complexity);
                let range = estimate(point.revenue, tier.low_pct, tier.high_pct);
                prop_assert_eq!(point.value(complexity), (range.min + range.max) / 2);
            }
        }
    }
}

// ── Concrete scenarios ───────────────────────────────────────────────

#[test]
fn zero_revenue_matches_baseline_for_every_cell() {
    let zero = BudgetMatrix::compute(0);
    let base = BudgetMatrix::compute(10_000_000);
    for priority in Priority::ALL {
        for complexity in Complexity::ALL {
            assert_eq!(zero.get(priority, complexity), base.get(priority, complexity));
        }
    }
}

#[test]
fn two_billion_key_driver_complex() {
    let range = estimate(2_000_000_000.0, 0.0625, 0.05);
    assert_eq!((range.min, range.max), (3_125_000, 5_000_000));
}
