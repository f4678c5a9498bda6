#![forbid(unsafe_code)]

//! Revenue sweep for the comparison chart.
//!
//! Ten points from 20% to 200% of the current revenue, each carrying the
//! Significant Influence midpoints for the three complexity tiers.

use serde::{Deserialize, Serialize};

use crate::estimator::estimate;
use crate::matrix::{Complexity, Priority, coefficients};

/// Number of points in every generated series.
pub const SERIES_LEN: usize = 10;

/// Sweep step is `revenue / SWEEP_DIVISOR`.
const SWEEP_DIVISOR: f64 = 5.0;

/// One x-position on the chart with a midpoint per complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Swept revenue, `revenue * i / 5`.
    pub revenue: f64,
    pub simple: u64,
    pub average: u64,
    pub complex: u64,
}

impl SeriesPoint {
    /// Midpoint for a complexity tier.
    #[inline]
    #[must_use]
    pub const fn value(&self, complexity: Complexity) -> u64 {
        match complexity {
            Complexity::Simple => self.simple,
            Complexity::Average => self.average,
            Complexity::Complex => self.complex,
        }
    }
}

/// Build the chart series for `revenue`.
///
/// Always [`SERIES_LEN`] points, freshly computed on each call.
#[must_use]
pub fn generate_series(revenue: u64) -> Vec<SeriesPoint> {
    let midpoint = |sweep: f64, complexity: Complexity| {
        let tier = coefficients(Priority::SignificantInfluence, complexity);
        estimate(sweep, tier.low_pct, tier.high_pct).midpoint()
    };

    (1..=SERIES_LEN)
        .map(|i| {
            let sweep = revenue as f64 * i as f64 / SWEEP_DIVISOR;
            SeriesPoint {
                revenue: sweep,
                simple: midpoint(sweep, Complexity::Simple),
                average: midpoint(sweep, Complexity::Average),
                complex: midpoint(sweep, Complexity::Complex),
            }
        })
        .collect()
}
