#![forbid(unsafe_code)]

//! Non-interactive report: the same figures the screen shows, as plain text
//! or JSON.

use std::fmt::Write as _;

use bcalc_core::revenue::{BASELINE_REVENUE, is_low_revenue};
use bcalc_core::{
    BudgetMatrix, BudgetRange, Complexity, SeriesPoint, format_axis, format_currency,
    format_range, generate_series, marketing_suggestion, website_suggestion,
};
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub priority: &'static str,
    pub simple: BudgetRange,
    pub average: BudgetRange,
    pub complex: BudgetRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub revenue: u64,
    /// Revenue the estimates are computed from.
    pub baseline_revenue: u64,
    pub low_revenue: bool,
    pub marketing: BudgetRange,
    pub website: BudgetRange,
    pub matrix: Vec<MatrixRow>,
    pub series: Vec<SeriesPoint>,
}

impl Report {
    #[must_use]
    pub fn build(revenue: u64) -> Self {
        let matrix = BudgetMatrix::compute(revenue)
            .rows()
            .map(|(priority, [simple, average, complex])| MatrixRow {
                priority: priority.label(),
                simple,
                average,
                complex,
            })
            .collect();

        Self {
            revenue,
            baseline_revenue: revenue.max(BASELINE_REVENUE),
            low_revenue: is_low_revenue(revenue),
            marketing: marketing_suggestion(revenue),
            website: website_suggestion(revenue),
            matrix,
            series: generate_series(revenue),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "Annual revenue: {}", format_currency(self.revenue as f64))?;
        if self.low_revenue {
            let baseline = format_currency(self.baseline_revenue as f64);
            writeln!(out, "Revenue under {baseline} is estimated as {baseline}.")?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Marketing budget (5-10% of revenue):      {}",
            format_range(self.marketing)
        )?;
        writeln!(
            out,
            "Website budget (significant, average):    {}",
            format_range(self.website)
        )?;
        writeln!(out)?;

        writeln!(out, "Website budget by priority and complexity")?;
        write!(out, "{:<22}", "")?;
        for complexity in Complexity::ALL {
            write!(out, "{:>26}", complexity.label())?;
        }
        writeln!(out)?;
        for row in &self.matrix {
            write!(out, "{:<22}", row.priority)?;
            for range in [row.simple, row.average, row.complex] {
                write!(out, "{:>26}", format_range(range))?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;

        writeln!(out, "Website budget midpoint by revenue (significant influence)")?;
        write!(out, "{:<10}", "Revenue")?;
        for complexity in Complexity::ALL {
            write!(out, "{:>10}", complexity.label())?;
        }
        writeln!(out)?;
        for point in &self.series {
            write!(out, "{:<10}", format_axis(point.revenue))?;
            for complexity in Complexity::ALL {
                write!(out, "{:>10}", format_axis(point.value(complexity) as f64))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
