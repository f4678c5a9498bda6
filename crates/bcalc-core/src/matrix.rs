#![forbid(unsafe_code)]

//! The fixed 3×3 priority × complexity budget matrix.

use serde::{Deserialize, Serialize};

use crate::estimator::{BudgetRange, TierCoefficients, estimate_revenue};

/// How central the website is to the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    SupportiveRole,
    SignificantInfluence,
    KeyDriver,
}

impl Priority {
    /// Display order, top row first.
    pub const ALL: [Priority; 3] = [
        Priority::SupportiveRole,
        Priority::SignificantInfluence,
        Priority::KeyDriver,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SupportiveRole => "Supportive Role",
            Self::SignificantInfluence => "Significant Influence",
            Self::KeyDriver => "Key Driver",
        }
    }

    /// Explanation shown in the detail modal.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SupportiveRole => {
                "The website backs up sales and operations that happen elsewhere. \
                 Visitors mostly confirm who you are, find contact details, or read \
                 basic product information."
            }
            Self::SignificantInfluence => {
                "The website shapes buying decisions. Prospects research, compare, and \
                 qualify themselves online before they ever talk to your team."
            }
            Self::KeyDriver => {
                "The website is where revenue happens. Leads, sales, or the product \
                 itself depend on it, and downtime or friction costs money directly."
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// How much custom work the website needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Average,
    Complex,
}

impl Complexity {
    /// Display order, left column first.
    pub const ALL: [Complexity; 3] = [Complexity::Simple, Complexity::Average, Complexity::Complex];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Average => "Average",
            Self::Complex => "Complex",
        }
    }

    /// Explanation shown in the detail modal.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Simple => {
                "A handful of pages built on a standard theme or template, with \
                 contact forms and light content editing."
            }
            Self::Average => {
                "A custom design with a content management system, several page \
                 types, basic integrations such as CRM or newsletter, and SEO work."
            }
            Self::Complex => {
                "Bespoke functionality: e-commerce, customer portals, multiple \
                 integrations, localization, or heavy data-driven features."
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Coefficient table indexed `[priority][complexity]`.
const COEFFICIENTS: [[TierCoefficients; 3]; 3] = [
    [
        TierCoefficients::new(0.0125, 0.01),
        TierCoefficients::new(0.02, 0.02),
        TierCoefficients::new(0.0375, 0.03),
    ],
    [
        TierCoefficients::new(0.025, 0.02),
        TierCoefficients::new(0.0375, 0.03),
        TierCoefficients::new(0.05, 0.04),
    ],
    [
        TierCoefficients::new(0.0375, 0.03),
        TierCoefficients::new(0.05, 0.04),
        TierCoefficients::new(0.0625, 0.05),
    ],
];

/// Fixed coefficients for one matrix cell.
#[inline]
#[must_use]
pub const fn coefficients(priority: Priority, complexity: Complexity) -> TierCoefficients {
    COEFFICIENTS[priority.index()][complexity.index()]
}

/// Every matrix cell evaluated for one revenue figure.
///
/// Always recomputed as a whole; there is no partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetMatrix {
    revenue: u64,
    cells: [[BudgetRange; 3]; 3],
}

impl BudgetMatrix {
    #[must_use]
    pub fn compute(revenue: u64) -> Self {
        let mut cells = [[BudgetRange::default(); 3]; 3];
        for priority in Priority::ALL {
            for complexity in Complexity::ALL {
                cells[priority.index()][complexity.index()] =
                    estimate_revenue(revenue, coefficients(priority, complexity));
            }
        }
        Self { revenue, cells }
    }

    /// Revenue the matrix was computed for (unclamped).
    #[inline]
    #[must_use]
    pub const fn revenue(&self) -> u64 {
        self.revenue
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, priority: Priority, complexity: Complexity) -> BudgetRange {
        self.cells[priority.index()][complexity.index()]
    }

    /// Rows in display order, each with its three ranges left to right.
    pub fn rows(&self) -> impl Iterator<Item = (Priority, [BudgetRange; 3])> + '_ {
        Priority::ALL
            .into_iter()
            .map(|priority| (priority, self.cells[priority.index()]))
    }
}
