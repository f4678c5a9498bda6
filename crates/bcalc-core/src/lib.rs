// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: budget estimation, chart series, revenue input rules, and value animation.
//!
//! # Role in the calculator
//! `bcalc-core` is the pure layer. It owns the estimator that turns a revenue
//! figure into suggested budget ranges, the 3×3 priority/complexity matrix,
//! the chart sweep, and the tween machinery that animates displayed figures.
//! Nothing here touches the terminal.
//!
//! # Primary responsibilities
//! - **Estimator**: `estimate` maps (revenue, tier coefficients) to a rounded
//!   [`BudgetRange`].
//! - **Matrix**: [`BudgetMatrix`] evaluates every priority × complexity cell.
//! - **Series**: [`generate_series`] sweeps revenue for the comparison chart.
//! - **Revenue input**: sanitizing free text and stepping by a fixed amount.
//! - **Animation**: [`AnimationSet`] interpolates each on-screen figure toward
//!   its latest target, driven by a [`FrameClock`].
//!
//! # How it fits in the system
//! `bcalc-widgets` draws what this crate computes and `bcalc` wires the two
//! into an Elm-style model. Every function here is deterministic, so the
//! presentation layer can recompute from scratch on each revenue change.

pub mod animation;
pub mod config;
pub mod error;
pub mod estimator;
pub mod format;
pub mod matrix;
pub mod revenue;
pub mod series;

pub use animation::{
    AnimatedValue, Animation, AnimationSet, FrameClock, ManualClock, MonotonicClock, Tween,
};
pub use config::CalculatorConfig;
pub use error::ConfigError;
pub use estimator::{
    BudgetRange, TierCoefficients, baseline_revenue, estimate, estimate_revenue,
    marketing_suggestion, website_suggestion,
};
pub use format::{format_axis, format_currency, format_range};
pub use matrix::{BudgetMatrix, Complexity, Priority, coefficients};
pub use revenue::sanitize_revenue_input;
pub use series::{SeriesPoint, generate_series};
