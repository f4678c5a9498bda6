#![forbid(unsafe_code)]

//! Terminal budget calculator.
//!
//! Type an annual revenue and see a suggested marketing budget, a website
//! budget for every priority and complexity combination, and how the
//! website budget grows with revenue. `bcalc --report` prints the same
//! figures without the interactive screen.

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod presenter;
pub mod report;
pub mod runtime;
pub mod session;
pub mod theme;
pub mod view;

pub use cli::run_from_env;
pub use error::{AppError, Result};
