#![forbid(unsafe_code)]

//! Calculator configuration, loadable from TOML.
//!
//! ```toml
//! # bcalc.toml
//! default_revenue = 100000000
//! animation_ms = 500
//! frame_ms = 16
//! ```
//!
//! Every field has a default, so an empty file is a valid configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::revenue::DEFAULT_REVENUE;

/// Longest accepted figure transition.
pub const MAX_ANIMATION_MS: u64 = 60_000;

/// Tunables for the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Revenue shown at startup when none is given on the command line.
    pub default_revenue: u64,
    /// Figure transition length. Zero disables animation.
    pub animation_ms: u64,
    /// Frame interval while figures are animating. Clamped to at least 1.
    pub frame_ms: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_revenue: DEFAULT_REVENUE,
            animation_ms: 500,
            frame_ms: 16,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        let problems = config.validate();
        if problems.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Out-of-range values. An empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.animation_ms > MAX_ANIMATION_MS {
            problems.push(format!(
                "animation_ms must be at most {MAX_ANIMATION_MS}, got {}",
                self.animation_ms
            ));
        }
        problems
    }

    #[inline]
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    #[inline]
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}
