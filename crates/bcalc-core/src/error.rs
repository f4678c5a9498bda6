#![forbid(unsafe_code)]

//! Error types for configuration loading.
//!
//! The calculation itself has no error path; only reading a configuration
//! file can fail.

use std::fmt;

/// Configuration loading failure.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The TOML did not parse or had the wrong shape.
    Toml(toml::de::Error),
    /// Values parsed but fall outside accepted ranges.
    Invalid(Vec<String>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "config I/O error: {err}"),
            Self::Toml(err) => write!(f, "config TOML error: {err}"),
            Self::Invalid(problems) => {
                write!(f, "invalid config: {}", problems.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Toml(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(err)
    }
}
