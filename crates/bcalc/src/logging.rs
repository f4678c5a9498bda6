#![forbid(unsafe_code)]

//! Log subscriber setup.
//!
//! `BCALC_LOG` takes `EnvFilter` directives (`BCALC_LOG=bcalc=debug`) and
//! wins over `--log-level`. The TUI owns the terminal, so interactive runs
//! only log when given a file.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

pub const LOG_ENV: &str = "BCALC_LOG";
pub const DEFAULT_LEVEL: &str = "info";

static INSTALLED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// File when given, otherwise stderr for the report and nothing for
    /// the TUI.
    #[must_use]
    pub fn select(log_file: Option<PathBuf>, interactive: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if interactive => Self::Off,
            None => Self::Stderr,
        }
    }
}

/// Filter directive from the environment value, then the CLI level.
#[must_use]
pub fn filter_directive(env: Option<String>, level: Option<&str>) -> String {
    env.filter(|value| !value.trim().is_empty())
        .or_else(|| level.map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_owned())
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(target: &LogTarget, level: Option<&str>) -> Result<()> {
    if *target == LogTarget::Off || INSTALLED.load(Ordering::Acquire) {
        return Ok(());
    }

    let directive = filter_directive(std::env::var(LOG_ENV).ok(), level);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| AppError::logging(format!("invalid filter {directive:?}: {e}")))?;

    let installed = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| AppError::logging(e.to_string()))?;
    INSTALLED.store(true, Ordering::Release);
    tracing::debug!(filter = %directive, "logging initialized");
    Ok(())
}
