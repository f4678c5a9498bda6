#![forbid(unsafe_code)]

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use bcalc_core::revenue::digits_only;
use bcalc_core::{CalculatorConfig, MonotonicClock, sanitize_revenue_input};
use clap::Parser;

use crate::app::CalculatorApp;
use crate::error::Result;
use crate::logging::{self, LogTarget};
use crate::presenter::Presenter;
use crate::report::Report;
use crate::runtime::Program;
use crate::session::TerminalSession;

#[derive(Debug, Parser)]
#[command(
    name = "bcalc",
    about = "Marketing and website budget ranges from annual revenue",
    version
)]
pub struct Cli {
    /// Starting annual revenue. Anything but digits is ignored.
    #[arg(long, value_name = "AMOUNT")]
    pub revenue: Option<String>,

    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a report and exit instead of starting the interactive screen.
    #[arg(long)]
    pub report: bool,

    /// Print the report as JSON. Implies --report.
    #[arg(long)]
    pub json: bool,

    /// Append logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter when BCALC_LOG is unset (e.g. `debug`, `bcalc=trace`).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn wants_report(&self) -> bool {
        self.report || self.json
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let target = LogTarget::select(cli.log_file.clone(), !cli.wants_report());
    logging::init(&target, cli.log_level.as_deref())?;

    let config = load_config(cli.config.as_deref())?;
    let revenue = starting_revenue(cli.revenue.as_deref(), &config);
    tracing::info!(revenue, report = cli.wants_report(), "bcalc starting");

    if cli.wants_report() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, revenue, cli.json)
    } else {
        run_tui(revenue, &config)
    }
}

/// Defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CalculatorConfig> {
    let Some(path) = path else {
        return Ok(CalculatorConfig::default());
    };
    let config = CalculatorConfig::from_toml_file(path)?;
    tracing::info!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}

/// `--revenue` when given, sanitized like typed input; else the configured default.
pub fn starting_revenue(text: Option<&str>, config: &CalculatorConfig) -> u64 {
    match text {
        Some(text) => {
            if digits_only(text).is_empty() {
                tracing::warn!(input = text, "revenue has no digits, using 0");
            }
            sanitize_revenue_input(text)
        }
        None => config.default_revenue,
    }
}

pub fn write_report<W: Write>(out: &mut W, revenue: u64, json: bool) -> Result<()> {
    let report = Report::build(revenue);
    if json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        write!(out, "{}", report.to_text())?;
    }
    out.flush()?;
    Ok(())
}

fn run_tui(revenue: u64, config: &CalculatorConfig) -> Result<()> {
    let session = TerminalSession::enter()?;
    let mut presenter = Presenter::new(BufWriter::new(io::stdout()));
    let mut program = Program::new(CalculatorApp::new(revenue, config), MonotonicClock::new());
    program.run(&session, &mut presenter)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "bcalc",
            "--revenue",
            "$2,500,000",
            "--json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.revenue.as_deref(), Some("$2,500,000"));
        assert!(cli.json && !cli.report);
        assert!(cli.wants_report());
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(!Cli::try_parse_from(["bcalc"]).unwrap().wants_report());
    }

    #[test]
    fn revenue_text_is_sanitized() {
        let config = CalculatorConfig::default();
        assert_eq!(starting_revenue(Some("$2,500,000"), &config), 2_500_000);
        assert_eq!(starting_revenue(Some("abc"), &config), 0);
        assert_eq!(starting_revenue(None, &config), 100_000_000);
    }

    #[test]
    fn config_file_sets_default_revenue() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_revenue = 42000000").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(starting_revenue(None, &config), 42_000_000);
        assert_eq!(load_config(None).unwrap(), CalculatorConfig::default());
    }

    #[test]
    fn bad_config_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "frame_ms = \"fast\"").unwrap();
        let error = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn report_writes_text_or_json() {
        let mut text = Vec::new();
        write_report(&mut text, 100_000_000, false).unwrap();
        assert!(String::from_utf8(text).unwrap().contains("$188,000 - $300,000"));

        let mut json = Vec::new();
        write_report(&mut json, 100_000_000, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["marketing"]["max"], 10_000_000);
    }
}
