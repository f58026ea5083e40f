mod debug_report;

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use flexdate::{CenturyRule, ColumnReport, ConfigError, Options, YearRange, normalize_column, normalize_verbose_with};
use std::io::{self, IsTerminal, Read};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FLEXDATE_LOG";

/// Normalize spreadsheet date cells to YYYY-MM-DD.
///
/// Each VALUE is normalized in turn; with no VALUE, one value is read per
/// stdin line. Pure digits are spreadsheet day serials, `dd/mm/yy[yy]` and
/// `dd-mm-yy[yy]` are day-first, and other layouts go through a generic parse.
#[derive(Parser, Debug)]
#[command(name = "flexdate", version)]
struct Cli {
    /// Values to normalize.
    values: Vec<String>,

    /// Earliest plausible year (inclusive).
    #[arg(long, default_value_t = YearRange::DEFAULT_MIN_YEAR)]
    min_year: i32,

    /// Latest plausible year (inclusive).
    #[arg(long, default_value_t = YearRange::DEFAULT_MAX_YEAR)]
    max_year: i32,

    /// Two-digit years up to PIVOT are 20YY, the rest 19YY.
    /// By default the window is derived from --max-year.
    #[arg(long, value_name = "PIVOT")]
    century_pivot: Option<u8>,

    /// Print the column report as JSON.
    #[arg(long, conflicts_with = "explain")]
    json: bool,

    /// Print a diagnostic report (matched rule, timing) per value.
    #[arg(long)]
    explain: bool,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long, overrides_with = "color")]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace). Without it, FLEXDATE_LOG applies.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

#[derive(Debug, Error)]
enum UsageError {
    #[error("no input provided (pass values or pipe one per line)")]
    NoInput,
}

/// 2 for argument and configuration errors, 1 for anything else (I/O, serialization).
fn exit_code_for(err: &anyhow::Error) -> i32 {
    let usage = err.chain().any(|cause| cause.is::<ConfigError>() || cause.is::<UsageError>());
    if usage { 2 } else { 1 }
}

/// Exit code: 0 when every value normalized, 1 otherwise.
fn run(cli: &Cli) -> Result<i32> {
    let range = YearRange::new(cli.min_year, cli.max_year).context("invalid --min-year/--max-year")?;
    let options = match cli.century_pivot {
        Some(pivot) => Options { century: CenturyRule::pivot(pivot).context("invalid --century-pivot")? },
        None => Options::default(),
    };

    let values = if cli.values.is_empty() { read_stdin_values()? } else { cli.values.clone() };
    if values.is_empty() {
        return Err(UsageError::NoInput.into());
    }

    if cli.explain {
        let color = if cli.color {
            true
        } else if cli.no_color {
            false
        } else {
            io::stdout().is_terminal()
        };
        let mut failed = false;
        for value in &values {
            let res = normalize_verbose_with(value, &range, &options);
            failed |= res.outcome.is_err();
            debug_report::print_run(&res, color);
        }
        return Ok(if failed { 1 } else { 0 });
    }

    let report = normalize_column(&values, &range, &options);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).context("failed to serialize report")?);
    } else {
        print_plain(&report);
    }
    Ok(if report.is_clean() { 0 } else { 1 })
}

fn print_plain(report: &ColumnReport) {
    for row in &report.rows {
        match &row.outcome {
            Ok(date) => println!("{}\t{}", row.input, date),
            Err(err) => println!("{}\t{}: {}", row.input, err.kind(), err),
        }
    }
}

fn read_stdin_values() -> Result<Vec<String>> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
    Ok(buffer.lines().map(str::to_string).collect())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_exit_with_two() {
        let err = YearRange::new(2030, 2020).context("invalid --min-year/--max-year").unwrap_err();
        assert_eq!(exit_code_for(&err), 2);

        let err = CenturyRule::pivot(120).context("invalid --century-pivot").unwrap_err();
        assert_eq!(exit_code_for(&err), 2);

        assert_eq!(exit_code_for(&UsageError::NoInput.into()), 2);
    }

    #[test]
    fn io_errors_exit_with_one() {
        let io = io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed");
        let err = Err::<(), _>(io).context("failed to read stdin").unwrap_err();
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn cli_rejects_out_of_range_pivot_value_as_config() {
        let cli = Cli::parse_from(["flexdate", "--century-pivot", "150", "15/03/25"]);
        let err = run(&cli).unwrap_err();
        assert_eq!(exit_code_for(&err), 2);
    }
}
