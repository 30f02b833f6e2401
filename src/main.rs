mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use jalali::{ParseMode, format_gregorian_as_jalali, parse_jalali_datetime};
use tracing::{info, warn};

use crate::cli::{Cli, Command};

/// Accepted timestamp layouts for `to-jalali`, tried in order before a bare date.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(0) => {}
        Ok(failed) => {
            eprintln!("Error: {failed} row(s) failed to convert");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Run a subcommand and return how many rows failed.
fn run(command: Command) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::ToGregorian(args) => {
            let mode = if args.strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            };
            let convert = |row: &str| -> Result<String> {
                Ok(parse_jalali_datetime(row, args.end_of_day, mode)?.to_string())
            };
            convert_rows(rows(args.values), convert, &mut out)
        }
        Command::ToJalali(args) => {
            let convert =
                |row: &str| -> Result<String> { Ok(format_gregorian_as_jalali(&parse_timestamp(row)?)) };
            convert_rows(rows(args.values), convert, &mut out)
        }
    }
}

/// The given values, or the lines of stdin when there are none.
fn rows(values: Vec<String>) -> Box<dyn Iterator<Item = io::Result<String>>> {
    if values.is_empty() {
        Box::new(io::stdin().lines())
    } else {
        Box::new(values.into_iter().map(Ok))
    }
}

/// Read a Gregorian timestamp in one of [`TIMESTAMP_FORMATS`] or a bare `YYYY-MM-DD` date.
fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(timestamp);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .with_context(|| format!("invalid Gregorian timestamp {text:?}"))
}

/// Convert each row independently and write one line per row, in order.
///
/// A failed row is reported on stderr and leaves an empty line, and so does a blank row without
/// counting as failed. Output line `n` always belongs to input row `n`.
fn convert_rows<I, F, W>(rows: I, convert: F, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = io::Result<String>>,
    F: Fn(&str) -> Result<String>,
    W: Write,
{
    let mut total = 0;
    let mut failed = 0;

    for (i, row) in rows.into_iter().enumerate() {
        let row = row.context("failed to read input")?;
        let row = row.trim_end_matches('\r');
        if row.trim().is_empty() {
            writeln!(out)?;
            continue;
        }
        total += 1;

        match convert(row) {
            Ok(converted) => writeln!(out, "{converted}")?,
            Err(e) => {
                failed += 1;
                warn!(row = i + 1, input = row, "conversion failed: {e:#}");
                eprintln!("row {}: {e:#}", i + 1);
                writeln!(out)?;
            }
        }
    }

    info!(total, failed, "converted rows");
    Ok(failed)
}
