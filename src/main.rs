mod cli;
mod logging;

use std::io::{self, BufRead, BufWriter, Write};
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use jalali_convert::{gregorian_to_jalali, jalali_to_gregorian};
use tracing::{info, warn};

use crate::cli::{Cli, Command};

/// Printed in place of a date that could not be converted.
const NULL: &str = "NULL";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let (args, convert): (_, fn(&str) -> Option<String>) = match command {
        Command::ToJalali(args) => (args, gregorian_to_jalali),
        Command::ToGregorian(args) => (args, jalali_to_gregorian),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut tally = Tally::default();

    if args.dates.is_empty() {
        convert_lines(io::stdin().lock(), &mut out, convert, &mut tally)?;
    } else {
        for date in &args.dates {
            tally.write(&mut out, date, convert(date))?;
        }
    }
    out.flush().context("failed to flush stdout")?;

    info!(
        converted = tally.converted,
        invalid = tally.invalid,
        "conversion finished"
    );

    if args.strict && tally.invalid > 0 {
        bail!(
            "{} of {} dates could not be converted",
            tally.invalid,
            tally.converted + tally.invalid
        );
    }
    Ok(())
}

/// Converts one date per line of `input`.
///
/// A trailing `\n` or `\r\n` is stripped from each line. Lines that are not
/// UTF-8 are reported as `NULL` like any other invalid date.
fn convert_lines(
    mut input: impl BufRead,
    out: &mut impl Write,
    convert: fn(&str) -> Option<String>,
    tally: &mut Tally,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read date from stdin")?;
        if read == 0 {
            return Ok(());
        }

        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        match std::str::from_utf8(line) {
            Ok(text) => tally.write(out, text, convert(text))?,
            Err(_) => {
                let lossy = String::from_utf8_lossy(line);
                tally.write(out, &lossy, None)?;
            }
        }
    }
}

#[derive(Default)]
struct Tally {
    converted: usize,
    invalid: usize,
}

impl Tally {
    fn write(&mut self, out: &mut impl Write, input: &str, result: Option<String>) -> Result<()> {
        let line = if let Some(date) = result {
            self.converted += 1;
            date
        } else {
            warn!(input, "invalid date");
            self.invalid += 1;
            NULL.to_owned()
        };
        writeln!(out, "{line}").context("failed to write to stdout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(input: &[u8], convert: fn(&str) -> Option<String>) -> (String, Tally) {
        let mut out = Vec::new();
        let mut tally = Tally::default();
        convert_lines(input, &mut out, convert, &mut tally).unwrap();
        (String::from_utf8(out).unwrap(), tally)
    }

    #[test]
    fn test_invalid_utf8_line_is_null_and_batch_continues() {
        let (out, tally) = run_lines(
            b"2024-03-20\n\xff\xfe-01-01\n2025-03-21\n",
            gregorian_to_jalali,
        );
        assert_eq!(out, "1403-01-01\nNULL\n1404-01-01\n");
        assert_eq!(tally.converted, 2);
        assert_eq!(tally.invalid, 1);
    }

    #[test]
    fn test_line_endings_are_stripped() {
        let (out, tally) = run_lines(b"1403-01-01\r\n1403-12-30", jalali_to_gregorian);
        assert_eq!(out, "2024-03-20\n2025-03-20\n");
        assert_eq!(tally.converted, 2);
        assert_eq!(tally.invalid, 0);
    }

    #[test]
    fn test_invalid_dates_print_null() {
        let (out, tally) = run_lines(b"1900-02-29\n\n 2024-03-20\n", gregorian_to_jalali);
        assert_eq!(out, "NULL\nNULL\nNULL\n");
        assert_eq!(tally.converted, 0);
        assert_eq!(tally.invalid, 3);
    }

    #[test]
    fn test_tally_write() {
        let mut out = Vec::new();
        let mut tally = Tally::default();
        tally
            .write(&mut out, "1403-01-01", Some("2024-03-20".to_owned()))
            .unwrap();
        tally.write(&mut out, "1402-12-30", None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2024-03-20\nNULL\n");
        assert_eq!((tally.converted, tally.invalid), (1, 1));
    }
}
