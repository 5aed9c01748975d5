use clap::{Parser, Subcommand};

/// Gregorian <-> Jalali date converter.
#[derive(Parser)]
#[command(
    name = "jalali-convert",
    version,
    about = "Convert YYYY-MM-DD dates between the Gregorian and Jalali calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Conversion direction.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert Gregorian dates to Jalali.
    ToJalali(ConvertArgs),
    /// Convert Jalali dates to Gregorian.
    ToGregorian(ConvertArgs),
}

/// Arguments shared by both directions.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Dates in YYYY-MM-DD form. Read one per line from stdin when omitted.
    pub dates: Vec<String>,

    /// Exit with a failure status if any date could not be converted.
    #[arg(long)]
    pub strict: bool,
}
