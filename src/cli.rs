use clap::{Parser, Subcommand};

/// Convert Jalali date-time text to Gregorian timestamps and back.
#[derive(Parser)]
#[command(
    name = "jalali-cli",
    version,
    about = "Convert Jalali date-time text to Gregorian timestamps and back"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert Jalali text to Gregorian timestamps.
    ToGregorian(ToGregorianArgs),
    /// Convert Gregorian timestamps to Jalali text.
    ToJalali(ToJalaliArgs),
}

/// Arguments for the `to-gregorian` subcommand.
#[derive(clap::Args)]
pub struct ToGregorianArgs {
    /// Set the time of every row to 23:59:59.
    #[arg(long, env = "JALALI_END_OF_DAY")]
    pub end_of_day: bool,

    /// Reject days, months and times out of their range instead of absorbing them.
    #[arg(long, env = "JALALI_STRICT")]
    pub strict: bool,

    /// `YYYY-MM-DD[ HH:MM[:SS]]` values; stdin is read line by line when none are given.
    pub values: Vec<String>,
}

/// Arguments for the `to-jalali` subcommand.
#[derive(clap::Args)]
pub struct ToJalaliArgs {
    /// `YYYY-MM-DD[ HH:MM[:SS[.f]]]` values (`T` is accepted as the separator); stdin is read line
    /// by line when none are given.
    pub values: Vec<String>,
}
