//! shiftcal CLI - Command Line Rotas and Calendar Lookups
//!
//! A thin textual adapter over `calendar_core` and `calendar_schedules`:
//! dates are read as DD-MM-YYYY, results are printed on stdout, and logs go
//! to stderr.
//!
//! # Commands
//!
//! - `shiftcal schedule --start D --end D --work N --off M` - Work days of a repeating cycle
//! - `shiftcal weekday --date D` - Weekday name
//! - `shiftcal week --date D` - ISO week number
//! - `shiftcal quarter --date D` - Calendar quarter
//! - `shiftcal leap --year Y` - Leap-year check
//! - `shiftcal weekends --start D --end D` - Weekend day count
//! - `shiftcal next-friday --date D [--thirteenth]` - Forward Friday search
//! - `shiftcal timestamp (--secs S | --date D)` - Timestamp conversion
//!
//! # Architecture
//!
//! As the Service layer, this crate only parses arguments and prints
//! results; all calendar logic lives in the library crates.

use calendar_core::types::time::{Date, DEFAULT_TIMESTAMP_FORMAT};
use clap::{ArgGroup, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

use commands::schedule::OutputFormat;
pub use error::{CliError, Result};

/// shiftcal rota and calendar CLI
#[derive(Parser)]
#[command(name = "shiftcal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the work days of a repeating work/off cycle
    Schedule {
        /// First day of the range (DD-MM-YYYY)
        #[arg(short, long, value_parser = parse_dmy)]
        start: Date,

        /// Last day of the range, inclusive (DD-MM-YYYY)
        #[arg(short, long, value_parser = parse_dmy)]
        end: Date,

        /// Consecutive work days per cycle
        #[arg(short, long, allow_negative_numbers = true)]
        work: i64,

        /// Consecutive off days per cycle
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        off: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "dmy")]
        format: OutputFormat,
    },

    /// Print the weekday name of a date
    Weekday {
        /// Date (DD-MM-YYYY)
        #[arg(short, long, value_parser = parse_dmy)]
        date: Date,
    },

    /// Print the ISO week of a date
    Week {
        /// Date (DD-MM-YYYY)
        #[arg(short, long, value_parser = parse_dmy)]
        date: Date,
    },

    /// Print the calendar quarter of a date
    Quarter {
        /// Date (DD-MM-YYYY)
        #[arg(short, long, value_parser = parse_dmy)]
        date: Date,
    },

    /// Check whether a year is a leap year
    Leap {
        /// Year
        #[arg(short, long, allow_negative_numbers = true)]
        year: i32,
    },

    /// Count Saturdays and Sundays in a range
    Weekends {
        /// First day of the range (DD-MM-YYYY)
        #[arg(short, long, value_parser = parse_dmy)]
        start: Date,

        /// Last day of the range, inclusive (DD-MM-YYYY)
        #[arg(short, long, value_parser = parse_dmy)]
        end: Date,
    },

    /// Find the next Friday after a date
    NextFriday {
        /// Date to search from, exclusive (DD-MM-YYYY)
        #[arg(short, long, value_parser = parse_dmy)]
        date: Date,

        /// Only stop on a Friday the 13th
        #[arg(short, long)]
        thirteenth: bool,
    },

    /// Convert between Unix timestamps and dates
    #[command(group(ArgGroup::new("input").required(true).args(["secs", "date"])))]
    Timestamp {
        /// Unix timestamp in seconds, rendered in UTC
        #[arg(short, long, allow_negative_numbers = true)]
        secs: Option<i64>,

        /// Date whose midnight UTC timestamp is printed (DD-MM-YYYY)
        #[arg(short, long, value_parser = parse_dmy)]
        date: Option<Date>,

        /// strftime pattern used with --secs
        #[arg(short, long, default_value = DEFAULT_TIMESTAMP_FORMAT)]
        pattern: String,
    },
}

fn parse_dmy(s: &str) -> std::result::Result<Date, calendar_core::types::DateError> {
    Date::parse_dmy(s)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Schedule {
            start,
            end,
            work,
            off,
            format,
        } => commands::schedule::run(start, end, work, off, format),
        Commands::Weekday { date } => emit(commands::lookup::weekday(date)),
        Commands::Week { date } => emit(commands::lookup::week(date)),
        Commands::Quarter { date } => emit(commands::lookup::quarter(date)?),
        Commands::Leap { year } => emit(commands::lookup::leap(year)),
        Commands::Weekends { start, end } => emit(commands::lookup::weekends(start, end)),
        Commands::NextFriday { date, thirteenth } => {
            emit(commands::lookup::next_friday_after(date, thirteenth)?)
        }
        Commands::Timestamp {
            secs,
            date,
            pattern,
        } => emit(commands::timestamp::render(secs, date, &pattern)?),
    }
}

fn emit(output: String) -> Result<()> {
    debug!(bytes = output.len(), "writing result");
    println!("{}", output);
    Ok(())
}
