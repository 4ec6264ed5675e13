//! Command-line argument parsing using clap.
//!
//! Arguments follow cal convention: `[month] [year]`

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::{Datelike, Locale};
use clap::{Parser, ValueHint};

use crate::error::{CalError, Result};
use crate::types::{COLOR_ENABLED_BY_DEFAULT, GridContext};

#[derive(Parser, Debug)]
#[command(name = "gridcal")]
#[command(about = "Displays a month calendar grid with event annotations", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month (1-12 or name) - optional, defaults to the current month.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Read events from a TOML file.
    #[arg(
        short,
        long,
        help_heading = "Calendar options",
        value_name = "file",
        value_hint = ValueHint::FilePath
    )]
    pub events: Option<PathBuf>,

    /// Locale for month and weekday names.
    #[arg(
        long,
        default_value = "en_US",
        help_heading = "Output options",
        value_name = "tag"
    )]
    pub locale: String,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display one month as a week-by-week grid.

Without any arguments, display the current month.

Examples:
  gridcal                    Display current month
  gridcal 2 2026             Display February 2026
  gridcal august             Display August of the current year
  gridcal 2026               Display the current month of 2026
  gridcal -e events.toml     Annotate the grid with events
  gridcal --locale fr_FR     French month and weekday names
  gridcal --color            Disable colorized output";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl GridContext {
    pub fn new(args: &Args) -> Result<Self> {
        let locale = args
            .locale
            .parse::<Locale>()
            .map_err(|_| CalError::InvalidArgument(format!("Unknown locale: {}", args.locale)))?;

        let color = !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        Ok(GridContext {
            locale,
            color,
            today: get_today_date(),
        })
    }
}

/// Get today's date, respecting GRIDCAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var("GRIDCAL_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Calculate the display month from positional arguments.
///
/// Argument patterns:
/// - no args: current month
/// - 1 arg: year (4 digits) or month (1-12 or name)
/// - 2 args: month year
pub fn get_display_date(args: &Args) -> Result<(i32, u32)> {
    let today = get_today_date();

    match (&args.month_arg, &args.year_arg) {
        // No arguments: current month
        (None, None) => Ok((today.year(), today.month())),
        // One argument: could be year (4 digits) or month (1-2 digits or name)
        (Some(val), None) => {
            if let Ok(num) = val.parse::<i32>() {
                // 4 digits = year
                if (1000..=9999).contains(&num) {
                    return Ok((num, today.month()));
                }
                // 1-2 digits = month
                if (1..=12).contains(&num) {
                    return Ok((today.year(), num as u32));
                }
            }
            // Try parsing as month name
            if let Some(month) = crate::formatter::parse_month(val) {
                return Ok((today.year(), month));
            }
            Err(CalError::InvalidArgument(format!(
                "Invalid argument: {}",
                val
            )))
        }
        // Two arguments: month year (e.g., gridcal 2 2026)
        (Some(month_str), Some(year_str)) => {
            let month = crate::formatter::parse_month(month_str).ok_or_else(|| {
                CalError::InvalidArgument(format!("Invalid month: {}", month_str))
            })?;
            let year = year_str
                .parse::<i32>()
                .map_err(|_| CalError::InvalidArgument(format!("Invalid year: {}", year_str)))?;
            if !(1..=9999).contains(&year) {
                return Err(CalError::InvalidArgument(format!(
                    "Invalid year: {} (must be 1-9999)",
                    year
                )));
            }
            Ok((year, month))
        }
        // Invalid combinations
        _ => Err(CalError::InvalidArgument(
            "Invalid argument combination".to_string(),
        )),
    }
}
