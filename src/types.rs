//! Type definitions and constants for grid construction and display.

use chrono::{Locale, NaiveDate};

use crate::events::Event;

/// Display context: everything the renderer needs besides the view itself.
#[derive(Clone, Debug)]
pub struct GridContext {
    /// Locale used for month and weekday names.
    pub locale: Locale,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Today's date for highlighting.
    pub today: NaiveDate,
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the cell belongs to the displayed month (month number comparison).
    pub in_month: bool,
    /// Events falling on this cell, in input order.
    pub events: Vec<Event>,
}

/// A single Sunday-through-Saturday row of the grid.
pub type Week = Vec<DayCell>;

/// Full rendered range for one month, padded outward to whole weeks.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

/// First-of-month dates for the displayed month and its neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavContext {
    pub current: NaiveDate,
    pub prev_month: NaiveDate,
    pub next_month: NaiveDate,
}

/// Build output consumed by the renderer: grid, weekday headers, navigation.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub grid: MonthGrid,
    pub headers: Vec<String>,
    pub nav: NavContext,
}

// Constants for grid geometry
pub const DAYS_PER_WEEK: usize = 7;
pub const MAX_WEEKS_PER_MONTH: usize = 6;

// Color defaults on; auto-disabled when stdout is not a terminal
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_FAINT: &str = "\x1b[2m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
