//! Month-grid calendar computation with event placement.
//!
//! Features:
//! - Sunday-first month grids padded outward to whole weeks
//! - Year-independent event matching (events recur annually by date)
//! - Previous/next month navigation dates
//! - Localized month and weekday names

pub mod args;
pub mod calendar;
pub mod error;
pub mod events;
pub mod formatter;
pub mod types;
