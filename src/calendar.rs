//! Month grid construction: week slicing, event placement, navigation dates.

use chrono::{Datelike, Duration, Locale, NaiveDate, Weekday};

use crate::error::{CalError, Result};
use crate::events::Event;
use crate::types::{
    DAYS_PER_WEEK, DayCell, GridContext, MAX_WEEKS_PER_MONTH, MonthGrid, MonthView, NavContext,
    Week,
};

/// Gregorian leap year: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// First day of the given month, rejecting out-of-range month numbers.
pub fn month_start(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalError::InvalidDate {
        year,
        month,
        day: 1,
    })
}

fn month_end(year: i32, month: u32) -> Result<NaiveDate> {
    let day = days_in_month(year, month);
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalError::InvalidDate { year, month, day })
}

impl NavContext {
    /// Navigation dates for a month, wrapping the year at both ends.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let current = month_start(year, month)?;

        let (prev_year, prev_month) = if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        };
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };

        Ok(NavContext {
            current,
            prev_month: month_start(prev_year, prev_month)?,
            next_month: month_start(next_year, next_month)?,
        })
    }
}

impl MonthGrid {
    /// Build the padded week grid for a month, placing events on their cells.
    pub fn new(year: i32, month: u32, events: &[Event]) -> Result<Self> {
        let first = month_start(year, month)?;
        let last = month_end(year, month)?;

        // Pad outward to the enclosing Sunday and Saturday.
        let grid_start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
        let grid_end = last + Duration::days(i64::from(6 - last.weekday().num_days_from_sunday()));

        let mut weeks: Vec<Week> = Vec::with_capacity(MAX_WEEKS_PER_MONTH);
        let mut week: Week = Vec::with_capacity(DAYS_PER_WEEK);

        let mut day = grid_start;
        while day <= grid_end {
            week.push(DayCell {
                date: day,
                in_month: day.month() == month,
                events: events_on(events, day),
            });
            if day.weekday() == Weekday::Sat {
                weeks.push(week);
                week = Vec::with_capacity(DAYS_PER_WEEK);
            }
            day += Duration::days(1);
        }

        Ok(MonthGrid { year, month, weeks })
    }
}

/// Events falling on a day. Matches month and day only: an event keeps
/// showing up on the same date every year, whatever year it carries.
fn events_on(events: &[Event], day: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.day.month() == day.month() && e.day.day() == day.day())
        .cloned()
        .collect()
}

/// Abbreviated weekday names in fixed Sunday-first order.
pub fn weekday_headers(locale: Locale) -> Vec<String> {
    // 2000-01-02 was a Sunday.
    let base = NaiveDate::from_ymd_opt(2000, 1, 2).unwrap();
    (0..DAYS_PER_WEEK as i64)
        .map(|offset| {
            (base + Duration::days(offset))
                .format_localized("%a", locale)
                .to_string()
        })
        .collect()
}

impl MonthView {
    /// Assemble grid, weekday headers and navigation dates for one month.
    pub fn build(ctx: &GridContext, year: i32, month: u32, events: &[Event]) -> Result<Self> {
        Ok(MonthView {
            grid: MonthGrid::new(year, month, events)?,
            headers: weekday_headers(ctx.locale),
            nav: NavContext::new(year, month)?,
        })
    }
}
