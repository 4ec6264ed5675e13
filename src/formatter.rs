//! Terminal rendering of a month view: grid table, event listing, navigation.

use chrono::{Datelike, Locale, NaiveDate, Weekday};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::{
    COLOR_FAINT, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, DayCell,
    GridContext, MonthView, Week,
};

/// Minimum width of one day column.
const MIN_CELL_WIDTH: usize = 3;

/// Fallback line width when stdout is not a terminal.
const DEFAULT_LINE_WIDTH: usize = 80;

/// Parse month from string (numeric 1-12 or English name).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    let month_names: [(&str, u32); 23] = [
        // Full names
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        // Short forms
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ];
    month_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num)
}

/// Month-and-year title, centered over the grid and optionally colored.
pub fn format_month_header(
    first_of_month: NaiveDate,
    width: usize,
    locale: Locale,
    color: bool,
) -> String {
    let header = first_of_month
        .format_localized("%B %Y", locale)
        .to_string();
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

fn pad_left(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat(width - text_width), text)
}

/// Trim a line to the given display width.
fn truncate_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

/// Width of one day column for the given weekday headers.
fn cell_width(headers: &[String]) -> usize {
    headers
        .iter()
        .map(|h| h.width())
        .max()
        .unwrap_or(MIN_CELL_WIDTH)
        .max(MIN_CELL_WIDTH)
}

/// Weekday header row in grid order, optionally colored.
pub fn format_weekday_header(headers: &[String], cell: usize, color: bool) -> String {
    let row = headers
        .iter()
        .map(|h| pad_left(h, cell))
        .collect::<Vec<_>>()
        .join(" ");
    if color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row
    }
}

/// Format one day cell with color highlighting.
///
/// Color priority: today > out-of-month > has events > weekend > regular
fn format_day(ctx: &GridContext, cell: &DayCell, width: usize) -> String {
    let day_str = pad_left(&cell.date.day().to_string(), width);
    if !ctx.color {
        return day_str;
    }

    if cell.date == ctx.today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if !cell.in_month {
        format!("{}{}{}", COLOR_FAINT, day_str, COLOR_RESET)
    } else if !cell.events.is_empty() {
        format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
    } else if matches!(cell.date.weekday(), Weekday::Sat | Weekday::Sun) {
        format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
    } else {
        day_str
    }
}

fn format_week(ctx: &GridContext, week: &Week, cell: usize) -> String {
    week.iter()
        .map(|d| format_day(ctx, d, cell))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Event listing below the grid: one line per event, in grid order.
fn format_event_lines(ctx: &GridContext, view: &MonthView, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for week in &view.grid.weeks {
        for cell in week {
            for event in &cell.events {
                let date = cell.date.format_localized("%b %e", ctx.locale);
                let mut line = format!("  {} {}  <{}>", date, event.title, event.url);
                if let Some(class) = &event.class {
                    line.push_str(&format!(" [{}]", class));
                }
                lines.push(truncate_to_width(&line, max_width));
            }
        }
    }
    lines
}

/// Navigation footer naming the previous and next months.
fn format_nav_footer(view: &MonthView, locale: Locale, width: usize) -> String {
    let prev = view
        .nav
        .prev_month
        .format_localized("%B %Y", locale)
        .to_string();
    let next = view
        .nav
        .next_month
        .format_localized("%B %Y", locale)
        .to_string();
    let left = format!("< {}", prev);
    let right = format!("{} >", next);
    let padding = width.saturating_sub(left.width() + right.width()).max(2);
    format!("{}{}{}", left, " ".repeat(padding), right)
}

/// Format a month view as terminal lines.
pub fn format_month_view(ctx: &GridContext, view: &MonthView) -> Vec<String> {
    let cell = cell_width(&view.headers);
    let grid_width = cell * view.headers.len() + view.headers.len().saturating_sub(1);

    let mut lines = Vec::with_capacity(view.grid.weeks.len() + 4);
    lines.push(format_month_header(
        view.nav.current,
        grid_width,
        ctx.locale,
        ctx.color,
    ));
    lines.push(format_weekday_header(&view.headers, cell, ctx.color));
    for week in &view.grid.weeks {
        lines.push(format_week(ctx, week, cell));
    }

    let max_width = get_terminal_width()
        .map(|w| w as usize)
        .unwrap_or(DEFAULT_LINE_WIDTH)
        .max(grid_width);
    let events = format_event_lines(ctx, view, max_width);
    if !events.is_empty() {
        lines.push(String::new());
        lines.extend(events);
    }

    lines.push(String::new());
    lines.push(format_nav_footer(view, ctx.locale, grid_width));
    lines
}

/// Print a month view to stdout.
pub fn print_month_view(ctx: &GridContext, view: &MonthView) {
    for line in format_month_view(ctx, view) {
        println!("{}", line);
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
