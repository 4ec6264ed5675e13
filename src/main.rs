//! Month calendar CLI application.
//!
//! # Usage
//! ```ignore
//! gridcal                  // Current month
//! gridcal 2 2026           // February 2026
//! gridcal -e events.toml   // Current month with events
//! ```

use gridcal::args::{Args, get_display_date};
use gridcal::error::Result;
use gridcal::events::load_events;
use gridcal::formatter::print_month_view;
use gridcal::types::{GridContext, MonthView};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("gridcal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let ctx = GridContext::new(args)?;
    let (year, month) = get_display_date(args)?;

    let events = match &args.events {
        Some(path) => load_events(path)?,
        None => Vec::new(),
    };

    let view = MonthView::build(&ctx, year, month, &events)?;
    print_month_view(&ctx, &view);

    Ok(())
}
