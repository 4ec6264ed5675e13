//! Event input: record validation and events-file loading.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{CalError, Result};

/// A dated entry shown on the calendar.
///
/// Events are matched to grid cells by month and day only, so a single
/// event reappears on the same date every year regardless of the year it
/// was entered with.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub day: NaiveDate,
    pub title: String,
    pub url: String,
    /// Optional display tag passed through to the renderer.
    pub class: Option<String>,
}

impl Event {
    pub fn new(day: NaiveDate, title: &str, url: &str) -> Self {
        Event {
            day,
            title: title.to_string(),
            url: url.to_string(),
            class: None,
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }
}

/// Raw event record as it appears in the events file, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct EventRecord {
    pub day: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub class: Option<String>,
}

impl EventRecord {
    /// Check required keys and parse the day into a date.
    pub fn validate(self) -> Result<Event> {
        let day = self.day.ok_or(CalError::MissingField("day"))?;
        let title = self.title.ok_or(CalError::MissingField("title"))?;
        let url = self.url.ok_or(CalError::MissingField("url"))?;
        let day = NaiveDate::parse_from_str(&day, "%Y-%m-%d").map_err(|source| {
            CalError::UnparsableDate {
                value: day.clone(),
                source,
            }
        })?;
        Ok(Event {
            day,
            title,
            url,
            class: self.class,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct EventsFile {
    #[serde(default)]
    event: Vec<EventRecord>,
}

/// Load and validate events from a TOML file of `[[event]]` tables.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let raw = fs::read_to_string(path).map_err(|source| CalError::EventsIo {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: EventsFile = toml::from_str(&raw).map_err(|source| CalError::EventsParse {
        path: path.to_path_buf(),
        source,
    })?;
    parsed.event.into_iter().map(EventRecord::validate).collect()
}
