//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for gridcal operations.
pub type Result<T> = std::result::Result<T, CalError>;

#[derive(Debug, Error)]
pub enum CalError {
    /// Month outside 1-12, or a day that does not exist in its month.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// An event record lacks one of its required keys.
    #[error("event is missing required field `{0}`")]
    MissingField(&'static str),

    /// An event day string is not a calendar date.
    #[error("invalid event day `{value}`")]
    UnparsableDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The events file could not be read.
    #[error("cannot read events file `{}`", .path.display())]
    EventsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The events file is not valid TOML.
    #[error("malformed events file `{}`", .path.display())]
    EventsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Command-line argument validation failure.
    #[error("{0}")]
    InvalidArgument(String),
}
