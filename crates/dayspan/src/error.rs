//! Error types for dayspan operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Raised when an [`Event`](crate::Event) cannot be built from the supplied fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The end instant lies before the start instant.
    #[error("Invalid range: end {end} is before start {start}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Raised when a timezone name is not a known IANA identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    #[error("Unknown timezone: {0}")]
    Unknown(String),
}

/// Raised when a serialized event record cannot be turned into an [`Event`](crate::Event).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Zone(#[from] ZoneError),
}

pub type Result<T> = std::result::Result<T, ConstructionError>;
