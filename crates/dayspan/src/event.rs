//! The calendar event value type.
//!
//! An [`Event`] is an immutable time interval `[start, end]` with display
//! metadata. Construction is the only fallible step: once a value exists its
//! range is guaranteed to satisfy `start <= end`.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::day::parse_zone;
use crate::error::{ConstructionError, RecordError, Result};
use crate::format::{format_time_range, DisplayOptions};

/// Length of an event created with [`Event::with_default_duration`].
pub const DEFAULT_EVENT_MINUTES: i64 = 60;

/// A single calendar entry.
///
/// Equality is field-by-field. There are no setters; a changed event is a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord", into = "EventRecord")]
pub struct Event {
    name: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    location: Option<String>,
    time_zone: Option<Tz>,
    is_all_day: bool,
}

impl Event {
    /// Build an event from raw fields.
    ///
    /// # Errors
    /// Returns [`ConstructionError::InvalidRange`] if `end` is before `start`.
    /// The range is never clamped or reordered.
    pub fn new(
        name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        location: Option<String>,
        time_zone: Option<Tz>,
        is_all_day: bool,
    ) -> Result<Self> {
        if end < start {
            tracing::debug!(%start, %end, "rejecting event with inverted range");
            return Err(ConstructionError::InvalidRange { start, end });
        }

        Ok(Self {
            name: name.into(),
            start,
            end,
            location,
            time_zone,
            is_all_day,
        })
    }

    /// A one-hour timed event starting at `start`, with no location or zone.
    pub fn with_default_duration(name: impl Into<String>, start: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            start,
            end: start
                .checked_add_signed(Duration::minutes(DEFAULT_EVENT_MINUTES))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            location: None,
            time_zone: None,
            is_all_day: false,
        }
    }

    /// An anonymous timed span, used for merged busy output.
    ///
    /// Callers must guarantee `start <= end`.
    pub(crate) fn busy_span(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start <= end);
        Self {
            name: String::new(),
            start,
            end,
            location: None,
            time_zone: None,
            is_all_day: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn time_zone(&self) -> Option<Tz> {
        self.time_zone
    }

    pub fn is_all_day(&self) -> bool {
        self.is_all_day
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// The zone used for day boundaries and display: the event's own zone if it
    /// has one, otherwise `default_zone`.
    pub fn zone_or(&self, default_zone: Tz) -> Tz {
        self.time_zone.unwrap_or(default_zone)
    }

    /// `"<start> - <end>"` with both times in the event's zone (or `default_zone`).
    ///
    /// Meant for timed events; callers check [`Event::is_all_day`] first.
    pub fn display_time_string(&self, default_zone: Tz, options: &DisplayOptions) -> String {
        format_time_range(self.start, self.end, self.zone_or(default_zone), options)
    }
}

/// Serialized form of an [`Event`]: RFC 3339 instants and an IANA zone name.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EventRecord {
    name: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_zone: Option<String>,
    #[serde(default)]
    is_all_day: bool,
}

impl TryFrom<EventRecord> for Event {
    type Error = RecordError;

    fn try_from(record: EventRecord) -> std::result::Result<Self, Self::Error> {
        let time_zone = record.time_zone.as_deref().map(parse_zone).transpose()?;
        Ok(Event::new(
            record.name,
            record.start,
            record.end,
            record.location,
            time_zone,
            record.is_all_day,
        )?)
    }
}

impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        Self {
            name: event.name,
            start: event.start,
            end: event.end,
            location: event.location,
            time_zone: event.time_zone.map(|tz| tz.name().to_string()),
            is_all_day: event.is_all_day,
        }
    }
}
