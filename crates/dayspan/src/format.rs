//! Display configuration and pure time/date formatting.
//!
//! Nothing here caches a formatter: every function takes the zone and
//! [`DisplayOptions`] it needs as arguments.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Clock convention for rendered times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourCycle {
    /// `1:00 PM`
    #[default]
    H12,
    /// `13:00`
    H24,
}

/// Host-supplied display settings.
///
/// Deserializes from a partial object; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub hour_cycle: HourCycle,
    /// First day of the week for date-picker rows.
    pub week_start: Weekday,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            hour_cycle: HourCycle::H12,
            week_start: Weekday::Sun,
        }
    }
}

/// Short clock time, e.g. `1:00 PM` or `13:00`.
pub fn format_time(instant: DateTime<Utc>, zone: Tz, options: &DisplayOptions) -> String {
    let pattern = match options.hour_cycle {
        HourCycle::H12 => "%-I:%M %p",
        HourCycle::H24 => "%H:%M",
    };
    instant.with_timezone(&zone).format(pattern).to_string()
}

/// `"<start> - <end>"` using [`format_time`] for both ends.
pub fn format_time_range(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    zone: Tz,
    options: &DisplayOptions,
) -> String {
    format!(
        "{} - {}",
        format_time(start, zone, options),
        format_time(end, zone, options)
    )
}

/// Hour label for a day view's time gutter, e.g. `1 PM` or `13:00`.
pub fn format_hour_label(instant: DateTime<Utc>, zone: Tz, options: &DisplayOptions) -> String {
    let pattern = match options.hour_cycle {
        HourCycle::H12 => "%-I %p",
        HourCycle::H24 => "%H:00",
    };
    instant.with_timezone(&zone).format(pattern).to_string()
}

/// Single-letter weekday, e.g. `M` for Monday.
pub fn format_weekday_initial(date: NaiveDate) -> String {
    let name = date.weekday().to_string();
    name.chars().take(1).collect()
}

/// Day of month without padding, e.g. `1`.
pub fn format_day_of_month(date: NaiveDate) -> String {
    date.day().to_string()
}

/// Full month name and year, e.g. `January 2019`.
pub fn format_month_and_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
