//! Timezone-relative calendar days and the day-occurrence predicate.
//!
//! A calendar day is the half-open instant interval between two consecutive
//! local midnights in a zone. Boundaries come from calendar arithmetic on the
//! wall-clock date, so a day that contains a DST transition is 23 or 25 real
//! hours long rather than a fixed 86,400 seconds. A date the zone skipped
//! entirely (Pacific/Apia on 2011-12-30) has an empty interval.

use chrono::{DateTime, Days, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ZoneError;
use crate::event::Event;

/// Bound on any UTC offset in the timezone database, in seconds (LMT offsets
/// reach just under 16 hours).
const MAX_OFFSET_SECS: i64 = 16 * 3600;

/// Parse an IANA timezone identifier (e.g. "America/New_York").
///
/// # Errors
/// Returns [`ZoneError::Unknown`] if the name is not in the timezone database.
pub fn parse_zone(name: &str) -> Result<Tz, ZoneError> {
    name.parse::<Tz>()
        .map_err(|_| ZoneError::Unknown(name.to_string()))
}

/// The first instant of `date` in `zone`.
///
/// If midnight falls inside a DST gap the first valid wall-clock time after
/// the gap is used. If midnight is ambiguous the earlier instant wins. For a
/// skipped date this is the instant the zone jumped past it, which is also the
/// start of the following day.
pub fn local_midnight(date: NaiveDate, zone: Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);

    match zone.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => first_instant_at_or_after(midnight, zone),
    }
}

/// The earliest instant whose wall-clock time in `zone` is at or after `local`.
///
/// Bisects whole seconds between the two instants `local` could map to under
/// the widest possible offsets. Zone transitions always fall on whole seconds.
fn first_instant_at_or_after(local: NaiveDateTime, zone: Tz) -> DateTime<Utc> {
    let reaches = |secs: i64| {
        DateTime::from_timestamp(secs, 0)
            .is_none_or(|instant| instant.with_timezone(&zone).naive_local() >= local)
    };

    let naive = local.and_utc().timestamp();
    let mut lo = naive - MAX_OFFSET_SECS;
    let mut hi = naive + MAX_OFFSET_SECS;

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if reaches(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    DateTime::from_timestamp(hi, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// The half-open instant interval `[start, end)` covered by `date` in `zone`.
///
/// `end` is the next day's local midnight, not `start + 24h`.
pub fn day_bounds(date: NaiveDate, zone: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = local_midnight(date, zone);
    let end = date
        .checked_add_days(Days::new(1))
        .map(|next| local_midnight(next, zone))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    (start, end)
}

/// The calendar date `instant` falls on when viewed in `zone`.
pub fn date_in_zone(instant: DateTime<Utc>, zone: Tz) -> NaiveDate {
    instant.with_timezone(&zone).date_naive()
}

/// Whether `event` is visible on `day`.
///
/// The day is interpreted in the event's own zone if it has one, otherwise in
/// `default_zone`. The event end is treated as closed: an event ending exactly
/// at midnight still counts on the day it ends, and an event that spans
/// midnight counts on every day it touches. Nothing occurs on a date the zone
/// skipped.
pub fn occurs_on_day(event: &Event, day: NaiveDate, default_zone: Tz) -> bool {
    let (day_start, day_end) = day_bounds(day, event.zone_or(default_zone));
    day_start < day_end && event.end() >= day_start && event.start() < day_end
}
