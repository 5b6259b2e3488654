//! Date arithmetic for week-based pickers.
//!
//! All helpers work on wall-clock [`NaiveDate`]s. Operations that could leave
//! chrono's representable range return `None` instead of panicking.

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

use crate::day::{date_in_zone, day_bounds};

pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

pub fn add_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    add_days(date, weeks.checked_mul(7)?)
}

/// 0-based position of `date` in its week, where `week_start` is 0.
pub fn index_in_week(date: NaiveDate, week_start: Weekday) -> u32 {
    (date.weekday().num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

/// The seven dates of the week containing `date`, starting at `week_start`.
pub fn days_of_week(date: NaiveDate, week_start: Weekday) -> Option<[NaiveDate; 7]> {
    let first = date.checked_sub_days(Days::new(u64::from(index_in_week(date, week_start))))?;
    // Bail before filling if the week runs past the last representable date.
    first.checked_add_days(Days::new(6))?;

    let mut days = [first; 7];
    for (offset, slot) in (0u64..).zip(days.iter_mut()) {
        *slot = first + Days::new(offset);
    }
    Some(days)
}

/// The 4th day of the week containing `date` (Wednesday for Sunday-start weeks).
pub fn middle_of_week(date: NaiveDate, week_start: Weekday) -> Option<NaiveDate> {
    days_of_week(date, week_start).map(|days| days[3])
}

pub fn is_same_week(a: NaiveDate, b: NaiveDate, week_start: Weekday) -> bool {
    match (days_of_week(a, week_start), days_of_week(b, week_start)) {
        (Some(week_a), Some(week_b)) => week_a[0] == week_b[0],
        _ => false,
    }
}

/// Whether two instants fall on the same calendar date in `zone`.
pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>, zone: Tz) -> bool {
    date_in_zone(a, zone) == date_in_zone(b, zone)
}

/// The last whole second of `date` in `zone` (one second before the next local midnight).
pub fn end_of_day(date: NaiveDate, zone: Tz) -> DateTime<Utc> {
    let (_, next_midnight) = day_bounds(date, zone);
    next_midnight - Duration::seconds(1)
}
