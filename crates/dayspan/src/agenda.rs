//! One calendar day's view of an event collection.
//!
//! Composes the day predicate with the merge engine the way a day view
//! consumes them: filter to the day, split off all-day entries, merge the rest.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;

use crate::day::occurs_on_day;
use crate::event::Event;
use crate::merge::merge_overlapping;

/// Events visible on a single day, split the way a day view renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAgenda {
    pub day: NaiveDate,
    /// All-day events, in input order.
    pub all_day: Vec<Event>,
    /// Timed events, sorted by `(start, end)`.
    pub timed: Vec<Event>,
    /// Merged busy spans covering `timed`.
    pub busy: Vec<Event>,
}

/// Build the agenda for `day`.
///
/// Each event's own zone decides its day boundaries; events without one use
/// `default_zone`. The input is read once and never modified, so callers
/// sharing the collection should pass a consistent snapshot.
pub fn day_agenda(events: &[Event], day: NaiveDate, default_zone: Tz) -> DayAgenda {
    let (all_day, mut timed): (Vec<Event>, Vec<Event>) = events
        .iter()
        .filter(|e| occurs_on_day(e, day, default_zone))
        .cloned()
        .partition(Event::is_all_day);

    timed.sort_by_key(|e| (e.start(), e.end()));
    let busy = merge_overlapping(&timed);

    tracing::debug!(
        %day,
        all_day = all_day.len(),
        timed = timed.len(),
        busy = busy.len(),
        "built day agenda"
    );

    DayAgenda {
        day,
        all_day,
        timed,
        busy,
    }
}
