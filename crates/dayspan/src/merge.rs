//! Merge event intervals into busy spans and compute the free time between them.
//!
//! Sorts events by start time, sweeps once to merge overlapping or touching
//! intervals, then derives the gaps between merged spans within a window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// A free time slot between busy spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Sweep sorted `(start, end)` intervals into maximal disjoint spans.
///
/// Input must be sorted by `(start, end)`. An interval starting exactly where
/// the current span ends is absorbed, so consecutive outputs always have a
/// strictly positive gap.
fn sweep(intervals: &[(DateTime<Utc>, DateTime<Utc>)]) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();
    for &(start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }
    merged
}

/// Merge overlapping and touching timed events into busy spans.
///
/// All-day events are ignored. The result is sorted by start, mutually
/// disjoint, and each span is a fresh anonymous event: name empty, no
/// location or zone. Display metadata of the inputs is not carried over.
///
/// Runs in O(n log n); the input slice is not reordered.
pub fn merge_overlapping(events: &[Event]) -> Vec<Event> {
    let mut intervals: Vec<(DateTime<Utc>, DateTime<Utc>)> = events
        .iter()
        .filter(|e| !e.is_all_day())
        .map(|e| (e.start(), e.end()))
        .collect();

    let skipped = events.len() - intervals.len();
    if skipped > 0 {
        tracing::debug!(skipped, "ignoring all-day events in merge");
    }

    if intervals.is_empty() {
        return Vec::new();
    }

    intervals.sort_unstable();
    let spans = sweep(&intervals);

    tracing::trace!(inputs = intervals.len(), spans = spans.len(), "merged busy spans");

    spans
        .into_iter()
        .map(|(start, end)| Event::busy_span(start, end))
        .collect()
}

/// Find free time slots within `[window_start, window_end)` around the given events.
///
/// Timed events are clipped to the window and merged first; events entirely
/// outside the window, and all-day events, do not block time. Zero-length gaps
/// are not reported. An empty or inverted window has no free slots.
pub fn find_free_slots(
    events: &[Event],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<FreeSlot> {
    if window_start >= window_end {
        return Vec::new();
    }

    let mut intervals: Vec<(DateTime<Utc>, DateTime<Utc>)> = events
        .iter()
        .filter(|e| !e.is_all_day() && e.start() < window_end && e.end() > window_start)
        .map(|e| (e.start().max(window_start), e.end().min(window_end)))
        .collect();
    intervals.sort_unstable();

    let mut free_slots = Vec::new();
    let mut cursor = window_start;

    for (busy_start, busy_end) in sweep(&intervals) {
        if cursor < busy_start {
            free_slots.push(slot(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing free slot after the last busy span.
    if cursor < window_end {
        free_slots.push(slot(cursor, window_end));
    }

    free_slots
}

/// The first free slot of at least `min_duration_minutes` within the window.
pub fn find_first_free_slot(
    events: &[Event],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    min_duration_minutes: i64,
) -> Option<FreeSlot> {
    find_free_slots(events, window_start, window_end)
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes)
}

fn slot(start: DateTime<Utc>, end: DateTime<Utc>) -> FreeSlot {
    FreeSlot {
        start,
        end,
        duration_minutes: (end - start).num_minutes(),
    }
}
