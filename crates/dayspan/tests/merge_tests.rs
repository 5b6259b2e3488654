//! Tests for busy-span merging and free-slot computation.

use chrono::{DateTime, TimeZone, Utc};
use dayspan::merge::find_first_free_slot;
use dayspan::{find_free_slots, merge_overlapping, Event};

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, hour, min, 0).unwrap()
}

/// Helper to create a timed event from hour ranges on 2026-03-01.
fn event(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Event {
    Event::new(
        "Meeting",
        at(start_hour, start_min),
        at(end_hour, end_min),
        Some("Room 1".to_string()),
        None,
        false,
    )
    .unwrap()
}

fn bounds(events: &[Event]) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    events.iter().map(|e| (e.start(), e.end())).collect()
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(merge_overlapping(&[]).is_empty());
}

#[test]
fn single_event_is_returned_as_a_span() {
    let merged = merge_overlapping(&[event(9, 0, 10, 0)]);

    assert_eq!(bounds(&merged), vec![(at(9, 0), at(10, 0))]);
}

#[test]
fn touching_boundary_merges() {
    // 12:00-13:00 and 13:00-14:00 → 12:00-14:00
    let merged = merge_overlapping(&[event(12, 0, 13, 0), event(13, 0, 14, 0)]);

    assert_eq!(bounds(&merged), vec![(at(12, 0), at(14, 0))]);
}

#[test]
fn positive_gap_prevents_merge() {
    // 12:00-12:30 and 13:00-14:00 stay separate.
    let merged = merge_overlapping(&[event(12, 0, 12, 30), event(13, 0, 14, 0)]);

    assert_eq!(
        bounds(&merged),
        vec![(at(12, 0), at(12, 30)), (at(13, 0), at(14, 0))]
    );
}

#[test]
fn one_minute_gap_prevents_merge() {
    let merged = merge_overlapping(&[event(12, 0, 12, 59), event(13, 0, 14, 0)]);

    assert_eq!(merged.len(), 2);
}

#[test]
fn strict_overlap_merges() {
    // 12:00-13:00 and 12:30-14:00 → 12:00-14:00
    let merged = merge_overlapping(&[event(12, 0, 13, 0), event(12, 30, 14, 0)]);

    assert_eq!(bounds(&merged), vec![(at(12, 0), at(14, 0))]);
}

#[test]
fn chained_overlaps_collapse_transitively() {
    let merged = merge_overlapping(&[
        event(12, 0, 13, 0),
        event(12, 30, 14, 0),
        event(12, 30, 16, 0),
        event(17, 30, 18, 0),
        event(18, 0, 19, 0),
        event(17, 0, 20, 0),
    ]);

    assert_eq!(
        bounds(&merged),
        vec![(at(12, 0), at(16, 0)), (at(17, 0), at(20, 0))]
    );
}

#[test]
fn contained_event_does_not_shrink_span() {
    let merged = merge_overlapping(&[event(9, 0, 17, 0), event(10, 0, 11, 0)]);

    assert_eq!(bounds(&merged), vec![(at(9, 0), at(17, 0))]);
}

#[test]
fn zero_duration_event_inside_span_is_absorbed() {
    let merged = merge_overlapping(&[event(9, 0, 10, 0), event(9, 30, 9, 30)]);

    assert_eq!(bounds(&merged), vec![(at(9, 0), at(10, 0))]);
}

#[test]
fn zero_duration_event_alone_is_kept() {
    let merged = merge_overlapping(&[event(9, 0, 10, 0), event(11, 0, 11, 0)]);

    assert_eq!(
        bounds(&merged),
        vec![(at(9, 0), at(10, 0)), (at(11, 0), at(11, 0))]
    );
}

#[test]
fn unsorted_input_produces_sorted_output() {
    let merged = merge_overlapping(&[
        event(15, 0, 16, 0),
        event(9, 0, 10, 0),
        event(12, 0, 13, 0),
    ]);

    assert_eq!(
        bounds(&merged),
        vec![
            (at(9, 0), at(10, 0)),
            (at(12, 0), at(13, 0)),
            (at(15, 0), at(16, 0))
        ]
    );
}

#[test]
fn merged_spans_carry_no_display_metadata() {
    let merged = merge_overlapping(&[event(12, 0, 13, 0), event(12, 30, 14, 0)]);

    assert_eq!(merged[0].name(), "");
    assert_eq!(merged[0].location(), None);
    assert_eq!(merged[0].time_zone(), None);
    assert!(!merged[0].is_all_day());
}

#[test]
fn all_day_events_are_ignored() {
    let all_day = Event::new("Holiday", at(0, 0), at(23, 59), None, None, true).unwrap();

    let merged = merge_overlapping(&[event(12, 0, 13, 0), all_day.clone()]);
    assert_eq!(bounds(&merged), vec![(at(12, 0), at(13, 0))]);

    assert!(merge_overlapping(&[all_day]).is_empty());
}

#[test]
fn input_is_left_untouched() {
    let events = vec![event(15, 0, 16, 0), event(9, 0, 10, 0)];
    let before = events.clone();

    let _ = merge_overlapping(&events);

    assert_eq!(events, before);
}

// ---------------------------------------------------------------------------
// Free slots
// ---------------------------------------------------------------------------

#[test]
fn single_event_produces_two_free_slots() {
    let slots = find_free_slots(&[event(10, 0, 11, 0)], at(8, 0), at(17, 0));

    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].start, slots[0].end), (at(8, 0), at(10, 0)));
    assert_eq!(slots[0].duration_minutes, 120);
    assert_eq!((slots[1].start, slots[1].end), (at(11, 0), at(17, 0)));
    assert_eq!(slots[1].duration_minutes, 360);
}

#[test]
fn touching_events_leave_no_zero_length_slot() {
    let slots = find_free_slots(
        &[event(9, 0, 10, 0), event(10, 0, 11, 0)],
        at(9, 0),
        at(12, 0),
    );

    assert_eq!(slots.len(), 1);
    assert_eq!((slots[0].start, slots[0].end), (at(11, 0), at(12, 0)));
}

#[test]
fn no_events_entire_window_is_free() {
    let slots = find_free_slots(&[], at(8, 0), at(17, 0));

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].duration_minutes, 540);
}

#[test]
fn events_outside_window_are_ignored() {
    let slots = find_free_slots(
        &[event(6, 0, 7, 0), event(18, 0, 19, 0)],
        at(8, 0),
        at(17, 0),
    );

    assert_eq!(slots.len(), 1);
    assert_eq!((slots[0].start, slots[0].end), (at(8, 0), at(17, 0)));
}

#[test]
fn events_straddling_window_edges_are_clipped() {
    let slots = find_free_slots(
        &[event(7, 0, 9, 0), event(16, 0, 18, 0)],
        at(8, 0),
        at(17, 0),
    );

    assert_eq!(slots.len(), 1);
    assert_eq!((slots[0].start, slots[0].end), (at(9, 0), at(16, 0)));
}

#[test]
fn all_day_events_do_not_block_free_time() {
    let all_day = Event::new("Holiday", at(0, 0), at(23, 0), None, None, true).unwrap();

    let slots = find_free_slots(&[all_day], at(8, 0), at(17, 0));

    assert_eq!(slots.len(), 1);
}

#[test]
fn inverted_window_has_no_free_slots() {
    assert!(find_free_slots(&[], at(17, 0), at(8, 0)).is_empty());
    assert!(find_free_slots(&[], at(8, 0), at(8, 0)).is_empty());
}

#[test]
fn first_free_slot_respects_minimum_duration() {
    // Gaps: 08:30-09:00 (30 min), 12:00-17:00 (300 min)
    let events = vec![event(8, 0, 8, 30), event(9, 0, 12, 0)];

    let slot = find_first_free_slot(&events, at(8, 0), at(17, 0), 60).unwrap();

    assert_eq!((slot.start, slot.end), (at(12, 0), at(17, 0)));
    assert_eq!(slot.duration_minutes, 300);

    assert!(find_first_free_slot(&events, at(8, 0), at(12, 0), 60).is_none());
}
