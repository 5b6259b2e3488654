//! WASM bindings for dayspan.
//!
//! Exposes event construction, the day-occurrence predicate, busy-span merging,
//! day agendas, free-slot search and date-picker week rows to a JavaScript
//! calendar widget via
//! `wasm-bindgen`. All complex types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p dayspan-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/dayspan_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use dayspan::calendar::days_of_week;
use dayspan::format::{format_day_of_month, format_weekday_initial};
use dayspan::{DayAgenda, DisplayOptions, Event, FreeSlot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SpanDto {
    start: String,
    end: String,
}

impl From<&Event> for SpanDto {
    fn from(e: &Event) -> Self {
        Self {
            start: e.start().to_rfc3339(),
            end: e.end().to_rfc3339(),
        }
    }
}

/// A source event plus its rendered time range (absent for all-day events).
#[derive(Serialize)]
struct AgendaEventDto {
    #[serde(flatten)]
    event: Event,
    display_time: Option<String>,
}

#[derive(Serialize)]
struct DayAgendaDto {
    day: String,
    all_day: Vec<AgendaEventDto>,
    timed: Vec<AgendaEventDto>,
    busy: Vec<SpanDto>,
}

impl DayAgendaDto {
    fn new(agenda: DayAgenda, default_zone: Tz, options: &DisplayOptions) -> Self {
        let render = |event: Event| {
            let display_time = (!event.is_all_day())
                .then(|| event.display_time_string(default_zone, options));
            AgendaEventDto {
                event,
                display_time,
            }
        };

        Self {
            day: agenda.day.to_string(),
            busy: agenda.busy.iter().map(SpanDto::from).collect(),
            all_day: agenda.all_day.into_iter().map(&render).collect(),
            timed: agenda.timed.into_iter().map(&render).collect(),
        }
    }
}

#[derive(Serialize)]
struct FreeSlotDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

impl From<&FreeSlot> for FreeSlotDto {
    fn from(s: &FreeSlot) -> Self {
        Self {
            start: s.start.to_rfc3339(),
            end: s.end.to_rfc3339(),
            duration_minutes: s.duration_minutes,
        }
    }
}

/// One cell of a date-picker week row.
#[derive(Serialize)]
struct WeekDayDto {
    date: String,
    weekday_initial: String,
    day_of_month: String,
}

impl From<NaiveDate> for WeekDayDto {
    fn from(date: NaiveDate) -> Self {
        Self {
            date: date.to_string(),
            weekday_initial: format_weekday_initial(date),
            day_of_month: format_day_of_month(date),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (with offset) and naive `YYYY-MM-DDTHH:MM:SS`, which is
/// interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| format!("Invalid datetime '{}': {}", s, e))
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("Invalid day '{}': {}", s, e))
}

fn parse_zone(s: &str) -> Result<Tz, String> {
    dayspan::parse_zone(s).map_err(|e| e.to_string())
}

fn parse_events_json(json: &str) -> Result<Vec<Event>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid events JSON: {}", e))
}

fn parse_options_json(json: Option<&str>) -> Result<DisplayOptions, String> {
    match json {
        Some(json) => {
            serde_json::from_str(json).map_err(|e| format!("Invalid options JSON: {}", e))
        }
        None => Ok(DisplayOptions::default()),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// Boundary-independent implementations
// ---------------------------------------------------------------------------

fn make_event_impl(
    name: &str,
    start: &str,
    end: &str,
    location: Option<String>,
    time_zone: Option<&str>,
    is_all_day: bool,
) -> Result<String, String> {
    let start = parse_datetime(start)?;
    let end = parse_datetime(end)?;
    let time_zone = time_zone.map(parse_zone).transpose()?;
    let event = Event::new(name, start, end, location, time_zone, is_all_day)
        .map_err(|e| e.to_string())?;
    to_json(&event)
}

fn occurs_on_day_impl(event_json: &str, day: &str, default_zone: &str) -> Result<bool, String> {
    let event: Event =
        serde_json::from_str(event_json).map_err(|e| format!("Invalid event JSON: {}", e))?;
    Ok(dayspan::occurs_on_day(
        &event,
        parse_day(day)?,
        parse_zone(default_zone)?,
    ))
}

fn merge_overlapping_impl(events_json: &str) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    let spans: Vec<SpanDto> = dayspan::merge_overlapping(&events)
        .iter()
        .map(SpanDto::from)
        .collect();
    to_json(&spans)
}

fn day_agenda_impl(
    events_json: &str,
    day: &str,
    default_zone: &str,
    options_json: Option<&str>,
) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    let zone = parse_zone(default_zone)?;
    let options = parse_options_json(options_json)?;
    let agenda = dayspan::day_agenda(&events, parse_day(day)?, zone);
    to_json(&DayAgendaDto::new(agenda, zone, &options))
}

fn find_free_slots_impl(
    events_json: &str,
    window_start: &str,
    window_end: &str,
) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    let slots: Vec<FreeSlotDto> = dayspan::find_free_slots(
        &events,
        parse_datetime(window_start)?,
        parse_datetime(window_end)?,
    )
    .iter()
    .map(FreeSlotDto::from)
    .collect();
    to_json(&slots)
}

fn week_days_impl(day: &str, options_json: Option<&str>) -> Result<String, String> {
    let day = parse_day(day)?;
    let options = parse_options_json(options_json)?;
    let days = days_of_week(day, options.week_start)
        .ok_or_else(|| format!("Week of {} is out of range", day))?;
    let row: Vec<WeekDayDto> = days.into_iter().map(WeekDayDto::from).collect();
    to_json(&row)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// Validate and normalize an event.
///
/// Returns the event as JSON. Fails with an "Invalid range" message when
/// `end` is before `start`.
#[wasm_bindgen(js_name = "makeEvent")]
pub fn make_event(
    name: &str,
    start: &str,
    end: &str,
    location: Option<String>,
    time_zone: Option<String>,
    is_all_day: bool,
) -> Result<String, JsValue> {
    make_event_impl(name, start, end, location, time_zone.as_deref(), is_all_day).map_err(js_err)
}

/// Whether the event (JSON) is visible on `day` (`YYYY-MM-DD`).
///
/// `default_zone` is used when the event has no `time_zone` of its own.
#[wasm_bindgen(js_name = "occursOnDay")]
pub fn occurs_on_day(event_json: &str, day: &str, default_zone: &str) -> Result<bool, JsValue> {
    occurs_on_day_impl(event_json, day, default_zone).map_err(js_err)
}

/// Merge a JSON array of events into busy spans.
///
/// Returns a JSON array of `{start, end}` objects. All-day events are ignored.
#[wasm_bindgen(js_name = "mergeOverlapping")]
pub fn merge_overlapping(events_json: &str) -> Result<String, JsValue> {
    merge_overlapping_impl(events_json).map_err(js_err)
}

/// Everything a day view needs for `day`: all-day events, timed events with
/// display strings, and merged busy spans.
///
/// `options_json` is an optional partial `DisplayOptions` object, e.g.
/// `{"hour_cycle":"h24"}`.
#[wasm_bindgen(js_name = "dayAgenda")]
pub fn day_agenda(
    events_json: &str,
    day: &str,
    default_zone: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    day_agenda_impl(events_json, day, default_zone, options_json.as_deref()).map_err(js_err)
}

/// Free time slots within a window, given a JSON array of events.
///
/// Returns a JSON array of `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "findFreeSlots")]
pub fn find_free_slots(
    events_json: &str,
    window_start: &str,
    window_end: &str,
) -> Result<String, JsValue> {
    find_free_slots_impl(events_json, window_start, window_end).map_err(js_err)
}

/// The seven days of the week containing `day`, as a JSON array of
/// `{date, weekday_initial, day_of_month}` objects.
///
/// The row starts on `week_start` from `options_json` (Sunday by default).
#[wasm_bindgen(js_name = "weekDays")]
pub fn week_days(day: &str, options_json: Option<String>) -> Result<String, JsValue> {
    week_days_impl(day, options_json.as_deref()).map_err(js_err)
}
