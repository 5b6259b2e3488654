//! # dayspan
//!
//! Calendar event intervals for day-view rendering.
//!
//! An [`Event`] is an immutable `[start, end]` interval with display metadata.
//! The engine answers the two questions a calendar view asks on every redraw:
//! which events are visible on a given day, and what the merged busy spans
//! of a set of timed events are. Day boundaries are computed with
//! timezone-aware calendar arithmetic via `chrono-tz`, so they stay correct
//! across DST transitions.
//!
//! ## Modules
//!
//! - [`event`] -- the `Event` value type and its validating constructor
//! - [`day`] -- local day boundaries and the day-occurrence predicate
//! - [`merge`] -- busy-span merging and free-slot computation
//! - [`agenda`] -- per-day composition: filter, split all-day, merge
//! - [`calendar`] -- week and date arithmetic for date pickers
//! - [`format`] -- display options and pure time/date formatting
//! - [`error`] -- Error types

pub mod agenda;
pub mod calendar;
pub mod day;
pub mod error;
pub mod event;
pub mod format;
pub mod merge;

pub use agenda::{day_agenda, DayAgenda};
pub use day::{day_bounds, occurs_on_day, parse_zone};
pub use error::{ConstructionError, RecordError, ZoneError};
pub use event::Event;
pub use format::{DisplayOptions, HourCycle};
pub use merge::{find_first_free_slot, find_free_slots, merge_overlapping, FreeSlot};
