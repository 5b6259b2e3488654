//! `dayspan` CLI -- day agendas, busy spans and free time from JSON events.
//!
//! Events are read as a JSON array of `{name, start, end, location?,
//! time_zone?, is_all_day?}` objects with RFC 3339 instants.
//!
//! ## Usage
//!
//! ```sh
//! # One day's agenda in New York time
//! dayspan agenda --day 2026-03-01 --tz America/New_York -i events.json
//!
//! # Merge all timed events into busy spans (JSON out)
//! cat events.json | dayspan merge
//!
//! # Free time between 09:00 and 17:00, at least 30 minutes long
//! dayspan free --day 2026-03-01 --from 09:00 --to 17:00 --min 30 -i events.json
//!
//! # Only the earliest slot that fits an hour-long meeting
//! dayspan free --day 2026-03-01 --min 60 --first -i events.json
//!
//! # The week row a date picker would show, Monday first
//! dayspan week --day 2026-03-01 --week-start mon
//! ```

use std::io::{self, Read};

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use dayspan::calendar::days_of_week;
use dayspan::format::{
    format_day_of_month, format_month_and_year, format_time_range, format_weekday_initial,
};
use dayspan::{day_bounds, find_first_free_slot, DisplayOptions, Event, FreeSlot, HourCycle};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dayspan", version, about = "Calendar day agendas and busy spans")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Timezone used for events without their own zone
    #[arg(long, global = true, env = "DAYSPAN_TZ", default_value = "UTC")]
    tz: String,

    /// Render times on a 24-hour clock
    #[arg(long = "24h", global = true)]
    twenty_four_hour: bool,

    /// First day of the week (e.g. sun, mon)
    #[arg(long, global = true, default_value = "sun")]
    week_start: Weekday,

    /// Log debug output to stderr (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all-day events, timed events and busy spans for one day
    Agenda {
        /// Day to show (YYYY-MM-DD)
        #[arg(long)]
        day: NaiveDate,
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Merge timed events into busy spans and emit them as JSON
    Merge {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List free slots on one day
    Free {
        /// Day to search (YYYY-MM-DD)
        #[arg(long)]
        day: NaiveDate,
        /// Local start of the search window (HH:MM), default midnight
        #[arg(long, value_parser = parse_clock_time)]
        from: Option<NaiveTime>,
        /// Local end of the search window (HH:MM), default end of day
        #[arg(long, value_parser = parse_clock_time)]
        to: Option<NaiveTime>,
        /// Only report slots at least this many minutes long
        #[arg(long, default_value_t = 0)]
        min: i64,
        /// Print only the earliest slot that satisfies --min
        #[arg(long)]
        first: bool,
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the week containing a day, as a date picker row
    Week {
        /// Any day in the week (YYYY-MM-DD)
        #[arg(long)]
        day: NaiveDate,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let zone = dayspan::parse_zone(&cli.tz)?;
    let options = DisplayOptions {
        hour_cycle: if cli.twenty_four_hour {
            HourCycle::H24
        } else {
            HourCycle::H12
        },
        week_start: cli.week_start,
    };

    match cli.command {
        Commands::Agenda { day, input } => {
            let events = read_events(input.as_deref())?;
            let agenda = dayspan::day_agenda(&events, day, zone);
            print!("{}", render_agenda(&agenda, zone, &options));
        }
        Commands::Merge { input, output } => {
            let events = read_events(input.as_deref())?;
            let spans = dayspan::merge_overlapping(&events);
            let json = serde_json::to_string_pretty(&spans)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Free {
            day,
            from,
            to,
            min,
            first,
            input,
        } => {
            let events = read_events(input.as_deref())?;
            let (day_start, day_end) = day_bounds(day, zone);
            let window_start = match from {
                Some(time) => local_instant(day, time, zone)?,
                None => day_start,
            };
            let window_end = match to {
                Some(time) => local_instant(day, time, zone)?,
                None => day_end,
            };
            if window_start >= window_end {
                bail!("Empty window: --from must be before --to");
            }

            let slots: Vec<FreeSlot> = if first {
                find_first_free_slot(&events, window_start, window_end, min)
                    .into_iter()
                    .collect()
            } else {
                dayspan::find_free_slots(&events, window_start, window_end)
                    .into_iter()
                    .filter(|slot| slot.duration_minutes >= min)
                    .collect()
            };
            for slot in &slots {
                println!(
                    "{}  ({} min)",
                    format_time_range(slot.start, slot.end, zone, &options),
                    slot.duration_minutes
                );
            }
        }
        Commands::Week { day } => {
            let days = days_of_week(day, options.week_start)
                .ok_or_else(|| anyhow!("Week of {} is out of range", day))?;
            let initials: Vec<String> = days
                .iter()
                .map(|d| format!("{:>2}", format_weekday_initial(*d)))
                .collect();
            let numbers: Vec<String> = days
                .iter()
                .map(|d| {
                    let marker = if *d == day { "*" } else { " " };
                    format!("{:>2}{}", format_day_of_month(*d), marker)
                })
                .collect();
            println!("{}", format_month_and_year(day));
            println!("{}", initials.join(" "));
            println!("{}", numbers.join(""));
        }
    }

    Ok(())
}

/// Render a day agenda as plain text.
fn render_agenda(agenda: &dayspan::DayAgenda, zone: Tz, options: &DisplayOptions) -> String {
    let mut out = format!("{} ({})\n", agenda.day.format("%A, %-d %B %Y"), zone.name());

    if !agenda.all_day.is_empty() {
        out.push_str("\nAll day:\n");
        for event in &agenda.all_day {
            out.push_str(&format!("  {}\n", describe(event)));
        }
    }

    out.push_str("\nEvents:\n");
    if agenda.timed.is_empty() {
        out.push_str("  (none)\n");
    }
    for event in &agenda.timed {
        out.push_str(&format!(
            "  {}  {}\n",
            event.display_time_string(zone, options),
            describe(event)
        ));
    }

    out.push_str("\nBusy:\n");
    for span in &agenda.busy {
        out.push_str(&format!("  {}\n", span.display_time_string(zone, options)));
    }

    out
}

fn describe(event: &Event) -> String {
    match event.location() {
        Some(location) => format!("{} @ {}", event.name(), location),
        None => event.name().to_string(),
    }
}

fn parse_clock_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M")
}

/// The instant of wall-clock `time` on `day` in `zone`.
fn local_instant(day: NaiveDate, time: NaiveTime, zone: Tz) -> Result<DateTime<Utc>> {
    zone.from_local_datetime(&day.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("{} {} does not exist in {}", day, time, zone.name()))
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logging subscriber: {}", e))
}

fn read_events(path: Option<&str>) -> Result<Vec<Event>> {
    let json = read_input(path)?;
    let events: Vec<Event> = serde_json::from_str(&json).context("Failed to parse events JSON")?;
    tracing::debug!(count = events.len(), "loaded events");
    Ok(events)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
