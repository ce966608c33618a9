//! Game time and date formatting.
//!
//! Everything takes the current instant as an argument; only [`today_date`]
//! reads the clock.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use std::fmt::Display;

use crate::error::{FpointsError, Result};

/// Default window for [`is_game_soon`].
pub const SOON_THRESHOLD_MINUTES: i64 = 30;

/// Absolute and relative rendering of a start time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameTimeDisplay {
    pub absolute: String,
    pub relative: String,
}

/// Parse a strict `YYYY-MM-DD` date that exists on the calendar.
pub fn parse_game_date(s: &str) -> Result<NaiveDate> {
    let invalid = || FpointsError::InvalidDate {
        date: s.to_string(),
    };

    let b = s.as_bytes();
    let shape_ok = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())
}

/// Today's date in the local time zone.
pub fn today_date() -> NaiveDate {
    Local::now().date_naive()
}

/// The system's IANA zone, so game times can show names like "EST".
///
/// `None` when the zone cannot be determined or is not in the tz database;
/// callers then fall back to `chrono::Local`, which prints a numeric offset.
pub fn local_time_zone() -> Option<chrono_tz::Tz> {
    let name = iana_time_zone::get_timezone().ok()?;
    match name.parse::<chrono_tz::Tz>() {
        Ok(tz) => Some(tz),
        Err(_) => {
            tracing::debug!(%name, "time zone not in tz database, showing offsets");
            None
        }
    }
}

/// Start time in `tz`, e.g. `"7:00 PM EST"`.
pub fn format_game_time<Tz>(start: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    start.with_timezone(tz).format("%-I:%M %p %Z").to_string()
}

/// Coarse distance between `now` and the start: "in 2h 15m", "45m ago", "starting soon".
pub fn relative_time(start: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let diff_ms = start.signed_duration_since(*now).num_milliseconds();

    if diff_ms < 0 {
        let abs_ms = diff_ms.unsigned_abs();
        let minutes = abs_ms / 60_000;
        let hours = abs_ms / 3_600_000;

        if minutes < 60 {
            return format!("{}m ago", minutes);
        }
        if hours < 24 {
            return format!("{}h ago", hours);
        }
        return "past".to_string();
    }

    let minutes = diff_ms / 60_000;
    let hours = diff_ms / 3_600_000;

    if minutes < 5 {
        return "starting soon".to_string();
    }
    if minutes < 60 {
        return format!("in {}m", minutes);
    }
    if hours < 24 {
        let remaining_minutes = minutes % 60;
        if remaining_minutes == 0 {
            return format!("in {}h", hours);
        }
        return format!("in {}h {}m", hours, remaining_minutes);
    }

    format!("in {}d", hours / 24)
}

pub fn format_game_time_with_relative<Tz>(
    start: &DateTime<Utc>,
    now: &DateTime<Utc>,
    tz: &Tz,
) -> GameTimeDisplay
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    GameTimeDisplay {
        absolute: format_game_time(start, tz),
        relative: relative_time(start, now),
    }
}

/// True when the game starts after `now` and within `threshold_minutes`.
pub fn is_game_soon(start: &DateTime<Utc>, now: &DateTime<Utc>, threshold_minutes: i64) -> bool {
    let diff_ms = start.signed_duration_since(*now).num_milliseconds();
    diff_ms > 0 && diff_ms <= threshold_minutes * 60_000
}

pub fn has_game_started(start: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    now >= start
}

/// e.g. "Monday, January 6, 2025"
pub fn format_display_date(date: &NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
