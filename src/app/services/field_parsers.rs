//! Field parsing utilities for raw registrar values
//!
//! This module provides the pure parsers that convert raw string fields
//! (dates, times, weekday masks, location codes) into typed values. The
//! date, time, and weekday parsers fail fast on malformed syntax; the
//! location parser is deliberately total and falls back to the raw code.

use crate::app::models::{CourseDate, WEEKDAYS_IN_ORDER, Weekday};
use crate::app::services::buildings::building_name;
use crate::constants::{WEEKDAY_LETTERS, location_codes};
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<year>\d{4})(?P<month>\d{2})(?P<day>\d{2})$").expect("date regex is valid")
});

/// Parse a calendar date in strict `YYYYMMDD` form
///
/// Syntax check only: the digits are taken as-is without calendar validity
/// checking, so an upstream month of 13 passes through for downstream
/// consumers to see.
pub fn parse_date(raw: &str) -> Result<CourseDate> {
    let captures = DATE_REGEX
        .captures(raw)
        .ok_or_else(|| Error::format(format!("Malformed date '{}'", raw)))?;

    // the regex guarantees fixed-width digit groups
    Ok(CourseDate {
        year: captures["year"].parse().expect("four digits fit u16"),
        month: captures["month"].parse().expect("two digits fit u8"),
        day: captures["day"].parse().expect("two digits fit u8"),
    })
}

/// Parse a registrar time into seconds since midnight
///
/// Times arrive without fixed width: `1100` is 11:00, `935` is 9:35, and
/// `0` is midnight. The value is left-padded to four digits and split into
/// hour and minute. The minute bound is `<= 60`, not `<= 59`; the registrar
/// emits `60` for some block boundaries and those rows are real data.
pub fn parse_time(raw: &str) -> Result<u32> {
    if raw.is_empty() || raw.len() > 4 || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::format(format!("Malformed time '{}'", raw)));
    }

    let padded = format!("{:0>4}", raw);
    let hour: u32 = padded[0..2].parse().expect("two digits fit u32");
    let minute: u32 = padded[2..4].parse().expect("two digits fit u32");

    if hour > 23 || minute > 60 {
        return Err(Error::format(format!("Malformed time '{}'", raw)));
    }

    Ok(hour * 3600 + minute * 60)
}

/// Parse a seven-character weekday mask such as `-M-W-F-` into the marked days
///
/// Position `i` must hold either `-` or the fixed day letter for that
/// position (Sunday through Saturday). Any other character, or a mask of the
/// wrong length, is malformed.
pub fn parse_weekdays(raw: &str) -> Result<Vec<Weekday>> {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() != 7 {
        return Err(Error::format(format!("Malformed weekday string '{}'", raw)));
    }

    let mut days = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            continue;
        }
        if c == WEEKDAY_LETTERS[i] {
            days.push(WEEKDAYS_IN_ORDER[i]);
        } else {
            return Err(Error::format(format!("Malformed weekday string '{}'", raw)));
        }
    }

    Ok(days)
}

/// Result of resolving a raw location code
///
/// `parse_location_code` is a total function: a code it cannot resolve is
/// passed through unchanged so a human reading the output can still
/// interpret it, while callers can distinguish the fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Human-readable building name plus room
    Resolved(String),
    /// The original code, returned as-is
    Unresolved(String),
}

impl Location {
    /// The display string either way
    pub fn into_name(self) -> String {
        match self {
            Self::Resolved(name) | Self::Unresolved(name) => name,
        }
    }
}

/// Convert a raw location code such as `HM SHAN 2465` to a readable location
///
/// The code splits on spaces into campus/building/room. `ARR` and `TBA`
/// building codes are special-cased before the table lookup. Missing parts
/// or an unknown campus/building pair fall back to the raw code.
pub fn parse_location_code(code: &str) -> Location {
    let mut parts = code.split(' ');
    let (Some(campus), Some(building), Some(room)) = (parts.next(), parts.next(), parts.next())
    else {
        trace!("Malformed location code '{}'", code);
        return Location::Unresolved(code.to_string());
    };

    if building == location_codes::ARRANGED {
        return Location::Resolved(location_codes::ARRANGED_NAME.to_string());
    }
    if building == location_codes::TBA {
        return Location::Resolved(location_codes::TBA_NAME.to_string());
    }

    if campus.is_empty() {
        trace!("Malformed location code '{}'", code);
        return Location::Unresolved(code.to_string());
    }

    match building_name(campus, building) {
        // trim because room may be an empty string
        Some(name) => Location::Resolved(format!("{} {}", name, room).trim_end().to_string()),
        None => {
            trace!("Malformed location code '{}'", code);
            Location::Unresolved(code.to_string())
        }
    }
}
