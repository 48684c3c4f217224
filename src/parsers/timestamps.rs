//! Message-header timestamp parsing.
//!
//! Exports are always day-first (`D/M/Y`), but vary in year width, clock style and
//! the kind of space character between the parts. Parsing tries the known
//! encodings in a fixed order ([`TimestampEncoding::PRIORITY`]), then a set of
//! lenient day-first formats, and otherwise rejects the header.
//!
//! Two-digit years never go through a locale or library default: they are
//! expanded with [`expand_two_digit_year`] before the date is built.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::errors::TimestampError;

/// Normalized header: `D/M/Y, H:MM` plus an optional uppercase meridiem.
static HEADER_PARTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern; compilation cannot fail.
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4}), (\d{1,2}):(\d{2})(?: ?(AM|PM))?$")
        .expect("header parts regex")
});

/// Day-first formats tried when no known encoding fits the header's shape.
const LENIENT_DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y, %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y, %H:%M",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y, %I:%M:%S %p",
    "%d/%m/%Y, %I:%M %p",
    "%d/%m/%Y %I:%M %p",
    "%d.%m.%Y, %H:%M",
    "%d.%m.%Y %H:%M",
    "%d-%m-%Y, %H:%M",
    "%d-%m-%Y %H:%M",
];

const LENIENT_DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y"];

/// Space characters exports use interchangeably inside headers.
const SPACE_VARIANTS: &[char] = &['\u{00A0}', '\u{202F}', '\u{2007}', '\u{2009}'];

/// Date/time encodings found in exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampEncoding {
    /// `31/12/2023, 23:45`
    TwentyFourHourLongYear,
    /// `31/12/23, 23:45`
    TwentyFourHourShortYear,
    /// `31/12/2023, 11:45 PM`
    MeridiemLongYear,
    /// `31/12/23, 11:45 PM`
    MeridiemShortYear,
}

impl TimestampEncoding {
    /// Order in which encodings are attempted.
    pub const PRIORITY: [TimestampEncoding; 4] = [
        TimestampEncoding::TwentyFourHourLongYear,
        TimestampEncoding::TwentyFourHourShortYear,
        TimestampEncoding::MeridiemLongYear,
        TimestampEncoding::MeridiemShortYear,
    ];

    fn format(self) -> &'static str {
        if self.has_meridiem() { "%d/%m/%Y, %I:%M %p" } else { "%d/%m/%Y, %H:%M" }
    }

    fn year_digits(self) -> usize {
        match self {
            TimestampEncoding::TwentyFourHourLongYear | TimestampEncoding::MeridiemLongYear => 4,
            TimestampEncoding::TwentyFourHourShortYear | TimestampEncoding::MeridiemShortYear => 2,
        }
    }

    fn has_meridiem(self) -> bool {
        matches!(self, TimestampEncoding::MeridiemLongYear | TimestampEncoding::MeridiemShortYear)
    }

    /// Parse `parts` if they have this encoding's shape.
    fn parse(self, parts: &HeaderParts<'_>) -> Option<NaiveDateTime> {
        if parts.year.len() != self.year_digits() || parts.meridiem.is_some() != self.has_meridiem()
        {
            return None;
        }

        let year: i32 = parts.year.parse().ok()?;
        let year = if self.year_digits() == 2 { expand_two_digit_year(year) } else { year };

        let canonical = match parts.meridiem {
            Some(meridiem) => format!(
                "{}/{}/{:04}, {}:{} {}",
                parts.day, parts.month, year, parts.hour, parts.minute, meridiem
            ),
            None => {
                format!("{}/{}/{:04}, {}:{}", parts.day, parts.month, year, parts.hour, parts.minute)
            }
        };

        NaiveDateTime::parse_from_str(&canonical, self.format()).ok()
    }
}

struct HeaderParts<'a> {
    day: &'a str,
    month: &'a str,
    year: &'a str,
    hour: &'a str,
    minute: &'a str,
    meridiem: Option<&'a str>,
}

impl<'a> HeaderParts<'a> {
    fn split(normalized: &'a str) -> Option<Self> {
        let caps = HEADER_PARTS_RE.captures(normalized)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Some(Self {
            day: group(1)?,
            month: group(2)?,
            year: group(3)?,
            hour: group(4)?,
            minute: group(5)?,
            meridiem: group(6),
        })
    }
}

/// Century inference for two-digit years: `00..=69` map to the 2000s, `70..=99` to the 1900s.
pub fn expand_two_digit_year(year: i32) -> i32 {
    if year < 70 { 2000 + year } else { 1900 + year }
}

/// Canonical form of a header: ordinary spaces, no trailing `" - "` separator,
/// uppercase meridiem.
pub fn normalize_header(header: &str) -> String {
    let spaced: String =
        header.chars().map(|c| if SPACE_VARIANTS.contains(&c) { ' ' } else { c }).collect();

    let trimmed = spaced.trim();
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed).trim_end();

    trimmed.to_ascii_uppercase()
}

/// Parse a message header (e.g. `"1/2/24, 11:05 am - "`) into a timestamp.
///
/// # Errors
///
/// Returns [`TimestampError::Unparseable`] when neither a known encoding nor a
/// lenient day-first format produces a valid date and time.
pub fn parse_timestamp(header: &str) -> Result<NaiveDateTime, TimestampError> {
    let normalized = normalize_header(header);

    if let Some(parts) = HeaderParts::split(&normalized)
        && let Some(timestamp) =
            TimestampEncoding::PRIORITY.iter().find_map(|encoding| encoding.parse(&parts))
    {
        return Ok(timestamp);
    }

    parse_lenient(&normalized).ok_or_else(|| TimestampError::Unparseable(header.to_string()))
}

fn parse_lenient(normalized: &str) -> Option<NaiveDateTime> {
    LENIENT_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(normalized, format).ok())
        .or_else(|| {
            LENIENT_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(normalized, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
