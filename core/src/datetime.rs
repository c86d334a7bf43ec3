// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{self, Date, Time, Weekday};
use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan};

/// NOTE: Used for storing in the database, so it should be stable across different runs.
pub(crate) const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";
pub(crate) const STABLE_FORMAT_TIME: &str = "%H:%M";

/// Days of the week, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Parses a calendar date, ignoring any time of day.
///
/// Accepts `YYYY-MM-DD`, civil date-times such as `2026-01-05T10:00` and
/// RFC 3339 timestamps, which are reduced to their UTC date.
pub fn parse_date(text: &str) -> Option<Date> {
    let text = text.trim();
    if let Ok(date) = Date::strptime(STABLE_FORMAT_DATEONLY, text) {
        return Some(date);
    }
    if let Ok(ts) = text.parse::<Timestamp>() {
        return Some(ts.to_zoned(TimeZone::UTC).date());
    }
    text.parse::<civil::DateTime>().ok().map(|dt| dt.date())
}

/// Parses an `HH:MM` time of day and returns it in canonical zero-padded form.
pub fn parse_slot_time(text: &str) -> Option<String> {
    Time::strptime(STABLE_FORMAT_TIME, text.trim())
        .ok()
        .map(|t| t.strftime(STABLE_FORMAT_TIME).to_string())
}

/// Today's date in UTC.
pub fn today_utc() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

pub(crate) fn format_date(date: Date) -> String {
    date.strftime(STABLE_FORMAT_DATEONLY).to_string()
}

pub(crate) fn parse_stable_date(text: &str) -> Result<Date, sqlx::Error> {
    Date::strptime(STABLE_FORMAT_DATEONLY, text)
        .map_err(|e| sqlx::Error::Decode(format!("invalid stored date {text:?}: {e}").into()))
}

pub(crate) fn parse_stable_date_opt(text: Option<&str>) -> Result<Option<Date>, sqlx::Error> {
    text.map(parse_stable_date).transpose()
}

/// The English name of a weekday, as stored.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

/// Parses an English weekday name, case-insensitively; three-letter
/// abbreviations are accepted.
pub fn parse_weekday(text: &str) -> Option<Weekday> {
    let text = text.trim().to_ascii_lowercase();
    WEEK.into_iter().find(|day| {
        let name = weekday_name(*day).to_ascii_lowercase();
        name == text || (text.len() == 3 && name.starts_with(&text))
    })
}

pub(crate) fn weekday_index(day: Weekday) -> usize {
    day.to_monday_zero_offset().unsigned_abs() as usize
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DateWindow {
    /// First date in the window.
    pub start: Date,

    /// Last date in the window.
    pub end: Date,
}

impl DateWindow {
    /// The window `[today - days, today + days]`.
    pub fn around(today: Date, days: u16) -> Self {
        let span = i64::from(days).days();
        Self {
            start: today.saturating_sub(span),
            end: today.saturating_add(span),
        }
    }

    /// Whether `date` is inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the inclusive range `[start, end]` shares a date with the window.
    pub fn overlaps(&self, start: Date, end: Date) -> bool {
        start <= self.end && end >= self.start
    }

    /// Every date of `[start, end]` that falls inside the window, ascending.
    pub fn days_within(&self, start: Date, end: Date) -> impl Iterator<Item = Date> + use<> {
        let first = start.max(self.start);
        let last = end.min(self.end);
        first
            .series(1.day())
            .take_while(move |d| *d <= last)
    }
}
