// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::CampusError;
use crate::datetime::parse_date;

/// Maximum length of an event title, in characters.
pub const MAX_EVENT_TITLE_LEN: usize = 200;

/// An event on a calendar, spanning whole days.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CalendarEvent {
    /// The unique identifier for the event.
    pub id: String,

    /// The calendar the event belongs to.
    pub calendar_id: String,

    /// The title of the event.
    pub title: String,

    /// The description of the event, if available.
    pub description: Option<String>,

    /// First day of the event.
    pub start_date: Date,

    /// Last day of the event, inclusive. `None` for a single-day event.
    pub end_date: Option<Date>,

    /// The event type.
    pub event_type_id: String,

    /// Name of the event type.
    pub event_type_name: String,
}

impl CalendarEvent {
    /// The last day of the event, inclusive.
    pub fn last_date(&self) -> Date {
        self.end_date.unwrap_or(self.start_date)
    }

    /// Whether the event occurs on `date`.
    pub fn occurs_on(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.last_date()
    }
}

/// Draft for an event, as submitted by a user.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    /// The title, trimmed before validation.
    pub title: String,

    /// Optional description; blank means none.
    pub description: Option<String>,

    /// Start date, see [`parse_date`] for accepted formats.
    pub start_date: String,

    /// Optional end date; blank means a single-day event.
    pub end_date: Option<String>,

    /// The event type.
    pub event_type_id: String,
}

impl EventDraft {
    /// Validates the draft and resolves its dates.
    pub fn validate(&self) -> Result<ValidEvent, CampusError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CampusError::validation("Event title is required"));
        }
        if title.chars().count() > MAX_EVENT_TITLE_LEN {
            return Err(CampusError::validation(format!(
                "Event title must be {MAX_EVENT_TITLE_LEN} characters or less"
            )));
        }

        let start_date = parse_date(&self.start_date)
            .ok_or_else(|| CampusError::validation("Invalid start date"))?;

        let end_date = match self.end_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => {
                let end = parse_date(text)
                    .ok_or_else(|| CampusError::validation("Invalid end date"))?;
                if end < start_date {
                    return Err(CampusError::validation(
                        "End date must be after start date",
                    ));
                }
                Some(end)
            }
        };

        let event_type_id = self.event_type_id.trim();
        if event_type_id.is_empty() {
            return Err(CampusError::validation("Event type is required"));
        }

        Ok(ValidEvent {
            title: title.to_string(),
            description: normalize_text(self.description.as_deref()),
            start_date,
            end_date: single_day_end(start_date, end_date),
            event_type_id: event_type_id.to_string(),
        })
    }
}

/// An event draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEvent {
    /// Trimmed title.
    pub title: String,

    /// Trimmed description, `None` if blank.
    pub description: Option<String>,

    /// First day.
    pub start_date: Date,

    /// Last day, `None` if the event is a single day.
    pub end_date: Option<Date>,

    /// The event type.
    pub event_type_id: String,
}

/// How an event changes when one of its days is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalPlan {
    /// The event covered only that day and disappears.
    Delete,

    /// The event loses its first or last day.
    Reschedule {
        /// New first day.
        start_date: Date,

        /// New last day, `None` when a single day remains.
        end_date: Option<Date>,
    },

    /// The event is cut in two around the removed day.
    Split {
        /// New last day of the existing event, `None` when it becomes single-day.
        first_end: Option<Date>,

        /// First day of the new event.
        second_start: Date,

        /// Last day of the new event, `None` when it is single-day.
        second_end: Option<Date>,
    },
}

impl RemovalPlan {
    /// Plans the removal of `target` from the event `[start, end]`.
    ///
    /// Returns `None` if the event does not occur on `target`.
    pub fn compute(start: Date, end: Option<Date>, target: Date) -> Option<Self> {
        let end = end.unwrap_or(start);
        if target < start || target > end {
            return None;
        }

        if start == end {
            return Some(Self::Delete);
        }

        if target == start {
            let start_date = start.tomorrow().ok()?;
            return Some(Self::Reschedule {
                start_date,
                end_date: single_day_end(start_date, Some(end)),
            });
        }

        if target == end {
            let last = end.yesterday().ok()?;
            return Some(Self::Reschedule {
                start_date: start,
                end_date: single_day_end(start, Some(last)),
            });
        }

        let first_end = target.yesterday().ok()?;
        let second_start = target.tomorrow().ok()?;
        Some(Self::Split {
            first_end: single_day_end(start, Some(first_end)),
            second_start,
            second_end: single_day_end(second_start, Some(end)),
        })
    }
}

/// A single-day event is stored without an end date.
fn single_day_end(start: Date, end: Option<Date>) -> Option<Date> {
    end.filter(|end| *end != start)
}

pub(crate) fn normalize_text(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|a| !a.is_empty())
        .map(ToString::to_string)
}
