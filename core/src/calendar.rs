// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::event::normalize_text;
use crate::{CalendarEvent, CampusError, GroupRole};

/// Maximum length of a calendar name, in characters.
pub const MAX_CALENDAR_NAME_LEN: usize = 100;

/// A shared calendar, created by an HOD and distributed through groups.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Calendar {
    /// The unique identifier for the calendar.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,

    /// The HOD who created the calendar.
    pub created_by: String,

    /// Creation timestamp.
    pub created_at: jiff::Timestamp,
}

/// A group assigned to a calendar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AssignedGroup {
    /// The group id.
    pub id: String,

    /// The group title.
    pub title: String,

    /// Role members get unless their membership overrides it.
    pub default_role: GroupRole,
}

/// A calendar together with its events and assigned groups.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CalendarDetails {
    /// The calendar itself.
    #[serde(flatten)]
    pub calendar: Calendar,

    /// Events ordered by start date, then id.
    pub events: Vec<CalendarEvent>,

    /// Groups the calendar is assigned to, ordered by title.
    pub groups: Vec<AssignedGroup>,
}

/// Draft for creating or renaming a calendar.
#[derive(Debug, Clone, Default)]
pub struct CalendarDraft {
    /// Name, trimmed before validation.
    pub name: String,

    /// Optional description; blank means none.
    pub description: Option<String>,
}

impl CalendarDraft {
    pub(crate) fn validate(&self) -> Result<(String, Option<String>), CampusError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CampusError::validation("Calendar name is required"));
        }
        if name.chars().count() > MAX_CALENDAR_NAME_LEN {
            return Err(CampusError::validation(format!(
                "Calendar name must be {MAX_CALENDAR_NAME_LEN} characters or less"
            )));
        }
        Ok((
            name.to_string(),
            normalize_text(self.description.as_deref()),
        ))
    }
}
