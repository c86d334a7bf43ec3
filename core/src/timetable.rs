// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::civil::Weekday;

use crate::CampusError;
use crate::datetime::{parse_slot_time, weekday_name};
use crate::event::normalize_text;

const MAX_CATALOG_NAME_LEN: usize = 50;

/// A named weekly template of slots.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Timetable {
    /// The unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Number of slots.
    pub slot_count: i64,
}

/// Reference data a slot points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CatalogKind {
    /// Lecture, lab, tutorial, ...
    SlotType,

    /// Sub-group of students a slot may be restricted to.
    Batch,

    /// Taught subject.
    Subject,

    /// Room, named by its number.
    Room,
}

impl CatalogKind {
    /// Human readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            CatalogKind::SlotType => "Slot type",
            CatalogKind::Batch => "Batch",
            CatalogKind::Subject => "Subject",
            CatalogKind::Room => "Room",
        }
    }

    pub(crate) const fn table(&self) -> &'static str {
        match self {
            CatalogKind::SlotType => "slot_types",
            CatalogKind::Batch => "batches",
            CatalogKind::Subject => "subjects",
            CatalogKind::Room => "rooms",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An entry of the slot catalog.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CatalogEntry {
    /// The unique identifier.
    pub id: String,

    /// Unique name within its kind.
    pub name: String,

    /// Abbreviation, subjects only.
    pub short_name: Option<String>,
}

/// Draft for a catalog entry.
#[derive(Debug, Clone, Default)]
pub struct CatalogDraft {
    /// Name, trimmed before validation.
    pub name: String,

    /// Abbreviation, kept for subjects only.
    pub short_name: Option<String>,
}

impl CatalogDraft {
    pub(crate) fn validate(
        &self,
        kind: CatalogKind,
    ) -> Result<(String, Option<String>), CampusError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CampusError::validation(format!("{kind} name is required")));
        }
        if name.chars().count() > MAX_CATALOG_NAME_LEN {
            return Err(CampusError::validation(format!(
                "{kind} name must be {MAX_CATALOG_NAME_LEN} characters or less"
            )));
        }
        let short_name = match kind {
            CatalogKind::Subject => normalize_text(self.short_name.as_deref()),
            _ => None,
        };
        Ok((name.to_string(), short_name))
    }
}

/// A recurring weekly slot of a timetable, with its references resolved.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Slot {
    /// The unique identifier.
    pub id: String,

    /// Owning timetable.
    pub timetable_id: String,

    /// Day of the week.
    #[serde(serialize_with = "serialize_weekday")]
    pub day: Weekday,

    /// Start time, `HH:MM`.
    pub start_time: String,

    /// End time, `HH:MM`.
    pub end_time: String,

    /// Slot type id.
    pub slot_type_id: String,

    /// Slot type name.
    pub slot_type_name: String,

    /// Subject id.
    pub subject_id: Option<String>,

    /// Subject name.
    pub subject_name: Option<String>,

    /// Room id.
    pub room_id: Option<String>,

    /// Room name.
    pub room_name: Option<String>,

    /// Assigned faculty user id.
    pub faculty_id: Option<String>,

    /// Assigned faculty name.
    pub faculty_name: Option<String>,

    /// Batch id.
    pub batch_id: Option<String>,

    /// Batch name.
    pub batch_name: Option<String>,
}

impl Slot {
    /// A slot with neither subject nor room is a break.
    pub fn is_break(&self) -> bool {
        self.subject_id.is_none() && self.room_id.is_none()
    }
}

fn serialize_weekday<S: serde::Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(weekday_name(*day))
}

/// Draft for a timetable slot.
#[derive(Debug, Clone)]
pub struct SlotDraft {
    /// Day of the week.
    pub day: Weekday,

    /// Start time, `HH:MM`.
    pub start_time: String,

    /// End time, `HH:MM`.
    pub end_time: String,

    /// Slot type id, required.
    pub slot_type_id: String,

    /// Subject id.
    pub subject_id: Option<String>,

    /// Room id.
    pub room_id: Option<String>,

    /// Faculty user id.
    pub faculty_id: Option<String>,

    /// Batch id.
    pub batch_id: Option<String>,
}

/// A slot draft with canonical times and blank references dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidSlot {
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub slot_type_id: String,
    pub subject_id: Option<String>,
    pub room_id: Option<String>,
    pub faculty_id: Option<String>,
    pub batch_id: Option<String>,
}

impl SlotDraft {
    pub(crate) fn validate(&self) -> Result<ValidSlot, CampusError> {
        let start_time = parse_slot_time(&self.start_time)
            .ok_or_else(|| CampusError::validation("Invalid start time"))?;
        let end_time = parse_slot_time(&self.end_time)
            .ok_or_else(|| CampusError::validation("Invalid end time"))?;
        if end_time <= start_time {
            return Err(CampusError::validation("End time must be after start time"));
        }

        let slot_type_id = self.slot_type_id.trim();
        if slot_type_id.is_empty() {
            return Err(CampusError::validation("Slot type is required"));
        }

        Ok(ValidSlot {
            day: self.day,
            start_time,
            end_time,
            slot_type_id: slot_type_id.to_string(),
            subject_id: normalize_text(self.subject_id.as_deref()),
            room_id: normalize_text(self.room_id.as_deref()),
            faculty_id: normalize_text(self.faculty_id.as_deref()),
            batch_id: normalize_text(self.batch_id.as_deref()),
        })
    }
}
