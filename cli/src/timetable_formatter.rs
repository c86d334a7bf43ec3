// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use campus_core::{CatalogEntry, LectureSummary, Slot, Timetable, weekday_name};
use colored::Color;

use crate::table::{PaddingDirection, TableColumn};

#[derive(Debug, Clone, Copy)]
pub enum SlotColumn {
    Id,
    Day,
    Time,
    SlotType,
    Subject,
    Room,
    Faculty,
    Batch,
}

impl SlotColumn {
    pub const ALL: [SlotColumn; 8] = [
        SlotColumn::Id,
        SlotColumn::Day,
        SlotColumn::Time,
        SlotColumn::SlotType,
        SlotColumn::Subject,
        SlotColumn::Room,
        SlotColumn::Faculty,
        SlotColumn::Batch,
    ];

    /// Columns shown under a day heading of the weekly schedule.
    pub const DAY: [SlotColumn; 7] = [
        SlotColumn::Time,
        SlotColumn::SlotType,
        SlotColumn::Subject,
        SlotColumn::Room,
        SlotColumn::Faculty,
        SlotColumn::Batch,
        SlotColumn::Id,
    ];
}

impl TableColumn<Slot> for SlotColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            SlotColumn::Id => "ID",
            SlotColumn::Day => "Day",
            SlotColumn::Time => "Time",
            SlotColumn::SlotType => "Type",
            SlotColumn::Subject => "Subject",
            SlotColumn::Room => "Room",
            SlotColumn::Faculty => "Faculty",
            SlotColumn::Batch => "Batch",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Slot) -> Cow<'a, str> {
        match self {
            SlotColumn::Id => data.id.as_str().into(),
            SlotColumn::Day => weekday_name(data.day).into(),
            SlotColumn::Time => format!("{}-{}", data.start_time, data.end_time).into(),
            SlotColumn::SlotType => data.slot_type_name.as_str().into(),
            SlotColumn::Subject => data.subject_name.as_deref().unwrap_or_default().into(),
            SlotColumn::Room => data.room_name.as_deref().unwrap_or_default().into(),
            SlotColumn::Faculty => data.faculty_name.as_deref().unwrap_or_default().into(),
            SlotColumn::Batch => data.batch_name.as_deref().unwrap_or_default().into(),
        }
    }

    fn color(&self, data: &Slot) -> Option<Color> {
        match self {
            SlotColumn::Id => Some(Color::BrightBlack),
            _ if data.is_break() => Some(Color::BrightBlack),
            SlotColumn::Time => Some(Color::Cyan),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TimetableColumn {
    Id,
    Name,
    Slots,
}

impl TimetableColumn {
    pub const ALL: [TimetableColumn; 3] = [
        TimetableColumn::Id,
        TimetableColumn::Name,
        TimetableColumn::Slots,
    ];
}

impl TableColumn<Timetable> for TimetableColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            TimetableColumn::Id => "ID",
            TimetableColumn::Name => "Name",
            TimetableColumn::Slots => "Slots",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Timetable) -> Cow<'a, str> {
        match self {
            TimetableColumn::Id => data.id.as_str().into(),
            TimetableColumn::Name => data.name.as_str().into(),
            TimetableColumn::Slots => data.slot_count.to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TimetableColumn::Slots => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum CatalogColumn {
    Id,
    Name,
    ShortName,
}

impl CatalogColumn {
    pub const ALL: [CatalogColumn; 3] = [
        CatalogColumn::Id,
        CatalogColumn::Name,
        CatalogColumn::ShortName,
    ];
}

impl TableColumn<CatalogEntry> for CatalogColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            CatalogColumn::Id => "ID",
            CatalogColumn::Name => "Name",
            CatalogColumn::ShortName => "Short name",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a CatalogEntry) -> Cow<'a, str> {
        match self {
            CatalogColumn::Id => data.id.as_str().into(),
            CatalogColumn::Name => data.name.as_str().into(),
            CatalogColumn::ShortName => data.short_name.as_deref().unwrap_or_default().into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SummaryColumn {
    Id,
    Date,
    Content,
    Notes,
}

impl SummaryColumn {
    pub const ALL: [SummaryColumn; 4] = [
        SummaryColumn::Id,
        SummaryColumn::Date,
        SummaryColumn::Content,
        SummaryColumn::Notes,
    ];
}

impl TableColumn<LectureSummary> for SummaryColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            SummaryColumn::Id => "ID",
            SummaryColumn::Date => "Date",
            SummaryColumn::Content => "Content",
            SummaryColumn::Notes => "Notes",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a LectureSummary) -> Cow<'a, str> {
        match self {
            SummaryColumn::Id => data.id.as_str().into(),
            SummaryColumn::Date => data.date.to_string().into(),
            SummaryColumn::Content => data.content.as_str().into(),
            SummaryColumn::Notes => data.notes.as_deref().unwrap_or_default().into(),
        }
    }
}
