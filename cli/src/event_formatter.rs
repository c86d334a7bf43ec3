// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use campus_core::{CalendarEvent, EventType};
use colored::Color;
use jiff::civil::Date;

use crate::table::TableColumn;

#[derive(Debug, Clone, Copy)]
pub enum EventColumn {
    Id,
    Dates,
    Title,
    EventType,
}

impl EventColumn {
    pub const ALL: [EventColumn; 4] = [
        EventColumn::Id,
        EventColumn::Dates,
        EventColumn::Title,
        EventColumn::EventType,
    ];
}

impl TableColumn<CalendarEvent> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id => "ID",
            EventColumn::Dates => "Dates",
            EventColumn::Title => "Title",
            EventColumn::EventType => "Type",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a CalendarEvent) -> Cow<'a, str> {
        match self {
            EventColumn::Id => data.id.as_str().into(),
            EventColumn::Dates => format_span(data.start_date, data.end_date).into(),
            EventColumn::Title => data.title.as_str().into(),
            EventColumn::EventType => data.event_type_name.as_str().into(),
        }
    }

    fn color(&self, _data: &CalendarEvent) -> Option<Color> {
        match self {
            EventColumn::Id => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

/// `YYYY-MM-DD` for a single day, `YYYY-MM-DD~YYYY-MM-DD` for a span.
pub fn format_span(start: Date, end: Option<Date>) -> String {
    match end {
        Some(end) if end != start => format!("{start}~{end}"),
        _ => start.to_string(),
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EventTypeColumn {
    Id,
    Name,
    Description,
}

impl EventTypeColumn {
    pub const ALL: [EventTypeColumn; 3] = [
        EventTypeColumn::Id,
        EventTypeColumn::Name,
        EventTypeColumn::Description,
    ];
}

impl TableColumn<EventType> for EventTypeColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventTypeColumn::Id => "ID",
            EventTypeColumn::Name => "Name",
            EventTypeColumn::Description => "Description",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a EventType) -> Cow<'a, str> {
        match self {
            EventTypeColumn::Id => data.id.as_str().into(),
            EventTypeColumn::Name => data.name.as_str().into(),
            EventTypeColumn::Description => data.description.as_deref().unwrap_or_default().into(),
        }
    }
}
