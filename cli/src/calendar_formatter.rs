// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use campus_core::{Calendar, CalendarDetails};
use colored::Color;

use crate::table::{PaddingDirection, TableColumn};

#[derive(Debug, Clone, Copy)]
pub enum CalendarColumn {
    Id,
    Name,
    Groups,
    Events,
    Description,
}

impl CalendarColumn {
    pub const ALL: [CalendarColumn; 5] = [
        CalendarColumn::Id,
        CalendarColumn::Name,
        CalendarColumn::Groups,
        CalendarColumn::Events,
        CalendarColumn::Description,
    ];

    /// Columns a bare [`Calendar`] has values for.
    pub const BASIC: [CalendarColumn; 3] = [
        CalendarColumn::Id,
        CalendarColumn::Name,
        CalendarColumn::Description,
    ];
}

impl TableColumn<CalendarDetails> for CalendarColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            CalendarColumn::Id => "ID",
            CalendarColumn::Name => "Name",
            CalendarColumn::Groups => "Groups",
            CalendarColumn::Events => "Events",
            CalendarColumn::Description => "Description",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a CalendarDetails) -> Cow<'a, str> {
        match self {
            CalendarColumn::Groups => data
                .groups
                .iter()
                .map(|g| g.title.as_str())
                .collect::<Vec<_>>()
                .join(", ")
                .into(),
            CalendarColumn::Events => data.events.len().to_string().into(),
            _ => TableColumn::<Calendar>::format(self, &data.calendar),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            CalendarColumn::Events => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &CalendarDetails) -> Option<Color> {
        TableColumn::<Calendar>::color(self, &data.calendar)
    }
}

impl TableColumn<Calendar> for CalendarColumn {
    fn name(&self) -> Cow<'_, str> {
        TableColumn::<CalendarDetails>::name(self)
    }

    fn format<'a>(&self, data: &'a Calendar) -> Cow<'a, str> {
        match self {
            CalendarColumn::Id => data.id.as_str().into(),
            CalendarColumn::Name => data.name.as_str().into(),
            CalendarColumn::Description => data.description.as_deref().unwrap_or_default().into(),
            CalendarColumn::Groups | CalendarColumn::Events => "".into(),
        }
    }

    fn color(&self, _data: &Calendar) -> Option<Color> {
        match self {
            CalendarColumn::Id => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
