// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod calendar;
mod campus;
mod config;
mod datetime;
mod directory;
mod error;
mod event;
mod event_type;
mod invalidate;
mod localdb;
pub mod permission;
mod preferences;
mod schedule;
mod summary;
mod timetable;
mod types;

pub use crate::calendar::{
    AssignedGroup, Calendar, CalendarDetails, CalendarDraft, MAX_CALENDAR_NAME_LEN,
};
pub use crate::campus::Campus;
pub use crate::config::{APP_NAME, Config, DB_FILENAME, expand_path, get_config_dir};
pub use crate::datetime::{
    DateWindow, WEEK, parse_date, parse_slot_time, parse_weekday, today_utc, weekday_name,
};
pub use crate::directory::{Group, GroupDraft, Member, User, UserDraft};
pub use crate::error::CampusError;
pub use crate::event::{CalendarEvent, EventDraft, MAX_EVENT_TITLE_LEN, RemovalPlan, ValidEvent};
pub use crate::event_type::{EventType, EventTypeDraft, MAX_EVENT_TYPE_NAME_LEN};
pub use crate::invalidate::{
    Invalidator, ROUTE_CALENDARS, ROUTE_EVENT_TYPES, ROUTE_LECTURE_SUMMARIES, TracingInvalidator,
};
pub use crate::permission::Grant;
pub use crate::preferences::{PreferenceSource, Preferences};
pub use crate::schedule::{
    DayEvent, UserSchedule, WeeklySchedule, bucket_day_events, dedup_slots, filter_slots,
};
pub use crate::summary::{LectureSummary, MAX_SUMMARY_LEN, SummaryDraft};
pub use crate::timetable::{CatalogDraft, CatalogEntry, CatalogKind, Slot, SlotDraft, Timetable};
pub use crate::types::{Actor, GroupRole, Role};
