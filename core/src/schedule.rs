// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Read model of a user's week: the slots they attend or teach, the dates
//! that have lecture summaries and the calendar events around today.

use std::collections::{BTreeMap, HashSet};

use jiff::civil::{Date, Weekday};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::datetime::{DateWindow, WEEK, weekday_index, weekday_name};
use crate::{Actor, CalendarEvent, Preferences, Role, Slot};

/// Slots of a week, grouped by day and sorted by start time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [Vec<Slot>; 7],
}

impl WeeklySchedule {
    /// Groups slots by day; within a day the order is by start time, ties
    /// keep their input order.
    pub fn from_slots(slots: impl IntoIterator<Item = Slot>) -> Self {
        let mut days: [Vec<Slot>; 7] = Default::default();
        for slot in slots {
            if let Some(day) = days.get_mut(weekday_index(slot.day)) {
                day.push(slot);
            }
        }
        for day in &mut days {
            day.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        }
        Self { days }
    }

    /// Slots on the given day.
    pub fn day(&self, day: Weekday) -> &[Slot] {
        self.days
            .get(weekday_index(day))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Days from Monday to Sunday with their slots.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Slot])> {
        WEEK.into_iter().zip(self.days.iter().map(Vec::as_slice))
    }

    /// Every slot of the week.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.days.iter().flatten()
    }

    /// Whether the week has no slot at all.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, slots) in self.iter() {
            map.serialize_entry(weekday_name(day), slots)?;
        }
        map.end()
    }
}

/// A calendar event as listed on one day of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DayEvent {
    /// Event id.
    pub id: String,

    /// Owning calendar.
    pub calendar_id: String,

    /// Title.
    pub title: String,

    /// Name of the event type.
    pub event_type_name: String,

    /// First day of the whole event.
    pub start_date: Date,

    /// Last day of the whole event, `None` for single-day events.
    pub end_date: Option<Date>,
}

impl From<&CalendarEvent> for DayEvent {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            id: event.id.clone(),
            calendar_id: event.calendar_id.clone(),
            title: event.title.clone(),
            event_type_name: event.event_type_name.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
        }
    }
}

/// Everything the weekly dashboard shows for one user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UserSchedule {
    /// Slots by day of week.
    pub weekly: WeeklySchedule,

    /// The date the schedule was computed for.
    pub today: Date,

    /// The window summaries and events were collected in.
    pub window: DateWindow,

    /// The user's display name.
    pub user_name: String,

    /// The user's role.
    pub role: Role,

    /// Dates with a lecture summary, per slot id, ascending.
    pub slot_summaries: BTreeMap<String, Vec<Date>>,

    /// Events per date inside the window.
    pub day_events: BTreeMap<Date, Vec<DayEvent>>,
}

/// Drops repeated slots, keeping the first occurrence of each id.
pub fn dedup_slots(slots: Vec<Slot>) -> Vec<Slot> {
    let mut seen = HashSet::new();
    slots
        .into_iter()
        .filter(|slot| seen.insert(slot.id.clone()))
        .collect()
}

/// Keeps the slots relevant to the actor.
///
/// Staff see the slots they teach. Students see every slot their
/// preferences allow.
pub fn filter_slots(actor: &Actor, prefs: &Preferences, slots: Vec<Slot>) -> Vec<Slot> {
    slots
        .into_iter()
        .filter(|slot| match actor.role {
            Role::Hod | Role::Faculty => slot.faculty_id.as_deref() == Some(&actor.user_id),
            Role::Student => prefs.allows(&slot.slot_type_id, slot.batch_id.as_deref()),
        })
        .collect()
}

/// Spreads events over each date they cover inside the window.
///
/// An event is listed at most once per date.
pub fn bucket_day_events(
    window: &DateWindow,
    events: &[CalendarEvent],
) -> BTreeMap<Date, Vec<DayEvent>> {
    let mut buckets: BTreeMap<Date, Vec<DayEvent>> = BTreeMap::new();
    for event in events {
        if !window.overlaps(event.start_date, event.last_date()) {
            continue;
        }
        for date in window.days_within(event.start_date, event.last_date()) {
            let bucket = buckets.entry(date).or_default();
            if !bucket.iter().any(|e| e.id == event.id) {
                bucket.push(DayEvent::from(event));
            }
        }
    }
    buckets
}
