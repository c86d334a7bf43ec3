// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use campus_core::{UserSchedule, weekday_name};
use colored::Colorize;

use crate::event_formatter::format_span;
use crate::table::Table;
use crate::timetable_formatter::SlotColumn;

/// Renders a user's week for the terminal.
#[derive(Debug)]
pub struct ScheduleFormatter<'a> {
    schedule: &'a UserSchedule,
}

impl<'a> ScheduleFormatter<'a> {
    pub fn new(schedule: &'a UserSchedule) -> Self {
        Self { schedule }
    }

    fn write_week(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.schedule;
        writeln!(f, "🗓️ {}", "Weekly timetable".bold())?;
        if schedule.weekly.is_empty() {
            return writeln!(f, "{}", "No classes scheduled".italic());
        }

        let today = schedule.today.weekday();
        let mut first = true;
        for (day, slots) in schedule.weekly.iter().filter(|(_, s)| !s.is_empty()) {
            if !first {
                writeln!(f)?;
            }
            first = false;

            let name = weekday_name(day);
            match day == today {
                true => writeln!(f, " {} {}", "►".green(), name.italic().bold())?,
                false => writeln!(f, "   {}", name.italic())?,
            }
            write!(f, "{}", Table::new(&SlotColumn::DAY, slots).with_header(false))?;
        }
        Ok(())
    }

    fn write_summaries(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.schedule;
        let mut lines = Vec::new();
        for slot in schedule.weekly.slots() {
            let Some(dates) = schedule.slot_summaries.get(&slot.id) else {
                continue;
            };
            if dates.is_empty() {
                continue;
            }
            let label = slot
                .subject_name
                .as_deref()
                .unwrap_or(slot.slot_type_name.as_str());
            let dates: Vec<String> = dates.iter().map(ToString::to_string).collect();
            lines.push(format!(
                "{} {} {}: {}",
                weekday_name(slot.day),
                slot.start_time,
                label,
                dates.join(", ")
            ));
        }

        if lines.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "📝 {}", "Lecture summaries".bold())?;
        for line in lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }

    fn write_events(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.schedule;
        writeln!(f)?;
        writeln!(f, "📌 {}", "Upcoming events".bold())?;

        let mut any = false;
        for (date, events) in schedule.day_events.range(schedule.today..) {
            for event in events {
                any = true;
                let span = format_span(event.start_date, event.end_date);
                writeln!(
                    f,
                    "{}  {} ({}) {}",
                    date.to_string().cyan(),
                    event.title,
                    event.event_type_name,
                    span.bright_black()
                )?;
            }
        }
        if !any {
            writeln!(f, "{}", "No upcoming events".italic())?;
        }
        Ok(())
    }
}

impl fmt::Display for ScheduleFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.schedule;
        writeln!(
            f,
            "{} ({}), {}",
            schedule.user_name.bold(),
            schedule.role,
            schedule.today
        )?;
        writeln!(f)?;
        self.write_week(f)?;
        self.write_summaries(f)?;
        self.write_events(f)
    }
}
