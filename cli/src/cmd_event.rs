// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_core::{Actor, Campus, EventDraft};
use clap::{ArgMatches, Command, arg};

use crate::arg::{CommonArgs, EventArgs, get_optional, get_required};
use crate::event_formatter::EventColumn;
use crate::util::{OutputFormat, print_done, print_list, print_one};

#[derive(Debug, Clone)]
pub struct CmdEventAdd {
    pub calendar: String,
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub event_type: String,
    pub description: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdEventAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add an event to a calendar")
            .arg(CommonArgs::id("calendar", "Calendar id"))
            .arg(EventArgs::title(true))
            .arg(EventArgs::start(true))
            .arg(EventArgs::end())
            .arg(EventArgs::event_type(true))
            .arg(CommonArgs::description())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            calendar: get_required(matches, "calendar")?,
            title: get_required(matches, "title")?,
            start: get_required(matches, "start")?,
            end: get_optional(matches, "end"),
            event_type: get_required(matches, "type")?,
            description: CommonArgs::get_description(matches),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    #[tracing::instrument(skip_all, fields(calendar = %self.calendar))]
    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let draft = EventDraft {
            title: self.title,
            description: self.description,
            start_date: self.start,
            end_date: self.end,
            event_type_id: self.event_type,
        };
        let event = campus.add_event(actor, &self.calendar, &draft).await?;
        print_one(&event, &EventColumn::ALL, self.output_format)
    }
}

/// Changes an event, keeping every field not given.
#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: String,
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub event_type: Option<String>,
    pub description: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event")
            .arg(CommonArgs::id("id", "Event id"))
            .arg(EventArgs::title(false))
            .arg(EventArgs::start(false))
            .arg(
                EventArgs::end()
                    .long_help("Last day of the event, an empty value makes it a single day"),
            )
            .arg(EventArgs::event_type(false))
            .arg(CommonArgs::description())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_required(matches, "id")?,
            title: get_optional(matches, "title"),
            start: get_optional(matches, "start"),
            end: get_optional(matches, "end"),
            event_type: get_optional(matches, "type"),
            description: CommonArgs::get_description(matches),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    #[tracing::instrument(skip_all, fields(id = %self.id))]
    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let existing = campus.event(actor, &self.id).await?;
        let draft = EventDraft {
            title: self.title.unwrap_or(existing.title),
            description: self.description.or(existing.description),
            start_date: self.start.unwrap_or_else(|| existing.start_date.to_string()),
            end_date: self.end.or_else(|| existing.end_date.map(|d| d.to_string())),
            event_type_id: self.event_type.unwrap_or(existing.event_type_id),
        };
        let event = campus.update_event(actor, &self.id, &draft).await?;
        print_one(&event, &EventColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event")
            .arg(CommonArgs::id("id", "Event id"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_required(matches, "id")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        campus.delete_event(actor, &self.id).await?;
        print_done("Event deleted", self.output_format)
    }
}

/// Takes a single day out of an event, splitting it when the day is inside.
#[derive(Debug, Clone)]
pub struct CmdEventRemoveDate {
    pub id: String,
    pub date: String,
    pub output_format: OutputFormat,
}

impl CmdEventRemoveDate {
    pub const NAME: &str = "remove-date";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Remove one day from an event")
            .long_about(
                "\
Remove one day from an event. Removing the first or last day shortens the event, \
removing a day in between splits it in two, removing the only day deletes it.",
            )
            .arg(CommonArgs::id("id", "Event id"))
            .arg(arg!(date: <DATE> "The day to remove (YYYY-MM-DD)"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_required(matches, "id")?,
            date: get_required(matches, "date")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    #[tracing::instrument(skip_all, fields(id = %self.id, date = %self.date))]
    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let remaining = campus
            .remove_event_from_date(actor, &self.id, &self.date)
            .await?;
        match (self.output_format, remaining.is_empty()) {
            (OutputFormat::Table, true) => {
                print_done("Event deleted, no days left", self.output_format)
            }
            _ => print_list(&remaining, &EventColumn::ALL, self.output_format),
        }
    }
}
