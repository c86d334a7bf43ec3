// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_core::{Actor, Campus, CalendarDraft};
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::arg::{CommonArgs, get_optional, get_required};
use crate::calendar_formatter::CalendarColumn;
use crate::event_formatter::EventColumn;
use crate::table::Table;
use crate::util::{OutputFormat, print_done, print_json, print_list, print_one};

#[derive(Debug, Clone)]
pub struct CmdCalendarList {
    pub output_format: OutputFormat,
}

impl CmdCalendarList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the calendars you can see")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let calendars = campus.calendars(actor).await?;
        print_list(&calendars, &CalendarColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdCalendarShow {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdCalendarShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show a calendar with its events and groups")
            .arg(CommonArgs::id("id", "Calendar id"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_required(matches, "id")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let details = campus.calendar(actor, &self.id).await?;
        match self.output_format {
            OutputFormat::Json => print_json(&details),
            OutputFormat::Table => {
                print_one(&details, &CalendarColumn::ALL, self.output_format)?;
                if !details.events.is_empty() {
                    println!();
                    println!("{}", "Events".bold());
                    print!("{}", Table::new(&EventColumn::ALL, &details.events));
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdCalendarNew {
    pub name: String,
    pub description: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdCalendarNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a calendar (HOD only)")
            .arg(arg!(name: <NAME> "Name of the calendar"))
            .arg(CommonArgs::description())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            name: get_required(matches, "name")?,
            description: CommonArgs::get_description(matches),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    #[tracing::instrument(skip_all)]
    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let draft = CalendarDraft {
            name: self.name,
            description: self.description,
        };
        let calendar = campus.create_calendar(actor, &draft).await?;
        print_one(&calendar, &CalendarColumn::BASIC, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdCalendarEdit {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdCalendarEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Rename a calendar or change its description")
            .arg(CommonArgs::id("id", "Calendar id"))
            .arg(arg!(-n --name <NAME> "New name of the calendar"))
            .arg(CommonArgs::description())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_required(matches, "id")?,
            name: get_optional(matches, "name"),
            description: CommonArgs::get_description(matches),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    #[tracing::instrument(skip_all, fields(id = %self.id))]
    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let existing = campus.calendar(actor, &self.id).await?.calendar;
        let draft = CalendarDraft {
            name: self.name.unwrap_or(existing.name),
            description: self.description.or(existing.description),
        };
        let calendar = campus.update_calendar(actor, &self.id, &draft).await?;
        print_one(&calendar, &CalendarColumn::BASIC, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdCalendarDelete {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdCalendarDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a calendar with all its events (HOD only)")
            .arg(CommonArgs::id("id", "Calendar id"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_required(matches, "id")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        campus.delete_calendar(actor, &self.id).await?;
        print_done("Calendar deleted", self.output_format)
    }
}

/// Gives a group access to a calendar, or takes it away.
#[derive(Debug, Clone)]
pub struct CmdCalendarAssign {
    pub id: String,
    pub group: String,
    pub unassign: bool,
    pub output_format: OutputFormat,
}

impl CmdCalendarAssign {
    pub const NAME: &str = "assign";
    pub const NAME_UNASSIGN: &str = "unassign";

    pub fn command() -> Command {
        Self::command_named(Self::NAME).about("Give a group access to a calendar (HOD only)")
    }

    pub fn command_unassign() -> Command {
        Self::command_named(Self::NAME_UNASSIGN)
            .about("Take a group's access to a calendar away (HOD only)")
    }

    fn command_named(name: &'static str) -> Command {
        Command::new(name)
            .arg(CommonArgs::id("id", "Calendar id"))
            .arg(CommonArgs::id("group", "Group id"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches, unassign: bool) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_required(matches, "id")?,
            group: get_required(matches, "group")?,
            unassign,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        match self.unassign {
            false => {
                campus.assign_group(actor, &self.id, &self.group).await?;
                print_done("Group assigned", self.output_format)
            }
            true => {
                campus.unassign_group(actor, &self.id, &self.group).await?;
                print_done("Group removed", self.output_format)
            }
        }
    }
}
