// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_core::{Actor, Campus, EventTypeDraft};
use clap::{ArgMatches, Command, arg};

use crate::arg::{CommonArgs, get_optional, get_required};
use crate::event_formatter::EventTypeColumn;
use crate::util::{OutputFormat, print_done, print_list, print_one};

#[derive(Debug, Clone)]
pub struct CmdEventTypeList {
    pub output_format: OutputFormat,
}

impl CmdEventTypeList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List event types")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, campus: &Campus) -> Result<(), Box<dyn Error>> {
        let types = campus.event_types().await?;
        print_list(&types, &EventTypeColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventTypeNew {
    pub name: String,
    pub description: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdEventTypeNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create an event type (HOD only)")
            .arg(arg!(name: <NAME> "Name of the event type, e.g. Holiday"))
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

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let draft = EventTypeDraft {
            name: self.name,
            description: self.description,
        };
        let event_type = campus.create_event_type(actor, &draft).await?;
        print_one(&event_type, &EventTypeColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventTypeEdit {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdEventTypeEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Rename an event type or change its description (HOD only)")
            .arg(CommonArgs::id("id", "Event type id"))
            .arg(arg!(-n --name <NAME> "New name of the event type"))
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

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let existing = campus
            .event_types()
            .await?
            .into_iter()
            .find(|t| t.id == self.id)
            .ok_or("Event type not found")?;

        let draft = EventTypeDraft {
            name: self.name.unwrap_or(existing.name),
            description: self.description.or(existing.description),
        };
        let event_type = campus.update_event_type(actor, &self.id, &draft).await?;
        print_one(&event_type, &EventTypeColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventTypeDelete {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdEventTypeDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event type no event uses (HOD only)")
            .arg(CommonArgs::id("id", "Event type id"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_required(matches, "id")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        campus.delete_event_type(actor, &self.id).await?;
        print_done("Event type deleted", self.output_format)
    }
}
