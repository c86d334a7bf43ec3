// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_core::{Actor, Campus, CatalogDraft, CatalogKind, SlotDraft};
use clap::{ArgMatches, Command, arg, value_parser};
use jiff::civil::Weekday;

use crate::arg::{CommonArgs, SlotArgs, get_optional, get_required};
use crate::cmd_directory::resolve_user_id;
use crate::timetable_formatter::{CatalogColumn, SlotColumn, TimetableColumn};
use crate::util::{OutputFormat, print_done, print_list, print_one};

#[derive(Debug, Clone)]
pub struct CmdTimetableNew {
    pub name: String,
    pub output_format: OutputFormat,
}

impl CmdTimetableNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create an empty timetable (HOD only)")
            .arg(arg!(name: <NAME> "Name of the timetable, e.g. CSE 3rd year"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            name: get_required(matches, "name")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let timetable = campus.create_timetable(actor, &self.name).await?;
        print_one(&timetable, &TimetableColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdTimetableList {
    pub output_format: OutputFormat,
}

impl CmdTimetableList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List timetables")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, campus: &Campus) -> Result<(), Box<dyn Error>> {
        let timetables = campus.timetables().await?;
        print_list(&timetables, &TimetableColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdTimetableSlots {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdTimetableSlots {
    pub const NAME: &str = "slots";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the slots of a timetable")
            .arg(CommonArgs::id("id", "Timetable id"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_required(matches, "id")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus) -> Result<(), Box<dyn Error>> {
        let slots = campus.timetable_slots(&self.id).await?;
        print_list(&slots, &SlotColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdTimetableAddSlot {
    pub timetable: String,
    pub day: Weekday,
    pub start: String,
    pub end: String,
    pub slot_type: String,
    pub subject: Option<String>,
    pub room: Option<String>,
    pub faculty: Option<String>,
    pub batch: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdTimetableAddSlot {
    pub const NAME: &str = "add-slot";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Add a weekly slot to a timetable (HOD only)")
            .arg(CommonArgs::id("timetable", "Timetable id"))
            .arg(SlotArgs::day().required(true))
            .arg(SlotArgs::start().required(true))
            .arg(SlotArgs::end().required(true))
            .arg(SlotArgs::slot_type().required(true))
            .arg(SlotArgs::subject())
            .arg(SlotArgs::room())
            .arg(SlotArgs::faculty().help("User id or email of the teaching faculty"))
            .arg(SlotArgs::batch())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            timetable: get_required(matches, "timetable")?,
            day: SlotArgs::get_day(matches)?,
            start: get_required(matches, "start")?,
            end: get_required(matches, "end")?,
            slot_type: get_required(matches, "type")?,
            subject: get_optional(matches, "subject"),
            room: get_optional(matches, "room"),
            faculty: get_optional(matches, "faculty"),
            batch: get_optional(matches, "batch"),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    #[tracing::instrument(skip_all, fields(timetable = %self.timetable))]
    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let faculty_id = match &self.faculty {
            Some(faculty) => Some(resolve_user_id(campus, faculty).await?),
            None => None,
        };
        let draft = SlotDraft {
            day: self.day,
            start_time: self.start,
            end_time: self.end,
            slot_type_id: self.slot_type,
            subject_id: self.subject,
            room_id: self.room,
            faculty_id,
            batch_id: self.batch,
        };
        let slot = campus.add_slot(actor, &self.timetable, &draft).await?;
        print_one(&slot, &SlotColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdTimetableDeleteSlot {
    pub slot: String,
    pub output_format: OutputFormat,
}

impl CmdTimetableDeleteSlot {
    pub const NAME: &str = "delete-slot";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Delete a slot and its lecture summaries (HOD only)")
            .arg(CommonArgs::id("slot", "Slot id"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            slot: get_required(matches, "slot")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        campus.delete_slot(actor, &self.slot).await?;
        print_done("Slot deleted", self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdTimetableAssign {
    pub timetable: String,
    pub group: String,
    pub output_format: OutputFormat,
}

impl CmdTimetableAssign {
    pub const NAME: &str = "assign";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Make a timetable the weekly schedule of a group (HOD only)")
            .arg(CommonArgs::id("timetable", "Timetable id"))
            .arg(CommonArgs::id("group", "Group id"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            timetable: get_required(matches, "timetable")?,
            group: get_required(matches, "group")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        campus
            .assign_timetable(actor, &self.timetable, &self.group)
            .await?;
        print_done("Timetable assigned", self.output_format)
    }
}

fn kind_arg() -> clap::Arg {
    arg!(kind: <KIND> "What to list or create").value_parser(value_parser!(CatalogKind))
}

fn get_kind(matches: &ArgMatches) -> Result<CatalogKind, Box<dyn Error>> {
    matches
        .get_one("kind")
        .copied()
        .ok_or_else(|| "Missing argument: kind".into())
}

/// Adds a slot type, batch, subject or room.
#[derive(Debug, Clone)]
pub struct CmdCatalogNew {
    pub kind: CatalogKind,
    pub name: String,
    pub short_name: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdCatalogNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a slot type, batch, subject or room (HOD only)")
            .arg(kind_arg())
            .arg(arg!(name: <NAME> "Name, or the number of a room"))
            .arg(arg!(-s --"short-name" <SHORT> "Abbreviation, e.g. DS for Data Structures"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            kind: get_kind(matches)?,
            name: get_required(matches, "name")?,
            short_name: get_optional(matches, "short-name"),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let draft = CatalogDraft {
            name: self.name,
            short_name: self.short_name,
        };
        let entry = campus
            .create_catalog_entry(actor, self.kind, &draft)
            .await?;
        print_one(&entry, &CatalogColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdCatalogList {
    pub kind: CatalogKind,
    pub output_format: OutputFormat,
}

impl CmdCatalogList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List slot types, batches, subjects or rooms")
            .arg(kind_arg())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            kind: get_kind(matches)?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus) -> Result<(), Box<dyn Error>> {
        let entries = campus.catalog(self.kind).await?;
        print_list(&entries, &CatalogColumn::ALL, self.output_format)
    }
}
