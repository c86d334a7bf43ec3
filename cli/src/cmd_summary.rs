// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_core::{Actor, Campus, SummaryDraft};
use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;

use crate::arg::{CommonArgs, get_optional, get_required};
use crate::timetable_formatter::SummaryColumn;
use crate::util::{OutputFormat, print_done, print_json, print_one};

fn slot_arg() -> Arg {
    CommonArgs::id("slot", "Slot id")
}

fn date_arg() -> Arg {
    arg!(date: <DATE> "Date of the lecture (YYYY-MM-DD)")
}

#[derive(Debug, Clone)]
pub struct CmdSummarySave {
    pub slot: String,
    pub date: String,
    pub content: String,
    pub notes: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdSummarySave {
    pub const NAME: &str = "save";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Write what a lecture covered, replacing an earlier summary")
            .arg(slot_arg())
            .arg(date_arg())
            .arg(arg!(content: <CONTENT> "What was covered"))
            .arg(arg!(--notes <NOTES> "Additional notes, e.g. homework"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            slot: get_required(matches, "slot")?,
            date: get_required(matches, "date")?,
            content: get_required(matches, "content")?,
            notes: get_optional(matches, "notes"),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    #[tracing::instrument(skip_all, fields(slot = %self.slot, date = %self.date))]
    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let draft = SummaryDraft {
            content: self.content,
            notes: self.notes,
        };
        let summary = campus
            .save_summary(actor, &self.slot, &self.date, &draft)
            .await?;
        print_one(&summary, &SummaryColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdSummaryShow {
    pub slot: String,
    pub date: String,
    pub output_format: OutputFormat,
}

impl CmdSummaryShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the summary of a lecture")
            .arg(slot_arg())
            .arg(date_arg())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            slot: get_required(matches, "slot")?,
            date: get_required(matches, "date")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let summary = campus.summary(actor, &self.slot, &self.date).await?;
        match (summary, self.output_format) {
            (Some(summary), format) => print_one(&summary, &SummaryColumn::ALL, format),
            (None, OutputFormat::Json) => print_json(&()),
            (None, OutputFormat::Table) => {
                println!("{}", "No summary for this lecture".italic());
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdSummaryDelete {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdSummaryDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a lecture summary (author or HOD)")
            .arg(CommonArgs::id("id", "Summary id"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: get_required(matches, "id")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        campus.delete_summary(actor, &self.id).await?;
        print_done("Summary deleted", self.output_format)
    }
}
