// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_core::parse_weekday;
use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::civil::Weekday;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    /// A required positional id.
    pub fn id(name: &'static str, help: &'static str) -> Arg {
        Arg::new(name).required(true).help(help)
    }

    pub fn description() -> Arg {
        arg!(-d --description <DESCRIPTION> "Description, an empty value clears it")
    }

    pub fn get_description(matches: &ArgMatches) -> Option<String> {
        get_optional(matches, "description")
    }
}

/// Value of an argument clap guarantees to be present.
pub fn get_required(matches: &ArgMatches, name: &str) -> Result<String, Box<dyn Error>> {
    get_optional(matches, name).ok_or_else(|| format!("Missing argument: {name}").into())
}

pub fn get_optional(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.get_one::<String>(name).cloned()
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn title(positional: bool) -> Arg {
        match positional {
            true => arg!(title: <TITLE> "Title of the event"),
            false => arg!(title: -t --title <TITLE> "Title of the event"),
        }
    }

    pub fn start(required: bool) -> Arg {
        arg!(--start <DATE> "First day of the event (YYYY-MM-DD)").required(required)
    }

    pub fn end() -> Arg {
        arg!(--end <DATE> "Last day of the event, omit for a single day")
    }

    pub fn event_type(required: bool) -> Arg {
        arg!(--"type" <EVENT_TYPE> "Event type id").required(required)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SlotArgs;

impl SlotArgs {
    pub fn day() -> Arg {
        arg!(--day <DAY> "Day of the week, e.g. Monday or mon").value_parser(weekday)
    }

    pub fn get_day(matches: &ArgMatches) -> Result<Weekday, Box<dyn Error>> {
        matches
            .get_one::<Weekday>("day")
            .copied()
            .ok_or_else(|| "Missing argument: day".into())
    }

    pub fn start() -> Arg {
        arg!(--start <TIME> "Start time (HH:MM)")
    }

    pub fn end() -> Arg {
        arg!(--end <TIME> "End time (HH:MM)")
    }

    pub fn slot_type() -> Arg {
        arg!(--"type" <SLOT_TYPE> "Slot type id")
    }

    pub fn subject() -> Arg {
        arg!(--subject <SUBJECT> "Subject id")
    }

    pub fn room() -> Arg {
        arg!(--room <ROOM> "Room id")
    }

    pub fn faculty() -> Arg {
        arg!(--faculty <USER> "User id of the teaching faculty")
    }

    pub fn batch() -> Arg {
        arg!(--batch <BATCH> "Batch id")
    }
}

fn weekday(s: &str) -> Result<Weekday, String> {
    parse_weekday(s).ok_or_else(|| format!("Invalid day: {s}"))
}
