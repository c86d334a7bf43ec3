// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_core::{Actor, Campus, Preferences};
use clap::{ArgAction, ArgMatches, Command, arg};
use colored::Colorize;

use crate::arg::{CommonArgs, get_optional};
use crate::util::{OutputFormat, print_json, split_ids};

fn print_preferences(prefs: &Preferences, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    fn describe(ids: Option<&Vec<String>>) -> String {
        match ids {
            None => "all".italic().to_string(),
            Some(ids) if ids.is_empty() => "none".italic().to_string(),
            Some(ids) => ids.join(", "),
        }
    }

    match format {
        OutputFormat::Json => print_json(prefs),
        OutputFormat::Table => {
            let slot_types = describe(prefs.enabled_slot_type_ids.as_ref());
            let batches = describe(prefs.selected_batch_ids.as_ref());
            println!("{} {}", "Slot types:".bold(), slot_types);
            println!("{} {}", "Batches:".bold(), batches);
            Ok(())
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdPrefsShow {
    pub output_format: OutputFormat,
}

impl CmdPrefsShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show your schedule filters")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let prefs = campus.preferences(actor).await?;
        print_preferences(&prefs, self.output_format)
    }
}

/// How one filter dimension changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Keep,
    All,
    Only(Vec<String>),
}

impl FilterChange {
    fn from_args(matches: &ArgMatches, list: &str, all: &str) -> Self {
        match (matches.get_flag(all), get_optional(matches, list)) {
            (true, _) => FilterChange::All,
            (false, Some(ids)) => FilterChange::Only(split_ids(&ids)),
            (false, None) => FilterChange::Keep,
        }
    }

    fn apply(self, current: Option<Vec<String>>) -> Option<Vec<String>> {
        match self {
            FilterChange::Keep => current,
            FilterChange::All => None,
            FilterChange::Only(ids) => Some(ids),
        }
    }
}

/// Updates a student's filters, leaving a dimension untouched unless asked.
#[derive(Debug, Clone)]
pub struct CmdPrefsSet {
    pub slot_types: FilterChange,
    pub batches: FilterChange,
    pub output_format: OutputFormat,
}

impl CmdPrefsSet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Choose which slot types and batches your schedule shows (students only)")
            .arg(arg!(--"slot-types" <IDS> "Comma separated slot type ids to show"))
            .arg(
                arg!(--"all-slot-types" "Show every slot type")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("slot-types"),
            )
            .arg(arg!(--batches <IDS> "Comma separated batch ids to show"))
            .arg(
                arg!(--"all-batches" "Show every batch")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("batches"),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            slot_types: FilterChange::from_args(matches, "slot-types", "all-slot-types"),
            batches: FilterChange::from_args(matches, "batches", "all-batches"),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let current = campus.preferences(actor).await?;
        let prefs = Preferences {
            enabled_slot_type_ids: self.slot_types.apply(current.enabled_slot_type_ids),
            selected_batch_ids: self.batches.apply(current.selected_batch_ids),
        };
        let saved = campus.set_preferences(actor, &prefs).await?;
        print_preferences(&saved, self.output_format)
    }
}
