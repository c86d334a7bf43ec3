// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_core::{Actor, Campus};
use clap::{ArgMatches, Command};

use crate::arg::CommonArgs;
use crate::schedule_formatter::ScheduleFormatter;
use crate::util::{OutputFormat, print_json};

#[derive(Debug, Clone)]
pub struct CmdSchedule {
    pub output_format: OutputFormat,
}

impl Default for CmdSchedule {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
        }
    }
}

impl CmdSchedule {
    pub const NAME: &str = "schedule";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("dashboard")
            .about("Show your week: timetable, lecture summaries and upcoming events")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        tracing::debug!(user = %actor.user_id, "building schedule");
        let schedule = campus.user_schedule(actor).await?;
        match self.output_format {
            OutputFormat::Json => print_json(&schedule),
            OutputFormat::Table => {
                print!("{}", ScheduleFormatter::new(&schedule));
                Ok(())
            }
        }
    }
}
