// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod calendar_formatter;
mod cli;
mod cmd_calendar;
mod cmd_directory;
mod cmd_event;
mod cmd_event_type;
mod cmd_prefs;
mod cmd_schedule;
mod cmd_summary;
mod cmd_timetable;
mod config;
mod directory_formatter;
mod event_formatter;
mod schedule_formatter;
mod table;
mod timetable_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
pub use crate::util::OutputFormat;
