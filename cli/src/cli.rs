// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use campus_core::{APP_NAME, Actor, Campus, CampusError};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd_calendar::{
    CmdCalendarAssign, CmdCalendarDelete, CmdCalendarEdit, CmdCalendarList, CmdCalendarNew,
    CmdCalendarShow,
};
use crate::cmd_directory::{
    CmdGroupAddMember, CmdGroupList, CmdGroupMembers, CmdGroupNew, CmdGroupRemoveMember,
    CmdUserList, CmdUserNew,
};
use crate::cmd_event::{CmdEventAdd, CmdEventDelete, CmdEventEdit, CmdEventRemoveDate};
use crate::cmd_event_type::{CmdEventTypeDelete, CmdEventTypeEdit, CmdEventTypeList, CmdEventTypeNew};
use crate::cmd_prefs::{CmdPrefsSet, CmdPrefsShow};
use crate::cmd_schedule::CmdSchedule;
use crate::cmd_summary::{CmdSummaryDelete, CmdSummarySave, CmdSummaryShow};
use crate::cmd_timetable::{
    CmdCatalogList, CmdCatalogNew, CmdTimetableAddSlot, CmdTimetableAssign,
    CmdTimetableDeleteSlot, CmdTimetableList, CmdTimetableNew, CmdTimetableSlots,
};
use crate::config::{CAMPUS_USER_ENV, parse_config};

/// Run the campus command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG`, warnings and errors by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Email of the user to act as
    pub user: Option<String>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Campus calendars, weekly timetables and lecture summaries.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to schedule
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $CAMPUS_CONFIG, then $XDG_CONFIG_HOME/campus/config.toml \
on Linux and MacOS, %LOCALAPPDATA%/campus/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(-u --user <EMAIL> "Email of the user to act as")
                    .long_help(
                        "\
Email of the user to act as. Defaults to $CAMPUS_USER, then the `user` key of the [cli] table \
in the configuration file.",
                    )
                    .global(true),
            )
            .subcommand(CmdSchedule::command())
            .subcommand(
                Command::new("calendar")
                    .alias("cal")
                    .about("Manage calendars and who can see them")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdCalendarList::command())
                    .subcommand(CmdCalendarShow::command())
                    .subcommand(CmdCalendarNew::command())
                    .subcommand(CmdCalendarEdit::command())
                    .subcommand(CmdCalendarDelete::command())
                    .subcommand(CmdCalendarAssign::command())
                    .subcommand(CmdCalendarAssign::command_unassign()),
            )
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage the events of a calendar")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventAdd::command())
                    .subcommand(CmdEventEdit::command())
                    .subcommand(CmdEventDelete::command())
                    .subcommand(CmdEventRemoveDate::command()),
            )
            .subcommand(
                Command::new("event-type")
                    .about("Manage event types")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventTypeList::command())
                    .subcommand(CmdEventTypeNew::command())
                    .subcommand(CmdEventTypeEdit::command())
                    .subcommand(CmdEventTypeDelete::command()),
            )
            .subcommand(
                Command::new("user")
                    .about("Manage user accounts")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdUserNew::command())
                    .subcommand(CmdUserList::command()),
            )
            .subcommand(
                Command::new("group")
                    .about("Manage groups and their members")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdGroupNew::command())
                    .subcommand(CmdGroupList::command())
                    .subcommand(CmdGroupAddMember::command())
                    .subcommand(CmdGroupRemoveMember::command())
                    .subcommand(CmdGroupMembers::command()),
            )
            .subcommand(
                Command::new("timetable")
                    .alias("tt")
                    .about("Manage weekly timetables")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTimetableNew::command())
                    .subcommand(CmdTimetableList::command())
                    .subcommand(CmdTimetableSlots::command())
                    .subcommand(CmdTimetableAddSlot::command())
                    .subcommand(CmdTimetableDeleteSlot::command())
                    .subcommand(CmdTimetableAssign::command()),
            )
            .subcommand(
                Command::new("catalog")
                    .about("Manage slot types, batches, subjects and rooms")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdCatalogNew::command())
                    .subcommand(CmdCatalogList::command()),
            )
            .subcommand(
                Command::new("summary")
                    .about("Write and read lecture summaries")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdSummarySave::command())
                    .subcommand(CmdSummaryShow::command())
                    .subcommand(CmdSummaryDelete::command()),
            )
            .subcommand(
                Command::new("prefs")
                    .about("Filter the slots your schedule shows")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdPrefsShow::command())
                    .subcommand(CmdPrefsSet::command()),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdSchedule::NAME, m)) => Schedule(CmdSchedule::from(m)),
            Some(("calendar", m)) => match m.subcommand() {
                Some((CmdCalendarList::NAME, m)) => CalendarList(CmdCalendarList::from(m)),
                Some((CmdCalendarShow::NAME, m)) => CalendarShow(CmdCalendarShow::from(m)?),
                Some((CmdCalendarNew::NAME, m)) => CalendarNew(CmdCalendarNew::from(m)?),
                Some((CmdCalendarEdit::NAME, m)) => CalendarEdit(CmdCalendarEdit::from(m)?),
                Some((CmdCalendarDelete::NAME, m)) => CalendarDelete(CmdCalendarDelete::from(m)?),
                Some((CmdCalendarAssign::NAME, m)) => {
                    CalendarAssign(CmdCalendarAssign::from(m, false)?)
                }
                Some((CmdCalendarAssign::NAME_UNASSIGN, m)) => {
                    CalendarAssign(CmdCalendarAssign::from(m, true)?)
                }
                _ => unreachable!(),
            },
            Some(("event", m)) => match m.subcommand() {
                Some((CmdEventAdd::NAME, m)) => EventAdd(CmdEventAdd::from(m)?),
                Some((CmdEventEdit::NAME, m)) => EventEdit(CmdEventEdit::from(m)?),
                Some((CmdEventDelete::NAME, m)) => EventDelete(CmdEventDelete::from(m)?),
                Some((CmdEventRemoveDate::NAME, m)) => {
                    EventRemoveDate(CmdEventRemoveDate::from(m)?)
                }
                _ => unreachable!(),
            },
            Some(("event-type", m)) => match m.subcommand() {
                Some((CmdEventTypeList::NAME, m)) => EventTypeList(CmdEventTypeList::from(m)),
                Some((CmdEventTypeNew::NAME, m)) => EventTypeNew(CmdEventTypeNew::from(m)?),
                Some((CmdEventTypeEdit::NAME, m)) => EventTypeEdit(CmdEventTypeEdit::from(m)?),
                Some((CmdEventTypeDelete::NAME, m)) => {
                    EventTypeDelete(CmdEventTypeDelete::from(m)?)
                }
                _ => unreachable!(),
            },
            Some(("user", m)) => match m.subcommand() {
                Some((CmdUserNew::NAME, m)) => UserNew(CmdUserNew::from(m)?),
                Some((CmdUserList::NAME, m)) => UserList(CmdUserList::from(m)),
                _ => unreachable!(),
            },
            Some(("group", m)) => match m.subcommand() {
                Some((CmdGroupNew::NAME, m)) => GroupNew(CmdGroupNew::from(m)?),
                Some((CmdGroupList::NAME, m)) => GroupList(CmdGroupList::from(m)),
                Some((CmdGroupAddMember::NAME, m)) => GroupAddMember(CmdGroupAddMember::from(m)?),
                Some((CmdGroupRemoveMember::NAME, m)) => {
                    GroupRemoveMember(CmdGroupRemoveMember::from(m)?)
                }
                Some((CmdGroupMembers::NAME, m)) => GroupMembers(CmdGroupMembers::from(m)?),
                _ => unreachable!(),
            },
            Some(("timetable", m)) => match m.subcommand() {
                Some((CmdTimetableNew::NAME, m)) => TimetableNew(CmdTimetableNew::from(m)?),
                Some((CmdTimetableList::NAME, m)) => TimetableList(CmdTimetableList::from(m)),
                Some((CmdTimetableSlots::NAME, m)) => TimetableSlots(CmdTimetableSlots::from(m)?),
                Some((CmdTimetableAddSlot::NAME, m)) => {
                    TimetableAddSlot(CmdTimetableAddSlot::from(m)?)
                }
                Some((CmdTimetableDeleteSlot::NAME, m)) => {
                    TimetableDeleteSlot(CmdTimetableDeleteSlot::from(m)?)
                }
                Some((CmdTimetableAssign::NAME, m)) => {
                    TimetableAssign(CmdTimetableAssign::from(m)?)
                }
                _ => unreachable!(),
            },
            Some(("catalog", m)) => match m.subcommand() {
                Some((CmdCatalogNew::NAME, m)) => CatalogNew(CmdCatalogNew::from(m)?),
                Some((CmdCatalogList::NAME, m)) => CatalogList(CmdCatalogList::from(m)?),
                _ => unreachable!(),
            },
            Some(("summary", m)) => match m.subcommand() {
                Some((CmdSummarySave::NAME, m)) => SummarySave(CmdSummarySave::from(m)?),
                Some((CmdSummaryShow::NAME, m)) => SummaryShow(CmdSummaryShow::from(m)?),
                Some((CmdSummaryDelete::NAME, m)) => SummaryDelete(CmdSummaryDelete::from(m)?),
                _ => unreachable!(),
            },
            Some(("prefs", m)) => match m.subcommand() {
                Some((CmdPrefsShow::NAME, m)) => PrefsShow(CmdPrefsShow::from(m)),
                Some((CmdPrefsSet::NAME, m)) => PrefsSet(CmdPrefsSet::from(m)),
                _ => unreachable!(),
            },
            None => Schedule(CmdSchedule::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        let user = matches.get_one("user").cloned();
        Ok(Cli {
            config,
            user,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.user).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the weekly schedule
    Schedule(CmdSchedule),

    /// List visible calendars
    CalendarList(CmdCalendarList),

    /// Show a calendar
    CalendarShow(CmdCalendarShow),

    /// Create a calendar
    CalendarNew(CmdCalendarNew),

    /// Edit a calendar
    CalendarEdit(CmdCalendarEdit),

    /// Delete a calendar
    CalendarDelete(CmdCalendarDelete),

    /// Assign a group to a calendar, or remove it
    CalendarAssign(CmdCalendarAssign),

    /// Add an event
    EventAdd(CmdEventAdd),

    /// Edit an event
    EventEdit(CmdEventEdit),

    /// Delete an event
    EventDelete(CmdEventDelete),

    /// Remove a single day from an event
    EventRemoveDate(CmdEventRemoveDate),

    /// List event types
    EventTypeList(CmdEventTypeList),

    /// Create an event type
    EventTypeNew(CmdEventTypeNew),

    /// Edit an event type
    EventTypeEdit(CmdEventTypeEdit),

    /// Delete an event type
    EventTypeDelete(CmdEventTypeDelete),

    /// Register a user
    UserNew(CmdUserNew),

    /// List users
    UserList(CmdUserList),

    /// Create a group
    GroupNew(CmdGroupNew),

    /// List groups
    GroupList(CmdGroupList),

    /// Add a group member
    GroupAddMember(CmdGroupAddMember),

    /// Remove a group member
    GroupRemoveMember(CmdGroupRemoveMember),

    /// List group members
    GroupMembers(CmdGroupMembers),

    /// Create a timetable
    TimetableNew(CmdTimetableNew),

    /// List timetables
    TimetableList(CmdTimetableList),

    /// List the slots of a timetable
    TimetableSlots(CmdTimetableSlots),

    /// Add a slot to a timetable
    TimetableAddSlot(CmdTimetableAddSlot),

    /// Delete a slot
    TimetableDeleteSlot(CmdTimetableDeleteSlot),

    /// Assign a timetable to a group
    TimetableAssign(CmdTimetableAssign),

    /// Add a catalog entry
    CatalogNew(CmdCatalogNew),

    /// List catalog entries
    CatalogList(CmdCatalogList),

    /// Save a lecture summary
    SummarySave(CmdSummarySave),

    /// Show a lecture summary
    SummaryShow(CmdSummaryShow),

    /// Delete a lecture summary
    SummaryDelete(CmdSummaryDelete),

    /// Show schedule preferences
    PrefsShow(CmdPrefsShow),

    /// Update schedule preferences
    PrefsSet(CmdPrefsSet),
}

impl Commands {
    /// Run the command with the given configuration and user
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>, user: Option<String>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Schedule(a)            => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            CalendarList(a)        => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            CalendarShow(a)        => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            CalendarNew(a)         => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            CalendarEdit(a)        => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            CalendarDelete(a)      => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            CalendarAssign(a)      => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            EventAdd(a)            => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            EventEdit(a)           => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            EventDelete(a)         => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            EventRemoveDate(a)     => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            EventTypeList(a)       => Self::run_with(config, user, |c, _| a.run(c).boxed()).await,
            EventTypeNew(a)        => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            EventTypeEdit(a)       => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            EventTypeDelete(a)     => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            UserNew(a)             => Self::run_anonymous(config, |c| a.run(c).boxed()).await,
            UserList(a)            => Self::run_anonymous(config, |c| a.run(c).boxed()).await,
            GroupNew(a)            => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            GroupList(a)           => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            GroupAddMember(a)      => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            GroupRemoveMember(a)   => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            GroupMembers(a)        => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            TimetableNew(a)        => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            TimetableList(a)       => Self::run_with(config, user, |c, _| a.run(c).boxed()).await,
            TimetableSlots(a)      => Self::run_with(config, user, |c, _| a.run(c).boxed()).await,
            TimetableAddSlot(a)    => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            TimetableDeleteSlot(a) => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            TimetableAssign(a)     => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            CatalogNew(a)          => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            CatalogList(a)         => Self::run_with(config, user, |c, _| a.run(c).boxed()).await,
            SummarySave(a)         => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            SummaryShow(a)         => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            SummaryDelete(a)       => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            PrefsShow(a)           => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
            PrefsSet(a)            => Self::run_with(config, user, |c, x| a.run(c, x).boxed()).await,
        }
    }

    /// Runs a command on behalf of the signed-in user.
    async fn run_with<F>(
        config: Option<PathBuf>,
        user: Option<String>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Campus, &'a Actor) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration");
        let (core_config, config) = parse_config(config).await?;
        let email = config.resolve_user(user);
        let campus = Campus::new(core_config).await?;

        let result = match campus.session(email.as_deref()).await {
            Ok(actor) => f(&campus, &actor).await,
            Err(CampusError::Unauthenticated) => Err(format!(
                "{}, sign in with --user <EMAIL> or {CAMPUS_USER_ENV}",
                CampusError::Unauthenticated
            )
            .into()),
            Err(e) => Err(e.into()),
        };

        campus.close().await?;
        result
    }

    /// Runs a command that needs no signed-in user.
    async fn run_anonymous<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Campus) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration");
        let (core_config, _config) = parse_config(config).await?;
        let campus = Campus::new(core_config).await?;

        let result = f(&campus).await;

        campus.close().await?;
        result
    }
}
