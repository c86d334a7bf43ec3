// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use campus_core::{Actor, Campus, GroupDraft, GroupRole, Role, UserDraft};
use clap::{ArgMatches, Command, arg, value_parser};

use crate::arg::{CommonArgs, get_required};
use crate::directory_formatter::{GroupColumn, MemberColumn, UserColumn};
use crate::util::{OutputFormat, print_done, print_list, print_one};

/// Resolves a user given by id or by email.
pub async fn resolve_user_id(campus: &Campus, user: &str) -> Result<String, Box<dyn Error>> {
    match user.contains('@') {
        true => Ok(campus.user_by_email(user).await?.id),
        false => Ok(user.to_string()),
    }
}

/// Registers an account. Works without signing in so the first HOD can be
/// created.
#[derive(Debug, Clone)]
pub struct CmdUserNew {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub output_format: OutputFormat,
}

impl CmdUserNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Register a user account")
            .arg(arg!(name: <NAME> "Display name"))
            .arg(arg!(email: <EMAIL> "Email used to sign in"))
            .arg(
                arg!(-r --role <ROLE> "Role of the user")
                    .value_parser(value_parser!(Role))
                    .default_value("student"),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            name: get_required(matches, "name")?,
            email: get_required(matches, "email")?,
            role: matches.get_one("role").copied().unwrap_or(Role::Student),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus) -> Result<(), Box<dyn Error>> {
        let draft = UserDraft {
            name: self.name,
            email: self.email,
            role: self.role,
        };
        let user = campus.create_user(&draft).await?;
        print_one(&user, &UserColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdUserList {
    pub output_format: OutputFormat,
}

impl CmdUserList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List user accounts")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, campus: &Campus) -> Result<(), Box<dyn Error>> {
        let users = campus.users().await?;
        print_list(&users, &UserColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdGroupNew {
    pub title: String,
    pub default_role: GroupRole,
    pub output_format: OutputFormat,
}

impl CmdGroupNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a group (HOD only)")
            .arg(arg!(title: <TITLE> "Title of the group"))
            .arg(
                arg!(--"default-role" <ROLE> "Calendar role of members without their own")
                    .value_parser(value_parser!(GroupRole))
                    .default_value("viewer"),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            title: get_required(matches, "title")?,
            default_role: matches
                .get_one("default-role")
                .copied()
                .unwrap_or(GroupRole::Viewer),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let draft = GroupDraft {
            title: self.title,
            default_role: self.default_role,
        };
        let group = campus.create_group(actor, &draft).await?;
        print_one(&group, &GroupColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdGroupList {
    pub output_format: OutputFormat,
}

impl CmdGroupList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List groups (HOD only)")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let groups = campus.groups(actor).await?;
        print_list(&groups, &GroupColumn::ALL, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdGroupAddMember {
    pub group: String,
    pub user: String,
    pub role: Option<GroupRole>,
    pub output_format: OutputFormat,
}

impl CmdGroupAddMember {
    pub const NAME: &str = "add-member";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Add a user to a group (HOD only)")
            .arg(CommonArgs::id("group", "Group id"))
            .arg(CommonArgs::id("user", "User id or email"))
            .arg(
                arg!(-r --role <ROLE> "Calendar role overriding the group default")
                    .value_parser(value_parser!(GroupRole)),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            group: get_required(matches, "group")?,
            user: get_required(matches, "user")?,
            role: matches.get_one("role").copied(),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let user_id = resolve_user_id(campus, &self.user).await?;
        campus
            .add_member(actor, &self.group, &user_id, self.role)
            .await?;
        print_done("Member added", self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdGroupRemoveMember {
    pub group: String,
    pub user: String,
    pub output_format: OutputFormat,
}

impl CmdGroupRemoveMember {
    pub const NAME: &str = "remove-member";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Remove a user from a group (HOD only)")
            .arg(CommonArgs::id("group", "Group id"))
            .arg(CommonArgs::id("user", "User id or email"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            group: get_required(matches, "group")?,
            user: get_required(matches, "user")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let user_id = resolve_user_id(campus, &self.user).await?;
        campus.remove_member(actor, &self.group, &user_id).await?;
        print_done("Member removed", self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdGroupMembers {
    pub group: String,
    pub output_format: OutputFormat,
}

impl CmdGroupMembers {
    pub const NAME: &str = "members";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the members of a group (HOD only)")
            .arg(CommonArgs::id("group", "Group id"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            group: get_required(matches, "group")?,
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, campus: &Campus, actor: &Actor) -> Result<(), Box<dyn Error>> {
        let members = campus.members(actor, &self.group).await?;
        print_list(&members, &MemberColumn::ALL, self.output_format)
    }
}
