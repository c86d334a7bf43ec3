// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use campus_core::{Group, Member, User};
use colored::Color;

use crate::table::{PaddingDirection, TableColumn};

#[derive(Debug, Clone, Copy)]
pub enum UserColumn {
    Id,
    Name,
    Email,
    Role,
}

impl UserColumn {
    pub const ALL: [UserColumn; 4] = [
        UserColumn::Id,
        UserColumn::Name,
        UserColumn::Email,
        UserColumn::Role,
    ];
}

impl TableColumn<User> for UserColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            UserColumn::Id => "ID",
            UserColumn::Name => "Name",
            UserColumn::Email => "Email",
            UserColumn::Role => "Role",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a User) -> Cow<'a, str> {
        match self {
            UserColumn::Id => data.id.as_str().into(),
            UserColumn::Name => data.name.as_str().into(),
            UserColumn::Email => data.email.as_str().into(),
            UserColumn::Role => data.role.as_str().into(),
        }
    }

    fn color(&self, _data: &User) -> Option<Color> {
        match self {
            UserColumn::Id => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum GroupColumn {
    Id,
    Title,
    DefaultRole,
    Members,
}

impl GroupColumn {
    pub const ALL: [GroupColumn; 4] = [
        GroupColumn::Id,
        GroupColumn::Title,
        GroupColumn::DefaultRole,
        GroupColumn::Members,
    ];
}

impl TableColumn<Group> for GroupColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            GroupColumn::Id => "ID",
            GroupColumn::Title => "Title",
            GroupColumn::DefaultRole => "Default role",
            GroupColumn::Members => "Members",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Group) -> Cow<'a, str> {
        match self {
            GroupColumn::Id => data.id.as_str().into(),
            GroupColumn::Title => data.title.as_str().into(),
            GroupColumn::DefaultRole => data.default_role.as_str().into(),
            GroupColumn::Members => data.member_count.to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            GroupColumn::Members => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, _data: &Group) -> Option<Color> {
        match self {
            GroupColumn::Id => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

/// Members of a group, with the role they effectively hold.
#[derive(Debug, Clone, Copy)]
pub enum MemberColumn {
    Id,
    Name,
    Email,
    Role,
}

impl MemberColumn {
    pub const ALL: [MemberColumn; 4] = [
        MemberColumn::Id,
        MemberColumn::Name,
        MemberColumn::Email,
        MemberColumn::Role,
    ];
}

impl TableColumn<Member> for MemberColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            MemberColumn::Id => "ID",
            MemberColumn::Name => "Name",
            MemberColumn::Email => "Email",
            MemberColumn::Role => "Group role",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Member) -> Cow<'a, str> {
        match self {
            MemberColumn::Id => data.user.id.as_str().into(),
            MemberColumn::Name => data.user.name.as_str().into(),
            MemberColumn::Email => data.user.email.as_str().into(),
            MemberColumn::Role => match data.role {
                Some(role) => role.as_str().into(),
                None => "(default)".into(),
            },
        }
    }

    fn color(&self, data: &Member) -> Option<Color> {
        match (self, data.role) {
            (MemberColumn::Id, _) => Some(Color::BrightBlack),
            (MemberColumn::Role, None) => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
