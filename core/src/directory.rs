// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{CampusError, GroupRole, Role};

const MAX_NAME_LEN: usize = 100;

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct User {
    /// The unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unique, lower-cased e-mail address.
    pub email: String,

    /// Role of the account.
    pub role: Role,
}

/// Draft for a new user account.
#[derive(Debug, Clone)]
pub struct UserDraft {
    /// Display name.
    pub name: String,

    /// E-mail address, trimmed and lower-cased.
    pub email: String,

    /// Role of the account.
    pub role: Role,
}

impl UserDraft {
    pub(crate) fn validate(&self) -> Result<(String, String), CampusError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CampusError::validation("Name is required"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CampusError::validation(format!(
                "Name must be {MAX_NAME_LEN} characters or less"
            )));
        }

        let email = normalize_email(&self.email);
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(CampusError::validation("Invalid email address")),
        }
        Ok((name.to_string(), email))
    }
}

/// A group of users, the unit timetables and calendars are shared with.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Group {
    /// The unique identifier.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Role applied to members without an explicit one.
    pub default_role: GroupRole,

    /// Number of members.
    pub member_count: i64,
}

/// Draft for a new group.
#[derive(Debug, Clone, Default)]
pub struct GroupDraft {
    /// Display title.
    pub title: String,

    /// Role applied to members without an explicit one.
    pub default_role: GroupRole,
}

impl GroupDraft {
    pub(crate) fn validate(&self) -> Result<String, CampusError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CampusError::validation("Group title is required"));
        }
        if title.chars().count() > MAX_NAME_LEN {
            return Err(CampusError::validation(format!(
                "Group title must be {MAX_NAME_LEN} characters or less"
            )));
        }
        Ok(title.to_string())
    }
}

/// A member of a group.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Member {
    /// The member.
    pub user: User,

    /// Explicit role, overriding the group default.
    pub role: Option<GroupRole>,
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
