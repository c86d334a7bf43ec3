// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

/// Role of a user account. Assigned once, changed only by administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Role {
    /// Head of department, with unrestricted calendar rights.
    #[serde(rename = "HOD", alias = "hod")]
    #[cfg_attr(feature = "clap", clap(name = "hod"))]
    Hod,

    /// Teaching staff.
    #[serde(alias = "faculty")]
    #[cfg_attr(feature = "clap", clap(name = "faculty"))]
    Faculty,

    /// Students never edit calendars.
    #[serde(alias = "student")]
    #[cfg_attr(feature = "clap", clap(name = "student"))]
    Student,
}

impl Role {
    /// The stable name used for storage.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Hod => "HOD",
            Role::Faculty => "Faculty",
            Role::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hod" => Ok(Role::Hod),
            "faculty" => Ok(Role::Faculty),
            "student" => Ok(Role::Student),
            _ => Err(format!("Unknown role: {s}")),
        }
    }
}

/// Role a member holds inside a group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum GroupRole {
    /// Can see calendars assigned to the group.
    #[default]
    #[serde(alias = "viewer")]
    #[cfg_attr(feature = "clap", clap(name = "viewer"))]
    Viewer,

    /// Can also edit calendars assigned to the group.
    #[serde(alias = "editor")]
    #[cfg_attr(feature = "clap", clap(name = "editor"))]
    Editor,
}

impl GroupRole {
    /// The stable name used for storage.
    pub const fn as_str(&self) -> &'static str {
        match self {
            GroupRole::Viewer => "Viewer",
            GroupRole::Editor => "Editor",
        }
    }
}

impl fmt::Display for GroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "viewer" => Ok(GroupRole::Viewer),
            "editor" => Ok(GroupRole::Editor),
            _ => Err(format!("Unknown group role: {s}")),
        }
    }
}

/// The resolved identity an operation runs on behalf of.
///
/// Produced by [`crate::Campus::session`] and passed explicitly into every
/// operation instead of being looked up from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Actor {
    /// The user id.
    pub user_id: String,

    /// The user's role.
    pub role: Role,

    /// Display name.
    pub name: String,
}

impl Actor {
    pub(crate) fn is_hod(&self) -> bool {
        self.role == Role::Hod
    }
}
