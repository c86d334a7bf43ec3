// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar permission predicates.
//!
//! The decisions are pure functions over the user's role and the group
//! memberships they hold in groups assigned to the calendar, so the store only
//! has to fetch those two facts.

use crate::{GroupRole, Role};

/// A membership the user holds in one group assigned to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grant {
    /// Explicit per-membership role, if set.
    pub explicit: Option<GroupRole>,

    /// The group's default role.
    pub group_default: GroupRole,
}

impl Grant {
    /// The effective role: the explicit one, else the group default.
    pub fn resolve(&self) -> GroupRole {
        self.explicit.unwrap_or(self.group_default)
    }
}

/// Whether a user may view a calendar.
///
/// `role` is `None` when no user record exists.
pub fn can_view(role: Option<Role>, grants: &[Grant]) -> bool {
    match role {
        None => false,
        Some(Role::Hod) => true,
        Some(Role::Faculty | Role::Student) => !grants.is_empty(),
    }
}

/// Whether a user may edit a calendar and its events.
pub fn can_edit(role: Option<Role>, grants: &[Grant]) -> bool {
    match role {
        None | Some(Role::Student) => false,
        Some(Role::Hod) => true,
        Some(Role::Faculty) => grants.iter().any(|g| g.resolve() == GroupRole::Editor),
    }
}
