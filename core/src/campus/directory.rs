// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::campus::{Campus, new_id, require_hod};
use crate::directory::normalize_email;
use crate::error::{conflict_or_persistence, persistence};
use crate::localdb::UserRecord;
use crate::{Actor, CampusError, Group, GroupDraft, GroupRole, Member, User, UserDraft};

impl Campus {
    /// Resolves the signed-in user.
    ///
    /// Fails with `Unauthenticated` when there is no e-mail or no account
    /// matches it.
    pub async fn session(&self, email: Option<&str>) -> Result<Actor, CampusError> {
        const ACTION: &str = "load session";

        let Some(email) = email.map(normalize_email).filter(|e| !e.is_empty()) else {
            return Err(CampusError::Unauthenticated);
        };

        let record = self
            .db
            .users
            .get_by_email(&email)
            .await
            .map_err(persistence(ACTION))?
            .ok_or(CampusError::Unauthenticated)?;
        let user = record.into_user().map_err(persistence(ACTION))?;

        tracing::debug!(user_id = %user.id, role = user.role.as_str(), "session resolved");
        Ok(Actor {
            user_id: user.id,
            role: user.role,
            name: user.name,
        })
    }

    /// Registers a user account.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_user(&self, draft: &UserDraft) -> Result<User, CampusError> {
        const ACTION: &str = "create user";

        let (name, email) = draft.validate()?;
        let record = UserRecord::new(new_id(), name, email, draft.role);
        self.db
            .users
            .insert(&record)
            .await
            .map_err(conflict_or_persistence(
                ACTION,
                "A user with this email already exists",
            ))?;
        tracing::info!(user_id = %record.id, "user created");

        record.into_user().map_err(persistence(ACTION))
    }

    pub async fn user(&self, user_id: &str) -> Result<User, CampusError> {
        const ACTION: &str = "load user";

        self.db
            .users
            .get(user_id)
            .await
            .map_err(persistence(ACTION))?
            .ok_or_else(|| CampusError::not_found("User not found"))?
            .into_user()
            .map_err(persistence(ACTION))
    }

    pub async fn user_by_email(&self, email: &str) -> Result<User, CampusError> {
        const ACTION: &str = "load user";

        self.db
            .users
            .get_by_email(&normalize_email(email))
            .await
            .map_err(persistence(ACTION))?
            .ok_or_else(|| CampusError::not_found("User not found"))?
            .into_user()
            .map_err(persistence(ACTION))
    }

    /// All users, ordered by name.
    pub async fn users(&self) -> Result<Vec<User>, CampusError> {
        const ACTION: &str = "load users";

        self.db
            .users
            .list()
            .await
            .map_err(persistence(ACTION))?
            .into_iter()
            .map(|r| r.into_user())
            .collect::<Result<Vec<_>, _>>()
            .map_err(persistence(ACTION))
    }

    /// Creates a group. HOD only.
    #[tracing::instrument(skip(self, actor, draft), fields(user = %actor.user_id))]
    pub async fn create_group(
        &self,
        actor: &Actor,
        draft: &GroupDraft,
    ) -> Result<Group, CampusError> {
        const ACTION: &str = "create group";

        require_hod(actor, "Only HOD can create groups")?;
        let title = draft.validate()?;

        let id = new_id();
        self.db
            .groups
            .insert(&id, &title, draft.default_role)
            .await
            .map_err(persistence(ACTION))?;
        tracing::info!(group_id = %id, "group created");

        self.stored_group(&id, ACTION).await
    }

    /// All groups with their member counts. HOD only.
    pub async fn groups(&self, actor: &Actor) -> Result<Vec<Group>, CampusError> {
        const ACTION: &str = "load groups";

        require_hod(actor, "Only HOD can manage groups")?;
        self.db
            .groups
            .list()
            .await
            .map_err(persistence(ACTION))?
            .into_iter()
            .map(|r| r.into_group())
            .collect::<Result<Vec<_>, _>>()
            .map_err(persistence(ACTION))
    }

    /// Adds a user to a group, optionally overriding the group's default
    /// role. HOD only.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn add_member(
        &self,
        actor: &Actor,
        group_id: &str,
        user_id: &str,
        role: Option<GroupRole>,
    ) -> Result<(), CampusError> {
        const ACTION: &str = "add member";

        require_hod(actor, "Only HOD can manage groups")?;
        self.stored_group(group_id, ACTION).await?;
        self.ensure_user_exists(user_id, ACTION).await?;

        self.db
            .groups
            .add_member(group_id, user_id, role)
            .await
            .map_err(conflict_or_persistence(
                ACTION,
                "User is already a member of this group",
            ))?;
        tracing::info!(group_id, member = user_id, "member added");
        Ok(())
    }

    /// Removes a user from a group. HOD only.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn remove_member(
        &self,
        actor: &Actor,
        group_id: &str,
        user_id: &str,
    ) -> Result<(), CampusError> {
        const ACTION: &str = "remove member";

        require_hod(actor, "Only HOD can manage groups")?;
        let removed = self
            .db
            .groups
            .remove_member(group_id, user_id)
            .await
            .map_err(persistence(ACTION))?;
        match removed {
            0 => Err(CampusError::not_found("User is not a member of this group")),
            _ => Ok(()),
        }
    }

    /// Members of a group. HOD only.
    pub async fn members(&self, actor: &Actor, group_id: &str) -> Result<Vec<Member>, CampusError> {
        const ACTION: &str = "load members";

        require_hod(actor, "Only HOD can manage groups")?;
        self.stored_group(group_id, ACTION).await?;
        self.db
            .groups
            .members(group_id)
            .await
            .map_err(persistence(ACTION))?
            .into_iter()
            .map(|r| r.into_member())
            .collect::<Result<Vec<_>, _>>()
            .map_err(persistence(ACTION))
    }

    pub(super) async fn stored_group(
        &self,
        group_id: &str,
        action: &'static str,
    ) -> Result<Group, CampusError> {
        self.db
            .groups
            .get(group_id)
            .await
            .map_err(persistence(action))?
            .ok_or_else(|| CampusError::not_found("Group not found"))?
            .into_group()
            .map_err(persistence(action))
    }
}
