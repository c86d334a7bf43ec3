// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::campus::{Campus, new_id, now_stamp, require_hod};
use crate::error::{conflict_or_persistence, persistence};
use crate::invalidate::ROUTE_CALENDARS;
use crate::localdb::CalendarRecord;
use crate::{Actor, Calendar, CalendarDetails, CalendarDraft, CampusError};

impl Campus {
    /// Calendars visible to the actor, newest first.
    ///
    /// An HOD sees every calendar, anyone else the calendars assigned to one
    /// of their groups.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn calendars(&self, actor: &Actor) -> Result<Vec<CalendarDetails>, CampusError> {
        const ACTION: &str = "load calendars";

        let records = match actor.is_hod() {
            true => self.db.calendars.list_all().await,
            false => self.db.calendars.list_for_member(&actor.user_id).await,
        }
        .map_err(persistence(ACTION))?;

        let mut calendars = Vec::with_capacity(records.len());
        for record in records {
            calendars.push(self.calendar_details(record, ACTION).await?);
        }
        Ok(calendars)
    }

    /// A single calendar with its events and groups.
    pub async fn calendar(
        &self,
        actor: &Actor,
        calendar_id: &str,
    ) -> Result<CalendarDetails, CampusError> {
        const ACTION: &str = "load calendar";

        let record = self.stored_calendar(calendar_id, ACTION).await?;
        if !self.actor_can_view(actor, calendar_id).await {
            return Err(CampusError::forbidden(
                "You don't have permission to view this calendar",
            ));
        }
        self.calendar_details(record, ACTION).await
    }

    /// Creates a calendar. HOD only.
    #[tracing::instrument(skip(self, actor, draft), fields(user = %actor.user_id))]
    pub async fn create_calendar(
        &self,
        actor: &Actor,
        draft: &CalendarDraft,
    ) -> Result<Calendar, CampusError> {
        const ACTION: &str = "create calendar";

        require_hod(actor, "Only HOD can create calendars")?;
        let (name, description) = draft.validate()?;

        let record = CalendarRecord {
            id: new_id(),
            name,
            description,
            created_by: actor.user_id.clone(),
            created_at: now_stamp(),
        };
        self.db
            .calendars
            .insert(&record)
            .await
            .map_err(persistence(ACTION))?;
        tracing::info!(calendar_id = %record.id, "calendar created");

        self.invalidate(ROUTE_CALENDARS);
        record.into_calendar().map_err(persistence(ACTION))
    }

    /// Renames a calendar or changes its description.
    #[tracing::instrument(skip(self, actor, draft), fields(user = %actor.user_id))]
    pub async fn update_calendar(
        &self,
        actor: &Actor,
        calendar_id: &str,
        draft: &CalendarDraft,
    ) -> Result<Calendar, CampusError> {
        const ACTION: &str = "update calendar";

        self.stored_calendar(calendar_id, ACTION).await?;
        self.ensure_can_edit(actor, calendar_id).await?;
        let (name, description) = draft.validate()?;

        self.db
            .calendars
            .update(calendar_id, &name, description.as_deref())
            .await
            .map_err(persistence(ACTION))?;

        self.invalidate(ROUTE_CALENDARS);
        let record = self.stored_calendar(calendar_id, ACTION).await?;
        record.into_calendar().map_err(persistence(ACTION))
    }

    /// Deletes a calendar with all of its events. HOD only.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn delete_calendar(&self, actor: &Actor, calendar_id: &str) -> Result<(), CampusError> {
        const ACTION: &str = "delete calendar";

        require_hod(actor, "Only HOD can delete calendars")?;
        let deleted = self
            .db
            .calendars
            .delete(calendar_id)
            .await
            .map_err(persistence(ACTION))?;
        if deleted == 0 {
            return Err(CampusError::not_found("Calendar not found"));
        }

        self.invalidate(ROUTE_CALENDARS);
        Ok(())
    }

    /// Shares a calendar with a group. HOD only.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn assign_group(
        &self,
        actor: &Actor,
        calendar_id: &str,
        group_id: &str,
    ) -> Result<(), CampusError> {
        const ACTION: &str = "assign group";
        const DUPLICATE: &str = "This group is already assigned to this calendar";

        require_hod(actor, "Only HOD can assign groups to calendars")?;
        self.stored_calendar(calendar_id, ACTION).await?;
        self.stored_group(group_id, ACTION).await?;

        let assigned = self
            .db
            .calendars
            .is_assigned(calendar_id, group_id)
            .await
            .map_err(persistence(ACTION))?;
        if assigned {
            return Err(CampusError::conflict(DUPLICATE));
        }

        self.db
            .calendars
            .assign_group(calendar_id, group_id)
            .await
            .map_err(conflict_or_persistence(ACTION, DUPLICATE))?;

        self.invalidate(ROUTE_CALENDARS);
        Ok(())
    }

    /// Stops sharing a calendar with a group. HOD only.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn unassign_group(
        &self,
        actor: &Actor,
        calendar_id: &str,
        group_id: &str,
    ) -> Result<(), CampusError> {
        const ACTION: &str = "remove group";

        require_hod(actor, "Only HOD can remove groups from calendars")?;
        let removed = self
            .db
            .calendars
            .unassign_group(calendar_id, group_id)
            .await
            .map_err(persistence(ACTION))?;
        if removed == 0 {
            return Err(CampusError::not_found(
                "This group is not assigned to this calendar",
            ));
        }

        self.invalidate(ROUTE_CALENDARS);
        Ok(())
    }

    /// Whether the actor may edit the calendar, for showing edit controls.
    pub async fn can_edit_calendar(&self, actor: &Actor, calendar_id: &str) -> bool {
        self.actor_can_edit(actor, calendar_id).await
    }

    async fn stored_calendar(
        &self,
        calendar_id: &str,
        action: &'static str,
    ) -> Result<CalendarRecord, CampusError> {
        self.db
            .calendars
            .get(calendar_id)
            .await
            .map_err(persistence(action))?
            .ok_or_else(|| CampusError::not_found("Calendar not found"))
    }

    async fn calendar_details(
        &self,
        record: CalendarRecord,
        action: &'static str,
    ) -> Result<CalendarDetails, CampusError> {
        let events = self
            .db
            .events
            .list_for_calendar(&record.id)
            .await
            .map_err(persistence(action))?
            .into_iter()
            .map(|r| r.into_event())
            .collect::<Result<Vec<_>, _>>()
            .map_err(persistence(action))?;

        let groups = self
            .db
            .calendars
            .groups_of(&record.id)
            .await
            .map_err(persistence(action))?;

        Ok(CalendarDetails {
            calendar: record.into_calendar().map_err(persistence(action))?,
            events,
            groups,
        })
    }
}
