// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::campus::{Campus, new_id};
use crate::datetime::{format_date, parse_date};
use crate::error::persistence;
use crate::invalidate::ROUTE_CALENDARS;
use crate::{Actor, CalendarEvent, CampusError, EventDraft, RemovalPlan, ValidEvent};

impl Campus {
    /// Adds an event to a calendar the actor can edit.
    #[tracing::instrument(skip(self, actor, draft), fields(user = %actor.user_id))]
    pub async fn add_event(
        &self,
        actor: &Actor,
        calendar_id: &str,
        draft: &EventDraft,
    ) -> Result<CalendarEvent, CampusError> {
        const ACTION: &str = "add event";

        let calendar = self
            .db
            .calendars
            .get(calendar_id)
            .await
            .map_err(persistence(ACTION))?;
        if calendar.is_none() {
            return Err(CampusError::not_found("Calendar not found"));
        }
        self.ensure_can_edit(actor, calendar_id).await?;

        let event = draft.validate()?;
        self.ensure_event_type(&event, ACTION).await?;

        let id = new_id();
        self.db
            .events
            .insert(&id, calendar_id, &event)
            .await
            .map_err(persistence(ACTION))?;
        tracing::info!(event_id = %id, calendar_id, "event added");

        self.invalidate(ROUTE_CALENDARS);
        self.stored_event(&id, ACTION).await
    }

    /// Replaces the fields of an event.
    ///
    /// Permission is checked against the calendar the event belongs to.
    #[tracing::instrument(skip(self, actor, draft), fields(user = %actor.user_id))]
    pub async fn update_event(
        &self,
        actor: &Actor,
        event_id: &str,
        draft: &EventDraft,
    ) -> Result<CalendarEvent, CampusError> {
        const ACTION: &str = "update event";

        let existing = self.stored_event(event_id, ACTION).await?;
        self.ensure_can_edit(actor, &existing.calendar_id).await?;

        let event = draft.validate()?;
        self.ensure_event_type(&event, ACTION).await?;

        let updated = self
            .db
            .events
            .update(event_id, &event)
            .await
            .map_err(persistence(ACTION))?;
        if updated == 0 {
            return Err(CampusError::not_found("Event not found"));
        }

        self.invalidate(ROUTE_CALENDARS);
        self.stored_event(event_id, ACTION).await
    }

    /// Deletes an event.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn delete_event(&self, actor: &Actor, event_id: &str) -> Result<(), CampusError> {
        const ACTION: &str = "delete event";

        let existing = self.stored_event(event_id, ACTION).await?;
        self.ensure_can_edit(actor, &existing.calendar_id).await?;

        let deleted = self
            .db
            .events
            .delete(event_id)
            .await
            .map_err(persistence(ACTION))?;
        if deleted == 0 {
            return Err(CampusError::not_found("Event not found"));
        }

        self.invalidate(ROUTE_CALENDARS);
        Ok(())
    }

    /// Removes a single date from an event.
    ///
    /// A single-day event is deleted, removing the first or last day shrinks
    /// the event, and removing a day in the middle splits it in two. Returns
    /// what is left of the event, ordered by start date.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn remove_event_from_date(
        &self,
        actor: &Actor,
        event_id: &str,
        date: &str,
    ) -> Result<Vec<CalendarEvent>, CampusError> {
        const ACTION: &str = "remove event date";

        let target = parse_date(date).ok_or_else(|| CampusError::validation("Invalid date"))?;

        let event = self.stored_event(event_id, ACTION).await?;
        self.ensure_can_edit(actor, &event.calendar_id).await?;

        let plan = RemovalPlan::compute(event.start_date, event.end_date, target)
            .ok_or_else(|| {
                CampusError::not_found(format!(
                    "Event does not occur on {}",
                    format_date(target)
                ))
            })?;

        let new_id = new_id();
        self.db
            .events
            .apply_removal(&event, plan, &new_id)
            .await
            .map_err(persistence(ACTION))?;
        tracing::info!(event_id, date = %target, ?plan, "date removed from event");

        self.invalidate(ROUTE_CALENDARS);
        let remaining = match plan {
            RemovalPlan::Delete => Vec::new(),
            RemovalPlan::Reschedule { .. } => vec![self.stored_event(event_id, ACTION).await?],
            RemovalPlan::Split { .. } => vec![
                self.stored_event(event_id, ACTION).await?,
                self.stored_event(&new_id, ACTION).await?,
            ],
        };
        Ok(remaining)
    }

    /// An event of a calendar the actor can view.
    pub async fn event(&self, actor: &Actor, event_id: &str) -> Result<CalendarEvent, CampusError> {
        let event = self.stored_event(event_id, "load event").await?;
        match self.actor_can_view(actor, &event.calendar_id).await {
            true => Ok(event),
            false => Err(CampusError::forbidden(
                "You don't have permission to view this event",
            )),
        }
    }

    /// Fetches an event, failing with `NotFound` if it does not exist.
    pub(crate) async fn stored_event(
        &self,
        event_id: &str,
        action: &'static str,
    ) -> Result<CalendarEvent, CampusError> {
        let record = self
            .db
            .events
            .get(event_id)
            .await
            .map_err(persistence(action))?
            .ok_or_else(|| CampusError::not_found("Event not found"))?;
        record.into_event().map_err(persistence(action))
    }

    async fn ensure_event_type(
        &self,
        event: &ValidEvent,
        action: &'static str,
    ) -> Result<(), CampusError> {
        let found = self
            .db
            .event_types
            .get(&event.event_type_id)
            .await
            .map_err(persistence(action))?;
        match found {
            Some(_) => Ok(()),
            None => Err(CampusError::validation("Event type not found")),
        }
    }
}
