// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::campus::{Campus, new_id, require_hod};
use crate::error::{conflict_or_persistence, persistence};
use crate::invalidate::ROUTE_EVENT_TYPES;
use crate::{Actor, CampusError, EventType, EventTypeDraft};

const DUPLICATE_NAME: &str = "Event type name already exists";

impl Campus {
    /// Every event type, ordered by name.
    pub async fn event_types(&self) -> Result<Vec<EventType>, CampusError> {
        self.db
            .event_types
            .list()
            .await
            .map_err(persistence("load event types"))
    }

    /// Creates an event type. HOD only.
    #[tracing::instrument(skip(self, actor, draft), fields(user = %actor.user_id))]
    pub async fn create_event_type(
        &self,
        actor: &Actor,
        draft: &EventTypeDraft,
    ) -> Result<EventType, CampusError> {
        const ACTION: &str = "create event type";

        require_hod(actor, "Only HOD can create event types")?;
        let (name, description) = draft.validate()?;

        let id = new_id();
        self.db
            .event_types
            .insert(&id, &name, description.as_deref())
            .await
            .map_err(conflict_or_persistence(ACTION, DUPLICATE_NAME))?;
        tracing::info!(event_type_id = %id, %name, "event type created");

        self.invalidate(ROUTE_EVENT_TYPES);
        Ok(EventType {
            id,
            name,
            description,
        })
    }

    /// Renames an event type or changes its description. HOD only.
    #[tracing::instrument(skip(self, actor, draft), fields(user = %actor.user_id))]
    pub async fn update_event_type(
        &self,
        actor: &Actor,
        event_type_id: &str,
        draft: &EventTypeDraft,
    ) -> Result<EventType, CampusError> {
        const ACTION: &str = "update event type";

        require_hod(actor, "Only HOD can update event types")?;
        let (name, description) = draft.validate()?;

        let updated = self
            .db
            .event_types
            .update(event_type_id, &name, description.as_deref())
            .await
            .map_err(conflict_or_persistence(ACTION, DUPLICATE_NAME))?;
        if updated == 0 {
            return Err(CampusError::not_found("Event type not found"));
        }

        self.invalidate(ROUTE_EVENT_TYPES);
        Ok(EventType {
            id: event_type_id.to_string(),
            name,
            description,
        })
    }

    /// Deletes an event type no event refers to. HOD only.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn delete_event_type(
        &self,
        actor: &Actor,
        event_type_id: &str,
    ) -> Result<(), CampusError> {
        const ACTION: &str = "delete event type";

        require_hod(actor, "Only HOD can delete event types")?;

        let in_use = self
            .db
            .events
            .count_by_type(event_type_id)
            .await
            .map_err(persistence(ACTION))?;
        if in_use > 0 {
            return Err(CampusError::conflict(format!(
                "Cannot delete: {in_use} event(s) are using this type"
            )));
        }

        let deleted = self
            .db
            .event_types
            .delete(event_type_id)
            .await
            .map_err(persistence(ACTION))?;
        if deleted == 0 {
            return Err(CampusError::not_found("Event type not found"));
        }

        self.invalidate(ROUTE_EVENT_TYPES);
        Ok(())
    }
}
