// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::campus::{Campus, new_id, now_stamp};
use crate::datetime::{format_date, parse_date};
use crate::error::persistence;
use crate::invalidate::ROUTE_LECTURE_SUMMARIES;
use crate::localdb::SummaryRecord;
use crate::{Actor, CampusError, LectureSummary, Slot, SummaryDraft};

impl Campus {
    /// Writes the summary of a slot on a date, replacing any earlier one.
    ///
    /// Only the faculty assigned to the slot or an HOD may write it.
    #[tracing::instrument(skip(self, actor, draft), fields(user = %actor.user_id))]
    pub async fn save_summary(
        &self,
        actor: &Actor,
        slot_id: &str,
        date: &str,
        draft: &SummaryDraft,
    ) -> Result<LectureSummary, CampusError> {
        const ACTION: &str = "save summary";

        let date = parse_date(date).ok_or_else(|| CampusError::validation("Invalid date"))?;
        let slot = self.stored_slot(slot_id, ACTION).await?;
        if !is_slot_staff(actor, &slot) {
            return Err(CampusError::forbidden(
                "Only the assigned faculty can write this summary",
            ));
        }
        let (content, notes) = draft.validate()?;

        let record = SummaryRecord {
            id: new_id(),
            slot_id: slot_id.to_string(),
            date: format_date(date),
            content,
            notes,
            author_id: actor.user_id.clone(),
            updated_at: now_stamp(),
        };
        self.db
            .summaries
            .upsert(&record)
            .await
            .map_err(persistence(ACTION))?;
        tracing::info!(slot_id, date = %date, "lecture summary saved");

        self.invalidate(ROUTE_LECTURE_SUMMARIES);
        self.db
            .summaries
            .get(slot_id, date)
            .await
            .map_err(persistence(ACTION))?
            .ok_or(CampusError::Persistence { action: ACTION })?
            .into_summary()
            .map_err(persistence(ACTION))
    }

    /// The summary of a slot on a date, if one was written.
    ///
    /// Readable by the slot's faculty, an HOD, and members of the groups the
    /// slot's timetable is shared with.
    pub async fn summary(
        &self,
        actor: &Actor,
        slot_id: &str,
        date: &str,
    ) -> Result<Option<LectureSummary>, CampusError> {
        const ACTION: &str = "load summary";

        let date = parse_date(date).ok_or_else(|| CampusError::validation("Invalid date"))?;
        let slot = self.stored_slot(slot_id, ACTION).await?;
        if !is_slot_staff(actor, &slot) {
            let visible = self
                .db
                .timetables
                .is_visible_to(slot_id, &actor.user_id)
                .await
                .map_err(persistence(ACTION))?;
            if !visible {
                return Err(CampusError::forbidden(
                    "You don't have permission to view this summary",
                ));
            }
        }

        self.db
            .summaries
            .get(slot_id, date)
            .await
            .map_err(persistence(ACTION))?
            .map(|r| r.into_summary())
            .transpose()
            .map_err(persistence(ACTION))
    }

    /// Deletes a summary. Only its author or an HOD may delete it.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn delete_summary(&self, actor: &Actor, summary_id: &str) -> Result<(), CampusError> {
        const ACTION: &str = "delete summary";

        let record = self
            .db
            .summaries
            .get_by_id(summary_id)
            .await
            .map_err(persistence(ACTION))?
            .ok_or_else(|| CampusError::not_found("Summary not found"))?;
        if !actor.is_hod() && record.author_id != actor.user_id {
            return Err(CampusError::forbidden(
                "Only the author can delete this summary",
            ));
        }

        self.db
            .summaries
            .delete(summary_id)
            .await
            .map_err(persistence(ACTION))?;

        self.invalidate(ROUTE_LECTURE_SUMMARIES);
        Ok(())
    }
}

fn is_slot_staff(actor: &Actor, slot: &Slot) -> bool {
    actor.is_hod() || slot.faculty_id.as_deref() == Some(actor.user_id.as_str())
}
