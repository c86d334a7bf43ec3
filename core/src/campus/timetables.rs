// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::campus::{Campus, new_id, now_stamp, require_hod};
use crate::error::{conflict_or_persistence, persistence};
use crate::{
    Actor, CampusError, CatalogDraft, CatalogEntry, CatalogKind, Role, Slot, SlotDraft, Timetable,
};

const MAX_TIMETABLE_NAME_LEN: usize = 100;

impl Campus {
    /// Adds an entry to the slot catalog. HOD only.
    #[tracing::instrument(skip(self, actor, draft), fields(user = %actor.user_id))]
    pub async fn create_catalog_entry(
        &self,
        actor: &Actor,
        kind: CatalogKind,
        draft: &CatalogDraft,
    ) -> Result<CatalogEntry, CampusError> {
        const ACTION: &str = "create catalog entry";

        require_hod(actor, "Only HOD can manage timetables")?;
        let (name, short_name) = draft.validate(kind)?;

        let id = new_id();
        self.db
            .catalog
            .insert(kind, &id, &name, short_name.as_deref())
            .await
            .map_err(conflict_or_persistence(
                ACTION,
                format!("{kind} name already exists"),
            ))?;
        tracing::info!(%kind, %id, "catalog entry created");

        Ok(CatalogEntry {
            id,
            name,
            short_name,
        })
    }

    /// Entries of one catalog kind, ordered by name.
    pub async fn catalog(&self, kind: CatalogKind) -> Result<Vec<CatalogEntry>, CampusError> {
        self.db
            .catalog
            .list(kind)
            .await
            .map_err(persistence("load catalog"))
    }

    /// Creates an empty timetable. HOD only.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn create_timetable(
        &self,
        actor: &Actor,
        name: &str,
    ) -> Result<Timetable, CampusError> {
        const ACTION: &str = "create timetable";

        require_hod(actor, "Only HOD can manage timetables")?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CampusError::validation("Timetable name is required"));
        }
        if name.chars().count() > MAX_TIMETABLE_NAME_LEN {
            return Err(CampusError::validation(format!(
                "Timetable name must be {MAX_TIMETABLE_NAME_LEN} characters or less"
            )));
        }

        let id = new_id();
        self.db
            .timetables
            .insert(&id, name, &now_stamp())
            .await
            .map_err(persistence(ACTION))?;
        tracing::info!(timetable_id = %id, "timetable created");

        Ok(Timetable {
            id,
            name: name.to_string(),
            slot_count: 0,
        })
    }

    /// All timetables, ordered by name.
    pub async fn timetables(&self) -> Result<Vec<Timetable>, CampusError> {
        self.db
            .timetables
            .list()
            .await
            .map_err(persistence("load timetables"))
    }

    /// Slots of a timetable, by day and start time.
    pub async fn timetable_slots(&self, timetable_id: &str) -> Result<Vec<Slot>, CampusError> {
        const ACTION: &str = "load slots";

        self.stored_timetable(timetable_id, ACTION).await?;
        self.db
            .timetables
            .slots_of(timetable_id)
            .await
            .map_err(persistence(ACTION))?
            .into_iter()
            .map(|r| r.into_slot())
            .collect::<Result<Vec<_>, _>>()
            .map_err(persistence(ACTION))
    }

    /// Adds a slot to a timetable. HOD only.
    ///
    /// Every reference must exist in the catalog, and the assigned faculty
    /// must be a faculty member or an HOD.
    #[tracing::instrument(skip(self, actor, draft), fields(user = %actor.user_id))]
    pub async fn add_slot(
        &self,
        actor: &Actor,
        timetable_id: &str,
        draft: &SlotDraft,
    ) -> Result<Slot, CampusError> {
        const ACTION: &str = "add slot";

        require_hod(actor, "Only HOD can manage timetables")?;
        self.stored_timetable(timetable_id, ACTION).await?;
        let slot = draft.validate()?;

        let references = [
            (CatalogKind::SlotType, Some(&slot.slot_type_id)),
            (CatalogKind::Subject, slot.subject_id.as_ref()),
            (CatalogKind::Room, slot.room_id.as_ref()),
            (CatalogKind::Batch, slot.batch_id.as_ref()),
        ];
        for (kind, id) in references {
            let Some(id) = id else { continue };
            let entry = self
                .db
                .catalog
                .get(kind, id)
                .await
                .map_err(persistence(ACTION))?;
            if entry.is_none() {
                return Err(CampusError::validation(format!("{kind} not found")));
            }
        }

        if let Some(faculty_id) = &slot.faculty_id {
            let role = self
                .db
                .users
                .role_of(faculty_id)
                .await
                .map_err(persistence(ACTION))?;
            match role {
                Some(Role::Faculty | Role::Hod) => {}
                Some(Role::Student) => {
                    return Err(CampusError::validation(
                        "Only faculty can be assigned to a slot",
                    ));
                }
                None => return Err(CampusError::validation("Faculty not found")),
            }
        }

        let id = new_id();
        self.db
            .timetables
            .insert_slot(&id, timetable_id, &slot)
            .await
            .map_err(persistence(ACTION))?;
        tracing::info!(slot_id = %id, timetable_id, "slot added");

        self.stored_slot(&id, ACTION).await
    }

    /// Deletes a slot with its lecture summaries. HOD only.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn delete_slot(&self, actor: &Actor, slot_id: &str) -> Result<(), CampusError> {
        const ACTION: &str = "delete slot";

        require_hod(actor, "Only HOD can manage timetables")?;
        let deleted = self
            .db
            .timetables
            .delete_slot(slot_id)
            .await
            .map_err(persistence(ACTION))?;
        match deleted {
            0 => Err(CampusError::not_found("Slot not found")),
            _ => Ok(()),
        }
    }

    /// Shares a timetable with a group. HOD only.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn assign_timetable(
        &self,
        actor: &Actor,
        timetable_id: &str,
        group_id: &str,
    ) -> Result<(), CampusError> {
        const ACTION: &str = "assign timetable";

        require_hod(actor, "Only HOD can manage timetables")?;
        self.stored_timetable(timetable_id, ACTION).await?;
        self.stored_group(group_id, ACTION).await?;

        self.db
            .timetables
            .assign_group(timetable_id, group_id)
            .await
            .map_err(conflict_or_persistence(
                ACTION,
                "This group is already assigned to this timetable",
            ))?;
        tracing::info!(timetable_id, group_id, "timetable assigned");
        Ok(())
    }

    pub(super) async fn stored_slot(
        &self,
        slot_id: &str,
        action: &'static str,
    ) -> Result<Slot, CampusError> {
        self.db
            .timetables
            .get_slot(slot_id)
            .await
            .map_err(persistence(action))?
            .ok_or_else(|| CampusError::not_found("Slot not found"))?
            .into_slot()
            .map_err(persistence(action))
    }

    async fn stored_timetable(
        &self,
        timetable_id: &str,
        action: &'static str,
    ) -> Result<Timetable, CampusError> {
        self.db
            .timetables
            .get(timetable_id)
            .await
            .map_err(persistence(action))?
            .ok_or_else(|| CampusError::not_found("Timetable not found"))
    }
}
