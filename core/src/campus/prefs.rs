// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::campus::Campus;
use crate::error::persistence;
use crate::{Actor, CampusError, CatalogKind, Preferences, Role};

impl Campus {
    /// The actor's schedule preferences, defaults if none were saved.
    pub async fn preferences(&self, actor: &Actor) -> Result<Preferences, CampusError> {
        self.preferences.active_preferences(&actor.user_id).await
    }

    /// Saves the actor's schedule preferences. Students only.
    #[tracing::instrument(skip(self, actor, prefs), fields(user = %actor.user_id))]
    pub async fn set_preferences(
        &self,
        actor: &Actor,
        prefs: &Preferences,
    ) -> Result<Preferences, CampusError> {
        const ACTION: &str = "save preferences";

        if actor.role != Role::Student {
            return Err(CampusError::forbidden(
                "Only students can set schedule preferences",
            ));
        }

        let filters = [
            (CatalogKind::SlotType, &prefs.enabled_slot_type_ids),
            (CatalogKind::Batch, &prefs.selected_batch_ids),
        ];
        for (kind, ids) in filters {
            for id in ids.iter().flatten() {
                let entry = self
                    .db
                    .catalog
                    .get(kind, id)
                    .await
                    .map_err(persistence(ACTION))?;
                if entry.is_none() {
                    return Err(CampusError::validation(format!("{kind} not found: {id}")));
                }
            }
        }

        self.db
            .preferences
            .upsert(&actor.user_id, prefs)
            .await
            .map_err(persistence(ACTION))?;
        tracing::info!("preferences saved");
        Ok(prefs.clone())
    }
}
