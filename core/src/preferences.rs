// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Debug;

use crate::CampusError;

/// A student's filters for the weekly schedule.
///
/// `None` means "no restriction" for that dimension.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Preferences {
    /// Slot types to show.
    #[serde(default)]
    pub enabled_slot_type_ids: Option<Vec<String>>,

    /// Batches to show. Slots without a batch are always shown.
    #[serde(default)]
    pub selected_batch_ids: Option<Vec<String>>,
}

impl Preferences {
    /// Whether a slot with this type and batch passes the filters.
    pub fn allows(&self, slot_type_id: &str, batch_id: Option<&str>) -> bool {
        let type_enabled = self
            .enabled_slot_type_ids
            .as_ref()
            .is_none_or(|types| types.iter().any(|t| t == slot_type_id));

        let batch_selected = match (&self.selected_batch_ids, batch_id) {
            (Some(batches), Some(batch)) => batches.iter().any(|b| b == batch),
            _ => true,
        };

        type_enabled && batch_selected
    }
}

/// Supplies the active preferences of a user.
#[async_trait::async_trait]
pub trait PreferenceSource: Debug + Send + Sync {
    /// Preferences for `user_id`; defaults when none were saved.
    async fn active_preferences(&self, user_id: &str) -> Result<Preferences, CampusError>;
}
