// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::CampusError;
use crate::event::normalize_text;

/// Maximum length of an event type name, in characters.
pub const MAX_EVENT_TYPE_NAME_LEN: usize = 50;

/// A classification shared by events of every calendar, e.g. Holiday or Exam.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EventType {
    /// The unique identifier.
    pub id: String,

    /// Unique name.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,
}

/// Draft for an event type.
#[derive(Debug, Clone, Default)]
pub struct EventTypeDraft {
    /// Name, trimmed before validation.
    pub name: String,

    /// Optional description; blank means none.
    pub description: Option<String>,
}

impl EventTypeDraft {
    pub(crate) fn validate(&self) -> Result<(String, Option<String>), CampusError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CampusError::validation("Event type name cannot be empty"));
        }
        if name.chars().count() > MAX_EVENT_TYPE_NAME_LEN {
            return Err(CampusError::validation(format!(
                "Event type name must be {MAX_EVENT_TYPE_NAME_LEN} characters or less"
            )));
        }
        Ok((
            name.to_string(),
            normalize_text(self.description.as_deref()),
        ))
    }
}
