// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::CampusError;
use crate::event::normalize_text;

/// Maximum length of a summary's content, in characters.
pub const MAX_SUMMARY_LEN: usize = 10_000;

/// A faculty note on what was covered in one slot on one date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LectureSummary {
    /// The unique identifier.
    pub id: String,

    /// The slot the summary belongs to.
    pub slot_id: String,

    /// The date of the lecture.
    pub date: Date,

    /// What was covered.
    pub content: String,

    /// Additional notes.
    pub notes: Option<String>,

    /// The author's user id.
    pub author_id: String,

    /// Last write.
    pub updated_at: jiff::Timestamp,
}

/// Content of a lecture summary.
#[derive(Debug, Clone, Default)]
pub struct SummaryDraft {
    /// What was covered, required.
    pub content: String,

    /// Additional notes.
    pub notes: Option<String>,
}

impl SummaryDraft {
    pub(crate) fn validate(&self) -> Result<(String, Option<String>), CampusError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(CampusError::validation("Summary content is required"));
        }
        if content.chars().count() > MAX_SUMMARY_LEN {
            return Err(CampusError::validation(format!(
                "Summary must be {MAX_SUMMARY_LEN} characters or less"
            )));
        }
        Ok((content.to_string(), normalize_text(self.notes.as_deref())))
    }
}
