// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::error::persistence;
use crate::localdb::decode_error;
use crate::{CampusError, PreferenceSource, Preferences};

/// Preferences saved in the database.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    pool: SqlitePool,
}

impl PreferenceStore {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) async fn get(&self, user_id: &str) -> Result<Option<Preferences>, sqlx::Error> {
        const SQL: &str = "\
SELECT enabled_slot_type_ids, selected_batch_ids
FROM preferences
WHERE user_id = ?;
";

        let row: Option<(Option<String>, Option<String>)> = sqlx::query_as(SQL)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(slot_types, batches)| {
            Ok(Preferences {
                enabled_slot_type_ids: decode_ids(slot_types.as_deref())?,
                selected_batch_ids: decode_ids(batches.as_deref())?,
            })
        })
        .transpose()
    }

    pub(crate) async fn upsert(&self, user_id: &str, prefs: &Preferences) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO preferences (user_id, enabled_slot_type_ids, selected_batch_ids)
VALUES (?, ?, ?)
ON CONFLICT(user_id) DO UPDATE SET
    enabled_slot_type_ids = excluded.enabled_slot_type_ids,
    selected_batch_ids    = excluded.selected_batch_ids;
";

        sqlx::query(SQL)
            .bind(user_id)
            .bind(encode_ids(prefs.enabled_slot_type_ids.as_deref())?)
            .bind(encode_ids(prefs.selected_batch_ids.as_deref())?)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl PreferenceSource for PreferenceStore {
    async fn active_preferences(&self, user_id: &str) -> Result<Preferences, CampusError> {
        let prefs = self
            .get(user_id)
            .await
            .map_err(persistence("load preferences"))?;
        Ok(prefs.unwrap_or_default())
    }
}

fn encode_ids(ids: Option<&[String]>) -> Result<Option<String>, sqlx::Error> {
    ids.map(|ids| serde_json::to_string(ids).map_err(|e| sqlx::Error::Encode(e.into())))
        .transpose()
}

fn decode_ids(text: Option<&str>) -> Result<Option<Vec<String>>, sqlx::Error> {
    text.map(|text| {
        serde_json::from_str(text).map_err(|e| decode_error(format!("invalid id list: {e}")))
    })
    .transpose()
}
