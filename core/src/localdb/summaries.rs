// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use sqlx::SqlitePool;

use crate::LectureSummary;
use crate::datetime::{DateWindow, format_date, parse_stable_date};
use crate::localdb::{decode_error, placeholders};

#[derive(Debug, Clone)]
pub struct Summaries {
    pool: SqlitePool,
}

impl Summaries {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the summary, or overwrites the one already written for the
    /// same slot and date.
    pub async fn upsert(&self, summary: &SummaryRecord) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO lecture_summaries (id, slot_id, date, content, notes, author_id, updated_at)
VALUES (?, ?, ?, ?, ?, ?, ?)
ON CONFLICT(slot_id, date) DO UPDATE SET
    content    = excluded.content,
    notes      = excluded.notes,
    author_id  = excluded.author_id,
    updated_at = excluded.updated_at;
";

        sqlx::query(SQL)
            .bind(&summary.id)
            .bind(&summary.slot_id)
            .bind(&summary.date)
            .bind(&summary.content)
            .bind(&summary.notes)
            .bind(&summary.author_id)
            .bind(&summary.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, slot_id: &str, date: Date) -> Result<Option<SummaryRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, slot_id, date, content, notes, author_id, updated_at
FROM lecture_summaries
WHERE slot_id = ? AND date = ?;
";

        sqlx::query_as(SQL)
            .bind(slot_id)
            .bind(format_date(date))
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<SummaryRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, slot_id, date, content, notes, author_id, updated_at
FROM lecture_summaries
WHERE id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Returns the number of summaries deleted.
    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM lecture_summaries WHERE id = ?;";

        let result = sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// `(slot id, date)` of every summary of the given slots inside the
    /// window, ordered by slot and date.
    pub async fn dates_in_window(
        &self,
        slot_ids: &[String],
        window: &DateWindow,
    ) -> Result<Vec<(String, Date)>, sqlx::Error> {
        if slot_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "\
SELECT slot_id, date
FROM lecture_summaries
WHERE slot_id IN ({}) AND date >= ? AND date <= ?
ORDER BY slot_id, date;
",
            placeholders(slot_ids.len())
        );

        let mut query = sqlx::query_as(&sql);
        for id in slot_ids {
            query = query.bind(id);
        }
        let rows: Vec<(String, String)> = query
            .bind(format_date(window.start))
            .bind(format_date(window.end))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(slot_id, date)| Ok((slot_id, parse_stable_date(&date)?)))
            .collect()
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SummaryRecord {
    pub id: String,
    pub slot_id: String,
    pub date: String,
    pub content: String,
    pub notes: Option<String>,
    pub author_id: String,
    pub updated_at: String,
}

impl SummaryRecord {
    pub fn into_summary(self) -> Result<LectureSummary, sqlx::Error> {
        let updated_at = self
            .updated_at
            .parse()
            .map_err(|e| decode_error(format!("invalid updated_at {:?}: {e}", self.updated_at)))?;
        Ok(LectureSummary {
            date: parse_stable_date(&self.date)?,
            id: self.id,
            slot_id: self.slot_id,
            content: self.content,
            notes: self.notes,
            author_id: self.author_id,
            updated_at,
        })
    }
}
