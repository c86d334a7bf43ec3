// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::datetime::{DateWindow, format_date, parse_stable_date, parse_stable_date_opt};
use crate::{CalendarEvent, RemovalPlan, ValidEvent};

const SELECT_EVENTS: &str = "\
SELECT e.id, e.calendar_id, e.title, e.description, e.start_date, e.end_date,
       e.event_type_id, t.name AS event_type_name
FROM calendar_events e
JOIN event_types t ON t.id = e.event_type_id
";

#[derive(Debug, Clone)]
pub struct Events {
    pool: SqlitePool,
}

impl Events {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        id: &str,
        calendar_id: &str,
        event: &ValidEvent,
    ) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO calendar_events (id, calendar_id, title, description, start_date, end_date, event_type_id)
VALUES (?, ?, ?, ?, ?, ?, ?);
";

        sqlx::query(SQL)
            .bind(id)
            .bind(calendar_id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(format_date(event.start_date))
            .bind(event.end_date.map(format_date))
            .bind(&event.event_type_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Returns the number of events updated.
    pub async fn update(&self, id: &str, event: &ValidEvent) -> Result<u64, sqlx::Error> {
        const SQL: &str = "\
UPDATE calendar_events
SET title = ?, description = ?, start_date = ?, end_date = ?, event_type_id = ?
WHERE id = ?;
";

        let result = sqlx::query(SQL)
            .bind(&event.title)
            .bind(&event.description)
            .bind(format_date(event.start_date))
            .bind(event.end_date.map(format_date))
            .bind(&event.event_type_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Returns the number of events deleted.
    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM calendar_events WHERE id = ?;";

        let result = sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn get(&self, id: &str) -> Result<Option<EventRecord>, sqlx::Error> {
        let sql = format!("{SELECT_EVENTS}WHERE e.id = ?;");

        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Events of a calendar, ordered by start date, then id.
    pub async fn list_for_calendar(&self, calendar_id: &str) -> Result<Vec<EventRecord>, sqlx::Error> {
        let sql = format!("{SELECT_EVENTS}WHERE e.calendar_id = ? ORDER BY e.start_date, e.id;");

        sqlx::query_as(&sql)
            .bind(calendar_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Events overlapping the window.
    ///
    /// With a `member`, only events of calendars assigned to one of the
    /// member's groups are returned.
    pub async fn list_in_window(
        &self,
        window: &DateWindow,
        member: Option<&str>,
    ) -> Result<Vec<EventRecord>, sqlx::Error> {
        let mut sql = format!(
            "{SELECT_EVENTS}WHERE e.start_date <= ? AND COALESCE(e.end_date, e.start_date) >= ?\n"
        );
        if member.is_some() {
            sql += "\
AND EXISTS (
    SELECT 1
    FROM calendar_groups cg
    JOIN group_memberships m ON m.group_id = cg.group_id
    WHERE cg.calendar_id = e.calendar_id AND m.user_id = ?
)
";
        }
        sql += "ORDER BY e.start_date, e.id;";

        let mut query = sqlx::query_as(&sql)
            .bind(format_date(window.end))
            .bind(format_date(window.start));
        if let Some(user_id) = member {
            query = query.bind(user_id);
        }
        query.fetch_all(&self.pool).await
    }

    pub async fn count_by_type(&self, event_type_id: &str) -> Result<i64, sqlx::Error> {
        const SQL: &str = "SELECT COUNT(*) FROM calendar_events WHERE event_type_id = ?;";

        sqlx::query_scalar(SQL)
            .bind(event_type_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Applies a removal plan to the event in a single transaction.
    ///
    /// `new_id` names the second half of a split and is unused otherwise.
    pub async fn apply_removal(
        &self,
        event: &CalendarEvent,
        plan: RemovalPlan,
        new_id: &str,
    ) -> Result<(), sqlx::Error> {
        const DELETE: &str = "DELETE FROM calendar_events WHERE id = ?;";
        const RESCHEDULE: &str = "\
UPDATE calendar_events
SET start_date = ?, end_date = ?
WHERE id = ?;
";
        const SHRINK: &str = "UPDATE calendar_events SET end_date = ? WHERE id = ?;";
        const INSERT_COPY: &str = "\
INSERT INTO calendar_events (id, calendar_id, title, description, start_date, end_date, event_type_id)
SELECT ?, calendar_id, title, description, ?, ?, event_type_id
FROM calendar_events
WHERE id = ?;
";

        let mut tx = self.pool.begin().await?;
        match plan {
            RemovalPlan::Delete => {
                sqlx::query(DELETE)
                    .bind(&event.id)
                    .execute(&mut *tx)
                    .await?;
            }

            RemovalPlan::Reschedule {
                start_date,
                end_date,
            } => {
                sqlx::query(RESCHEDULE)
                    .bind(format_date(start_date))
                    .bind(end_date.map(format_date))
                    .bind(&event.id)
                    .execute(&mut *tx)
                    .await?;
            }

            RemovalPlan::Split {
                first_end,
                second_start,
                second_end,
            } => {
                sqlx::query(SHRINK)
                    .bind(first_end.map(format_date))
                    .bind(&event.id)
                    .execute(&mut *tx)
                    .await?;
                sqlx::query(INSERT_COPY)
                    .bind(new_id)
                    .bind(format_date(second_start))
                    .bind(second_end.map(format_date))
                    .bind(&event.id)
                    .execute(&mut *tx)
                    .await?;
            }
        }
        tx.commit().await
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventRecord {
    id: String,
    calendar_id: String,
    title: String,
    description: Option<String>,
    start_date: String,
    end_date: Option<String>,
    event_type_id: String,
    event_type_name: String,
}

impl EventRecord {
    pub fn into_event(self) -> Result<CalendarEvent, sqlx::Error> {
        Ok(CalendarEvent {
            start_date: parse_stable_date(&self.start_date)?,
            end_date: parse_stable_date_opt(self.end_date.as_deref())?,
            id: self.id,
            calendar_id: self.calendar_id,
            title: self.title,
            description: self.description,
            event_type_id: self.event_type_id,
            event_type_name: self.event_type_name,
        })
    }
}
