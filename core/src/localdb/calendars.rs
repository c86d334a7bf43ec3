// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::localdb::decode_error;
use crate::permission::Grant;
use crate::{AssignedGroup, Calendar};

#[derive(Debug, Clone)]
pub struct Calendars {
    pool: SqlitePool,
}

impl Calendars {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, calendar: &CalendarRecord) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO calendars (id, name, description, created_by, created_at)
VALUES (?, ?, ?, ?, ?);
";

        sqlx::query(SQL)
            .bind(&calendar.id)
            .bind(&calendar.name)
            .bind(&calendar.description)
            .bind(&calendar.created_by)
            .bind(&calendar.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Returns the number of calendars updated.
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        const SQL: &str = "\
UPDATE calendars
SET name = ?, description = ?
WHERE id = ?;
";

        let result = sqlx::query(SQL)
            .bind(name)
            .bind(description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the calendar, its events and its group assignments.
    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM calendars WHERE id = ?;";

        let result = sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn get(&self, id: &str) -> Result<Option<CalendarRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, name, description, created_by, created_at
FROM calendars
WHERE id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Every calendar, newest first.
    pub async fn list_all(&self) -> Result<Vec<CalendarRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, name, description, created_by, created_at
FROM calendars
ORDER BY created_at DESC, rowid DESC;
";

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }

    /// Calendars assigned to a group the user is a member of, newest first.
    pub async fn list_for_member(&self, user_id: &str) -> Result<Vec<CalendarRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT c.id, c.name, c.description, c.created_by, c.created_at
FROM calendars c
WHERE EXISTS (
    SELECT 1
    FROM calendar_groups cg
    JOIN group_memberships m ON m.group_id = cg.group_id
    WHERE cg.calendar_id = c.id AND m.user_id = ?
)
ORDER BY c.created_at DESC, c.rowid DESC;
";

        sqlx::query_as(SQL)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Memberships of the user in groups assigned to the calendar.
    pub async fn grants(&self, user_id: &str, calendar_id: &str) -> Result<Vec<Grant>, sqlx::Error> {
        const SQL: &str = "\
SELECT m.role, g.default_role
FROM calendar_groups cg
JOIN campus_groups g ON g.id = cg.group_id
JOIN group_memberships m ON m.group_id = cg.group_id
WHERE cg.calendar_id = ? AND m.user_id = ?;
";

        let rows: Vec<(Option<String>, String)> = sqlx::query_as(SQL)
            .bind(calendar_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(explicit, group_default)| {
                Ok(Grant {
                    explicit: explicit
                        .map(|r| r.parse().map_err(decode_error))
                        .transpose()?,
                    group_default: group_default.parse().map_err(decode_error)?,
                })
            })
            .collect()
    }

    pub async fn is_assigned(&self, calendar_id: &str, group_id: &str) -> Result<bool, sqlx::Error> {
        const SQL: &str = "\
SELECT COUNT(*)
FROM calendar_groups
WHERE calendar_id = ? AND group_id = ?;
";

        let count: i64 = sqlx::query_scalar(SQL)
            .bind(calendar_id)
            .bind(group_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn assign_group(&self, calendar_id: &str, group_id: &str) -> Result<(), sqlx::Error> {
        const SQL: &str = "INSERT INTO calendar_groups (calendar_id, group_id) VALUES (?, ?);";

        sqlx::query(SQL)
            .bind(calendar_id)
            .bind(group_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Returns the number of assignments removed.
    pub async fn unassign_group(&self, calendar_id: &str, group_id: &str) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM calendar_groups WHERE calendar_id = ? AND group_id = ?;";

        let result = sqlx::query(SQL)
            .bind(calendar_id)
            .bind(group_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Groups assigned to the calendar, ordered by title.
    pub async fn groups_of(&self, calendar_id: &str) -> Result<Vec<AssignedGroup>, sqlx::Error> {
        const SQL: &str = "\
SELECT g.id, g.title, g.default_role
FROM calendar_groups cg
JOIN campus_groups g ON g.id = cg.group_id
WHERE cg.calendar_id = ?
ORDER BY g.title, g.id;
";

        let rows: Vec<(String, String, String)> = sqlx::query_as(SQL)
            .bind(calendar_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(id, title, default_role)| {
                Ok(AssignedGroup {
                    id,
                    title,
                    default_role: default_role.parse().map_err(decode_error)?,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CalendarRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: String,
}

impl CalendarRecord {
    pub fn into_calendar(self) -> Result<Calendar, sqlx::Error> {
        let created_at = self
            .created_at
            .parse()
            .map_err(|e| decode_error(format!("invalid created_at {:?}: {e}", self.created_at)))?;
        Ok(Calendar {
            id: self.id,
            name: self.name,
            description: self.description,
            created_by: self.created_by,
            created_at,
        })
    }
}
