// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::EventType;

#[derive(Debug, Clone)]
pub struct EventTypes {
    pool: SqlitePool,
}

impl EventTypes {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        const SQL: &str = "INSERT INTO event_types (id, name, description) VALUES (?, ?, ?);";

        sqlx::query(SQL)
            .bind(id)
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Returns the number of event types updated.
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        const SQL: &str = "UPDATE event_types SET name = ?, description = ? WHERE id = ?;";

        let result = sqlx::query(SQL)
            .bind(name)
            .bind(description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Returns the number of event types deleted.
    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM event_types WHERE id = ?;";

        let result = sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn get(&self, id: &str) -> Result<Option<EventType>, sqlx::Error> {
        const SQL: &str = "SELECT id, name, description FROM event_types WHERE id = ?;";

        let record: Option<EventTypeRecord> = sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record.map(Into::into))
    }

    /// Every event type, ordered by name.
    pub async fn list(&self) -> Result<Vec<EventType>, sqlx::Error> {
        const SQL: &str = "SELECT id, name, description FROM event_types ORDER BY name, id;";

        let records: Vec<EventTypeRecord> = sqlx::query_as(SQL).fetch_all(&self.pool).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EventTypeRecord {
    id: String,
    name: String,
    description: Option<String>,
}

impl From<EventTypeRecord> for EventType {
    fn from(record: EventTypeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
        }
    }
}
