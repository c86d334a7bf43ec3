// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::{CatalogEntry, CatalogKind};

/// Slot types, batches, subjects and rooms.
#[derive(Debug, Clone)]
pub struct Catalog {
    pool: SqlitePool,
}

impl Catalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        kind: CatalogKind,
        id: &str,
        name: &str,
        short_name: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        let sql = match kind {
            CatalogKind::Subject => {
                "INSERT INTO subjects (id, name, short_name) VALUES (?, ?, ?);".to_string()
            }
            _ => format!("INSERT INTO {} (id, name) VALUES (?, ?);", kind.table()),
        };

        let mut query = sqlx::query(&sql).bind(id).bind(name);
        if kind == CatalogKind::Subject {
            query = query.bind(short_name);
        }
        query.execute(&self.pool).await?;
        Ok(())
    }

    pub async fn get(&self, kind: CatalogKind, id: &str) -> Result<Option<CatalogEntry>, sqlx::Error> {
        let sql = format!("{} WHERE id = ?;", select(kind));

        let record: Option<CatalogRecord> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record.map(Into::into))
    }

    /// Entries of one kind, ordered by name.
    pub async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogEntry>, sqlx::Error> {
        let sql = format!("{} ORDER BY name, id;", select(kind));

        let records: Vec<CatalogRecord> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

fn select(kind: CatalogKind) -> String {
    let short_name = match kind {
        CatalogKind::Subject => "short_name",
        _ => "NULL AS short_name",
    };
    format!("SELECT id, name, {short_name} FROM {}", kind.table())
}

#[derive(Debug, sqlx::FromRow)]
struct CatalogRecord {
    id: String,
    name: String,
    short_name: Option<String>,
}

impl From<CatalogRecord> for CatalogEntry {
    fn from(record: CatalogRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            short_name: record.short_name,
        }
    }
}
