// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod calendars;
mod catalog;
mod event_types;
mod events;
mod groups;
mod preferences;
mod summaries;
mod timetables;
mod users;

#[cfg(test)]
pub(crate) mod tests_utils;

use std::error::Error;
use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub(crate) use crate::localdb::calendars::{CalendarRecord, Calendars};
pub(crate) use crate::localdb::catalog::Catalog;
pub(crate) use crate::localdb::event_types::EventTypes;
pub(crate) use crate::localdb::events::Events;
pub(crate) use crate::localdb::groups::Groups;
pub(crate) use crate::localdb::preferences::PreferenceStore;
pub(crate) use crate::localdb::summaries::{SummaryRecord, Summaries};
pub(crate) use crate::localdb::timetables::Timetables;
pub(crate) use crate::localdb::users::{UserRecord, Users};

#[derive(Debug, Clone)]
pub(crate) struct LocalDb {
    pool: SqlitePool,

    pub(crate) users: Users,
    pub(crate) groups: Groups,
    pub(crate) calendars: Calendars,
    pub(crate) events: Events,
    pub(crate) event_types: EventTypes,
    pub(crate) catalog: Catalog,
    pub(crate) timetables: Timetables,
    pub(crate) summaries: Summaries,
    pub(crate) preferences: PreferenceStore,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let (options, pool_options) = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            let options = SqliteConnectOptions::new()
                .filename(filename.to_str().ok_or("Invalid path encoding")?)
                .create_if_missing(true);
            (options, SqlitePoolOptions::new())
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            // every connection would see its own empty database, keep exactly one alive
            let pool_options = SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
            (SqliteConnectOptions::new().in_memory(true), pool_options)
        };

        let pool = pool_options
            .connect_with(options.foreign_keys(true))
            .await
            .map_err(|e| format!("Failed to connect to SQLite database: {e}"))?;

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await
            .map_err(|e| format!("Failed to run migrations: {e}"))?;

        tracing::debug!("database ready");
        Ok(LocalDb {
            users: Users::new(pool.clone()),
            groups: Groups::new(pool.clone()),
            calendars: Calendars::new(pool.clone()),
            events: Events::new(pool.clone()),
            event_types: EventTypes::new(pool.clone()),
            catalog: Catalog::new(pool.clone()),
            timetables: Timetables::new(pool.clone()),
            summaries: Summaries::new(pool.clone()),
            preferences: PreferenceStore::new(pool.clone()),
            pool,
        })
    }

    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}

/// A stored value that does not map back to its domain type.
pub(crate) fn decode_error(msg: impl Into<String>) -> sqlx::Error {
    sqlx::Error::Decode(msg.into().into())
}

/// `?, ?, ?` for binding `n` values in an `IN (...)` clause.
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
