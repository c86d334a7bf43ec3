// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod calendars;
mod directory;
mod event_types;
mod events;
mod prefs;
mod schedule;
mod summaries;
mod timetables;

use std::error::Error;
use std::sync::Arc;

use jiff::civil::Date;
use tokio::fs;
use uuid::Uuid;

use crate::datetime::today_utc;
use crate::error::persistence;
use crate::localdb::LocalDb;
use crate::permission::{self, Grant};
use crate::{
    Actor, CampusError, Config, Invalidator, PreferenceSource, Role, TracingInvalidator,
};

/// Campus scheduling application core.
///
/// Every operation takes the [`Actor`] it runs on behalf of; resolve one
/// with [`Campus::session`].
#[derive(Debug, Clone)]
pub struct Campus {
    today: Date,
    config: Config,
    db: LocalDb,
    preferences: Arc<dyn PreferenceSource>,
    invalidator: Arc<dyn Invalidator>,
}

impl Campus {
    /// Creates a new instance with the given configuration.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        prepare(&config).await?;

        let db = LocalDb::open(config.database_path().as_deref())
            .await
            .map_err(|e| format!("Failed to initialize db: {e}"))?;

        Ok(Self {
            today: today_utc(),
            config,
            preferences: Arc::new(db.preferences.clone()),
            invalidator: Arc::new(TracingInvalidator),
            db,
        })
    }

    /// The date operations treat as today.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Refresh today to the current UTC date.
    pub fn refresh_today(&mut self) {
        self.today = today_utc();
    }

    /// Pins today to the given date.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = today;
        self
    }

    /// Replaces the source of students' schedule preferences.
    pub fn with_preferences(mut self, source: Arc<dyn PreferenceSource>) -> Self {
        self.preferences = source;
        self
    }

    /// Replaces the receiver of cache invalidations.
    pub fn with_invalidator(mut self, invalidator: Arc<dyn Invalidator>) -> Self {
        self.invalidator = invalidator;
        self
    }

    /// The normalized configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the user may view the calendar.
    ///
    /// Unknown users and store failures are never authorized.
    pub async fn can_view(&self, user_id: &str, calendar_id: &str) -> bool {
        match self.db.users.role_of(user_id).await {
            Ok(role) => {
                self.decide(role, user_id, calendar_id, permission::can_view)
                    .await
            }
            Err(err) => {
                tracing::warn!(user_id, calendar_id, %err, "failed to resolve role");
                false
            }
        }
    }

    /// Whether the user may edit the calendar and its events.
    ///
    /// Unknown users and store failures are never authorized.
    pub async fn can_edit(&self, user_id: &str, calendar_id: &str) -> bool {
        match self.db.users.role_of(user_id).await {
            Ok(role) => {
                self.decide(role, user_id, calendar_id, permission::can_edit)
                    .await
            }
            Err(err) => {
                tracing::warn!(user_id, calendar_id, %err, "failed to resolve role");
                false
            }
        }
    }

    /// Close the instance, releasing the database.
    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.db.close().await
    }

    async fn actor_can_view(&self, actor: &Actor, calendar_id: &str) -> bool {
        self.decide(Some(actor.role), &actor.user_id, calendar_id, permission::can_view)
            .await
    }

    async fn actor_can_edit(&self, actor: &Actor, calendar_id: &str) -> bool {
        self.decide(Some(actor.role), &actor.user_id, calendar_id, permission::can_edit)
            .await
    }

    async fn ensure_can_edit(&self, actor: &Actor, calendar_id: &str) -> Result<(), CampusError> {
        match self.actor_can_edit(actor, calendar_id).await {
            true => Ok(()),
            false => Err(CampusError::forbidden(
                "You don't have permission to edit this calendar",
            )),
        }
    }

    async fn decide(
        &self,
        role: Option<Role>,
        user_id: &str,
        calendar_id: &str,
        rule: fn(Option<Role>, &[Grant]) -> bool,
    ) -> bool {
        let grants = match role {
            Some(Role::Faculty | Role::Student) => {
                match self.db.calendars.grants(user_id, calendar_id).await {
                    Ok(grants) => grants,
                    Err(err) => {
                        tracing::warn!(user_id, calendar_id, %err, "failed to load calendar grants");
                        return false;
                    }
                }
            }
            Some(Role::Hod) | None => Vec::new(),
        };
        rule(role, &grants)
    }

    fn invalidate(&self, route: &str) {
        self.invalidator.invalidate(route);
    }

    async fn ensure_user_exists(&self, user_id: &str, action: &'static str) -> Result<(), CampusError> {
        match self.db.users.role_of(user_id).await.map_err(persistence(action))? {
            Some(_) => Ok(()),
            None => Err(CampusError::not_found("User not found")),
        }
    }
}

/// Fails with `Forbidden(message)` unless the actor is an HOD.
fn require_hod(actor: &Actor, message: &str) -> Result<(), CampusError> {
    match actor.is_hod() {
        true => Ok(()),
        false => Err(CampusError::forbidden(message)),
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time with a fixed number of fractional digits, so stored stamps
/// sort as text.
fn now_stamp() -> String {
    format!("{:.9}", jiff::Timestamp::now())
}

async fn prepare(config: &Config) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = config.database_path().as_deref().and_then(|p| p.parent()) {
        tracing::info!(path = %parent.display(), "ensuring state directory exists");
        fs::create_dir_all(parent)
            .await
            .map_err(|e| format!("Failed to create state directory: {e}"))?;
    }
    Ok(())
}
