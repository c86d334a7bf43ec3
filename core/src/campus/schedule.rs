// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use jiff::civil::Date;

use crate::campus::Campus;
use crate::datetime::DateWindow;
use crate::error::persistence;
use crate::schedule::{bucket_day_events, dedup_slots, filter_slots};
use crate::{Actor, CampusError, Preferences, Role, UserSchedule, WeeklySchedule};

impl Campus {
    /// The actor's week: slots by day, summary dates per slot, and calendar
    /// events per date around today.
    #[tracing::instrument(skip(self, actor), fields(user = %actor.user_id))]
    pub async fn user_schedule(&self, actor: &Actor) -> Result<UserSchedule, CampusError> {
        const ACTION: &str = "load schedule";

        let window = DateWindow::around(self.today, self.config.schedule_window_days);
        let groups = self
            .db
            .groups
            .ids_of_member(&actor.user_id)
            .await
            .map_err(persistence(ACTION))?;

        let slots = match groups.is_empty() {
            true => Vec::new(),
            false => {
                let slots = self
                    .db
                    .timetables
                    .slots_for_member(&actor.user_id)
                    .await
                    .map_err(persistence(ACTION))?
                    .into_iter()
                    .map(|r| r.into_slot())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(persistence(ACTION))?;

                let prefs = match actor.role {
                    Role::Student => self.preferences.active_preferences(&actor.user_id).await?,
                    Role::Hod | Role::Faculty => Preferences::default(),
                };
                filter_slots(actor, &prefs, dedup_slots(slots))
            }
        };
        let weekly = WeeklySchedule::from_slots(slots);

        let slot_ids: Vec<String> = weekly.slots().map(|s| s.id.clone()).collect();
        let mut slot_summaries: BTreeMap<String, Vec<Date>> = BTreeMap::new();
        for (slot_id, date) in self
            .db
            .summaries
            .dates_in_window(&slot_ids, &window)
            .await
            .map_err(persistence(ACTION))?
        {
            slot_summaries.entry(slot_id).or_default().push(date);
        }

        let records = match (actor.role, groups.is_empty()) {
            (Role::Hod, _) => self.db.events.list_in_window(&window, None).await,
            (_, true) => Ok(Vec::new()),
            (_, false) => {
                self.db
                    .events
                    .list_in_window(&window, Some(&actor.user_id))
                    .await
            }
        }
        .map_err(persistence(ACTION))?;
        let events = records
            .into_iter()
            .map(|r| r.into_event())
            .collect::<Result<Vec<_>, _>>()
            .map_err(persistence(ACTION))?;
        let day_events = bucket_day_events(&window, &events);

        tracing::debug!(
            slots = slot_ids.len(),
            events = events.len(),
            "schedule assembled"
        );
        Ok(UserSchedule {
            weekly,
            today: self.today,
            window,
            user_name: actor.name.clone(),
            role: actor.role,
            slot_summaries,
            day_events,
        })
    }
}
