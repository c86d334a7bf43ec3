// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::datetime::{WEEK, weekday_index};
use crate::localdb::decode_error;
use crate::timetable::ValidSlot;
use crate::{Slot, Timetable};

const SELECT_SLOTS: &str = "\
SELECT s.id, s.timetable_id, s.day, s.start_time, s.end_time,
       s.slot_type_id, st.name AS slot_type_name,
       s.subject_id, sub.name AS subject_name,
       s.room_id, r.name AS room_name,
       s.faculty_id, u.name AS faculty_name,
       s.batch_id, b.name AS batch_name
FROM timetable_slots s
JOIN slot_types st ON st.id = s.slot_type_id
LEFT JOIN subjects sub ON sub.id = s.subject_id
LEFT JOIN rooms r ON r.id = s.room_id
LEFT JOIN users u ON u.id = s.faculty_id
LEFT JOIN batches b ON b.id = s.batch_id
";

#[derive(Debug, Clone)]
pub struct Timetables {
    pool: SqlitePool,
}

impl Timetables {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, id: &str, name: &str, created_at: &str) -> Result<(), sqlx::Error> {
        const SQL: &str = "INSERT INTO timetables (id, name, created_at) VALUES (?, ?, ?);";

        sqlx::query(SQL)
            .bind(id)
            .bind(name)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Timetable>, sqlx::Error> {
        const SQL: &str = "\
SELECT t.id, t.name,
       (SELECT COUNT(*) FROM timetable_slots s WHERE s.timetable_id = t.id) AS slot_count
FROM timetables t
WHERE t.id = ?;
";

        let row: Option<(String, String, i64)> = sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(id, name, slot_count)| Timetable {
            id,
            name,
            slot_count,
        }))
    }

    pub async fn list(&self) -> Result<Vec<Timetable>, sqlx::Error> {
        const SQL: &str = "\
SELECT t.id, t.name,
       (SELECT COUNT(*) FROM timetable_slots s WHERE s.timetable_id = t.id) AS slot_count
FROM timetables t
ORDER BY t.name, t.id;
";

        let rows: Vec<(String, String, i64)> = sqlx::query_as(SQL).fetch_all(&self.pool).await?;
        Ok(rows
            .into_iter()
            .map(|(id, name, slot_count)| Timetable {
                id,
                name,
                slot_count,
            })
            .collect())
    }

    pub async fn assign_group(&self, timetable_id: &str, group_id: &str) -> Result<(), sqlx::Error> {
        const SQL: &str = "INSERT INTO timetable_groups (timetable_id, group_id) VALUES (?, ?);";

        sqlx::query(SQL)
            .bind(timetable_id)
            .bind(group_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn insert_slot(
        &self,
        id: &str,
        timetable_id: &str,
        slot: &ValidSlot,
    ) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO timetable_slots
    (id, timetable_id, day, start_time, end_time, slot_type_id, subject_id, room_id, faculty_id, batch_id)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?);
";

        sqlx::query(SQL)
            .bind(id)
            .bind(timetable_id)
            .bind(weekday_index(slot.day) as i64)
            .bind(&slot.start_time)
            .bind(&slot.end_time)
            .bind(&slot.slot_type_id)
            .bind(&slot.subject_id)
            .bind(&slot.room_id)
            .bind(&slot.faculty_id)
            .bind(&slot.batch_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Returns the number of slots deleted.
    pub async fn delete_slot(&self, id: &str) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM timetable_slots WHERE id = ?;";

        let result = sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn get_slot(&self, id: &str) -> Result<Option<SlotRecord>, sqlx::Error> {
        let sql = format!("{SELECT_SLOTS}WHERE s.id = ?;");

        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Slots of one timetable, by day, start time and id.
    pub async fn slots_of(&self, timetable_id: &str) -> Result<Vec<SlotRecord>, sqlx::Error> {
        let sql =
            format!("{SELECT_SLOTS}WHERE s.timetable_id = ? ORDER BY s.day, s.start_time, s.id;");

        sqlx::query_as(&sql)
            .bind(timetable_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Slots of every timetable assigned to a group the user is a member of.
    ///
    /// A slot reached through several groups is returned once per group.
    pub async fn slots_for_member(&self, user_id: &str) -> Result<Vec<SlotRecord>, sqlx::Error> {
        let sql = format!(
            "{SELECT_SLOTS}\
JOIN timetable_groups tg ON tg.timetable_id = s.timetable_id
JOIN group_memberships m ON m.group_id = tg.group_id
WHERE m.user_id = ?
ORDER BY s.day, s.start_time, s.id;
"
        );

        sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Whether the slot belongs to a timetable assigned to one of the user's groups.
    pub async fn is_visible_to(&self, slot_id: &str, user_id: &str) -> Result<bool, sqlx::Error> {
        const SQL: &str = "\
SELECT COUNT(*)
FROM timetable_slots s
JOIN timetable_groups tg ON tg.timetable_id = s.timetable_id
JOIN group_memberships m ON m.group_id = tg.group_id
WHERE s.id = ? AND m.user_id = ?;
";

        let count: i64 = sqlx::query_scalar(SQL)
            .bind(slot_id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SlotRecord {
    id: String,
    timetable_id: String,
    day: i64,
    start_time: String,
    end_time: String,
    slot_type_id: String,
    slot_type_name: String,
    subject_id: Option<String>,
    subject_name: Option<String>,
    room_id: Option<String>,
    room_name: Option<String>,
    faculty_id: Option<String>,
    faculty_name: Option<String>,
    batch_id: Option<String>,
    batch_name: Option<String>,
}

impl SlotRecord {
    pub fn into_slot(self) -> Result<Slot, sqlx::Error> {
        let day = usize::try_from(self.day)
            .ok()
            .and_then(|i| WEEK.get(i).copied())
            .ok_or_else(|| decode_error(format!("invalid slot day {}", self.day)))?;

        Ok(Slot {
            id: self.id,
            timetable_id: self.timetable_id,
            day,
            start_time: self.start_time,
            end_time: self.end_time,
            slot_type_id: self.slot_type_id,
            slot_type_name: self.slot_type_name,
            subject_id: self.subject_id,
            subject_name: self.subject_name,
            room_id: self.room_id,
            room_name: self.room_name,
            faculty_id: self.faculty_id,
            faculty_name: self.faculty_name,
            batch_id: self.batch_id,
            batch_name: self.batch_name,
        })
    }
}
