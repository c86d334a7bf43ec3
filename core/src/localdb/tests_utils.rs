// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for the localdb module.
//!
//! Builds an in-memory database and seeds the rows repository tests rely on.

use jiff::civil::{Date, Weekday};

use crate::localdb::{CalendarRecord, LocalDb, UserRecord};
use crate::timetable::ValidSlot;
use crate::{CatalogKind, GroupRole, ValidEvent};

/// Creates an in-memory test database with all migrations applied.
pub async fn setup_test_db() -> LocalDb {
    LocalDb::open(None)
        .await
        .expect("Failed to create test database")
}

/// A user record named after its id.
pub fn user_record(id: &str, email: &str, role: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: id.to_string(),
        email: email.to_string(),
        role: role.to_string(),
    }
}

/// A calendar record created by `hod`.
pub fn calendar_record(id: &str, name: &str) -> CalendarRecord {
    CalendarRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        created_by: "hod".to_string(),
        created_at: "2026-01-01T00:00:00Z".to_string(),
    }
}

/// Seeds user `hod`, event type `holiday` and calendar `c1`.
pub async fn seed_calendar(db: &LocalDb) {
    db.users
        .insert(&user_record("hod", "hod@campus.edu", "HOD"))
        .await
        .expect("Failed to insert user");
    db.event_types
        .insert("holiday", "Holiday", None)
        .await
        .expect("Failed to insert event type");
    db.calendars
        .insert(&calendar_record("c1", "Academic"))
        .await
        .expect("Failed to insert calendar");
}

/// An event of type `holiday`.
pub fn valid_event(title: &str, start: Date, end: Option<Date>) -> ValidEvent {
    ValidEvent {
        title: title.to_string(),
        description: None,
        start_date: start,
        end_date: end,
        event_type_id: "holiday".to_string(),
    }
}

/// Seeds users `hod`, `f1` and `stu`, the slot catalog, and timetable `tt`
/// assigned to group `g1`, of which `stu` is a member.
pub async fn seed_timetable(db: &LocalDb) {
    for record in [
        user_record("hod", "hod@campus.edu", "HOD"),
        UserRecord {
            name: "Faculty One".to_string(),
            ..user_record("f1", "f1@campus.edu", "Faculty")
        },
        user_record("stu", "stu@campus.edu", "Student"),
    ] {
        db.users.insert(&record).await.expect("Failed to insert user");
    }

    let catalog = [
        (CatalogKind::SlotType, "lecture", "Lecture"),
        (CatalogKind::SlotType, "lab", "Lab"),
        (CatalogKind::Subject, "algo", "Algorithms"),
        (CatalogKind::Room, "r1", "B-204"),
        (CatalogKind::Batch, "b1", "A1"),
    ];
    for (kind, id, name) in catalog {
        db.catalog
            .insert(kind, id, name, None)
            .await
            .expect("Failed to insert catalog entry");
    }

    db.groups
        .insert("g1", "CS 2026", GroupRole::Viewer)
        .await
        .expect("Failed to insert group");
    db.groups
        .add_member("g1", "stu", None)
        .await
        .expect("Failed to add member");
    db.timetables
        .insert("tt", "CS Semester 2", "2026-01-01T00:00:00Z")
        .await
        .expect("Failed to insert timetable");
    db.timetables
        .assign_group("tt", "g1")
        .await
        .expect("Failed to assign timetable");
}

/// A lecture slot without references, ending at 23:59.
pub fn valid_slot(day: Weekday, start: &str) -> ValidSlot {
    ValidSlot {
        day,
        start_time: start.to_string(),
        end_time: "23:59".to_string(),
        slot_type_id: "lecture".to_string(),
        subject_id: None,
        room_id: None,
        faculty_id: None,
        batch_id: None,
    }
}
