// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The weekly schedule of a user.

use std::collections::HashMap;
use std::sync::Arc;

use campus_core::{
    CalendarDraft, CampusError, DateWindow, Preferences, Role, SummaryDraft, UserDraft,
};
use jiff::civil::{Weekday, date};

use crate::common::{FixedPreferences, TODAY, World, event_draft, seeded_world, slot_draft};

/// Adds a slot to the seeded timetable and returns its id.
async fn add_slot(
    world: &World,
    day: Weekday,
    start: &str,
    end: &str,
    slot_type_id: &str,
    faculty_id: Option<&str>,
    batch_id: Option<&str>,
) -> String {
    let mut draft = slot_draft(day, start, end, slot_type_id);
    draft.faculty_id = faculty_id.map(str::to_string);
    draft.batch_id = batch_id.map(str::to_string);
    world
        .campus
        .add_slot(&world.hod, &world.timetable_id, &draft)
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn schedule_window_spans_around_today() {
    // Arrange
    let world = seeded_world().await;

    // Act
    let schedule = world.campus.user_schedule(&world.student).await.unwrap();

    // Assert
    assert_eq!(schedule.today, TODAY);
    assert_eq!(
        schedule.window,
        DateWindow {
            start: date(2025, 12, 16),
            end: date(2026, 2, 14),
        }
    );
    assert_eq!(schedule.user_name, "Student");
    assert_eq!(schedule.role, Role::Student);
    assert!(schedule.weekly.is_empty());
}

#[tokio::test]
async fn student_sees_every_slot_sorted_by_start() {
    // Arrange
    let world = seeded_world().await;
    let late = add_slot(&world, Weekday::Monday, "11:00", "12:00", &world.lecture_type, None, None).await;
    let early = add_slot(&world, Weekday::Monday, "09:00", "10:00", &world.lab_type, None, None).await;
    let friday = add_slot(&world, Weekday::Friday, "14:00", "15:00", &world.lecture_type, None, None).await;

    // Act
    let schedule = world.campus.user_schedule(&world.student).await.unwrap();

    // Assert
    let monday: Vec<_> = schedule
        .weekly
        .day(Weekday::Monday)
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(monday, [early, late]);
    assert_eq!(schedule.weekly.day(Weekday::Friday)[0].id, friday);
    assert!(schedule.weekly.day(Weekday::Tuesday).is_empty());
}

#[tokio::test]
async fn student_preferences_filter_slot_types_and_batches() {
    // Arrange
    let world = seeded_world().await;
    let lecture = add_slot(&world, Weekday::Monday, "09:00", "10:00", &world.lecture_type, None, None).await;
    add_slot(&world, Weekday::Monday, "10:00", "12:00", &world.lab_type, None, None).await;
    let a1 = add_slot(
        &world,
        Weekday::Tuesday,
        "09:00",
        "10:00",
        &world.lecture_type,
        None,
        Some(&world.batch_a1),
    )
    .await;
    add_slot(
        &world,
        Weekday::Tuesday,
        "10:00",
        "11:00",
        &world.lecture_type,
        None,
        Some(&world.batch_a2),
    )
    .await;

    let prefs = Preferences {
        enabled_slot_type_ids: Some(vec![world.lecture_type.clone()]),
        selected_batch_ids: Some(vec![world.batch_a1.clone()]),
    };
    world
        .campus
        .set_preferences(&world.student, &prefs)
        .await
        .unwrap();

    // Act
    let schedule = world.campus.user_schedule(&world.student).await.unwrap();

    // Assert
    let ids: Vec<_> = schedule.weekly.slots().map(|s| s.id.clone()).collect();
    assert_eq!(ids, [lecture, a1]);
}

#[tokio::test]
async fn injected_preference_source_is_used() {
    // Arrange
    let world = seeded_world().await;
    add_slot(&world, Weekday::Monday, "09:00", "10:00", &world.lecture_type, None, None).await;
    let lab = add_slot(&world, Weekday::Monday, "10:00", "12:00", &world.lab_type, None, None).await;
    let prefs = Preferences {
        enabled_slot_type_ids: Some(vec![world.lab_type.clone()]),
        selected_batch_ids: None,
    };
    let source = FixedPreferences(HashMap::from([(world.student.user_id.clone(), prefs)]));
    let campus = world.campus.clone().with_preferences(Arc::new(source));

    // Act
    let schedule = campus.user_schedule(&world.student).await.unwrap();

    // Assert
    let ids: Vec<_> = schedule.weekly.slots().map(|s| s.id.clone()).collect();
    assert_eq!(ids, [lab]);
}

#[tokio::test]
async fn faculty_see_only_slots_they_teach() {
    // Arrange
    let world = seeded_world().await;
    let mine = add_slot(
        &world,
        Weekday::Wednesday,
        "09:00",
        "10:00",
        &world.lecture_type,
        Some(&world.faculty.user_id),
        None,
    )
    .await;
    add_slot(
        &world,
        Weekday::Wednesday,
        "10:00",
        "11:00",
        &world.lecture_type,
        Some(&world.viewer.user_id),
        None,
    )
    .await;
    add_slot(&world, Weekday::Thursday, "09:00", "10:00", &world.lab_type, None, None).await;

    // Act
    let schedule = world.campus.user_schedule(&world.faculty).await.unwrap();

    // Assert
    let ids: Vec<_> = schedule.weekly.slots().map(|s| s.id.clone()).collect();
    assert_eq!(ids, [mine]);
    assert_eq!(schedule.role, Role::Faculty);
}

#[tokio::test]
async fn slot_reached_through_two_groups_is_listed_once() {
    // Arrange
    let world = seeded_world().await;
    let slot = add_slot(&world, Weekday::Monday, "09:00", "10:00", &world.lecture_type, None, None).await;
    world
        .campus
        .add_member(&world.hod, &world.staff_group, &world.student.user_id, None)
        .await
        .unwrap();

    // Act
    let schedule = world.campus.user_schedule(&world.student).await.unwrap();

    // Assert
    let ids: Vec<_> = schedule.weekly.slots().map(|s| s.id.clone()).collect();
    assert_eq!(ids, [slot]);
}

#[tokio::test]
async fn events_are_bucketed_per_day_inside_the_window() {
    // Arrange
    let world = seeded_world().await;
    let exams = world
        .campus
        .add_event(
            &world.hod,
            &world.calendar_id,
            &event_draft("Exams", "2026-02-13", Some("2026-02-20"), &world.exam_type),
        )
        .await
        .unwrap();
    world
        .campus
        .add_event(
            &world.hod,
            &world.calendar_id,
            &event_draft("Far away", "2026-06-01", None, &world.holiday_type),
        )
        .await
        .unwrap();

    // Act
    let schedule = world.campus.user_schedule(&world.student).await.unwrap();

    // Assert
    let dates: Vec<_> = schedule.day_events.keys().copied().collect();
    assert_eq!(dates, [date(2026, 2, 13), date(2026, 2, 14)]);
    let listed = &schedule.day_events[&date(2026, 2, 13)];
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, exams.id);
    assert_eq!(listed[0].event_type_name, "Exam");
    assert_eq!(listed[0].end_date, Some(date(2026, 2, 20)));
}

#[tokio::test]
async fn events_follow_calendar_assignment() {
    // Arrange
    let world = seeded_world().await;
    let board = world
        .campus
        .create_calendar(
            &world.hod,
            &CalendarDraft {
                name: "Board".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
    world
        .campus
        .add_event(
            &world.hod,
            &board.id,
            &event_draft("Board meeting", "2026-01-16", None, &world.holiday_type),
        )
        .await
        .unwrap();
    world
        .campus
        .add_event(
            &world.hod,
            &world.calendar_id,
            &event_draft("Pongal", "2026-01-16", None, &world.holiday_type),
        )
        .await
        .unwrap();
    world
        .campus
        .create_user(&UserDraft {
            name: "Loner".to_string(),
            email: "loner@campus.edu".to_string(),
            role: Role::Student,
        })
        .await
        .unwrap();
    let loner = world
        .campus
        .session(Some("loner@campus.edu"))
        .await
        .unwrap();

    // Act
    let for_hod = world.campus.user_schedule(&world.hod).await.unwrap();
    let for_student = world.campus.user_schedule(&world.student).await.unwrap();
    let for_loner = world.campus.user_schedule(&loner).await.unwrap();

    // Assert
    let day = date(2026, 1, 16);
    let titles = |events: &[campus_core::DayEvent]| -> Vec<String> {
        let mut titles: Vec<_> = events.iter().map(|e| e.title.clone()).collect();
        titles.sort();
        titles
    };
    assert_eq!(titles(&for_hod.day_events[&day]), ["Board meeting", "Pongal"]);
    assert_eq!(titles(&for_student.day_events[&day]), ["Pongal"]);
    assert!(for_loner.day_events.is_empty());
    assert!(for_loner.weekly.is_empty());
}

#[tokio::test]
async fn summary_dates_are_listed_per_slot() {
    // Arrange
    let world = seeded_world().await;
    let slot = add_slot(
        &world,
        Weekday::Tuesday,
        "09:00",
        "10:00",
        &world.lecture_type,
        Some(&world.faculty.user_id),
        None,
    )
    .await;
    let draft = SummaryDraft {
        content: "Sorting".to_string(),
        notes: None,
    };
    for day in ["2026-01-13", "2026-01-06", "2025-10-07"] {
        world
            .campus
            .save_summary(&world.faculty, &slot, day, &draft)
            .await
            .unwrap();
    }

    // Act
    let schedule = world.campus.user_schedule(&world.student).await.unwrap();

    // Assert
    assert_eq!(
        schedule.slot_summaries[&slot],
        [date(2026, 1, 6), date(2026, 1, 13)]
    );
}

#[tokio::test]
async fn set_preferences_is_for_students_with_known_ids() {
    // Arrange
    let world = seeded_world().await;
    let unknown = Preferences {
        enabled_slot_type_ids: Some(vec!["missing".to_string()]),
        selected_batch_ids: None,
    };

    // Act
    let staff = world
        .campus
        .set_preferences(&world.faculty, &Preferences::default())
        .await
        .unwrap_err();
    let invalid = world
        .campus
        .set_preferences(&world.student, &unknown)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(staff, CampusError::Forbidden(_)));
    assert_eq!(
        invalid,
        CampusError::Validation("Slot type not found: missing".to_string())
    );
    assert_eq!(
        world.campus.preferences(&world.student).await.unwrap(),
        Preferences::default()
    );
}
