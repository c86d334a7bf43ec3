// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Adding, updating and deleting calendar events.

use campus_core::{CampusError, ROUTE_CALENDARS};
use jiff::civil::date;

use crate::common::{event_draft, seeded_world};

#[tokio::test]
async fn add_event_returns_stored_event_with_type_name() {
    // Arrange
    let world = seeded_world().await;
    let draft = event_draft("  Mid-term exams ", "2026-03-02", Some("2026-03-06"), &world.exam_type);

    // Act
    let event = world
        .campus
        .add_event(&world.faculty, &world.calendar_id, &draft)
        .await
        .unwrap();

    // Assert
    assert_eq!(event.title, "Mid-term exams");
    assert_eq!(event.start_date, date(2026, 3, 2));
    assert_eq!(event.end_date, Some(date(2026, 3, 6)));
    assert_eq!(event.event_type_name, "Exam");
    assert_eq!(event.calendar_id, world.calendar_id);
    assert_eq!(world.invalidations.routes(), vec![ROUTE_CALENDARS]);
}

#[tokio::test]
async fn add_event_normalizes_same_day_end() {
    // Arrange
    let world = seeded_world().await;
    let draft = event_draft("Republic Day", "2026-01-26", Some("2026-01-26"), &world.holiday_type);

    // Act
    let event = world
        .campus
        .add_event(&world.hod, &world.calendar_id, &draft)
        .await
        .unwrap();

    // Assert
    assert_eq!(event.end_date, None);
}

#[tokio::test]
async fn add_event_validates_draft() {
    // Arrange
    let world = seeded_world().await;
    let cases = [
        (event_draft(" ", "2026-01-05", None, &world.holiday_type), "Event title is required"),
        (
            event_draft(&"x".repeat(201), "2026-01-05", None, &world.holiday_type),
            "Event title must be 200 characters or less",
        ),
        (event_draft("Break", "soon", None, &world.holiday_type), "Invalid start date"),
        (
            event_draft("Break", "2026-01-05", Some("later"), &world.holiday_type),
            "Invalid end date",
        ),
        (
            event_draft("Break", "2026-01-05", Some("2026-01-04"), &world.holiday_type),
            "End date must be after start date",
        ),
        (event_draft("Break", "2026-01-05", None, "missing"), "Event type not found"),
    ];

    for (draft, message) in cases {
        // Act
        let err = world
            .campus
            .add_event(&world.hod, &world.calendar_id, &draft)
            .await
            .unwrap_err();

        // Assert
        assert_eq!(err, CampusError::Validation(message.to_string()));
    }
    assert!(world.invalidations.routes().is_empty());
}

#[tokio::test]
async fn add_event_to_missing_calendar_is_not_found() {
    // Arrange
    let world = seeded_world().await;
    let draft = event_draft("Break", "2026-01-05", None, &world.holiday_type);

    // Act
    let err = world
        .campus
        .add_event(&world.hod, "missing", &draft)
        .await
        .unwrap_err();

    // Assert
    assert_eq!(err, CampusError::NotFound("Calendar not found".to_string()));
}

#[tokio::test]
async fn add_event_requires_edit_permission() {
    // Arrange
    let world = seeded_world().await;
    let draft = event_draft("Break", "2026-01-05", None, &world.holiday_type);

    // Act
    let student = world
        .campus
        .add_event(&world.student, &world.calendar_id, &draft)
        .await
        .unwrap_err();
    let viewer = world
        .campus
        .add_event(&world.viewer, &world.calendar_id, &draft)
        .await
        .unwrap_err();

    // Assert
    let forbidden =
        CampusError::Forbidden("You don't have permission to edit this calendar".to_string());
    assert_eq!(student, forbidden);
    assert_eq!(viewer, forbidden);
}

#[tokio::test]
async fn update_event_replaces_fields() {
    // Arrange
    let world = seeded_world().await;
    let event = world
        .campus
        .add_event(
            &world.hod,
            &world.calendar_id,
            &event_draft("Break", "2026-01-05", None, &world.holiday_type),
        )
        .await
        .unwrap();
    let mut draft = event_draft("Finals", "2026-04-20", Some("2026-04-24"), &world.exam_type);
    draft.description = Some("Hall A".to_string());

    // Act
    let updated = world
        .campus
        .update_event(&world.faculty, &event.id, &draft)
        .await
        .unwrap();

    // Assert
    assert_eq!(updated.id, event.id);
    assert_eq!(updated.title, "Finals");
    assert_eq!(updated.description.as_deref(), Some("Hall A"));
    assert_eq!(updated.event_type_name, "Exam");
    assert_eq!(updated.end_date, Some(date(2026, 4, 24)));
}

#[tokio::test]
async fn update_missing_event_is_not_found() {
    // Arrange
    let world = seeded_world().await;
    let draft = event_draft("Finals", "2026-04-20", None, &world.exam_type);

    // Act
    let err = world
        .campus
        .update_event(&world.hod, "missing", &draft)
        .await
        .unwrap_err();

    // Assert
    assert_eq!(err, CampusError::NotFound("Event not found".to_string()));
}

#[tokio::test]
async fn delete_event_checks_owning_calendar() {
    // Arrange
    let world = seeded_world().await;
    let event = world
        .campus
        .add_event(
            &world.hod,
            &world.calendar_id,
            &event_draft("Break", "2026-01-05", None, &world.holiday_type),
        )
        .await
        .unwrap();

    // Act
    let denied = world.campus.delete_event(&world.student, &event.id).await;
    let deleted = world.campus.delete_event(&world.faculty, &event.id).await;
    let again = world.campus.delete_event(&world.faculty, &event.id).await;

    // Assert
    assert!(matches!(denied, Err(CampusError::Forbidden(_))));
    assert!(deleted.is_ok());
    assert!(matches!(again, Err(CampusError::NotFound(_))));
}

#[tokio::test]
async fn calendar_lists_events_by_start_date_then_id() {
    // Arrange
    let world = seeded_world().await;
    for (title, start) in [("c", "2026-02-01"), ("a", "2026-01-10"), ("b", "2026-01-10")] {
        world
            .campus
            .add_event(
                &world.hod,
                &world.calendar_id,
                &event_draft(title, start, None, &world.holiday_type),
            )
            .await
            .unwrap();
    }

    // Act
    let details = world
        .campus
        .calendar(&world.student, &world.calendar_id)
        .await
        .unwrap();

    // Assert
    let keys: Vec<_> = details
        .events
        .iter()
        .map(|e| (e.start_date, e.id.clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(details.events.last().unwrap().title, "c");
}

#[tokio::test]
async fn event_is_read_through_calendar_visibility() {
    // Arrange
    let world = seeded_world().await;
    let event = world
        .campus
        .add_event(
            &world.hod,
            &world.calendar_id,
            &event_draft("Sports day", "2026-02-10", None, &world.holiday_type),
        )
        .await
        .unwrap();
    world
        .campus
        .remove_member(&world.hod, &world.staff_group, &world.viewer.user_id)
        .await
        .unwrap();

    // Act
    let seen = world.campus.event(&world.student, &event.id).await.unwrap();
    let hidden = world
        .campus
        .event(&world.viewer, &event.id)
        .await
        .unwrap_err();
    let missing = world
        .campus
        .event(&world.hod, "missing")
        .await
        .unwrap_err();

    // Assert
    assert_eq!(seen, event);
    assert!(matches!(hidden, CampusError::Forbidden(_)));
    assert_eq!(missing, CampusError::NotFound("Event not found".to_string()));
}
