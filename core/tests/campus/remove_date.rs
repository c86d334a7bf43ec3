// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Removing a single date from an event.

use campus_core::{CalendarEvent, CampusError, EventDraft, ROUTE_CALENDARS};
use jiff::civil::{Date, date};

use crate::common::{World, event_draft, seeded_world};

async fn add(world: &World, start: &str, end: Option<&str>) -> CalendarEvent {
    let draft = EventDraft {
        description: Some("Campus closed".to_string()),
        ..event_draft("Winter break", start, end, &world.holiday_type)
    };
    world
        .campus
        .add_event(&world.hod, &world.calendar_id, &draft)
        .await
        .expect("Failed to add event")
}

async fn stored_events(world: &World) -> Vec<CalendarEvent> {
    world
        .campus
        .calendar(&world.hod, &world.calendar_id)
        .await
        .expect("Failed to load calendar")
        .events
}

fn span(event: &CalendarEvent) -> (Date, Option<Date>) {
    (event.start_date, event.end_date)
}

#[tokio::test]
async fn remove_middle_date_splits_event() {
    // Arrange
    let world = seeded_world().await;
    let event = add(&world, "2026-01-05", Some("2026-01-10")).await;

    // Act
    let remaining = world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-07")
        .await
        .unwrap();

    // Assert
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining[0].id, event.id);
    assert_eq!(span(&remaining[0]), (date(2026, 1, 5), Some(date(2026, 1, 6))));
    assert_eq!(span(&remaining[1]), (date(2026, 1, 8), Some(date(2026, 1, 10))));

    let copy = &remaining[1];
    assert_ne!(copy.id, event.id);
    assert_eq!(copy.title, event.title);
    assert_eq!(copy.description, event.description);
    assert_eq!(copy.event_type_id, event.event_type_id);
    assert_eq!(copy.calendar_id, event.calendar_id);

    let stored = stored_events(&world).await;
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|e| !e.occurs_on(date(2026, 1, 7))));
}

#[tokio::test]
async fn remove_middle_date_of_three_day_event_leaves_single_days() {
    // Arrange
    let world = seeded_world().await;
    let event = add(&world, "2026-01-05", Some("2026-01-07")).await;

    // Act
    let remaining = world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-06")
        .await
        .unwrap();

    // Assert
    let spans: Vec<_> = remaining.iter().map(span).collect();
    assert_eq!(
        spans,
        vec![(date(2026, 1, 5), None), (date(2026, 1, 7), None)]
    );
}

#[tokio::test]
async fn remove_start_of_two_day_event_leaves_single_day() {
    // Arrange
    let world = seeded_world().await;
    let event = add(&world, "2026-01-05", Some("2026-01-06")).await;

    // Act
    let remaining = world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-05")
        .await
        .unwrap();

    // Assert
    assert_eq!(remaining.len(), 1);
    assert_eq!(span(&remaining[0]), (date(2026, 1, 6), None));
    assert_eq!(stored_events(&world).await.len(), 1);
}

#[tokio::test]
async fn remove_start_and_end_shrink_multi_day_event() {
    // Arrange
    let world = seeded_world().await;
    let first = add(&world, "2026-01-05", Some("2026-01-10")).await;
    let second = add(&world, "2026-02-01", Some("2026-02-04")).await;

    // Act
    let from_start = world
        .campus
        .remove_event_from_date(&world.hod, &first.id, "2026-01-05")
        .await
        .unwrap();
    let from_end = world
        .campus
        .remove_event_from_date(&world.hod, &second.id, "2026-02-04")
        .await
        .unwrap();

    // Assert
    assert_eq!(from_start.len(), 1);
    assert_eq!(span(&from_start[0]), (date(2026, 1, 6), Some(date(2026, 1, 10))));
    assert_eq!(from_end.len(), 1);
    assert_eq!(span(&from_end[0]), (date(2026, 2, 1), Some(date(2026, 2, 3))));
}

#[tokio::test]
async fn remove_only_date_deletes_event() {
    // Arrange
    let world = seeded_world().await;
    let single = add(&world, "2026-01-05", None).await;
    let same_day = add(&world, "2026-01-08", Some("2026-01-08")).await;

    // Act
    let a = world
        .campus
        .remove_event_from_date(&world.hod, &single.id, "2026-01-05")
        .await
        .unwrap();
    let b = world
        .campus
        .remove_event_from_date(&world.hod, &same_day.id, "2026-01-08")
        .await
        .unwrap();

    // Assert
    assert!(a.is_empty());
    assert!(b.is_empty());
    assert!(stored_events(&world).await.is_empty());
}

#[tokio::test]
async fn remove_same_date_twice_is_not_found() {
    // Arrange
    let world = seeded_world().await;
    let event = add(&world, "2026-01-05", Some("2026-01-10")).await;
    world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-07")
        .await
        .unwrap();

    // Act
    let err = world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-07")
        .await
        .unwrap_err();

    // Assert
    assert_eq!(
        err,
        CampusError::NotFound("Event does not occur on 2026-01-07".to_string())
    );
    assert_eq!(stored_events(&world).await.len(), 2);
}

#[tokio::test]
async fn remove_deleted_event_is_not_found() {
    // Arrange
    let world = seeded_world().await;
    let event = add(&world, "2026-01-05", None).await;
    world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-05")
        .await
        .unwrap();

    // Act
    let err = world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-05")
        .await
        .unwrap_err();

    // Assert
    assert_eq!(err, CampusError::NotFound("Event not found".to_string()));
}

#[tokio::test]
async fn remove_date_outside_range_leaves_event_untouched() {
    // Arrange
    let world = seeded_world().await;
    let event = add(&world, "2026-01-05", Some("2026-01-10")).await;

    // Act
    let before = world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-04")
        .await
        .unwrap_err();
    let after = world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-11")
        .await
        .unwrap_err();

    // Assert
    assert_eq!(
        before,
        CampusError::NotFound("Event does not occur on 2026-01-04".to_string())
    );
    assert!(matches!(after, CampusError::NotFound(_)));
    let stored = stored_events(&world).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(span(&stored[0]), span(&event));
}

#[tokio::test]
async fn remove_date_rejects_unparseable_date() {
    // Arrange
    let world = seeded_world().await;
    let event = add(&world, "2026-01-05", Some("2026-01-10")).await;

    // Act
    let err = world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "next tuesday")
        .await
        .unwrap_err();

    // Assert
    assert_eq!(err, CampusError::Validation("Invalid date".to_string()));
}

#[tokio::test]
async fn remove_date_accepts_timestamps() {
    // Arrange
    let world = seeded_world().await;
    let event = add(&world, "2026-01-05", Some("2026-01-10")).await;

    // Act
    let remaining = world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-10T08:30:00Z")
        .await
        .unwrap();

    // Assert
    assert_eq!(span(&remaining[0]), (date(2026, 1, 5), Some(date(2026, 1, 9))));
}

#[tokio::test]
async fn remove_date_requires_edit_permission() {
    // Arrange
    let world = seeded_world().await;
    let event = add(&world, "2026-01-05", Some("2026-01-10")).await;

    // Act
    let student = world
        .campus
        .remove_event_from_date(&world.student, &event.id, "2026-01-07")
        .await
        .unwrap_err();
    let viewer = world
        .campus
        .remove_event_from_date(&world.viewer, &event.id, "2026-01-07")
        .await
        .unwrap_err();
    let editor = world
        .campus
        .remove_event_from_date(&world.faculty, &event.id, "2026-01-07")
        .await;

    // Assert
    assert!(matches!(student, CampusError::Forbidden(_)));
    assert!(matches!(viewer, CampusError::Forbidden(_)));
    assert_eq!(editor.unwrap().len(), 2);
}

#[tokio::test]
async fn remove_date_invalidates_calendars() {
    // Arrange
    let world = seeded_world().await;
    let event = add(&world, "2026-01-05", Some("2026-01-10")).await;
    world.invalidations.clear();

    // Act
    world
        .campus
        .remove_event_from_date(&world.hod, &event.id, "2026-01-07")
        .await
        .unwrap();

    // Assert
    assert_eq!(world.invalidations.routes(), vec![ROUTE_CALENDARS]);
}
