// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The event type registry.

use campus_core::{CampusError, EventTypeDraft, ROUTE_EVENT_TYPES};

use crate::common::{event_draft, seeded_world};

fn draft(name: &str) -> EventTypeDraft {
    EventTypeDraft {
        name: name.to_string(),
        description: None,
    }
}

#[tokio::test]
async fn event_types_are_ordered_by_name() {
    // Arrange
    let world = seeded_world().await;
    world
        .campus
        .create_event_type(&world.hod, &draft("Workshop"))
        .await
        .unwrap();

    // Act
    let types = world.campus.event_types().await.unwrap();

    // Assert
    let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Exam", "Holiday", "Workshop"]);
    assert_eq!(world.invalidations.routes(), vec![ROUTE_EVENT_TYPES]);
}

#[tokio::test]
async fn event_type_names_are_unique() {
    // Arrange
    let world = seeded_world().await;

    // Act
    let created = world
        .campus
        .create_event_type(&world.hod, &draft(" Holiday "))
        .await
        .unwrap_err();
    let renamed = world
        .campus
        .update_event_type(&world.hod, &world.exam_type, &draft("Holiday"))
        .await
        .unwrap_err();

    // Assert
    let conflict = CampusError::Conflict("Event type name already exists".to_string());
    assert_eq!(created, conflict);
    assert_eq!(renamed, conflict);
}

#[tokio::test]
async fn event_types_are_managed_by_hod_only() {
    // Arrange
    let world = seeded_world().await;

    // Act
    let create = world
        .campus
        .create_event_type(&world.faculty, &draft("Seminar"))
        .await
        .unwrap_err();
    let delete = world
        .campus
        .delete_event_type(&world.faculty, &world.exam_type)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(create, CampusError::Forbidden(_)));
    assert_eq!(
        delete,
        CampusError::Forbidden("Only HOD can delete event types".to_string())
    );
}

#[tokio::test]
async fn update_event_type_renames_and_reflects_on_events() {
    // Arrange
    let world = seeded_world().await;
    let event = world
        .campus
        .add_event(
            &world.hod,
            &world.calendar_id,
            &event_draft("Pongal", "2026-01-14", None, &world.holiday_type),
        )
        .await
        .unwrap();

    // Act
    let updated = world
        .campus
        .update_event_type(
            &world.hod,
            &world.holiday_type,
            &EventTypeDraft {
                name: "Festival".to_string(),
                description: Some("Campus closed".to_string()),
            },
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(updated.name, "Festival");
    let details = world
        .campus
        .calendar(&world.hod, &world.calendar_id)
        .await
        .unwrap();
    let stored = details.events.iter().find(|e| e.id == event.id).unwrap();
    assert_eq!(stored.event_type_name, "Festival");
}

#[tokio::test]
async fn update_missing_event_type_is_not_found() {
    // Arrange
    let world = seeded_world().await;

    // Act
    let err = world
        .campus
        .update_event_type(&world.hod, "missing", &draft("Seminar"))
        .await
        .unwrap_err();

    // Assert
    assert_eq!(err, CampusError::NotFound("Event type not found".to_string()));
}

#[tokio::test]
async fn delete_event_type_in_use_reports_count() {
    // Arrange
    let world = seeded_world().await;
    for start in ["2026-03-02", "2026-03-03", "2026-03-04"] {
        world
            .campus
            .add_event(
                &world.hod,
                &world.calendar_id,
                &event_draft("Quiz", start, None, &world.exam_type),
            )
            .await
            .unwrap();
    }

    // Act
    let err = world
        .campus
        .delete_event_type(&world.hod, &world.exam_type)
        .await
        .unwrap_err();

    // Assert
    assert_eq!(
        err,
        CampusError::Conflict("Cannot delete: 3 event(s) are using this type".to_string())
    );
    assert_eq!(world.campus.event_types().await.unwrap().len(), 2);
}

#[tokio::test]
async fn delete_unused_event_type() {
    // Arrange
    let world = seeded_world().await;

    // Act
    world
        .campus
        .delete_event_type(&world.hod, &world.exam_type)
        .await
        .unwrap();
    let again = world
        .campus
        .delete_event_type(&world.hod, &world.exam_type)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(again, CampusError::NotFound(_)));
    let names: Vec<_> = world
        .campus
        .event_types()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["Holiday"]);
}
