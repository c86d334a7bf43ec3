// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar management and group assignment.

use campus_core::{CalendarDraft, CampusError, GroupDraft, ROUTE_CALENDARS};

use crate::common::{event_draft, seeded_world};

fn draft(name: &str) -> CalendarDraft {
    CalendarDraft {
        name: name.to_string(),
        description: Some("  ".to_string()),
    }
}

#[tokio::test]
async fn create_calendar_is_hod_only() {
    // Arrange
    let world = seeded_world().await;

    // Act
    let denied = world
        .campus
        .create_calendar(&world.faculty, &draft("Sports"))
        .await
        .unwrap_err();
    let created = world
        .campus
        .create_calendar(&world.hod, &draft(" Sports "))
        .await
        .unwrap();

    // Assert
    assert_eq!(
        denied,
        CampusError::Forbidden("Only HOD can create calendars".to_string())
    );
    assert_eq!(created.name, "Sports");
    assert_eq!(created.description, None);
    assert_eq!(created.created_by, world.hod.user_id);
    assert_eq!(world.invalidations.routes(), vec![ROUTE_CALENDARS]);
}

#[tokio::test]
async fn calendars_visible_per_role_newest_first() {
    // Arrange
    let world = seeded_world().await;
    let newer = world
        .campus
        .create_calendar(&world.hod, &draft("Sports"))
        .await
        .unwrap();

    // Act
    let for_hod = world.campus.calendars(&world.hod).await.unwrap();
    let for_student = world.campus.calendars(&world.student).await.unwrap();

    // Assert
    let ids: Vec<_> = for_hod.iter().map(|c| c.calendar.id.as_str()).collect();
    assert_eq!(ids, [newer.id.as_str(), world.calendar_id.as_str()]);
    assert_eq!(for_student.len(), 1);
    assert_eq!(for_student[0].calendar.id, world.calendar_id);
}

#[tokio::test]
async fn calendar_not_viewable_is_forbidden() {
    // Arrange
    let world = seeded_world().await;
    let private = world
        .campus
        .create_calendar(&world.hod, &draft("Board"))
        .await
        .unwrap();

    // Act
    let forbidden = world
        .campus
        .calendar(&world.student, &private.id)
        .await
        .unwrap_err();
    let missing = world
        .campus
        .calendar(&world.student, "missing")
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(forbidden, CampusError::Forbidden(_)));
    assert_eq!(missing, CampusError::NotFound("Calendar not found".to_string()));
}

#[tokio::test]
async fn update_calendar_requires_edit_permission() {
    // Arrange
    let world = seeded_world().await;
    let mut renamed = draft("Academic 2026");
    renamed.description = Some("Semester dates".to_string());

    // Act
    let denied = world
        .campus
        .update_calendar(&world.viewer, &world.calendar_id, &renamed)
        .await
        .unwrap_err();
    let updated = world
        .campus
        .update_calendar(&world.faculty, &world.calendar_id, &renamed)
        .await
        .unwrap();

    // Assert
    assert!(matches!(denied, CampusError::Forbidden(_)));
    assert_eq!(updated.name, "Academic 2026");
    assert_eq!(updated.description.as_deref(), Some("Semester dates"));
}

#[tokio::test]
async fn delete_calendar_cascades_events() {
    // Arrange
    let world = seeded_world().await;
    world
        .campus
        .add_event(
            &world.hod,
            &world.calendar_id,
            &event_draft("Break", "2026-01-05", None, &world.holiday_type),
        )
        .await
        .unwrap();

    // Act
    let denied = world
        .campus
        .delete_calendar(&world.faculty, &world.calendar_id)
        .await;
    world
        .campus
        .delete_calendar(&world.hod, &world.calendar_id)
        .await
        .unwrap();

    // Assert
    assert!(matches!(denied, Err(CampusError::Forbidden(_))));
    assert!(world.campus.calendars(&world.hod).await.unwrap().is_empty());
    // the holiday type is free again
    world
        .campus
        .delete_event_type(&world.hod, &world.holiday_type)
        .await
        .unwrap();
}

#[tokio::test]
async fn assign_group_rejects_duplicates() {
    // Arrange
    let world = seeded_world().await;

    // Act
    let err = world
        .campus
        .assign_group(&world.hod, &world.calendar_id, &world.class_group)
        .await
        .unwrap_err();

    // Assert
    assert_eq!(
        err,
        CampusError::Conflict("This group is already assigned to this calendar".to_string())
    );
}

#[tokio::test]
async fn assign_group_requires_existing_group() {
    // Arrange
    let world = seeded_world().await;

    // Act
    let err = world
        .campus
        .assign_group(&world.hod, &world.calendar_id, "missing")
        .await
        .unwrap_err();

    // Assert
    assert_eq!(err, CampusError::NotFound("Group not found".to_string()));
}

#[tokio::test]
async fn unassign_group_removes_assignment_once() {
    // Arrange
    let world = seeded_world().await;
    let extra = world
        .campus
        .create_group(
            &world.hod,
            &GroupDraft {
                title: "Guests".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    world
        .campus
        .assign_group(&world.hod, &world.calendar_id, &extra.id)
        .await
        .unwrap();

    // Act
    world
        .campus
        .unassign_group(&world.hod, &world.calendar_id, &extra.id)
        .await
        .unwrap();
    let again = world
        .campus
        .unassign_group(&world.hod, &world.calendar_id, &extra.id)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(again, CampusError::NotFound(_)));
    let details = world
        .campus
        .calendar(&world.hod, &world.calendar_id)
        .await
        .unwrap();
    assert_eq!(details.groups.len(), 2);
}
