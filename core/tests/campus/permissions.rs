// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar view and edit permissions resolved against the store.

use campus_core::{CalendarDraft, GroupDraft, GroupRole};

use crate::common::seeded_world;

#[tokio::test]
async fn hod_views_and_edits_without_membership() {
    // Arrange
    let world = seeded_world().await;
    let private = world
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

    // Act & Assert
    assert!(world.campus.can_view(&world.hod.user_id, &private.id).await);
    assert!(world.campus.can_edit(&world.hod.user_id, &private.id).await);
    assert!(!world.campus.can_view(&world.faculty.user_id, &private.id).await);
}

#[tokio::test]
async fn student_never_edits_even_as_explicit_editor() {
    // Arrange
    let world = seeded_world().await;
    world
        .campus
        .add_member(
            &world.hod,
            &world.staff_group,
            &world.student.user_id,
            Some(GroupRole::Editor),
        )
        .await
        .unwrap();

    // Act
    let view = world
        .campus
        .can_view(&world.student.user_id, &world.calendar_id)
        .await;
    let edit = world
        .campus
        .can_edit(&world.student.user_id, &world.calendar_id)
        .await;

    // Assert
    assert!(view);
    assert!(!edit);
}

#[tokio::test]
async fn faculty_edit_follows_membership_roles() {
    // Arrange
    let world = seeded_world().await;

    // Act
    let editor = world
        .campus
        .can_edit(&world.faculty.user_id, &world.calendar_id)
        .await;
    let viewer = world
        .campus
        .can_edit(&world.viewer.user_id, &world.calendar_id)
        .await;

    // Assert
    assert!(editor);
    assert!(!viewer);
    assert!(world.campus.can_view(&world.viewer.user_id, &world.calendar_id).await);
}

#[tokio::test]
async fn editor_default_group_grants_edit() {
    // Arrange
    let world = seeded_world().await;
    let editors = world
        .campus
        .create_group(
            &world.hod,
            &GroupDraft {
                title: "Coordinators".to_string(),
                default_role: GroupRole::Editor,
            },
        )
        .await
        .unwrap();
    world
        .campus
        .add_member(&world.hod, &editors.id, &world.viewer.user_id, None)
        .await
        .unwrap();
    assert!(!world.campus.can_edit_calendar(&world.viewer, &world.calendar_id).await);

    // Act
    world
        .campus
        .assign_group(&world.hod, &world.calendar_id, &editors.id)
        .await
        .unwrap();

    // Assert
    assert!(world.campus.can_edit_calendar(&world.viewer, &world.calendar_id).await);
}

#[tokio::test]
async fn unknown_user_is_never_authorized() {
    // Arrange
    let world = seeded_world().await;

    // Act & Assert
    assert!(!world.campus.can_view("ghost", &world.calendar_id).await);
    assert!(!world.campus.can_edit("ghost", &world.calendar_id).await);
}

#[tokio::test]
async fn removing_membership_revokes_access() {
    // Arrange
    let world = seeded_world().await;

    // Act
    world
        .campus
        .remove_member(&world.hod, &world.class_group, &world.student.user_id)
        .await
        .unwrap();

    // Assert
    assert!(
        !world
            .campus
            .can_view(&world.student.user_id, &world.calendar_id)
            .await
    );
    assert!(world.campus.calendars(&world.student).await.unwrap().is_empty());
}
