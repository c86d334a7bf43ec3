// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lecture summaries of timetable slots.

use campus_core::{CampusError, ROUTE_LECTURE_SUMMARIES, SummaryDraft};
use jiff::civil::{Weekday, date};

use crate::common::{World, seeded_world, slot_draft};

async fn taught_slot(world: &World) -> String {
    let mut draft = slot_draft(Weekday::Thursday, "09:00", "10:00", &world.lecture_type);
    draft.faculty_id = Some(world.faculty.user_id.clone());
    world
        .campus
        .add_slot(&world.hod, &world.timetable_id, &draft)
        .await
        .unwrap()
        .id
}

fn draft(content: &str) -> SummaryDraft {
    SummaryDraft {
        content: content.to_string(),
        notes: Some("  ".to_string()),
    }
}

#[tokio::test]
async fn faculty_saves_summary_of_own_slot() {
    // Arrange
    let world = seeded_world().await;
    let slot_id = taught_slot(&world).await;

    // Act
    let summary = world
        .campus
        .save_summary(&world.faculty, &slot_id, "2026-01-15", &draft(" Heaps "))
        .await
        .unwrap();

    // Assert
    assert_eq!(summary.slot_id, slot_id);
    assert_eq!(summary.date, date(2026, 1, 15));
    assert_eq!(summary.content, "Heaps");
    assert_eq!(summary.notes, None);
    assert_eq!(summary.author_id, world.faculty.user_id);
    assert_eq!(world.invalidations.routes(), vec![ROUTE_LECTURE_SUMMARIES]);
}

#[tokio::test]
async fn saving_again_replaces_the_summary() {
    // Arrange
    let world = seeded_world().await;
    let slot_id = taught_slot(&world).await;
    let first = world
        .campus
        .save_summary(&world.faculty, &slot_id, "2026-01-15", &draft("Heaps"))
        .await
        .unwrap();

    // Act
    let second = world
        .campus
        .save_summary(&world.hod, &slot_id, "2026-01-15", &draft("Heaps and tries"))
        .await
        .unwrap();

    // Assert
    assert_eq!(second.content, "Heaps and tries");
    assert_eq!(second.author_id, world.hod.user_id);
    assert!(second.updated_at >= first.updated_at);
    let stored = world
        .campus
        .summary(&world.student, &slot_id, "2026-01-15")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.content, "Heaps and tries");
}

#[tokio::test]
async fn only_slot_faculty_or_hod_write_summaries() {
    // Arrange
    let world = seeded_world().await;
    let slot_id = taught_slot(&world).await;

    // Act
    let other_faculty = world
        .campus
        .save_summary(&world.viewer, &slot_id, "2026-01-15", &draft("Heaps"))
        .await
        .unwrap_err();
    let student = world
        .campus
        .save_summary(&world.student, &slot_id, "2026-01-15", &draft("Heaps"))
        .await
        .unwrap_err();

    // Assert
    let forbidden =
        CampusError::Forbidden("Only the assigned faculty can write this summary".to_string());
    assert_eq!(other_faculty, forbidden);
    assert_eq!(student, forbidden);
    assert!(world.invalidations.routes().is_empty());
}

#[tokio::test]
async fn save_summary_validates_input() {
    // Arrange
    let world = seeded_world().await;
    let slot_id = taught_slot(&world).await;

    // Act
    let bad_date = world
        .campus
        .save_summary(&world.faculty, &slot_id, "15/01/2026", &draft("Heaps"))
        .await
        .unwrap_err();
    let empty = world
        .campus
        .save_summary(&world.faculty, &slot_id, "2026-01-15", &draft("   "))
        .await
        .unwrap_err();
    let no_slot = world
        .campus
        .save_summary(&world.faculty, "missing", "2026-01-15", &draft("Heaps"))
        .await
        .unwrap_err();

    // Assert
    assert_eq!(bad_date, CampusError::Validation("Invalid date".to_string()));
    assert_eq!(
        empty,
        CampusError::Validation("Summary content is required".to_string())
    );
    assert_eq!(no_slot, CampusError::NotFound("Slot not found".to_string()));
}

#[tokio::test]
async fn summaries_are_read_by_timetable_groups() {
    // Arrange
    let world = seeded_world().await;
    let slot_id = taught_slot(&world).await;
    world
        .campus
        .remove_member(&world.hod, &world.class_group, &world.student.user_id)
        .await
        .unwrap();

    // Act
    let missing = world
        .campus
        .summary(&world.viewer, &slot_id, "2026-01-15")
        .await
        .unwrap();
    let outsider = world
        .campus
        .summary(&world.student, &slot_id, "2026-01-15")
        .await
        .unwrap_err();

    // Assert
    assert_eq!(missing, None);
    assert!(matches!(outsider, CampusError::Forbidden(_)));
}

#[tokio::test]
async fn delete_summary_by_author_or_hod() {
    // Arrange
    let world = seeded_world().await;
    let slot_id = taught_slot(&world).await;
    let mut ids = Vec::new();
    for day in ["2026-01-08", "2026-01-15"] {
        let summary = world
            .campus
            .save_summary(&world.faculty, &slot_id, day, &draft("Heaps"))
            .await
            .unwrap();
        ids.push(summary.id);
    }
    world.invalidations.clear();

    // Act
    let denied = world
        .campus
        .delete_summary(&world.viewer, &ids[0])
        .await
        .unwrap_err();
    world
        .campus
        .delete_summary(&world.faculty, &ids[0])
        .await
        .unwrap();
    world.campus.delete_summary(&world.hod, &ids[1]).await.unwrap();
    let again = world
        .campus
        .delete_summary(&world.hod, &ids[1])
        .await
        .unwrap_err();

    // Assert
    assert_eq!(
        denied,
        CampusError::Forbidden("Only the author can delete this summary".to_string())
    );
    assert_eq!(again, CampusError::NotFound("Summary not found".to_string()));
    assert_eq!(
        world.invalidations.routes(),
        vec![ROUTE_LECTURE_SUMMARIES, ROUTE_LECTURE_SUMMARIES]
    );
}

#[tokio::test]
async fn deleting_slot_removes_its_summaries() {
    // Arrange
    let world = seeded_world().await;
    let slot_id = taught_slot(&world).await;
    let summary = world
        .campus
        .save_summary(&world.faculty, &slot_id, "2026-01-15", &draft("Heaps"))
        .await
        .unwrap();

    // Act
    world.campus.delete_slot(&world.hod, &slot_id).await.unwrap();

    // Assert
    let err = world
        .campus
        .delete_summary(&world.hod, &summary.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CampusError::NotFound(_)));
}
