// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Opening, reopening and closing a campus on disk.

use campus_core::{Campus, Config, DB_FILENAME, Role, UserDraft};
use jiff::civil::date;

use crate::common::setup_temp_dirs;

fn config_in(state_dir: &std::path::Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        ..Default::default()
    }
}

#[tokio::test]
async fn campus_creates_database_in_state_dir() {
    // Arrange
    let dirs = setup_temp_dirs().await.unwrap();
    let state_dir = dirs.state_dir.join("nested");

    // Act
    let campus = Campus::new(config_in(&state_dir)).await.unwrap();

    // Assert
    assert!(state_dir.join(DB_FILENAME).exists());
    assert_eq!(campus.config().database_path(), Some(state_dir.join(DB_FILENAME)));
    campus.close().await.unwrap();
}

#[tokio::test]
async fn campus_data_survives_reopen() {
    // Arrange
    let dirs = setup_temp_dirs().await.unwrap();
    let campus = Campus::new(config_in(&dirs.state_dir)).await.unwrap();
    campus
        .create_user(&UserDraft {
            name: "Head".to_string(),
            email: "hod@campus.edu".to_string(),
            role: Role::Hod,
        })
        .await
        .unwrap();
    campus.close().await.unwrap();

    // Act
    let reopened = Campus::new(config_in(&dirs.state_dir)).await.unwrap();
    let actor = reopened.session(Some("hod@campus.edu")).await.unwrap();

    // Assert
    assert_eq!(actor.role, Role::Hod);
    reopened.close().await.unwrap();
}

#[tokio::test]
async fn campus_today_can_be_pinned_and_refreshed() {
    // Arrange
    let pinned = date(2026, 1, 15);
    let campus = Campus::new(Config::in_memory())
        .await
        .unwrap()
        .with_today(pinned);
    assert_eq!(campus.today(), pinned);

    // Act
    let mut campus = campus;
    campus.refresh_today();

    // Assert
    assert_eq!(campus.today(), campus_core::today_utc());
    assert_eq!(campus.config().database_path(), None);
}
