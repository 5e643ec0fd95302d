// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.

use plaps_core::{Config, Plaps};

use crate::common::{setup_temp_dirs, standup_form, test_config};

#[tokio::test]
async fn config_state_dir_created_when_missing() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let nested = temp_dirs.state_dir.join("nested").join("plaps");

    // Act
    let plaps = Plaps::new(test_config(&nested)).await.unwrap();
    plaps.save(&standup_form()).await.unwrap();

    // Assert
    assert!(nested.is_dir());
    assert!(nested.join("plaps.db").exists());
    assert_eq!(plaps.config().state_dir.as_deref(), Some(nested.as_path()));
}

#[tokio::test]
async fn config_from_toml() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let toml = format!(
        r#"state_dir = "{}""#,
        temp_dirs.state_dir.to_str().unwrap().replace('\\', "/")
    );

    // Act
    let config: Config = toml::from_str(&toml).unwrap();
    let plaps = Plaps::new(config).await.unwrap();

    // Assert
    assert_eq!(
        plaps.config().db_path(),
        Some(temp_dirs.state_dir.join("plaps.db"))
    );
}

#[tokio::test]
async fn config_separate_state_dirs_are_isolated() {
    // Arrange
    let first_dirs = setup_temp_dirs().await.unwrap();
    let second_dirs = setup_temp_dirs().await.unwrap();
    let first = Plaps::new(test_config(&first_dirs.state_dir)).await.unwrap();
    let second = Plaps::new(test_config(&second_dirs.state_dir)).await.unwrap();

    // Act
    first.save(&standup_form()).await.unwrap();

    // Assert
    assert_eq!(first.store().snapshot().len(), 1);
    assert!(second.store().snapshot().is_empty());
}
