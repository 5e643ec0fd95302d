// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! These tests validate complete workflows from event creation through
//! modification and deletion, including what observers of the store see.

use std::time::Duration;

use jiff::civil::{date, time};
use plaps_core::{EventColor, FormError, Place, Plaps};

use crate::common::{setup_temp_dirs, standup_form, test_config, test_form};

#[tokio::test]
async fn event_lifecycle_create_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let plaps = Plaps::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let mut sub = plaps.store().observe_all();
    assert!(sub.current().is_empty());

    // Act
    let event = plaps.save(&standup_form()).await.unwrap();

    // Assert - event stored with an id
    let id = event.id.expect("Saved event should have an id");
    assert_eq!(event.title, "Standup");
    assert_eq!(event.start_time, time(9, 0, 0, 0));
    assert_eq!(event.end_time, time(10, 0, 0, 0));

    // Assert - observers see the new snapshot
    let snapshot = tokio::time::timeout(Duration::from_secs(1), sub.changed())
        .await
        .expect("Timed out waiting for snapshot")
        .expect("Store dropped");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, Some(id));

    // Assert - database file exists
    assert!(temp_dirs.state_dir.join("plaps.db").exists());
}

#[tokio::test]
async fn event_lifecycle_update_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let plaps = Plaps::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let event = plaps.save(&standup_form()).await.unwrap();
    let id = event.id.unwrap();

    // Act - edit through the form, twice
    let mut form = plaps.edit_form(id).unwrap();
    form.set_title("Standup (moved)");
    form.set_start_time(time(10, 30, 0, 0)).unwrap();
    form.set_color(EventColor::Purple);
    plaps.save(&form).await.unwrap();

    let mut form = plaps.edit_form(id).unwrap();
    form.set_notes("bring coffee");
    let updated = plaps.save(&form).await.unwrap();

    // Assert - one record per id, latest values
    let snapshot = plaps.store().snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.title, "Standup (moved)");
    assert_eq!(updated.start_time, time(10, 30, 0, 0));
    assert_eq!(updated.end_time, time(11, 30, 0, 0));
    assert_eq!(updated.color(), EventColor::Purple);
    assert_eq!(updated.notes, "bring coffee");
    assert_eq!(plaps.get_event(id), Some(updated));
}

#[tokio::test]
async fn event_lifecycle_delete_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let plaps = Plaps::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let id = plaps.save(&standup_form()).await.unwrap().id.unwrap();
    let mut sub = plaps.store().observe_all();
    sub.current();

    // Act
    let removed = plaps.delete_event(id).await.unwrap();

    // Assert
    assert!(removed);
    let snapshot = sub.changed().await.expect("Store dropped");
    assert!(snapshot.is_empty());
    assert!(plaps.get_event(id).is_none());
    assert!(plaps.edit_form(id).is_err());
    assert!(!plaps.delete_event(id).await.unwrap());
}

#[tokio::test]
async fn event_lifecycle_blank_title_rejected() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let plaps = Plaps::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let form = test_form(date(2025, 3, 10), "   ");

    // Act
    let err = plaps.save(&form).await.unwrap_err();

    // Assert - a notice, and nothing stored
    assert_eq!(
        err.downcast_ref::<FormError>(),
        Some(&FormError::BlankTitle)
    );
    assert!(plaps.store().snapshot().is_empty());
    assert!(
        plaps
            .list_events_by_date(date(2025, 3, 10))
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn event_lifecycle_end_before_start_rejected() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let plaps = Plaps::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let mut form = standup_form();

    // Act
    let edit = form.set_end_time(time(8, 0, 0, 0));
    let saved = plaps.save(&form).await.unwrap();

    // Assert - the bad edit is refused and the form stays valid
    assert_eq!(edit, Err(FormError::EndNotAfterStart));
    assert_eq!(saved.end_time, time(10, 0, 0, 0));
}

#[tokio::test]
async fn event_lifecycle_place_coordinates_persist() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let plaps = Plaps::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let mut form = test_form(date(2025, 3, 12), "Trip");
    form.apply_place(&Place {
        id: "8120498".to_string(),
        place_name: "Seoul Station".to_string(),
        address_name: "Bongnae-dong 2-ga 122".to_string(),
        road_address_name: "Hangang-daero 405".to_string(),
        x: "126.970606917394".to_string(),
        y: "37.5546788388674".to_string(),
    });

    // Act
    let id = plaps.save(&form).await.unwrap().id.unwrap();
    plaps.clone().close().await.unwrap();
    let reopened = Plaps::new(test_config(&temp_dirs.state_dir)).await.unwrap();

    // Assert - the record survives a restart
    let event = reopened.get_event(id).expect("Event not found after reopen");
    assert_eq!(event.location, "Seoul Station");
    assert_eq!(event.latitude, Some(37.554_678_838_867_4));
    assert_eq!(event.longitude, Some(126.970_606_917_394));
    assert_eq!(event.road_address.as_deref(), Some("Hangang-daero 405"));
}
