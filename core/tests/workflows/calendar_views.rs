// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar view workflow tests: month grid markers, week strips and day lists.

use jiff::civil::date;
use plaps_core::{GridCell, Plaps, YearMonth};

use crate::common::{
    assert_has_event, assert_no_event, setup_temp_dirs, standup_form, test_config, test_form,
};

#[tokio::test]
async fn calendar_month_grid_marks_saved_event() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let plaps = Plaps::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    plaps.save(&standup_form()).await.unwrap();

    // Act
    let march = YearMonth::new(2025, 3).unwrap();
    let grid = plaps.month_grid(march, date(2025, 3, 10));

    // Assert
    assert_has_event(&grid, date(2025, 3, 10));
    assert_no_event(&grid, date(2025, 3, 9));
    assert_no_event(&grid, date(2025, 3, 11));
    assert!(grid.cell(date(2025, 3, 10)).unwrap().is_selected);
    assert_eq!(grid.leading_blanks(), 6);
    assert_eq!(grid.cells().len(), 42);
    assert_eq!(grid.cells()[0], GridCell::Blank);
}

#[tokio::test]
async fn calendar_marker_follows_deletion() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let plaps = Plaps::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let id = plaps.save(&standup_form()).await.unwrap().id.unwrap();
    let march = YearMonth::new(2025, 3).unwrap();

    // Act
    plaps.delete_event(id).await.unwrap();
    let grid = plaps.month_grid(march, date(2025, 3, 1));

    // Assert
    assert_no_event(&grid, date(2025, 3, 10));
}

#[tokio::test]
async fn calendar_week_strip_and_day_list() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let plaps = Plaps::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    for (d, title) in [
        (date(2025, 3, 10), "Standup"),
        (date(2025, 3, 10), "Lunch"),
        (date(2025, 3, 14), "Review"),
        (date(2025, 3, 17), "Next week"),
    ] {
        plaps.save(&test_form(d, title)).await.unwrap();
    }

    // Act
    let strip = plaps.week_strip(date(2025, 3, 12)).unwrap();
    let on_tenth = plaps.events_on(date(2025, 3, 10));
    let from_db = plaps.list_events_by_date(date(2025, 3, 10)).await.unwrap();

    // Assert - week runs Sunday 9th to Saturday 15th
    assert_eq!(strip.start(), date(2025, 3, 9));
    let marked: Vec<_> = strip
        .cells()
        .iter()
        .filter(|c| c.has_event)
        .map(|c| c.date)
        .collect();
    assert_eq!(marked, [date(2025, 3, 10), date(2025, 3, 14)]);

    // Assert - day list keeps store order
    let titles: Vec<_> = on_tenth.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Standup", "Lunch"]);
    assert_eq!(from_db, on_tenth);
}
