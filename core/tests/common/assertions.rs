// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use jiff::civil::Date;
use plaps_core::MonthGrid;

/// Asserts that the grid cell of `date` carries an event marker.
///
/// # Panics
///
/// Panics if the date is not in the grid or has no marker.
pub fn assert_has_event(grid: &MonthGrid, date: Date) {
    let cell = grid
        .cell(date)
        .unwrap_or_else(|| panic!("{date} is not in the grid"));
    assert!(cell.has_event, "Expected an event marker on {date}");
}

/// Asserts that the grid cell of `date` has no event marker.
///
/// # Panics
///
/// Panics if the date is not in the grid or has a marker.
pub fn assert_no_event(grid: &MonthGrid, date: Date) {
    let cell = grid
        .cell(date)
        .unwrap_or_else(|| panic!("{date} is not in the grid"));
    assert!(!cell.has_event, "Expected no event marker on {date}");
}
