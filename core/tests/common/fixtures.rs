// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;

use jiff::civil::{Date, date};
use plaps_core::{Config, EventForm};

/// Creates a test configuration storing state in `state_dir`.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
    }
}

/// Creates a form with the given title on `date`, default times.
#[must_use]
pub fn test_form(date: Date, title: &str) -> EventForm {
    let mut form = EventForm::new(date);
    form.set_title(title);
    form
}

/// The "Standup" event on 2025-03-10, 09:00 to 10:00.
#[must_use]
pub fn standup_form() -> EventForm {
    test_form(date(2025, 3, 10), "Standup")
}
