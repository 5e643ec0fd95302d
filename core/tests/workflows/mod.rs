// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the plaps-core crate.
//!
//! These tests drive the application core the way a front end does: through the edit
//! form, the observable store and the calendar views, over a real database file.

mod calendar_views;
mod config_driven;
mod event_lifecycle;
