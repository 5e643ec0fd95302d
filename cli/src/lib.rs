// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of Plaps: calendar views, event editing and place search.

mod arg;
mod cli;
mod cmd_calendar;
mod cmd_event;
mod cmd_place;
mod config;
mod event_formatter;
mod grid_formatter;
mod place_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
