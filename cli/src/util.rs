// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::ToSpan;
use jiff::civil::{Date, Time};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a date: `YYYY-MM-DD`, `today`, `tomorrow` or `yesterday`.
pub fn parse_date(today: Date, s: &str) -> Result<Date, Box<dyn Error>> {
    let s = s.trim();
    let date = match s.to_ascii_lowercase().as_str() {
        "today" => today,
        "tomorrow" => today.checked_add(1.day())?,
        "yesterday" => today.checked_sub(1.day())?,
        _ => Date::strptime("%Y-%m-%d", s)
            .map_err(|_| format!("Invalid date: {s}. Expected format: YYYY-MM-DD"))?,
    };
    Ok(date)
}

/// Parses a time of day: `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<Time, Box<dyn Error>> {
    let s = s.trim();
    Time::strptime("%H:%M", s)
        .or_else(|_| Time::strptime("%H:%M:%S", s))
        .map_err(|_| format!("Invalid time: {s}. Expected format: HH:MM").into())
}

pub fn format_time(time: Time) -> String {
    time.strftime("%H:%M").to_string()
}

pub fn format_date(date: Date) -> String {
    date.strftime("%Y-%m-%d").to_string()
}
