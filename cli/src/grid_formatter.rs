// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{ColoredString, Colorize};
use plaps_core::{DayCell, GridCell, MonthGrid, WeekStrip};

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Marker after a day number that has events.
const EVENT_MARKER: char = '•';

/// Renders a month grid, one week per line.
#[derive(Debug)]
pub struct MonthGridFormatter<'a> {
    grid: &'a MonthGrid,
}

impl<'a> MonthGridFormatter<'a> {
    pub fn new(grid: &'a MonthGrid) -> Self {
        Self { grid }
    }
}

impl fmt::Display for MonthGridFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.grid.month();
        let name = usize::try_from(month.month() - 1)
            .ok()
            .and_then(|i| MONTH_NAMES.get(i))
            .copied()
            .unwrap_or_default();
        writeln!(f, "{}", format!("{name} {}", month.year()).bold())?;
        write_header(f)?;

        for row in self.grid.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    GridCell::Blank => "   ".to_string(),
                    GridCell::Day(day) => stylize(day).to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// Renders a week strip on one line.
#[derive(Debug)]
pub struct WeekStripFormatter<'a> {
    strip: &'a WeekStrip,
}

impl<'a> WeekStripFormatter<'a> {
    pub fn new(strip: &'a WeekStrip) -> Self {
        Self { strip }
    }
}

impl fmt::Display for WeekStripFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.strip.start();
        writeln!(
            f,
            "{}",
            format!("Week of {}", start.strftime("%Y-%m-%d")).bold()
        )?;
        write_header(f)?;
        let cells: Vec<String> = self
            .strip
            .cells()
            .iter()
            .map(|day| stylize(day).to_string())
            .collect();
        writeln!(f, "{}", cells.join(" ").trim_end())
    }
}

fn write_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let header: Vec<String> = WEEKDAY_HEADER
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = format!("{name} ");
            match i {
                0 => name.red().to_string(),
                6 => name.blue().to_string(),
                _ => name,
            }
        })
        .collect();
    writeln!(f, "{}", header.join(" ").trim_end())
}

fn stylize(day: &DayCell) -> ColoredString {
    let marker = if day.has_event { EVENT_MARKER } else { ' ' };
    let text = format!("{:>2}{marker}", day.date.day());

    let mut styled = if day.is_sunday() {
        text.red()
    } else if day.is_saturday() {
        text.blue()
    } else {
        text.normal()
    };
    if day.is_today {
        styled = styled.bold().underline();
    }
    if day.is_selected {
        styled = styled.reversed();
    }
    styled
}
