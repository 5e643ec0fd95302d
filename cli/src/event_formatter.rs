// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::Color;
use plaps_core::Event;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, format_date, format_time};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Id,
                EventColumn::Date,
                EventColumn::TimeRange,
                EventColumn::Title,
                EventColumn::Location,
            ],
            format: OutputFormat::Table,
        }
    }

    /// Without the date column, for lists of a single day.
    pub fn without_date(mut self) -> Self {
        self.columns.retain(|c| *c != EventColumn::Date);
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns.push(EventColumn::Coordinates);
            self.columns.push(EventColumn::Notes);
        }
        self
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(&self.formatter.columns, self.events).with_header(true)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    Date,
    TimeRange,
    Title,
    Location,
    Coordinates,
    Notes,
}

impl TableColumn<Event> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id => "ID",
            EventColumn::Date => "Date",
            EventColumn::TimeRange => "Time",
            EventColumn::Title => "Title",
            EventColumn::Location => "Location",
            EventColumn::Coordinates => "Coordinates",
            EventColumn::Notes => "Notes",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        match self {
            EventColumn::Id => event
                .id
                .map_or_else(|| "-".to_string(), |id| id.to_string())
                .into(),
            EventColumn::Date => format_date(event.date).into(),
            EventColumn::TimeRange => format!(
                "{}~{}",
                format_time(event.start_time),
                format_time(event.end_time)
            )
            .into(),
            EventColumn::Title => event.title.as_str().into(),
            EventColumn::Location => event.location.as_str().into(),
            EventColumn::Coordinates => event
                .coordinates()
                .map_or_else(String::new, |(lat, lon)| format!("{lat:.5},{lon:.5}"))
                .into(),
            EventColumn::Notes => event.notes.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, event: &Event) -> Option<Color> {
        match self {
            EventColumn::Title => {
                let (r, g, b) = event.color().components();
                Some(Color::TrueColor { r, g, b })
            }
            _ => None,
        }
    }
}
