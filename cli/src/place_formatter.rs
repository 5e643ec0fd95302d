// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use plaps_core::Place;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::OutputFormat;

const COLUMNS: [PlaceColumn; 4] = [
    PlaceColumn::Index,
    PlaceColumn::Name,
    PlaceColumn::Address,
    PlaceColumn::Coordinates,
];

#[derive(Debug)]
pub struct PlaceFormatter {
    format: OutputFormat,
}

impl PlaceFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format<'a>(&'a self, places: &'a [Place]) -> Display<'a> {
        let rows = places.iter().enumerate().map(|(i, p)| (i + 1, p)).collect();
        Display {
            places,
            rows,
            format: self.format,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    places: &'a [Place],
    rows: Vec<(usize, &'a Place)>,
    format: OutputFormat,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.places).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => write!(f, "{}", Table::new(&COLUMNS, &self.rows).with_header(true)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaceColumn {
    Index,
    Name,
    Address,
    Coordinates,
}

impl<'p> TableColumn<(usize, &'p Place)> for PlaceColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            PlaceColumn::Index => "#",
            PlaceColumn::Name => "Name",
            PlaceColumn::Address => "Address",
            PlaceColumn::Coordinates => "Lat,Lon",
        }
        .into()
    }

    fn format<'a>(&self, (index, place): &'a (usize, &'p Place)) -> Cow<'a, str> {
        match self {
            PlaceColumn::Index => index.to_string().into(),
            PlaceColumn::Name => place.place_name.as_str().into(),
            // Road address first, the lot address when a place has none
            PlaceColumn::Address => {
                if place.road_address_name.is_empty() {
                    place.address_name.as_str().into()
                } else {
                    place.road_address_name.as_str().into()
                }
            }
            PlaceColumn::Coordinates => place
                .coordinates()
                .map_or_else(|| "-".to_string(), |(lat, lon)| format!("{lat:.5},{lon:.5}"))
                .into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            PlaceColumn::Index => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
