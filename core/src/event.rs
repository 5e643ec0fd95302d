// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;

use jiff::civil::{Date, Time};

/// Identifier of a stored event, assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// Wraps a raw database id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw database id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A scheduled calendar item.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Event {
    /// Database id, `None` until the event is stored.
    pub id: Option<EventId>,

    /// Local wall-clock date.
    pub date: Date,

    /// Display title, never blank once submitted through the form.
    pub title: String,

    /// Start time of day.
    pub start_time: Time,

    /// End time of day, after `start_time`.
    pub end_time: Time,

    /// Free-text place name, empty for none.
    pub location: String,

    /// Latitude of the location, set together with `longitude`.
    pub latitude: Option<f64>,

    /// Longitude of the location, set together with `latitude`.
    pub longitude: Option<f64>,

    /// Road address of the picked place.
    pub road_address: Option<String>,

    /// Free-text notes, empty for none.
    pub notes: String,

    /// Palette index, see [`EventColor`].
    pub color_index: u8,
}

impl Event {
    /// The display color of the event.
    #[must_use]
    pub fn color(&self) -> EventColor {
        EventColor::from_index(self.color_index)
    }

    /// The coordinates as `(latitude, longitude)` if both are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Whether the event has a non-blank location.
    #[must_use]
    pub fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }
}

/// Display color palette of events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EventColor {
    /// `#4A80F0`
    #[default]
    Blue,

    /// `#4CAF50`
    Green,

    /// `#F44336`
    Red,

    /// `#9C27B0`
    Purple,

    /// `#E91E63`
    Pink,
}

impl EventColor {
    /// All colors in palette order.
    pub const ALL: [EventColor; 5] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Red,
        EventColor::Purple,
        EventColor::Pink,
    ];

    /// Looks up a palette index, falling back to the first color when out of range.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .unwrap_or_default()
    }

    /// The palette index.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            EventColor::Blue => 0,
            EventColor::Green => 1,
            EventColor::Red => 2,
            EventColor::Purple => 3,
            EventColor::Pink => 4,
        }
    }

    /// The color as `0xRRGGBB`.
    #[must_use]
    pub fn rgb(self) -> u32 {
        match self {
            EventColor::Blue => 0x4A_80_F0,
            EventColor::Green => 0x4C_AF_50,
            EventColor::Red => 0xF4_43_36,
            EventColor::Purple => 0x9C_27_B0,
            EventColor::Pink => 0xE9_1E_63,
        }
    }

    /// The color as `(r, g, b)` components.
    #[must_use]
    pub fn components(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.rgb().to_be_bytes();
        (r, g, b)
    }
}

impl Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.rgb())
    }
}

/// Default name of a navigation destination without a title.
pub const DEFAULT_DESTINATION_NAME: &str = "Destination";

/// Where to navigate to, handed from an event to the navigation adapter.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Destination {
    /// Display name of the goal.
    pub name: String,
    /// WGS84 latitude, `0.0` when unknown.
    pub latitude: f64,
    /// WGS84 longitude, `0.0` when unknown.
    pub longitude: f64,
}

impl Destination {
    /// Creates a destination, defaulting a blank name.
    #[must_use]
    pub fn new(name: Option<&str>, latitude: f64, longitude: f64) -> Self {
        let name = name
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_DESTINATION_NAME)
            .to_string();
        Self {
            name,
            latitude,
            longitude,
        }
    }

    /// Builds the destination of an event: its location name and coordinates.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self::new(
            Some(&event.location),
            event.latitude.unwrap_or_default(),
            event.longitude.unwrap_or_default(),
        )
    }

    /// Whether the destination carries usable coordinates.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    fn sample_event() -> Event {
        Event {
            id: Some(EventId::new(7)),
            date: date(2025, 3, 10),
            title: "Standup".to_string(),
            start_time: time(9, 0, 0, 0),
            end_time: time(10, 0, 0, 0),
            location: "Seoul Station".to_string(),
            latitude: Some(37.5547),
            longitude: Some(126.9707),
            road_address: None,
            notes: String::new(),
            color_index: 2,
        }
    }

    #[test]
    fn event_color_from_index() {
        assert_eq!(EventColor::from_index(0), EventColor::Blue);
        assert_eq!(EventColor::from_index(4), EventColor::Pink);
        assert_eq!(EventColor::from_index(5), EventColor::Blue);
        assert_eq!(EventColor::from_index(u8::MAX), EventColor::Blue);
    }

    #[test]
    fn event_color_index_roundtrip() {
        for color in EventColor::ALL {
            assert_eq!(EventColor::from_index(color.index()), color);
        }
    }

    #[test]
    fn event_color_rgb_values() {
        assert_eq!(EventColor::Blue.rgb(), 0x4A80F0);
        assert_eq!(EventColor::Green.to_string(), "#4CAF50");
        assert_eq!(EventColor::Red.components(), (0xF4, 0x43, 0x36));
    }

    #[test]
    fn event_color_of_event() {
        let mut event = sample_event();
        assert_eq!(event.color(), EventColor::Red);
        event.color_index = 42;
        assert_eq!(event.color(), EventColor::Blue);
    }

    #[test]
    fn event_id_parse() {
        assert_eq!("42".parse::<EventId>().unwrap(), EventId::new(42));
        assert!("abc".parse::<EventId>().is_err());
    }

    #[test]
    fn destination_from_event() {
        let dest = Destination::from_event(&sample_event());
        assert_eq!(dest.name, "Seoul Station");
        assert!((dest.latitude - 37.5547).abs() < f64::EPSILON);
        assert!(dest.has_coordinates());
    }

    #[test]
    fn destination_defaults_blank_name() {
        let dest = Destination::new(Some("  "), 1.0, 2.0);
        assert_eq!(dest.name, DEFAULT_DESTINATION_NAME);
        let dest = Destination::new(None, 1.0, 2.0);
        assert_eq!(dest.name, DEFAULT_DESTINATION_NAME);
    }

    #[test]
    fn destination_without_coordinates() {
        let mut event = sample_event();
        event.latitude = None;
        event.longitude = None;
        assert!(!Destination::from_event(&event).has_coordinates());
    }
}
