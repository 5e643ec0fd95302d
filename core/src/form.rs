// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::{Date, Time, time};
use plaps_local::Place;

use crate::{Event, EventColor, EventId};

/// Default start time of a new event.
pub const DEFAULT_START_TIME: Time = time(9, 0, 0, 0);

/// Default end time of a new event.
pub const DEFAULT_END_TIME: Time = time(10, 0, 0, 0);

/// Latest time an event may end on its day.
pub const LATEST_END_TIME: Time = time(23, 59, 0, 0);

/// Validation failures of the edit form, shown to the user as notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The end time is not after the start time.
    #[error("End time must be after start time")]
    EndNotAfterStart,

    /// The start time leaves no room for an end time on the same day.
    #[error("Start time must be before 23:59")]
    StartTooLate,

    /// The title is empty or whitespace.
    #[error("Please enter a title")]
    BlankTitle,
}

/// Transient editing state of one event.
///
/// Keeps `start_time < end_time` at all times; see [`EventForm::set_start_time`] and
/// [`EventForm::set_end_time`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    id: Option<EventId>,
    date: Date,
    title: String,
    start_time: Time,
    end_time: Time,
    location: String,
    coordinates: Option<(f64, f64)>,
    road_address: Option<String>,
    notes: String,
    color: EventColor,
}

impl EventForm {
    /// A blank form for a new event on `date`.
    #[must_use]
    pub fn new(date: Date) -> Self {
        Self {
            id: None,
            date,
            title: String::new(),
            start_time: DEFAULT_START_TIME,
            end_time: DEFAULT_END_TIME,
            location: String::new(),
            coordinates: None,
            road_address: None,
            notes: String::new(),
            color: EventColor::default(),
        }
    }

    /// A form prefilled from a stored event.
    #[must_use]
    pub fn edit(event: &Event) -> Self {
        Self {
            id: event.id,
            date: event.date,
            title: event.title.clone(),
            start_time: event.start_time,
            end_time: event.end_time,
            location: event.location.clone(),
            coordinates: event.coordinates(),
            road_address: event.road_address.clone(),
            notes: event.notes.clone(),
            color: event.color(),
        }
    }

    /// Id of the edited event, `None` for a new one.
    #[must_use]
    pub fn id(&self) -> Option<EventId> {
        self.id
    }

    /// The date being edited.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// The current title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The current start time.
    #[must_use]
    pub fn start_time(&self) -> Time {
        self.start_time
    }

    /// The current end time.
    #[must_use]
    pub fn end_time(&self) -> Time {
        self.end_time
    }

    /// The current location text.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The picked `(latitude, longitude)`, if any.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.coordinates
    }

    /// The current color.
    #[must_use]
    pub fn color(&self) -> EventColor {
        self.color
    }

    /// Moves the event to another date.
    pub fn set_date(&mut self, date: Date) {
        self.date = date;
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Picks a palette color.
    pub fn set_color(&mut self, color: EventColor) {
        self.color = color;
    }

    /// Replaces the location text, keeping any picked coordinates.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Sets the start time.
    ///
    /// A start at or past the end pushes the end to one hour later, capped at 23:59.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::StartTooLate`] and leaves the form unchanged if `start` is at or
    /// after 23:59.
    pub fn set_start_time(&mut self, start: Time) -> Result<(), FormError> {
        if start >= LATEST_END_TIME {
            return Err(FormError::StartTooLate);
        }

        if start >= self.end_time {
            self.end_time = start
                .checked_add(1.hour())
                .map_or(LATEST_END_TIME, |end| end.min(LATEST_END_TIME));
            tracing::debug!(%start, end = %self.end_time, "end time pushed after start time");
        }
        self.start_time = start;
        Ok(())
    }

    /// Sets the end time.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::EndNotAfterStart`] and leaves the form unchanged if `end` is at
    /// or before the start time.
    pub fn set_end_time(&mut self, end: Time) -> Result<(), FormError> {
        if end <= self.start_time {
            return Err(FormError::EndNotAfterStart);
        }
        self.end_time = end;
        Ok(())
    }

    /// Fills the location from a search result.
    ///
    /// Coordinates are taken only when both parse to finite, non-zero values; otherwise
    /// the previous coordinates are cleared, since they belonged to another place.
    pub fn apply_place(&mut self, place: &Place) {
        self.location.clone_from(&place.place_name);
        self.coordinates = place
            .coordinates()
            .filter(|(lat, lon)| lat.is_finite() && lon.is_finite())
            .filter(|(lat, lon)| *lat != 0.0 && *lon != 0.0);
        self.road_address = Some(place.road_address_name.trim())
            .filter(|a| !a.is_empty())
            .map(ToString::to_string);
    }

    /// Removes the location and its coordinates.
    pub fn clear_location(&mut self) {
        self.location.clear();
        self.coordinates = None;
        self.road_address = None;
    }

    /// Validates the form and produces the event to store.
    ///
    /// # Errors
    ///
    /// Returns the first failed check: the time range, then the title.
    pub fn submit(&self) -> Result<Event, FormError> {
        if self.end_time <= self.start_time {
            return Err(FormError::EndNotAfterStart);
        }

        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::BlankTitle);
        }

        let location = self.location.trim().to_string();
        let (coordinates, road_address) = if location.is_empty() {
            (None, None)
        } else {
            (self.coordinates, self.road_address.clone())
        };

        Ok(Event {
            id: self.id,
            date: self.date,
            title: title.to_string(),
            start_time: self.start_time,
            end_time: self.end_time,
            location,
            latitude: coordinates.map(|(lat, _)| lat),
            longitude: coordinates.map(|(_, lon)| lon),
            road_address,
            notes: self.notes.clone(),
            color_index: self.color.index(),
        })
    }
}
