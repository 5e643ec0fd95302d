// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Derives the events relevant to a single day, week or month view.

use std::collections::BTreeSet;

use jiff::civil::Date;

use crate::{Event, YearMonth};

/// Returns the events on `date`, in collection order.
pub fn events_on(events: &[Event], date: Date) -> Vec<&Event> {
    events.iter().filter(|e| e.date == date).collect()
}

/// Whether at least one event falls on `date`.
pub fn has_event_on(events: &[Event], date: Date) -> bool {
    events.iter().any(|e| e.date == date)
}

/// The set of dates carrying at least one event.
///
/// Built once per snapshot, so that rendering a grid checks each cell in constant time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDates(BTreeSet<Date>);

impl EventDates {
    /// Collects the dates of all events.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a Event>) -> Self {
        Self(events.into_iter().map(|e| e.date).collect())
    }

    /// Collects the dates of the events falling in `month`.
    pub fn in_month(events: &[Event], month: YearMonth) -> Self {
        Self::from_events(events.iter().filter(|e| month.contains(e.date)))
    }

    /// Whether `date` has at least one event.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    /// Number of distinct dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no date has an event.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }
}
