// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::Zoned;
use jiff::civil::Date;
use tokio::fs;

use crate::grid::{MonthGrid, WeekStrip};
use crate::localdb::LocalDb;
use crate::store::EventStore;
use crate::{Config, Event, EventForm, EventId, YearMonth};

/// Plaps calendar application core.
#[derive(Debug, Clone)]
pub struct Plaps {
    now: Zoned,
    config: Config,
    db: LocalDb,
    store: EventStore,
}

impl Plaps {
    /// Creates a new Plaps instance with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory or the database cannot be prepared.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        let now = Zoned::now();

        config.normalize()?;
        prepare(&config).await?;

        let db = LocalDb::open(config.db_path().as_deref())
            .await
            .map_err(|e| format!("Failed to initialize db: {e}"))?;

        let store = EventStore::new(db.events.clone())
            .await
            .map_err(|e| format!("Failed to load events: {e}"))?;

        Ok(Self {
            now,
            config,
            db,
            store,
        })
    }

    /// The current time in the Plaps instance.
    #[must_use]
    pub fn now(&self) -> &Zoned {
        &self.now
    }

    /// Today's local date.
    #[must_use]
    pub fn today(&self) -> Date {
        self.now.date()
    }

    /// The normalized configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The event store, to observe or mutate directly.
    #[must_use]
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// A blank form for a new event, on today unless a date is given.
    #[must_use]
    pub fn new_form(&self, date: Option<Date>) -> EventForm {
        EventForm::new(date.unwrap_or_else(|| self.today()))
    }

    /// A form prefilled from the stored event.
    ///
    /// # Errors
    ///
    /// Returns an error if no event has the given id.
    pub fn edit_form(&self, id: EventId) -> Result<EventForm, Box<dyn Error>> {
        let event = self
            .store
            .get(id)
            .ok_or_else(|| format!("Event not found: {id}"))?;
        Ok(EventForm::edit(&event))
    }

    /// Validates the form and stores the event.
    ///
    /// # Errors
    ///
    /// Returns the validation notice, leaving the store untouched, or the database error.
    #[tracing::instrument(skip_all, fields(id = ?form.id()))]
    pub async fn save(&self, form: &EventForm) -> Result<Event, Box<dyn Error>> {
        let event = form.submit()?;
        let event = self
            .store
            .upsert(event)
            .await
            .map_err(|e| format!("Failed to save event: {e}"))?;
        Ok(event)
    }

    /// Get an event by its id.
    #[must_use]
    pub fn get_event(&self, id: EventId) -> Option<Event> {
        self.store.get(id)
    }

    /// Deletes an event, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn delete_event(&self, id: EventId) -> Result<bool, Box<dyn Error>> {
        let removed = self
            .store
            .delete(id)
            .await
            .map_err(|e| format!("Failed to delete event: {e}"))?;
        Ok(removed)
    }

    /// The events on `date`, in store order.
    #[must_use]
    pub fn events_on(&self, date: Date) -> Vec<Event> {
        self.store.events_on(date)
    }

    /// The events on `date`, read directly from the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_events_by_date(&self, date: Date) -> Result<Vec<Event>, Box<dyn Error>> {
        let events = self
            .db
            .events
            .list_by_date(date)
            .await
            .map_err(|e| format!("Failed to list events: {e}"))?;
        Ok(events)
    }

    /// The grid of `month` with today and `selected` tagged.
    #[must_use]
    pub fn month_grid(&self, month: YearMonth, selected: Date) -> MonthGrid {
        MonthGrid::build(month, self.today(), selected, &self.store.snapshot())
    }

    /// The week strip containing `selected`.
    ///
    /// # Errors
    ///
    /// Returns an error if the week is out of the supported date range.
    pub fn week_strip(&self, selected: Date) -> Result<WeekStrip, Box<dyn Error>> {
        let strip = WeekStrip::containing(selected, self.today(), selected, &self.store.snapshot())?;
        Ok(strip)
    }

    /// Closes the database pool. Every save is already committed.
    ///
    /// # Errors
    ///
    /// Returns an error if closing the database fails.
    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.db.close().await
    }
}

async fn prepare(config: &Config) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = &config.state_dir {
        tracing::debug!(path = %parent.display(), "ensuring state directory exists");
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}
