// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Observable event store over the local database.

use std::sync::Arc;

use jiff::civil::Date;
use tokio::sync::{Mutex, watch};

use crate::localdb::Events;
use crate::{Event, EventId, query};

/// An immutable view of every stored event, in insertion order.
pub type Snapshot = Arc<Vec<Event>>;

/// Failures of the event store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database rejected the operation.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Single-writer event store publishing a fresh snapshot after every mutation.
///
/// Cloning yields another handle to the same store.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Events,
    tx: Arc<watch::Sender<Snapshot>>,
    write: Arc<Mutex<()>>,
}

impl EventStore {
    /// Creates a store over the given table, loading the initial snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial load fails. Rows that cannot be decoded are
    /// skipped with a warning.
    pub async fn new(events: Events) -> Result<Self, StoreError> {
        let initial = events.list_all().await?;
        tracing::debug!(count = initial.len(), "loaded initial event snapshot");
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Ok(Self {
            events,
            tx: Arc::new(tx),
            write: Arc::new(Mutex::new(())),
        })
    }

    /// Subscribes to the full collection.
    ///
    /// The subscription starts at the current snapshot and ends when dropped.
    #[must_use]
    pub fn observe_all(&self) -> EventSubscription {
        EventSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// The latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Inserts a new event or replaces the one with the same id.
    ///
    /// Returns the event as stored, with its id assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails; no snapshot is published then.
    /// Once the write succeeds the call succeeds and observers see the event.
    #[tracing::instrument(skip_all, fields(id = ?event.id))]
    pub async fn upsert(&self, mut event: Event) -> Result<Event, StoreError> {
        let _guard = self.write.lock().await;
        let id = self.events.upsert(&event).await?;
        event.id = Some(id);
        tracing::info!(%id, "event saved");

        // the row is committed; the snapshot follows from the write itself
        self.tx.send_modify(|snapshot| {
            let events = Arc::make_mut(snapshot);
            match events.iter_mut().find(|e| e.id == Some(id)) {
                Some(slot) => slot.clone_from(&event),
                None => {
                    let at = events.partition_point(|e| e.id < Some(id));
                    events.insert(at, event.clone());
                }
            }
        });
        Ok(event)
    }

    /// Deletes an event, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: EventId) -> Result<bool, StoreError> {
        let _guard = self.write.lock().await;
        let removed = self.events.delete(id).await?;
        if removed {
            tracing::info!(%id, "event deleted");
            self.tx.send_modify(|snapshot| {
                Arc::make_mut(snapshot).retain(|e| e.id != Some(id));
            });
        } else {
            tracing::debug!(%id, "no event to delete");
        }
        Ok(removed)
    }

    /// Looks up an event in the latest snapshot.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<Event> {
        self.tx
            .borrow()
            .iter()
            .find(|e| e.id == Some(id))
            .cloned()
    }

    /// The events on `date` from the latest snapshot, in store order.
    #[must_use]
    pub fn events_on(&self, date: Date) -> Vec<Event> {
        query::events_on(&self.tx.borrow(), date)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// A live view of the store, unsubscribed on drop.
#[derive(Debug)]
pub struct EventSubscription {
    rx: watch::Receiver<Snapshot>,
}

impl EventSubscription {
    /// The latest snapshot, marking it seen.
    pub fn current(&mut self) -> Snapshot {
        self.rx.borrow_and_update().clone()
    }

    /// Waits for a snapshot newer than the last one seen.
    ///
    /// Intermediate snapshots may be skipped. Returns `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Snapshot> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
