// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use sqlx::SqlitePool;

use crate::datetime::{format_date, format_time, parse_date, parse_time};
use crate::{Event, EventId};

const COLUMNS: &str = "\
id, date, title, start_time, end_time, location, notes, color_index, latitude, longitude, road_address";

#[derive(Debug, Clone)]
pub struct Events {
    pool: SqlitePool,
}

impl Events {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the event, or replaces the stored one with the same id.
    /// Returns the id of the stored row.
    pub async fn upsert(&self, event: &Event) -> Result<EventId, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO events (id, date, title, start_time, end_time, location, notes, color_index, latitude, longitude, road_address)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
ON CONFLICT(id) DO UPDATE SET
    date         = excluded.date,
    title        = excluded.title,
    start_time   = excluded.start_time,
    end_time     = excluded.end_time,
    location     = excluded.location,
    notes        = excluded.notes,
    color_index  = excluded.color_index,
    latitude     = excluded.latitude,
    longitude    = excluded.longitude,
    road_address = excluded.road_address
RETURNING id;
";

        let record = EventRecord::from_event(event);
        let id: i64 = sqlx::query_scalar(SQL)
            .bind(record.id)
            .bind(&record.date)
            .bind(&record.title)
            .bind(&record.start_time)
            .bind(&record.end_time)
            .bind(&record.location)
            .bind(&record.notes)
            .bind(record.color_index)
            .bind(record.latitude)
            .bind(record.longitude)
            .bind(&record.road_address)
            .fetch_one(&self.pool)
            .await?;

        Ok(EventId::new(id))
    }

    pub async fn get(&self, id: EventId) -> Result<Option<Event>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM events WHERE id = ?;");
        let record: Option<EventRecord> = sqlx::query_as(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        record.map(EventRecord::into_event).transpose()
    }

    /// Lists every event in insertion order, skipping rows that cannot be decoded.
    pub async fn list_all(&self) -> Result<Vec<Event>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM events ORDER BY id ASC;");
        let records: Vec<EventRecord> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(decode_all(records))
    }

    /// Lists the events of one date in insertion order, skipping undecodable rows.
    pub async fn list_by_date(&self, date: Date) -> Result<Vec<Event>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM events WHERE date = ? ORDER BY id ASC;");
        let records: Vec<EventRecord> = sqlx::query_as(&sql)
            .bind(format_date(date))
            .fetch_all(&self.pool)
            .await?;
        Ok(decode_all(records))
    }

    /// Deletes by id, returning whether a row was removed.
    pub async fn delete(&self, id: EventId) -> Result<bool, sqlx::Error> {
        const SQL: &str = "DELETE FROM events WHERE id = ?;";

        let result = sqlx::query(SQL)
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn decode_all(records: Vec<EventRecord>) -> Vec<Event> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id;
            match record.into_event() {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!(?id, err = %e, "skipping undecodable event row");
                    None
                }
            }
        })
        .collect()
}

#[derive(Debug, sqlx::FromRow)]
struct EventRecord {
    id: Option<i64>,
    date: String,
    title: String,
    start_time: String,
    end_time: String,
    location: String,
    notes: String,
    color_index: i64,
    latitude: Option<f64>,
    longitude: Option<f64>,
    road_address: Option<String>,
}

impl EventRecord {
    fn from_event(event: &Event) -> Self {
        // a pair with one side missing is not a location
        let (latitude, longitude) = match event.coordinates() {
            Some((lat, lon)) => (Some(lat), Some(lon)),
            None => (None, None),
        };

        Self {
            id: event.id.map(EventId::get),
            date: format_date(event.date),
            title: event.title.clone(),
            start_time: format_time(event.start_time),
            end_time: format_time(event.end_time),
            location: event.location.clone(),
            notes: event.notes.clone(),
            color_index: i64::from(event.color_index),
            latitude,
            longitude,
            road_address: event.road_address.clone(),
        }
    }

    fn into_event(self) -> Result<Event, sqlx::Error> {
        let decode = |e: jiff::Error| sqlx::Error::Decode(Box::new(e));
        Ok(Event {
            id: self.id.map(EventId::new),
            date: parse_date(&self.date).map_err(decode)?,
            title: self.title,
            start_time: parse_time(&self.start_time).map_err(decode)?,
            end_time: parse_time(&self.end_time).map_err(decode)?,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            road_address: self.road_address,
            notes: self.notes,
            color_index: u8::try_from(self.color_index).unwrap_or_default(),
        })
    }
}
