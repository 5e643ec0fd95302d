// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the Plaps calendar planner: events, their store, calendar views, the edit form,
//! place lookups and the navigation hand-off.

mod config;
mod datetime;
mod event;
mod form;
mod grid;
mod localdb;
mod navigation;
mod places;
mod plaps;
mod query;
mod store;

pub use crate::config::{APP_NAME, Config, expand_path, get_config_dir};
pub use crate::datetime::YearMonth;
pub use crate::event::{DEFAULT_DESTINATION_NAME, Destination, Event, EventColor, EventId};
pub use crate::form::{
    DEFAULT_END_TIME, DEFAULT_START_TIME, EventForm, FormError, LATEST_END_TIME,
};
pub use crate::grid::{DAYS_PER_WEEK, DayCell, GridCell, MonthGrid, WeekStrip, week_start};
pub use crate::localdb::{Events, LocalDb};
pub use crate::navigation::{
    GuidanceEvent, GuidanceHandler, GuidanceSession, KatecPoint, NaviAdapter, NaviEngine,
    NaviError, Poi, START_POI_NAME, VendorError,
};
pub use crate::places::{PlaceFinder, PlaceResults, SearchNotice};
pub use crate::plaps::Plaps;
pub use crate::query::{EventDates, events_on, has_event_on};
pub use crate::store::{EventStore, EventSubscription, Snapshot, StoreError};

pub use plaps_local::{Coord, CoordSystem, LocalApiClient, LocalApiConfig, LocalApiError, Place};
