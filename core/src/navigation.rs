// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Turn-by-turn navigation to an event location through a vendor guidance engine.
//!
//! The engine itself is external; [`NaviEngine`] is the narrow seam it is driven through,
//! and every vendor callback is relayed as one [`GuidanceEvent`] to a single
//! [`GuidanceHandler`].

use std::fmt;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::Destination;

/// Name of the start POI of every trip.
pub const START_POI_NAME: &str = "Current location";

/// An error code reported by the vendor engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorError {
    /// Vendor-specific code.
    pub code: String,
}

impl VendorError {
    /// Wraps a vendor code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl fmt::Display for VendorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error code {}", self.code)
    }
}

/// A point in the vendor's KATEC projection, truncated to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KatecPoint {
    /// Easting.
    pub x: i32,
    /// Northing.
    pub y: i32,
}

impl KatecPoint {
    /// Truncates projected coordinates toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncate(x: f64, y: f64) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
        }
    }
}

/// A named point of a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poi {
    /// Display name.
    pub name: String,
    /// Location.
    pub point: KatecPoint,
}

/// Callbacks of a running guidance session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuidanceEvent {
    /// Guidance has started.
    Started,
    /// The engine is checking whether the route should change.
    CheckingRouteChange,
    /// The indoor route was updated.
    IndoorRouteUpdated,
    /// The route set was updated.
    RoutesUpdated,
    /// The driver left the route.
    OutOfRoute,
    /// A new route replaced the old one.
    RouteChanged,
    /// A route check kept the current route.
    RouteUnchanged,
    /// A route check failed and kept the current route.
    RouteUnchangedWithError {
        /// Vendor error code.
        code: String,
    },
    /// The current position moved.
    LocationUpdated {
        /// Current position.
        position: KatecPoint,
    },
    /// The next maneuver changed.
    RouteGuideUpdated,
    /// Nearby safety points changed.
    SafetiesUpdated,
    /// The active safety guide changed.
    SafetyGuideUpdated,
    /// Traffic signal information changed.
    CitsGuideUpdated,
    /// A voice guide is about to play.
    VoiceGuideWillPlay,
    /// A voice guide finished playing.
    VoiceGuideFinished,
    /// Guidance has ended; no further events follow.
    Ended,
}

/// Receives every guidance callback, in order.
pub trait GuidanceHandler {
    /// Handles one callback.
    fn on_event(&mut self, event: &GuidanceEvent);
}

impl<F: FnMut(&GuidanceEvent)> GuidanceHandler for F {
    fn on_event(&mut self, event: &GuidanceEvent) {
        self(event);
    }
}

/// The vendor navigation engine.
#[async_trait]
pub trait NaviEngine: Send + Sync {
    /// Handle of a computed trip.
    type Trip: Send;

    /// Ensures location permission, asking the user if needed.
    async fn location_permission(&self) -> bool;

    /// Authenticates the engine with the app key.
    async fn authenticate(&self) -> Result<(), VendorError>;

    /// The most recent GPS fix, already in KATEC.
    async fn recent_position(&self) -> Option<KatecPoint>;

    /// Projects a WGS84 longitude/latitude pair into KATEC.
    fn wgs84_to_katec(&self, longitude: f64, latitude: f64) -> (f64, f64);

    /// Computes a trip between two points.
    async fn make_trip(&self, start: &Poi, goal: &Poi) -> Result<Self::Trip, VendorError>;

    /// Starts guidance along a trip, streaming its callbacks.
    async fn start_guidance(
        &self,
        trip: Self::Trip,
    ) -> Result<mpsc::Receiver<GuidanceEvent>, VendorError>;
}

/// Reasons a navigation request ends without guidance, shown as notices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NaviError {
    /// Location permission was not granted.
    #[error("Location permission is required for navigation")]
    PermissionDenied,

    /// The engine rejected the app key.
    #[error("Navigation authentication failed: {0}")]
    Auth(VendorError),

    /// The destination carries no coordinates.
    #[error("This event has no registered location")]
    NoDestination,

    /// No recent GPS fix is available.
    #[error("No GPS signal, please try again later")]
    NoGpsFix,

    /// The route could not be computed.
    #[error("Route search failed: {0}")]
    Route(VendorError),

    /// Guidance could not be started.
    #[error("Failed to start guidance: {0}")]
    Guidance(VendorError),
}

/// Drives the navigation flow for one engine.
#[derive(Debug)]
pub struct NaviAdapter<E> {
    engine: E,
}

impl<E: NaviEngine> NaviAdapter<E> {
    /// Wraps an engine.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Starts guidance from the current position to `destination`.
    ///
    /// # Errors
    ///
    /// Returns the first failed step: permission, authentication, destination check,
    /// GPS fix, route computation, guidance start.
    #[tracing::instrument(skip(self))]
    pub async fn request_route(
        &self,
        destination: &Destination,
    ) -> Result<GuidanceSession, NaviError> {
        if !self.engine.location_permission().await {
            tracing::info!("location permission denied");
            return Err(NaviError::PermissionDenied);
        }

        self.engine.authenticate().await.map_err(|e| {
            tracing::warn!(code = %e.code, "navigation engine authentication failed");
            NaviError::Auth(e)
        })?;

        if !destination.has_coordinates() {
            return Err(NaviError::NoDestination);
        }

        let current = self
            .engine
            .recent_position()
            .await
            .ok_or(NaviError::NoGpsFix)?;

        let (x, y) = self
            .engine
            .wgs84_to_katec(destination.longitude, destination.latitude);
        let goal = KatecPoint::truncate(x, y);
        tracing::debug!(?current, ?goal, "requesting trip");

        let start = Poi {
            name: START_POI_NAME.to_string(),
            point: current,
        };
        let goal = Poi {
            name: destination.name.clone(),
            point: goal,
        };
        let trip = self.engine.make_trip(&start, &goal).await.map_err(|e| {
            tracing::warn!(code = %e.code, "trip computation failed");
            NaviError::Route(e)
        })?;

        let rx = self.engine.start_guidance(trip).await.map_err(|e| {
            tracing::warn!(code = %e.code, "guidance failed to start");
            NaviError::Guidance(e)
        })?;
        tracing::info!(goal = %goal.name, "guidance started");
        Ok(GuidanceSession { rx })
    }

    /// Same as [`NaviAdapter::request_route`], from raw hand-off values.
    ///
    /// # Errors
    ///
    /// See [`NaviAdapter::request_route`].
    pub async fn request_route_to(
        &self,
        name: Option<&str>,
        latitude: f64,
        longitude: f64,
    ) -> Result<GuidanceSession, NaviError> {
        self.request_route(&Destination::new(name, latitude, longitude))
            .await
    }
}

/// A running guidance session.
#[derive(Debug)]
pub struct GuidanceSession {
    rx: mpsc::Receiver<GuidanceEvent>,
}

impl GuidanceSession {
    /// Relays callbacks to `handler` until guidance ends or the engine goes away.
    ///
    /// Returns the number of relayed events.
    pub async fn relay(mut self, handler: &mut impl GuidanceHandler) -> usize {
        let mut count = 0;
        while let Some(event) = self.rx.recv().await {
            handler.on_event(&event);
            count += 1;
            if event == GuidanceEvent::Ended {
                break;
            }
        }
        tracing::debug!(count, "guidance relay finished");
        count
    }
}
