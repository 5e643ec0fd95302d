// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Place search and coordinate transform, collapsing failures into notices.

use std::fmt;

use plaps_local::{Coord, CoordSystem, LocalApiClient, Place};

/// User-facing outcome of a place search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchNotice {
    /// Nothing was typed.
    EmptyKeyword,
    /// The given number of places matched.
    Found(usize),
    /// The search succeeded without matches.
    NoResults,
    /// The request failed; the places list is empty.
    Failed(String),
}

impl fmt::Display for SearchNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchNotice::EmptyKeyword => write!(f, "Please enter a search keyword"),
            SearchNotice::Found(n) => write!(f, "{n} places found"),
            SearchNotice::NoResults => write!(f, "No results"),
            SearchNotice::Failed(e) => write!(f, "API call failed: {e}"),
        }
    }
}

/// Places returned by a search, together with the notice to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceResults {
    /// Matching places, empty on failure.
    pub places: Vec<Place>,
    /// What to tell the user.
    pub notice: SearchNotice,
}

/// Location lookups for the edit form and the navigation hand-off.
#[derive(Debug, Clone)]
pub struct PlaceFinder {
    client: LocalApiClient,
}

impl PlaceFinder {
    /// Wraps a configured API client.
    #[must_use]
    pub fn new(client: LocalApiClient) -> Self {
        Self { client }
    }

    /// Searches places by keyword, never failing.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, keyword: &str) -> PlaceResults {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return PlaceResults {
                places: Vec::new(),
                notice: SearchNotice::EmptyKeyword,
            };
        }

        match self.client.search_keyword(keyword).await {
            Ok(places) if places.is_empty() => PlaceResults {
                places,
                notice: SearchNotice::NoResults,
            },
            Ok(places) => PlaceResults {
                notice: SearchNotice::Found(places.len()),
                places,
            },
            Err(e) => {
                tracing::warn!(err = %e, "place search failed");
                PlaceResults {
                    places: Vec::new(),
                    notice: SearchNotice::Failed(e.to_string()),
                }
            }
        }
    }

    /// Transforms a WGS84 point, `None` on failure or an empty answer.
    #[tracing::instrument(skip(self))]
    pub async fn transform(&self, longitude: f64, latitude: f64, to: CoordSystem) -> Option<Coord> {
        match self.client.transform_wgs84(longitude, latitude, to).await {
            Ok(coord) => coord,
            Err(e) => {
                tracing::warn!(err = %e, "coordinate transform failed");
                None
            }
        }
    }
}
