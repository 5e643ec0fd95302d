// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Local API client for place search and coordinate transform.

use std::sync::Arc;

use crate::config::LocalApiConfig;
use crate::error::LocalApiError;
use crate::http::HttpClient;
use crate::types::{Coord, CoordSystem, Place, SearchResponse, TransCoordResponse};

const SEARCH_KEYWORD_PATH: &str = "/v2/local/search/keyword.json";
const TRANSCOORD_PATH: &str = "/v2/local/geo/transcoord.json";

/// Client for the Local REST API.
///
/// # Example
///
/// ```ignore
/// use plaps_local::{LocalApiClient, LocalApiConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = LocalApiConfig {
///     rest_api_key: "my-key".to_string(),
///     ..Default::default()
/// };
///
/// let client = LocalApiClient::new(config)?;
/// let places = client.search_keyword("Seoul Station").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LocalApiClient {
    http: Arc<HttpClient>,
    config: LocalApiConfig,
}

impl LocalApiClient {
    /// Creates a new Local API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or HTTP client initialization fails.
    pub fn new(config: LocalApiConfig) -> Result<Self, LocalApiError> {
        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &LocalApiConfig {
        &self.config
    }

    /// Searches places by free-text keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword is blank, the request fails, or the body is malformed.
    #[tracing::instrument(skip(self))]
    pub async fn search_keyword(&self, query: &str) -> Result<Vec<Place>, LocalApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LocalApiError::InvalidRequest(
                "search keyword is empty".to_string(),
            ));
        }

        let size = self.config.page_size.to_string();
        let req = self
            .http
            .build_request(SEARCH_KEYWORD_PATH)
            .query(&[("query", query), ("size", size.as_str())]);
        let resp = self.http.execute(req).await?;

        let body = resp.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        tracing::debug!(count = parsed.documents.len(), "keyword search finished");
        Ok(parsed.documents)
    }

    /// Transforms a point between coordinate systems.
    ///
    /// Returns the first transformed point, or `None` if the server returned none.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    #[tracing::instrument(skip(self))]
    pub async fn transform_coord(
        &self,
        x: f64,
        y: f64,
        from: CoordSystem,
        to: CoordSystem,
    ) -> Result<Option<Coord>, LocalApiError> {
        let (x, y) = (x.to_string(), y.to_string());
        let req = self.http.build_request(TRANSCOORD_PATH).query(&[
            ("x", x.as_str()),
            ("y", y.as_str()),
            ("input_coord", from.as_str()),
            ("output_coord", to.as_str()),
        ]);
        let resp = self.http.execute(req).await?;

        let body = resp.text().await?;
        let parsed: TransCoordResponse = serde_json::from_str(&body)?;
        tracing::debug!(total = parsed.meta.total_count, "coordinate transform finished");
        Ok(parsed.documents.into_iter().next())
    }

    /// Transforms a WGS84 longitude/latitude pair into `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn transform_wgs84(
        &self,
        longitude: f64,
        latitude: f64,
        to: CoordSystem,
    ) -> Result<Option<Coord>, LocalApiError> {
        self.transform_coord(longitude, latitude, CoordSystem::Wgs84, to)
            .await
    }
}
