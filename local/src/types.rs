// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types of the Local API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A place returned by keyword search.
///
/// Coordinates arrive as decimal strings: `x` is the longitude and `y` the latitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Place identifier.
    pub id: String,
    /// Display name.
    pub place_name: String,
    /// Lot-number address.
    #[serde(default)]
    pub address_name: String,
    /// Road address, empty when unknown.
    #[serde(default)]
    pub road_address_name: String,
    /// Longitude as text.
    pub x: String,
    /// Latitude as text.
    pub y: String,
}

impl Place {
    /// Parsed longitude, `None` if the text is not a number.
    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.x.trim().parse().ok()
    }

    /// Parsed latitude, `None` if the text is not a number.
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.y.trim().parse().ok()
    }

    /// Parsed `(latitude, longitude)` pair.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude()?, self.longitude()?))
    }
}

/// Response body of the keyword search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching places.
    #[serde(default)]
    pub documents: Vec<Place>,
}

/// Metadata of a transform response.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TransCoordMeta {
    /// Number of documents returned.
    #[serde(default)]
    pub total_count: u32,
}

/// Response body of the coordinate transform endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransCoordResponse {
    /// Response metadata.
    #[serde(default)]
    pub meta: TransCoordMeta,
    /// Transformed points.
    #[serde(default)]
    pub documents: Vec<Coord>,
}

/// A point in some coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    /// X (easting, or longitude for WGS84).
    pub x: f64,
    /// Y (northing, or latitude for WGS84).
    pub y: f64,
}

/// Coordinate systems accepted by the transform endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordSystem {
    /// World geodetic system, degrees.
    Wgs84,
    /// WCONGNAMUL.
    Wcongnamul,
    /// CONGNAMUL.
    Congnamul,
    /// WTM.
    Wtm,
    /// TM.
    Tm,
    /// KATEC, the grid used by the navigation engine.
    Katec,
    /// UTM.
    Utm,
    /// Bessel ellipsoid, degrees.
    Bessel,
    /// WKTM.
    Wktm,
    /// WUTM.
    Wutm,
}

impl CoordSystem {
    /// All supported systems.
    pub const ALL: [CoordSystem; 10] = [
        CoordSystem::Wgs84,
        CoordSystem::Wcongnamul,
        CoordSystem::Congnamul,
        CoordSystem::Wtm,
        CoordSystem::Tm,
        CoordSystem::Katec,
        CoordSystem::Utm,
        CoordSystem::Bessel,
        CoordSystem::Wktm,
        CoordSystem::Wutm,
    ];

    /// Name used in API query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CoordSystem::Wgs84 => "WGS84",
            CoordSystem::Wcongnamul => "WCONGNAMUL",
            CoordSystem::Congnamul => "CONGNAMUL",
            CoordSystem::Wtm => "WTM",
            CoordSystem::Tm => "TM",
            CoordSystem::Katec => "KTM",
            CoordSystem::Utm => "UTM",
            CoordSystem::Bessel => "BESSEL",
            CoordSystem::Wktm => "WKTM",
            CoordSystem::Wutm => "WUTM",
        }
    }
}

impl fmt::Display for CoordSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "KATEC" {
            return Ok(CoordSystem::Katec);
        }
        CoordSystem::ALL
            .into_iter()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| format!("Unknown coordinate system: {s}"))
    }
}
