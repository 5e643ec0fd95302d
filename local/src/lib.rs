// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the Kakao Local REST API: keyword place search and coordinate transform.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::module_name_repetitions)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::LocalApiClient;
pub use crate::config::LocalApiConfig;
pub use crate::error::LocalApiError;
pub use crate::types::{Coord, CoordSystem, Place, SearchResponse, TransCoordMeta, TransCoordResponse};
