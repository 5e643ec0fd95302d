// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Local API client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum LocalApiError {
    /// HTTP layer error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API key was rejected.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(String),

    /// The request was rejected before being sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for LocalApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<serde_json::Error> for LocalApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
