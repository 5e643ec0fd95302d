// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with API key authentication.

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::config::LocalApiConfig;
use crate::error::LocalApiError;

/// HTTP client for Local API requests.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: LocalApiConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or HTTP client creation fails.
    pub fn new(config: LocalApiConfig) -> Result<Self, LocalApiError> {
        if config.rest_api_key.trim().is_empty() {
            return Err(LocalApiError::Config(
                "REST API key is not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a GET request for the given API path with the authorization header.
    pub fn build_request(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        self.client
            .get(url)
            .header("Authorization", format!("KakaoAK {}", self.config.rest_api_key))
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, LocalApiError> {
        let resp = req.send().await?;

        match resp.status() {
            status if status.is_success() => Ok(resp),
            status @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(LocalApiError::Auth(format!("{status}: {text}")))
            }
            status => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(LocalApiError::Http(format!("{status}: {text}")))
            }
        }
    }
}
