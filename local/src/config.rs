// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Local API configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LocalApiConfig {
    /// Base URL of the API server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// REST API key, sent as `Authorization: KakaoAK <key>`.
    pub rest_api_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Number of places requested per keyword search.
    #[serde(default = "default_page_size")]
    pub page_size: u8,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://dapi.kakao.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_page_size() -> u8 {
    15
}

fn default_user_agent() -> String {
    concat!("plaps-local/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for LocalApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            rest_api_key: String::new(),
            timeout_secs: default_timeout(),
            page_size: default_page_size(),
            user_agent: default_user_agent(),
        }
    }
}
