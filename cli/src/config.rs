// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use plaps_core::{
    APP_NAME, Config as CoreConfig, LocalApiClient, LocalApiConfig, PlaceFinder, get_config_dir,
};

const PLAPS_CONFIG_ENV: &str = "PLAPS_CONFIG";

/// Loads the configuration, looking at `--config`, then `PLAPS_CONFIG`, then
/// `$XDG_CONFIG_HOME/plaps/config.toml`.
///
/// Without an explicit path and without a default file, built-in defaults are used.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(PLAPS_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, Config { local: a.local }))
}

/// Configuration for the Plaps command-line front end.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Location API settings, `None` when the `[local]` section is absent.
    pub local: Option<LocalApiConfig>,
}

impl Config {
    /// Builds a place finder from the `[local]` section.
    pub fn place_finder(&self) -> Result<PlaceFinder, Box<dyn Error>> {
        let local = self
            .local
            .clone()
            .ok_or("Location search is disabled: add a [local] section with rest_api_key to the config")?;
        let client = LocalApiClient::new(local)?;
        Ok(PlaceFinder::new(client))
    }
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    local: Option<LocalApiConfig>,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
