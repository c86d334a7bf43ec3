// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use campus_core::{APP_NAME, Config as CoreConfig, get_config_dir};

const CAMPUS_CONFIG_ENV: &str = "CAMPUS_CONFIG";
pub const CAMPUS_USER_ENV: &str = "CAMPUS_USER";

/// Loads the configuration from `--config`, `CAMPUS_CONFIG` or the default
/// location, in that order.
///
/// A missing file at the default location falls back to the defaults, an
/// explicitly named file must exist.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CAMPUS_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::info!(path = %config.display(), "no config found, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, a.cli))
}

/// Configuration for the command-line front end, the `[cli]` table.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Email of the user commands run as, when neither `--user` nor
    /// `CAMPUS_USER` is given.
    #[serde(default)]
    pub user: Option<String>,
}

impl Config {
    /// The email to sign in with: the flag, then the environment, then the
    /// config file.
    pub fn resolve_user(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| std::env::var(CAMPUS_USER_ENV).ok())
            .or_else(|| self.user.clone())
            .filter(|user| !user.trim().is_empty())
    }
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    cli: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
