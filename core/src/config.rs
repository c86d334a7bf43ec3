// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

/// The name of the application.
pub const APP_NAME: &str = "campus";

/// File name of the database inside the state directory.
pub const DB_FILENAME: &str = "campus.db";

const DEFAULT_SCHEDULE_WINDOW_DAYS: u16 = 30;

/// Configuration for the campus core.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory for storing the database.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Keep everything in memory, nothing is written to disk.
    #[serde(default)]
    pub in_memory: bool,

    /// Half-width in days of the window the schedule collects lecture
    /// summaries and calendar events for.
    #[serde(default = "default_schedule_window_days")]
    pub schedule_window_days: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            in_memory: false,
            schedule_window_days: DEFAULT_SCHEDULE_WINDOW_DAYS,
        }
    }
}

impl Config {
    /// A configuration backed by an in-memory database.
    pub fn in_memory() -> Self {
        Self {
            in_memory: true,
            ..Default::default()
        }
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if self.in_memory {
            return Ok(());
        }

        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                );
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => {
                    tracing::warn!(err = %e, "failed to get state directory, using in-memory database");
                    self.in_memory = true;
                }
            },
        };

        Ok(())
    }

    /// Path of the database file, `None` for an in-memory database.
    pub fn database_path(&self) -> Option<PathBuf> {
        match self.in_memory {
            true => None,
            false => self.state_dir.as_ref().map(|dir| dir.join(DB_FILENAME)),
        }
    }
}

const fn default_schedule_window_days() -> u16 {
    DEFAULT_SCHEDULE_WINDOW_DAYS
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".into())
}
