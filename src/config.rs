//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::DEFAULT_QUIET_PERIOD;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Seconds of quiet after the last edit before the draft auto-saves
    pub autosave_quiet_secs: Option<u64>,
    /// Show a toast when an auto-save completes
    pub autosave_toasts: Option<bool>,
    /// Override the directory holding the draft snapshot and submissions
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "campaign", "campaign-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let config: AppConfig = serde_json::from_str(&content)
                    .with_context(|| format!("invalid config at {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Effective auto-save quiet period
    pub fn autosave_quiet_period(&self) -> Duration {
        self.autosave_quiet_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_QUIET_PERIOD)
    }

    /// Whether successful auto-saves announce themselves
    pub fn autosave_toasts(&self) -> bool {
        self.autosave_toasts.unwrap_or(true)
    }

    /// Directory for the snapshot store and submissions file
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("io", "campaign", "campaign-tui")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("could not determine a data directory on this platform")
    }
}
