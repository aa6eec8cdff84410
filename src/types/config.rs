//! Analytics configuration
//!
//! Looked up from `--config <path>`, then `~/.trendline/config.json`, then
//! built-in defaults. Granularity thresholds are fixed and not configurable.

use super::{CalendarDate, Result, TrendlineError, WindowKey};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Categories kept by top-N collapsing before "other"
    pub top_n: usize,
    /// Start of the `all` window when there are no records
    pub epoch: CalendarDate,
    pub default_window: WindowKey,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            epoch: CalendarDate::unix_epoch(),
            default_window: WindowKey::Month,
        }
    }
}

impl Config {
    /// `~/.trendline/config.json`, if a home directory can be determined
    pub fn default_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().join(".trendline").join("config.json"))
    }

    /// Load from an explicit path; the file must exist.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| TrendlineError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, otherwise the default path if present,
    /// otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(TrendlineError::Config("top_n must be at least 1".into()));
        }
        Ok(())
    }
}
