//! Configuration loaded from `~/.config/rangeprune/config.toml`.
//!
//! Precedence is defaults, then the config file, then CLI flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::selection::NumberRange;

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub range: RangeConfig,

    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RangeConfig {
    #[serde(default = "default_start")]
    pub start: i64,
    #[serde(default = "default_end")]
    pub end: i64,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Directory holding the numbered folders. Defaults to the working directory.
    pub base_dir: Option<PathBuf>,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

fn default_start() -> i64 {
    25600
}

fn default_end() -> i64 {
    35637
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rangeprune").join("config.toml"))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given (it must exist), otherwise the default path
    /// if present, otherwise built-in defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading config");
                Self::load_from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn number_range(&self) -> NumberRange {
        NumberRange::new(self.range.start, self.range.end)
    }
}
