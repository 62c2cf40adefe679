//! Optional `ppa.toml` settings.
//!
//! ```toml
//! log_level = "info"
//!
//! [report]
//! top = 8
//! show_flags = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

pub const DEFAULT_CONFIG_FILE: &str = "ppa.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rows in the needs-attention list.
    pub top: usize,
    pub show_flags: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top: 10,
            show_flags: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive used when `PPA_LOG` is unset.
    pub log_level: Option<String>,
    pub report: ReportConfig,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// An explicit path must exist. Otherwise `ppa.toml` in `dir` is used
    /// when present, and defaults when not.
    pub fn resolve_in(explicit: Option<&Path>, dir: &Path) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            debug!(path = %fallback.display(), "loading config");
            Self::load(&fallback)
        } else {
            Ok(Self::default())
        }
    }

    pub fn resolve(explicit: Option<&Path>) -> Result<Self, CliError> {
        Self::resolve_in(explicit, Path::new("."))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
