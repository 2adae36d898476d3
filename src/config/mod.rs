//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic stays
//! independent of the serde schema.

mod structs;

pub use structs::{BidiConfig, GeneralConfig};

use crate::internal;
use crate::level::Verbosity;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which backend family the levels below Screen are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Stream,
    System,
}

/// An empty config file yields a working logger; every section and field
/// falls back to its default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub bidi: BidiConfig,
}

impl Config {
    /// Loads the user's config from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::debug(&format!("config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/routelog/routelog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "routelog")
            .map(|dirs| dirs.config_dir().join("routelog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown values fall back to `Normal` with a warning so a typo doesn't break startup.
    #[must_use]
    pub fn parse_verbosity(&self) -> Verbosity {
        self.general.verbosity.parse().unwrap_or_else(|e| {
            internal::warning(&format!("{e}, using normal"));
            Verbosity::Normal
        })
    }

    #[must_use]
    pub fn parse_backend(&self) -> Backend {
        match self.general.backend.to_lowercase().as_str() {
            "stream" => Backend::Stream,
            "system" | "syslog" | "logging" => Backend::System,
            other => {
                internal::warning(&format!("unknown backend: {other}, using stream"));
                Backend::Stream
            }
        }
    }

    #[must_use]
    pub const fn bidi_timeout(&self) -> Duration {
        Duration::from_millis(self.bidi.timeout_ms)
    }
}
