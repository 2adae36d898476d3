//! Configuration struct definitions.

use serde::Deserialize;

/// Routing and verbosity settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// quiet, normal or verbose.
    pub verbosity: String,
    /// stream or system.
    pub backend: String,
    /// Route warnings nowhere.
    pub no_warnings: bool,
    /// Allow styled output on destinations that support it.
    pub color: bool,
    /// Encoding override for every stream.
    pub encoding: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbosity: "normal".to_string(),
            backend: "stream".to_string(),
            no_warnings: false,
            color: true,
            encoding: None,
        }
    }
}

/// Bidi workaround settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BidiConfig {
    /// Spawn a reshaping tool at startup.
    pub enabled: bool,
    /// Per-line read timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for BidiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_ms: 5000,
        }
    }
}
