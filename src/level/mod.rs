//! Routing keys and the verbosity policy that decides what reaches them.

use std::fmt;
use std::str::FromStr;

/// Each level is a mapping key for exactly one backend. Screen and Progress
/// are presentation channels and carry no severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Direct user-facing output, wired at construction.
    Screen,
    /// In-place progress lines.
    Progress,
    /// Diagnostics only shown in verbose runs.
    Debug,
    /// Normal operational messages.
    Info,
    /// Non-fatal anomalies, always prefixed distinctly from errors.
    Warning,
    /// Failures; verbose runs append trace information.
    Error,
}

impl LogLevel {
    /// Numeric severity, `None` for the presentation channels.
    #[must_use]
    pub const fn severity(self) -> Option<u8> {
        match self {
            Self::Screen | Self::Progress => None,
            Self::Debug => Some(10),
            Self::Info => Some(20),
            Self::Warning => Some(30),
            Self::Error => Some(40),
        }
    }

    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Screen => "screen",
            Self::Progress => "progress",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Used by help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Screen,
            Self::Progress,
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
        ]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "screen" => Ok(Self::Screen),
            "progress" => Ok(Self::Progress),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            _ => Err(crate::Error::InvalidLevel(s.to_string())),
        }
    }
}

/// Fixed for the lifetime of a logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verbosity {
    /// Info is suppressed unless the caller overrides it.
    Quiet,
    #[default]
    Normal,
    /// Debug is routed, info is never suppressed, errors carry traces.
    Verbose,
}

impl Verbosity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(crate::Error::InvalidVerbosity(s.to_string())),
        }
    }
}
