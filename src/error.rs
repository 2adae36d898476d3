//! Unified error type for all routelog operations.

/// Error type for routelog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error, usually a failed write to a stream backend.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Encoding label not known to the encoder.
    UnknownEncoding(String),
    /// Invalid log level string.
    InvalidLevel(String),
    /// Invalid verbosity string.
    InvalidVerbosity(String),
    /// A reshaping tool could not be started.
    ProcessSpawn {
        program: String,
        source: std::io::Error,
    },
    /// Neither reshaping tool could be started.
    BidiUnavailable,
    /// The reshaping tool did not answer with the expected line count in time.
    BidiTimeout,
    /// The reshaping tool closed its output.
    BidiClosed,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::UnknownEncoding(label) => write!(f, "unknown encoding: {label}"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: {level}"),
            Self::InvalidVerbosity(v) => write!(f, "invalid verbosity: {v}"),
            Self::ProcessSpawn { program, source } => {
                write!(f, "could not start {program}: {source}")
            }
            Self::BidiUnavailable => write!(
                f,
                "could not find bidiv or fribidi executable, bidi workaround unavailable"
            ),
            Self::BidiTimeout => write!(f, "bidi reshaping timed out"),
            Self::BidiClosed => write!(f, "bidi reshaping process closed its output"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ProcessSpawn { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
