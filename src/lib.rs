#![forbid(unsafe_code)]

//! `routelog` - Leveled, multi-backend output router for command-line tools.
//!
//! One logger routes each level (screen, progress, debug, info, warning,
//! error) to exactly one backend:
//! - Stream backends (stdout, stderr, files, in-memory buffers) with
//!   encoding fallback and optional styling
//! - The host application's own logger, through the [`ClassLogger`] trait
//! - The system log, through the `log` facade
//!
//! On top of the routing it applies a verbosity policy, "log once"
//! deduplication, verbose error traces, and an optional bidi reshaping
//! pipeline for right-to-left scripts.
//!
//! # Example
//!
//! ```
//! use routelog::{Destination, Logger, SharedBuffer, Verbosity};
//!
//! let out = SharedBuffer::new();
//! let err = SharedBuffer::new();
//!
//! let logger = Logger::new(None, Verbosity::Normal);
//! logger.setup_stream_logger(
//!     Some(Destination::new(out.clone())),
//!     Some(Destination::new(err.clone())),
//!     false,
//! );
//!
//! logger.info("Downloading webpage", true, None, false);
//! logger.warning("disk almost full", false);
//! logger.debug("hidden unless verbose", false);
//!
//! assert_eq!(out.contents(), "Downloading webpage\n");
//! assert_eq!(err.contents(), "WARNING: disk almost full\n");
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `routelog` command-line binary

// Core modules (always available)
pub mod bidi;
pub mod config;
pub mod encoding;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use bidi::BidiWorkaround;
pub use config::Config;
pub use encoding::TextEncoding;
pub use error::Error;
pub use fmt::{Color, Style, TermCode, format_text};
pub use level::{LogLevel, Verbosity};
pub use logger::{
    DerivedBuilder, DerivedLogger, Emitter, LogOptions, Logger, LoggerBuilder, format_error_chain,
};
pub use output::{ClassLogger, Destination, Output, SharedBuffer};
