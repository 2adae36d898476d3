//! routelog's own diagnostic logger: a quiet, stderr-only default logger used
//! for write failures, bidi activation problems and similar faults that have
//! no caller-supplied logger to go to.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points race to call `init`.

use crate::fmt::Style;
use crate::level::{LogLevel, Verbosity};
use crate::logger::{LogOptions, Logger};
use crate::output::Destination;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Picks the internal verbosity. Only the first call (or first use) takes effect.
pub fn init(verbosity: Verbosity) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(verbosity));
    if !was_init {
        debug(&format!("internal logger ready, verbosity={verbosity}"));
    }
}

/// The process-wide default logger, built on first use.
pub fn logger() -> &'static Logger {
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(Verbosity::Quiet))
}

fn build_internal_logger(verbosity: Verbosity) -> Logger {
    let logger = Logger::builder()
        .verbosity(verbosity)
        .report_write_failures(false)
        .build();
    logger.setup_stream_logger(None, Some(Destination::stderr()), false);
    logger
}

/// Only visible when the internal logger was initialized as verbose.
pub fn debug(msg: &str) {
    logger().debug(&format!("[routelog] {msg}"), false);
}

pub fn warning(msg: &str) {
    logger().warning(msg, false);
}

/// Reported at most once per distinct message.
pub fn error(msg: &str) {
    let logger = logger();
    let prefix = logger.format(LogLevel::Error, "ERROR:", &[Style::ERROR]);
    logger.log(
        LogLevel::Error,
        msg,
        &LogOptions::new().once(true).prefix(prefix),
    );
}
