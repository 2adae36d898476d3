//! Logger construction from a loaded config file.

use super::Logger;
use crate::config::{Backend, Config};
use crate::internal;
use crate::output::Destination;

impl Logger {
    /// Screen and info to stdout, diagnostics to stderr (or the system log),
    /// plus the bidi workaround when enabled.
    ///
    /// A bidi activation failure has already been reported on the error
    /// channel and does not fail construction.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let verbosity = config.parse_verbosity();
        internal::debug(&format!("building logger, verbosity={verbosity}"));

        let mut builder = Self::builder()
            .verbosity(verbosity)
            .allow_color(config.general.color)
            .screen(Destination::stdout());
        if let Some(encoding) = &config.general.encoding {
            builder = builder.encoding(encoding);
        }
        let logger = builder.build();

        match config.parse_backend() {
            Backend::Stream => {
                logger.setup_stream_logger(
                    Some(Destination::stdout()),
                    Some(Destination::stderr()),
                    config.general.no_warnings,
                );
            }
            Backend::System => {
                logger.setup_system_logger();
            }
        }

        if config.bidi.enabled && logger.init_bidi_workaround_with(config.bidi_timeout()).is_err() {
            internal::debug("continuing without bidi workaround");
        }

        logger
    }
}
