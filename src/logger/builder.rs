//! Construction-time settings are fixed for the logger's lifetime, so they
//! are collected here instead of being setters on `Logger`.

use super::{BidiState, Logger, RouterState};
use crate::level::{LogLevel, Verbosity};
use crate::output::{Destination, Output, StreamOutput};
use std::sync::{Arc, Mutex};

pub struct LoggerBuilder {
    verbosity: Verbosity,
    pref_encoding: Option<String>,
    allow_color: bool,
    report_write_failures: bool,
    screen: Option<Destination>,
    progress: Option<Destination>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Normal verbosity, no colors, no screen.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            pref_encoding: None,
            allow_color: false,
            report_write_failures: true,
            screen: None,
            progress: None,
        }
    }

    #[must_use]
    pub const fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Overrides the encoding of every stream this logger creates.
    #[must_use]
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.pref_encoding = Some(label.into());
        self
    }

    /// Styling still requires the destination to be styled.
    #[must_use]
    pub const fn allow_color(mut self, allow: bool) -> Self {
        self.allow_color = allow;
        self
    }

    /// The internal logger turns this off so its own failures cannot recurse.
    #[must_use]
    pub const fn report_write_failures(mut self, report: bool) -> Self {
        self.report_write_failures = report;
        self
    }

    /// Screen output is fixed at construction and untouched by the `setup_*` calls.
    #[must_use]
    pub fn screen(mut self, destination: Destination) -> Self {
        self.screen = Some(destination);
        self
    }

    #[must_use]
    pub fn progress(mut self, destination: Destination) -> Self {
        self.progress = Some(destination);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let stream = |destination: Option<Destination>| {
            destination.map_or(Output::Null, |d| {
                Output::Stream(StreamOutput::new(
                    d,
                    self.allow_color,
                    self.pref_encoding.as_deref(),
                ))
            })
        };

        let mut state = RouterState::default();
        state
            .mapping
            .insert(LogLevel::Screen, Arc::new(stream(self.screen)));
        if self.progress.is_some() {
            state
                .mapping
                .insert(LogLevel::Progress, Arc::new(stream(self.progress)));
        }

        Logger {
            verbosity: self.verbosity,
            pref_encoding: self.pref_encoding,
            allow_color: self.allow_color,
            report_write_failures: self.report_write_failures,
            state: Mutex::new(state),
            bidi: Mutex::new(BidiState::Inactive),
        }
    }
}
