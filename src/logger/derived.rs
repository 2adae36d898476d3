//! Derived loggers give a sub-operation its own log identity (a prefix, a
//! different channel for errors) without copying the base logger's state.
//!
//! A `DerivedLogger` borrows its base and holds only an override table. Any
//! method without an override goes straight to the base, so later `setup_*`
//! calls or dedup entries on the base are seen through the derived view.

use super::{LogOptions, Logger};
use crate::fmt::TermCode;
use crate::level::{LogLevel, Verbosity};

/// Everything a call site needs to report through a logger. Implemented by
/// [`Logger`] and [`DerivedLogger`] so sub-operations can take either.
pub trait Emitter {
    fn verbosity(&self) -> Verbosity;
    fn log(&self, level: LogLevel, message: &str, options: &LogOptions);
    fn format(&self, level: LogLevel, text: &str, styles: &[TermCode]) -> String;
    fn try_encoding<'a>(
        &self,
        level: LogLevel,
        text: &'a str,
        fallback: &'a str,
        pref_encoding: Option<&str>,
    ) -> &'a str;
    fn screen(&self, message: &str, newline: bool);
    fn debug(&self, message: &str, once: bool);
    fn info(&self, message: &str, newline: bool, quiet: Option<bool>, once: bool);
    fn warning(&self, message: &str, once: bool);
    fn error(&self, message: &str, once: bool);
    fn handle_error(&self, message: &str, trace: Option<&str>, is_error: bool, prefix: bool);
    fn deprecation_warning(&self, message: &str);
    fn deprecated_feature(&self, message: &str);

    /// Starts a derived view over `self`.
    fn make_derived(&self) -> DerivedBuilder<'_>
    where
        Self: Sized,
    {
        DerivedBuilder::new(self)
    }
}

impl Emitter for Logger {
    fn verbosity(&self) -> Verbosity {
        Self::verbosity(self)
    }

    fn log(&self, level: LogLevel, message: &str, options: &LogOptions) {
        Self::log(self, level, message, options);
    }

    fn format(&self, level: LogLevel, text: &str, styles: &[TermCode]) -> String {
        Self::format(self, level, text, styles)
    }

    fn try_encoding<'a>(
        &self,
        level: LogLevel,
        text: &'a str,
        fallback: &'a str,
        pref_encoding: Option<&str>,
    ) -> &'a str {
        Self::try_encoding(self, level, text, fallback, pref_encoding)
    }

    fn screen(&self, message: &str, newline: bool) {
        Self::screen(self, message, newline);
    }

    fn debug(&self, message: &str, once: bool) {
        Self::debug(self, message, once);
    }

    fn info(&self, message: &str, newline: bool, quiet: Option<bool>, once: bool) {
        Self::info(self, message, newline, quiet, once);
    }

    fn warning(&self, message: &str, once: bool) {
        Self::warning(self, message, once);
    }

    fn error(&self, message: &str, once: bool) {
        Self::error(self, message, once);
    }

    fn handle_error(&self, message: &str, trace: Option<&str>, is_error: bool, prefix: bool) {
        Self::handle_error(self, message, trace, is_error, prefix);
    }

    fn deprecation_warning(&self, message: &str) {
        Self::deprecation_warning(self, message);
    }

    fn deprecated_feature(&self, message: &str) {
        Self::deprecated_feature(self, message);
    }
}

type ScreenFn<'a> = Box<dyn Fn(&dyn Emitter, &str, bool) + 'a>;
type OnceFn<'a> = Box<dyn Fn(&dyn Emitter, &str, bool) + 'a>;
type InfoFn<'a> = Box<dyn Fn(&dyn Emitter, &str, bool, Option<bool>, bool) + 'a>;
type HandleErrorFn<'a> = Box<dyn Fn(&dyn Emitter, &str, Option<&str>, bool, bool) + 'a>;

/// Each override receives the base logger plus the original call's arguments.
#[derive(Default)]
struct Overrides<'a> {
    screen: Option<ScreenFn<'a>>,
    debug: Option<OnceFn<'a>>,
    info: Option<InfoFn<'a>>,
    warning: Option<OnceFn<'a>>,
    error: Option<OnceFn<'a>>,
    handle_error: Option<HandleErrorFn<'a>>,
}

/// Collects overrides, then `build` produces the [`DerivedLogger`].
pub struct DerivedBuilder<'a> {
    base: &'a dyn Emitter,
    overrides: Overrides<'a>,
}

impl<'a> DerivedBuilder<'a> {
    #[must_use]
    pub fn new(base: &'a dyn Emitter) -> Self {
        Self {
            base,
            overrides: Overrides::default(),
        }
    }

    #[must_use]
    pub fn screen(mut self, f: impl Fn(&dyn Emitter, &str, bool) + 'a) -> Self {
        self.overrides.screen = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn debug(mut self, f: impl Fn(&dyn Emitter, &str, bool) + 'a) -> Self {
        self.overrides.debug = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn info(
        mut self,
        f: impl Fn(&dyn Emitter, &str, bool, Option<bool>, bool) + 'a,
    ) -> Self {
        self.overrides.info = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn warning(mut self, f: impl Fn(&dyn Emitter, &str, bool) + 'a) -> Self {
        self.overrides.warning = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn error(mut self, f: impl Fn(&dyn Emitter, &str, bool) + 'a) -> Self {
        self.overrides.error = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn handle_error(
        mut self,
        f: impl Fn(&dyn Emitter, &str, Option<&str>, bool, bool) + 'a,
    ) -> Self {
        self.overrides.handle_error = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn build(self) -> DerivedLogger<'a> {
        DerivedLogger {
            base: self.base,
            overrides: self.overrides,
        }
    }
}

/// A live view over a base logger with some methods replaced.
pub struct DerivedLogger<'a> {
    base: &'a dyn Emitter,
    overrides: Overrides<'a>,
}

impl DerivedLogger<'_> {
    /// The logger this view delegates to.
    #[must_use]
    pub fn base(&self) -> &dyn Emitter {
        self.base
    }
}

impl Emitter for DerivedLogger<'_> {
    fn verbosity(&self) -> Verbosity {
        self.base.verbosity()
    }

    fn log(&self, level: LogLevel, message: &str, options: &LogOptions) {
        self.base.log(level, message, options);
    }

    fn format(&self, level: LogLevel, text: &str, styles: &[TermCode]) -> String {
        self.base.format(level, text, styles)
    }

    fn try_encoding<'a>(
        &self,
        level: LogLevel,
        text: &'a str,
        fallback: &'a str,
        pref_encoding: Option<&str>,
    ) -> &'a str {
        self.base.try_encoding(level, text, fallback, pref_encoding)
    }

    fn screen(&self, message: &str, newline: bool) {
        match &self.overrides.screen {
            Some(f) => f(self.base, message, newline),
            None => self.base.screen(message, newline),
        }
    }

    fn debug(&self, message: &str, once: bool) {
        match &self.overrides.debug {
            Some(f) => f(self.base, message, once),
            None => self.base.debug(message, once),
        }
    }

    fn info(&self, message: &str, newline: bool, quiet: Option<bool>, once: bool) {
        match &self.overrides.info {
            Some(f) => f(self.base, message, newline, quiet, once),
            None => self.base.info(message, newline, quiet, once),
        }
    }

    fn warning(&self, message: &str, once: bool) {
        match &self.overrides.warning {
            Some(f) => f(self.base, message, once),
            None => self.base.warning(message, once),
        }
    }

    fn error(&self, message: &str, once: bool) {
        match &self.overrides.error {
            Some(f) => f(self.base, message, once),
            None => self.base.error(message, once),
        }
    }

    fn handle_error(&self, message: &str, trace: Option<&str>, is_error: bool, prefix: bool) {
        match &self.overrides.handle_error {
            Some(f) => f(self.base, message, trace, is_error, prefix),
            None => self.base.handle_error(message, trace, is_error, prefix),
        }
    }

    fn deprecation_warning(&self, message: &str) {
        self.base.deprecation_warning(message);
    }

    fn deprecated_feature(&self, message: &str) {
        self.base.deprecated_feature(message);
    }
}
