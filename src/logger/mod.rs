//! The router: one backend per level, a verbosity policy, a "log once" cache
//! and the optional bidi pipeline, behind a `&self` API that is safe to share
//! between threads.
//!
//! A logger starts with only the screen channel wired. One of the `setup_*`
//! calls routes the remaining levels; any of them may be called again later
//! and the last call wins.

mod builder;
mod derived;
mod from_config;
mod options;
mod trace;

pub use builder::LoggerBuilder;
pub use derived::{DerivedBuilder, DerivedLogger, Emitter};
pub use options::LogOptions;
pub use trace::format_error_chain;

use crate::bidi::{self, BidiWorkaround};
use crate::encoding::TextEncoding;
use crate::fmt::{Style, TermCode};
use crate::internal;
use crate::level::{LogLevel, Verbosity};
use crate::output::{
    CallbackOutput, ClassLogger, Destination, Output, StreamOutput, SystemLogOutput,
};
use std::backtrace::Backtrace;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Mapping and dedup cache share one lock so "log once" is a single
/// check-then-insert.
#[derive(Default)]
struct RouterState {
    mapping: HashMap<LogLevel, Arc<Output>>,
    /// Never evicted; see `Logger::reset_message_cache`.
    message_cache: HashSet<String>,
}

enum BidiState {
    Inactive,
    Active(BidiWorkaround),
    /// Activation or a later round trip failed; stays off for this logger.
    Failed,
}

pub struct Logger {
    verbosity: Verbosity,
    pref_encoding: Option<String>,
    allow_color: bool,
    report_write_failures: bool,
    state: Mutex<RouterState>,
    bidi: Mutex<BidiState>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Shortcut for the common case: a screen destination and a verbosity.
    #[must_use]
    pub fn new(screen: Option<Destination>, verbosity: Verbosity) -> Self {
        let builder = Self::builder().verbosity(verbosity);
        match screen {
            Some(screen) => builder.screen(screen).build(),
            None => builder.build(),
        }
    }

    /// Starts a derived view; see [`DerivedLogger`].
    #[must_use]
    pub fn make_derived(&self) -> DerivedBuilder<'_> {
        DerivedBuilder::new(self)
    }

    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// The backend currently routed for `level`, if any.
    #[must_use]
    pub fn output(&self, level: LogLevel) -> Option<Arc<Output>> {
        self.lock_state().mapping.get(&level).cloned()
    }

    /// Routes to two stream destinations, typically stdout and stderr.
    pub fn setup_stream_logger(
        &self,
        stdout: Option<Destination>,
        stderr: Option<Destination>,
        no_warnings: bool,
    ) -> &Self {
        let null = Arc::new(Output::Null);
        let stdout = stdout.map_or_else(|| Arc::clone(&null), |d| self.stream(d));
        let stderr = stderr.map_or_else(|| Arc::clone(&null), |d| self.stream(d));

        let debug = if self.verbosity == Verbosity::Verbose {
            Arc::clone(&stderr)
        } else {
            Arc::clone(&null)
        };
        let warning = if no_warnings {
            Arc::clone(&null)
        } else {
            Arc::clone(&stderr)
        };

        self.replace_mapping([
            (LogLevel::Debug, debug),
            (LogLevel::Info, stdout),
            (LogLevel::Warning, warning),
            (LogLevel::Error, stderr),
        ]);
        self
    }

    /// Routes to the host application's logger. Info goes to its `debug`
    /// method as well; the host cannot tell the two apart.
    pub fn setup_class_logger(&self, logger: Arc<dyn ClassLogger>) -> &Self {
        let debug_logger = Arc::clone(&logger);
        let warning_logger = Arc::clone(&logger);
        let debug = Arc::new(Output::ClassCallback(CallbackOutput::new(move |msg| {
            debug_logger.debug(msg);
        })));
        let warning = Arc::new(Output::ClassCallback(CallbackOutput::new(move |msg| {
            warning_logger.warning(msg);
        })));
        let error = Arc::new(Output::ClassCallback(CallbackOutput::new(move |msg| {
            logger.error(msg);
        })));

        self.replace_mapping([
            (LogLevel::Debug, Arc::clone(&debug)),
            (LogLevel::Info, debug),
            (LogLevel::Warning, warning),
            (LogLevel::Error, error),
        ]);
        self
    }

    /// Routes to the `log` facade at matching severities.
    pub fn setup_system_logger(&self) -> &Self {
        let system = |level| Arc::new(Output::SystemLog(SystemLogOutput::new(level)));
        self.replace_mapping([
            (LogLevel::Debug, system(log::Level::Debug)),
            (LogLevel::Info, system(log::Level::Info)),
            (LogLevel::Warning, system(log::Level::Warn)),
            (LogLevel::Error, system(log::Level::Error)),
        ]);
        self
    }

    /// Core dispatch. Absent backends, `suppress` and dedup hits are silent no-ops.
    pub fn log(&self, level: LogLevel, message: &str, options: &LogOptions) {
        let Some(output) = self.resolve(level, message, options) else {
            return;
        };

        let mut text = if output.supports_bidi() {
            self.apply_bidi_workaround(message)
        } else {
            message.to_string()
        };

        if !options.prefix.is_empty() {
            let mut prefixed = options.prefix.join(" ");
            prefixed.push(' ');
            prefixed.push_str(&text);
            text = prefixed;
        }

        if level == LogLevel::Error && self.verbosity == Verbosity::Verbose {
            text.push('\n');
            match &options.trace {
                Some(trace) => text.push_str(trace),
                None => text.push_str(&Backtrace::force_capture().to_string()),
            }
        }

        if options.newline {
            text.push('\n');
        }

        if let Err(e) = output.log(&text) {
            self.report_write_failure(level, &output, &e);
        }
    }

    /// Styles `text` for the backend routed at `level`, or returns it as is.
    #[must_use]
    pub fn format(&self, level: LogLevel, text: &str, styles: &[TermCode]) -> String {
        self.output(level)
            .map_or_else(|| text.to_string(), |output| output.format(text, styles))
    }

    /// Returns `text` if the stream at `level` can carry it unchanged,
    /// `fallback` otherwise. Non-stream backends always get `text`.
    #[must_use]
    pub fn try_encoding<'a>(
        &self,
        level: LogLevel,
        text: &'a str,
        fallback: &'a str,
        pref_encoding: Option<&str>,
    ) -> &'a str {
        let Some(output) = self.output(level) else {
            return text;
        };
        let Output::Stream(stream) = output.as_ref() else {
            return text;
        };

        let encoding = match pref_encoding {
            Some(label) => TextEncoding::for_label(label).ok(),
            None => Some(stream.declared_encoding().unwrap_or(TextEncoding::Ascii)),
        };

        match encoding {
            Some(encoding) if encoding.round_trips(text) => text,
            _ => fallback,
        }
    }

    pub fn screen(&self, message: &str, newline: bool) {
        self.log(
            LogLevel::Screen,
            message,
            &LogOptions::new().newline(newline),
        );
    }

    /// Progress lines redraw in place, so no newline is added.
    pub fn progress(&self, message: &str) {
        self.log(LogLevel::Progress, message, &LogOptions::new().newline(false));
    }

    pub fn debug(&self, message: &str, once: bool) {
        self.log(LogLevel::Debug, message, &LogOptions::new().once(once));
    }

    /// Verbose runs never suppress info; otherwise `quiet` decides, falling
    /// back to whether the logger itself is quiet.
    pub fn info(&self, message: &str, newline: bool, quiet: Option<bool>, once: bool) {
        let suppress = if self.verbosity == Verbosity::Verbose {
            false
        } else {
            quiet.unwrap_or(self.verbosity == Verbosity::Quiet)
        };

        self.log(
            LogLevel::Info,
            message,
            &LogOptions::new()
                .suppress(suppress)
                .newline(newline)
                .once(once),
        );
    }

    pub fn warning(&self, message: &str, once: bool) {
        let prefix = self.format(LogLevel::Warning, "WARNING:", &[Style::WARNING]);
        self.log(
            LogLevel::Warning,
            message,
            &LogOptions::new().once(once).prefix(prefix),
        );
    }

    pub fn error(&self, message: &str, once: bool) {
        self.log(LogLevel::Error, message, &LogOptions::new().once(once));
    }

    /// Reporting funnel for operational failures. Never decides whether the
    /// run is over; `is_error` only matters to derived loggers that override this.
    pub fn handle_error(&self, message: &str, trace: Option<&str>, _is_error: bool, prefix: bool) {
        let mut options = LogOptions::new();
        if prefix {
            options = options.prefix(self.format(LogLevel::Error, "ERROR:", &[Style::ERROR]));
        }
        if let Some(trace) = trace {
            options = options.trace(trace);
        }
        self.log(LogLevel::Error, message, &options);
    }

    /// Soft notice on the warning channel, shown once per message.
    pub fn deprecation_warning(&self, message: &str) {
        let prefix = self.format(LogLevel::Warning, "DeprecationWarning:", &[Style::ERROR]);
        self.log(
            LogLevel::Warning,
            message,
            &LogOptions::new().once(true).prefix(prefix),
        );
    }

    /// Notice for a feature that is already gone or about to break, shown once per message.
    pub fn deprecated_feature(&self, message: &str) {
        let prefix = self.format(LogLevel::Warning, "Deprecated Feature:", &[Style::ERROR]);
        self.log(
            LogLevel::Warning,
            message,
            &LogOptions::new().once(true).prefix(prefix),
        );
    }

    /// The dedup cache grows for the lifetime of the logger. Long-lived hosts
    /// that reuse one logger across runs can clear it here.
    pub fn reset_message_cache(&self) {
        self.lock_state().message_cache.clear();
    }

    /// Spawns the reshaping tool with the default read timeout.
    ///
    /// # Errors
    /// See [`Logger::init_bidi_workaround_with`].
    pub fn init_bidi_workaround(&self) -> Result<(), crate::Error> {
        self.init_bidi_workaround_with(bidi::DEFAULT_TIMEOUT)
    }

    /// One-time activation. A second call while active does nothing. A failure
    /// is reported on the error channel and disables bidi for this logger.
    ///
    /// # Errors
    /// `Error::BidiUnavailable` when no reshaping tool can be started, or
    /// when an earlier activation already failed.
    pub fn init_bidi_workaround_with(&self, timeout: Duration) -> Result<(), crate::Error> {
        let mut bidi = self.lock_bidi();
        match *bidi {
            BidiState::Active(_) => return Ok(()),
            BidiState::Failed => return Err(crate::Error::BidiUnavailable),
            BidiState::Inactive => {}
        }

        match BidiWorkaround::spawn(timeout) {
            Ok(workaround) => {
                *bidi = BidiState::Active(workaround);
                Ok(())
            }
            Err(e) => {
                *bidi = BidiState::Failed;
                drop(bidi);
                let prefix = self.format(LogLevel::Error, "ERROR:", &[Style::ERROR]);
                self.log(
                    LogLevel::Error,
                    &e.to_string(),
                    &LogOptions::new().once(true).prefix(prefix),
                );
                Err(e)
            }
        }
    }

    /// Activates a pipeline built by the caller, replacing any previous one.
    pub fn install_bidi(&self, workaround: BidiWorkaround) {
        *self.lock_bidi() = BidiState::Active(workaround);
    }

    #[must_use]
    pub fn is_bidi_active(&self) -> bool {
        matches!(*self.lock_bidi(), BidiState::Active(_))
    }

    /// Picks the backend and applies suppression and dedup under one lock.
    fn resolve(&self, level: LogLevel, message: &str, options: &LogOptions) -> Option<Arc<Output>> {
        if options.suppress {
            return None;
        }

        let mut state = self.lock_state();
        let output = state
            .mapping
            .get(&level)
            .filter(|output| output.is_active())
            .cloned()?;

        if options.once && !state.message_cache.insert(message.to_string()) {
            return None;
        }

        Some(output)
    }

    /// Falls back to the original text and turns bidi off when the tool misbehaves.
    fn apply_bidi_workaround(&self, message: &str) -> String {
        let mut bidi = self.lock_bidi();
        let BidiState::Active(workaround) = &mut *bidi else {
            return message.to_string();
        };

        match workaround.reshape(message) {
            Ok(reshaped) => reshaped,
            Err(e) => {
                *bidi = BidiState::Failed;
                drop(bidi);
                internal::error(&format!("bidi workaround disabled: {e}"));
                message.to_string()
            }
        }
    }

    fn report_write_failure(&self, level: LogLevel, output: &Output, err: &crate::Error) {
        if let Output::Stream(stream) = output
            && stream.mark_broken()
            && self.report_write_failures
        {
            internal::error(&format!("unable to write {level} output: {err}"));
        }
    }

    fn stream(&self, destination: Destination) -> Arc<Output> {
        Arc::new(Output::Stream(StreamOutput::new(
            destination,
            self.allow_color,
            self.pref_encoding.as_deref(),
        )))
    }

    fn replace_mapping(&self, entries: impl IntoIterator<Item = (LogLevel, Arc<Output>)>) {
        self.lock_state().mapping.extend(entries);
    }

    fn lock_state(&self) -> MutexGuard<'_, RouterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_bidi(&self) -> MutexGuard<'_, BidiState> {
        self.bidi.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
