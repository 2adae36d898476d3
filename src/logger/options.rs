//! Per-call knobs for `Logger::log`.

/// Defaults: trailing newline, no dedup, not suppressed, no trace, no prefix.
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub(crate) newline: bool,
    pub(crate) once: bool,
    pub(crate) suppress: bool,
    pub(crate) trace: Option<String>,
    pub(crate) prefix: Vec<String>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            newline: true,
            once: false,
            suppress: false,
            trace: None,
            prefix: Vec::new(),
        }
    }
}

impl LogOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }

    /// Emit only if this exact message text has not been emitted with `once` before.
    #[must_use]
    pub const fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    #[must_use]
    pub const fn suppress(mut self, suppress: bool) -> Self {
        self.suppress = suppress;
        self
    }

    /// Appended to error messages in verbose runs instead of the current call stack.
    #[must_use]
    pub fn trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Adds one prefix fragment. Empty fragments are ignored.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.is_empty() {
            self.prefix.push(prefix);
        }
        self
    }

    /// Adds several fragments, in order; they end up space-joined before the message.
    #[must_use]
    pub fn prefixes<I>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.prefix
            .extend(prefixes.into_iter().map(|p| p.to_string()));
        self
    }
}
