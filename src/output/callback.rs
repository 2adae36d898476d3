//! Forwards to an application-supplied logger object.

use std::sync::Arc;

/// The host application's logger. Each method receives one pre-formatted
/// message with trailing whitespace already stripped.
pub trait ClassLogger: Send + Sync {
    /// Receives both debug and info messages.
    fn debug(&self, msg: &str);
    fn warning(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Wraps a single-argument callback, usually one method of a [`ClassLogger`].
#[derive(Clone)]
pub struct CallbackOutput {
    callback: Arc<dyn Fn(&str) + Send + Sync>,
}

impl CallbackOutput {
    #[must_use]
    pub fn new(callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
        }
    }

    pub fn log(&self, message: &str) {
        (self.callback)(message.trim_end());
    }
}
