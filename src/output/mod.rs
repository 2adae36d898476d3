//! Backends a level can be routed to. The set is closed: every backend the
//! router knows about is a variant here, so dispatch is one `match` per
//! operation instead of a trait object per level.

mod callback;
mod stream;
mod system;

pub use callback::{CallbackOutput, ClassLogger};
pub use stream::{Destination, SharedBuffer, StreamOutput};
pub use system::{SYSTEM_LOG_TARGET, SystemLogOutput};

use crate::fmt::{TermCode, format_text};

/// One sink for fully formatted text.
pub enum Output {
    /// Discards everything and reports itself inactive.
    Null,
    Stream(StreamOutput),
    ClassCallback(CallbackOutput),
    SystemLog(SystemLogOutput),
}

impl Output {
    /// Null backends and streams that already failed are skipped by the router.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Stream(stream) => !stream.is_broken(),
            Self::ClassCallback(_) | Self::SystemLog(_) => true,
        }
    }

    /// Only terminal-like streams can carry reshaped bidi text.
    #[must_use]
    pub const fn supports_bidi(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    #[must_use]
    pub const fn supports_styling(&self) -> bool {
        match self {
            Self::Stream(stream) => stream.use_color(),
            Self::Null | Self::ClassCallback(_) | Self::SystemLog(_) => false,
        }
    }

    /// Applies `styles` only when this backend can render them.
    #[must_use]
    pub fn format(&self, text: &str, styles: &[TermCode]) -> String {
        if self.supports_styling() {
            format_text(text, styles)
        } else {
            text.to_string()
        }
    }

    /// # Errors
    /// I/O errors from a stream destination. Callback and system-log sinks never fail.
    pub fn log(&self, message: &str) -> Result<(), crate::Error> {
        match self {
            Self::Null => Ok(()),
            Self::Stream(stream) => stream.log(message),
            Self::ClassCallback(callback) => {
                callback.log(message);
                Ok(())
            }
            Self::SystemLog(system) => {
                system.log(message);
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Stream(stream) => f
                .debug_struct("Stream")
                .field("encoding", &stream.encoding().name())
                .field("use_color", &stream.use_color())
                .finish(),
            Self::ClassCallback(_) => f.write_str("ClassCallback"),
            Self::SystemLog(system) => f
                .debug_struct("SystemLog")
                .field("level", &system.level())
                .finish(),
        }
    }
}
