//! Stream backend: stdout, stderr, files, or any in-memory writer.

use crate::encoding::TextEncoding;
use crate::internal;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// A writer plus what the caller knows about it. Terminal capability
/// detection is not done here beyond the `stdout`/`stderr` shortcuts.
pub struct Destination {
    writer: Box<dyn Write + Send>,
    encoding: Option<String>,
    styled: bool,
}

impl Destination {
    /// Unstyled, with no declared encoding.
    #[must_use]
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            encoding: None,
            styled: false,
        }
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            encoding: Some("utf-8".to_string()),
            styled: io::stdout().is_terminal(),
        }
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(io::stderr()),
            encoding: Some("utf-8".to_string()),
            styled: io::stderr().is_terminal(),
        }
    }

    /// Encoding the destination itself expects, like a terminal's locale charset.
    #[must_use]
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Whether the destination renders SGR escape sequences.
    #[must_use]
    pub const fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }
}

/// Writes each message whole, behind its own lock, in call order.
pub struct StreamOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    encoding: Option<TextEncoding>,
    use_color: bool,
    broken: AtomicBool,
}

impl StreamOutput {
    /// `pref_encoding` wins over the destination's own encoding; an unknown
    /// label is reported and ignored.
    #[must_use]
    pub fn new(destination: Destination, allow_color: bool, pref_encoding: Option<&str>) -> Self {
        let encoding = pref_encoding
            .or(destination.encoding.as_deref())
            .and_then(|label| match TextEncoding::for_label(label) {
                Ok(encoding) => Some(encoding),
                Err(e) => {
                    internal::warning(&format!("{e}, falling back to utf-8"));
                    None
                }
            });

        Self {
            writer: Mutex::new(destination.writer),
            encoding,
            use_color: allow_color && destination.styled,
            broken: AtomicBool::new(false),
        }
    }

    /// Encoding used for writes.
    #[must_use]
    pub fn encoding(&self) -> TextEncoding {
        self.encoding.unwrap_or_default()
    }

    /// `None` when neither the logger nor the destination declared one.
    #[must_use]
    pub const fn declared_encoding(&self) -> Option<TextEncoding> {
        self.encoding
    }

    #[must_use]
    pub const fn use_color(&self) -> bool {
        self.use_color
    }

    /// # Errors
    /// Returns the underlying write or flush error.
    pub fn log(&self, message: &str) -> Result<(), crate::Error> {
        let bytes = self.encoding().encode_lossy(message);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    pub(crate) fn is_broken(&self) -> bool {
        self.broken.load(Ordering::Acquire)
    }

    /// True only for the call that flipped the flag.
    pub(crate) fn mark_broken(&self) -> bool {
        !self.broken.swap(true, Ordering::AcqRel)
    }
}

/// Cloneable in-memory writer. Every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
