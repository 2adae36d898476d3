//! Lossy encoding for stream writes and the round-trip check behind
//! `Logger::try_encoding`.
//!
//! Unencodable characters are dropped, never replaced: a message written to
//! a legacy-encoded terminal loses the glyphs it cannot show instead of
//! gaining `?` or numeric character references.

use encoding_rs::{EncoderResult, Encoding, UTF_8};
use std::borrow::Cow;

/// WHATWG maps "ascii" onto windows-1252, which would make every Latin-1
/// character look encodable. ASCII is therefore handled on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Ascii,
    Charset(&'static Encoding),
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::Charset(UTF_8)
    }
}

impl TextEncoding {
    /// Accepts WHATWG labels plus the common punctuation-free spellings
    /// (`latin-1`, `utf_8`).
    ///
    /// # Errors
    /// `Error::UnknownEncoding` when no encoding matches the label.
    pub fn for_label(label: &str) -> Result<Self, crate::Error> {
        let normalized = label.trim().to_ascii_lowercase();
        if matches!(
            normalized.as_str(),
            "ascii" | "us-ascii" | "us_ascii" | "646" | "ansi_x3.4-1968"
        ) {
            return Ok(Self::Ascii);
        }

        Encoding::for_label(normalized.as_bytes())
            .or_else(|| {
                let compact: String = normalized
                    .chars()
                    .filter(|c| *c != '-' && *c != '_')
                    .collect();
                Encoding::for_label(compact.as_bytes())
            })
            .map(Self::Charset)
            .ok_or_else(|| crate::Error::UnknownEncoding(label.to_string()))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Charset(encoding) => encoding.name(),
        }
    }

    /// Encodes `text`, silently dropping characters the encoding cannot represent.
    #[must_use]
    pub fn encode_lossy(self, text: &str) -> Cow<'_, [u8]> {
        match self {
            Self::Ascii if text.is_ascii() => Cow::Borrowed(text.as_bytes()),
            Self::Ascii => Cow::Owned(text.bytes().filter(u8::is_ascii).collect()),
            // UTF-16 encoders in encoding_rs emit UTF-8, which is lossless too
            Self::Charset(encoding) if encoding.output_encoding() == UTF_8 => {
                Cow::Borrowed(text.as_bytes())
            }
            Self::Charset(encoding) => Cow::Owned(encode_ignoring_unmappable(encoding, text)),
        }
    }

    /// Decodes bytes produced by `encode_lossy`.
    #[must_use]
    pub fn decode_lossy(self, bytes: &[u8]) -> String {
        match self {
            Self::Ascii => String::from_utf8_lossy(bytes).into_owned(),
            Self::Charset(encoding) => encoding
                .output_encoding()
                .decode_without_bom_handling(bytes)
                .0
                .into_owned(),
        }
    }

    /// True when encoding then decoding reproduces `text` exactly.
    #[must_use]
    pub fn round_trips(self, text: &str) -> bool {
        match self {
            Self::Ascii => text.is_ascii(),
            Self::Charset(_) => self.decode_lossy(&self.encode_lossy(text)) == text,
        }
    }
}

fn encode_ignoring_unmappable(encoding: &'static Encoding, text: &str) -> Vec<u8> {
    let mut encoder = encoding.new_encoder();
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 1024];
    let mut remaining = text;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(remaining, &mut buf, true);
        out.extend_from_slice(&buf[..written]);
        remaining = &remaining[read..];
        match result {
            EncoderResult::InputEmpty => break,
            // the unmappable character has already been consumed
            EncoderResult::OutputFull | EncoderResult::Unmappable(_) => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_drops_non_ascii() {
        let enc = TextEncoding::for_label("ascii").unwrap();
        assert_eq!(enc.encode_lossy("café").as_ref(), b"caf");
        assert!(!enc.round_trips("café"));
        assert!(enc.round_trips("cafe"));
    }

    #[test]
    fn latin1_keeps_accents_but_drops_cjk() {
        let enc = TextEncoding::for_label("latin-1").unwrap();
        assert!(enc.round_trips("café"));
        assert!(!enc.round_trips("日本"));
        assert_eq!(enc.encode_lossy("a日b").as_ref(), b"ab");
    }

    #[test]
    fn utf8_is_lossless() {
        let enc = TextEncoding::for_label("UTF-8").unwrap();
        assert!(enc.round_trips("日本 café"));
        assert!(matches!(enc.encode_lossy("x"), Cow::Borrowed(_)));
    }

    #[test]
    fn unknown_label_is_an_error() {
        assert!(matches!(
            TextEncoding::for_label("klingon"),
            Err(crate::Error::UnknownEncoding(_))
        ));
    }
}
