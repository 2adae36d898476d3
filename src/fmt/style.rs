//! Named styling codes and the one pure function that applies them.

use super::Color;
use std::fmt;

/// A single SGR escape sequence, built once and reused for every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermCode(u8);

impl TermCode {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn make(color: Color) -> Self {
        Self(color.sgr())
    }

    /// The SGR parameter this code emits.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TermCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.0)
    }
}

/// Semantic styles used by callers, so they never pick raw colors.
pub struct Style;

impl Style {
    pub const HEADER: TermCode = TermCode::make(Color::YELLOW);
    pub const EMPHASIS: TermCode = TermCode::make(Color::BLUE.light());
    pub const FILENAME: TermCode = TermCode::make(Color::GREEN);
    pub const ID: TermCode = TermCode::make(Color::GREEN);
    pub const DELIM: TermCode = TermCode::make(Color::BLUE);
    pub const ERROR: TermCode = TermCode::make(Color::RED);
    pub const WARNING: TermCode = TermCode::make(Color::YELLOW);
    pub const SUPPRESS: TermCode = TermCode::make(Color::BLACK.light());
}

/// Wraps `text` in the given codes followed by a reset.
/// An empty style list leaves the text untouched.
#[must_use]
pub fn format_text(text: &str, styles: &[TermCode]) -> String {
    if styles.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + styles.len() * 5 + TermCode::RESET.len());
    for style in styles {
        out.push_str(&style.to_string());
    }
    out.push_str(text);
    out.push_str(TermCode::RESET);
    out
}
