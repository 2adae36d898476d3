//! Styling is kept apart from routing: backends decide whether to apply it,
//! this module only knows how.

mod color;
mod style;

pub use color::Color;
pub use style::{Style, TermCode, format_text};
