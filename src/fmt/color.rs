//! 16-color ANSI palette. Styling here targets whatever terminal the user
//! runs the tool in, so the basic SGR colors are the only safe choice.

use std::fmt;
use std::ops::BitOr;

/// Three color bits plus an intensity bit, combined with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u8);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const RED: Self = Self(1);
    pub const GREEN: Self = Self(2);
    pub const YELLOW: Self = Self(3);
    pub const BLUE: Self = Self(4);
    pub const PURPLE: Self = Self(5);
    pub const CYAN: Self = Self(6);
    pub const WHITE: Self = Self(7);
    /// Bright variant of whatever color it is combined with.
    pub const LIGHT: Self = Self(0b1000);

    /// Maps to 30-37 for normal colors and 90-97 for light ones.
    #[must_use]
    pub const fn sgr(self) -> u8 {
        let base = self.0 & 0b0111;
        if self.0 & Self::LIGHT.0 == 0 {
            30 + base
        } else {
            90 + base
        }
    }

    /// `const` counterpart of `self | Color::LIGHT`, usable in style constants.
    #[must_use]
    pub const fn light(self) -> Self {
        Self(self.0 | Self::LIGHT.0)
    }

    #[must_use]
    pub const fn is_light(self) -> bool {
        self.0 & Self::LIGHT.0 != 0
    }
}

impl BitOr for Color {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sgr())
    }
}
