//! Validated `#RRGGBBAA` color values.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{8}$").expect("color pattern is a valid regex")
});

/// A sheet color in XMind's `#RRGGBBAA` notation (alpha last).
///
/// The string is kept exactly as supplied; `#ff0000ff` and `#FF0000FF`
/// are both accepted and written back unchanged.
///
/// ```
/// use xmindkit::Color;
///
/// let black: Color = "#000000FF".parse().unwrap();
/// assert_eq!(black.as_str(), "#000000FF");
/// assert!("000000FF".parse::<Color>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Default background used by the CLI (opaque black).
    pub const DEFAULT_BACKGROUND: &'static str = "#000000FF";

    /// Validates and wraps a color string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] unless `s` is `#` followed by
    /// exactly eight hex digits.
    pub fn new(s: &str) -> Result<Self> {
        if COLOR_PATTERN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidColor {
                value: s.to_string(),
            })
        }
    }

    /// Returns the color as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `(r, g, b, a)` channels.
    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[1 + 2 * i..3 + 2 * i], 16).unwrap_or(0);
        (channel(0), channel(1), channel(2), channel(3))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_colors() {
        for s in ["#000000FF", "#ff0000ff", "#0a1B2c3D"] {
            assert!(Color::new(s).is_ok(), "{s} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_colors() {
        for s in ["000000FF", "#000000", "#000000FFF", "#GG0000FF", "", "#", " #000000FF"] {
            let err = Color::new(s).unwrap_err();
            assert!(matches!(err, Error::InvalidColor { .. }), "{s} should be rejected");
        }
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(Color::new("#abcdef12").unwrap().to_string(), "#abcdef12");
    }

    #[test]
    fn test_rgba() {
        let color = Color::new("#FF800040").unwrap();
        assert_eq!(color.rgba(), (0xFF, 0x80, 0x00, 0x40));
    }
}
