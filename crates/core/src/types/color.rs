//! Hex color type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`HexColor`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ColorError {
    /// The input string is empty.
    #[error("color cannot be empty")]
    Empty,
    /// The input does not start with a `#`.
    #[error("color must start with '#'")]
    MissingHashPrefix,
    /// The input is not exactly six hex digits after the `#`.
    #[error("color must be exactly {expected} hex digits, got {actual}")]
    WrongLength {
        /// Required number of hex digits.
        expected: usize,
        /// Number of digits found.
        actual: usize,
    },
    /// A character after the `#` is not a hex digit.
    #[error("color contains a non-hex digit: '{0}'")]
    InvalidHexDigit(char),
}

/// A 6-digit hex color string, e.g. `#1A2B3C`.
///
/// This is the color format the preview renderer and the material swatch
/// lists exchange. Parsing enforces `#` followed by exactly six hex digits;
/// casing is preserved as entered.
///
/// ## Examples
///
/// ```
/// use tapforge_core::HexColor;
///
/// // Valid colors
/// assert!(HexColor::parse("#000000").is_ok());
/// assert!(HexColor::parse("#C0FFEE").is_ok());
///
/// // Invalid colors
/// assert!(HexColor::parse("").is_err());        // empty
/// assert!(HexColor::parse("000000").is_err());  // missing '#'
/// assert!(HexColor::parse("#fff").is_err());    // shorthand not accepted
/// assert!(HexColor::parse("#GGGGGG").is_err()); // not hex
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Number of hex digits required after the `#`.
    pub const DIGITS: usize = 6;

    /// `#000000`, the default body color.
    #[must_use]
    pub fn black() -> Self {
        Self("#000000".to_owned())
    }

    /// `#FFFFFF`, the default text color.
    #[must_use]
    pub fn white() -> Self {
        Self("#FFFFFF".to_owned())
    }

    /// Parse a `HexColor` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Does not start with `#`
    /// - Does not contain exactly six characters after the `#`
    /// - Contains a character that is not a hex digit
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        if s.is_empty() {
            return Err(ColorError::Empty);
        }

        let digits = s.strip_prefix('#').ok_or(ColorError::MissingHashPrefix)?;

        if digits.chars().count() != Self::DIGITS {
            return Err(ColorError::WrongLength {
                expected: Self::DIGITS,
                actual: digits.chars().count(),
            });
        }

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexDigit(bad));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the color as a string slice, including the leading `#`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `HexColor` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Deserialization goes through `parse` so a persisted configuration can never
// smuggle an invalid color back into the engine.
impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_colors() {
        assert!(HexColor::parse("#000000").is_ok());
        assert!(HexColor::parse("#FFFFFF").is_ok());
        assert!(HexColor::parse("#1a2b3c").is_ok());
        assert!(HexColor::parse("#C0ffee").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(HexColor::parse(""), Err(ColorError::Empty)));
    }

    #[test]
    fn test_parse_missing_hash() {
        assert!(matches!(
            HexColor::parse("000000"),
            Err(ColorError::MissingHashPrefix)
        ));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(matches!(
            HexColor::parse("#fff"),
            Err(ColorError::WrongLength {
                expected: 6,
                actual: 3
            })
        ));
        assert!(matches!(
            HexColor::parse("#1234567"),
            Err(ColorError::WrongLength { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert!(matches!(
            HexColor::parse("#GGGGGG"),
            Err(ColorError::InvalidHexDigit('G'))
        ));
    }

    #[test]
    fn test_preserves_casing() {
        let color = HexColor::parse("#AbCdEf").unwrap();
        assert_eq!(color.as_str(), "#AbCdEf");
    }

    #[test]
    fn test_display() {
        let color = HexColor::parse("#123456").unwrap();
        assert_eq!(format!("{color}"), "#123456");
    }

    #[test]
    fn test_serde_roundtrip() {
        let color = HexColor::parse("#123456").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#123456\"");

        let parsed: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn test_from_str() {
        let color: HexColor = "#654321".parse().unwrap();
        assert_eq!(color.as_str(), "#654321");
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<HexColor>("\"#12345\"").is_err());
        assert!(serde_json::from_str::<HexColor>("\"112233\"").is_err());
    }
}
