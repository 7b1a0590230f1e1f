//! Font selection and the cell metrics derived from it.
//!
//! A terminal cannot measure glyphs the way a pixel backend can, so the
//! metrics here are a fixed model of a monospaced face: the advance
//! width is three fifths of the point size and the line height adds a
//! third of the size as leading. Everything that needs pixel geometry,
//! the ruler above all, goes through [`FontSpec::metrics`] so a font
//! change reflows every consumer consistently.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Family used when no preference has been saved yet.
pub const DEFAULT_FAMILY: &str = "Monospaced";

/// Point size used when no preference has been saved yet.
pub const DEFAULT_SIZE: u16 = 12;

/// A font family and point size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub family: String,
    pub size: u16,
}

/// Pixel geometry of a [`FontSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Horizontal advance of one glyph, in pixels.
    pub char_width: u32,
    /// Height of one text line including leading, in pixels.
    pub line_height: u32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Geometry of this font under the fixed monospace model.
    ///
    /// A zero point size yields a zero advance width; callers treat
    /// that as "no columns fit" rather than an error.
    pub const fn metrics(&self) -> FontMetrics {
        let size = self.size as u32;
        FontMetrics {
            char_width: size * 3 / 5,
            line_height: size + size / 3,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, DEFAULT_SIZE)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.family, self.size)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontParseError {
    #[error("missing ':' separator between family and size")]
    MissingSeparator,
    #[error("font family is empty")]
    EmptyFamily,
    #[error("invalid point size: {0}")]
    InvalidSize(String),
}

impl FromStr for FontSpec {
    type Err = FontParseError;

    /// Parses `FAMILY:SIZE`. The family may itself contain colons
    /// ("Iosevka:Term:11" is family "Iosevka:Term" at 11 points), so
    /// the size is taken from the last separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (family, size) = s.rsplit_once(':').ok_or(FontParseError::MissingSeparator)?;
        let family = family.trim();
        if family.is_empty() {
            return Err(FontParseError::EmptyFamily);
        }
        let size: u16 = size
            .trim()
            .parse()
            .map_err(|_| FontParseError::InvalidSize(size.trim().to_string()))?;
        Ok(Self::new(family, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font() {
        let font = FontSpec::default();
        assert_eq!(font.family, "Monospaced");
        assert_eq!(font.size, 12);
    }

    #[test]
    fn test_metrics_known_values() {
        // 10pt: floor(30 / 5) = 6 wide, 10 + 3 = 13 tall.
        let m = FontSpec::new("Mono", 10).metrics();
        assert_eq!(m.char_width, 6);
        assert_eq!(m.line_height, 13);

        let m = FontSpec::default().metrics();
        assert_eq!(m.char_width, 7);
        assert_eq!(m.line_height, 16);
    }

    #[test]
    fn test_metrics_zero_size_is_degenerate_not_panic() {
        let m = FontSpec::new("Mono", 0).metrics();
        assert_eq!(m.char_width, 0);
        assert_eq!(m.line_height, 0);
    }

    #[test]
    fn test_parse_family_and_size() {
        let font: FontSpec = "DejaVu Sans Mono:14".parse().unwrap();
        assert_eq!(font.family, "DejaVu Sans Mono");
        assert_eq!(font.size, 14);
    }

    #[test]
    fn test_parse_family_containing_colon() {
        let font: FontSpec = "Iosevka:Term:11".parse().unwrap();
        assert_eq!(font.family, "Iosevka:Term");
        assert_eq!(font.size, 11);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "Hack".parse::<FontSpec>(),
            Err(FontParseError::MissingSeparator)
        );
        assert_eq!(":12".parse::<FontSpec>(), Err(FontParseError::EmptyFamily));
        assert_eq!(
            "Hack:big".parse::<FontSpec>(),
            Err(FontParseError::InvalidSize("big".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        let font = FontSpec::new("Hack", 11);
        assert_eq!(font.to_string().parse::<FontSpec>().unwrap(), font);
    }
}
