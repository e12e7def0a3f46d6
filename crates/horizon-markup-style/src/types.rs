//! Enumerated style attribute values.
//!
//! Serialized names follow the host-facing vocabulary (`"bold"`,
//! `"line-through"`, `"condensedBold"`), so style sheets written for the
//! JavaScript side load unchanged.

use serde::{Deserialize, Serialize};

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    Normal,
    Bold,
    Ultralight,
    Thin,
    Light,
    Medium,
    Regular,
    Semibold,
    CondensedBold,
    Condensed,
    Heavy,
    Black,
}


/// Font style (normal, italic, oblique).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Auto,
    Left,
    Right,
    Center,
    Justify,
}

/// Text-case transform applied at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

/// Text decoration line.
///
/// # Example
///
/// ```
/// use horizon_markup_style::types::TextDecorationLine;
///
/// let both = TextDecorationLine::from_flags(true, true);
/// assert_eq!(both, TextDecorationLine::UnderlineLineThrough);
/// assert!(both.has_underline());
/// assert!(both.has_line_through());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextDecorationLine {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "underline")]
    Underline,
    #[serde(rename = "line-through")]
    LineThrough,
    #[serde(rename = "underline line-through")]
    UnderlineLineThrough,
}

impl TextDecorationLine {
    /// Build a decoration line from independent underline / line-through flags.
    pub fn from_flags(underline: bool, line_through: bool) -> Self {
        match (underline, line_through) {
            (true, true) => TextDecorationLine::UnderlineLineThrough,
            (true, false) => TextDecorationLine::Underline,
            (false, true) => TextDecorationLine::LineThrough,
            (false, false) => TextDecorationLine::None,
        }
    }

    /// Check whether this decoration draws an underline.
    pub fn has_underline(&self) -> bool {
        matches!(
            self,
            TextDecorationLine::Underline | TextDecorationLine::UnderlineLineThrough
        )
    }

    /// Check whether this decoration draws a line through the text.
    pub fn has_line_through(&self) -> bool {
        matches!(
            self,
            TextDecorationLine::LineThrough | TextDecorationLine::UnderlineLineThrough
        )
    }
}

/// Text decoration style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecorationStyle {
    Solid,
    Double,
    Dotted,
    Dashed,
}
