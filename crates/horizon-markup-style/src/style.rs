//! The rich text style record and its cascade.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::types::{
    FontStyle, FontWeight, TextAlign, TextDecorationLine, TextDecorationStyle, TextTransform,
};

/// Complete set of style attributes for a run of text.
///
/// Every field is independently optional. An absent field means "inherit
/// unchanged" from whatever style this one is merged onto, so the default
/// value is the empty base style.
///
/// Colors are kept as unparsed references (`"#ff0000"`, `"red"`); resolving
/// them is the job of the measurement/rendering collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichTextStyle {
    // === Color ===
    /// Foreground color reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    /// Background highlight behind the text run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_background_color: Option<String>,

    // === Typography ===
    /// Font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Font weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    /// Font style (normal, italic, oblique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    /// Font family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Line height in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Additional space between letters, in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    /// Horizontal alignment of the enclosing block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// Text-case transform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,

    // === Decoration ===
    /// Underline / line-through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration_line: Option<TextDecorationLine>,
    /// Decoration color reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration_color: Option<String>,
    /// Decoration style (solid, double, dotted, dashed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration_style: Option<TextDecorationStyle>,

    // === Box Model ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,
}

impl RichTextStyle {
    /// Create an empty style (every attribute absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Cascade `other` onto this style in place.
    ///
    /// Every attribute set in `other` overwrites the one here; absent
    /// attributes leave this style untouched. Decoration lines are unioned
    /// instead of replaced, see [`merge_decoration_lines`].
    pub fn cascade(&mut self, other: &RichTextStyle) {
        macro_rules! cascade_if_set {
            ($($prop:ident),+ $(,)?) => {
                $(
                    if let Some(value) = &other.$prop {
                        self.$prop = Some(value.clone());
                    }
                )+
            };
        }

        cascade_if_set!(
            // Color
            font_color,
            fragment_background_color,
            // Typography
            font_size,
            font_weight,
            font_style,
            font_family,
            line_height,
            letter_spacing,
            text_align,
            text_transform,
            // Decoration
            text_decoration_color,
            text_decoration_style,
            // Box model
            margin_top,
            margin_bottom,
            margin_left,
            margin_right,
        );

        self.text_decoration_line =
            merge_decoration_lines(self.text_decoration_line, other.text_decoration_line);
    }

    /// Return `self` with `other` cascaded on top.
    pub fn merged(&self, other: &RichTextStyle) -> RichTextStyle {
        let mut merged = self.clone();
        merged.cascade(other);
        merged
    }

    /// Fill in a `solid` decoration style when a visible decoration line has none.
    pub fn normalized(&self) -> RichTextStyle {
        let mut adjusted = self.clone();
        if let Some(line) = adjusted.text_decoration_line {
            if line != TextDecorationLine::None && adjusted.text_decoration_style.is_none() {
                adjusted.text_decoration_style = Some(TextDecorationStyle::Solid);
            }
        }
        adjusted
    }

    /// Apply this style's text transform to `text`.
    ///
    /// `capitalize` upper-cases the first character of every space-separated word.
    pub fn apply_text_transform<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.text_transform {
            Some(TextTransform::Uppercase) => Cow::Owned(text.to_uppercase()),
            Some(TextTransform::Lowercase) => Cow::Owned(text.to_lowercase()),
            Some(TextTransform::Capitalize) => Cow::Owned(capitalize_words(text)),
            Some(TextTransform::None) | None => Cow::Borrowed(text),
        }
    }

    // === Builder ===

    /// Set the foreground color.
    pub fn font_color(mut self, value: impl Into<String>) -> Self {
        self.font_color = Some(value.into());
        self
    }

    /// Set the background highlight color.
    pub fn fragment_background_color(mut self, value: impl Into<String>) -> Self {
        self.fragment_background_color = Some(value.into());
        self
    }

    /// Set the font size.
    pub fn font_size(mut self, value: f64) -> Self {
        self.font_size = Some(value);
        self
    }

    /// Set the font weight.
    pub fn font_weight(mut self, value: FontWeight) -> Self {
        self.font_weight = Some(value);
        self
    }

    /// Set the font style.
    pub fn font_style(mut self, value: FontStyle) -> Self {
        self.font_style = Some(value);
        self
    }

    /// Set the font family.
    pub fn font_family(mut self, value: impl Into<String>) -> Self {
        self.font_family = Some(value.into());
        self
    }

    /// Set the line height.
    pub fn line_height(mut self, value: f64) -> Self {
        self.line_height = Some(value);
        self
    }

    /// Set the letter spacing.
    pub fn letter_spacing(mut self, value: f64) -> Self {
        self.letter_spacing = Some(value);
        self
    }

    /// Set the text alignment.
    pub fn text_align(mut self, value: TextAlign) -> Self {
        self.text_align = Some(value);
        self
    }

    /// Set the text transform.
    pub fn text_transform(mut self, value: TextTransform) -> Self {
        self.text_transform = Some(value);
        self
    }

    /// Set the decoration line.
    pub fn text_decoration_line(mut self, value: TextDecorationLine) -> Self {
        self.text_decoration_line = Some(value);
        self
    }

    /// Set the decoration color.
    pub fn text_decoration_color(mut self, value: impl Into<String>) -> Self {
        self.text_decoration_color = Some(value.into());
        self
    }

    /// Set the decoration style.
    pub fn text_decoration_style(mut self, value: TextDecorationStyle) -> Self {
        self.text_decoration_style = Some(value);
        self
    }

    /// Set all four margins.
    pub fn margin_all(mut self, value: f64) -> Self {
        self.margin_top = Some(value);
        self.margin_bottom = Some(value);
        self.margin_left = Some(value);
        self.margin_right = Some(value);
        self
    }

    /// Set the top margin.
    pub fn margin_top(mut self, value: f64) -> Self {
        self.margin_top = Some(value);
        self
    }

    /// Set the bottom margin.
    pub fn margin_bottom(mut self, value: f64) -> Self {
        self.margin_bottom = Some(value);
        self
    }

    /// Set the left margin.
    pub fn margin_left(mut self, value: f64) -> Self {
        self.margin_left = Some(value);
        self
    }

    /// Set the right margin.
    pub fn margin_right(mut self, value: f64) -> Self {
        self.margin_right = Some(value);
        self
    }
}

/// Merge two optional decoration lines.
///
/// If neither side specifies a line the result stays absent. Otherwise the
/// underline and line-through requests of both sides are unioned, so an
/// underlined run nested in a struck-through one draws both.
pub fn merge_decoration_lines(
    base: Option<TextDecorationLine>,
    other: Option<TextDecorationLine>,
) -> Option<TextDecorationLine> {
    if base.is_none() && other.is_none() {
        return None;
    }
    let underline = base.is_some_and(|l| l.has_underline()) || other.is_some_and(|l| l.has_underline());
    let line_through =
        base.is_some_and(|l| l.has_line_through()) || other.is_some_and(|l| l.has_line_through());
    Some(TextDecorationLine::from_flags(underline, line_through))
}

fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}
