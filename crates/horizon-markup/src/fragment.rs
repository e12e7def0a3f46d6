//! Styled text fragments.

use std::borrow::Cow;

use horizon_markup_style::style::RichTextStyle;

/// A run of text with a fully resolved style.
///
/// The style is an owned snapshot taken when the run was flushed, so
/// fragments stay valid after parsing finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlFragment {
    /// The text content of this fragment.
    pub text: String,
    /// The resolved style of this fragment.
    pub style: RichTextStyle,
}

impl HtmlFragment {
    /// Create a new fragment.
    pub fn new(text: impl Into<String>, style: RichTextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text with the style's text transform applied.
    pub fn display_text(&self) -> Cow<'_, str> {
        self.style.apply_text_transform(&self.text)
    }
}

/// Styled text parsed from markup.
///
/// `StyledText` owns its fragments in reading order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    fragments: Vec<HtmlFragment>,
}

impl StyledText {
    /// Create empty styled text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fragments in reading order.
    pub fn fragments(&self) -> &[HtmlFragment] {
        &self.fragments
    }

    /// Take ownership of the fragments.
    pub fn into_fragments(self) -> Vec<HtmlFragment> {
        self.fragments
    }

    /// Concatenated text of every fragment, without formatting.
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Concatenated text with each fragment's text transform applied.
    pub fn display_text(&self) -> String {
        self.fragments.iter().map(|f| f.display_text()).collect()
    }

    /// Get the number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if there is no text.
    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(HtmlFragment::is_empty)
    }
}

impl From<Vec<HtmlFragment>> for StyledText {
    fn from(fragments: Vec<HtmlFragment>) -> Self {
        Self { fragments }
    }
}

impl IntoIterator for StyledText {
    type Item = HtmlFragment;
    type IntoIter = std::vec::IntoIter<HtmlFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyledText {
    type Item = &'a HtmlFragment;
    type IntoIter = std::slice::Iter<'a, HtmlFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_markup_style::types::TextTransform;

    #[test]
    fn test_plain_and_display_text() {
        let text = StyledText::from(vec![
            HtmlFragment::new("hello ", RichTextStyle::new()),
            HtmlFragment::new(
                "world",
                RichTextStyle::new().text_transform(TextTransform::Uppercase),
            ),
        ]);

        assert_eq!(text.len(), 2);
        assert_eq!(text.plain_text(), "hello world");
        assert_eq!(text.display_text(), "hello WORLD");
        assert_eq!((&text).into_iter().count(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(StyledText::new().is_empty());
        let text = StyledText::from(vec![HtmlFragment::new("", RichTextStyle::new())]);
        assert!(text.is_empty());
        assert_eq!(text.into_fragments().len(), 1);
    }
}
