//! Built-in per-tag styling.
//!
//! These defaults are cascaded onto the inherited style before any
//! caller-supplied selector rule, so rules can still override them.

use crate::style::RichTextStyle;
use crate::types::{FontStyle, FontWeight, TextDecorationLine, TextDecorationStyle};

/// Font family used by `code` and `pre`.
pub const MONOSPACE_FAMILY: &str = "monospace";

/// Default style contributed by a lowercase tag name, if any.
///
/// Tags without an entry contribute nothing.
pub fn default_style_for_tag(tag: &str) -> Option<RichTextStyle> {
    let style = match tag {
        "b" | "strong" => RichTextStyle::new().font_weight(FontWeight::Bold),
        "i" | "em" => RichTextStyle::new().font_style(FontStyle::Italic),
        "u" => RichTextStyle::new()
            .text_decoration_line(TextDecorationLine::Underline)
            .text_decoration_style(TextDecorationStyle::Solid),
        "s" | "strike" | "del" => RichTextStyle::new()
            .text_decoration_line(TextDecorationLine::LineThrough)
            .text_decoration_style(TextDecorationStyle::Solid),
        "code" | "pre" => RichTextStyle::new().font_family(MONOSPACE_FAMILY),
        _ => return None,
    };
    Some(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_tags() {
        for tag in ["b", "strong"] {
            let style = default_style_for_tag(tag).unwrap();
            assert_eq!(style.font_weight, Some(FontWeight::Bold));
        }
        for tag in ["i", "em"] {
            let style = default_style_for_tag(tag).unwrap();
            assert_eq!(style.font_style, Some(FontStyle::Italic));
        }
    }

    #[test]
    fn decoration_tags() {
        let underline = default_style_for_tag("u").unwrap();
        assert_eq!(underline.text_decoration_line, Some(TextDecorationLine::Underline));
        assert_eq!(underline.text_decoration_style, Some(TextDecorationStyle::Solid));

        for tag in ["s", "strike", "del"] {
            let style = default_style_for_tag(tag).unwrap();
            assert_eq!(style.text_decoration_line, Some(TextDecorationLine::LineThrough));
        }
    }

    #[test]
    fn monospace_tags() {
        assert_eq!(
            default_style_for_tag("code").unwrap().font_family.as_deref(),
            Some(MONOSPACE_FAMILY)
        );
        assert_eq!(
            default_style_for_tag("pre").unwrap().font_family.as_deref(),
            Some(MONOSPACE_FAMILY)
        );
    }

    #[test]
    fn unknown_tags_have_no_defaults() {
        assert!(default_style_for_tag("span").is_none());
        assert!(default_style_for_tag("p").is_none());
        // Lookups expect lowercase names.
        assert!(default_style_for_tag("B").is_none());
    }
}
