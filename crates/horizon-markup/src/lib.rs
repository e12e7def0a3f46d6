//! Lightweight markup rendering for Horizon Markup.
//!
//! Converts a loosely formed HTML subset into either plain text or a sequence
//! of styled fragments ready for a text layout engine. No document tree is
//! built: the input is tokenized once and every scope is tracked on explicit
//! stacks, so rendering is linear in the input length.
//!
//! # Supported markup
//!
//! - Inline styling: `<b>`, `<strong>`, `<i>`, `<em>`, `<u>`, `<s>`,
//!   `<strike>`, `<del>`, `<code>`, plus any tag the caller styles via rules
//! - Block elements (`<p>`, `<div>`, headings, lists and others) separated by
//!   exactly one newline
//! - Line breaks: `<br>`
//! - Preformatted text: `<pre>` keeps its whitespace verbatim
//! - Lists: `<ol>` items are numbered, `<ul>` items get a bullet
//! - Entities: `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;` and
//!   numeric references
//!
//! Attributes are ignored. Malformed input never fails: unknown entities and
//! unterminated tags pass through as text, and unmatched closing tags are
//! skipped.
//!
//! # Example
//!
//! ```
//! use horizon_markup::{parse_styled_fragments, strip_plain_text};
//! use horizon_markup::style::prelude::*;
//!
//! assert_eq!(strip_plain_text("<div>a</div><div>b</div>"), "a\nb");
//!
//! let rules = StyleRules::new()
//!     .with_rule("b", RichTextStyle::new().font_color("#cc0000"));
//! let fragments = parse_styled_fragments("Hello <b>world</b>", &rules);
//!
//! assert_eq!(fragments.len(), 2);
//! assert_eq!(fragments[1].style.font_weight, Some(FontWeight::Bold));
//! assert_eq!(fragments[1].style.font_color.as_deref(), Some("#cc0000"));
//! ```

pub mod assembler;
pub mod entity;
pub mod fragment;
pub mod list;
pub mod logging;
pub mod tags;
pub mod tokenizer;
pub mod whitespace;

mod parser;
mod plain;

pub use fragment::{HtmlFragment, StyledText};
pub use horizon_markup_style as style;

use horizon_markup_style::rules::StyleRules;
use horizon_markup_style::sheet::StyleSheet;
use horizon_markup_style::style::RichTextStyle;

use crate::logging::targets;
use crate::parser::StyledParser;
use crate::plain::PlainParser;

/// Render markup as plain text.
///
/// Tags are removed, entities decoded and whitespace collapsed. Block
/// boundaries become single newlines and the result has no trailing
/// whitespace.
pub fn strip_plain_text(input: &str) -> String {
    let output = PlainParser::new().parse(input);
    tracing::debug!(
        target: targets::PLAIN,
        input_len = input.len(),
        output_len = output.len(),
        "Stripped markup to plain text"
    );
    output
}

/// Parse markup into styled fragments, starting from an empty base style.
///
/// Rule selectors are matched against tag names case-insensitively.
pub fn parse_styled_fragments(input: &str, rules: &StyleRules) -> Vec<HtmlFragment> {
    parse_styled_fragments_with_base(input, &RichTextStyle::default(), rules)
}

/// Parse markup into styled fragments, inheriting from `base`.
///
/// Text outside any element carries `base` unchanged; every element's style
/// cascades onto it.
pub fn parse_styled_fragments_with_base(
    input: &str,
    base: &RichTextStyle,
    rules: &StyleRules,
) -> Vec<HtmlFragment> {
    let fragments = StyledParser::new(base.clone(), rules).parse(input);
    tracing::debug!(
        target: targets::PARSER,
        input_len = input.len(),
        fragments = fragments.len(),
        rules = rules.len(),
        "Parsed styled fragments"
    );
    fragments
}

/// Render markup with the base style and rules of a style sheet.
pub fn render(input: &str, sheet: &StyleSheet) -> StyledText {
    let rules = sheet.rule_map();
    parse_styled_fragments_with_base(input, &sheet.base_style, &rules).into()
}
