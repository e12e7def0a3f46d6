//! Plain text rendering.
//!
//! Shares the tokenizer, entity decoding and whitespace rules with the styled
//! parser but tracks neither styles nor lists. The only scope state is how
//! many `pre` elements are open.

use crate::logging::targets;
use crate::tags::{LINE_BREAK, PREFORMATTED, is_block_level};
use crate::tokenizer::{Token, Tokenizer};
use crate::whitespace::{Normalizer, is_collapsible};

/// Streaming parser producing a single string.
#[derive(Debug, Default)]
pub(crate) struct PlainParser {
    output: String,
    normalizer: Normalizer,
    pre_depth: usize,
}

impl PlainParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Render `input` as plain text.
    pub(crate) fn parse(mut self, input: &str) -> String {
        for token in Tokenizer::new(input) {
            match token {
                Token::Text(text) => {
                    let preserve = self.preserving();
                    self.normalizer.push_text(&mut self.output, text, preserve);
                }
                Token::StartTag { name, self_closing } => {
                    self.handle_opening_tag(&name, self_closing);
                }
                Token::EndTag { name } => self.handle_closing_tag(&name),
            }
        }

        let len = self.output.trim_end_matches(is_collapsible).len();
        self.output.truncate(len);
        self.output
    }

    fn preserving(&self) -> bool {
        self.pre_depth > 0
    }

    fn handle_opening_tag(&mut self, name: &str, self_closing: bool) {
        let preserve = self.preserving();
        if name == LINE_BREAK {
            self.normalizer.line_break(&mut self.output, preserve);
            return;
        }
        if is_block_level(name) {
            self.normalizer.ensure_line_break(&mut self.output, preserve);
        }
        if name == PREFORMATTED && !self_closing {
            self.pre_depth += 1;
            self.normalizer.mark_whitespace();
        }
    }

    fn handle_closing_tag(&mut self, name: &str) {
        // Taken before a `pre` close so its content keeps trailing whitespace.
        let preserve = self.preserving();
        if name == LINE_BREAK {
            self.normalizer.line_break(&mut self.output, preserve);
            return;
        }
        if name == PREFORMATTED {
            if self.pre_depth == 0 {
                tracing::debug!(target: targets::PLAIN, "Closing </pre> with no open <pre>");
            }
            self.pre_depth = self.pre_depth.saturating_sub(1);
        }
        if is_block_level(name) {
            self.normalizer.ensure_line_break(&mut self.output, preserve);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(input: &str) -> String {
        PlainParser::new().parse(input)
    }

    #[test]
    fn test_strip_inline_tags() {
        assert_eq!(strip("<b>hi</b>"), "hi");
        assert_eq!(strip("a <span class=\"x\">b</span> c"), "a b c");
    }

    #[test]
    fn test_blocks_separated_by_one_newline() {
        assert_eq!(strip("<div>a</div><div>b</div>"), "a\nb");
        assert_eq!(strip("<p>a</p>\n\n<p>b</p>"), "a\nb");
        assert_eq!(strip("<h1>Title</h1>Body"), "Title\nBody");
    }

    #[test]
    fn test_line_breaks_always_added() {
        assert_eq!(strip("a<br>b"), "a\nb");
        assert_eq!(strip("a<br><br>b"), "a\n\nb");
        assert_eq!(strip("a <br/> b"), "a\nb");
    }

    #[test]
    fn test_preformatted_keeps_whitespace() {
        assert_eq!(strip("<pre>a  b\n  c</pre>d"), "a  b\n  c\nd");
        assert_eq!(strip("x <pre>  y</pre>"), "x\n  y");
    }

    #[test]
    fn test_preformatted_trailing_spaces_kept() {
        assert_eq!(strip("<pre>a  </pre>b"), "a  \nb");
        assert_eq!(strip("<pre><p>x </p></pre>"), "x");
    }

    #[test]
    fn test_stray_pre_close() {
        assert_eq!(strip("a</pre>b  c"), "a\nb c");
    }

    #[test]
    fn test_list_items_have_no_markers() {
        assert_eq!(strip("<ul><li>a</li><li>b</li></ul>"), "a\nb");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        assert_eq!(strip("text  \n "), "text");
        assert_eq!(strip("<p>text</p>"), "text");
        assert_eq!(strip(""), "");
    }
}
