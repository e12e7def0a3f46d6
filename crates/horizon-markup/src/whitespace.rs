//! Browser-like whitespace handling.
//!
//! Text is pushed through a [`Normalizer`] into a [`TextSink`]. In the
//! default collapsing mode any run of space, tab, newline and carriage return
//! becomes a single space; carriage returns are dropped outright. In
//! preserving mode (inside `pre`) characters are copied through unchanged.
//!
//! The "last character was whitespace" flag lives in the normalizer so a run
//! split across several text events, or interrupted by inline tags, never
//! produces doubled spaces. It starts out set, which strips leading
//! whitespace from the document.

use crate::entity::decode_entities_with;

/// Output that the normalizer writes into.
pub trait TextSink {
    /// Append one character.
    fn push_char(&mut self, ch: char);

    /// The last character written so far, if any.
    fn last_char(&self) -> Option<char>;

    /// Remove trailing `' '` characters.
    fn trim_trailing_spaces(&mut self);
}

impl TextSink for String {
    fn push_char(&mut self, ch: char) {
        self.push(ch);
    }

    fn last_char(&self) -> Option<char> {
        self.chars().next_back()
    }

    fn trim_trailing_spaces(&mut self) {
        let len = self.trim_end_matches(' ').len();
        self.truncate(len);
    }
}

/// Whitespace characters that collapse outside preformatted scopes.
pub fn is_collapsible(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Collapsing/preserving whitespace state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    last_was_whitespace: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer at the start of a document.
    pub const fn new() -> Self {
        Self {
            last_was_whitespace: true,
        }
    }

    /// Treat the output as if it ended in whitespace.
    ///
    /// Used on entering a preformatted scope.
    pub fn mark_whitespace(&mut self) {
        self.last_was_whitespace = true;
    }

    /// Push one already-decoded character.
    pub fn push_char<S: TextSink + ?Sized>(&mut self, sink: &mut S, ch: char, preserve: bool) {
        if preserve {
            sink.push_char(ch);
            self.last_was_whitespace = is_collapsible(ch);
            return;
        }

        if ch == '\r' {
            return;
        }

        if is_collapsible(ch) {
            if !self.last_was_whitespace {
                sink.push_char(' ');
                self.last_was_whitespace = true;
            }
            return;
        }

        sink.push_char(ch);
        self.last_was_whitespace = false;
    }

    /// Decode entities in a raw text run and push the result.
    pub fn push_text<S: TextSink + ?Sized>(&mut self, sink: &mut S, text: &str, preserve: bool) {
        decode_entities_with(text, |ch| self.push_char(&mut *sink, ch, preserve));
    }

    /// Append a newline unconditionally.
    ///
    /// Trailing spaces are trimmed first unless whitespace is being preserved.
    pub fn line_break<S: TextSink + ?Sized>(&mut self, sink: &mut S, preserve: bool) {
        if !preserve {
            sink.trim_trailing_spaces();
        }
        sink.push_char('\n');
        self.last_was_whitespace = true;
    }

    /// Append a newline unless the output is empty or already ends in one.
    ///
    /// This is the block boundary rule: exactly one newline ever separates
    /// two blocks.
    pub fn ensure_line_break<S: TextSink + ?Sized>(&mut self, sink: &mut S, preserve: bool) {
        if !preserve {
            sink.trim_trailing_spaces();
        }
        match sink.last_char() {
            None | Some('\n') => {}
            Some(_) => {
                sink.push_char('\n');
                self.last_was_whitespace = true;
            }
        }
    }
}
