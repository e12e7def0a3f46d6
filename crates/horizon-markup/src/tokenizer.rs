//! Tag tokenizer.
//!
//! Splits raw markup into text runs and tags by scanning for `<` and `>`.
//! There is no attribute parsing and no quoted-value state: the first `>`
//! after a `<` always ends the tag, even inside a comment or an attribute
//! value. Attributes are ignored entirely.
//!
//! Comments (`<!-- ... >`), declarations (`<!DOCTYPE ...>`) and processing
//! instructions (`<?xml ...?>`) produce no tokens. A `<` that is never closed
//! degrades to a trailing text run containing the `<` itself.

use crate::logging::targets;

/// A structural event produced by the [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Raw text between tags. Entities are not decoded yet.
    Text(&'a str),
    /// An opening tag, with its lowercase name.
    StartTag { name: String, self_closing: bool },
    /// A closing tag, with its lowercase name.
    EndTag { name: String },
}

/// Streaming tokenizer over a markup string.
///
/// # Example
///
/// ```
/// use horizon_markup::tokenizer::{Token, Tokenizer};
///
/// let tokens: Vec<_> = Tokenizer::new("a<B class=x>b</b>").collect();
/// assert_eq!(tokens, vec![
///     Token::Text("a"),
///     Token::StartTag { name: "b".into(), self_closing: false },
///     Token::Text("b"),
///     Token::EndTag { name: "b".into() },
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];

            let Some(tag_body) = rest.strip_prefix('<') else {
                let end = rest.find('<').unwrap_or(rest.len());
                self.pos += end;
                return Some(Token::Text(&rest[..end]));
            };

            match tag_body.find('>') {
                Some(end) => {
                    self.pos += end + 2;
                    if let Some(token) = classify_tag(&tag_body[..end]) {
                        return Some(token);
                    }
                }
                None => {
                    tracing::trace!(
                        target: targets::TOKENIZER,
                        "Unterminated tag at byte {}; emitting as text",
                        self.pos
                    );
                    self.pos = self.input.len();
                    return Some(Token::Text(rest));
                }
            }
        }
        None
    }
}

fn is_tag_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Classify the raw content captured between `<` and `>`.
///
/// Returns `None` for comments, declarations, processing instructions and
/// tags without a name.
pub fn classify_tag(raw: &str) -> Option<Token<'static>> {
    let content = raw.trim_matches(is_tag_whitespace);
    // `!--` comments, `!` declarations and `?` instructions are all dropped.
    if content.starts_with(['!', '?']) {
        return None;
    }

    let (content, is_closing) = match content.strip_prefix('/') {
        Some(rest) => (rest.trim_start_matches(is_tag_whitespace), true),
        None => (content, false),
    };

    let (content, self_closing) = match content.strip_suffix('/') {
        Some(rest) => (rest.trim_end_matches(is_tag_whitespace), true),
        None => (content, false),
    };

    let name = content
        .split(is_tag_whitespace)
        .next()
        .filter(|name| !name.is_empty())?
        .to_lowercase();

    Some(if is_closing {
        Token::EndTag { name }
    } else {
        Token::StartTag { name, self_closing }
    })
}
