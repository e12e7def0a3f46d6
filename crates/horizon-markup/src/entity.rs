//! Character reference decoding.
//!
//! Recognizes the handful of named references that show up in UI copy
//! (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;`) plus decimal
//! (`&#65;`) and hexadecimal (`&#x41;`) numeric references. Anything else is
//! passed through literally; decoding never fails.

use std::borrow::Cow;

use crate::logging::targets;

/// Decode the body of a character reference (the part between `&` and `;`).
///
/// Returns `None` for unknown names, malformed numbers, and code points that
/// are not Unicode scalar values (above U+10FFFF or in the surrogate range).
///
/// `nbsp` decodes to U+00A0 rather than an ASCII space, so it survives
/// whitespace collapsing and trimming.
///
/// # Example
///
/// ```
/// use horizon_markup::entity::decode_entity;
///
/// assert_eq!(decode_entity("amp"), Some('&'));
/// assert_eq!(decode_entity("#x41"), Some('A'));
/// assert_eq!(decode_entity("#99999999"), None);
/// assert_eq!(decode_entity("bogus"), None);
/// ```
pub fn decode_entity(body: &str) -> Option<char> {
    match body {
        "nbsp" => Some('\u{00A0}'),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => decode_numeric(body.strip_prefix('#')?),
    }
}

fn decode_numeric(body: &str) -> Option<char> {
    let (digits, radix) = match body.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (body, 10),
    };
    // from_str_radix alone would accept a leading '+'.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let value = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(value)
}

/// Decode every character reference in `text`, feeding the result to `emit`
/// one character at a time.
///
/// A reference runs from `&` to the next `;` in `text`. When the body does
/// not decode, the literal `&body;` is emitted unchanged. An `&` with no
/// following `;` is emitted as-is.
pub fn decode_entities_with(text: &str, mut emit: impl FnMut(char)) {
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        rest[..amp].chars().for_each(&mut emit);
        let after = &rest[amp + 1..];
        match after.find(';') {
            Some(semi) => {
                let body = &after[..semi];
                match decode_entity(body) {
                    Some(ch) => emit(ch),
                    None => {
                        tracing::trace!(target: targets::ENTITY, "Passing through unknown entity &{};", body);
                        emit('&');
                        body.chars().for_each(&mut emit);
                        emit(';');
                    }
                }
                rest = &after[semi + 1..];
            }
            None => {
                emit('&');
                rest = after;
            }
        }
    }
    rest.chars().for_each(&mut emit);
}

/// Decode every character reference in `text`.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut decoded = String::with_capacity(text.len());
    decode_entities_with(text, |ch| decoded.push(ch));
    Cow::Owned(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        assert_eq!(decode_entity("nbsp"), Some('\u{00A0}'));
        assert_eq!(decode_entity("amp"), Some('&'));
        assert_eq!(decode_entity("lt"), Some('<'));
        assert_eq!(decode_entity("gt"), Some('>'));
        assert_eq!(decode_entity("quot"), Some('"'));
        assert_eq!(decode_entity("apos"), Some('\u{27}'));
        assert_eq!(decode_entity("AMP"), None);
        assert_eq!(decode_entity("copy"), None);
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_entity("#65"), Some('A'));
        assert_eq!(decode_entity("#x41"), Some('A'));
        assert_eq!(decode_entity("#X41"), Some('A'));
        assert_eq!(decode_entity("#x1F600"), Some('\u{1F600}'));
        assert_eq!(decode_entity("#1114111"), Some('\u{10FFFF}'));
    }

    #[test]
    fn test_malformed_numeric_entities() {
        assert_eq!(decode_entity("#"), None);
        assert_eq!(decode_entity("#x"), None);
        assert_eq!(decode_entity("#12a"), None);
        assert_eq!(decode_entity("#xZZ"), None);
        assert_eq!(decode_entity("#+65"), None);
        assert_eq!(decode_entity("# 65"), None);
    }

    #[test]
    fn test_out_of_range_entities() {
        assert_eq!(decode_entity("#1114112"), None);
        assert_eq!(decode_entity("#99999999"), None);
        assert_eq!(decode_entity("#99999999999999999999"), None);
        assert_eq!(decode_entity("#xD800"), None);
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_entities("a &lt;b&gt; c"), "a <b> c");
        assert_eq!(decode_entities("&#60;&#x3E;"), "<>");
        assert!(matches!(decode_entities("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_literal_fallback() {
        assert_eq!(decode_entities("&bogus; x"), "&bogus; x");
        assert_eq!(decode_entities("&#99999999;"), "&#99999999;");
        assert_eq!(decode_entities("fish & chips"), "fish & chips");
        assert_eq!(decode_entities("a & b; c"), "a & b; c");
        // The literal body is not decoded again.
        assert_eq!(decode_entities("&x&amp;"), "&x&amp;");
    }
}
