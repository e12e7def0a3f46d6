//! Selector rules supplied by the caller.
//!
//! Selectors are plain tag names. They are matched case-insensitively: keys
//! are lowercased on insertion and lookups lowercase the queried tag.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::style::RichTextStyle;

/// A style rule mapping a tag selector to a style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    /// Tag name this rule applies to.
    pub selector: String,
    /// Style cascaded onto matching elements.
    pub style: RichTextStyle,
}

impl StyleRule {
    /// Create a new style rule.
    pub fn new(selector: impl Into<String>, style: RichTextStyle) -> Self {
        Self {
            selector: selector.into(),
            style,
        }
    }
}

/// Read-only lookup table from lowercase tag name to style.
///
/// When two rules share a selector the later one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRules {
    map: HashMap<String, RichTextStyle>,
}

impl StyleRules {
    /// Create an empty rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the style for a selector.
    pub fn insert(&mut self, selector: &str, style: RichTextStyle) {
        self.map.insert(selector.to_lowercase(), style);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_rule(mut self, selector: &str, style: RichTextStyle) -> Self {
        self.insert(selector, style);
        self
    }

    /// Look up the style for a tag name.
    pub fn get(&self, tag: &str) -> Option<&RichTextStyle> {
        if self.map.is_empty() {
            return None;
        }
        let key = if tag.chars().any(char::is_uppercase) {
            Cow::Owned(tag.to_lowercase())
        } else {
            Cow::Borrowed(tag)
        };
        self.map.get(key.as_ref())
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(selector, style)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RichTextStyle)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<StyleRule> for StyleRules {
    fn from_iter<I: IntoIterator<Item = StyleRule>>(iter: I) -> Self {
        let mut rules = StyleRules::new();
        for rule in iter {
            rules.insert(&rule.selector, rule.style);
        }
        rules
    }
}

impl<S: AsRef<str>> FromIterator<(S, RichTextStyle)> for StyleRules {
    fn from_iter<I: IntoIterator<Item = (S, RichTextStyle)>>(iter: I) -> Self {
        let mut rules = StyleRules::new();
        for (selector, style) in iter {
            rules.insert(selector.as_ref(), style);
        }
        rules
    }
}
