//! Style sheet configuration.
//!
//! A style sheet bundles the base style that seeds the bottom of the style
//! stack with the list of tag rules. It can be written by hand in TOML or
//! JSON:
//!
//! ```toml
//! [baseStyle]
//! fontSize = 14
//!
//! [[rules]]
//! selector = "h1"
//! style = { fontSize = 24, fontWeight = "bold" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rules::{StyleRule, StyleRules};
use crate::style::RichTextStyle;
use crate::{Error, Result};

/// A base style plus tag rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSheet {
    /// Style every element inherits from.
    pub base_style: RichTextStyle,
    /// Tag rules in source order.
    pub rules: Vec<StyleRule>,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base style.
    pub fn with_base_style(mut self, style: RichTextStyle) -> Self {
        self.base_style = style;
        self
    }

    /// Append a rule.
    pub fn add_rule(&mut self, selector: impl Into<String>, style: RichTextStyle) {
        self.rules.push(StyleRule::new(selector, style));
    }

    /// Parse a style sheet from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let sheet: StyleSheet = toml::from_str(text)?;
        tracing::debug!(rules = sheet.rules.len(), "Parsed TOML style sheet");
        Ok(sheet)
    }

    /// Parse a style sheet from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let sheet: StyleSheet = serde_json::from_str(text)?;
        tracing::debug!(rules = sheet.rules.len(), "Parsed JSON style sheet");
        Ok(sheet)
    }

    /// Load a style sheet from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml,
            Some("json") => Self::from_json,
            _ => return Err(Error::unsupported_format(path)),
        };

        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::info!("Loading style sheet: {}", path.display());
        parse(&content)
    }

    /// Build the lookup table used during parsing.
    pub fn rule_map(&self) -> StyleRules {
        self.rules.iter().cloned().collect()
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the style sheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
