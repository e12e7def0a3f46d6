//! Rich text styling model for Horizon Markup.
//!
//! This crate provides the style side of the markup pipeline:
//!
//! - **Style model**: [`RichTextStyle`], a record of independently optional
//!   text attributes where an absent field means "inherit unchanged"
//! - **Cascading**: field-wise merging with special handling for text
//!   decoration lines
//! - **Tag defaults**: built-in styling for `b`, `i`, `u`, `s`, `code` and friends
//! - **Selector rules**: caller-supplied tag → style overrides
//! - **Style sheets**: load a base style and rules from TOML or JSON files
//!
//! # Example
//!
//! ```
//! use horizon_markup_style::prelude::*;
//!
//! let base = RichTextStyle::new().font_size(14.0);
//! let bold = RichTextStyle::new().font_weight(FontWeight::Bold);
//!
//! let merged = base.merged(&bold);
//! assert_eq!(merged.font_size, Some(14.0));
//! assert_eq!(merged.font_weight, Some(FontWeight::Bold));
//! ```

pub mod types;
pub mod style;
pub mod defaults;
pub mod rules;
pub mod sheet;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::types::{
        FontStyle, FontWeight, TextAlign, TextDecorationLine, TextDecorationStyle, TextTransform,
    };
    pub use crate::style::RichTextStyle;
    pub use crate::defaults::default_style_for_tag;
    pub use crate::rules::{StyleRule, StyleRules};
    pub use crate::sheet::StyleSheet;
}
