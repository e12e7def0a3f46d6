//! Fragment assembly.
//!
//! Characters accumulate in a pending buffer. Whenever the parser crosses a
//! tag boundary it flushes the buffer into a fragment carrying the style in
//! effect at that moment; a flush whose style equals the previous fragment's
//! extends that fragment instead, so fragments are maximal same-style runs.

use horizon_markup_style::style::RichTextStyle;

use crate::fragment::HtmlFragment;
use crate::whitespace::{TextSink, is_collapsible};

/// Accumulates text into styled fragments.
#[derive(Debug, Default)]
pub struct FragmentAssembler {
    fragments: Vec<HtmlFragment>,
    buffer: String,
}

impl FragmentAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the pending buffer into a fragment styled with `style`.
    pub fn flush(&mut self, style: &RichTextStyle) {
        if self.buffer.is_empty() {
            return;
        }
        match self.fragments.last_mut() {
            Some(last) if last.style == *style => last.text.push_str(&self.buffer),
            _ => {
                self.fragments
                    .push(HtmlFragment::new(self.buffer.clone(), style.clone()));
            }
        }
        self.buffer.clear();
    }

    /// Flush with `style` and run the final cleanup pass.
    ///
    /// Whitespace-only fragments are dropped from the tail until one with real
    /// content remains, whose trailing whitespace is trimmed in place. Then
    /// every empty fragment is removed.
    pub fn finish(mut self, style: &RichTextStyle) -> Vec<HtmlFragment> {
        self.flush(style);

        let mut fragments = self.fragments;
        while let Some(last) = fragments.last_mut() {
            let trimmed = last.text.trim_end_matches(is_collapsible).len();
            if trimmed == 0 {
                fragments.pop();
                continue;
            }
            last.text.truncate(trimmed);
            break;
        }
        fragments.retain(|f| !f.is_empty());
        fragments
    }
}

impl TextSink for FragmentAssembler {
    fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    fn last_char(&self) -> Option<char> {
        self.buffer.last_char().or_else(|| {
            self.fragments
                .iter()
                .rev()
                .find_map(|f| f.text.chars().next_back())
        })
    }

    fn trim_trailing_spaces(&mut self) {
        self.buffer.trim_trailing_spaces();
        if !self.buffer.is_empty() {
            return;
        }
        for fragment in self.fragments.iter_mut().rev() {
            fragment.text.trim_trailing_spaces();
            if !fragment.text.is_empty() {
                break;
            }
        }
    }
}
