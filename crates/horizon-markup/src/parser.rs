//! Styled markup parser.
//!
//! Walks the token stream once, keeping explicit stacks of open elements and
//! open lists. Each open element carries its fully merged style, so the style
//! in effect is always the innermost element's (or the base style when no
//! element is open). Text is flushed into fragments at every tag boundary.

use horizon_markup_style::defaults::default_style_for_tag;
use horizon_markup_style::rules::StyleRules;
use horizon_markup_style::style::RichTextStyle;

use crate::assembler::FragmentAssembler;
use crate::fragment::HtmlFragment;
use crate::list::{ListKind, ListStack};
use crate::logging::targets;
use crate::tags::{LINE_BREAK, LIST_ITEM, PREFORMATTED, is_block_level};
use crate::tokenizer::{Token, Tokenizer};
use crate::whitespace::Normalizer;

/// Style in effect for one scope.
#[derive(Debug, Clone, PartialEq)]
struct StyleState {
    style: RichTextStyle,
    preserve_whitespace: bool,
}

/// Structural facts about an open element.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ElementState {
    name: String,
    is_block: bool,
    list_kind: Option<ListKind>,
}

impl ElementState {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_block: is_block_level(name),
            list_kind: ListKind::from_tag(name),
        }
    }
}

#[derive(Debug, Clone)]
struct OpenElement {
    element: ElementState,
    state: StyleState,
}

/// Streaming parser producing styled fragments.
pub(crate) struct StyledParser<'r> {
    rules: &'r StyleRules,
    base: StyleState,
    open: Vec<OpenElement>,
    lists: ListStack,
    normalizer: Normalizer,
    output: FragmentAssembler,
}

impl<'r> StyledParser<'r> {
    pub(crate) fn new(base_style: RichTextStyle, rules: &'r StyleRules) -> Self {
        Self {
            rules,
            base: StyleState {
                style: base_style,
                preserve_whitespace: false,
            },
            open: Vec::new(),
            lists: ListStack::new(),
            normalizer: Normalizer::new(),
            output: FragmentAssembler::new(),
        }
    }

    /// Parse `input` into fragments.
    pub(crate) fn parse(mut self, input: &str) -> Vec<HtmlFragment> {
        for token in Tokenizer::new(input) {
            match token {
                Token::Text(text) => {
                    let preserve = self.current().preserve_whitespace;
                    self.normalizer.push_text(&mut self.output, text, preserve);
                }
                Token::StartTag { name, self_closing } => {
                    self.flush_text();
                    self.handle_opening_tag(&name, self_closing);
                }
                Token::EndTag { name } => {
                    self.flush_text();
                    self.handle_closing_tag(&name);
                }
            }
        }

        let style = self.current().style.clone();
        self.output.finish(&style)
    }

    fn current(&self) -> &StyleState {
        self.open.last().map_or(&self.base, |open| &open.state)
    }

    fn flush_text(&mut self) {
        let state = self.open.last().map_or(&self.base, |open| &open.state);
        self.output.flush(&state.style);
    }

    fn add_line_break(&mut self) {
        let preserve = self.current().preserve_whitespace;
        self.normalizer.line_break(&mut self.output, preserve);
    }

    fn ensure_line_break(&mut self) {
        let preserve = self.current().preserve_whitespace;
        self.normalizer.ensure_line_break(&mut self.output, preserve);
    }

    fn handle_opening_tag(&mut self, name: &str, self_closing: bool) {
        if name == LINE_BREAK {
            self.add_line_break();
            return;
        }

        let element = ElementState::new(name);
        if element.is_block {
            self.ensure_line_break();
        }
        if self_closing {
            if name == LIST_ITEM {
                let preserve = self.current().preserve_whitespace;
                self.push_list_marker(preserve);
            }
            return;
        }

        let parent = self.current();
        let mut style = match default_style_for_tag(name) {
            Some(defaults) => parent.style.merged(&defaults),
            None => parent.style.clone(),
        };
        if let Some(rule) = self.rules.get(name) {
            style.cascade(rule);
        }
        let preserve_whitespace = parent.preserve_whitespace || name == PREFORMATTED;
        if name == PREFORMATTED {
            self.normalizer.mark_whitespace();
        }

        if let Some(kind) = element.list_kind {
            self.lists.push(kind);
        }
        self.open.push(OpenElement {
            element,
            state: StyleState {
                style,
                preserve_whitespace,
            },
        });

        if name == LIST_ITEM {
            self.push_list_marker(preserve_whitespace);
        }
    }

    fn push_list_marker(&mut self, preserve: bool) {
        let marker = self.lists.next_marker();
        self.normalizer.push_text(&mut self.output, &marker, preserve);
    }

    fn handle_closing_tag(&mut self, name: &str) {
        if name == LINE_BREAK {
            self.add_line_break();
            return;
        }

        let Some(index) = self.open.iter().rposition(|open| open.element.name == name) else {
            tracing::debug!(
                target: targets::PARSER,
                "Ignoring closing tag </{}> with no open element",
                name
            );
            return;
        };

        let closed: Vec<OpenElement> = self.open.drain(index..).collect();
        if closed.len() > 1 {
            tracing::trace!(
                target: targets::PARSER,
                "Closing </{}> implicitly closed {} nested element(s)",
                name,
                closed.len() - 1
            );
        }
        for open in closed.iter().filter(|open| open.element.list_kind.is_some()) {
            if self.lists.pop().is_none() {
                tracing::warn!(
                    target: targets::PARSER,
                    "List stack underflow closing <{}>",
                    open.element.name
                );
            }
        }

        // Content of a closed `pre` keeps its trailing whitespace.
        if closed[0].element.is_block {
            let preserve = closed[0].state.preserve_whitespace;
            self.normalizer.ensure_line_break(&mut self.output, preserve);
        }
    }
}
