//! Nested list tracking and item markers.

/// Marker emitted before unordered list items.
pub const BULLET_MARKER: &str = "\u{2022} ";

/// Kind of list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<ol>`: items are numbered.
    Ordered,
    /// `<ul>`: items get a bullet.
    Unordered,
}

impl ListKind {
    /// List kind opened by a lowercase tag name.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ol" => Some(ListKind::Ordered),
            "ul" => Some(ListKind::Unordered),
            _ => None,
        }
    }
}

/// State of one open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListContext {
    kind: ListKind,
    counter: u32,
}

impl ListContext {
    /// Create a context for a freshly opened list.
    pub fn new(kind: ListKind) -> Self {
        Self { kind, counter: 1 }
    }

    /// The list kind.
    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Consume the next item number.
    fn next_index(&mut self) -> u32 {
        let current = self.counter.max(1);
        self.counter = current.saturating_add(1);
        current
    }
}

/// Stack of open lists, innermost last.
#[derive(Debug, Clone, Default)]
pub struct ListStack {
    contexts: Vec<ListContext>,
}

impl ListStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a list.
    pub fn push(&mut self, kind: ListKind) {
        self.contexts.push(ListContext::new(kind));
    }

    /// Close the innermost list.
    pub fn pop(&mut self) -> Option<ListContext> {
        self.contexts.pop()
    }

    /// Produce the marker for a new list item.
    ///
    /// Ordered lists yield `"<n>. "` and advance their counter. Unordered
    /// lists, and items outside any list, yield [`BULLET_MARKER`].
    pub fn next_marker(&mut self) -> String {
        match self.contexts.last_mut() {
            Some(context) if context.kind == ListKind::Ordered => {
                format!("{}. ", context.next_index())
            }
            _ => BULLET_MARKER.to_string(),
        }
    }
}
