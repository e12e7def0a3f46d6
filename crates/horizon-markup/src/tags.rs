//! Static tag classification tables.

/// Block-level tags whose boundaries force a line break. Sorted for binary search.
pub const BLOCK_TAGS: [&str; 27] = [
    "address",
    "article",
    "aside",
    "blockquote",
    "div",
    "dl",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

/// Line break tag.
pub const LINE_BREAK: &str = "br";
/// Tag whose content keeps its whitespace verbatim.
pub const PREFORMATTED: &str = "pre";
/// List item tag.
pub const LIST_ITEM: &str = "li";

/// Check whether a lowercase tag name is block-level.
pub fn is_block_level(tag: &str) -> bool {
    BLOCK_TAGS.binary_search(&tag).is_ok()
}
