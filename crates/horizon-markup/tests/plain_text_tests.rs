//! Tests for plain text rendering.

use horizon_markup::strip_plain_text;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn test_strip_simple_tag() {
    init_tracing();
    assert_eq!(strip_plain_text("<b>hi</b>"), "hi");
    assert_eq!(strip_plain_text("<B>hi</B>"), "hi");
}

#[test]
fn test_empty_input() {
    assert_eq!(strip_plain_text(""), "");
    assert_eq!(strip_plain_text("   \n\t "), "");
}

#[test]
fn test_named_entities() {
    assert_eq!(
        strip_plain_text("&amp;&lt;&gt;&quot;&apos;&nbsp;"),
        "&<>\"'\u{a0}"
    );
}

#[test]
fn test_numeric_entities() {
    assert_eq!(strip_plain_text("&#65;"), "A");
    assert_eq!(strip_plain_text("&#x41;"), "A");
    assert_eq!(strip_plain_text("&#X41;"), "A");
    assert_eq!(strip_plain_text("&#99999999;"), "&#99999999;");
}

#[test]
fn test_unknown_entities_pass_through() {
    assert_eq!(strip_plain_text("&bogus; &#xZZ; &#;"), "&bogus; &#xZZ; &#;");
    assert_eq!(strip_plain_text("fish & chips"), "fish & chips");
}

#[test]
fn test_block_boundaries() {
    assert_eq!(strip_plain_text("<div>a</div><div>b</div>"), "a\nb");
    assert_eq!(
        strip_plain_text("<div><p>a</p></div>\n\n<section><p>b</p></section>"),
        "a\nb"
    );
    assert_eq!(strip_plain_text("<p>  spaced  </p><p>out</p>"), "spaced\nout");
}

#[test]
fn test_line_breaks() {
    assert_eq!(strip_plain_text("one<br>two<BR/>three"), "one\ntwo\nthree");
    assert_eq!(strip_plain_text("a<br><br>b"), "a\n\nb");
}

#[test]
fn test_preformatted() {
    assert_eq!(
        strip_plain_text("<p>intro</p><pre>  fn main() {\n      x\n  }</pre>after"),
        "intro\n  fn main() {\n      x\n  }\nafter"
    );
}

#[test]
fn test_whitespace_collapses_across_tags() {
    assert_eq!(strip_plain_text("a <i> b </i> c"), "a b c");
    assert_eq!(strip_plain_text("a\r\n\r\nb"), "a b");
}

#[test]
fn test_comments_and_declarations_dropped() {
    assert_eq!(
        strip_plain_text("<!DOCTYPE html><?xml version=\"1.0\"?>a<!-- note -->b"),
        "ab"
    );
}

#[test]
fn test_comment_ends_at_first_gt() {
    assert_eq!(strip_plain_text("a<!-- x > y -->b"), "a y -->b");
}

#[test]
fn test_unterminated_tag_is_text() {
    init_tracing();
    assert_eq!(strip_plain_text("a <b"), "a <b");
    assert_eq!(strip_plain_text("x<span class='y'"), "x<span class='y'");
}

#[test]
fn test_attributes_ignored() {
    assert_eq!(
        strip_plain_text("<a href=\"https://example.com\" title='t'>link</a>"),
        "link"
    );
}

#[test]
fn test_no_angle_brackets_in_output() {
    let inputs = [
        "<b>hi</b>",
        "<div><p>a</p><ul><li>x</li></ul></div>",
        "<br/><hr><img src=x />text",
        "<!-- c --><?pi?>done",
    ];
    for input in inputs {
        let output = strip_plain_text(input);
        assert!(
            !output.contains(['<', '>']),
            "{input:?} rendered as {output:?}"
        );
    }
}

#[test]
fn test_second_pass_is_stable() {
    let inputs = [
        "<p>Hello   <b>world</b></p><div>again</div>",
        "  leading and trailing  ",
        "<pre>  keep   this </pre> after",
        "<ul><li>a</li><li>b</li></ul>",
    ];
    for input in inputs {
        let once = strip_plain_text(input);
        let twice = strip_plain_text(&once);
        assert_eq!(collapse_whitespace(&twice), collapse_whitespace(&once));
    }
}
