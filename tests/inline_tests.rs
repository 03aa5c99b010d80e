//! Inline span tests through the full pipeline.

use notemark::theme::BREAK_TAG;
use notemark::{render_inline, to_html, Style};

fn code(content: &str) -> String {
    format!(
        r#"<span style="background-color: #ECEFF1; font-family: monospace; color: #D81B60;">&nbsp;{content}&nbsp;</span>"#
    )
}

/// Source entities are literal text: `&amp;` is escaped like any other `&`.
#[test]
fn escaping_happens_once() {
    assert_eq!(to_html("a & b < c"), "a &amp; b &lt; c");
    assert_eq!(to_html("&amp;"), "&amp;amp;");
}

#[test]
fn emphasis_variants() {
    assert_eq!(to_html("**a** __b__ *c* _d_ ~~e~~"), "<b>a</b> <b>b</b> <i>c</i> <i>d</i> <s>e</s>");
}

#[test]
fn underscores_inside_words_are_text() {
    assert_eq!(to_html("call my_func_name now"), "call my_func_name now");
    assert_eq!(to_html("a__b__c"), "a__b__c");
}

#[test]
fn emphasis_does_not_cross_lines() {
    assert_eq!(to_html("*a\nb*"), format!("*a{BREAK_TAG}b*"));
}

#[test]
fn code_span_protects_content() {
    assert_eq!(to_html("`**no**`"), code("**no**"));
    assert_eq!(to_html("`[a](b)`"), code(r#"<a href="b" title="" style="color: #1565C0;">a</a>"#));
}

#[test]
fn link_with_title_quotes() {
    assert_eq!(
        to_html(r#"[a](http://x.y "T")"#),
        r#"<a href="http://x.y" title="T" style="color: #1565C0;">a</a>"#
    );
    assert_eq!(
        to_html("[a](http://x.y 'T')"),
        r#"<a href="http://x.y" title="T" style="color: #1565C0;">a</a>"#
    );
}

#[test]
fn link_url_is_escaped() {
    assert_eq!(
        to_html("[a](http://x.y/?q=1&r=2)"),
        r#"<a href="http://x.y/?q=1&amp;r=2" title="" style="color: #1565C0;">a</a>"#
    );
}

#[test]
fn empty_link_text_is_not_a_link() {
    assert_eq!(to_html("[](u)"), "[](u)");
}

#[test]
fn image_with_empty_alt() {
    assert_eq!(
        to_html("![](p.png)"),
        r#"<img src="p.png" title="" alt="" style="max-width: 100%;" />"#
    );
}

#[test]
fn autolinks() {
    assert_eq!(
        to_html("<http://a.io>"),
        r#"<a href="http://a.io" style="color: #1565C0;">http://a.io</a>"#
    );
    assert_eq!(
        to_html("mail <x.y@a.io>"),
        r#"mail <a href="mailto:x.y@a.io" style="color: #1565C0;">x.y@a.io</a>"#
    );
}

#[test]
fn autolink_needs_scheme_or_domain() {
    assert_eq!(to_html("<ftp://a.io>"), "&lt;ftp://a.io&gt;");
    assert_eq!(to_html("<x@localhost>"), "&lt;x@localhost&gt;");
}

#[test]
fn bracket_run_makes_one_link() {
    let input = format!("{}x{}", "[".repeat(8), "](u)".repeat(8));
    let expected = format!(
        r#"<a href="u" title="" style="color: #1565C0;">{}x</a>{}"#,
        "[".repeat(7),
        "](u)".repeat(7)
    );
    assert_eq!(render_inline(&input, &Style::default()), expected);
}

#[test]
fn render_inline_on_empty() {
    assert_eq!(render_inline("", &Style::default()), "");
}
