//! List and task list tests.

use notemark::theme::BREAK_TAG;
use notemark::{tokenize, to_html, to_html_with_theme, TaskState, ThemeOverrides, Token};

fn item_html(indent_px: usize, body: &str) -> String {
    format!(
        r#"<div style="margin-left: {indent_px}px; margin-top: 4px; margin-bottom: 4px;">{body}</div>"#
    )
}

fn task_html(indent_px: usize, extra: &str, body: &str) -> String {
    format!(
        r#"<div style="margin-left: {indent_px}px; margin-top: 4px; margin-bottom: 4px; {extra}">{body}</div>"#
    )
}

#[test]
fn checked_and_unchecked() {
    let html = to_html("- [x] done\n- [ ] todo");
    let expected = format!(
        "{}{BREAK_TAG}{}",
        task_html(
            0,
            "color: #9E9E9E; text-decoration: line-through;",
            "&#9745; done"
        ),
        task_html(0, "", "&#9744; todo")
    );
    assert_eq!(html, expected);
}

#[test]
fn uppercase_x_is_checked() {
    let tokens = tokenize("* [X] shout");
    let Token::List { items } = &tokens[0] else {
        panic!("expected list, got {tokens:?}");
    };
    assert_eq!(items[0].task, TaskState::Checked);
    assert_eq!(items[0].text, "shout");
}

#[test]
fn marker_needs_trailing_whitespace() {
    assert_eq!(to_html("- [x]done"), item_html(0, "&bull; [x]done"));
    assert_eq!(to_html("- [x]"), item_html(0, "&bull; [x]"));
}

#[test]
fn wide_marker_is_text() {
    assert_eq!(to_html("- [xx] no"), item_html(0, "&bull; [xx] no"));
}

#[test]
fn ordered_task_items() {
    let html = to_html("1. [ ] first");
    assert_eq!(html, task_html(0, "", "&#9744; first"));
}

#[test]
fn indentation_becomes_margin() {
    let html = to_html("- a\n  - b\n\t- c");
    assert!(html.contains(&item_html(0, "&bull; a")));
    assert!(html.contains(&item_html(16, "&bull; b")));
    assert!(html.contains(&item_html(32, "&bull; c")));
}

#[test]
fn item_text_gets_inline_spans() {
    let html = to_html("- **bold** and `code`");
    assert!(html.contains("&bull; <b>bold</b> and <span "));
}

#[test]
fn blank_line_ends_list() {
    let tokens = tokenize("- a\n\n- b");
    assert_eq!(tokens.len(), 3);
    assert!(matches!(tokens[0], Token::List { ref items } if items.len() == 1));
    assert_eq!(tokens[1], Token::Empty);
    assert!(matches!(tokens[2], Token::List { ref items } if items.len() == 1));
}

#[test]
fn list_interrupts_paragraph() {
    let tokens = tokenize("intro\n- a\nnot an item");
    assert_eq!(tokens.len(), 3);
    assert!(matches!(tokens[1], Token::List { .. }));
    assert_eq!(
        tokens[2],
        Token::Paragraph {
            content: "not an item".to_string()
        }
    );
}

#[test]
fn indented_continuation_is_not_code() {
    let tokens = tokenize("- a\n    continued");
    assert!(matches!(tokens[0], Token::List { .. }));
    assert!(!tokens.iter().any(|t| matches!(t, Token::CodeBlock { .. })));
}

#[test]
fn bullet_needs_space() {
    assert_eq!(to_html("-nope"), "-nope");
    assert_eq!(to_html("1.nope"), "1.nope");
}

#[test]
fn done_colour_from_theme() {
    let theme = ThemeOverrides {
        task_done_fg: Some("#00FF00".into()),
        ..ThemeOverrides::default()
    };
    let html = to_html_with_theme("- [x] ok", &theme);
    assert!(html.contains("color: #00FF00; text-decoration: line-through;"));
}
