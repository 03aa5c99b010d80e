//! Block renderer.
//!
//! Each token becomes one markup fragment. The target surface ignores most
//! CSS margins, so vertical rhythm comes from break fragments and one-cell
//! spacer tables; a final pass joins fragments and inserts a break only
//! where neither side already carries its own spacing.

use crate::block::{tokenize, Alignment, Cells, ListItem, Token};
use crate::escape::{escape_html, escape_html_into};
use crate::inline::render_inline;
use crate::limits::MAX_BLOCK_NESTING;
use crate::theme::Style;

const HR: &str = r#"<hr style="margin-top: 16px; margin-bottom: 16px;">"#;

/// Spacer around code blocks and tables.
const CODE_SPACER: &str = r#"<table border="0" cellpadding="0" cellspacing="0" width="100%" style="margin: 0; padding: 0;"><tr><td style="font-size: 1px; line-height: 12px; padding: 0;">&nbsp;</td></tr></table>"#;

/// Spacer around blockquotes.
const QUOTE_SPACER: &str = r#"<table border="0" cellpadding="0" cellspacing="0" width="100%" style="margin: 0; padding: 0;"><tr><td style="font-size: 1px; line-height: 8px; padding: 0;">&nbsp;</td></tr></table>"#;

const CHECKED_BOX: &str = "&#9745;";
const UNCHECKED_BOX: &str = "&#9744;";
const BULLET: &str = "&bull;";

/// Render tokens to markup.
///
/// # Example
/// ```
/// use notemark::{render, tokenize, Style};
///
/// let html = render(&tokenize("a\n\nb"), &Style::default());
/// assert_eq!(html, r#"a<div style="height: 8px;"></div>b"#);
/// ```
pub fn render(tokens: &[Token], style: &Style) -> String {
    render_nested(tokens, style, 0)
}

/// Render at a given blockquote depth.
fn render_nested(tokens: &[Token], style: &Style, depth: usize) -> String {
    log::debug!("rendering {} blocks at depth {depth}", tokens.len());
    let fragments: Vec<String> = tokens
        .iter()
        .map(|token| render_token(token, style, depth))
        .collect();
    join_fragments(&fragments, style.break_tag)
}

fn render_token(token: &Token, style: &Style, depth: usize) -> String {
    match token {
        Token::Empty => style.break_tag.to_string(),
        Token::ThematicBreak => HR.to_string(),
        Token::Heading { level, content } => render_heading(*level, content, style),
        Token::Paragraph { content } => render_inline(content, style),
        Token::CodeBlock { content, .. } => render_code_block(content),
        Token::BlockQuote { content } => render_blockquote(content, style, depth),
        Token::List { items } => render_list(items, style),
        Token::Table {
            headers,
            aligns,
            rows,
        } => render_table(headers, aligns, rows, style),
    }
}

/// Top/bottom margin in px and extra font style per heading level.
fn heading_metrics(level: u8) -> (u32, u32, &'static str) {
    match level {
        1 => (20, 16, ""),
        2 => (18, 14, ""),
        3 => (16, 12, ""),
        4 => (14, 10, ""),
        _ => (12, 8, "font-size: small; "),
    }
}

fn render_heading(level: u8, content: &str, style: &Style) -> String {
    let level = level.clamp(1, 6);
    let (top, bottom, size) = heading_metrics(level);
    format!(
        r#"<h{level} style="{size}margin-top: {top}px; margin-bottom: {bottom}px;">{}</h{level}>"#,
        render_inline(content, style)
    )
}

/// The language tag is not used; the surface has no syntax colouring.
fn render_code_block(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 2 * CODE_SPACER.len() + 160);
    out.push_str(CODE_SPACER);
    out.push_str(r#"<table width="100%" style="background-color: rgba(0,0,0,0.08);" border="0" cellpadding="10"><tr><td><pre style="margin: 0;">"#);
    escape_html_into(&mut out, content);
    out.push_str("</pre></td></tr></table>");
    out.push_str(CODE_SPACER);
    out
}

/// Two nested one-cell tables: the outer one's left padding shows as an
/// accent bar in the border colour, the inner one is the opaque panel.
fn render_blockquote(content: &str, style: &Style, depth: usize) -> String {
    let inner = if depth >= MAX_BLOCK_NESTING {
        log::warn!("blockquote nested deeper than {MAX_BLOCK_NESTING}, rendering as text");
        escape_html(content).replace('\n', style.break_tag)
    } else {
        render_nested(&tokenize(content), style, depth + 1)
    };

    format!(
        concat!(
            "{spacer}",
            r#"<table cellspacing="0" cellpadding="0" width="100%" bgcolor="{border}" style="margin:0;"><tr><td style="padding-left: 4px;">"#,
            r#"<table cellspacing="0" cellpadding="0" width="100%" bgcolor="{bg}" style="margin:0;"><tr><td style="padding: 8px 12px; color:{fg};">"#,
            "{inner}",
            "</td></tr></table></td></tr></table>",
            "{spacer}"
        ),
        spacer = QUOTE_SPACER,
        border = style.quote_border,
        bg = style.opaque_quote_bg,
        fg = style.quote_fg,
        inner = inner,
    )
}

/// Items are joined with the break fragment.
fn render_list(items: &[ListItem], style: &Style) -> String {
    items
        .iter()
        .map(|item| render_list_item(item, style))
        .collect::<Vec<_>>()
        .join(style.break_tag)
}

fn render_list_item(item: &ListItem, style: &Style) -> String {
    let indent_px = item.indent_width() * 8;
    let text = render_inline(&item.text, style);

    if item.is_task() {
        let (glyph, task_style) = if item.is_done() {
            (
                CHECKED_BOX,
                format!("color: {}; text-decoration: line-through;", style.task_done_fg),
            )
        } else {
            (UNCHECKED_BOX, String::new())
        };
        format!(
            r#"<div style="margin-left: {indent_px}px; margin-top: 4px; margin-bottom: 4px; {task_style}">{glyph} {text}</div>"#
        )
    } else {
        let bullet = if item.is_ordered() {
            item.bullet.as_str()
        } else {
            BULLET
        };
        format!(
            r#"<div style="margin-left: {indent_px}px; margin-top: 4px; margin-bottom: 4px;">{bullet} {text}</div>"#
        )
    }
}

/// Rows shorter than the header get empty cells; longer rows are cut.
fn render_table(headers: &Cells, aligns: &[Alignment], rows: &[Cells], style: &Style) -> String {
    let align = |col: usize| aligns.get(col).copied().unwrap_or_default().as_attr();

    let mut out = String::with_capacity(512);
    out.push_str(CODE_SPACER);
    out.push_str(r#"<table width="100%" border="1" cellpadding="4" cellspacing="0" style="border-collapse: collapse; border-color: #CFD8DC; margin-top: 8px; margin-bottom: 8px;"><tr style="background-color: rgba(0,0,0,0.05);">"#);

    for (col, header) in headers.iter().enumerate() {
        out.push_str(&format!(
            r#"<th align="{}"><b>{}</b></th>"#,
            align(col),
            render_inline(header, style)
        ));
    }
    out.push_str("</tr>");

    for row in rows {
        out.push_str("<tr>");
        for col in 0..headers.len() {
            let cell = row.get(col).map_or("", String::as_str);
            out.push_str(&format!(
                r#"<td align="{}">{}</td>"#,
                align(col),
                render_inline(cell, style)
            ));
        }
        out.push_str("</tr>");
    }

    out.push_str("</table>");
    out.push_str(CODE_SPACER);
    out
}

/// Join fragments, inserting a break between two neighbours unless one of
/// them is a break or already spaces itself.
fn join_fragments(fragments: &[String], break_tag: &str) -> String {
    let total = fragments.iter().map(String::len).sum::<usize>()
        + fragments.len() * break_tag.len();
    let mut out = String::with_capacity(total);

    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 && needs_break(&fragments[i - 1], fragment, break_tag) {
            out.push_str(break_tag);
        }
        out.push_str(fragment);
    }
    out
}

fn needs_break(prev: &str, next: &str, break_tag: &str) -> bool {
    prev != break_tag && next != break_tag && !opens_spaced(next) && !closes_spaced(prev)
}

/// `<table`, `<hr` or `<hN`.
#[inline]
fn opens_spaced(fragment: &str) -> bool {
    fragment.starts_with("<table") || fragment.starts_with("<h")
}

/// `</table>`, `</hr>` or `</hN>`.
fn closes_spaced(fragment: &str) -> bool {
    if fragment.ends_with("</table>") || fragment.ends_with("</hr>") {
        return true;
    }
    let bytes = fragment.as_bytes();
    bytes.len() >= 5
        && bytes.ends_with(b">")
        && bytes[bytes.len() - 5..bytes.len() - 2] == *b"</h"
        && (b'1'..=b'6').contains(&bytes[bytes.len() - 2])
}
