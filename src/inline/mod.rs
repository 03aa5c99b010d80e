//! Inline span processor.
//!
//! Text is escaped once, then rewritten by an ordered pipeline of passes:
//! 1. Images
//! 2. Links (link text runs through passes 1-7 again)
//! 3. URL and email autolinks
//! 4. Code spans
//! 5. Bold
//! 6. Italic
//! 7. Strikethrough
//!
//! Each pass sees the previous pass's output. Markup a pass inserts is
//! shielded, so later passes cannot start or end a match inside it.
//! Backslash escapes are not recognised: `\*` is a backslash and a star.

mod code_span;
mod emphasis;
mod links;
mod marked;
mod strikethrough;

use crate::escape::escape_html;
use crate::theme::Style;
use marked::Marked;

/// Render one line or a newline-joined paragraph to markup.
///
/// Remaining newlines become the style's break fragment.
///
/// # Example
/// ```
/// use notemark::{render_inline, Style};
///
/// let html = render_inline("**bold** & ~~gone~~", &Style::default());
/// assert_eq!(html, "<b>bold</b> &amp; <s>gone</s>");
/// ```
pub fn render_inline(text: &str, style: &Style) -> String {
    if text.is_empty() {
        return String::new();
    }

    let marked = Marked::from_text(escape_html(text));
    let html = apply_spans(marked, style, 0).into_string();

    if html.contains('\n') {
        html.replace('\n', style.break_tag)
    } else {
        html
    }
}

/// Run every span pass over already-escaped text.
fn apply_spans(text: Marked, style: &Style, depth: usize) -> Marked {
    let text = links::images(&text);
    let text = links::links(&text, style, depth);
    let text = links::url_autolinks(&text, style);
    let text = links::email_autolinks(&text, style);
    let text = code_span::code_spans(&text, style);
    let text = emphasis::bold(&text);
    let text = emphasis::italic(&text);
    strikethrough::strikethrough(&text)
}
