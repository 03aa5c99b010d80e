//! Code span rendering.
//!
//! A code span is a single backtick, at least one character, and the next
//! backtick. Content is trimmed and padded with non-breaking spaces so the
//! tinted background does not hug the glyphs.

use crate::theme::Style;

use super::marked::{rewrite, Marked};

pub(super) fn code_spans(src: &Marked, style: &Style) -> Marked {
    rewrite(src, |m, pos| {
        if !m.free_at(pos, "`") {
            return None;
        }
        let close = m.find_free(b'`', pos + 1)?;
        if close == pos + 1 {
            // Empty span; the second backtick may still open one.
            return None;
        }

        let code = m.as_str()[pos + 1..close].trim();
        let mut out = Marked::default();
        out.push_markup(&format!(
            r#"<span style="background-color: {}; font-family: monospace; color: {};">&nbsp;{}&nbsp;</span>"#,
            style.inline_code_bg, style.inline_code_fg, code
        ));
        Some((close + 1, out))
    })
}
