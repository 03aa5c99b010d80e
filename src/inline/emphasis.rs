//! Bold and italic spans.
//!
//! Bold runs before italic so `**` is consumed whole and the italic pass
//! never sees its first `*`.

use super::marked::{rewrite, Marked};

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Wrap the shortest `delim ... delim` span on one line in `<tag>`.
///
/// With `word_bounded`, the opener must not follow a word character and
/// the closer must not precede one (`snake_case_name` stays as is).
pub(super) fn replace_delimited(
    src: &Marked,
    delim: &str,
    word_bounded: bool,
    tag: &str,
) -> Marked {
    let dl = delim.len();
    rewrite(src, |m, pos| {
        if !m.free_at(pos, delim) {
            return None;
        }
        let bytes = m.as_bytes();
        if word_bounded && pos > 0 && is_word_byte(bytes[pos - 1]) {
            return None;
        }

        let content_start = pos + dl;
        let mut close = content_start;
        while close + dl <= bytes.len() {
            if bytes[close] == b'\n' || bytes[close] == b'\r' {
                return None;
            }
            let bounded = !word_bounded
                || bytes.get(close + dl).is_none_or(|&b| !is_word_byte(b));
            if bounded && m.free_at(close, delim) {
                let mut out = Marked::with_capacity(close - content_start + 2 * tag.len() + 5);
                out.push_markup(&format!("<{tag}>"));
                out.push_slice(m, content_start..close);
                out.push_markup(&format!("</{tag}>"));
                return Some((close + dl, out));
            }
            close += 1;
        }
        None
    })
}

/// `**x**` then `__x__`.
pub(super) fn bold(src: &Marked) -> Marked {
    let out = replace_delimited(src, "**", false, "b");
    replace_delimited(&out, "__", true, "b")
}

/// `*x*` then `_x_`.
pub(super) fn italic(src: &Marked) -> Marked {
    let out = replace_delimited(src, "*", false, "i");
    replace_delimited(&out, "_", true, "i")
}
