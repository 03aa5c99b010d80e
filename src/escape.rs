//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for the first escapable character,
//! then bulk-copies segments between escapes.

use memchr::{memchr2, memchr3};

/// Lookup table for escapable characters.
/// Index by byte value, true if needs escaping.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Escape `&`, `<`, `>`, `"` and `'` into the output string.
///
/// # Example
/// ```
/// use notemark::escape::escape_html_into;
///
/// let mut out = String::new();
/// escape_html_into(&mut out, "it's <b>");
/// assert_eq!(out, "it&#039;s &lt;b&gt;");
/// ```
#[inline]
pub fn escape_html_into(out: &mut String, input: &str) {
    if input.is_empty() {
        return;
    }

    let bytes = input.as_bytes();
    let mut pos = match first_escape(bytes) {
        Some(p) => p,
        None => {
            out.push_str(input);
            return;
        }
    };

    out.reserve(input.len() + input.len() / 8);
    out.push_str(&input[..pos]);

    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }

        // Every escapable byte is ASCII, so `pos` is always a char boundary.
        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }

        if pos < bytes.len() {
            out.push_str(entity_for(bytes[pos]));
            pos += 1;
        }
    }
}

/// Escape and return as a new String.
///
/// Prefer `escape_html_into` to reuse buffers.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    escape_html_into(&mut out, input);
    out
}

#[inline]
fn entity_for(b: u8) -> &'static str {
    match b {
        b'<' => "&lt;",
        b'>' => "&gt;",
        b'&' => "&amp;",
        b'"' => "&quot;",
        b'\'' => "&#039;",
        _ => unreachable!("byte {b:#x} is not in the escape table"),
    }
}

#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr2(b'"', b'\'', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_html("Hello, World!"), "Hello, World!");
    }

    #[test]
    fn test_escape_lt_gt() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_escape_amp() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_html("\"it's\""), "&quot;it&#039;s&quot;");
    }

    #[test]
    fn test_escape_all() {
        assert_eq!(escape_html("<>&\"'"), "&lt;&gt;&amp;&quot;&#039;");
    }

    #[test]
    fn test_escape_already_escaped_is_escaped_once_more() {
        // Input is treated as text; an entity in the source is literal text.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_at_boundaries() {
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html("hello<"), "hello&lt;");
        assert_eq!(escape_html("<hello"), "&lt;hello");
    }

    #[test]
    fn test_escape_unicode() {
        assert_eq!(escape_html("Grüße <tag> – ok"), "Grüße &lt;tag&gt; – ok");
    }
}
