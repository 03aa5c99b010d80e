//! Images, inline links and autolinks.
//!
//! All three run on already-escaped text, so quotes around a title
//! appear as `&quot;` or `&#039;` and angle brackets as `&lt;`/`&gt;`.

use std::ops::Range;

use crate::limits::MAX_INLINE_NESTING;
use crate::theme::Style;

use super::apply_spans;
use super::marked::{rewrite, Marked};

/// Escaped quote characters that may delimit a title. Both are six bytes.
const QUOTE_ENTITIES: [&str; 2] = ["&quot;", "&#039;"];
const QUOTE_LEN: usize = 6;

const LT: &str = "&lt;";
const GT: &str = "&gt;";

/// Destination part of `(url "title")`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Destination {
    url: Range<usize>,
    title: Option<Range<usize>>,
    /// Position after the closing `)`.
    end: usize,
}

impl Destination {
    fn url<'a>(&self, m: &'a Marked) -> &'a str {
        &m.as_str()[self.url.clone()]
    }

    fn title<'a>(&self, m: &'a Marked) -> &'a str {
        self.title.clone().map_or("", |r| &m.as_str()[r])
    }
}

/// `![alt](url "title")` to an `<img>` scaled to the available width.
pub(super) fn images(src: &Marked) -> Marked {
    rewrite(src, |m, pos| {
        if !m.free_at(pos, "![") {
            return None;
        }
        let alt_start = pos + 2;
        let alt_end = m.find_free(b']', alt_start)?;
        let dest = parse_destination(m, alt_end + 1)?;

        let mut out = Marked::default();
        out.push_markup(&format!(
            r#"<img src="{}" title="{}" alt="{}" style="max-width: 100%;" />"#,
            dest.url(m),
            dest.title(m),
            &m.as_str()[alt_start..alt_end],
        ));
        Some((dest.end, out))
    })
}

/// `[text](url "title")` to an anchor. The link text goes through the
/// inline passes again, one level deeper.
pub(super) fn links(src: &Marked, style: &Style, depth: usize) -> Marked {
    rewrite(src, |m, pos| {
        if !m.free_at(pos, "[") {
            return None;
        }
        let text_start = pos + 1;
        let text_end = m.find_free(b']', text_start)?;
        if text_end == text_start {
            return None;
        }
        let dest = parse_destination(m, text_end + 1)?;

        let label = m.slice(text_start..text_end);
        let label = if depth < MAX_INLINE_NESTING {
            apply_spans(label, style, depth + 1)
        } else {
            log::warn!("link text nested deeper than {MAX_INLINE_NESTING}, left as text");
            label
        };

        let mut out = Marked::default();
        out.push_markup(&format!(
            r#"<a href="{}" title="{}" style="color: {};">{}</a>"#,
            dest.url(m),
            dest.title(m),
            style.link_color,
            label.as_str(),
        ));
        Some((dest.end, out))
    })
}

/// `<http://...>` and `<https://...>`.
pub(super) fn url_autolinks(src: &Marked, style: &Style) -> Marked {
    rewrite(src, |m, pos| {
        if !m.free_at(pos, LT) {
            return None;
        }
        let start = pos + LT.len();
        let scheme_len = ["https://", "http://"]
            .iter()
            .find(|scheme| m.free_at(start, scheme))?
            .len();

        let end = m.scan_while(start + scheme_len, |c| c != '&');
        if end == start + scheme_len || !m.free_at(end, GT) {
            return None;
        }

        let url = &m.as_str()[start..end];
        let mut out = Marked::default();
        out.push_markup(&format!(
            r#"<a href="{url}" style="color: {};">{url}</a>"#,
            style.link_color
        ));
        Some((end + GT.len(), out))
    })
}

/// `<user@example.com>` to a `mailto:` anchor.
pub(super) fn email_autolinks(src: &Marked, style: &Style) -> Marked {
    rewrite(src, |m, pos| {
        if !m.free_at(pos, LT) {
            return None;
        }
        let start = pos + LT.len();
        let address_char = |c: char| c != '@' && !c.is_whitespace();

        let at = m.scan_while(start, address_char);
        if at == start || !m.free_at(at, "@") {
            return None;
        }
        let domain_start = at + 1;
        let run_end = m.scan_while(domain_start, address_char);

        // The `&gt;` itself is part of the run, so take the last one that
        // leaves a dotted domain before it.
        let close = (domain_start..=run_end.checked_sub(GT.len())?)
            .rev()
            .find(|&g| m.free_at(g, GT) && has_inner_dot(&m.as_bytes()[domain_start..g]))?;

        let address = &m.as_str()[start..close];
        let mut out = Marked::default();
        out.push_markup(&format!(
            r#"<a href="mailto:{address}" style="color: {};">{address}</a>"#,
            style.link_color
        ));
        Some((close + GT.len(), out))
    })
}

/// A `.` with at least one byte on each side.
fn has_inner_dot(domain: &[u8]) -> bool {
    domain.len() >= 3 && domain[1..domain.len() - 1].contains(&b'.')
}

/// Parse `(url)` or `(url "title")` starting at the `(`.
///
/// The URL is a run of characters other than `)` and whitespace. A title
/// needs whitespace before it and is the shortest quoted text on the line
/// that is followed by optional spaces and the closing `)`.
fn parse_destination(m: &Marked, open: usize) -> Option<Destination> {
    if !m.free_at(open, "(") {
        return None;
    }
    let url_start = open + 1;
    let url_end = m.scan_while(url_start, |c| c != ')' && !c.is_whitespace());
    if url_end == url_start {
        return None;
    }
    let url = url_start..url_end;

    if let Some((title, end)) = parse_title(m, url_end) {
        return Some(Destination {
            url,
            title: Some(title),
            end,
        });
    }

    let close = m.skip_spaces(url_end);
    m.free_at(close, ")").then(|| Destination {
        url,
        title: None,
        end: close + 1,
    })
}

/// Titles hold source text only; inserted markup ends the scan.
fn parse_title(m: &Marked, url_end: usize) -> Option<(Range<usize>, usize)> {
    let open = m.skip_spaces(url_end);
    if open == url_end || !is_quote_at(m, open) {
        return None;
    }

    let title_start = open + QUOTE_LEN;
    let bytes = m.as_bytes();
    let mut pos = title_start;
    while pos < bytes.len() && bytes[pos] != b'\n' && bytes[pos] != b'\r' {
        if !m.is_free(pos) {
            return None;
        }
        if is_quote_at(m, pos) {
            let close = m.skip_spaces(pos + QUOTE_LEN);
            if m.free_at(close, ")") {
                return Some((title_start..pos, close + 1));
            }
        }
        pos += 1;
    }
    None
}

#[inline]
fn is_quote_at(m: &Marked, pos: usize) -> bool {
    QUOTE_ENTITIES.iter().any(|q| m.free_at(pos, q))
}
