//! Text buffer that remembers which bytes are inserted markup.
//!
//! Inline passes run one after another over the same string. Bytes a
//! pass writes as markup are shielded: later passes never start or end a
//! match on them, although a match may enclose them.

use std::ops::Range;

use memchr::memchr_iter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Marked {
    text: String,
    /// One flag per byte of `text`; `true` for inserted markup.
    shielded: Vec<bool>,
}

impl Marked {
    /// Wrap source text; every byte is open to matching.
    pub(crate) fn from_text(text: String) -> Self {
        let shielded = vec![false; text.len()];
        Self { text, shielded }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            shielded: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the byte at `pos` came from the source text.
    #[inline]
    pub(crate) fn is_free(&self, pos: usize) -> bool {
        self.shielded.get(pos).is_some_and(|&s| !s)
    }

    /// Whether `pat` occurs at `pos` entirely in source text.
    pub(crate) fn free_at(&self, pos: usize, pat: &str) -> bool {
        let end = pos + pat.len();
        end <= self.len()
            && &self.as_bytes()[pos..end] == pat.as_bytes()
            && self.shielded[pos..end].iter().all(|&s| !s)
    }

    /// First unshielded occurrence of `byte` at or after `from`.
    pub(crate) fn find_free(&self, byte: u8, from: usize) -> Option<usize> {
        let haystack = self.as_bytes().get(from..)?;
        memchr_iter(byte, haystack)
            .map(|off| from + off)
            .find(|&pos| self.is_free(pos))
    }

    /// End of the run of unshielded chars starting at `from` that satisfy
    /// `pred`.
    pub(crate) fn scan_while<F>(&self, from: usize, mut pred: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let Some(rest) = self.text.get(from..) else {
            return from;
        };
        for (off, c) in rest.char_indices() {
            if !pred(c) || !self.is_free(from + off) {
                return from + off;
            }
        }
        self.len()
    }

    /// Skip spaces and tabs from `from`.
    pub(crate) fn skip_spaces(&self, from: usize) -> usize {
        let bytes = self.as_bytes();
        let mut pos = from;
        while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
            pos += 1;
        }
        pos
    }

    /// Copy of a sub-range, shielding preserved.
    pub(crate) fn slice(&self, range: Range<usize>) -> Marked {
        Self {
            text: self.text[range.clone()].to_string(),
            shielded: self.shielded[range].to_vec(),
        }
    }

    /// Append inserted markup.
    pub(crate) fn push_markup(&mut self, markup: &str) {
        self.text.push_str(markup);
        self.shielded.resize(self.text.len(), true);
    }

    /// Append a sub-range of another buffer, shielding preserved.
    pub(crate) fn push_slice(&mut self, src: &Marked, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.text.push_str(&src.text[range.clone()]);
        self.shielded.extend_from_slice(&src.shielded[range]);
    }

    /// Append another buffer.
    pub(crate) fn append(&mut self, other: Marked) {
        self.text.push_str(&other.text);
        self.shielded.extend(other.shielded);
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }
}

/// Run a matcher at every byte position, left to right.
///
/// `try_match(buf, pos)` returns the end of the match and its replacement;
/// scanning resumes after the match, so replacements are never rescanned
/// by the same pass.
pub(crate) fn rewrite<F>(src: &Marked, mut try_match: F) -> Marked
where
    F: FnMut(&Marked, usize) -> Option<(usize, Marked)>,
{
    let len = src.len();
    let mut out = Marked::with_capacity(len + len / 4);
    let mut copied = 0;
    let mut pos = 0;

    while pos < len {
        match try_match(src, pos) {
            Some((end, replacement)) => {
                debug_assert!(end > pos);
                out.push_slice(src, copied..pos);
                out.append(replacement);
                pos = end;
                copied = end;
            }
            None => pos += 1,
        }
    }

    out.push_slice(src, copied..len);
    out
}
