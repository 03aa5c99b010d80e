//! Line cursor for block scanning.
//!
//! The block tokenizer is line-oriented: it looks at the current line,
//! sometimes peeks one line ahead, and consumes one or more lines per
//! token. `LineCursor` owns the split lines and the current position.

use memchr::memchr_iter;

/// A cursor over the lines of an input string.
///
/// Lines are split on `\n`; a `\r` directly before the `\n` is dropped,
/// so `\r\n` and `\n` endings scan identically. A trailing newline yields
/// a final empty line.
///
/// # Example
/// ```
/// use notemark::cursor::LineCursor;
///
/// let mut cursor = LineCursor::new("one\r\ntwo");
/// assert_eq!(cursor.peek(), Some("one"));
/// cursor.bump();
/// assert_eq!(cursor.peek(), Some("two"));
/// cursor.bump();
/// assert!(cursor.is_eof());
/// ```
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Split `input` into lines and position the cursor on the first one.
    pub fn new(input: &'a str) -> Self {
        let mut lines = Vec::with_capacity(input.len() / 32 + 1);
        let mut start = 0;
        for nl in memchr_iter(b'\n', input.as_bytes()) {
            lines.push(strip_cr(&input[start..nl]));
            start = nl + 1;
        }
        lines.push(&input[start..]);
        Self { lines, pos: 0 }
    }

    /// Index of the current line.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check if the cursor has moved past the last line.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// The current line.
    #[inline]
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// The line `n` positions after the current one.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<&'a str> {
        self.lines.get(self.pos + n).copied()
    }

    /// Move to the next line.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Move forward `n` lines, stopping at end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.lines.len());
    }

    /// Return the current line and move past it.
    #[inline]
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.bump();
        Some(line)
    }

    /// Consume lines while `predicate` holds, returning them.
    ///
    /// The first line that fails the predicate is left unconsumed.
    pub fn take_while<F>(&mut self, mut predicate: F) -> Vec<&'a str>
    where
        F: FnMut(&str) -> bool,
    {
        let mut taken = Vec::new();
        while let Some(line) = self.peek() {
            if !predicate(line) {
                break;
            }
            taken.push(line);
            self.bump();
        }
        taken
    }
}

#[inline]
fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
