//! Recursion limits.
//!
//! These bound the two places where rendering recurses on input
//! structure, so pathological nesting cannot exhaust the call stack.

/// Maximum nesting depth for blockquotes (`> > > ...`).
///
/// Content nested deeper than this is emitted as escaped text inside
/// the innermost quote panel instead of being tokenized again.
pub const MAX_BLOCK_NESTING: usize = 32;

/// Maximum nesting depth for link text run back through the inline pipeline.
///
/// Link text cannot contain `]`, so real input recurses one level at most
/// (an image inside a link). The limit only guards against runaway
/// recursion.
pub const MAX_INLINE_NESTING: usize = 32;

/// Maximum heading level for ATX headings.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Minimum number of markers for a thematic break or setext underline.
pub const MIN_RULE_MARKERS: usize = 3;
