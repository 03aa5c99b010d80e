//! Block-level tokenizer for Markdown.
//!
//! The tokenizer is line-oriented and recognizes, in priority order:
//! - Blank lines
//! - Thematic breaks
//! - ATX headings
//! - Fenced and indented code blocks
//! - Blockquotes
//! - Lists (flat, with task markers)
//! - Pipe tables
//! - Setext headings
//! - Paragraphs

pub mod scan;
mod token;
mod tokenizer;

pub use token::{Alignment, Cells, ListItem, TaskState, Token, TokenKind};
pub use tokenizer::tokenize;
