//! Line predicates for block recognition.
//!
//! Each construct has exactly one recognizer here. The tokenizer uses them
//! to open blocks, and paragraph continuation uses the same functions to
//! decide where a paragraph stops, so the two views cannot drift apart.

use crate::limits::{MAX_HEADING_LEVEL, MIN_RULE_MARKERS};

use super::token::{Alignment, Cells, ListItem, TaskState};

const FENCE: &str = "```";
const CODE_INDENT: &str = "    ";

#[inline]
fn is_space_or_tab(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// A line with nothing but whitespace.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Three or more of the same `-`, `_` or `*` marker, optionally separated
/// by spaces or tabs, with nothing else on the line.
pub fn is_thematic_break(line: &str) -> bool {
    let bytes = line.as_bytes();
    let marker = match bytes.first() {
        Some(&b @ (b'-' | b'_' | b'*')) => b,
        _ => return false,
    };

    let mut count = 0;
    for &b in bytes {
        if b == marker {
            count += 1;
        } else if !is_space_or_tab(b) {
            return false;
        }
    }
    count >= MIN_RULE_MARKERS
}

/// ATX heading: 1-6 `#`, whitespace, then content.
///
/// Returns the level and the trimmed content.
pub fn atx_heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    let rest = &line[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((level as u8, rest.trim()))
}

/// A line opening or closing a fenced code block.
#[inline]
pub fn is_fence(line: &str) -> bool {
    line.starts_with(FENCE)
}

/// Language tag of an opening fence: the word characters right after the
/// backticks. `None` if the line is not a fence.
pub fn fence_lang(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(FENCE)?;
    let len = rest.bytes().take_while(|&b| is_word_byte(b)).count();
    Some(&rest[..len])
}

/// Four leading spaces or one leading tab.
#[inline]
pub fn is_indented(line: &str) -> bool {
    line.starts_with(CODE_INDENT) || line.starts_with('\t')
}

/// Remove one code indent unit, if present.
pub fn strip_indent(line: &str) -> &str {
    line.strip_prefix(CODE_INDENT)
        .or_else(|| line.strip_prefix('\t'))
        .unwrap_or(line)
}

/// A `>` quote line.
#[inline]
pub fn is_blockquote(line: &str) -> bool {
    line.starts_with('>')
}

/// Remove the leading `>` and at most one following space or tab.
pub fn strip_quote_marker(line: &str) -> &str {
    let rest = line.strip_prefix('>').unwrap_or(line);
    rest.strip_prefix([' ', '\t']).unwrap_or(rest)
}

/// Parse a list line: optional indentation, a bullet (`-`, `*` or `N.`),
/// at least one space or tab, then the item text.
pub fn list_item(line: &str) -> Option<ListItem> {
    let bytes = line.as_bytes();
    let indent_len = bytes.iter().take_while(|&&b| is_space_or_tab(b)).count();

    let bullet_len = match bytes.get(indent_len) {
        Some(b'-' | b'*') => 1,
        Some(b) if b.is_ascii_digit() => {
            let digits = bytes[indent_len..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            if bytes.get(indent_len + digits) != Some(&b'.') {
                return None;
            }
            digits + 1
        }
        _ => return None,
    };

    let after_bullet = indent_len + bullet_len;
    let gap = bytes[after_bullet..]
        .iter()
        .take_while(|&&b| is_space_or_tab(b))
        .count();
    if gap == 0 {
        return None;
    }

    let (task, text) = split_task_marker(&line[after_bullet + gap..]);
    Some(ListItem {
        indent: line[..indent_len].to_string(),
        bullet: line[indent_len..after_bullet].to_string(),
        text: text.to_string(),
        task,
    })
}

/// Whether a line starts a list item.
#[inline]
pub fn is_list_item(line: &str) -> bool {
    list_item(line).is_some()
}

/// Split a `[x] `, `[X] ` or `[ ] ` marker off the item text.
fn split_task_marker(text: &str) -> (TaskState, &str) {
    let bytes = text.as_bytes();
    if bytes.len() < 4 || bytes[0] != b'[' || bytes[2] != b']' {
        return (TaskState::None, text);
    }
    let state = match bytes[1] {
        b'x' | b'X' => TaskState::Checked,
        b' ' => TaskState::Unchecked,
        _ => return (TaskState::None, text),
    };

    let rest = &text[3..];
    let trimmed = rest.trim_start_matches([' ', '\t']);
    if trimmed.len() == rest.len() {
        return (TaskState::None, text);
    }
    (state, trimmed)
}

/// A `|...|` line.
#[inline]
pub fn is_table_row(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

/// A `|---|:--:|` separator line: pipes around a non-empty run of `-`,
/// `:`, spaces and pipes.
pub fn is_table_separator(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 3
        && bytes[0] == b'|'
        && bytes[bytes.len() - 1] == b'|'
        && bytes[1..bytes.len() - 1]
            .iter()
            .all(|&b| matches!(b, b' ' | b'-' | b':' | b'|'))
}

/// Trimmed cells between the outer pipes of a table line.
pub fn split_cells(line: &str) -> Cells {
    let inner = line
        .strip_prefix('|')
        .and_then(|l| l.strip_suffix('|'))
        .unwrap_or(line);
    inner
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Alignment of one separator cell.
///
/// An empty cell counts as right aligned, like a lone trailing `:`.
pub fn column_alignment(cell: &str) -> Alignment {
    let cell = cell.trim();
    let leading = cell.starts_with(':');
    let trailing = cell.ends_with(':');
    if leading && trailing && cell.len() > 1 {
        Alignment::Center
    } else if trailing || cell.is_empty() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// Level of a setext underline: `===` gives 1, `---` gives 2.
pub fn setext_level(line: &str) -> Option<u8> {
    if line.len() < MIN_RULE_MARKERS {
        return None;
    }
    if line.bytes().all(|b| b == b'=') {
        Some(1)
    } else if line.bytes().all(|b| b == b'-') {
        Some(2)
    } else {
        None
    }
}

/// Whether a line opens a block that interrupts a paragraph.
pub fn starts_block(line: &str) -> bool {
    is_thematic_break(line)
        || atx_heading(line).is_some()
        || is_fence(line)
        || is_blockquote(line)
        || is_list_item(line)
}
