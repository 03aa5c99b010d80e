//! Block tokenizer implementation.

use crate::cursor::LineCursor;

use super::scan;
use super::token::{Cells, Token, TokenKind};

/// Split `text` into block tokens.
///
/// Never fails: input that matches no construct ends up in a paragraph.
///
/// # Example
/// ```
/// use notemark::block::{tokenize, Token};
///
/// let tokens = tokenize("# Title\n\nBody");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Token::Empty);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new(text).run()
}

/// Tokenizer state: a line cursor and the tokens emitted so far.
struct Tokenizer<'a> {
    cursor: LineCursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    fn new(text: &'a str) -> Self {
        let cursor = LineCursor::new(text);
        let tokens = Vec::with_capacity(cursor.len() / 2 + 1);
        Self { cursor, tokens }
    }

    fn run(mut self) -> Vec<Token> {
        log::trace!("tokenizing {} lines", self.cursor.len());
        while let Some(line) = self.cursor.peek() {
            let before = self.cursor.position();
            self.parse_line(line);
            debug_assert!(self.cursor.position() > before, "tokenizer made no progress");
        }
        self.tokens
    }

    fn push(&mut self, token: Token) {
        log::trace!(
            "line {}: {:?}",
            self.cursor.position(),
            token.kind()
        );
        self.tokens.push(token);
    }

    /// Try each construct in priority order; the first match consumes
    /// its lines.
    fn parse_line(&mut self, line: &'a str) {
        if self.try_blank(line)
            || self.try_thematic_break(line)
            || self.try_atx_heading(line)
            || self.try_fenced_code(line)
            || self.try_indented_code(line)
            || self.try_blockquote(line)
            || self.try_list(line)
            || self.try_table(line)
            || self.try_setext_heading(line)
        {
            return;
        }
        self.parse_paragraph();
    }

    fn try_blank(&mut self, line: &str) -> bool {
        if !scan::is_blank(line) {
            return false;
        }
        self.cursor.bump();
        self.push(Token::Empty);
        true
    }

    fn try_thematic_break(&mut self, line: &str) -> bool {
        if !scan::is_thematic_break(line) {
            return false;
        }
        self.cursor.bump();
        self.push(Token::ThematicBreak);
        true
    }

    fn try_atx_heading(&mut self, line: &str) -> bool {
        let Some((level, content)) = scan::atx_heading(line) else {
            return false;
        };
        self.cursor.bump();
        self.push(Token::Heading {
            level,
            content: content.to_string(),
        });
        true
    }

    /// Fenced code runs to the next fence line or to end of input.
    fn try_fenced_code(&mut self, line: &str) -> bool {
        let Some(lang) = scan::fence_lang(line) else {
            return false;
        };
        self.cursor.bump();

        let body = self.cursor.take_while(|l| !scan::is_fence(l));
        // Closing fence, if any.
        self.cursor.bump();

        self.push(Token::CodeBlock {
            lang: lang.to_string(),
            content: body.join("\n"),
        });
        true
    }

    /// Indented code only directly after a blank line or another code
    /// block, so indented list continuations stay out of it.
    fn try_indented_code(&mut self, line: &str) -> bool {
        if !scan::is_indented(line) {
            return false;
        }
        let prev = self.tokens.last().map_or(TokenKind::Empty, Token::kind);
        if !matches!(prev, TokenKind::Empty | TokenKind::CodeBlock) {
            return false;
        }

        let body = self
            .cursor
            .take_while(|l| scan::is_blank(l) || scan::is_indented(l));
        let content = body
            .iter()
            .map(|l| scan::strip_indent(l))
            .collect::<Vec<_>>()
            .join("\n");

        self.push(Token::CodeBlock {
            lang: String::new(),
            content: content.trim_end_matches('\n').to_string(),
        });
        true
    }

    fn try_blockquote(&mut self, line: &str) -> bool {
        if !scan::is_blockquote(line) {
            return false;
        }
        let body = self.cursor.take_while(scan::is_blockquote);
        let content = body
            .iter()
            .map(|l| scan::strip_quote_marker(l))
            .collect::<Vec<_>>()
            .join("\n");
        self.push(Token::BlockQuote { content });
        true
    }

    fn try_list(&mut self, line: &str) -> bool {
        if !scan::is_list_item(line) {
            return false;
        }
        let mut items = Vec::new();
        while let Some(item) = self.cursor.peek().and_then(scan::list_item) {
            items.push(item);
            self.cursor.bump();
        }
        self.push(Token::List { items });
        true
    }

    /// A header row needs a separator row directly below it.
    fn try_table(&mut self, line: &str) -> bool {
        let Some(separator) = self.cursor.peek_ahead(1) else {
            return false;
        };
        if !scan::is_table_row(line) || !scan::is_table_separator(separator) {
            return false;
        }

        let headers = scan::split_cells(line);
        let aligns = scan::split_cells(separator)
            .iter()
            .map(|cell| scan::column_alignment(cell))
            .collect();
        self.cursor.advance(2);

        let rows: Vec<Cells> = self
            .cursor
            .take_while(scan::is_table_row)
            .into_iter()
            .map(scan::split_cells)
            .collect();

        self.push(Token::Table {
            headers,
            aligns,
            rows,
        });
        true
    }

    fn try_setext_heading(&mut self, line: &str) -> bool {
        let Some(level) = self.cursor.peek_ahead(1).and_then(scan::setext_level) else {
            return false;
        };
        self.cursor.advance(2);
        self.push(Token::Heading {
            level,
            content: line.trim().to_string(),
        });
        true
    }

    /// Collect lines until a blank line or a block start.
    fn parse_paragraph(&mut self) {
        let mut lines = self
            .cursor
            .take_while(|l| !scan::is_blank(l) && !scan::starts_block(l));
        if lines.is_empty() {
            // Every construct declined the line; keep it as text.
            if let Some(line) = self.cursor.next_line() {
                lines.push(line);
            }
        }
        self.push(Token::Paragraph {
            content: lines.join("\n"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Alignment, TaskState};

    fn paragraph(s: &str) -> Token {
        Token::Paragraph {
            content: s.to_string(),
        }
    }

    fn heading(level: u8, s: &str) -> Token {
        Token::Heading {
            level,
            content: s.to_string(),
        }
    }

    fn code(lang: &str, s: &str) -> Token {
        Token::CodeBlock {
            lang: lang.to_string(),
            content: s.to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![Token::Empty]);
    }

    #[test]
    fn test_blank_lines_not_coalesced() {
        assert_eq!(
            tokenize("a\n\n\nb"),
            vec![paragraph("a"), Token::Empty, Token::Empty, paragraph("b")]
        );
    }

    #[test]
    fn test_crlf_matches_lf() {
        assert_eq!(tokenize("# T\r\nbody\r\n"), tokenize("# T\nbody\n"));
    }

    #[test]
    fn test_multiline_paragraph() {
        assert_eq!(tokenize("one\ntwo\nthree"), vec![paragraph("one\ntwo\nthree")]);
    }

    #[test]
    fn test_thematic_breaks_consume_one_line() {
        for input in ["---", "***", "___", "- - -", "*****"] {
            assert_eq!(tokenize(input), vec![Token::ThematicBreak], "{input}");
        }
    }

    #[test]
    fn test_atx_headings() {
        for level in 1..=6u8 {
            let input = format!("{} H", "#".repeat(level as usize));
            assert_eq!(tokenize(&input), vec![heading(level, "H")]);
        }
    }

    #[test]
    fn test_seven_hashes_is_paragraph() {
        assert_eq!(tokenize("####### H"), vec![paragraph("####### H")]);
    }

    #[test]
    fn test_fenced_code() {
        assert_eq!(tokenize("```js\ncode\n```"), vec![code("js", "code")]);
    }

    #[test]
    fn test_fenced_code_keeps_blank_lines_and_markers() {
        assert_eq!(
            tokenize("```\n# not heading\n\n- not list\n```\nafter"),
            vec![code("", "# not heading\n\n- not list"), paragraph("after")]
        );
    }

    #[test]
    fn test_unterminated_fence_consumes_rest() {
        assert_eq!(
            tokenize("```\nline1\n\nline2"),
            vec![code("", "line1\n\nline2")]
        );
    }

    #[test]
    fn test_indented_code_at_start() {
        assert_eq!(
            tokenize("    let x = 1;\n\tlet y = 2;\n\n"),
            vec![code("", "let x = 1;\nlet y = 2;")]
        );
    }

    #[test]
    fn test_indented_code_after_blank() {
        assert_eq!(
            tokenize("text\n\n    code\nmore"),
            vec![
                paragraph("text"),
                Token::Empty,
                code("", "code"),
                paragraph("more")
            ]
        );
    }

    #[test]
    fn test_indented_line_after_paragraph_is_not_code() {
        assert_eq!(tokenize("text\n    still text"), vec![paragraph("text\n    still text")]);
    }

    #[test]
    fn test_indented_line_after_heading_is_paragraph() {
        assert_eq!(
            tokenize("# H\n    text"),
            vec![heading(1, "H"), paragraph("    text")]
        );
    }

    #[test]
    fn test_blockquote_strips_one_marker() {
        assert_eq!(
            tokenize("> outer\n>> inner\n>\tx"),
            vec![Token::BlockQuote {
                content: "outer\n> inner\nx".to_string()
            }]
        );
    }

    #[test]
    fn test_list_run() {
        let tokens = tokenize("- a\n  * b\n1. c\n\n- d");
        assert_eq!(tokens.len(), 3);
        let Token::List { items } = &tokens[0] else {
            panic!("expected list, got {:?}", tokens[0]);
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].indent, "  ");
        assert_eq!(items[1].bullet, "*");
        assert_eq!(items[2].bullet, "1.");
        assert_eq!(tokens[1], Token::Empty);
    }

    #[test]
    fn test_list_stops_at_non_item() {
        let tokens = tokenize("- a\nplain");
        assert!(matches!(tokens[0], Token::List { .. }));
        assert_eq!(tokens[1], paragraph("plain"));
    }

    #[test]
    fn test_task_items() {
        let tokens = tokenize("- [x] done thing\n- [ ] todo");
        let Token::List { items } = &tokens[0] else {
            panic!("expected list");
        };
        assert_eq!(items[0].task, TaskState::Checked);
        assert_eq!(items[0].text, "done thing");
        assert_eq!(items[1].task, TaskState::Unchecked);
        assert_eq!(items[1].text, "todo");
    }

    #[test]
    fn test_table() {
        let tokens = tokenize("| A | B |\n|:--|--:|\n| 1 | 2 |");
        assert_eq!(tokens.len(), 1);
        let Token::Table {
            headers,
            aligns,
            rows,
        } = &tokens[0]
        else {
            panic!("expected table");
        };
        assert_eq!(headers.as_slice(), ["A", "B"]);
        assert_eq!(aligns, &vec![Alignment::Left, Alignment::Right]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].as_slice(), ["1", "2"]);
    }

    #[test]
    fn test_table_without_separator_is_paragraph() {
        assert_eq!(
            tokenize("| A | B |\n| 1 | 2 |"),
            vec![paragraph("| A | B |\n| 1 | 2 |")]
        );
    }

    #[test]
    fn test_table_header_at_end_of_input_is_paragraph() {
        assert_eq!(tokenize("| A |"), vec![paragraph("| A |")]);
    }

    #[test]
    fn test_table_rows_stop_at_non_row() {
        let tokens = tokenize("| A |\n|---|\n| 1 |\ntext");
        assert!(matches!(tokens[0], Token::Table { .. }));
        assert_eq!(tokens[1], paragraph("text"));
    }

    #[test]
    fn test_setext_headings() {
        assert_eq!(tokenize("Title\n==="), vec![heading(1, "Title")]);
        assert_eq!(tokenize("Sub  \n-----"), vec![heading(2, "Sub")]);
    }

    #[test]
    fn test_paragraph_interrupted_by_blocks() {
        assert_eq!(
            tokenize("text\n# H\nmore\n> q"),
            vec![
                paragraph("text"),
                heading(1, "H"),
                paragraph("more"),
                Token::BlockQuote {
                    content: "q".to_string()
                }
            ]
        );
    }

    #[test]
    fn test_paragraph_then_list() {
        let tokens = tokenize("intro\n- item");
        assert_eq!(tokens[0], paragraph("intro"));
        assert!(matches!(tokens[1], Token::List { .. }));
    }

    #[test]
    fn test_trailing_newline_yields_empty_token() {
        assert_eq!(tokenize("a\n"), vec![paragraph("a"), Token::Empty]);
    }
}
