//! Block-level token types.

use smallvec::SmallVec;

/// Cells of one table row, in column order.
pub type Cells = SmallVec<[String; 8]>;

/// Column alignment for table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left-aligned (`:---` or plain `---`).
    #[default]
    Left,
    /// Center-aligned (`:---:`).
    Center,
    /// Right-aligned (`---:`).
    Right,
}

impl Alignment {
    /// Value for the HTML `align` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Task list item state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskState {
    /// Not a task item.
    #[default]
    None,
    /// Unchecked task `[ ]`.
    Unchecked,
    /// Checked task `[x]` or `[X]`.
    Checked,
}

/// One line of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Raw leading whitespace (spaces and tabs).
    pub indent: String,
    /// `-`, `*`, or digits followed by `.`.
    pub bullet: String,
    /// Item text with the task marker removed.
    pub text: String,
    /// Task marker, if any.
    pub task: TaskState,
}

impl ListItem {
    /// Whether the item carries a task marker.
    #[inline]
    pub fn is_task(&self) -> bool {
        self.task != TaskState::None
    }

    /// Whether the item is a checked task.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.task == TaskState::Checked
    }

    /// Whether the bullet is an ordered `N.` marker.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.bullet.bytes().any(|b| b.is_ascii_digit())
    }

    /// Indent width in columns, with tabs counted as four.
    pub fn indent_width(&self) -> usize {
        self.indent
            .bytes()
            .map(|b| if b == b'\t' { 4 } else { 1 })
            .sum()
    }
}

/// Discriminant of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Empty,
    ThematicBreak,
    Heading,
    CodeBlock,
    BlockQuote,
    List,
    Table,
    Paragraph,
}

/// Tokens produced by the block tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A blank line.
    Empty,

    /// A thematic break (horizontal rule).
    ThematicBreak,

    /// An ATX or setext heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Trimmed heading text, inline markup not yet applied.
        content: String,
    },

    /// A fenced or indented code block.
    CodeBlock {
        /// Language tag from the opening fence; empty when absent.
        lang: String,
        /// Raw code, newline-joined.
        content: String,
    },

    /// A blockquote. Its content is tokenized again at render time.
    BlockQuote {
        /// Inner markdown with one `>` marker stripped per line.
        content: String,
    },

    /// A run of consecutive list lines.
    List {
        /// Items in source order.
        items: Vec<ListItem>,
    },

    /// A pipe table.
    Table {
        /// Header cells.
        headers: Cells,
        /// Alignment per separator column.
        aligns: Vec<Alignment>,
        /// Body rows; a row may have fewer cells than `headers`.
        rows: Vec<Cells>,
    },

    /// A run of plain text lines.
    Paragraph {
        /// Newline-joined lines.
        content: String,
    },
}

impl Token {
    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Empty => TokenKind::Empty,
            Self::ThematicBreak => TokenKind::ThematicBreak,
            Self::Heading { .. } => TokenKind::Heading,
            Self::CodeBlock { .. } => TokenKind::CodeBlock,
            Self::BlockQuote { .. } => TokenKind::BlockQuote,
            Self::List { .. } => TokenKind::List,
            Self::Table { .. } => TokenKind::Table,
            Self::Paragraph { .. } => TokenKind::Paragraph,
        }
    }
}
