//! notemark: Markdown to restricted rich-text HTML for note surfaces
//!
//! Rich-text note widgets honour only a small subset of HTML: basic tags,
//! inline `style` attributes, tables and `bgcolor`. They drop most CSS
//! margins and all class-based styling. This crate renders Markdown into
//! that subset, faking vertical rhythm with break fragments and spacer
//! tables and colouring everything through inline styles.
//!
//! # Pipeline
//! 1. [`tokenize`]: split text into a flat sequence of block [`Token`]s.
//! 2. [`render`]: turn each token into a fragment, rendering inline spans
//!    with [`render_inline`] and recursing into blockquotes.
//! 3. Join fragments with breaks where neither side spaces itself.
//!
//! Colours come from a [`Style`], resolved once from optional
//! [`ThemeOverrides`] and shared read-only through the recursion.
//!
//! # Design Principles
//! - Never fails: any input yields markup
//! - Escape once: all user text is escaped before inline markup is added
//! - No regex: line predicates and byte scanning
//! - Bounded recursion: blockquote and link nesting stop at fixed depths

pub mod block;
pub mod cursor;
pub mod escape;
pub mod inline;
pub mod limits;
pub mod render;
pub mod theme;

pub use block::{tokenize, Alignment, ListItem, TaskState, Token, TokenKind};
pub use inline::render_inline;
pub use render::render;
pub use theme::{Style, ThemeError, ThemeOverrides};

/// Render note text with optional theme overrides.
///
/// Absent or empty text yields an empty string. Anything else yields at
/// least one fragment.
///
/// # Example
/// ```
/// use notemark::{render_markdown, ThemeOverrides};
///
/// let theme = ThemeOverrides {
///     link_color: Some("#FF0000".into()),
///     ..ThemeOverrides::default()
/// };
/// let html = render_markdown("[site](https://example.com)", Some(&theme));
/// assert!(html.contains("color: #FF0000;"));
///
/// assert_eq!(render_markdown(None::<&str>, None), "");
/// ```
pub fn render_markdown<'a>(
    text: impl Into<Option<&'a str>>,
    theme: Option<&ThemeOverrides>,
) -> String {
    let text = match text.into() {
        Some(text) if !text.is_empty() => text,
        _ => return String::new(),
    };

    let style = Style::resolve(theme);
    let tokens = tokenize(text);
    log::debug!("{} bytes tokenized into {} blocks", text.len(), tokens.len());
    render(&tokens, &style)
}

/// Render note text with the default theme.
///
/// # Example
/// ```
/// let html = notemark::to_html("# Hello\n\nWorld");
/// assert!(html.starts_with("<h1 "));
/// assert!(html.ends_with("World"));
/// ```
pub fn to_html(input: &str) -> String {
    render_markdown(input, None)
}

/// Render note text with theme overrides.
pub fn to_html_with_theme(input: &str, theme: &ThemeOverrides) -> String {
    render_markdown(input, Some(theme))
}


#[cfg(test)]
mod entity_tests {
    use html_escape::decode_html_entities;

    #[test]
    fn test_escaped_text_decodes_back() {
        let source = r#"Tom & "Jerry" <cat> 'mouse'"#;
        let html = crate::to_html(source);
        assert_eq!(decode_html_entities(&html).as_ref(), source);
    }
}
