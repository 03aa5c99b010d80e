//! Theme overrides and the resolved render style.
//!
//! Callers hand in a sparse [`ThemeOverrides`]; every absent key falls back
//! to a fixed default. [`Style`] is the resolved, immutable record that the
//! tokenizer/renderer recursion borrows.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Vertical break fragment used for blank lines and block spacing.
pub const BREAK_TAG: &str = r#"<div style="height: 8px;"></div>"#;

pub const DEFAULT_INLINE_CODE_BG: &str = "#ECEFF1";
pub const DEFAULT_INLINE_CODE_FG: &str = "#D81B60";
pub const DEFAULT_QUOTE_BORDER: &str = "#83B4ED";
pub const DEFAULT_QUOTE_FG: &str = "#546E7A";
pub const DEFAULT_LINK_COLOR: &str = "#1565C0";
pub const DEFAULT_TASK_DONE_FG: &str = "#9E9E9E";
pub const DEFAULT_NOTE_COLOR: &str = "#FFFFFF";

/// Per-channel factor for the quote panel background.
const QUOTE_SHADE: f64 = 0.985;

/// Errors from loading a theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse theme: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

/// Optional colour overrides, keyed the way the host application stores
/// them (`inlineCodeBg`, `noteColor`, ...). Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOverrides {
    pub inline_code_bg: Option<String>,
    pub inline_code_fg: Option<String>,
    pub quote_border: Option<String>,
    pub quote_fg: Option<String>,
    pub link_color: Option<String>,
    pub task_done_fg: Option<String>,
    pub note_color: Option<String>,
}

impl ThemeOverrides {
    /// Parse overrides from a JSON object.
    ///
    /// # Example
    /// ```
    /// use notemark::ThemeOverrides;
    ///
    /// let theme = ThemeOverrides::from_json(r##"{"linkColor": "#FF0000", "font": "x"}"##).unwrap();
    /// assert_eq!(theme.link_color.as_deref(), Some("#FF0000"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON theme file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        log::debug!("reading theme from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

/// Resolved theme threaded read-only through rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub inline_code_bg: String,
    pub inline_code_fg: String,
    pub quote_border: String,
    pub quote_fg: String,
    pub link_color: String,
    pub task_done_fg: String,
    pub note_color: String,
    /// Fragment emitted for blank lines and between blocks.
    pub break_tag: &'static str,
    /// Quote panel background, a shade darker than `note_color`.
    pub opaque_quote_bg: String,
}

impl Style {
    /// Merge overrides with the defaults and derive the quote background.
    pub fn resolve(overrides: Option<&ThemeOverrides>) -> Self {
        let empty = ThemeOverrides::default();
        let t = overrides.unwrap_or(&empty);

        let note_color = pick(&t.note_color, DEFAULT_NOTE_COLOR);
        let opaque_quote_bg = opaque_quote_color(&note_color);

        Self {
            inline_code_bg: pick(&t.inline_code_bg, DEFAULT_INLINE_CODE_BG),
            inline_code_fg: pick(&t.inline_code_fg, DEFAULT_INLINE_CODE_FG),
            quote_border: pick(&t.quote_border, DEFAULT_QUOTE_BORDER),
            quote_fg: pick(&t.quote_fg, DEFAULT_QUOTE_FG),
            link_color: pick(&t.link_color, DEFAULT_LINK_COLOR),
            task_done_fg: pick(&t.task_done_fg, DEFAULT_TASK_DONE_FG),
            note_color,
            break_tag: BREAK_TAG,
            opaque_quote_bg,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::resolve(None)
    }
}

/// Empty strings count as absent.
fn pick(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Darken a `#RRGGBB` colour by 1.5% per channel.
///
/// Strings shorter than seven characters or with non-hex channels are
/// treated as white. The result is always `#RRGGBB` in uppercase.
///
/// # Example
/// ```
/// use notemark::theme::opaque_quote_color;
///
/// assert_eq!(opaque_quote_color("#FFFFFF"), "#FBFBFB");
/// ```
pub fn opaque_quote_color(note_color: &str) -> String {
    let (r, g, b) = parse_rgb(note_color).unwrap_or_else(|| {
        log::warn!("note colour {note_color:?} is not #RRGGBB, shading from white");
        (255, 255, 255)
    });
    format!("#{:02X}{:02X}{:02X}", shade(r), shade(g), shade(b))
}

fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    if color.len() < 7 {
        return None;
    }
    let channel = |start: usize| {
        let hex = color.get(start..start + 2)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u8::from_str_radix(hex, 16).ok()
    };
    Some((channel(1)?, channel(3)?, channel(5)?))
}

#[inline]
fn shade(channel: u8) -> u8 {
    (f64::from(channel) * QUOTE_SHADE).floor().max(0.0) as u8
}
