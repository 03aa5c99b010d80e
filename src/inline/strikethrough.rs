//! Strikethrough (`~~text~~`).

use super::emphasis::replace_delimited;
use super::marked::Marked;

pub(super) fn strikethrough(src: &Marked) -> Marked {
    replace_delimited(src, "~~", false, "s")
}
