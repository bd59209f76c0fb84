//! Text helpers for report layout.
//!
//! - `display_width`: terminal cell width, ignoring ANSI escape sequences.
//! - `emphasize_inline_code`: turns `` `code` `` and `'code'` spans into bold text.

use owo_colors::OwoColorize;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)")
        .expect("valid ANSI escape pattern")
});

// Quotes must sit on non-word boundaries, so apostrophes inside words
// ("don't") are left alone.
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\B`(.*?)`\B|\B'(.*?)'\B").expect("valid inline code pattern")
});

/// Remove CSI (colors) and OSC (hyperlinks, titles) escape sequences.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    ANSI_RE.replace_all(s, "")
}

/// Rendered terminal width of `s`. Wide glyphs count 2, zero-width 0.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_ref())
}

/// Replace quoted inline code spans with their (bold) inner text.
pub fn emphasize_inline_code(message: &str, color: bool) -> String {
    INLINE_CODE_RE
        .replace_all(message, |caps: &Captures| {
            let inner = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            if color {
                inner.bold().to_string()
            } else {
                inner.to_string()
            }
        })
        .into_owned()
}

pub fn plural(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
