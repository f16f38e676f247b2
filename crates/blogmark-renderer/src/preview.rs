//! Plain-text previews and excerpts of a post body.
//!
//! These feed post cards and meta descriptions, where markup must not leak
//! through as literal symbols.

use std::sync::LazyLock;

use regex::Regex;

/// Default preview and excerpt length in characters.
pub const DEFAULT_PREVIEW_LENGTH: usize = 150;

const ELLIPSIS: &str = "...";

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]+`").unwrap());

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Opening and closing style or direction directive tags.
static DIRECTIVE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{/?(?:color|bg|size|font|u|rtl|ltr)(?::[^}]*)?\}").unwrap()
});

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[#*_~=]").unwrap());

static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^>\s+").unwrap());

/// Produce a plain-text preview of `markup`, at most `max_len` characters
/// plus a trailing ellipsis.
///
/// Code and images are dropped, links keep their text, and formatting
/// markers and directive tags are stripped.
///
/// # Examples
///
/// ```
/// use blogmark_renderer::markdown_preview;
///
/// assert_eq!(
///     markdown_preview("# Hi\n\nSee [the docs](https://x.y) **now**", 150),
///     "Hi\n\nSee the docs now"
/// );
/// ```
#[must_use]
pub fn markdown_preview(markup: &str, max_len: usize) -> String {
    let text = FENCE_RE.replace_all(markup, "");
    let text = INLINE_CODE_RE.replace_all(&text, "");
    let text = IMAGE_RE.replace_all(&text, "");
    let text = LINK_RE.replace_all(&text, "${1}");
    let text = DIRECTIVE_TAG_RE.replace_all(&text, "");
    let text = MARKER_RE.replace_all(&text, "");
    let text = QUOTE_RE.replace_all(&text, "");

    truncate(text.trim(), max_len)
}

/// First paragraph of `markup`, cut to `max_len` characters.
///
/// Leading blank blocks are skipped. An ellipsis is appended only when the
/// paragraph had to be shortened.
#[must_use]
pub fn excerpt(markup: &str, max_len: usize) -> String {
    let first = markup
        .split("\n\n")
        .map(str::trim)
        .find(|block| !block.is_empty())
        .unwrap_or_default();
    truncate(first, max_len)
}

fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_owned(),
    }
}
