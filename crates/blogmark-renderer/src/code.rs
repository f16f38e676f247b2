//! Fenced code blocks and inline code spans.
//!
//! Fenced blocks are rendered to their final HTML immediately and replaced by
//! a stash token. The token is restored during cleanup, so no later stage can
//! rewrite code that is meant to be shown verbatim.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_html;

/// Opening fence with optional language tag, then everything up to the next fence.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```([A-Za-z0-9_]+)?\n(.*?)```").unwrap());

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Language class used when the opening fence has no tag.
const DEFAULT_LANGUAGE: &str = "text";

/// Stash token delimiter. Starts with `<` so paragraph wrapping treats the
/// token as block HTML, and contains a control character authors cannot type.
const STASH_OPEN: &str = "<\u{1a}code-block-";
const STASH_CLOSE: &str = "\u{1a}>";

/// Rendered code blocks held back from the rest of the pipeline.
#[derive(Debug, Default)]
pub(crate) struct CodeStash {
    blocks: Vec<String>,
}

impl CodeStash {
    fn push(&mut self, html: String) -> String {
        let token = Self::token(self.blocks.len());
        self.blocks.push(html);
        token
    }

    fn token(index: usize) -> String {
        format!("{STASH_OPEN}{index}{STASH_CLOSE}")
    }

    /// Put every stashed block back in place of its token.
    pub(crate) fn restore(&self, html: &str) -> String {
        if self.blocks.is_empty() {
            return html.to_owned();
        }
        let mut out = html.to_owned();
        for (index, block) in self.blocks.iter().enumerate() {
            out = out.replace(&Self::token(index), block);
        }
        out
    }
}

/// Render fenced code blocks, stashing the result.
pub(crate) fn fenced_code(html: &str, stash: &mut CodeStash) -> String {
    FENCE_RE
        .replace_all(html, |caps: &Captures| {
            let lang = caps.get(1).map_or(DEFAULT_LANGUAGE, |m| m.as_str());
            stash.push(code_block(lang, caps[2].trim()))
        })
        .into_owned()
}

fn code_block(lang: &str, code: &str) -> String {
    format!(
        r#"<pre class="bg-muted rounded-lg p-4 my-6 overflow-x-auto"><code class="language-{lang} text-sm">{}</code></pre>"#,
        escape_html(code)
    )
}

/// Render single-backtick spans as inline `code`.
pub(crate) fn inline_code(html: &str) -> String {
    INLINE_CODE_RE
        .replace_all(
            html,
            r#"<code class="bg-muted px-2 py-1 rounded text-sm font-mono text-primary">${1}</code>"#,
        )
        .into_owned()
}
