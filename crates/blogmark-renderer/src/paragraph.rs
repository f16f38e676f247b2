//! Paragraph wrapping.

use crate::list::contains_placeholder;

/// Phrasing elements. A block that opens with one of these is still text and
/// gets a paragraph; any other leading tag is treated as block HTML.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "br", "cite", "code", "del", "em", "i", "ins", "kbd", "mark", "q", "s",
    "small", "span", "strong", "sub", "sup", "u",
];

/// Wrap blank-line separated blocks of text in `<p>`.
pub(crate) fn paragraphs(html: &str) -> String {
    html.split("\n\n")
        .map(|block| {
            let block = block.trim();
            if block.is_empty() || starts_with_block_tag(block) || contains_placeholder(block) {
                block.to_owned()
            } else {
                format!(r#"<p class="mb-4 leading-relaxed text-foreground">{block}</p>"#)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether `block` already opens with block-level HTML.
fn starts_with_block_tag(block: &str) -> bool {
    let Some(rest) = block.strip_prefix('<') else {
        return false;
    };
    let name_len = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    let name = rest[..name_len].to_ascii_lowercase();
    !INLINE_TAGS.contains(&name.as_str())
}
