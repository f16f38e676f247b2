//! Inline emphasis, images and links.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::attr_value;

/// Emphasis patterns in application order. Triple asterisks must be resolved
/// before double and single ones can consume their delimiters.
static EMPHASIS: LazyLock<[(Regex, &'static str); 5]> = LazyLock::new(|| {
    [
        (
            r"\*\*\*(.+?)\*\*\*",
            r#"<strong><em class="font-bold italic">${1}</em></strong>"#,
        ),
        (r"\*\*(.+?)\*\*", r#"<strong class="font-bold">${1}</strong>"#),
        (r"\*(.+?)\*", r#"<em class="italic">${1}</em>"#),
        (
            r"~~(.+?)~~",
            r#"<del class="line-through text-muted-foreground">${1}</del>"#,
        ),
        (
            r"==(.+?)==",
            r#"<mark class="bg-yellow-200 dark:bg-yellow-800 px-1 rounded">${1}</mark>"#,
        ),
    ]
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
});

/// `![alt](url "caption")`
static CAPTIONED_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[([^\]]*)\]\(([^)\s]+)\s+"([^"]+)"\)"#).unwrap()
});

/// `![alt](url)`
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// `[text](url)`
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Apply bold+italic, bold, italic, strikethrough and highlight.
pub(crate) fn emphasis(html: &str) -> String {
    let mut out = html.to_owned();
    for (re, replacement) in EMPHASIS.iter() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Render captioned images as figures, then plain images with a fallback source.
pub(crate) fn images(html: &str, placeholder: &str, escape: bool) -> String {
    let html = CAPTIONED_IMAGE_RE.replace_all(html, |caps: &Captures| {
        format!(
            r#"<figure class="my-6"><img src="{}" alt="{}" class="w-full rounded-lg shadow-lg" loading="lazy" /><figcaption class="text-center text-sm text-muted-foreground mt-2">{}</figcaption></figure>"#,
            attr_value(&caps[2], escape),
            attr_value(&caps[1], escape),
            attr_value(&caps[3], escape)
        )
    });
    let placeholder = attr_value(placeholder, escape);
    let html = IMAGE_RE.replace_all(&html, |caps: &Captures| {
        format!(
            r#"<img src="{}" alt="{}" class="w-full rounded-lg my-6 shadow-lg" loading="lazy" onerror="this.src='{placeholder}'" />"#,
            attr_value(&caps[2], escape),
            attr_value(&caps[1], escape)
        )
    });

    html.into_owned()
}

/// Render links as anchors opening in a new tab.
pub(crate) fn links(html: &str, escape: bool) -> String {
    LINK_RE
        .replace_all(html, |caps: &Captures| {
            format!(
                r#"<a href="{}" class="text-primary hover:underline font-medium transition-colors" target="_blank" rel="noopener noreferrer">{}</a>"#,
                attr_value(&caps[2], escape),
                &caps[1]
            )
        })
        .into_owned()
}
