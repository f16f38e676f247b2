//! Line-level blocks: blockquotes, headings, rules and alignment.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^> (.+)$").unwrap());

/// One to five hashes, then a space. The prefix length picks the level, so
/// a longer prefix is never read as a shorter heading.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,5}) (.*)$").unwrap());

static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:---|\*\*\*)$").unwrap());

/// Alignment markers, applied one after another in this order.
static ALIGNMENTS: LazyLock<[(Regex, &'static str); 4]> = LazyLock::new(|| {
    ["center", "right", "left", "justify"]
        .map(|name| (Regex::new(&format!(r"(?mi)^:{name}:\s*(.+)$")).unwrap(), name))
});

/// Heading classes indexed by level - 1.
const HEADING_CLASSES: [&str; 5] = [
    "text-4xl font-bold mt-8 mb-4",
    "text-3xl font-bold mt-8 mb-4",
    "text-2xl font-bold mt-6 mb-3",
    "text-xl font-bold mt-5 mb-2",
    "text-lg font-bold mt-4 mb-2",
];

/// Turn each `> ` line into its own blockquote.
pub(crate) fn blockquotes(html: &str) -> String {
    BLOCKQUOTE_RE
        .replace_all(
            html,
            r#"<blockquote class="border-l-4 border-primary pl-4 py-2 my-4 italic text-muted-foreground">${1}</blockquote>"#,
        )
        .into_owned()
}

/// Turn `#` to `#####` lines into `h1` to `h5`.
pub(crate) fn headings(html: &str) -> String {
    HEADING_RE
        .replace_all(html, |caps: &Captures| {
            let level = caps[1].len();
            format!(
                r#"<h{level} class="{}">{}</h{level}>"#,
                HEADING_CLASSES[level - 1],
                &caps[2]
            )
        })
        .into_owned()
}

/// Turn lines consisting solely of `---` or `***` into horizontal rules.
pub(crate) fn horizontal_rules(html: &str) -> String {
    RULE_RE
        .replace_all(html, r#"<hr class="my-8 border-border" />"#)
        .into_owned()
}

/// Turn `:center:`, `:right:`, `:left:` and `:justify:` lines into aligned `div`s.
pub(crate) fn alignment(html: &str) -> String {
    let mut out = html.to_owned();
    for (re, name) in ALIGNMENTS.iter() {
        out = re
            .replace_all(&out, |caps: &Captures| {
                format!(r#"<div class="text-{name}">{}</div>"#, &caps[1])
            })
            .into_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blockquote_per_line() {
        assert_eq!(
            blockquotes("> one\n> two"),
            "<blockquote class=\"border-l-4 border-primary pl-4 py-2 my-4 italic text-muted-foreground\">one</blockquote>\n\
             <blockquote class=\"border-l-4 border-primary pl-4 py-2 my-4 italic text-muted-foreground\">two</blockquote>"
        );
    }

    #[test]
    fn test_blockquote_requires_space() {
        assert_eq!(blockquotes(">no space"), ">no space");
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            headings("# Title"),
            r#"<h1 class="text-4xl font-bold mt-8 mb-4">Title</h1>"#
        );
        assert_eq!(
            headings("## Sub"),
            r#"<h2 class="text-3xl font-bold mt-8 mb-4">Sub</h2>"#
        );
        assert_eq!(
            headings("### Three"),
            r#"<h3 class="text-2xl font-bold mt-6 mb-3">Three</h3>"#
        );
        assert_eq!(
            headings("#### Four"),
            r#"<h4 class="text-xl font-bold mt-5 mb-2">Four</h4>"#
        );
        assert_eq!(
            headings("##### Five"),
            r#"<h5 class="text-lg font-bold mt-4 mb-2">Five</h5>"#
        );
    }

    #[test]
    fn test_six_hashes_stay_literal() {
        assert_eq!(headings("###### Six"), "###### Six");
    }

    #[test]
    fn test_heading_needs_space() {
        assert_eq!(headings("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_heading_only_at_line_start() {
        assert_eq!(
            headings("intro\n## Next\nnot # this"),
            "intro\n<h2 class=\"text-3xl font-bold mt-8 mb-4\">Next</h2>\nnot # this"
        );
    }

    #[test]
    fn test_horizontal_rules() {
        assert_eq!(
            horizontal_rules("a\n---\nb\n***"),
            "a\n<hr class=\"my-8 border-border\" />\nb\n<hr class=\"my-8 border-border\" />"
        );
        assert_eq!(horizontal_rules("----"), "----");
    }

    #[test]
    fn test_alignment() {
        assert_eq!(
            alignment(":center: Middle"),
            r#"<div class="text-center">Middle</div>"#
        );
        assert_eq!(
            alignment(":justify:Block"),
            r#"<div class="text-justify">Block</div>"#
        );
    }

    #[test]
    fn test_alignment_case_insensitive() {
        assert_eq!(
            alignment(":RIGHT: East"),
            r#"<div class="text-right">East</div>"#
        );
    }

    #[test]
    fn test_alignment_consumes_one_line() {
        assert_eq!(
            alignment(":left: one\ntwo"),
            "<div class=\"text-left\">one</div>\ntwo"
        );
    }
}
