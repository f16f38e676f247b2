//! Staged markup renderer.

use crate::block;
use crate::catalog::TextDirection;
use crate::code::{self, CodeStash};
use crate::directive;
use crate::inline;
use crate::list;
use crate::paragraph;
use crate::table;

/// Fallback image shown when a captionless image fails to load.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// One find-and-replace pass of the rendering pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// `{color:…}`, `{bg:…}`, `{size:…}`, `{font:…}` and `{u}` directives.
    StyleDirectives,
    /// `{rtl}` and `{ltr}` blocks.
    DirectionBlocks,
    /// Triple-backtick fenced code.
    FencedCode,
    /// Single-backtick code spans.
    InlineCode,
    /// `> ` lines.
    Blockquotes,
    /// `#` to `#####` lines.
    Headings,
    /// `---` and `***` lines. Only runs when enabled.
    HorizontalRules,
    /// Bold, italic, strikethrough and highlight.
    Emphasis,
    /// `:center:`, `:right:`, `:left:` and `:justify:` lines.
    Alignment,
    /// Captioned and plain images.
    Images,
    /// Bracket-paren links.
    Links,
    /// `N. item` runs.
    OrderedLists,
    /// `- item`, `* item` and task item runs.
    UnorderedLists,
    /// Pipe tables.
    Tables,
    /// Blank-line separated paragraphs.
    Paragraphs,
    /// Strip leftover placeholders and restore stashed code blocks.
    Cleanup,
}

impl Stage {
    /// Every stage in application order.
    pub const PIPELINE: [Self; 16] = [
        Self::StyleDirectives,
        Self::DirectionBlocks,
        Self::FencedCode,
        Self::InlineCode,
        Self::Blockquotes,
        Self::Headings,
        Self::HorizontalRules,
        Self::Emphasis,
        Self::Alignment,
        Self::Images,
        Self::Links,
        Self::OrderedLists,
        Self::UnorderedLists,
        Self::Tables,
        Self::Paragraphs,
        Self::Cleanup,
    ];

    /// Short name used in logs and diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::StyleDirectives => "style-directives",
            Self::DirectionBlocks => "direction-blocks",
            Self::FencedCode => "fenced-code",
            Self::InlineCode => "inline-code",
            Self::Blockquotes => "blockquotes",
            Self::Headings => "headings",
            Self::HorizontalRules => "horizontal-rules",
            Self::Emphasis => "emphasis",
            Self::Alignment => "alignment",
            Self::Images => "images",
            Self::Links => "links",
            Self::OrderedLists => "ordered-lists",
            Self::UnorderedLists => "unordered-lists",
            Self::Tables => "tables",
            Self::Paragraphs => "paragraphs",
            Self::Cleanup => "cleanup",
        }
    }
}

/// Renderer for the blogmark markup dialect.
///
/// The renderer holds configuration only; every call to
/// [`render`](Self::render) works on its own buffers, so one renderer can be
/// shared freely between threads.
#[derive(Clone, Debug)]
pub struct MarkupRenderer {
    placeholder_image: String,
    horizontal_rules: bool,
    escape_attributes: bool,
    direction: TextDirection,
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupRenderer {
    /// Create a renderer with the dialect's default behavior.
    #[must_use]
    pub fn new() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_owned(),
            horizontal_rules: false,
            escape_attributes: false,
            direction: TextDirection::Ltr,
        }
    }

    /// Set the image shown when a captionless image fails to load.
    #[must_use]
    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }

    /// Render lines consisting solely of `---` or `***` as `<hr>`.
    #[must_use]
    pub fn with_horizontal_rules(mut self, enabled: bool) -> Self {
        self.horizontal_rules = enabled;
        self
    }

    /// HTML-escape directive values, URLs, alt text and captions before they
    /// are written into attributes.
    ///
    /// Disabled by default: values are copied verbatim, which lets authors
    /// inject arbitrary attributes. Enable this for untrusted input.
    #[must_use]
    pub fn with_attribute_escaping(mut self, enabled: bool) -> Self {
        self.escape_attributes = enabled;
        self
    }

    /// Set the base writing direction. Right-to-left output is wrapped in a
    /// `dir="rtl"` container.
    #[must_use]
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Whether `stage` runs with the current configuration.
    #[must_use]
    pub fn is_enabled(&self, stage: Stage) -> bool {
        stage != Stage::HorizontalRules || self.horizontal_rules
    }

    /// Render `markup` to an HTML fragment.
    ///
    /// Never fails: syntax that does not match any stage is left as literal
    /// text. Empty input yields an empty string.
    #[must_use]
    pub fn render(&self, markup: &str) -> String {
        if markup.is_empty() {
            return String::new();
        }

        let mut stash = CodeStash::default();
        let mut html = markup.replace("\r\n", "\n");
        for stage in Stage::PIPELINE {
            if self.is_enabled(stage) {
                html = self.apply(stage, &html, &mut stash);
            }
        }

        match self.direction {
            TextDirection::Rtl if !html.is_empty() => {
                directive::direction_div(TextDirection::Rtl, &html)
            }
            _ => html,
        }
    }

    fn apply(&self, stage: Stage, html: &str, stash: &mut CodeStash) -> String {
        let escape = self.escape_attributes;
        match stage {
            Stage::StyleDirectives => directive::style_directives(html, escape),
            Stage::DirectionBlocks => directive::direction_blocks(html),
            Stage::FencedCode => code::fenced_code(html, stash),
            Stage::InlineCode => code::inline_code(html),
            Stage::Blockquotes => block::blockquotes(html),
            Stage::Headings => block::headings(html),
            Stage::HorizontalRules => block::horizontal_rules(html),
            Stage::Emphasis => inline::emphasis(html),
            Stage::Alignment => block::alignment(html),
            Stage::Images => inline::images(html, &self.placeholder_image, escape),
            Stage::Links => inline::links(html, escape),
            Stage::OrderedLists => list::ordered_lists(html),
            Stage::UnorderedLists => list::unordered_lists(html),
            Stage::Tables => table::tables(html),
            Stage::Paragraphs => paragraph::paragraphs(html),
            Stage::Cleanup => stash.restore(&list::strip_placeholders(html)),
        }
    }
}

/// Render `markup` with the default renderer.
///
/// # Examples
///
/// ```
/// use blogmark_renderer::markup_to_html;
///
/// assert_eq!(markup_to_html(""), "");
/// assert_eq!(
///     markup_to_html("# Title"),
///     r#"<h1 class="text-4xl font-bold mt-8 mb-4">Title</h1>"#
/// );
/// ```
#[must_use]
pub fn markup_to_html(markup: &str) -> String {
    MarkupRenderer::new().render(markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const P: &str = r#"<p class="mb-4 leading-relaxed text-foreground">"#;

    #[test]
    fn test_empty_input() {
        assert_eq!(markup_to_html(""), "");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(markup_to_html("  \n\n  "), "\n");
    }

    #[test]
    fn test_plain_text_is_paragraph() {
        assert_eq!(markup_to_html("Just words."), format!("{P}Just words.</p>"));
    }

    #[test]
    fn test_plain_text_renders_identically_twice() {
        let input = "Stars are far away.\n\nGalaxies are farther.";
        assert_eq!(markup_to_html(input), markup_to_html(input));
    }

    #[test]
    fn test_bold_wrapped_in_paragraph() {
        assert_eq!(
            markup_to_html("**bold**"),
            format!(r#"{P}<strong class="font-bold">bold</strong></p>"#)
        );
    }

    #[test]
    fn test_heading_not_wrapped() {
        assert_eq!(
            markup_to_html("# Title"),
            r#"<h1 class="text-4xl font-bold mt-8 mb-4">Title</h1>"#
        );
    }

    #[test]
    fn test_unordered_list_single_group() {
        let html = markup_to_html("- a\n- b");
        assert_eq!(html.matches("<ul").count(), 1);
        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.find(">a</li>").unwrap() < html.find(">b</li>").unwrap());
        assert!(!html.contains("LIST_ITEM"));
    }

    #[test]
    fn test_ordered_list_single_group() {
        assert_eq!(
            markup_to_html("1. one\n2. two"),
            r#"<ol class="list-decimal my-4 space-y-1"><li class="ml-6 mb-2">one</li><li class="ml-6 mb-2">two</li></ol>"#
        );
    }

    #[test]
    fn test_fenced_code_escaped() {
        let html = markup_to_html("```js\n<b>x</b>\n```");
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
        assert!(html.starts_with("<pre "));
    }

    #[test]
    fn test_fenced_code_not_reinterpreted() {
        let html = markup_to_html("```md\n# not a heading\n- not a list\n\n**not bold**\n```");
        assert!(!html.contains("<h1"));
        assert!(!html.contains("<ul"));
        assert!(!html.contains("<strong"));
        assert!(!html.contains("<p "));
        assert!(html.contains("# not a heading\n- not a list\n\n**not bold**"));
    }

    #[test]
    fn test_task_list() {
        let html = markup_to_html("- [x] done\n- [ ] todo");
        assert_eq!(html.matches("<li").count(), 2);
        let done = html.find("done").unwrap();
        let todo = html.find("todo").unwrap();
        assert!(done < todo);
        assert!(html[..done].contains(r#"<input type="checkbox" checked disabled"#));
        assert!(html[..done].contains("line-through"));
        assert!(html[done..].contains(r#"<input type="checkbox" disabled"#));
    }

    #[test]
    fn test_table_cell_counts() {
        let html = markup_to_html("| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |");
        assert_eq!(html.matches("<table").count(), 1);
        assert_eq!(html.matches("<th ").count(), 2);
        assert_eq!(html.matches("<td ").count(), 4);
        assert!(!html.contains("<p "));
    }

    #[test]
    fn test_lists_separated_by_paragraph_stay_distinct() {
        let html = markup_to_html("- a\n\nMiddle text\n\n- b");
        assert_eq!(html.matches("<ul").count(), 2);
        let middle = html.find("Middle").unwrap();
        assert!(html[..middle].contains(">a</li>"));
        assert!(!html[..middle].contains(">b</li>"));
        assert!(html[middle..].contains(">b</li>"));
        assert!(!html[middle..].contains(">a</li>"));
    }

    #[test]
    fn test_directive_value_unescaped_by_default() {
        let html = markup_to_html(r#"{font:x" onmouseover="alert(1)}t{/font}"#);
        assert!(html.contains(r#"style="font-family: x" onmouseover="alert(1)""#));
    }

    #[test]
    fn test_attribute_escaping_option() {
        let html = MarkupRenderer::new()
            .with_attribute_escaping(true)
            .render(r#"{font:x" onmouseover="alert(1)}t{/font}"#);
        assert!(html.contains("font-family: x&quot; onmouseover=&quot;alert(1)"));
    }

    #[test]
    fn test_horizontal_rules_opt_in() {
        assert!(!markup_to_html("a\n\n---\n\nb").contains("<hr"));
        let html = MarkupRenderer::new()
            .with_horizontal_rules(true)
            .render("a\n\n---\n\nb");
        assert!(html.contains(r#"<hr class="my-8 border-border" />"#));
    }

    #[test]
    fn test_triple_asterisk_line_without_rules_is_italic() {
        assert_eq!(
            markup_to_html("***"),
            format!(r#"{P}<em class="italic">*</em></p>"#)
        );
    }

    #[test]
    fn test_rtl_direction_wraps_fragment() {
        let html = MarkupRenderer::new()
            .with_direction(TextDirection::Rtl)
            .render("مرحبا");
        assert_eq!(
            html,
            format!(r#"<div dir="rtl" class="text-right">{P}مرحبا</p></div>"#)
        );
        assert_eq!(
            MarkupRenderer::new()
                .with_direction(TextDirection::Rtl)
                .render(""),
            ""
        );
    }

    #[test]
    fn test_custom_placeholder_image() {
        let html = MarkupRenderer::new()
            .with_placeholder_image("/missing.png")
            .render("![x](a.png)");
        assert!(html.contains("this.src='/missing.png'"));
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(
            markup_to_html("# Title\r\n\r\nBody"),
            format!("<h1 class=\"text-4xl font-bold mt-8 mb-4\">Title</h1>\n{P}Body</p>")
        );
    }

    #[test]
    fn test_mixed_document() {
        let input = "## Intro\n\n\
                     {color:red}Warm{/color} words with a [link](https://a.b).\n\n\
                     > quoted\n\n\
                     1. first\n2. second";
        let html = markup_to_html(input);
        assert!(html.starts_with(r#"<h2 class="text-3xl font-bold mt-8 mb-4">Intro</h2>"#));
        assert!(html.contains(&format!(
            r#"{P}<span style="color: red">Warm</span> words with a <a href="https://a.b""#
        )));
        assert!(html.contains(">quoted</blockquote>"));
        assert!(html.ends_with("</li></ol>"));
    }

    #[test]
    fn test_emphasis_inside_style_directive() {
        assert_eq!(
            markup_to_html("{color:red}**hot**{/color}"),
            format!(r#"{P}<span style="color: red"><strong class="font-bold">hot</strong></span></p>"#)
        );
    }

    #[test]
    fn test_unknown_syntax_left_literal() {
        assert_eq!(
            markup_to_html("{blink}old{/blink}"),
            format!("{P}{{blink}}old{{/blink}}</p>")
        );
    }

    #[test]
    fn test_pipeline_order() {
        let names: Vec<&str> = Stage::PIPELINE.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "style-directives",
                "direction-blocks",
                "fenced-code",
                "inline-code",
                "blockquotes",
                "headings",
                "horizontal-rules",
                "emphasis",
                "alignment",
                "images",
                "links",
                "ordered-lists",
                "unordered-lists",
                "tables",
                "paragraphs",
                "cleanup",
            ]
        );
    }

    #[test]
    fn test_horizontal_rules_stage_disabled_by_default() {
        let renderer = MarkupRenderer::new();
        assert!(!renderer.is_enabled(Stage::HorizontalRules));
        assert!(renderer.is_enabled(Stage::Emphasis));
        assert!(
            MarkupRenderer::new()
                .with_horizontal_rules(true)
                .is_enabled(Stage::HorizontalRules)
        );
    }
}
