//! Ordered, unordered and task lists.
//!
//! Matching lines are collected as rendered `li` items and replaced by a
//! placeholder token. Each contiguous run of placeholders is then collapsed
//! into one list element holding exactly the items of that run, so lists
//! separated by other content stay separate.

use std::sync::LazyLock;

use regex::{Captures, Regex};

pub(crate) const ORDERED_PLACEHOLDER: &str = "||ORDERED_LIST_ITEM||";
pub(crate) const UNORDERED_PLACEHOLDER: &str = "||UNORDERED_LIST_ITEM||";

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([0-9]+)\.\s+(.+)$").unwrap());

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[-*]\s+(.+)$").unwrap());

static TASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([x ])\]\s+(.+)$").unwrap());

static ORDERED_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\|\|ORDERED_LIST_ITEM\|\|\n?)+").unwrap());

static UNORDERED_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\|\|UNORDERED_LIST_ITEM\|\|\n?)+").unwrap());

/// Collapse `N. item` lines into `<ol>` groups.
pub(crate) fn ordered_lists(html: &str) -> String {
    let mut items = Vec::new();
    let html = ORDERED_ITEM_RE.replace_all(html, |caps: &Captures| {
        items.push(format!(r#"<li class="ml-6 mb-2">{}</li>"#, &caps[2]));
        ORDERED_PLACEHOLDER
    });

    collapse_runs(
        &html,
        &ORDERED_RUN_RE,
        ORDERED_PLACEHOLDER,
        items,
        r#"<ol class="list-decimal my-4 space-y-1">"#,
        "</ol>",
    )
}

/// Collapse `- item` and `* item` lines, including task items, into `<ul>` groups.
pub(crate) fn unordered_lists(html: &str) -> String {
    let mut items = Vec::new();
    let html = UNORDERED_ITEM_RE.replace_all(html, |caps: &Captures| {
        items.push(unordered_item(&caps[1]));
        UNORDERED_PLACEHOLDER
    });

    collapse_runs(
        &html,
        &UNORDERED_RUN_RE,
        UNORDERED_PLACEHOLDER,
        items,
        r#"<ul class="my-4 space-y-1">"#,
        "</ul>",
    )
}

fn unordered_item(content: &str) -> String {
    let Some(task) = TASK_RE.captures(content) else {
        return format!(r#"<li class="ml-6 mb-2 list-disc">{content}</li>"#);
    };

    let (checked, span_class) = if &task[1] == "x" {
        (" checked", r#" class="line-through text-muted-foreground""#)
    } else {
        ("", "")
    };
    format!(
        r#"<li class="ml-6 mb-2 flex items-start gap-2"><input type="checkbox"{checked} disabled class="mt-1" /><span{span_class}>{}</span></li>"#,
        &task[2]
    )
}

/// Replace each run of `placeholder` tokens with a list holding the next
/// items in document order.
fn collapse_runs(
    html: &str,
    run_re: &Regex,
    placeholder: &str,
    items: Vec<String>,
    open: &str,
    close: &str,
) -> String {
    if items.is_empty() {
        return html.to_owned();
    }

    let mut items = items.into_iter();
    run_re
        .replace_all(html, |caps: &Captures| {
            let count = caps[0].matches(placeholder).count();
            let mut list = String::from(open);
            for item in items.by_ref().take(count) {
                list.push_str(&item);
            }
            list.push_str(close);
            list
        })
        .into_owned()
}

/// Whether `text` still carries a list placeholder token.
pub(crate) fn contains_placeholder(text: &str) -> bool {
    text.contains(ORDERED_PLACEHOLDER) || text.contains(UNORDERED_PLACEHOLDER)
}

/// Remove any placeholder tokens that were not collapsed into a list.
pub(crate) fn strip_placeholders(html: &str) -> String {
    html.replace(ORDERED_PLACEHOLDER, "")
        .replace(UNORDERED_PLACEHOLDER, "")
}
