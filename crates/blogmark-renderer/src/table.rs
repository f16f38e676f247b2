//! Pipe tables.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Header row, separator row of dashes/colons/pipes, then one or more body rows.
static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|(.+)\|\n\|[\s\-:|]+\|\n((?:\|.+\|\n?)+)").unwrap()
});

/// Render pipe tables with a `thead` and `tbody`.
pub(crate) fn tables(html: &str) -> String {
    TABLE_RE
        .replace_all(html, |caps: &Captures| {
            let headers = split_row(&caps[1]);
            let rows: Vec<Vec<&str>> = caps[2].trim().lines().map(split_row).collect();
            render_table(&headers, &rows)
        })
        .into_owned()
}

/// Split a row into trimmed cells. Empty cells produced by the outer
/// delimiter pipes are dropped; empty cells between pipes are kept.
fn split_row(row: &str) -> Vec<&str> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(str::trim).collect()
}

fn render_table(headers: &[&str], rows: &[Vec<&str>]) -> String {
    let mut out = String::from(
        r#"<div class="overflow-x-auto my-6"><table class="w-full border-collapse border border-border rounded-lg"><thead class="bg-muted"><tr>"#,
    );
    for header in headers {
        out.push_str(r#"<th class="border border-border px-4 py-2 text-left font-semibold">"#);
        out.push_str(header);
        out.push_str("</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str(r#"<tr class="border-b border-border hover:bg-muted/50">"#);
        for cell in row {
            out.push_str(r#"<td class="border border-border px-4 py-2">"#);
            out.push_str(cell);
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
    out
}
