//! Inline style directives and direction blocks.
//!
//! Directives are paired tags of the form `{name:value}…{/name}`. Style
//! directives stay on one line; direction blocks may span several.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::catalog::TextDirection;
use crate::escape::attr_value;

static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{color:([^}]+)\}(.*?)\{/color\}").unwrap());

static BG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{bg:([^}]+)\}(.*?)\{/bg\}").unwrap());

/// Font size only accepts a pixel count.
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{size:([0-9]+)\}(.*?)\{/size\}").unwrap());

static FONT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{font:([^}]+)\}(.*?)\{/font\}").unwrap());

static UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{u\}(.*?)\{/u\}").unwrap());

static RTL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{rtl\}(.*?)\{/rtl\}").unwrap());

static LTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{ltr\}(.*?)\{/ltr\}").unwrap());

/// Replace color, background, size, font and underline directives.
pub(crate) fn style_directives(html: &str, escape: bool) -> String {
    let html = COLOR_RE.replace_all(html, |caps: &Captures| {
        format!(
            r#"<span style="color: {}">{}</span>"#,
            attr_value(&caps[1], escape),
            &caps[2]
        )
    });
    let html = BG_RE.replace_all(&html, |caps: &Captures| {
        format!(
            r#"<span style="background-color: {}; padding: 2px 4px; border-radius: 2px">{}</span>"#,
            attr_value(&caps[1], escape),
            &caps[2]
        )
    });
    let html = SIZE_RE.replace_all(&html, |caps: &Captures| {
        format!(
            r#"<span style="font-size: {}px">{}</span>"#,
            &caps[1], &caps[2]
        )
    });
    let html = FONT_RE.replace_all(&html, |caps: &Captures| {
        format!(
            r#"<span style="font-family: {}">{}</span>"#,
            attr_value(&caps[1], escape),
            &caps[2]
        )
    });
    let html = UNDERLINE_RE.replace_all(&html, r#"<u class="decoration-2">${1}</u>"#);

    html.into_owned()
}

/// Wrap `{rtl}` and `{ltr}` blocks in a `div` carrying an explicit direction.
pub(crate) fn direction_blocks(html: &str) -> String {
    let html = RTL_RE.replace_all(html, |caps: &Captures| {
        direction_div(TextDirection::Rtl, &caps[1])
    });
    let html = LTR_RE.replace_all(&html, |caps: &Captures| {
        direction_div(TextDirection::Ltr, &caps[1])
    });

    html.into_owned()
}

/// Render a `div` with `dir` and matching alignment around `content`.
pub(crate) fn direction_div(direction: TextDirection, content: &str) -> String {
    format!(
        r#"<div dir="{}" class="{}">{content}</div>"#,
        direction.as_str(),
        direction.align_class()
    )
}
