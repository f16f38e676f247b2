//! HTML escaping helpers.

use std::borrow::Cow;

/// Escape the five HTML-significant characters (`& < > " '`).
///
/// # Examples
///
/// ```
/// use blogmark_renderer::escape_html;
///
/// assert_eq!(escape_html("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#039;y&#039;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Prepare a user-supplied value for placement inside an attribute.
///
/// Values pass through untouched unless `escape` is set, which keeps the
/// dialect's historical output while letting deployments opt into escaping.
pub(crate) fn attr_value(value: &str, escape: bool) -> Cow<'_, str> {
    if escape {
        Cow::Owned(escape_html(value))
    } else {
        Cow::Borrowed(value)
    }
}
