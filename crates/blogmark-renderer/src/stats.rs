//! Word count and reading-time estimate.

use std::fmt;

/// Average adult reading speed used by the editor.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Length of a post body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadingStats {
    /// Whitespace-separated words.
    pub words: usize,
    /// Estimated reading time, never less than one minute.
    pub minutes: u32,
}

impl fmt::Display for ReadingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

/// Count whitespace-separated words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate the reading time of `text` at `words_per_minute`.
///
/// # Examples
///
/// ```
/// use blogmark_renderer::reading_stats;
///
/// let stats = reading_stats(&"word ".repeat(450), 200);
/// assert_eq!(stats.words, 450);
/// assert_eq!(stats.to_string(), "3 min read");
/// ```
#[must_use]
pub fn reading_stats(text: &str, words_per_minute: u32) -> ReadingStats {
    let words = word_count(text);
    let per_minute = usize::try_from(words_per_minute.max(1)).unwrap_or(usize::MAX);
    let minutes = u32::try_from(words.div_ceil(per_minute))
        .unwrap_or(u32::MAX)
        .max(1);
    ReadingStats { words, minutes }
}
