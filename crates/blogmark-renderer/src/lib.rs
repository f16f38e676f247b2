//! Renderer for the blogmark markup dialect.
//!
//! This crate converts author-written markup into an HTML fragment ready to
//! be injected into a page. The dialect is a superset of common lightweight
//! markup conventions plus inline style directives (`{color:red}…{/color}`)
//! and bidirectional text blocks (`{rtl}…{/rtl}`).
//!
//! # Architecture
//!
//! Rendering is a fixed sequence of [`Stage`]s, each a global find-and-replace
//! over the whole document. Later stages see the output of earlier ones, so
//! the order in [`Stage::PIPELINE`] is part of the contract:
//!
//! - Style directives and direction blocks
//! - Fenced code (rendered once, then stashed away from later stages) and inline code
//! - Line-level blocks: blockquotes, headings, optional rules
//! - Inline emphasis, alignment blocks, images, links
//! - Lists, aggregated through placeholder tokens
//! - Tables, paragraphs, and a final cleanup
//!
//! Alongside the renderer, [`preview`] produces plain-text previews and
//! excerpts, [`stats`] estimates reading time, and [`catalog`] lists the
//! fonts and languages the editor offers.
//!
//! # Example
//!
//! ```
//! use blogmark_renderer::{MarkupRenderer, markup_to_html};
//!
//! let html = markup_to_html("# Hello\n\n**Bold** text");
//! assert!(html.starts_with("<h1"));
//!
//! let html = MarkupRenderer::new()
//!     .with_attribute_escaping(true)
//!     .render("{color:red}warm{/color}");
//! assert!(html.contains(r#"<span style="color: red">warm</span>"#));
//! ```

mod block;
pub mod catalog;
mod code;
mod directive;
mod escape;
mod inline;
mod list;
mod paragraph;
pub mod preview;
mod renderer;
pub mod stats;
mod table;

pub use catalog::{BLOG_FONTS, BlogFont, Language, SUPPORTED_LANGUAGES, TextDirection};
pub use escape::escape_html;
pub use preview::{excerpt, markdown_preview};
pub use renderer::{DEFAULT_PLACEHOLDER_IMAGE, MarkupRenderer, Stage, markup_to_html};
pub use stats::{ReadingStats, reading_stats, word_count};
