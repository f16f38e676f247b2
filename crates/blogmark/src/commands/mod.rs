//! CLI command implementations.

pub(crate) mod catalog;
pub(crate) mod preview;
pub(crate) mod render;
pub(crate) mod stats;

pub(crate) use catalog::{LanguagesArgs, list_fonts};
pub(crate) use preview::PreviewArgs;
pub(crate) use render::RenderArgs;
pub(crate) use stats::StatsArgs;
