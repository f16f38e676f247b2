//! `blogmark render` command implementation.

use std::path::PathBuf;
use std::time::Instant;

use blogmark_config::{CliSettings, Config};
use blogmark_renderer::TextDirection;
use clap::Args;

use crate::error::CliError;
use crate::input::read_input;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markup file to render (default: stdin, also with "-").
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover blogmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fallback image for captionless images (overrides config).
    #[arg(long)]
    placeholder_image: Option<String>,

    /// Escape directive values, URLs and captions inside attributes.
    #[arg(long)]
    escape_attributes: bool,

    /// Render `---` and `***` lines as horizontal rules.
    #[arg(long)]
    horizontal_rules: bool,

    /// Wrap the fragment in a right-to-left block.
    #[arg(long)]
    rtl: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or input/output cannot be accessed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let markup = read_input(self.input.as_deref())?;

        let start = Instant::now();
        let html = config.render.renderer().render(&markup);
        tracing::info!(
            bytes_in = markup.len(),
            bytes_out = html.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Rendered markup"
        );

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.result(&html)?,
        }
        Ok(())
    }

    /// Build config overrides; absent flags leave config values untouched.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            placeholder_image: self.placeholder_image.clone(),
            horizontal_rules: self.horizontal_rules.then_some(true),
            escape_attributes: self.escape_attributes.then_some(true),
            direction: self.rtl.then_some(TextDirection::Rtl),
            ..CliSettings::default()
        }
    }
}
