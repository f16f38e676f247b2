//! `blogmark preview` command implementation.

use std::path::PathBuf;

use blogmark_config::{CliSettings, Config};
use blogmark_renderer::{excerpt, markdown_preview};
use clap::Args;

use crate::error::CliError;
use crate::input::read_input;
use crate::output::Output;

/// Arguments for the preview command.
#[derive(Args)]
pub(crate) struct PreviewArgs {
    /// Markup file to preview (default: stdin, also with "-").
    input: Option<PathBuf>,

    /// Maximum length in characters (overrides config).
    #[arg(short, long)]
    max_length: Option<usize>,

    /// Print the first paragraph instead of the stripped preview.
    #[arg(long)]
    excerpt: bool,

    /// Path to configuration file (default: auto-discover blogmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PreviewArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            preview_length: self.max_length,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let markup = read_input(self.input.as_deref())?;

        let text = if self.excerpt {
            excerpt(&markup, config.preview.excerpt_length)
        } else {
            markdown_preview(&markup, config.preview.max_length)
        };

        Output::new().result(&text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: PreviewArgs,
    }

    #[test]
    fn test_parse_args() {
        let harness =
            Harness::try_parse_from(["preview", "-", "--max-length", "40", "--excerpt"]).unwrap();

        assert_eq!(harness.args.max_length, Some(40));
        assert!(harness.args.excerpt);
        assert_eq!(harness.args.input, Some(PathBuf::from("-")));
    }

    #[test]
    fn test_zero_length_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("post.md");
        let config = dir.path().join("blogmark.toml");
        std::fs::write(&input, "Body").unwrap();
        std::fs::write(&config, "").unwrap();

        let harness = Harness::try_parse_from([
            "preview",
            input.to_str().unwrap(),
            "--max-length",
            "0",
            "-c",
            config.to_str().unwrap(),
        ])
        .unwrap();
        let err = harness.args.execute().unwrap_err();

        assert!(matches!(err, CliError::Config(_)));
    }
}
