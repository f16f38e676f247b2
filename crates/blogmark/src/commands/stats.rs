//! `blogmark stats` command implementation.

use std::path::PathBuf;

use blogmark_config::{CliSettings, Config};
use blogmark_renderer::{ReadingStats, reading_stats};
use clap::Args;

use crate::error::CliError;
use crate::input::read_input;
use crate::output::Output;

/// Arguments for the stats command.
#[derive(Args)]
pub(crate) struct StatsArgs {
    /// Markup file to measure (default: stdin, also with "-").
    input: Option<PathBuf>,

    /// Reading speed used for the estimate (overrides config).
    #[arg(short, long)]
    words_per_minute: Option<u32>,

    /// Path to configuration file (default: auto-discover blogmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl StatsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            words_per_minute: self.words_per_minute,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let markup = read_input(self.input.as_deref())?;

        let stats = reading_stats(&markup, config.reading.words_per_minute);
        Output::new().result(&summary(stats))?;
        Ok(())
    }
}

fn summary(stats: ReadingStats) -> String {
    let noun = if stats.words == 1 { "word" } else { "words" };
    format!("{} {noun}, {stats}", stats.words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary() {
        assert_eq!(
            summary(ReadingStats {
                words: 420,
                minutes: 3
            }),
            "420 words, 3 min read"
        );
        assert_eq!(
            summary(ReadingStats {
                words: 1,
                minutes: 1
            }),
            "1 word, 1 min read"
        );
    }
}
