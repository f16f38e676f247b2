//! `blogmark languages` and `blogmark fonts` command implementations.

use blogmark_renderer::{BLOG_FONTS, SUPPORTED_LANGUAGES, TextDirection};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the languages command.
#[derive(Args)]
pub(crate) struct LanguagesArgs {
    /// Only list right-to-left languages.
    #[arg(long)]
    rtl_only: bool,
}

impl LanguagesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        for lang in SUPPORTED_LANGUAGES
            .iter()
            .filter(|lang| !self.rtl_only || lang.direction == TextDirection::Rtl)
        {
            output.row(
                &format!("{:<3}", lang.code),
                &format!("{} ({})", lang.name, lang.direction),
            )?;
        }
        Ok(())
    }
}

/// Print the editor font choices with their CSS stacks.
pub(crate) fn list_fonts() -> Result<(), CliError> {
    let output = Output::new();
    for font in BLOG_FONTS {
        output.row(&format!("{:<18}", font.name), font.value)?;
    }
    Ok(())
}
