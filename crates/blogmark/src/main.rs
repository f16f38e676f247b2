//! Blogmark CLI - blog markup renderer.
//!
//! Provides commands for:
//! - `render`: Convert markup to an HTML fragment
//! - `preview`: Print a plain-text preview or excerpt
//! - `stats`: Print word count and reading time
//! - `languages`, `fonts`: List the editor catalogs

mod commands;
mod error;
mod input;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LanguagesArgs, PreviewArgs, RenderArgs, StatsArgs};
use output::Output;

/// Blogmark - blog markup renderer.
#[derive(Parser)]
#[command(name = "blogmark", version, about)]
struct Cli {
    /// Enable verbose output (log config discovery and render timing).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markup to HTML.
    Render(RenderArgs),
    /// Print a plain-text preview of a post.
    Preview(PreviewArgs),
    /// Print word count and estimated reading time.
    Stats(StatsArgs),
    /// List supported post languages.
    Languages(LanguagesArgs),
    /// List editor font choices.
    Fonts,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Preview(args) => args.execute(),
        Commands::Stats(args) => args.execute(),
        Commands::Languages(args) => args.execute(),
        Commands::Fonts => commands::list_fonts(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
