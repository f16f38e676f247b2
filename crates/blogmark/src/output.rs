//! Colored terminal output utilities.

use std::io;

use console::{Style, Term};

/// Terminal output formatter.
///
/// Status messages go to stderr so that command results on stdout stay
/// pipeable.
pub(crate) struct Output {
    term: Term,
    stdout: Term,
    green: Style,
    red: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            stdout: Term::stdout(),
            green: Style::new().green(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Write a command result to stdout.
    pub(crate) fn result(&self, text: &str) -> io::Result<()> {
        self.stdout.write_line(text)
    }

    /// Write a catalog row (name highlighted, detail dimmed) to stdout.
    pub(crate) fn row(&self, name: &str, detail: &str) -> io::Result<()> {
        self.stdout.write_line(&format!(
            "{}  {}",
            self.cyan_bold.apply_to(name),
            self.dim.apply_to(detail)
        ))
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}
