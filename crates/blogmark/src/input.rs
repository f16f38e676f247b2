//! Reading post bodies from files or stdin.

use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Read the post body from `path`, or from stdin when `path` is `None` or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::Input(format!("Failed to read {}: {e}", path.display())))
}
