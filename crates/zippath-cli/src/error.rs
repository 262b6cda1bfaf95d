//! Error conversion utilities for CLI.
//!
//! Converts zippath-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use zippath_core::ZipPathError;

/// Converts `ZipPathError` to user-friendly anyhow error with context
pub fn convert_zip_error(err: ZipPathError, source: &Path) -> anyhow::Error {
    match err {
        ZipPathError::MissingRequiredOption { name } => {
            anyhow!(
                "Missing required option '{name}'\n\
                 HINT: Pass the file or directory to compress, e.g. `zippath zip ./site`."
            )
        }
        ZipPathError::PathNotFound { path } => {
            anyhow!(
                "Path does not exist: {}\n\
                 HINT: Paths are resolved against the current directory.",
                path.display()
            )
        }
        ZipPathError::InvalidPattern { pattern, message } => {
            anyhow!(
                "Invalid exclude pattern '{pattern}': {message}\n\
                 HINT: Patterns support *, ? and [...] character classes."
            )
        }
        ZipPathError::OutputIsSource { path } => {
            anyhow!(
                "Refusing to overwrite '{}' with its own archive\n\
                 HINT: Use --output to choose a different destination.",
                path.display()
            )
        }
        ZipPathError::Io(io_err) => {
            anyhow!(
                "I/O error while compressing '{}': {}",
                source.display(),
                io_err
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error compressing '{}'", source.display())),
    }
}

/// Adds context to a task result
pub fn add_source_context<T>(
    result: Result<T, ZipPathError>,
    source: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_zip_error(e, source))
}
