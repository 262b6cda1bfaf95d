//! Error types for the zip-path task.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ZipPathError`.
pub type Result<T> = std::result::Result<T, ZipPathError>;

/// Errors that can occur while compressing a path.
#[derive(Error, Debug)]
pub enum ZipPathError {
    /// I/O operation failed.
    ///
    /// Traversal and zip writer failures are folded into this variant so the
    /// caller sees the underlying `io::ErrorKind` (permission denied, disk
    /// full, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required option was absent or empty.
    #[error("{name} option is required")]
    MissingRequiredOption {
        /// Name of the missing option.
        name: &'static str,
    },

    /// Source path does not exist.
    #[error("path does not exist: {path}")]
    PathNotFound {
        /// The resolved path that was looked up.
        path: PathBuf,
    },

    /// An exclusion pattern could not be compiled.
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// Compiler message.
        message: String,
    },

    /// A directory source has no final path component to name the archive
    /// after.
    #[error("cannot derive an archive name from {path}")]
    UnnamedSource {
        /// The source path.
        path: PathBuf,
    },

    /// The destination archive is the source file itself.
    #[error("output archive would overwrite the source file: {path}")]
    OutputIsSource {
        /// The shared path.
        path: PathBuf,
    },

    /// The options record could not be decoded.
    #[error("invalid task options: {0}")]
    InvalidOptions(String),
}

impl ZipPathError {
    /// Returns `true` if this error was caused by the task inputs rather than
    /// by the filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use zippath_core::ZipPathError;
    ///
    /// let err = ZipPathError::MissingRequiredOption { name: "path" };
    /// assert!(err.is_input_error());
    ///
    /// let err = ZipPathError::Io(std::io::Error::other("disk full"));
    /// assert!(!err.is_input_error());
    /// ```
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredOption { .. }
                | Self::PathNotFound { .. }
                | Self::InvalidPattern { .. }
                | Self::UnnamedSource { .. }
                | Self::OutputIsSource { .. }
                | Self::InvalidOptions(_)
        )
    }
}

impl From<walkdir::Error> for ZipPathError {
    fn from(err: walkdir::Error) -> Self {
        Self::Io(err.into())
    }
}

impl From<zip::result::ZipError> for ZipPathError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Self::Io(io),
            other => Self::Io(std::io::Error::other(format!("zip writer error: {other}"))),
        }
    }
}
