//! Error types for pep2html.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pep2html operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering or deploying PEP documents.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error occurred while formatting HTML output.
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// The source discovery pattern could not be compiled.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A discovered path could not be read while globbing.
    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    /// A single document failed to render.
    #[error("Failed to convert {}: {source}", path.display())]
    Conversion {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// Remote installation step failed.
    #[error("Install failed: {0}")]
    Install(String),
}
