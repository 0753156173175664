//! Error types for patchbot-graph

use std::path::PathBuf;

/// Result type for patchbot-graph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort loading a description graph
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entry description file does not exist
    #[error("Manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// A description file is not valid Turtle
    #[error("Bad syntax in {path}: {message}")]
    BadSyntax { path: PathBuf, message: String },

    /// The file path could not be used as a parse base
    #[error("Invalid base IRI for {path}: {message}")]
    InvalidBaseIri { path: PathBuf, message: String },

    #[error(transparent)]
    Fs(#[from] patchbot_fs::Error),
}
