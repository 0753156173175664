//! Errors raised by the filesystem layer

use std::path::PathBuf;

use crate::config::ConfigFormat;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read {format} file {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: ConfigFormat,
        message: String,
    },

    #[error("Could not write {format} file {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: ConfigFormat,
        message: String,
    },

    #[error("No config format for extension {extension:?}")]
    UnsupportedFormat { extension: String },

    /// Only absolute paths have a `file:` IRI.
    #[error("Path {path} cannot be expressed as a file IRI")]
    NotAFileIri { path: PathBuf },

    #[error("Could not lock {path} for writing")]
    LockFailed { path: PathBuf },
}

impl Error {
    /// Wrap an I/O failure with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
