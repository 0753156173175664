//! Error types for patchbot-publish

use std::path::PathBuf;

use crate::package::ValidationState;

/// Result type for patchbot-publish operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Found differences in {} and {} for {package}: {}",
        other.display(),
        base.display(),
        difference.join(", ")
    )]
    FileSetMismatch {
        package: String,
        base: PathBuf,
        other: PathBuf,
        difference: Vec<String>,
    },

    #[error("Found differences in {package} data between targets {base} and {other}")]
    DataMismatch {
        package: String,
        base: String,
        other: String,
    },

    #[error("Package {package} is {actual}, expected {expected}")]
    OutOfOrder {
        package: String,
        expected: ValidationState,
        actual: ValidationState,
    },

    #[error("Package {package} failed validation: {reason}")]
    Invalid { package: String, reason: String },

    #[error("Package {package} has no targets")]
    NoTargets { package: String },

    #[error("Package {0} not found")]
    PackageNotFound(String),

    #[error(transparent)]
    Meta(#[from] patchbot_meta::Error),

    #[error(transparent)]
    Fs(#[from] patchbot_fs::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for failures tied to one package, which a batch run reports and
    /// skips.
    pub fn is_package_failure(&self) -> bool {
        match self {
            Self::FileSetMismatch { .. }
            | Self::DataMismatch { .. }
            | Self::Invalid { .. }
            | Self::NoTargets { .. } => true,
            Self::Meta(e) => e.is_recoverable(),
            Self::OutOfOrder { .. }
            | Self::PackageNotFound(_)
            | Self::Fs(_)
            | Self::Json(_) => false,
        }
    }
}

impl From<patchbot_meta::ContentError> for Error {
    fn from(e: patchbot_meta::ContentError) -> Self {
        Self::Meta(e.into())
    }
}
