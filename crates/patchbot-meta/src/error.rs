//! Error types for patchbot-meta

use std::path::PathBuf;

/// Result type for patchbot-meta operations
pub type Result<T> = std::result::Result<T, Error>;

/// A package whose content cannot be turned into a publishable record.
///
/// These are deterministic functions of what is on disk. A batch run
/// reports them and moves on to the next package.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Invalid package folder {package}")]
    NotADirectory { package: String },

    #[error("No {manifest} in folder {package}")]
    MissingManifest { package: String, manifest: String },

    #[error("No .{extension} file in folder {package}")]
    MissingBinary { package: String, extension: String },

    #[error(transparent)]
    Fs(#[from] patchbot_fs::Error),

    #[error("Bad description graph in {package}: {source}")]
    Graph {
        package: String,
        #[source]
        source: patchbot_graph::Error,
    },

    #[error("No plugin found in folder {package}")]
    NoPluginFound { package: String },

    #[error("Plugin field \"{field}\" missing in {package}")]
    FieldMissing { field: &'static str, package: String },

    #[error("Plugin field \"{field}\" in {package} has invalid value {value:?}")]
    InvalidField {
        field: &'static str,
        package: String,
        value: String,
    },

    #[error("License file {path} in {package} is not supported")]
    UnsupportedLicenseFile { package: String, path: PathBuf },

    #[error("License mismatch in {package} ({first} vs. {second})")]
    LicenseMismatch {
        package: String,
        first: String,
        second: String,
    },

    #[error("No license found for {package}")]
    LicenseMissing { package: String },

    #[error("Missing license ID for {license}. Update {table}.")]
    UnmappedLicense { license: String, table: String },

    #[error("Missing category ID for {category}. Update {table}.")]
    UnmappedCategory { category: String, table: String },

    #[error("No categories found for {package}")]
    NoCategories { package: String },

    #[error("Invalid key {key:?} in {table}: expected a numeric ID")]
    InvalidTableKey { table: String, key: String },
}

/// Errors raised by the metadata model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Content(#[from] ContentError),

    /// A derived value was read before `parse()` succeeded.
    #[error("Package {package} has not been parsed")]
    NotParsed { package: String },
}

impl Error {
    /// True when a batch run may report this error and continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Content(_))
    }

    /// The content error, if this is one.
    pub fn as_content(&self) -> Option<&ContentError> {
        match self {
            Self::Content(e) => Some(e),
            Self::NotParsed { .. } => None,
        }
    }
}
