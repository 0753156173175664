//! Error types for patchbot-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures of the tool itself. Per-package failures are reported and
/// skipped instead.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Publish(#[from] patchbot_publish::Error),

    #[error("{message}")]
    User { message: String },
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
