//! Error types for hostsync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the merge engine
    #[error(transparent)]
    Content(#[from] hostsync_content::Error),

    /// Error from the filesystem boundary
    #[error(transparent)]
    Fs(#[from] hostsync_fs::Error),

    /// Error from an inventory source
    #[error(transparent)]
    Inventory(#[from] hostsync_inventory::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
