//! Error types for hostsync-inventory

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by inventory sources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no inventory credentials for profile '{profile}'")]
    CredentialsMissing { profile: String },

    #[error("invalid inventory credentials for profile '{profile}': {message}")]
    CredentialsInvalid { profile: String, message: String },
}
