//! Error types for hostsync-content

/// Result type for hostsync-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in managed-region operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("managed region markers not found")]
    MarkersNotFound,

    #[error("managed region markers already exist")]
    MarkersAlreadyExist,

    #[error("managed region markers are out of order or incomplete")]
    MalformedMarkerOrder,

    #[error("section key already exists: {key}")]
    DuplicateSectionKey { key: String },
}
