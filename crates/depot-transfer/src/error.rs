//! Error types for depot-transfer

use std::path::PathBuf;

/// Result type for transfer operations
pub type Result<T> = std::result::Result<T, TransferError>;

/// Errors that can occur while preparing or running an upload
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Upload source does not exist: {path}")]
    SourceMissing { path: PathBuf },

    #[error("Unsupported driver: {driver}")]
    UnsupportedDriver { driver: String },

    /// The object-storage driver is an extension point with no backend yet.
    #[error("Object storage upload is not implemented")]
    ObjectStorageUnimplemented,

    #[error("Driver {driver} requires credentials")]
    MissingCredentials { driver: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Fs(#[from] depot_fs::Error),
}

/// Failure reported by an [`HttpTransport`](crate::HttpTransport).
///
/// Only transport-level problems land here. A response with any status code
/// is a successful round trip.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport failed: {message}")]
    Other { message: String },
}

impl TransportError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
