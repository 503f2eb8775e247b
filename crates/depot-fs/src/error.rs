//! Error types for depot-fs

use std::path::PathBuf;

/// Result type for depot-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in depot-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An OS call on `path` failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stat failed for a reason other than "not found".
    ///
    /// Raised while resolving a handle. Never treat this as "absent".
    #[error("Failed to stat {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source is not a file: {path}")]
    SourceNotFile { path: PathBuf },

    #[error("Source is not a directory: {path}")]
    SourceNotDirectory { path: PathBuf },

    /// Copying would read from and write to the same location.
    #[error("Source and destination overlap: {} <-> {}", .from.display(), .to.display())]
    Overlap { from: PathBuf, to: PathBuf },

    #[error("Could not resolve process root: {message}")]
    RootResolution { message: String },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn stat(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source,
        }
    }

    /// The underlying OS error, if this error wraps one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } | Self::Stat { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
