//! Error types for webship
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ArchiveError, RemoteError};
use crate::domain::value_objects::{InvalidArchiveName, InvalidHost};

/// Result type alias for webship operations
pub type ShipResult<T> = Result<T, ShipError>;

/// Main error type for webship operations
#[derive(Error, Debug)]
pub enum ShipError {
    /// Directory to pack does not exist
    #[error("source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Output directory could not be created
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive creation failed
    #[error("failed to create archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: ArchiveError,
    },

    /// Archive to deploy does not exist locally
    #[error("archive not found: {path}")]
    ArchiveNotFound { path: PathBuf },

    /// Archive path has no usable file name
    #[error(transparent)]
    InvalidArchiveName(#[from] InvalidArchiveName),

    /// Nothing to deploy to
    #[error("no hosts configured")]
    NoHosts,

    /// Malformed host
    #[error(transparent)]
    InvalidHost(#[from] InvalidHost),

    /// Remote upload or command failure
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
