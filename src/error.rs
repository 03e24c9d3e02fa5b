use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the scan pipeline.
///
/// Listing failures are fatal; a file that disappears between listing and
/// read is not (the aggregator skips it).
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("spell check failed for {path}")]
    SpellCheck {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
