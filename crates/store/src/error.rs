use std::path::PathBuf;

use folio_core::error::CoreError;

/// Errors raised by collection and upload-directory operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error (validation) from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A collection file exists but does not hold a valid JSON array of records.
    #[error("Malformed collection file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory collection could not be encoded.
    #[error("Failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
