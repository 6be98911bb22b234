use std::path::PathBuf;
use thiserror::Error;

/// Failures of the per-guild document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage medium could not be read or written.
    ///
    /// Covers permission errors, a full disk, or a missing parent directory that could not be
    /// created. Not retried internally.
    #[error("Failed to access {path}: {source}")]
    Io {
        /// File or directory the operation targeted
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A document exists but does not match the expected schema.
    ///
    /// The file is left untouched so an operator can inspect or repair it; it is never
    /// replaced with defaults.
    #[error("Document {path} is corrupt: {source}")]
    Corrupt {
        /// The unparsable document
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
        }
    }
}
