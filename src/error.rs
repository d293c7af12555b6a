//! Error types for shingle-bench.
//!
//! The metric engine itself is total over its input domain and never fails;
//! errors only arise at the I/O boundary (reading corpus files, writing the
//! results file).

use std::path::PathBuf;
use thiserror::Error;

/// Result type for shingle-bench operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for shingle-bench operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A corpus file could not be parsed as JSON.
    #[error("Corpus parse error in {path}: {source}")]
    CorpusParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Results serialization failed.
    #[error("Results serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a corpus parse error.
    pub fn corpus_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::CorpusParse {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}
