use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad caller input, rejected before any I/O happens.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Root directory problems and I/O failures during traversal or
    /// manifest reads.
    #[error("cannot access {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A retained file could not be opened or fully read while digesting.
    #[error("failed to hash {path}: {source}")]
    Hash {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Malformed manifest text on decode.
    #[error("malformed manifest: {0}")]
    Serialization(#[from] serde_json::Error),
}
