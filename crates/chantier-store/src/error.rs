//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized before writing.
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Stored content exists but does not parse.
    #[error("corrupt store content at '{location}': {reason}")]
    Corrupt { location: String, reason: String },
}
