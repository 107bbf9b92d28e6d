//! API client error types.

use chantier_store::StoreError;
use thiserror::Error;

/// Errors returned by [`crate::ApiClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection, timeout, TLS, invalid URL.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the session. The token has already been cleared.
    #[error("unauthorized: session cleared, log in again")]
    Unauthorized,

    /// The backend returned a non-success status other than 401.
    #[error("API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body did not decode into the expected type.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The session store could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::Store(_) => None,
        }
    }
}
