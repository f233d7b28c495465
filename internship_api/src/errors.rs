//! Error types for the API client.

/// Errors that can occur when talking to the applications API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (DNS, connect, TLS, or body read failure).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-success status. `message` is already
    /// resolved from the error body, see [`crate::classify_error_body`].
    #[error("{message}")]
    Api { status: u16, message: String },
    /// A success response whose body was not the JSON we expected.
    #[error("Failed to decode response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    /// The configured base URL could not be combined with a request path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// A resume file could not be read from disk.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status carried by the error, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) | Self::Io(_) => None,
        }
    }
}
