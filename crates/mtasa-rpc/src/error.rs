//! Error types for the mtasa-rpc client.
//!
//! Everything that goes wrong on the wire is a [`TransportError`]. The client
//! never retries or reinterprets these; they reach the caller as-is, with the
//! HTTP client's own error kept as the [`source`](std::error::Error::source).

use thiserror::Error;

/// The unified error type for mtasa-rpc operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failures from the HTTP layer, including unparseable response bodies.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The unwrapped result could not be converted into the requested type.
    #[error("failed to decode procedure result: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configuration value could not be parsed.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not connect to the server.
    #[error("connection failed: {source}")]
    Connection { source: reqwest::Error },

    /// The request exceeded the configured timeout.
    #[error("request timed out: {source}")]
    Timeout { source: reqwest::Error },

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("malformed response body: {source}")]
    Decode { source: reqwest::Error },

    /// Any other HTTP client failure.
    #[error("HTTP error: {source}")]
    Http { source: reqwest::Error },
}

impl TransportError {
    /// Returns the HTTP status code if the server answered with an error status.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the underlying HTTP client error, if there is one.
    pub fn reqwest_error(&self) -> Option<&reqwest::Error> {
        match self {
            TransportError::Connection { source }
            | TransportError::Timeout { source }
            | TransportError::Decode { source }
            | TransportError::Http { source } => Some(source),
            TransportError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            TransportError::Timeout { source }
        } else if source.is_connect() {
            TransportError::Connection { source }
        } else if source.is_decode() {
            TransportError::Decode { source }
        } else {
            TransportError::Http { source }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}
