//! Error types for the bookstore API client.
//!
//! # Design
//! Every non-2xx response lands in `Request`, whose display text is only the
//! human-readable message: the server's `message` field when it sent one,
//! otherwise a fixed per-operation fallback. The other variants cover the
//! failures that happen around the exchange rather than in it.

use thiserror::Error;

/// Errors returned by `BookstoreClient` and the hosts that drive it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// A status string that is not one of `en_attente`, `payee`, `livree`.
    #[error("invalid order status: {0:?}")]
    InvalidStatus(String),

    /// The base address and endpoint path did not form a valid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// No response was received.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP status of a `Request` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
