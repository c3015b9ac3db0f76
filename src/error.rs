//! API Error Types
//!
//! This module defines the error taxonomy for every operation that talks to
//! the backend or to local session storage.
//!
//! # Error Categories
//!
//! - `Network` - transport-level failures (server unreachable, DNS, TLS)
//! - `Http` - the server answered with a non-success status
//! - `RefreshFailed` - the session could not be refreshed and was torn down
//! - `Serialization` - a request or response body could not be (de)serialized
//! - `Storage` - local session persistence failed
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread
//! boundaries.

use thiserror::Error;

/// Errors surfaced by the HTTP client, the auth gateway, and the resource
/// gateways.
///
/// `Network` and `Http` propagate to the caller unchanged; `RefreshFailed`
/// additionally means the local session has already been cleared and the
/// consumer should return to its unauthenticated entry point.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Transport failure before any HTTP status was received
    #[error("network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The server rejected the request with a non-success status
    #[error("request failed with status {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim, for UI-level messaging
        body: String,
    },

    /// Token refresh failed; the local session has been cleared
    #[error("session refresh failed, local session cleared")]
    RefreshFailed,

    /// A request or response body could not be serialized or deserialized
    #[error("serialization error: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
    },

    /// Local session storage could not be read or written
    #[error("session storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new HTTP error from a status code and response body
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// The HTTP status code, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::serialization(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err.to_string())
    }
}
