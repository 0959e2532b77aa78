//! Error types for the gantry client libraries.
//!
//! This module provides a unified error type with explicit variants for
//! transport, request, authentication, input validation, and storage
//! failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for gantry operations.
///
/// This error type covers all possible failure modes in the libraries,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-2xx responses from the backend.
    #[error("request failed: {0}")]
    Request(#[from] RequestFailure),

    /// Authentication errors (rejected login, missing session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors (invalid URL, id, record, or query).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Session or preference persistence errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-2xx response from the backend.
///
/// Carries the original status code and body text so callers can show
/// the server-provided message.
#[derive(Debug, Clone)]
pub struct RequestFailure {
    /// HTTP status code.
    pub status: u16,
    /// Body text from the server.
    pub body: String,
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if !self.body.trim().is_empty() {
            write!(f, ": {}", self.body.trim())?;
        }
        Ok(())
    }
}

impl std::error::Error for RequestFailure {}

impl RequestFailure {
    /// Create a new request failure.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The server-provided message, if the body carried one.
    pub fn message(&self) -> Option<&str> {
        let trimmed = self.body.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the login with a domain-level message.
    #[error("login rejected: {message}")]
    Rejected { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid record shape.
    #[error("invalid record: {reason}")]
    Record { reason: String },

    /// Invalid list query.
    #[error("invalid query: {reason}")]
    Query { reason: String },

    /// Unknown resource name.
    #[error("unknown resource '{name}'")]
    UnknownResource { name: String },
}

/// Session and preference storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored file does not parse.
    #[error("corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No usable storage directory on this platform.
    #[error("no usable storage directory")]
    NoStorageDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failure_display_includes_status_and_body() {
        let failure = RequestFailure::new(404, "document not found");
        assert_eq!(failure.to_string(), "HTTP 404: document not found");
    }

    #[test]
    fn request_failure_display_omits_empty_body() {
        let failure = RequestFailure::new(503, "");
        assert_eq!(failure.to_string(), "HTTP 503");
        assert!(failure.message().is_none());
    }
}
