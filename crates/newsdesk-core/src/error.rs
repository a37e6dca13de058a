//! Error types for the newsdesk client.
//!
//! Every failure a caller can observe is one of the variants of [`Error`].
//! [`Error::kind`] flattens the nesting into an [`ErrorKind`] tag so call
//! sites can match exhaustively without probing fields.

use std::fmt;
use thiserror::Error;

/// The unified error type for newsdesk operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, connection refused, reset).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A time-bounded call was cancelled by its deadline.
    #[error("request aborted after {timeout_ms}ms")]
    Aborted { timeout_ms: u64 },

    /// Authentication errors (no credential, renewal failed).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Http(#[from] HttpError),

    /// A 2xx response body was not the expected JSON.
    #[error("failed to decode response (HTTP {status}): {message}")]
    Decode { status: u16, message: String },

    /// Input validation errors (bad URL, bad media type).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Token persistence errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Flat classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Aborted,
    AuthRequired,
    AuthExpired,
    Http,
    Decode,
    InvalidInput,
    Storage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Transport => "transport",
            ErrorKind::Aborted => "aborted",
            ErrorKind::AuthRequired => "auth_required",
            ErrorKind::AuthExpired => "auth_expired",
            ErrorKind::Http => "http",
            ErrorKind::Decode => "decode",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Storage => "storage",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Returns the flat kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(_) => ErrorKind::Transport,
            Error::Aborted { .. } => ErrorKind::Aborted,
            Error::Auth(AuthError::Required) => ErrorKind::AuthRequired,
            Error::Auth(AuthError::Expired { .. }) => ErrorKind::AuthExpired,
            Error::Http(_) => ErrorKind::Http,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Returns the HTTP status associated with this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http(err) => Some(err.status),
            Error::Decode { status, .. } => Some(*status),
            Error::Auth(AuthError::Expired { status, .. }) => *status,
            _ => None,
        }
    }

    /// Returns true for the two authentication kinds.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// The request could not be constructed or sent.
    #[error("request failed: {message}")]
    Request { message: String },

    /// The response body could not be read.
    #[error("failed to read response body: {message}")]
    Body { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No refresh credential was available, so renewal was skipped.
    #[error("authentication required")]
    Required,

    /// Renewal was attempted and failed, or the retried call was rejected again.
    #[error("session expired: {reason}")]
    Expired { status: Option<u16>, reason: String },
}

impl AuthError {
    /// Create an expiry error with a reason.
    pub fn expired(status: Option<u16>, reason: impl Into<String>) -> Self {
        AuthError::Expired {
            status,
            reason: reason.into(),
        }
    }
}

/// A non-2xx response from the API.
#[derive(Debug)]
pub struct HttpError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}

impl HttpError {
    /// Create a new HTTP error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// A request URL could not be composed from base and path.
    #[error("invalid request path '{path}': {reason}")]
    Path { path: String, reason: String },

    /// A multipart part declared an unparsable media type.
    #[error("invalid media type '{value}' for part '{part}'")]
    MediaType { part: String, value: String },

    /// A JSON body could not be serialized.
    #[error("invalid body: {message}")]
    Body { message: String },
}

/// Token persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode token file: {message}")]
    Encode { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_separates_auth_variants() {
        assert_eq!(
            Error::from(AuthError::Required).kind(),
            ErrorKind::AuthRequired
        );
        assert_eq!(
            Error::from(AuthError::expired(Some(401), "rejected")).kind(),
            ErrorKind::AuthExpired
        );
    }

    #[test]
    fn status_is_reported_when_the_server_answered() {
        let err = Error::from(HttpError::new(404, None, Some("not found".into())));
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.status(), Some(404));

        let err = Error::Aborted { timeout_ms: 30_000 };
        assert_eq!(err.status(), None);
    }

    #[test]
    fn http_error_display_includes_code_and_message() {
        let err = HttpError::new(
            400,
            Some("token_not_valid".into()),
            Some("Token is invalid or expired".into()),
        );
        assert_eq!(
            err.to_string(),
            "HTTP 400 [token_not_valid]: Token is invalid or expired"
        );
    }
}
