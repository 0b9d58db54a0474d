//! Errors raised by port implementations

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for outbound HTTP calls
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS or protocol failure
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// Request timed out waiting for response
    #[error("Timeout waiting for response")]
    Timeout,

    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The HTTP client could not be constructed or the URL is unusable
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    /// Create error from HTTP status code and response body
    ///
    /// # Examples
    ///
    /// ```
    /// use gradebook_auth::domain::ports::TransportError;
    /// use reqwest::StatusCode;
    ///
    /// let error = TransportError::from_status(StatusCode::UNAUTHORIZED, "denied".to_string());
    /// assert_eq!(error.status(), Some(401));
    /// ```
    pub fn from_status(status: StatusCode, body: String) -> Self {
        Self::Status {
            status: status.as_u16(),
            body,
        }
    }

    /// HTTP status code, if the server answered at all
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}

/// Error type for key-value storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// A database query failed
    #[error("Query failed: {0}")]
    QueryFailed(#[from] sqlx::Error),

    /// The database could not be opened
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    MigrationError(String),
}
