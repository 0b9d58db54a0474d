//! Errors returned by the login and registration services

use thiserror::Error;

use super::ports::errors::{StorageError, TransportError};

/// Message used when the server rejects a login without saying why
pub const DEFAULT_LOGIN_FAILURE_MESSAGE: &str = "登录失败：未知错误";

/// Message used when a successful login envelope carries no token
pub const MISSING_TOKEN_MESSAGE: &str = "登录失败：未获取到登录凭证";

/// Message used when the server rejects a registration without saying why
pub const DEFAULT_REGISTRATION_FAILURE_MESSAGE: &str = "注册失败：未知错误";

/// Errors returned by the login flow
///
/// Every variant is logged by the login service before it reaches the caller.
#[derive(Error, Debug)]
pub enum LoginError {
    /// The HTTP call itself failed; the transport error is passed through untouched
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status code
    #[error("{0}")]
    Rejected(String),

    /// The server reported success but sent no credential token
    #[error("{}", MISSING_TOKEN_MESSAGE)]
    MissingToken,

    /// The credentials value could not be encoded as JSON
    #[error("Invalid credentials payload: {0}")]
    InvalidCredentials(#[from] serde_json::Error),

    /// The token could not be persisted
    #[error("Failed to store credential token: {0}")]
    Storage(#[from] StorageError),
}

/// Errors returned by student/teacher registration
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The request failed local validation and was never sent
    #[error("Invalid registration: {0}")]
    Invalid(String),

    /// The HTTP call itself failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status code
    #[error("{0}")]
    Rejected(String),

    /// The request could not be encoded as JSON
    #[error("Invalid registration payload: {0}")]
    Serialization(#[from] serde_json::Error),
}
