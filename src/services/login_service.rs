//! Login against the backend

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::domain::error::{LoginError, DEFAULT_LOGIN_FAILURE_MESSAGE};
use crate::domain::models::config::{DEFAULT_LOGIN_PATH, DEFAULT_TOKEN_KEY};
use crate::domain::models::{LoginSession, ResponseEnvelope};
use crate::domain::ports::{AuthTransport, KeyValueStore};
use crate::infrastructure::logging::SecretScrubber;

/// Posts credentials to the login endpoint and persists the returned token
///
/// The token is written if and only if the request succeeded, the envelope
/// code is 200 and the payload carried a non-empty `token`. Every failure is
/// logged and returned; nothing is retried.
pub struct LoginService {
    transport: Arc<dyn AuthTransport>,
    store: Arc<dyn KeyValueStore>,
    login_path: String,
    token_key: String,
    scrubber: SecretScrubber,
}

impl LoginService {
    /// Create a service using the default endpoint path and storage key
    pub fn new(transport: Arc<dyn AuthTransport>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            transport,
            store,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            scrubber: SecretScrubber::new(),
        }
    }

    /// Override the login endpoint path
    #[must_use]
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    /// Override the key the token is stored under
    #[must_use]
    pub fn with_token_key(mut self, token_key: impl Into<String>) -> Self {
        self.token_key = token_key.into();
        self
    }

    /// Log in with `credentials`
    ///
    /// # Returns
    /// * `Ok(LoginSession)` once the token has been stored
    /// * `Err(LoginError::Transport)` with the transport error unchanged
    /// * `Err(LoginError::Rejected)` when the code is not 200 or the body is absent
    /// * `Err(LoginError::MissingToken)` when a 200 envelope has no token
    /// * `Err(LoginError::Storage)` when the token could not be written
    #[instrument(skip_all, fields(path = %self.login_path))]
    pub async fn login<C>(&self, credentials: &C) -> Result<LoginSession, LoginError>
    where
        C: Serialize + Sync + ?Sized,
    {
        let payload = serde_json::to_value(credentials).map_err(|e| {
            error!(error = %e, "failed to encode login credentials");
            LoginError::InvalidCredentials(e)
        })?;

        let body = match self.transport.post_json(&self.login_path, &payload).await {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "login request failed");
                return Err(LoginError::Transport(e));
            }
        };

        debug!(
            response = %self.scrub_body(body.as_ref()),
            "login endpoint responded"
        );

        let envelope = ResponseEnvelope::from_body(body.as_ref());
        if !envelope.is_success() {
            let message = envelope.message_or(DEFAULT_LOGIN_FAILURE_MESSAGE);
            error!(code = ?envelope.code, message = %message, "server rejected login");
            return Err(LoginError::Rejected(message));
        }

        let Some(session) = LoginSession::from_envelope(&envelope) else {
            error!("login succeeded but no credential token was returned");
            return Err(LoginError::MissingToken);
        };

        self.store
            .set(&self.token_key, &session.token)
            .await
            .map_err(|e| {
                error!(error = %e, key = %self.token_key, "failed to store credential token");
                LoginError::Storage(e)
            })?;

        info!(
            username = session.username.as_deref().unwrap_or("-"),
            role = session.role.as_deref().unwrap_or("-"),
            "login succeeded, credential token stored"
        );
        Ok(session)
    }

    fn scrub_body(&self, body: Option<&serde_json::Value>) -> String {
        body.map_or_else(
            || "<empty>".to_string(),
            |value| self.scrubber.scrub_message(&value.to_string()),
        )
    }
}
