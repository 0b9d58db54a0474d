//! Read access to the stored credential token

use std::sync::Arc;

use crate::domain::models::config::{DEFAULT_TOKEN_KEY, DEFAULT_TOKEN_PREFIX};
use crate::domain::ports::{KeyValueStore, StorageError};

/// Read-only access to the stored credential token
pub struct TokenService {
    store: Arc<dyn KeyValueStore>,
    token_key: String,
    token_prefix: String,
}

impl TokenService {
    /// Read the token from `store` under the default key
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            token_prefix: DEFAULT_TOKEN_PREFIX.to_string(),
        }
    }

    /// Override the storage key
    #[must_use]
    pub fn with_token_key(mut self, token_key: impl Into<String>) -> Self {
        self.token_key = token_key.into();
        self
    }

    /// Override the Authorization header prefix
    #[must_use]
    pub fn with_token_prefix(mut self, token_prefix: impl Into<String>) -> Self {
        self.token_prefix = token_prefix.into();
        self
    }

    /// The token stored by the last successful login, if any
    pub async fn current_token(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .store
            .get(&self.token_key)
            .await?
            .filter(|token| !token.is_empty()))
    }

    /// Value for the `Authorization` header of an authenticated request
    pub async fn authorization_header(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .current_token()
            .await?
            .map(|token| format!("{}{}", self.token_prefix, token)))
    }
}
