//! Outbound transport port

use async_trait::async_trait;
use serde_json::Value;

use super::errors::TransportError;

/// Outbound JSON transport to the authentication backend
///
/// Implementations resolve `path` against their own base URL, send `body`
/// as a JSON POST and hand back the decoded response body.
#[async_trait]
pub trait AuthTransport: Send + Sync {
    /// POST `body` to `path`
    ///
    /// # Returns
    /// * `Ok(None)` if the server sent an empty body
    /// * `Ok(Some(value))` with the JSON body, or a JSON string holding the
    ///   raw text when the body was not valid JSON
    /// * `Err(TransportError)` on network failure, timeout or non-2xx status
    async fn post_json(&self, path: &str, body: &Value) -> Result<Option<Value>, TransportError>;
}
