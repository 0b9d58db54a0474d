//! Results of successful auth calls

use serde::Serialize;
use std::fmt;

use super::credentials::RegistrationRole;
use super::envelope::ResponseEnvelope;

/// Result of a successful login
#[derive(Clone, PartialEq, Eq)]
pub struct LoginSession {
    /// Credential token, already persisted when this value is returned
    pub token: String,

    /// Normalized role (`STUDENT`, `TEACHER`, ...) if the server sent one
    pub role: Option<String>,

    /// Username echoed back by the server
    pub username: Option<String>,
}

impl LoginSession {
    /// Build a session from a success envelope
    ///
    /// Returns `None` when the payload carries no non-empty `token`.
    pub fn from_envelope(envelope: &ResponseEnvelope) -> Option<Self> {
        let token = envelope.data_str("token")?.to_string();

        Some(Self {
            token,
            role: envelope.data_str("role").and_then(normalize_role),
            username: envelope.data_str("username").map(str::to_owned),
        })
    }
}

impl fmt::Debug for LoginSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSession")
            .field("token", &"[REDACTED]")
            .field("role", &self.role)
            .field("username", &self.username)
            .finish()
    }
}

/// Upper-case a role and strip a leading `ROLE_`
pub fn normalize_role(raw: &str) -> Option<String> {
    let upper = raw.trim().to_uppercase();
    let role = upper.strip_prefix("ROLE_").unwrap_or(&upper);
    if role.is_empty() {
        None
    } else {
        Some(role.to_string())
    }
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    /// Account type that was registered
    pub role: RegistrationRole,
    /// Server confirmation message
    pub message: String,
}
