//! Redaction of credentials in logged text

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static JSON_SECRET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#""(token|accessToken|access_token|refreshToken|password|confirmPassword|secret)"\s*:\s*"(?:[^"\\]|\\.)*""#,
    )
    .expect("JSON secret pattern is valid")
});

static ASSIGNMENT_SECRET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(token|password|secret)=[^\s&,;]+").expect("assignment secret pattern is valid")
});

static BEARER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Bearer\s+[A-Za-z0-9\-_\.=+/]+").expect("bearer pattern is valid")
});

/// Redacts credentials and tokens from text before it is logged
#[derive(Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Create a new secret scrubber
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = JSON_SECRET_PATTERN.replace_all(message, r#""$1":"[REDACTED]""#);
        let scrubbed = ASSIGNMENT_SECRET_PATTERN.replace_all(&scrubbed, "$1=[REDACTED]");
        BEARER_PATTERN
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
