//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration test files.

use std::sync::Arc;

use gradebook_auth::{HttpAuthTransport, HttpClientConfig};
use wiremock::MockServer;

/// Build an HTTP transport pointed at a mock server
pub fn transport_for(server: &MockServer) -> Arc<HttpAuthTransport> {
    transport_with_timeout(server, 5)
}

/// Build an HTTP transport with a specific timeout
pub fn transport_with_timeout(server: &MockServer, timeout_secs: u64) -> Arc<HttpAuthTransport> {
    Arc::new(
        HttpAuthTransport::new(HttpClientConfig {
            base_url: server.uri(),
            timeout_secs,
        })
        .expect("Failed to build transport"),
    )
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
