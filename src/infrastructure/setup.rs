//! Project setup and service wiring
//!
//! Handles:
//! - Default config file creation (`gradebook-auth init`)
//! - Building the services from a loaded configuration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::models::config::Config;
use crate::infrastructure::http::{HttpAuthTransport, HttpClientConfig};
use crate::infrastructure::storage::SqliteKeyValueStore;
use crate::services::{LoginService, RegistrationService, TokenService};

/// Default configuration template content
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# gradebook-auth configuration
# Override settings by editing this file or setting environment variables
# with GRADEBOOK_ prefix
#
# Example environment variables:
#   export GRADEBOOK_API__BASE_URL=https://grades.example.edu
#   export GRADEBOOK_STORAGE__DATABASE_PATH=/custom/path/storage.db
#   export GRADEBOOK_LOGGING__LEVEL=debug

# Authentication backend
api:
  base_url: "http://localhost:8080"
  login_path: "/api/auth/login"
  register_student_path: "/api/auth/register/student"
  register_teacher_path: "/api/auth/register/teacher"
  # Request timeout in seconds
  timeout_secs: 30

# Token storage
storage:
  # Path to SQLite database file (project-local)
  database_path: ".gradebook/storage.db"
  token_key: "authToken"
  token_prefix: "Bearer "

# Logging configuration
logging:
  # Log level: trace, debug, info, warn, error
  level: "info"
  # Console format: json, pretty
  format: "pretty"
"#;

/// Write `.gradebook/config.yaml` under `root`
///
/// # Returns
/// * `Ok(Some(path))` if the file was written
/// * `Ok(None)` if it already existed and `force` is false
pub fn write_default_config(root: &Path, force: bool) -> Result<Option<PathBuf>> {
    let config_dir = root.join(".gradebook");
    let config_path = config_dir.join("config.yaml");

    if config_path.exists() && !force {
        return Ok(None);
    }

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;
    std::fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(Some(config_path))
}

/// Services built from a configuration, sharing one store and one transport
pub struct AppServices {
    /// Login against the configured backend
    pub login: LoginService,
    /// Student and teacher registration
    pub registration: RegistrationService,
    /// Stored token access
    pub tokens: TokenService,
    store: Arc<SqliteKeyValueStore>,
}

impl AppServices {
    /// Open the token store and HTTP transport described by `config`
    pub async fn build(config: &Config) -> Result<Self> {
        let store = Arc::new(
            SqliteKeyValueStore::open(&config.storage.database_path)
                .await
                .context("Failed to open token store")?,
        );
        let transport = Arc::new(
            HttpAuthTransport::new(HttpClientConfig::from(&config.api))
                .context("Failed to build HTTP transport")?,
        );

        let login = LoginService::new(transport.clone(), store.clone())
            .with_login_path(&config.api.login_path)
            .with_token_key(&config.storage.token_key);
        let registration = RegistrationService::new(transport, &config.api);
        let tokens = TokenService::new(store.clone())
            .with_token_key(&config.storage.token_key)
            .with_token_prefix(&config.storage.token_prefix);

        Ok(Self {
            login,
            registration,
            tokens,
            store,
        })
    }

    /// Close the token store
    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}
