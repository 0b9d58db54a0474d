//! Configuration model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Authentication backend configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Token storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Authentication backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ApiConfig {
    /// Scheme, host and port of the backend; endpoint paths are appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Login endpoint path
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Student registration endpoint path
    #[serde(default = "default_register_student_path")]
    pub register_student_path: String,

    /// Teacher registration endpoint path
    #[serde(default = "default_register_teacher_path")]
    pub register_teacher_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Path of the login endpoint
pub const DEFAULT_LOGIN_PATH: &str = "/api/auth/login";

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

fn default_register_student_path() -> String {
    "/api/auth/register/student".to_string()
}

fn default_register_teacher_path() -> String {
    "/api/auth/register/teacher".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            register_student_path: default_register_student_path(),
            register_teacher_path: default_register_teacher_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Token storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageConfig {
    /// Path to `SQLite` database file
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Key the credential token is stored under
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Prefix for the `Authorization` header value
    #[serde(default = "default_token_prefix")]
    pub token_prefix: String,
}

/// Storage key for the credential token
pub const DEFAULT_TOKEN_KEY: &str = "authToken";

/// Prefix the backend expects in front of the token
pub const DEFAULT_TOKEN_PREFIX: &str = "Bearer ";

fn default_database_path() -> String {
    ".gradebook/storage.db".to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_token_prefix() -> String {
    DEFAULT_TOKEN_PREFIX.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            token_key: default_token_key(),
            token_prefix: default_token_prefix(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output format
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for JSON log files (console only if unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

/// Console log format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Human-readable
    #[default]
    Pretty,
}

/// Log file rotation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    /// New file each day
    #[default]
    Daily,
    /// New file each hour
    Hourly,
    /// Single file
    Never,
}
