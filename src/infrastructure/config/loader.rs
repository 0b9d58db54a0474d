//! Figment-based configuration loading

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// base_url lacks an http(s) scheme
    #[error("Invalid base_url: {0}. Must start with http:// or https://")]
    InvalidBaseUrl(String),

    /// An endpoint path is not absolute
    #[error("Invalid endpoint path for {field}: {path}. Must start with '/'")]
    InvalidEndpointPath { field: &'static str, path: String },

    /// Request timeout of zero
    #[error("Invalid timeout_secs: 0. Must be at least 1")]
    InvalidTimeout,

    /// No database path configured
    #[error("Database path cannot be empty")]
    EmptyDatabasePath,

    /// No storage key configured for the token
    #[error("Token key cannot be empty")]
    EmptyTokenKey,

    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .gradebook/config.yaml (project config), or `path` when given
    /// 3. .gradebook/local.yaml (project local overrides, optional; skipped with `path`)
    /// 4. Environment variables (GRADEBOOK_* prefix, `__` separates nested keys)
    pub fn load_with(path: Option<&Path>) -> Result<Config> {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let figment = match path {
            Some(path) => figment.merge(Yaml::file(path)),
            None => figment
                .merge(Yaml::file(".gradebook/config.yaml"))
                .merge(Yaml::file(".gradebook/local.yaml")),
        };

        let config: Config = figment
            .merge(Env::prefixed("GRADEBOOK_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let api = &config.api;
        if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(api.base_url.clone()));
        }

        for (field, path) in [
            ("login_path", &api.login_path),
            ("register_student_path", &api.register_student_path),
            ("register_teacher_path", &api.register_teacher_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidEndpointPath {
                    field,
                    path: path.clone(),
                });
            }
        }

        if api.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        if config.storage.database_path.trim().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        if config.storage.token_key.is_empty() {
            return Err(ConfigError::EmptyTokenKey);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::LogFormat;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.login_path, "/api/auth/login");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.storage.token_key, "authToken");
        assert_eq!(config.storage.token_prefix, "Bearer ");
        assert_eq!(config.logging.level, "info");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
api:
  base_url: https://grades.example.edu
  timeout_secs: 10
storage:
  database_path: /var/lib/gradebook/kv.db
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.api.base_url, "https://grades.example.edu");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.login_path, "/api/auth/login");
        assert_eq!(config.storage.database_path, "/var/lib/gradebook/kv.db");
        assert_eq!(config.storage.token_key, "authToken");
        assert_eq!(config.logging.format, LogFormat::Json);

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_load_with_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  base_url: http://10.0.0.5:9000").unwrap();

        let config = ConfigLoader::load_with(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.api.login_path, "/api/auth/login");
    }

    #[test]
    fn test_load_with_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  timeout_secs: 0").unwrap();

        let err = ConfigLoader::load_with(Some(file.path())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  base_url: http://from-file:8080").unwrap();

        temp_env::with_vars(
            [
                ("GRADEBOOK_API__BASE_URL", Some("http://from-env:8080")),
                ("GRADEBOOK_STORAGE__TOKEN_KEY", Some("customToken")),
            ],
            || {
                let config = ConfigLoader::load_with(Some(file.path())).unwrap();
                assert_eq!(config.api.base_url, "http://from-env:8080");
                assert_eq!(config.storage.token_key, "customToken");
            },
        );
    }

    #[test]
    fn test_validate_invalid_base_url() {
        let mut config = Config::default();
        config.api.base_url = "localhost:8080".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidBaseUrl(url) => assert_eq!(url, "localhost:8080"),
            other => panic!("Expected InvalidBaseUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_relative_login_path() {
        let mut config = Config::default();
        config.api.login_path = "api/auth/login".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::InvalidEndpointPath { field: "login_path", .. }
        ));
    }

    #[test]
    fn test_validate_empty_database_path() {
        let mut config = Config::default();
        config.storage.database_path = String::new();

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::EmptyDatabasePath
        ));
    }

    #[test]
    fn test_validate_empty_token_key() {
        let mut config = Config::default();
        config.storage.token_key = String::new();

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::EmptyTokenKey
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "verbose"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }
}
