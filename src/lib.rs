//! gradebook-auth - login client for the gradebook backend
//!
//! Posts credentials to the backend's login endpoint, validates the
//! `{ code, msg, data }` response envelope and persists the returned
//! credential token in a key-value store for later authenticated requests.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and port traits
//! - **Service Layer** (`services`): Login, registration and token access
//! - **Infrastructure Layer** (`infrastructure`): HTTP transport, storage, config, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gradebook_auth::{HttpAuthTransport, HttpClientConfig, LoginCredentials, LoginService, SqliteKeyValueStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let transport = Arc::new(HttpAuthTransport::new(HttpClientConfig::default())?);
//!     let store = Arc::new(SqliteKeyValueStore::open(".gradebook/storage.db").await?);
//!     let session = LoginService::new(transport, store)
//!         .login(&LoginCredentials::new("alice", "secret"))
//!         .await?;
//!     println!("logged in as {:?}", session.role);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, LoginCredentials, LoginSession, RegisterRequest, RegistrationOutcome,
    RegistrationRole, ResponseEnvelope,
};
pub use domain::ports::{AuthTransport, KeyValueStore, StorageError, TransportError};
pub use domain::{LoginError, RegistrationError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::http::{HttpAuthTransport, HttpClientConfig};
pub use infrastructure::storage::{InMemoryKeyValueStore, SqliteKeyValueStore};
pub use services::{LoginService, RegistrationService, TokenService};
