//! Domain models

pub mod config;
pub mod credentials;
pub mod envelope;
pub mod session;

pub use config::{ApiConfig, Config, LogFormat, LoggingConfig, RotationPolicy, StorageConfig};
pub use credentials::{LoginCredentials, RegisterRequest, RegistrationRole};
pub use envelope::{ResponseEnvelope, SUCCESS_CODE};
pub use session::{LoginSession, RegistrationOutcome};
