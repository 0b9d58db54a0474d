//! Domain layer for the gradebook login client
//!
//! Models for credentials and the server's response envelope, the port
//! traits infrastructure adapters implement, and the service-level errors.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{LoginError, RegistrationError};
