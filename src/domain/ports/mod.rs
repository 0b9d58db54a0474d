//! Port interfaces implemented by the infrastructure layer
//!
//! Services depend only on these traits so tests can substitute in-memory
//! or scripted adapters for the real HTTP client and storage.

pub mod auth_transport;
pub mod errors;
pub mod key_value_store;

pub use auth_transport::AuthTransport;
pub use errors::{StorageError, TransportError};
pub use key_value_store::KeyValueStore;
