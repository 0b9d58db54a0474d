//! Key-value storage adapters
//!
//! - `SqliteKeyValueStore`: persistent, survives process restarts
//! - `InMemoryKeyValueStore`: process-local, used by tests and ephemeral runs

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;
