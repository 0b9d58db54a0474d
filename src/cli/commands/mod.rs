//! CLI command implementations.

pub mod init;
pub mod login;
pub mod register;
pub mod token;
