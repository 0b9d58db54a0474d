//! HTTP adapters

pub mod client;

pub use client::{HttpAuthTransport, HttpClientConfig};
