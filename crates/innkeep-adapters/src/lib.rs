//! Infrastructure adapters for Innkeep.
//!
//! This crate implements the ports defined in `innkeep-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod http;
pub mod memory;

// Re-export commonly used adapters
pub use http::HttpBackend;
pub use memory::InMemoryBackend;
