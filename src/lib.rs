//! Repohub Repository Registry Service Library
//!
//! An HTTP/JSON service tracking references to external code
//! repositories in an in-memory collection.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::registry;
