//! Infrastructure adapters for Stamp.
//!
//! This crate implements the ports defined in `stamp-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod history;
pub mod vcs;

// Re-export commonly used adapters
pub use catalog::BuiltinCatalog;
pub use history::JsonFileHistory;
pub use vcs::{GitVersionControl, MemoryVersionControl};
