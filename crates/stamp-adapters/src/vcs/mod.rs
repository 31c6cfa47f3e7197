//! Version-control adapters.

pub mod git;
pub mod memory;

pub use git::GitVersionControl;
pub use memory::MemoryVersionControl;
