//! Application layer: orchestration of the apply pipeline.
//!
//! The domain layer holds the rules; this layer sequences them and talks to
//! the outside world exclusively through ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{ApplyReport, ApplyRequest, ApplyService, CommitOutcome};
