//! Application services.

pub mod apply_service;

pub use apply_service::{ApplyReport, ApplyRequest, ApplyService, CommitOutcome};
