//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain-rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ModuleSlug;
use crate::error::ErrorCategory;

/// Errors that occur while driving the apply pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The requested slug is absent from the module catalog.
    #[error("Module '{slug}' not found")]
    ModuleNotFound { slug: ModuleSlug },

    /// The module's transformation failed while mutating the project.
    /// Partial filesystem changes are possible and are not rolled back here.
    #[error("Applying module '{slug}' failed: {reason}")]
    ModuleApplicationFailed { slug: ModuleSlug, reason: String },

    /// The history ledger could not be read or appended to.
    #[error("History error for {path}: {reason}")]
    HistoryStoreFailed { path: PathBuf, reason: String },

    /// The commit after a successful apply could not be created.
    /// The apply itself stands: the history entry was already recorded.
    #[error("Commit failed for {path}: {reason}")]
    CommitFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModuleNotFound { .. } => ErrorCategory::NotFound,
            Self::ModuleApplicationFailed { .. } => ErrorCategory::Application,
            Self::HistoryStoreFailed { .. } => ErrorCategory::Application,
            Self::CommitFailed { .. } => ErrorCategory::Commit,
        }
    }
}
