//! Unified error handling for Stamp Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with categories the CLI can map to exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stamp Core operations.
///
/// This enum wraps all possible errors that can occur when using stamp-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum StampError {
    /// Errors from the domain layer (validation and resolution failures).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StampError {
    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Application,
    Commit,
    Internal,
}

/// Convenient result type alias.
pub type StampResult<T> = Result<T, StampError>;
