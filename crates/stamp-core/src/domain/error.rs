//! Domain errors: validation and parameter-resolution failures.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All variants are raised *before* any filesystem, history, or
/// version-control side effect, so a domain error always means the target
/// project is untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Base name contains characters outside the identifier-safe set.
    #[error("Invalid base name '{name}': only letters and digits are allowed")]
    InvalidBaseName { name: String },

    /// An override names a parameter the module never declared.
    #[error("Unknown parameter '{key}' for module '{module}'")]
    UnknownParameter { key: String, module: String },

    /// An override value does not fit the declared parameter type.
    #[error("Invalid value '{value}' for parameter '{key}': {reason}")]
    InvalidParameterValue {
        key: String,
        value: String,
        reason: String,
    },

    /// A persisted history sequence is not strictly increasing.
    #[error("Corrupt history: entry {position} has sequence {found}, expected {expected}")]
    CorruptHistory {
        position: usize,
        found: u64,
        expected: u64,
    },
}

impl DomainError {
    /// Error category for CLI display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidBaseName { .. }
            | Self::UnknownParameter { .. }
            | Self::InvalidParameterValue { .. } => ErrorCategory::Validation,
            Self::CorruptHistory { .. } => ErrorCategory::Internal,
        }
    }
}
