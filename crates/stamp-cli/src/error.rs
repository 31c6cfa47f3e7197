//! Error handling for the Stamp CLI.
//!
//! Provides structured errors with user-friendly messages, actionable
//! suggestions, and exit-code mapping.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use stamp_core::error::{ErrorCategory, StampError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
///
/// Usage errors (bad flags, missing positional, no subcommand) never reach
/// this type — clap reports them before dispatch, with exit code 2.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from the core pipeline.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("{0}")]
    Core(#[from] StampError),

    /// An I/O operation failed outside the pipeline.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => match core.category() {
                ErrorCategory::Validation => vec![
                    "Base names may contain letters and digits only".into(),
                    "Check the module's parameters with: stamp list".into(),
                ],
                ErrorCategory::NotFound => vec![
                    "List available modules: stamp list".into(),
                ],
                ErrorCategory::Commit => vec![
                    "The module was applied and recorded; only the commit failed".into(),
                    "Commit manually once the repository is in a committable state".into(),
                ],
                ErrorCategory::Application | ErrorCategory::Internal => vec![
                    "Check that the project path exists and is writable".into(),
                ],
            },
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Failure                              | Code |
    /// |--------------------------------------|------|
    /// | usage (handled by clap, not here)    |  2   |
    /// | validation / not found / application |  1   |
    /// | commit / internal                    |  1   |
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} {}\n", "\u{2717}".red().bold(), self.to_string().red()));

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }
        out
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Error: {self}\n"));

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("Suggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }
        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self {
            Self::Core(core) => match core.category() {
                ErrorCategory::Validation | ErrorCategory::NotFound => {
                    tracing::warn!("{core}");
                }
                ErrorCategory::Commit | ErrorCategory::Application | ErrorCategory::Internal => {
                    tracing::error!("{core}");
                }
            },
            Self::IoError { .. } => tracing::error!("{self}"),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {source}");
        }
    }
}
