//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stamp",
    bin_name = "stamp",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Apply parameterized modules to a project",
    long_about = "Stamp applies named, parameterized code-generation modules \
                  to a target project directory, records what was applied, \
                  and optionally commits the result.",
    after_help = "EXAMPLES:\n\
        \x20 stamp list\n\
        \x20 stamp apply init --project-path ./my-app\n\
        \x20 stamp apply init --package-name com.newcompany.newapp --no-commit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available modules.
    #[command(
        visible_alias = "ls",
        about = "List available module slugs and descriptions"
    )]
    List,

    /// Apply a module to a project directory.
    #[command(
        about = "Apply a module to a project",
        after_help = "EXAMPLES:\n\
            \x20 stamp apply init\n\
            \x20 stamp apply init --project-path ./my-app --base-name myApp\n\
            \x20 stamp apply prettier --indentation 4 --no-commit"
    )]
    Apply(ApplyArgs),
}

// ── apply ─────────────────────────────────────────────────────────────────────

/// Arguments for `stamp apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Module to apply, e.g. `init`.
    #[arg(value_name = "MODULE_SLUG", help = "Slug of the module to apply")]
    pub slug: String,

    /// Target project directory.
    #[arg(
        long = "project-path",
        value_name = "PATH",
        default_value = ".",
        help = "Project directory to apply the module to"
    )]
    pub project_path: PathBuf,

    /// Commit the result (the default when neither flag is given).
    #[arg(
        long = "commit",
        conflicts_with = "no_commit",
        help = "Commit the applied changes (default)"
    )]
    pub commit: bool,

    /// Leave the working tree uncommitted.
    #[arg(long = "no-commit", help = "Do not commit the applied changes")]
    pub no_commit: bool,

    /// Override the `packageName` parameter.
    #[arg(long = "package-name", value_name = "NAME", help = "Package name")]
    pub package_name: Option<String>,

    /// Override the `projectName` parameter.
    #[arg(long = "project-name", value_name = "NAME", help = "Project name")]
    pub project_name: Option<String>,

    /// Override the `baseName` parameter (letters and digits only).
    #[arg(long = "base-name", value_name = "NAME", help = "Base name")]
    pub base_name: Option<String>,

    /// Override the `indentSize` parameter.
    #[arg(
        long = "indentation",
        value_name = "INT",
        help = "Indentation size in spaces"
    )]
    pub indentation: Option<i64>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
