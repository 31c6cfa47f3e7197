//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stamp-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   infrastructure
//!   - `ModuleCatalog` / `ProjectModule`: what modules exist and how they
//!     transform a project directory
//!   - `HistoryStore`: durable append-only ledger per project path
//!   - `VersionControl`: commit creation
//!   - `ProgressSink`: cosmetic progress reporting
//!
//! - **Driving (Input) Ports**: the CLI layer calls `ApplyService` directly.

use std::path::Path;
use std::sync::Arc;

use crate::domain::{
    AppliedModule, ModuleParameters, ModuleSlug, ProjectHistory, ResolvedProperties,
};
use crate::error::StampResult;

/// Slug and description pair for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub slug: ModuleSlug,
    pub description: String,
}

/// One named transformation recipe.
///
/// Implementations mutate the project directory in [`ProjectModule::apply`];
/// they never decide whether to commit and never touch the history ledger.
pub trait ProjectModule: Send + Sync {
    /// Catalog identity.
    fn slug(&self) -> ModuleSlug;

    /// One-line human-readable description for `stamp list`.
    fn description(&self) -> &str;

    /// Declared parameter keys with their default values.
    fn parameters(&self) -> &ModuleParameters;

    /// Apply the transformation to `project_path` with fully resolved
    /// properties. Synchronous and side-effecting; underlying I/O failures
    /// must surface with their cause, never be swallowed.
    fn apply(&self, project_path: &Path, properties: &ResolvedProperties) -> StampResult<()>;
}

/// Port for module lookup and listing.
///
/// Implemented by:
/// - `stamp_adapters::BuiltinCatalog` (production)
pub trait ModuleCatalog: Send + Sync {
    /// All known modules, in a stable listing order.
    fn list(&self) -> Vec<ModuleInfo>;

    /// Look a module up by slug. `None` when absent.
    fn find(&self, slug: &ModuleSlug) -> Option<Arc<dyn ProjectModule>>;
}

/// Port for the per-project history ledger.
///
/// Implemented by:
/// - `stamp_adapters::JsonFileHistory` (production)
///
/// ## Design Notes
///
/// - Entries are keyed by project path and must survive process exit.
/// - Append order is application order; `load` must reject a persisted log
///   whose sequence numbers are out of order.
/// - Not safe under concurrent writers to one project path; callers are
///   expected to be the single writer.
pub trait HistoryStore: Send + Sync {
    /// Append one entry for a successful apply.
    fn append(&self, project_path: &Path, applied: &AppliedModule) -> StampResult<()>;

    /// The full ordered history for a path; empty when never written.
    fn load(&self, project_path: &Path) -> StampResult<ProjectHistory>;
}

/// Port for version-control operations.
///
/// Implemented by:
/// - `stamp_adapters::GitVersionControl` (production)
/// - `stamp_adapters::MemoryVersionControl` (testing)
pub trait VersionControl: Send + Sync {
    /// Create a commit of the working tree with the given message,
    /// initialising the repository first when needed.
    fn commit(&self, project_path: &Path, message: &str) -> StampResult<()>;

    /// Whether the repository at `project_path` has at least one commit.
    /// Used by tests and observers, not by the pipeline itself.
    fn has_commits(&self, project_path: &Path) -> bool;
}

/// Fire-and-forget progress reporting.
///
/// Purely cosmetic: the pipeline never reads anything back from this sink
/// and never bases control flow on it.
pub trait ProgressSink {
    fn show(&self, message: &str);
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}
