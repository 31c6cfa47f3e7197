//! Built-in module catalog.
//!
//! Modules are registered once at construction and never change for the life
//! of the process. Each module is a [`ProjectModule`] implementation that
//! writes files under the project path from its resolved properties.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use stamp_core::application::ports::{ModuleCatalog, ModuleInfo, ProjectModule};
use stamp_core::application::ApplicationError;
use stamp_core::domain::ModuleSlug;
use stamp_core::error::{StampError, StampResult};

mod init;
mod prettier;

pub use init::InitModule;
pub use prettier::PrettierModule;

/// Catalog of the modules compiled into the binary.
pub struct BuiltinCatalog {
    modules: Vec<Arc<dyn ProjectModule>>,
}

impl BuiltinCatalog {
    /// Catalog with all built-in modules registered, in listing order.
    pub fn new() -> Self {
        Self {
            modules: vec![
                Arc::new(InitModule::new()),
                Arc::new(PrettierModule::new()),
            ],
        }
    }

    /// Empty catalog; listing it is valid and yields nothing.
    pub fn empty() -> Self {
        Self {
            modules: Vec::new(),
        }
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleCatalog for BuiltinCatalog {
    fn list(&self) -> Vec<ModuleInfo> {
        self.modules
            .iter()
            .map(|m| ModuleInfo {
                slug: m.slug(),
                description: m.description().to_owned(),
            })
            .collect()
    }

    fn find(&self, slug: &ModuleSlug) -> Option<Arc<dyn ProjectModule>> {
        let found = self.modules.iter().find(|m| m.slug() == *slug).cloned();
        debug!(%slug, found = found.is_some(), "Catalog lookup");
        found
    }
}

/// Write one generated file under the project path, creating parent
/// directories as needed. I/O failures surface with the failing path and
/// cause preserved.
pub(crate) fn write_project_file(
    slug: &ModuleSlug,
    project_path: &Path,
    relative: &str,
    content: &str,
) -> StampResult<()> {
    let target = project_path.join(relative);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|e| apply_error(slug, relative, "create", e))?;
    }
    std::fs::write(&target, content).map_err(|e| apply_error(slug, relative, "write", e))?;
    debug!(module = %slug, file = relative, "File generated");
    Ok(())
}

fn apply_error(slug: &ModuleSlug, relative: &str, verb: &str, e: std::io::Error) -> StampError {
    ApplicationError::ModuleApplicationFailed {
        slug: slug.clone(),
        reason: format!("failed to {verb} {relative}: {e}"),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
