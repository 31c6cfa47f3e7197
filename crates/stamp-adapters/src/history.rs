//! JSON-file history ledger.
//!
//! Entries live in `<project>/.stamp/history.json` — co-located with the
//! project so the ledger survives process exit and travels with the project
//! directory. The file is a JSON array of entries in application order.
//!
//! Appends rewrite the file through a temp file + rename so a crash mid-write
//! never leaves a half-written ledger behind. This adapter assumes a single
//! writer per project path; concurrent writers are unsupported.

use std::path::{Path, PathBuf};

use tracing::debug;

use stamp_core::application::ApplicationError;
use stamp_core::application::ports::HistoryStore;
use stamp_core::domain::{AppliedModule, HistoryEntry, ProjectHistory};
use stamp_core::error::{StampError, StampResult};

const HISTORY_DIR: &str = ".stamp";
const HISTORY_FILE: &str = "history.json";

/// Durable, per-project, append-only history store.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileHistory;

impl JsonFileHistory {
    pub fn new() -> Self {
        Self
    }

    /// Location of the ledger for a project path.
    pub fn history_file(project_path: &Path) -> PathBuf {
        project_path.join(HISTORY_DIR).join(HISTORY_FILE)
    }

    fn read_entries(&self, project_path: &Path) -> StampResult<Vec<HistoryEntry>> {
        let file = Self::history_file(project_path);
        if !file.exists() {
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&file)
            .map_err(|e| history_error(project_path, format!("read failed: {e}")))?;
        serde_json::from_str(&raw)
            .map_err(|e| history_error(project_path, format!("malformed ledger: {e}")))
    }

    fn write_entries(&self, project_path: &Path, entries: &[HistoryEntry]) -> StampResult<()> {
        let file = Self::history_file(project_path);
        let dir = file.parent().expect("history file always has a parent");

        std::fs::create_dir_all(dir)
            .map_err(|e| history_error(project_path, format!("create {HISTORY_DIR}: {e}")))?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| history_error(project_path, format!("serialize: {e}")))?;

        let tmp = file.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| history_error(project_path, format!("write failed: {e}")))?;
        std::fs::rename(&tmp, &file)
            .map_err(|e| history_error(project_path, format!("rename failed: {e}")))?;
        Ok(())
    }
}

impl HistoryStore for JsonFileHistory {
    fn append(&self, project_path: &Path, applied: &AppliedModule) -> StampResult<()> {
        // Load-validate-append: replaying the existing log also verifies its
        // order before we extend it.
        let history = ProjectHistory::from_entries(self.read_entries(project_path)?)?;

        let mut entries = history.entries().to_vec();
        entries.push(HistoryEntry::new(history.next_sequence(), applied));
        self.write_entries(project_path, &entries)?;

        debug!(
            module = %applied.slug,
            sequence = entries.len(),
            project = %project_path.display(),
            "History entry recorded"
        );
        Ok(())
    }

    fn load(&self, project_path: &Path) -> StampResult<ProjectHistory> {
        Ok(ProjectHistory::from_entries(
            self.read_entries(project_path)?,
        )?)
    }
}

fn history_error(project_path: &Path, reason: String) -> StampError {
    ApplicationError::HistoryStoreFailed {
        path: project_path.to_path_buf(),
        reason,
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use stamp_core::domain::module::keys;
    use stamp_core::domain::{ModuleParameters, ModuleSlug, ResolvedProperties};

    fn applied(package_name: &str) -> AppliedModule {
        let parameters = ModuleParameters::new()
            .declare(keys::PACKAGE_NAME, "com.mycompany.myapp")
            .declare(keys::INDENT_SIZE, 2);
        let slug = ModuleSlug::new("init");
        let properties = ResolvedProperties::resolve(
            &slug,
            &parameters,
            &[(keys::PACKAGE_NAME.into(), package_name.into())],
        )
        .unwrap();
        AppliedModule::new(slug, properties)
    }

    #[test]
    fn load_on_fresh_project_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileHistory::new();
        assert!(store.load(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn append_is_durable_across_store_instances() {
        let dir = TempDir::new().unwrap();
        JsonFileHistory::new()
            .append(dir.path(), &applied("com.mycompany.myapp"))
            .unwrap();

        // A fresh adapter instance reads the same ledger back.
        let history = JsonFileHistory::new().load(dir.path()).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].sequence, 1);
        assert_eq!(history.entries()[0].module, ModuleSlug::new("init"));
    }

    #[test]
    fn entries_keep_application_order() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileHistory::new();
        store.append(dir.path(), &applied("first.pkg")).unwrap();
        store.append(dir.path(), &applied("second.pkg")).unwrap();

        let history = store.load(dir.path()).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[1].sequence, 2);
        assert_eq!(
            history
                .latest_properties()
                .get(keys::PACKAGE_NAME)
                .unwrap()
                .as_text(),
            Some("second.pkg")
        );
    }

    #[test]
    fn tampered_out_of_order_ledger_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileHistory::new();
        store.append(dir.path(), &applied("a.b")).unwrap();
        store.append(dir.path(), &applied("c.d")).unwrap();

        // Swap the two entries on disk.
        let file = JsonFileHistory::history_file(dir.path());
        let mut entries: Vec<HistoryEntry> =
            serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
        entries.swap(0, 1);
        std::fs::write(&file, serde_json::to_string(&entries).unwrap()).unwrap();

        assert!(store.load(dir.path()).is_err());
    }

    #[test]
    fn unparseable_ledger_is_an_error_not_a_reset() {
        let dir = TempDir::new().unwrap();
        let file = JsonFileHistory::history_file(dir.path());
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, "not json").unwrap();

        let store = JsonFileHistory::new();
        assert!(store.load(dir.path()).is_err());
        // Appending over a corrupt ledger must also refuse.
        assert!(store.append(dir.path(), &applied("x.y")).is_err());
    }
}
