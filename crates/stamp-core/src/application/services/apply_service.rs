//! Apply Service - main application orchestrator.
//!
//! This service coordinates the module-application pipeline:
//! 1. Validate caller input (base name)
//! 2. Look the module up in the catalog
//! 3. Resolve overrides against declared defaults
//! 4. Apply the module's transformation to the project directory
//! 5. Record the application in the history ledger
//! 6. Gate the optional version-control commit
//!
//! Steps run in strict sequence on the calling thread; a failure at any step
//! stops the pipeline. Steps 1-3 have no side effects, so their failures
//! leave the project untouched.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{HistoryStore, ModuleCatalog, ModuleInfo, VersionControl},
    },
    domain::{
        AppliedModule, CommitPolicy, ModuleSlug, ParameterKey, ProjectHistory, PropertyValue,
        ResolvedProperties, commit::commit_message, module::keys, validate_base_name,
    },
    error::StampResult,
};

/// One validated-and-consumed request to apply a module.
#[derive(Debug, Clone)]
pub struct ApplyRequest {
    pub project_path: PathBuf,
    pub slug: ModuleSlug,
    /// Caller-supplied overrides; may be empty. Later entries win on
    /// repeated keys.
    pub overrides: Vec<(ParameterKey, PropertyValue)>,
    pub commit: CommitPolicy,
}

/// What happened at the commit gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    Skipped,
}

/// Result of a successful apply.
#[derive(Debug, Clone)]
pub struct ApplyReport {
    pub slug: ModuleSlug,
    pub properties: ResolvedProperties,
    pub commit: CommitOutcome,
}

/// Main module-application service.
///
/// Owns the driven ports; the CLI constructs it once per invocation with
/// concrete adapters.
pub struct ApplyService {
    catalog: Box<dyn ModuleCatalog>,
    history: Box<dyn HistoryStore>,
    version_control: Box<dyn VersionControl>,
}

impl ApplyService {
    pub fn new(
        catalog: Box<dyn ModuleCatalog>,
        history: Box<dyn HistoryStore>,
        version_control: Box<dyn VersionControl>,
    ) -> Self {
        Self {
            catalog,
            history,
            version_control,
        }
    }

    /// Apply one module to one project directory.
    ///
    /// Not idempotent by design: applying the same module twice produces two
    /// history entries, and modules may overwrite their prior output.
    #[instrument(
        skip_all,
        fields(module = %request.slug, project = %request.project_path.display())
    )]
    pub fn apply(&self, request: ApplyRequest) -> StampResult<ApplyReport> {
        // 1. Validate before any side effect.
        if let Some(base_name) = text_override(&request.overrides, keys::BASE_NAME) {
            validate_base_name(base_name)?;
        }

        // 2. Module lookup.
        let module =
            self.catalog
                .find(&request.slug)
                .ok_or_else(|| ApplicationError::ModuleNotFound {
                    slug: request.slug.clone(),
                })?;

        // 3. Resolve defaults + overrides.
        let properties = ResolvedProperties::resolve(
            &request.slug,
            module.parameters(),
            &request.overrides,
        )?;
        info!(parameters = properties.len(), "Properties resolved");

        // 4. Apply the transformation.
        module.apply(&request.project_path, &properties)?;
        let applied = AppliedModule::new(request.slug.clone(), properties);
        info!("Module applied");

        // 5. Record. Never skipped for a successful apply.
        self.history.append(&request.project_path, &applied)?;

        // 6. Commit gate, strictly after a successful apply. A commit failure
        //    surfaces as an error while the history entry stands.
        let commit = if request.commit.should_commit() {
            let message = commit_message(&applied.slug);
            match self.version_control.commit(&request.project_path, &message) {
                Ok(()) => {
                    info!(%message, "Changes committed");
                    CommitOutcome::Committed
                }
                Err(e) => {
                    warn!(error = %e, "Module applied and recorded, but commit failed");
                    return Err(e);
                }
            }
        } else {
            info!("Commit skipped, working tree left uncommitted");
            CommitOutcome::Skipped
        };

        Ok(ApplyReport {
            slug: applied.slug,
            properties: applied.properties,
            commit,
        })
    }

    /// All known modules for `stamp list`.
    pub fn list_modules(&self) -> Vec<ModuleInfo> {
        self.catalog.list()
    }

    /// Read-only view of a project's history.
    pub fn history(&self, project_path: &Path) -> StampResult<ProjectHistory> {
        self.history.load(project_path)
    }

    /// Folded last-write-wins view of a project's properties.
    pub fn latest_properties(&self, project_path: &Path) -> StampResult<ResolvedProperties> {
        Ok(self.history.load(project_path)?.latest_properties())
    }
}

/// Textual override value for `key`, if present. Later entries win.
fn text_override<'a>(
    overrides: &'a [(ParameterKey, PropertyValue)],
    key: &str,
) -> Option<&'a str> {
    overrides
        .iter()
        .rev()
        .find(|(k, _)| k.as_str() == key)
        .and_then(|(_, v)| v.as_text())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use crate::application::ports::ProjectModule;
    use crate::domain::{DomainError, HistoryEntry, ModuleParameters, module::keys};
    use crate::error::StampError;

    // Hand-rolled fakes: the ports are small enough that a mocking framework
    // would be more code than the fakes themselves.

    struct FakeModule {
        parameters: ModuleParameters,
        fail_with: Option<String>,
    }

    impl FakeModule {
        fn init() -> Self {
            Self {
                parameters: ModuleParameters::new()
                    .declare(keys::PACKAGE_NAME, "com.mycompany.myapp")
                    .declare(keys::PROJECT_NAME, "JHipster Sample Application")
                    .declare(keys::BASE_NAME, "jhipsterSampleApplication")
                    .declare(keys::INDENT_SIZE, 2),
                fail_with: None,
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                fail_with: Some(reason.into()),
                ..Self::init()
            }
        }
    }

    impl ProjectModule for FakeModule {
        fn slug(&self) -> ModuleSlug {
            ModuleSlug::new("init")
        }

        fn description(&self) -> &str {
            "Init project"
        }

        fn parameters(&self) -> &ModuleParameters {
            &self.parameters
        }

        fn apply(&self, _path: &Path, _properties: &ResolvedProperties) -> StampResult<()> {
            match &self.fail_with {
                Some(reason) => Err(ApplicationError::ModuleApplicationFailed {
                    slug: self.slug(),
                    reason: reason.clone(),
                }
                .into()),
                None => Ok(()),
            }
        }
    }

    struct FakeCatalog {
        module: Arc<dyn ProjectModule>,
    }

    impl ModuleCatalog for FakeCatalog {
        fn list(&self) -> Vec<ModuleInfo> {
            vec![ModuleInfo {
                slug: self.module.slug(),
                description: self.module.description().to_owned(),
            }]
        }

        fn find(&self, slug: &ModuleSlug) -> Option<Arc<dyn ProjectModule>> {
            (*slug == self.module.slug()).then(|| Arc::clone(&self.module))
        }
    }

    #[derive(Clone, Default)]
    struct FakeHistory {
        entries: Arc<Mutex<HashMap<PathBuf, Vec<HistoryEntry>>>>,
    }

    impl HistoryStore for FakeHistory {
        fn append(&self, project_path: &Path, applied: &AppliedModule) -> StampResult<()> {
            let mut map = self.entries.lock().unwrap();
            let entries = map.entry(project_path.to_path_buf()).or_default();
            let sequence = entries.len() as u64 + 1;
            entries.push(HistoryEntry::new(sequence, applied));
            Ok(())
        }

        fn load(&self, project_path: &Path) -> StampResult<ProjectHistory> {
            let map = self.entries.lock().unwrap();
            let entries = map.get(project_path).cloned().unwrap_or_default();
            Ok(ProjectHistory::from_entries(entries)?)
        }
    }

    #[derive(Clone, Default)]
    struct FakeVcs {
        commits: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl VersionControl for FakeVcs {
        fn commit(&self, project_path: &Path, message: &str) -> StampResult<()> {
            if self.fail {
                return Err(ApplicationError::CommitFailed {
                    path: project_path.to_path_buf(),
                    reason: "refused".into(),
                }
                .into());
            }
            self.commits.lock().unwrap().push(message.to_owned());
            Ok(())
        }

        fn has_commits(&self, _project_path: &Path) -> bool {
            !self.commits.lock().unwrap().is_empty()
        }
    }

    fn service_with(
        module: FakeModule,
        history: FakeHistory,
        vcs: FakeVcs,
    ) -> ApplyService {
        ApplyService::new(
            Box::new(FakeCatalog {
                module: Arc::new(module),
            }),
            Box::new(history),
            Box::new(vcs),
        )
    }

    fn request(slug: &str, overrides: Vec<(ParameterKey, PropertyValue)>) -> ApplyRequest {
        ApplyRequest {
            project_path: PathBuf::from("/project"),
            slug: ModuleSlug::new(slug),
            overrides,
            commit: CommitPolicy::Unset,
        }
    }

    #[test]
    fn successful_apply_records_and_commits_by_default() {
        let history = FakeHistory::default();
        let vcs = FakeVcs::default();
        let service = service_with(FakeModule::init(), history.clone(), vcs.clone());

        let report = service.apply(request("init", vec![])).unwrap();

        assert_eq!(report.commit, CommitOutcome::Committed);
        assert_eq!(
            vcs.commits.lock().unwrap().as_slice(),
            ["Apply module: init"]
        );
        let latest = service.latest_properties(Path::new("/project")).unwrap();
        assert_eq!(
            latest.get(keys::PACKAGE_NAME).unwrap().as_text(),
            Some("com.mycompany.myapp")
        );
    }

    #[test]
    fn no_commit_policy_skips_the_gate() {
        let vcs = FakeVcs::default();
        let service = service_with(FakeModule::init(), FakeHistory::default(), vcs.clone());

        let mut req = request("init", vec![]);
        req.commit = CommitPolicy::Never;
        let report = service.apply(req).unwrap();

        assert_eq!(report.commit, CommitOutcome::Skipped);
        assert!(vcs.commits.lock().unwrap().is_empty());
    }

    #[test]
    fn invalid_base_name_aborts_before_any_side_effect() {
        let history = FakeHistory::default();
        let vcs = FakeVcs::default();
        let service = service_with(FakeModule::init(), history.clone(), vcs.clone());

        let overrides = vec![(
            ParameterKey::new(keys::BASE_NAME),
            PropertyValue::text("my.New@pp"),
        )];
        let err = service.apply(request("init", overrides)).unwrap_err();

        assert!(matches!(
            err,
            StampError::Domain(DomainError::InvalidBaseName { .. })
        ));
        assert!(service.history(Path::new("/project")).unwrap().is_empty());
        assert!(vcs.commits.lock().unwrap().is_empty());
    }

    #[test]
    fn unknown_module_is_not_found() {
        let service = service_with(
            FakeModule::init(),
            FakeHistory::default(),
            FakeVcs::default(),
        );

        let err = service.apply(request("missing", vec![])).unwrap_err();
        assert!(matches!(
            err,
            StampError::Application(ApplicationError::ModuleNotFound { .. })
        ));
    }

    #[test]
    fn failed_application_leaves_no_history_entry() {
        let history = FakeHistory::default();
        let service = service_with(
            FakeModule::failing("disk full"),
            history.clone(),
            FakeVcs::default(),
        );

        let err = service.apply(request("init", vec![])).unwrap_err();
        assert!(matches!(
            err,
            StampError::Application(ApplicationError::ModuleApplicationFailed { .. })
        ));
        assert!(service.history(Path::new("/project")).unwrap().is_empty());
    }

    #[test]
    fn commit_failure_surfaces_but_history_entry_stands() {
        let history = FakeHistory::default();
        let vcs = FakeVcs {
            fail: true,
            ..FakeVcs::default()
        };
        let service = service_with(FakeModule::init(), history.clone(), vcs);

        let err = service.apply(request("init", vec![])).unwrap_err();

        assert!(matches!(
            err,
            StampError::Application(ApplicationError::CommitFailed { .. })
        ));
        assert_eq!(service.history(Path::new("/project")).unwrap().len(), 1);
    }

    #[test]
    fn two_applies_fold_to_the_latest_override() {
        let service = service_with(
            FakeModule::init(),
            FakeHistory::default(),
            FakeVcs::default(),
        );

        service.apply(request("init", vec![])).unwrap();
        service
            .apply(request(
                "init",
                vec![(
                    ParameterKey::new(keys::PACKAGE_NAME),
                    PropertyValue::text("com.newcompany.newapp"),
                )],
            ))
            .unwrap();

        let latest = service.latest_properties(Path::new("/project")).unwrap();
        assert_eq!(
            latest.get(keys::PACKAGE_NAME).unwrap().as_text(),
            Some("com.newcompany.newapp")
        );
        assert_eq!(
            latest.get(keys::PROJECT_NAME).unwrap().as_text(),
            Some("JHipster Sample Application")
        );
        assert_eq!(service.history(Path::new("/project")).unwrap().len(), 2);
    }

    #[test]
    fn list_modules_delegates_to_catalog() {
        let service = service_with(
            FakeModule::init(),
            FakeHistory::default(),
            FakeVcs::default(),
        );
        let modules = service.list_modules();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].slug.as_str(), "init");
        assert_eq!(modules[0].description, "Init project");
    }
}
