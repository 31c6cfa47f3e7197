//! In-memory version-control adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use stamp_core::application::ApplicationError;
use stamp_core::application::ports::VersionControl;
use stamp_core::error::StampResult;

/// Records commit requests instead of touching git.
///
/// Clones share the same underlying log, so a test can keep a handle while
/// the service owns the boxed port.
#[derive(Debug, Clone, Default)]
pub struct MemoryVersionControl {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    commits: HashMap<PathBuf, Vec<String>>,
    fail_next: bool,
}

impl MemoryVersionControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit messages recorded for a project path, in order.
    pub fn messages(&self, project_path: &Path) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .commits
            .get(project_path)
            .cloned()
            .unwrap_or_default()
    }

    /// Make the next commit attempt fail (testing helper).
    pub fn fail_next_commit(&self) {
        self.inner.lock().unwrap().fail_next = true;
    }
}

impl VersionControl for MemoryVersionControl {
    fn commit(&self, project_path: &Path, message: &str) -> StampResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_next {
            inner.fail_next = false;
            return Err(ApplicationError::CommitFailed {
                path: project_path.to_path_buf(),
                reason: "simulated commit failure".into(),
            }
            .into());
        }
        inner
            .commits
            .entry(project_path.to_path_buf())
            .or_default()
            .push(message.to_owned());
        Ok(())
    }

    fn has_commits(&self, project_path: &Path) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.commits.get(project_path).is_some_and(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commits_per_path() {
        let vcs = MemoryVersionControl::new();
        let path = Path::new("/a");

        assert!(!vcs.has_commits(path));
        vcs.commit(path, "Apply module: init").unwrap();

        assert!(vcs.has_commits(path));
        assert!(!vcs.has_commits(Path::new("/b")));
        assert_eq!(vcs.messages(path), ["Apply module: init"]);
    }

    #[test]
    fn clones_share_the_log() {
        let vcs = MemoryVersionControl::new();
        let observer = vcs.clone();
        vcs.commit(Path::new("/p"), "m").unwrap();
        assert!(observer.has_commits(Path::new("/p")));
    }

    #[test]
    fn fail_next_commit_fails_once() {
        let vcs = MemoryVersionControl::new();
        vcs.fail_next_commit();
        assert!(vcs.commit(Path::new("/p"), "m").is_err());
        assert!(vcs.commit(Path::new("/p"), "m").is_ok());
    }
}
