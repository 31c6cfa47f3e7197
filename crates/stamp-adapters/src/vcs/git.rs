//! Git adapter shelling out to the `git` binary.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use stamp_core::application::ApplicationError;
use stamp_core::application::ports::VersionControl;
use stamp_core::error::{StampError, StampResult};

/// Production version-control adapter.
///
/// Commits stage the whole working tree. The repository is initialised on
/// first commit when the project is not a git repository yet. Committer
/// identity is pinned on the command line so commits succeed on machines
/// without a global git config.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitVersionControl;

impl GitVersionControl {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, project_path: &Path, operation: &str, args: &[&str]) -> StampResult<()> {
        debug!(project = %project_path.display(), ?args, "Running git");
        let output = Command::new("git")
            .arg("-C")
            .arg(project_path)
            .args(args)
            .output()
            .map_err(|e| commit_error(project_path, format!("failed to run git: {e}")))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(commit_error(
                project_path,
                format!(
                    "git {operation} exited with {}: {}",
                    output.status,
                    stderr.trim()
                ),
            ))
        }
    }

    fn is_repository(&self, project_path: &Path) -> bool {
        git_succeeds(project_path, &["rev-parse", "--git-dir"])
    }
}

impl VersionControl for GitVersionControl {
    fn commit(&self, project_path: &Path, message: &str) -> StampResult<()> {
        if !self.is_repository(project_path) {
            self.run(project_path, "init", &["init"])?;
        }
        self.run(project_path, "add", &["add", "-A"])?;
        self.run(
            project_path,
            "commit",
            &[
                "-c",
                "user.name=stamp",
                "-c",
                "user.email=stamp@localhost",
                "commit",
                "--allow-empty",
                "-m",
                message,
            ],
        )
    }

    fn has_commits(&self, project_path: &Path) -> bool {
        git_succeeds(project_path, &["rev-parse", "--verify", "HEAD"])
    }
}

fn git_succeeds(project_path: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(project_path)
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn commit_error(project_path: &Path, reason: String) -> StampError {
    ApplicationError::CommitFailed {
        path: project_path.to_path_buf(),
        reason,
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
