//! Commit gating.
//!
//! The commit flag is genuinely tri-state: explicitly requested, explicitly
//! refused, or unset. "Unset" carries its own resolution rule (commit by
//! default), so it is modelled as a variant rather than folded into a bool at
//! parse time.

/// Whether one apply invocation should end in a version-control commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommitPolicy {
    /// No flag given: fall back to the default, which is to commit.
    #[default]
    Unset,
    /// `--commit` given.
    Always,
    /// `--no-commit` given.
    Never,
}

impl CommitPolicy {
    /// Derive the policy from the two mutually exclusive CLI flags.
    pub fn from_flags(commit: bool, no_commit: bool) -> Self {
        match (commit, no_commit) {
            (true, _) => Self::Always,
            (_, true) => Self::Never,
            (false, false) => Self::Unset,
        }
    }

    /// Resolve the tri-state into a decision.
    pub fn should_commit(self) -> bool {
        match self {
            Self::Unset | Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Deterministic commit message for an applied module.
pub fn commit_message(slug: &crate::domain::ModuleSlug) -> String {
    format!("Apply module: {slug}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModuleSlug;

    #[test]
    fn unset_defaults_to_commit() {
        assert!(CommitPolicy::Unset.should_commit());
    }

    #[test]
    fn explicit_flags_win() {
        assert!(CommitPolicy::Always.should_commit());
        assert!(!CommitPolicy::Never.should_commit());
    }

    #[test]
    fn from_flags_mapping() {
        assert_eq!(CommitPolicy::from_flags(false, false), CommitPolicy::Unset);
        assert_eq!(CommitPolicy::from_flags(true, false), CommitPolicy::Always);
        assert_eq!(CommitPolicy::from_flags(false, true), CommitPolicy::Never);
    }

    #[test]
    fn message_is_deterministic() {
        assert_eq!(commit_message(&ModuleSlug::new("init")), "Apply module: init");
    }
}
