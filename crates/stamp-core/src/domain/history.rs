//! Per-project application history.
//!
//! The history is an append-only log: one [`HistoryEntry`] per successful
//! apply, never mutated or deleted. "Latest" queries are a left fold over the
//! ordered log — the full audit trail stays available while key lookups see
//! last-write-wins semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::module::ModuleSlug;
use crate::domain::properties::ResolvedProperties;

/// Descriptor of one successful module application.
///
/// Produced by the engine, consumed by the history ledger. This is the only
/// thing the ledger ever sees.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedModule {
    pub slug: ModuleSlug,
    pub properties: ResolvedProperties,
}

impl AppliedModule {
    pub fn new(slug: ModuleSlug, properties: ResolvedProperties) -> Self {
        Self { slug, properties }
    }
}

/// One immutable record in a project's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Position in application order, starting at 1, strictly increasing.
    pub sequence: u64,
    pub module: ModuleSlug,
    pub applied_at: DateTime<Utc>,
    pub properties: ResolvedProperties,
}

impl HistoryEntry {
    pub fn new(sequence: u64, applied: &AppliedModule) -> Self {
        Self {
            sequence,
            module: applied.slug.clone(),
            applied_at: Utc::now(),
            properties: applied.properties.clone(),
        }
    }
}

/// The full, ordered history of one project path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectHistory {
    entries: Vec<HistoryEntry>,
}

impl ProjectHistory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a history from persisted entries, rejecting out-of-order
    /// sequences. Replayed history must match application order exactly —
    /// an unordered log is corrupt, not reorderable.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Result<Self, DomainError> {
        for (position, entry) in entries.iter().enumerate() {
            let expected = position as u64 + 1;
            if entry.sequence != expected {
                return Err(DomainError::CorruptHistory {
                    position,
                    found: entry.sequence,
                    expected,
                });
            }
        }
        Ok(Self { entries })
    }

    /// The sequence number the next appended entry must carry.
    pub fn next_sequence(&self) -> u64 {
        self.entries.len() as u64 + 1
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold all entries in application order into a single property set,
    /// later entries overriding earlier ones key by key.
    pub fn latest_properties(&self) -> ResolvedProperties {
        self.entries
            .iter()
            .fold(ResolvedProperties::default(), |mut latest, entry| {
                for (key, value) in entry.properties.iter() {
                    latest.set(key.clone(), value.clone());
                }
                latest
            })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
