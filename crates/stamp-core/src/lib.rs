//! Stamp Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stamp
//! module-application tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            stamp-cli (CLI)              │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ApplyService)               │
//! │    Validate → Resolve → Apply →         │
//! │       Record → Commit gate              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (ModuleCatalog, HistoryStore,          │
//! │   VersionControl, ProgressSink)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     stamp-adapters (Infrastructure)     │
//! │  (BuiltinCatalog, JsonFileHistory,      │
//! │   GitVersionControl, ...)               │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ModuleSlug, ResolvedProperties,       │
//! │   ProjectHistory, CommitPolicy)         │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Root error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplyReport, ApplyRequest, ApplyService, CommitOutcome,
        ports::{HistoryStore, ModuleCatalog, ModuleInfo, ProgressSink, ProjectModule, VersionControl},
    };
    pub use crate::domain::{
        AppliedModule, CommitPolicy, HistoryEntry, ModuleParameters, ModuleSlug, ParameterKey,
        ProjectHistory, PropertyValue, ResolvedProperties,
    };
    pub use crate::error::{StampError, StampResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
