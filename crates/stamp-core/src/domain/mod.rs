//! Domain layer: pure types and rules for module application.
//!
//! Nothing in this module performs I/O. The filesystem, git, and the history
//! file all live behind ports in `crate::application::ports` and are
//! implemented by `stamp-adapters`.

pub mod commit;
pub mod error;
pub mod history;
pub mod module;
pub mod properties;
pub mod validation;

pub use commit::CommitPolicy;
pub use error::DomainError;
pub use history::{AppliedModule, HistoryEntry, ProjectHistory};
pub use module::{ModuleParameters, ModuleSlug, ParameterKey, PropertyValue};
pub use properties::ResolvedProperties;
pub use validation::validate_base_name;
