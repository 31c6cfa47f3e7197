//! Module identity and parameter declarations.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity, no behavior
//! beyond construction and display. What a module *does* to a project lives
//! behind the `ProjectModule` port; this file only describes how a module is
//! named and which parameters it declares.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── ModuleSlug ───────────────────────────────────────────────────────────────

/// Unique identifier of a module in the catalog, e.g. `"init"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleSlug(String);

impl ModuleSlug {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleSlug {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── ParameterKey ─────────────────────────────────────────────────────────────

/// Name of a declared module parameter, e.g. `"packageName"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterKey(String);

impl ParameterKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParameterKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Keys declared by the built-in modules.
///
/// Kept here rather than in the catalog so that the CLI and the resolver
/// agree on spelling without a string literal in every crate.
pub mod keys {
    pub const PACKAGE_NAME: &str = "packageName";
    pub const PROJECT_NAME: &str = "projectName";
    pub const BASE_NAME: &str = "baseName";
    pub const INDENT_SIZE: &str = "indentSize";
}

// ── PropertyValue ────────────────────────────────────────────────────────────

/// A parameter value: either free text or an integer.
///
/// Serialized untagged so the history file reads as plain JSON
/// (`"com.mycompany.myapp"`, `2`) rather than enum wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Integer(i64),
    Text(String),
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

// ── ModuleParameters ─────────────────────────────────────────────────────────

/// The parameters a module declares, with their default values.
///
/// Declaration order is preserved: resolved properties display in the order
/// the module declared them, regardless of which were overridden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleParameters {
    defaults: Vec<(ParameterKey, PropertyValue)>,
}

impl ModuleParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a parameter with its default value. Builder-style.
    pub fn declare(mut self, key: impl Into<ParameterKey>, default: impl Into<PropertyValue>) -> Self {
        self.defaults.push((key.into(), default.into()));
        self
    }

    pub fn is_declared(&self, key: &ParameterKey) -> bool {
        self.defaults.iter().any(|(k, _)| k == key)
    }

    pub fn default_of(&self, key: &ParameterKey) -> Option<&PropertyValue> {
        self.defaults.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ParameterKey, PropertyValue)> {
        self.defaults.iter()
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_displays_as_plain_string() {
        assert_eq!(ModuleSlug::new("init").to_string(), "init");
    }

    #[test]
    fn property_value_serializes_untagged() {
        let text = serde_json::to_string(&PropertyValue::text("abc")).unwrap();
        let number = serde_json::to_string(&PropertyValue::Integer(2)).unwrap();
        assert_eq!(text, "\"abc\"");
        assert_eq!(number, "2");
    }

    #[test]
    fn property_value_deserializes_by_shape() {
        let v: PropertyValue = serde_json::from_str("4").unwrap();
        assert_eq!(v, PropertyValue::Integer(4));
        let v: PropertyValue = serde_json::from_str("\"four\"").unwrap();
        assert_eq!(v, PropertyValue::text("four"));
    }

    #[test]
    fn parameters_keep_declaration_order() {
        let params = ModuleParameters::new()
            .declare("first", "a")
            .declare("second", 2);
        let keys: Vec<_> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["first", "second"]);
    }

    #[test]
    fn default_lookup() {
        let params = ModuleParameters::new().declare(keys::INDENT_SIZE, 2);
        let key = ParameterKey::new(keys::INDENT_SIZE);
        assert!(params.is_declared(&key));
        assert_eq!(params.default_of(&key), Some(&PropertyValue::Integer(2)));
        assert!(!params.is_declared(&ParameterKey::new("other")));
    }
}
