//! Resolved properties: the final parameter set for one apply.
//!
//! [`ResolvedProperties::resolve`] overlays caller overrides onto a module's
//! declared defaults. The result is fully resolved before the engine runs —
//! every declared key has a value, and no undeclared key slipped through.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::DomainError;
use crate::domain::module::{ModuleParameters, ModuleSlug, ParameterKey, PropertyValue};

/// The final key/value set a module is applied with.
///
/// Keys are unique. Lookup is order-independent; iteration preserves the
/// module's declaration order for display and for the history snapshot.
/// Serializes as a JSON map whose entry order is the iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedProperties {
    entries: Vec<(ParameterKey, PropertyValue)>,
}

impl ResolvedProperties {
    /// Overlay `overrides` onto the module's declared defaults.
    ///
    /// - every declared key starts at its default, in declaration order;
    /// - each override replaces the value for its key in place;
    /// - an override for an undeclared key is a configuration error;
    /// - a textual override for an integer-typed default is coerced with
    ///   `str::parse::<i64>`.
    pub fn resolve(
        module: &ModuleSlug,
        parameters: &ModuleParameters,
        overrides: &[(ParameterKey, PropertyValue)],
    ) -> Result<Self, DomainError> {
        for (key, _) in overrides {
            if !parameters.is_declared(key) {
                return Err(DomainError::UnknownParameter {
                    key: key.to_string(),
                    module: module.to_string(),
                });
            }
        }

        let entries = parameters
            .iter()
            .map(|(key, default)| {
                let value = match overrides.iter().rev().find(|(k, _)| k == key) {
                    // Later overrides win for a repeated key.
                    Some((_, supplied)) => coerce(key, supplied, default)?,
                    None => default.clone(),
                };
                Ok((key.clone(), value))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ParameterKey, PropertyValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set a value, replacing in place when the key exists, appending
    /// otherwise. Used by the history fold.
    pub(crate) fn set(&mut self, key: ParameterKey, value: PropertyValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl Serialize for ResolvedProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResolvedProperties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertiesVisitor;

        impl<'de> Visitor<'de> for PropertiesVisitor {
            type Value = ResolvedProperties;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of parameter keys to values")
            }

            // Map entries arrive in document order, which is application
            // order for a ledger we wrote ourselves.
            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(ResolvedProperties { entries })
            }
        }

        deserializer.deserialize_map(PropertiesVisitor)
    }
}

/// Coerce a supplied override to the type of its declared default.
fn coerce(
    key: &ParameterKey,
    supplied: &PropertyValue,
    default: &PropertyValue,
) -> Result<PropertyValue, DomainError> {
    match (default, supplied) {
        (PropertyValue::Integer(_), PropertyValue::Text(raw)) => raw
            .trim()
            .parse::<i64>()
            .map(PropertyValue::Integer)
            .map_err(|_| DomainError::InvalidParameterValue {
                key: key.to_string(),
                value: raw.clone(),
                reason: "expected an integer".into(),
            }),
        _ => Ok(supplied.clone()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
