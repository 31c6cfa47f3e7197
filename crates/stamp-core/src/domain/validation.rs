//! Identifier validation.
//!
//! Validation runs before any filesystem or version-control side effect: a
//! failure here means nothing was written, recorded, or committed.

use crate::domain::error::DomainError;

/// Validate a candidate base name.
///
/// A base name is identifier-safe: non-empty, ASCII letters and digits only.
/// Punctuation such as `.` or `@` fails validation.
pub fn validate_base_name(candidate: &str) -> Result<(), DomainError> {
    let valid = !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_alphanumeric());

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidBaseName {
            name: candidate.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_names_are_valid() {
        for name in ["jhipsterSampleApplication", "myApp2", "X", "42"] {
            assert!(validate_base_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn punctuation_is_rejected() {
        for name in ["my.New@pp", "my-app", "my app", "app.", "@app"] {
            assert!(
                matches!(
                    validate_base_name(name),
                    Err(DomainError::InvalidBaseName { .. })
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_base_name("").is_err());
    }
}
