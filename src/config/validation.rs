//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (max_entries > 0)
//! - Check preferred types are concrete media types, not patterns
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AcceptNormConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("max_entries must be at least 1")]
    ZeroMaxEntries,

    #[error("preferred type {0:?} is empty")]
    EmptyPreferredType(String),

    #[error("preferred type {0:?} is not of the form type/subtype")]
    MalformedPreferredType(String),

    #[error("preferred type {0:?} is a pattern; preferences must be concrete types")]
    WildcardPreferredType(String),
}

/// Validate a config, collecting every problem found.
pub fn validate_config(config: &AcceptNormConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.max_entries == 0 {
        errors.push(ValidationError::ZeroMaxEntries);
    }

    for preferred in &config.preferred_types {
        let trimmed = preferred.trim();
        if trimmed.is_empty() {
            errors.push(ValidationError::EmptyPreferredType(preferred.clone()));
        } else if trimmed.contains('*') {
            errors.push(ValidationError::WildcardPreferredType(preferred.clone()));
        } else if !trimmed.contains('/') {
            errors.push(ValidationError::MalformedPreferredType(preferred.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AcceptNormConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_max_entries_rejected() {
        let config = AcceptNormConfig {
            max_entries: 0,
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::ZeroMaxEntries));
    }

    #[test]
    fn test_preferred_types_must_be_concrete() {
        let config = AcceptNormConfig {
            preferred_types: vec![
                "text/html".to_string(),
                "image/*".to_string(),
                "json".to_string(),
                "  ".to_string(),
            ],
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::WildcardPreferredType(_))));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::MalformedPreferredType(_))));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::EmptyPreferredType(_))));
    }
}
