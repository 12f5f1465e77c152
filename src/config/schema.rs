//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::accept::entry::DEFAULT_MAX_ENTRIES;

/// Root configuration for the negotiation engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AcceptNormConfig {
    /// Maximum media ranges (and preference entries) parsed per call.
    /// Input beyond this is silently dropped.
    pub max_entries: usize,

    /// Media types the server can produce, in preference order. When
    /// non-empty, the middleware filters Accept headers down to these
    /// instead of only canonicalizing.
    pub preferred_types: Vec<String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AcceptNormConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            preferred_types: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AcceptNormConfig::default();
        assert_eq!(config.max_entries, DEFAULT_MAX_ENTRIES);
        assert!(config.preferred_types.is_empty());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: AcceptNormConfig = toml::from_str("").unwrap();
        assert_eq!(config.max_entries, DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_partial_toml() {
        let config: AcceptNormConfig = toml::from_str(
            r#"
            max_entries = 16
            preferred_types = ["application/json", "text/html"]
            "#,
        )
        .unwrap();
        assert_eq!(config.max_entries, 16);
        assert_eq!(config.preferred_types.len(), 2);
        assert_eq!(config.observability.log_level, "info");
    }
}
