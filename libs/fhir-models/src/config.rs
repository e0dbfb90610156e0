//! Process-wide model configuration
//!
//! Builders read the active [`ModelConfig`] once at the start of `build()` and
//! hand it to the validation rules, which take it as an explicit argument.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Switches for the optional construction-time checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelConfig {
    /// Reject string values containing control characters below U+0020
    /// other than tab, carriage return and line feed
    pub check_control_chars: bool,

    /// Check literal references and `Reference.type` against the resource
    /// types an element allows
    pub check_reference_types: bool,

    /// Enforce `ele-1`: every element must have a value or children
    pub check_value_or_children: bool,
}

impl ModelConfig {
    pub const DEFAULT: ModelConfig = ModelConfig {
        check_control_chars: true,
        check_reference_types: true,
        check_value_or_children: true,
    };

    /// Parse a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::Config(e.to_string()))
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static CONFIG: RwLock<ModelConfig> = RwLock::new(ModelConfig::DEFAULT);

/// The configuration builders currently validate against
pub fn current() -> ModelConfig {
    match CONFIG.read() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Replace the process-wide configuration
pub fn set(config: ModelConfig) {
    let mut guard = match CONFIG.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = config;
    tracing::debug!(?config, "model configuration updated");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_all_checks() {
        let config = ModelConfig::default();
        assert!(config.check_control_chars);
        assert!(config.check_reference_types);
        assert!(config.check_value_or_children);
    }

    #[test]
    fn test_from_json_keeps_missing_keys_at_default() {
        let config = ModelConfig::from_json(r#"{"checkReferenceTypes": false}"#).unwrap();
        assert!(!config.check_reference_types);
        assert!(config.check_control_chars);
        assert!(config.check_value_or_children);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = ModelConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_round_trips_through_serde() {
        let config = ModelConfig {
            check_control_chars: false,
            ..ModelConfig::default()
        };
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["checkControlChars"], false);
        let back: ModelConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
