//! Configuration for the linking pipeline.
//!
//! Provides the validation-mode switch for the finalization stage. The mode
//! is an explicit configuration value, never inferred from the runtime
//! environment, so a deployment can run strict validation wherever data-model
//! regressions should fail loudly.

use serde::{Deserialize, Serialize};

/// How the finalization stage treats a section that fails schema validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Log at warn level, flag the section, and keep going. The batch always
    /// completes and returns a best-effort collection.
    #[default]
    Relaxed,
    /// Log at error level and abort the whole batch naming the offending
    /// section. Intended to catch data-model regressions early.
    Strict,
}

/// Configuration for a linking run
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Validation mode applied during finalization
    pub validation: ValidationMode,
}

impl Config {
    /// Configuration with strict finalization
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
        }
    }

    /// Configuration with relaxed (production) finalization
    pub fn relaxed() -> Self {
        Self {
            validation: ValidationMode::Relaxed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_relaxed() {
        assert_eq!(Config::default().validation, ValidationMode::Relaxed);
    }

    #[test]
    fn test_mode_helpers() {
        assert_eq!(Config::strict().validation, ValidationMode::Strict);
        assert_eq!(Config::relaxed().validation, ValidationMode::Relaxed);
    }
}
