//! Configuration structures for the slip toolchain.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlipError};

/// Main configuration for the slip toolchain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Extraction behavior toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Discard reference candidates that parse as timestamps.
    pub reject_date_like_references: bool,

    /// Discard reference candidates that parse as amounts.
    pub reject_amount_like_references: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            reject_date_like_references: true,
            reject_amount_like_references: true,
        }
    }
}

impl SlipConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| SlipError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| SlipError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_both_cross_checks() {
        let config = SlipConfig::default();
        assert!(config.extraction.reject_date_like_references);
        assert!(config.extraction.reject_amount_like_references);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: SlipConfig =
            serde_json::from_str(r#"{"extraction": {"reject_date_like_references": false}}"#)
                .unwrap();
        assert!(!config.extraction.reject_date_like_references);
        assert!(config.extraction.reject_amount_like_references);
    }
}
