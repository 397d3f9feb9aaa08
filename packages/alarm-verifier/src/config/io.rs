//! Configuration I/O (YAML loading)
//!
//! ```yaml
//! version: 1
//! verifier:
//!   max_iterations: 5000
//!   decision: reject_all
//! ```

use super::error::{ConfigError, ConfigResult};
use super::verifier_config::VerifierConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Verifier settings; omitted fields take their defaults
    #[serde(default)]
    pub verifier: VerifierConfig,
}

impl VerifierConfig {
    /// Parse and validate a v1 YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(v) if !SUPPORTED_VERSIONS.contains(&v) => {
                return Err(ConfigError::UnsupportedVersion {
                    found: v,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                })
            }
            Some(_) => {}
        }

        file.verifier.validate()?;
        Ok(file.verifier)
    }

    /// Load from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export as a v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            verifier: self.clone(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecisionKind;

    #[test]
    fn test_yaml_roundtrip() {
        let config = VerifierConfig::default()
            .max_iterations(5000)
            .decision(DecisionKind::RejectAll);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("max_iterations: 5000"));
        assert!(yaml.contains("decision: reject_all"));
        assert_eq!(VerifierConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let yaml = "version: 1\nverifier:\n  log_vc: false\n";
        let config = VerifierConfig::from_yaml_str(yaml).unwrap();
        assert!(!config.log_vc);
        assert!(config.enabled);
        assert_eq!(config.max_iterations, 100_000);
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = VerifierConfig::from_yaml_str("verifier:\n  enabled: false\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = VerifierConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let result = VerifierConfig::from_yaml_str("version: 1\nsolver: z3\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let result = VerifierConfig::from_yaml_str("version: 1\nverifier:\n  max_iterations: 0\n");
        assert!(matches!(result, Err(ConfigError::Range { .. })));
    }
}
