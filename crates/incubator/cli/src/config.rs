//! CLI configuration

use crate::error::{CliError, CliResult};
use incubator_runtime::LedgerConfig;
use incubator_types::Role;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Utilization tier breakpoints
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Start each invocation from the sample catalog
    #[serde(default = "default_sample_data")]
    pub sample_data: bool,

    /// Role used by `dashboard` when `--role` is omitted
    #[serde(default)]
    pub default_role: Option<Role>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            sample_data: default_sample_data(),
            default_role: None,
        }
    }
}

fn default_sample_data() -> bool {
    true
}

impl CliConfig {
    /// Load configuration from file.
    ///
    /// An explicitly named file must exist. Without one, the default
    /// location is tried and its absence yields the defaults.
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        if let Some(p) = path {
            let config_path = PathBuf::from(p);
            if !config_path.exists() {
                return Err(CliError::Config(format!(
                    "config file not found: {}",
                    config_path.display()
                )));
            }
            return Self::from_file(&config_path);
        }

        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::from_file(&config_path),
            _ => Ok(CliConfig::default()),
        }
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: CliConfig =
            toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;

        if !config.ledger.is_valid() {
            return Err(CliError::Config(format!(
                "invalid ledger thresholds in {}: warning {} / critical {}",
                path.display(),
                config.ledger.warning_threshold,
                config.ledger.critical_threshold
            )));
        }
        Ok(config)
    }

    /// `<config_dir>/incubator/config.toml`
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("incubator").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "incubator-cli-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.sample_data);
        assert!(config.default_role.is_none());
        assert_eq!(config.ledger.warning_threshold, 60.0);
    }

    #[test]
    fn test_load_missing_named_config_fails() {
        let result = CliConfig::load(Some("/nonexistent/path/config.toml"));
        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains("/nonexistent/path/config.toml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let path = write_temp("empty", "");
        let config = CliConfig::load(path.to_str()).unwrap();
        assert!(config.sample_data);
        assert_eq!(config.ledger.critical_threshold, 80.0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_partial_config() {
        let path = write_temp(
            "partial",
            "default_role = \"mentor\"\n\n[ledger]\ncritical_threshold = 90.0\n",
        );
        let config = CliConfig::load(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.default_role, Some(Role::Mentor));
        assert_eq!(config.ledger.critical_threshold, 90.0);
        assert_eq!(config.ledger.warning_threshold, 60.0);
        assert!(config.sample_data);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let path = write_temp(
            "inverted",
            "[ledger]\nwarning_threshold = 95.0\ncritical_threshold = 50.0\n",
        );
        let result = CliConfig::load(path.to_str());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
