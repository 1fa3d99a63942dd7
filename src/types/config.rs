//! Configuration for feature-cache.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::cache::{CacheMode, CacheOptions};
use crate::{CacheError, CacheResult};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "feature-cache.toml";

/// Main configuration for feature-cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Raw cache options per host type name.
    ///
    /// Kept as raw tables so typos surface as `UnknownOption` instead of
    /// being dropped by deserialization.
    #[serde(default)]
    pub hosts: BTreeMap<String, toml::Table>,
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> CacheResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CacheResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            hosts: BTreeMap::new(),
        }
    }

    /// Validated options for a host. Hosts absent from the file get defaults.
    pub fn options_for(&self, host: &str) -> CacheResult<CacheOptions> {
        match self.hosts.get(host) {
            Some(table) => CacheOptions::from_table(table),
            None => Ok(CacheOptions::default()),
        }
    }

    /// Validates every host table, returning the resolved modes by name.
    pub fn validate(&self) -> CacheResult<Vec<(String, CacheMode)>> {
        self.hosts
            .iter()
            .map(|(name, table)| {
                CacheOptions::from_table(table)
                    .map(|opts| (name.clone(), opts.mode()))
                    .map_err(|e| CacheError::config(format!("host '{}': {}", name, e)))
            })
            .collect()
    }

    pub fn log_level(&self) -> &str {
        &self.general.log_level
    }

    pub fn is_json_log(&self) -> bool {
        self.general.log_format.eq_ignore_ascii_case("json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[general]
log_level = "debug"
log_format = "json"

[hosts.Person]
invisible = false

[hosts.Report]
invisible = true
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.log_level(), "info");
        assert!(!config.is_json_log());
        assert!(config.hosts.is_empty());
    }

    #[test]
    fn test_parse_hosts() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.log_level(), "debug");
        assert!(config.is_json_log());

        assert_eq!(config.options_for("Person").unwrap().mode(), CacheMode::Default);
        assert_eq!(config.options_for("Report").unwrap().mode(), CacheMode::Invisible);
        assert_eq!(config.options_for("Missing").unwrap(), CacheOptions::default());

        let modes = config.validate().unwrap();
        assert_eq!(
            modes,
            vec![
                ("Person".to_string(), CacheMode::Default),
                ("Report".to_string(), CacheMode::Invisible),
            ]
        );
    }

    #[test]
    fn test_validate_names_host_and_key() {
        let config: Config = toml::from_str("[hosts.Person]\nbogus = true\n").unwrap();

        let err = config.options_for("Person").unwrap_err();
        assert_eq!(err.unknown_keys(), ["bogus"]);

        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("Person"), "{}", msg);
        assert!(msg.contains("bogus"), "{}", msg);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let config: Config = toml::from_str(SAMPLE).unwrap();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CacheError::Io(_)));
    }
}
