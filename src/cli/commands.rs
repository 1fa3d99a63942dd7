//! Implementação dos comandos CLI do feature-cache.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cache::{Cache, CacheHost, CacheOptions, Registry};
use crate::types::config::{Config, DEFAULT_CONFIG_FILE};
use crate::{CacheError, CacheResult};

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> CacheResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join(DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    let mut example = toml::Table::new();
    example.insert(crate::cache::INVISIBLE.to_string(), toml::Value::Boolean(false));

    let mut config = Config::default_config();
    config.hosts.insert("Person".to_string(), example);
    config.save(&config_path)?;

    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Add one [hosts.<Type>] table per host type");
    println!("  2. Validate it: feature-cache check");

    Ok(())
}

/// Validates every host table of the configuration file.
pub fn check(config_path: &Path) -> CacheResult<()> {
    if !config_path.exists() {
        return Err(CacheError::config(format!(
            "configuration not found at: {}",
            config_path.display()
        )));
    }

    let config = Config::load(config_path)?;
    let modes = config.validate()?;

    println!("Configuration: {}", config_path.display());
    if modes.is_empty() {
        println!("  (no hosts)");
    }
    for (name, mode) in &modes {
        println!("  {:<24} {}", name, mode);
    }

    tracing::debug!(hosts = modes.len(), "Configuration is valid");
    Ok(())
}

#[derive(Debug, Serialize)]
struct Person {
    first_name: String,
    last_name: String,
    cache: Cache<&'static str, String>,
}

impl CacheHost for Person {}

impl Person {
    fn new(registry: &Registry, first_name: &str, last_name: &str) -> CacheResult<Self> {
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            cache: Cache::for_host_in::<Self>(registry)?,
        })
    }

    fn full_name(&mut self) -> String {
        let (first, last) = (&self.first_name, &self.last_name);
        self.cache
            .get_or_compute("full_name", || format!("{} {}", first, last))
            .clone()
    }
}

/// Runs the Person example, showing a stale value until the cache is cleared.
pub fn demo(invisible: bool) -> CacheResult<()> {
    let registry = Registry::new();
    let mode = registry.load::<Person>(CacheOptions { invisible });

    let mut person = Person::new(&registry, "Ann", "Lee")?;
    println!("Mode: {}", mode);
    println!("full_name()           = {}", person.full_name());

    person.first_name = "Anna".to_string();
    println!("after first_name=Anna = {} (stale)", person.full_name());

    println!("Debug: {:?}", person);
    println!("JSON:  {}", serde_json::to_string(&person)?);

    person.cache.clear();
    println!("after cache.clear()   = {}", person.full_name());

    Ok(())
}

/// Shows version.
pub fn version() {
    println!("feature-cache {}", env!("CARGO_PKG_VERSION"));
}
