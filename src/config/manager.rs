use super::{evolution::EvolutionConfig, traits::ConfigSection};
use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Environment variables with this prefix override file values,
/// e.g. `SHORTGEN_EVOLUTION__SET=2`.
pub const ENV_PREFIX: &str = "SHORTGEN";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        self.evolution.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, apply environment overrides, validate, and replace
    /// the current configuration.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GeneratorError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GeneratorError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).format(::config::FileFormat::Toml))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| GeneratorError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| GeneratorError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::info!("Loaded configuration from {}", path.display());

        *self.write()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GeneratorError> {
        let toml_str = toml::to_string_pretty(&self.get())
            .map_err(|e| GeneratorError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        match self.config.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Apply `f` to a copy and commit it only if the result validates.
    pub fn update<F>(&self, f: F) -> Result<(), GeneratorError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        *self.write()? = candidate;
        Ok(())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, GeneratorError> {
        self.config
            .write()
            .map_err(|_| GeneratorError::Configuration("Config lock poisoned".to_string()))
    }
}
