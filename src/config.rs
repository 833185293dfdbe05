/*
 * Configuration Module
 *
 * Loads the optional JSON configuration file. Every field has a default, so
 * a file only needs to name the values it overrides:
 *
 *   { "window": { "width": 1280 }, "field": { "particle_count": 200 } }
 *
 * The path comes from the PARTICLE_FIELD_CONFIG environment variable and
 * falls back to `particle_field.json` in the working directory.
 */

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::FieldParams;

pub const CONFIG_ENV_VAR: &str = "PARTICLE_FIELD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "particle_field.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub field: FieldParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Particle Field".to_string(),
            width: 1280,
            height: 800,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    // Load from the location named by PARTICLE_FIELD_CONFIG, or the default file
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_from(explicit, Path::new(DEFAULT_CONFIG_PATH))
    }

    // An explicitly named file must exist; the default file is optional and
    // its absence yields the built-in defaults.
    pub fn load_from(explicit: Option<PathBuf>, default: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            None if default.exists() => {
                log::info!("Loading configuration from {}", default.display());
                Self::from_file(default)
            }
            None => {
                log::debug!("No {} found, using default configuration", default.display());
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = &self.field;

        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::ValidationError(
                "Window dimensions must be positive".to_string(),
            ));
        }

        if !(field.max_link_distance > 0.0) {
            return Err(ConfigError::ValidationError(
                "max_link_distance must be greater than 0".to_string(),
            ));
        }

        if !(field.repel_radius > 0.0) {
            return Err(ConfigError::ValidationError(
                "repel_radius must be greater than 0".to_string(),
            ));
        }

        if !(field.max_repel_force >= 0.0) || !(field.drift_magnitude >= 0.0) {
            return Err(ConfigError::ValidationError(
                "max_repel_force and drift_magnitude must not be negative".to_string(),
            ));
        }

        if !(field.max_speed > 0.0) {
            return Err(ConfigError::ValidationError(
                "max_speed must be greater than 0".to_string(),
            ));
        }

        if !(field.damping > 0.0 && field.damping <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "damping must be in (0, 1], got {}",
                field.damping
            )));
        }

        if !(field.min_initial_speed >= 0.0 && field.min_initial_speed <= field.max_initial_speed) {
            return Err(ConfigError::ValidationError(
                "initial speed range must satisfy 0 <= min_initial_speed <= max_initial_speed".to_string(),
            ));
        }

        Ok(())
    }
}
