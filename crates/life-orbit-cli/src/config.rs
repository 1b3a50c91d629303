//! CLI configuration management.
//!
//! Precedence, lowest to highest: built-in defaults, the JSON config file,
//! then environment variables (a `.env` file is loaded first if present).

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use life_orbit_engine::{EngineTuning, SimulationConfig};
use serde::{Deserialize, Serialize};

/// Overrides the config file location.
pub const CONFIG_PATH_VAR: &str = "LIFE_ORBIT_CONFIG";

/// Application-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Runtime controls applied when an engine is built.
    pub simulation: SimulationConfig,

    /// Layout constants.
    pub tuning: EngineTuning,

    /// Catalog used when a command is not given `--catalog`.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = Self::load_file()?;
        config.apply_env();
        Ok(config.sanitized())
    }

    /// Load only what is stored in the config file, or defaults.
    pub fn load_file() -> Result<Self> {
        match Self::config_file_path() {
            Some(path) if path.exists() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Some(speed) = env_parse("LIFE_ORBIT_SPEED") {
            self.simulation.orbit_speed = speed;
        }
        if let Some(scale) = env_parse("LIFE_ORBIT_RADIUS_SCALE") {
            self.simulation.radius_scale = scale;
        }
        if let Some(paused) = env_parse("LIFE_ORBIT_PAUSED") {
            self.simulation.paused = paused;
        }
        if let Ok(path) = std::env::var("LIFE_ORBIT_CATALOG") {
            if !path.is_empty() {
                self.catalog_path = Some(PathBuf::from(path));
            }
        }
    }

    /// Copy with out-of-range controls and tuning clamped.
    pub fn sanitized(self) -> Self {
        Self {
            simulation: self.simulation.sanitized(),
            tuning: self.tuning.sanitized(),
            catalog_path: self.catalog_path,
        }
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let Some(config_path) = Self::config_file_path() else {
            anyhow::bail!("No config directory available on this platform");
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        ProjectDirs::from("dev", "life-orbit", "lifeorbit")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}

/// Parse an environment variable, ignoring (with a warning) values that do
/// not parse.
fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}
