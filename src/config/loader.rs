use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::EnvSnapshot;
use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/kegargv/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("kegargv").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies `HOMEBREW_PREFIX`, `HOMEBREW_CELLAR` and `HOMEBREW_LIBRARY`.
    ///
    /// Non-empty environment values win over the file.
    pub fn with_env_overrides(mut self, env: &EnvSnapshot) -> Self {
        let var = |key: &str| env.get(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        if let Some(prefix) = var("HOMEBREW_PREFIX") {
            self.layout.prefix = prefix;
        }
        if let Some(cellar) = var("HOMEBREW_CELLAR") {
            self.layout.cellar = Some(cellar);
        }
        if let Some(library) = var("HOMEBREW_LIBRARY") {
            self.layout.library = Some(library);
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Every layout path is absolute
    /// - Every alias points at a declared formula
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        for (label, path) in [
            ("prefix", layout.prefix.clone()),
            ("cellar", layout.cellar()),
            ("library", layout.library()),
        ] {
            if !path.is_absolute() {
                return Err(ConfigError::ValidationError {
                    message: format!("layout {} '{}' must be absolute", label, path.display()),
                });
            }
        }

        let mut aliases: Vec<_> = self.aliases.iter().collect();
        aliases.sort();
        for (alias, target) in aliases {
            if !self.formulae.contains_key(target) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Alias '{}' points at unknown formula '{}'",
                        alias, target
                    ),
                });
            }
        }

        Ok(())
    }
}
