//! Configuration system for vidcfg
//!
//! Two files live in the configs directory:
//! - `core.toml` - [`CoreConfig`], framework-level settings
//! - `video.toml` - the persisted video cvars, see [`video`]
//!
//! Both use TOML and are auto-generated with defaults when missing.
//!
//! # Example
//!
//! ```ignore
//! use vidcfg_core::CoreConfig;
//!
//! let config = CoreConfig::load().unwrap_or_default();
//! if let Some(forced) = config.forced_resolution {
//!     println!("Locked to {}x{}", forced.width, forced.height);
//! }
//! ```

mod loader;
pub mod video;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use loader::{configs_dir, core_config_path, video_config_path, vidcfg_base_dir, HOME_ENV};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Could not determine config directory
    #[error("Config directory not available - could not resolve base path")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A fixed render resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedResolution {
    pub width: i32,
    pub height: i32,
}

/// Core framework configuration.
///
/// Loaded from `configs/core.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,

    /// Lock every mode change and the render target to this size
    pub forced_resolution: Option<ForcedResolution>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            forced_resolution: None,
        }
    }
}

impl CoreConfig {
    /// Load core config from the default path, creating it if missing.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&core_config_path()?)
    }

    /// Load core config from `path`, creating a default file if missing.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded core config from {:?}", path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save_to(path)?;
            tracing::info!("Created default core config at {:?}", path);
            Ok(default)
        }
    }

    /// Save core config to the default path.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&core_config_path()?)
    }

    /// Save core config to `path`.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved core config to {:?}", path);
        Ok(())
    }

    /// Reload core config from `path`.
    pub fn reload_from(&mut self, path: &Path) -> ConfigResult<()> {
        let content = std::fs::read_to_string(path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded core config from {:?}", path);
        Ok(())
    }
}

/// Unique scratch directory for file-based tests
#[cfg(test)]
pub(crate) fn test_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("vidcfg-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_config_default() {
        let config = CoreConfig::default();
        assert_eq!(config.version, 1);
        assert!(!config.debug);
        assert!(config.forced_resolution.is_none());
    }

    #[test]
    fn test_core_config_serialize() {
        let config = CoreConfig {
            version: 2,
            debug: true,
            forced_resolution: Some(ForcedResolution {
                width: 680,
                height: 481,
            }),
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 2"));
        assert!(toml_str.contains("debug = true"));
        assert!(toml_str.contains("[forced_resolution]"));
        assert!(toml_str.contains("width = 680"));
    }

    #[test]
    fn test_core_config_partial_file_uses_defaults() {
        let config: CoreConfig = toml::from_str("debug = true").unwrap();
        assert!(config.debug);
        assert_eq!(config.version, 1);
        assert!(config.forced_resolution.is_none());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = test_dir("core-config");
        let path = dir.join("configs").join("core.toml");

        let config = CoreConfig::load_from(&path).unwrap();
        assert_eq!(config, CoreConfig::default());
        assert!(path.exists());

        let mut edited = config.clone();
        edited.debug = true;
        edited.save_to(&path).unwrap();

        let mut reloaded = CoreConfig::default();
        reloaded.reload_from(&path).unwrap();
        assert!(reloaded.debug);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = test_dir("core-config-bad");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("core.toml");
        std::fs::write(&path, "debug = [").unwrap();

        assert!(matches!(CoreConfig::load_from(&path), Err(ConfigError::ParseError(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
