//! Config path resolution
//!
//! Handles resolving paths for configuration files based on the executable's
//! location, or `VIDCFG_HOME` when it is set.

use std::path::PathBuf;

use super::{ConfigError, ConfigResult};

/// Environment variable that overrides the base directory
pub const HOME_ENV: &str = "VIDCFG_HOME";

/// Returns the vidcfg base directory.
///
/// Uses `VIDCFG_HOME` if set, otherwise the directory containing the
/// running executable.
pub fn vidcfg_base_dir() -> ConfigResult<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }

    let exe = std::env::current_exe().map_err(ConfigError::IoError)?;
    exe.parent()
        .map(PathBuf::from)
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the base configs directory.
///
/// Path: `<base>/configs/`
pub fn configs_dir() -> ConfigResult<PathBuf> {
    Ok(vidcfg_base_dir()?.join("configs"))
}

/// Returns the core config path.
///
/// Path: `<base>/configs/core.toml`
pub fn core_config_path() -> ConfigResult<PathBuf> {
    Ok(configs_dir()?.join("core.toml"))
}

/// Returns the persisted video config path.
///
/// Path: `<base>/configs/video.toml`
pub fn video_config_path() -> ConfigResult<PathBuf> {
    Ok(configs_dir()?.join("video.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_env_overrides_base_dir() {
        let home = std::env::temp_dir().join(format!("vidcfg-home-{}", std::process::id()));
        std::env::set_var(HOME_ENV, &home);

        let base = vidcfg_base_dir();
        let core = core_config_path();
        let video = video_config_path();
        std::env::remove_var(HOME_ENV);

        assert_eq!(base.unwrap(), home);
        assert_eq!(core.unwrap(), home.join("configs").join("core.toml"));
        assert_eq!(video.unwrap(), home.join("configs").join("video.toml"));
    }
}
