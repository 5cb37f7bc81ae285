//! Persisted video configuration
//!
//! Every `RENDERINFO` cvar is written to `video.toml` under a `[cvars]`
//! table:
//!
//! ```toml
//! [cvars]
//! fullscreen = "1"
//! height = "1080"
//! width = "1920"
//! ```
//!
//! Loading writes values through [`CvarRegistry::direct_set`], so read-only
//! video cvars can be restored. Names that aren't registered `RENDERINFO`
//! cvars are skipped.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigResult;
use crate::cvars::{CvarFlags, CvarRegistry};

/// On-disk layout of `video.toml`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfigFile {
    pub cvars: BTreeMap<String, String>,
}

impl VideoConfigFile {
    /// Collect the video cvars from a registry
    pub fn from_registry(cvars: &CvarRegistry) -> Self {
        let cvars = cvars
            .iter()
            .filter(|(_, cvar)| cvar.flags().contains(CvarFlags::RENDERINFO))
            .map(|(_, cvar)| (cvar.name().to_string(), cvar.string().to_string()))
            .collect();
        Self { cvars }
    }

    /// Write the stored values into a registry
    ///
    /// Returns the number of cvars restored.
    pub fn apply(&self, registry: &mut CvarRegistry) -> usize {
        let mut restored = 0;
        for (name, value) in &self.cvars {
            let Some(key) = registry.find(name) else {
                tracing::warn!("Skipping unknown video cvar '{}'", name);
                continue;
            };
            if !registry.flags(key).contains(CvarFlags::RENDERINFO) {
                tracing::warn!("Skipping '{}': not a video cvar", name);
                continue;
            }
            registry.direct_set(key, value);
            restored += 1;
        }
        restored
    }
}

/// Save the video cvars to `path`
///
/// Creates parent directories if they don't exist.
pub fn save(cvars: &CvarRegistry, path: &Path) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = VideoConfigFile::from_registry(cvars);
    let content = toml::to_string_pretty(&file)?;
    std::fs::write(path, content)?;
    tracing::debug!("Saved {} video cvars to {:?}", file.cvars.len(), path);
    Ok(())
}

/// Load the video cvars from `path`
///
/// A missing file is not an error; nothing is restored.
pub fn load(cvars: &mut CvarRegistry, path: &Path) -> ConfigResult<usize> {
    if !path.exists() {
        tracing::debug!("No video config at {:?}", path);
        return Ok(0);
    }

    let content = std::fs::read_to_string(path)?;
    let file: VideoConfigFile = toml::from_str(&content)?;
    let restored = file.apply(cvars);
    tracing::debug!("Loaded {} video cvars from {:?}", restored, path);
    Ok(restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_dir;
    use crate::cvars::CvarDef;

    fn registry() -> CvarRegistry {
        let mut cvars = CvarRegistry::new();
        cvars.register(CvarDef::new(
            "width",
            "640",
            CvarFlags::RENDERINFO | CvarFlags::READ_ONLY,
            "screen width",
        ));
        cvars.register(CvarDef::new(
            "fullscreen",
            "0",
            CvarFlags::RENDERINFO | CvarFlags::VIDRESTART,
            "fullscreen state",
        ));
        cvars.register(CvarDef::new("vid_width", "640", CvarFlags::READ_ONLY, "viewport"));
        cvars
    }

    #[test]
    fn test_only_renderinfo_cvars_are_collected() {
        let file = VideoConfigFile::from_registry(&registry());
        assert_eq!(file.cvars.len(), 2);
        assert_eq!(file.cvars.get("width").map(String::as_str), Some("640"));
        assert!(!file.cvars.contains_key("vid_width"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = test_dir("video-config");
        let path = dir.join("video.toml");

        let mut source = registry();
        let width = source.find("width").unwrap();
        source.direct_set(width, "1920");
        save(&source, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[cvars]"));
        assert!(content.contains("width = \"1920\""));

        let mut target = registry();
        assert_eq!(load(&mut target, &path).unwrap(), 2);
        let width = target.find("width").unwrap();
        assert_eq!(target.int(width), 1920);
        // Restoring is not a user change
        assert!(!target.render_info_changed());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = test_dir("video-config-missing");
        let mut cvars = registry();
        assert_eq!(load(&mut cvars, &dir.join("video.toml")).unwrap(), 0);
    }

    #[test]
    fn test_apply_skips_unknown_and_foreign_cvars() {
        let mut cvars = registry();
        let file: VideoConfigFile = toml::from_str(
            r#"
            [cvars]
            fullscreen = "2"
            vid_width = "9999"
            gl_nonsense = "1"
            "#,
        )
        .unwrap();

        assert_eq!(file.apply(&mut cvars), 1);
        let vid_width = cvars.find("vid_width").unwrap();
        assert_eq!(cvars.int(vid_width), 640);
    }
}
