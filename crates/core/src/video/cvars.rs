//! Video cvar definitions

use vidcfg_sdk::names;

use crate::cvars::{CvarDef, CvarFlags, CvarKey, CvarRegistry};

/// Default logical window and viewport size
pub const DEFAULT_WIDTH: i32 = 640;
pub const DEFAULT_HEIGHT: i32 = 480;

/// Keys of every cvar the video manager reads or writes
#[derive(Debug, Clone, Copy)]
pub struct VideoCvars {
    pub mode: CvarKey,
    pub rotate: CvarKey,
    pub scale: CvarKey,
    pub maximized: CvarKey,
    pub fullscreen: CvarKey,
    pub window_width: CvarKey,
    pub window_height: CvarKey,
    pub window_xpos: CvarKey,
    pub window_ypos: CvarKey,
    pub vid_width: CvarKey,
    pub vid_height: CvarKey,
    /// Watched for texture re-registration; normally owned by the host
    pub levelshots: CvarKey,
}

impl VideoCvars {
    /// Register the video cvars
    pub fn register(cvars: &mut CvarRegistry) -> Self {
        use CvarFlags as F;

        let width = DEFAULT_WIDTH.to_string();
        let height = DEFAULT_HEIGHT.to_string();

        let levelshots = match cvars.find(names::CL_ALLOW_LEVELSHOTS) {
            Some(key) => key,
            None => cvars.register(CvarDef::new(
                names::CL_ALLOW_LEVELSHOTS,
                "0",
                F::ARCHIVE,
                "allow engine to use individual levelshots instead of 'loading' image",
            )),
        };

        Self {
            mode: cvars.register(CvarDef::new(
                names::VID_MODE,
                "0",
                F::RENDERINFO | F::READ_ONLY,
                "current video mode index (used only for storage)",
            )),
            rotate: cvars.register(
                CvarDef::new(
                    names::VID_ROTATE,
                    "0",
                    F::RENDERINFO | F::VIDRESTART | F::READ_ONLY,
                    "screen rotation (0-3)",
                )
                .with_range(0.0, 3.0),
            ),
            scale: cvars.register(
                CvarDef::new(
                    names::VID_SCALE,
                    "1.0",
                    F::RENDERINFO | F::VIDRESTART | F::READ_ONLY,
                    "pixel scale",
                )
                .with_range(1.0, 8.0),
            ),
            maximized: cvars.register(CvarDef::new(
                names::VID_MAXIMIZED,
                "0",
                F::RENDERINFO | F::READ_ONLY,
                "window maximized state, read-only",
            )),
            fullscreen: cvars.register(CvarDef::new(
                names::FULLSCREEN,
                "0",
                F::RENDERINFO | F::VIDRESTART,
                "fullscreen state (0 windowed, 1 fullscreen, 2 borderless)",
            )),
            window_width: cvars.register(CvarDef::new(
                names::WINDOW_WIDTH,
                width.clone(),
                F::RENDERINFO | F::VIDRESTART | F::READ_ONLY,
                "screen width",
            )),
            window_height: cvars.register(CvarDef::new(
                names::WINDOW_HEIGHT,
                height.clone(),
                F::RENDERINFO | F::VIDRESTART | F::READ_ONLY,
                "screen height",
            )),
            window_xpos: cvars.register(CvarDef::new(
                names::WINDOW_XPOS,
                "0",
                F::RENDERINFO | F::READ_ONLY,
                "window position by horizontal",
            )),
            window_ypos: cvars.register(CvarDef::new(
                names::WINDOW_YPOS,
                "0",
                F::RENDERINFO | F::READ_ONLY,
                "window position by vertical",
            )),
            vid_width: cvars.register(CvarDef::new(
                names::VID_WIDTH,
                width,
                F::READ_ONLY,
                "actual window viewport size",
            )),
            vid_height: cvars.register(CvarDef::new(
                names::VID_HEIGHT,
                height,
                F::READ_ONLY,
                "actual window viewport size",
            )),
            levelshots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all() {
        let mut cvars = CvarRegistry::new();
        let keys = VideoCvars::register(&mut cvars);

        assert_eq!(cvars.len(), 12);
        assert_eq!(cvars.string(keys.window_width), "640");
        assert_eq!(cvars.string(keys.scale), "1.0");
        assert_eq!(cvars.find("fullscreen"), Some(keys.fullscreen));
        assert!(cvars.flags(keys.window_width).contains(CvarFlags::VIDRESTART));
        assert!(!cvars.flags(keys.vid_width).contains(CvarFlags::RENDERINFO));
    }

    #[test]
    fn test_reuses_host_levelshots_cvar() {
        let mut cvars = CvarRegistry::new();
        let host_key = cvars.register(CvarDef::new(
            names::CL_ALLOW_LEVELSHOTS,
            "1",
            CvarFlags::ARCHIVE,
            "",
        ));
        let keys = VideoCvars::register(&mut cvars);
        assert_eq!(keys.levelshots, host_key);
        assert_eq!(cvars.string(keys.levelshots), "1");
    }
}
