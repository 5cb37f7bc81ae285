//! Cvar and command names owned by the video subsystem
//!
//! These names are what the console and the persisted video config see,
//! so they must stay stable across releases.

/// Current video mode index (storage only)
pub const VID_MODE: &str = "vid_mode";
/// Screen rotation (0-3)
pub const VID_ROTATE: &str = "vid_rotate";
/// Pixel scale
pub const VID_SCALE: &str = "vid_scale";
/// Window maximized state
pub const VID_MAXIMIZED: &str = "vid_maximized";
/// Window mode (0 windowed, 1 fullscreen, 2 borderless)
pub const FULLSCREEN: &str = "fullscreen";
/// Logical window width
pub const WINDOW_WIDTH: &str = "width";
/// Logical window height
pub const WINDOW_HEIGHT: &str = "height";
/// Horizontal window position
pub const WINDOW_XPOS: &str = "_window_xpos";
/// Vertical window position
pub const WINDOW_YPOS: &str = "_window_ypos";
/// Actual viewport width
pub const VID_WIDTH: &str = "vid_width";
/// Actual viewport height
pub const VID_HEIGHT: &str = "vid_height";
/// Levelshot toggle; a change forces texture re-registration
pub const CL_ALLOW_LEVELSHOTS: &str = "cl_allow_levelshots";

/// Console command that requests a display mode change
pub const VID_SETMODE: &str = "vid_setmode";
