//! Video type definitions
//!
//! Plain value types exchanged with the renderer. Nothing here talks to a
//! renderer; see `vidcfg-engine` for the collaborator traits.

/// Number of supported window modes
pub const WINDOW_MODE_COUNT: i32 = 3;

/// How the game window is presented
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Windowed = 0,
    Fullscreen = 1,
    Borderless = 2,
}

impl WindowMode {
    /// Convert any integer into a window mode, clamping into
    /// `[0, WINDOW_MODE_COUNT - 1]`
    pub fn from_clamped(value: i32) -> Self {
        match value.clamp(0, WINDOW_MODE_COUNT - 1) {
            0 => Self::Windowed,
            1 => Self::Fullscreen,
            _ => Self::Borderless,
        }
    }

    /// Human readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windowed => "windowed",
            Self::Fullscreen => "fullscreen",
            Self::Borderless => "borderless",
        }
    }
}

impl std::fmt::Display for WindowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen rotation applied by the renderer
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefRotation {
    #[default]
    None = 0,
    Cw90 = 1,
    Cw180 = 2,
    Ccw90 = 3,
}

impl RefRotation {
    /// Build a rotation from the low two bits of `value`
    pub fn from_bits(value: u32) -> Self {
        match value & 3 {
            0 => Self::None,
            1 => Self::Cw90,
            2 => Self::Cw180,
            _ => Self::Ccw90,
        }
    }

    /// True for rotations that swap the horizontal and vertical axes
    pub fn swaps_axes(&self) -> bool {
        matches!(self, Self::Cw90 | Self::Ccw90)
    }
}

/// A display mode enumerated by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMode {
    pub width: i32,
    pub height: i32,
    /// Description shown in menus and the console
    pub desc: String,
}

impl DisplayMode {
    /// Create a mode with the conventional `WxH` description
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            desc: format!("{}x{}", width, height),
        }
    }
}

/// Parameters of a mode change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRequest {
    pub width: i32,
    pub height: i32,
    pub window_mode: WindowMode,
}

/// Window geometry as realised by the platform after a mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: i32,
    pub height: i32,
    pub maximized: bool,
}

/// Renderer-side mirror of the active render geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub scale_x: f32,
    pub scale_y: f32,
    pub width: i32,
    pub height: i32,
    pub wide_screen: bool,
}

impl RenderState {
    /// Build an unscaled render state for a render target of `width x height`
    ///
    /// The wide-screen flag is always derived here, never stored on its own.
    pub fn for_render_size(width: i32, height: i32) -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            width,
            height,
            wide_screen: is_wide_screen(width, height),
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::for_render_size(640, 480)
    }
}

/// True if `width:height` is neither 4:3 nor 5:4
pub fn is_wide_screen(width: i32, height: i32) -> bool {
    let (width, height) = (i64::from(width), i64::from(height));
    (width * 3 != height * 4) && (width * 4 != height * 5)
}

/// Snapshot of the configured video geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoGeometry {
    /// Logical window size
    pub window_width: i32,
    pub window_height: i32,
    /// Render target size
    pub render_width: i32,
    pub render_height: i32,
    pub window_x: i32,
    pub window_y: i32,
    pub maximized: bool,
    pub scale: f32,
    pub rotation: RefRotation,
}
