//! Collaborator interfaces
//!
//! The video manager never touches windows or GPU state directly. Everything
//! goes through these two traits.

use vidcfg_sdk::{DisplayMode, ModeRequest, RefRotation, RenderState, WindowGeometry};

use crate::error::RendererError;

/// Renderer and platform entry points used by the video subsystem
///
/// The renderer owns the [`RenderState`] mirror. Callers update it only
/// through [`Renderer::set_render_state`].
pub trait Renderer: Send + Sync {
    /// Bring up the renderer backend
    fn init(&self) -> Result<(), RendererError>;

    /// Number of enumerated display modes
    fn video_mode_count(&self) -> usize;

    /// Display mode at `index`, if the backend has one
    fn video_mode(&self, index: usize) -> Option<DisplayMode>;

    /// Change the display settings of the existing window
    ///
    /// Returns the geometry the platform actually realised.
    fn change_display_settings(&self, request: ModeRequest)
        -> Result<WindowGeometry, RendererError>;

    /// Re-create the video mode from scratch with the given settings
    fn set_mode(&self, request: ModeRequest) -> Result<WindowGeometry, RendererError>;

    /// Install a screen transform. Returns false if the backend can't do it.
    fn set_display_transform(&self, rotation: RefRotation, scale: f32) -> bool;

    /// Current screen rotation
    fn rotation(&self) -> RefRotation;

    /// Set the screen rotation
    fn set_rotation(&self, rotation: RefRotation);

    /// Current render state mirror
    fn render_state(&self) -> RenderState;

    /// Replace the render state mirror
    fn set_render_state(&self, state: RenderState);

    /// Re-initialize screen-sized resources after a geometry change
    fn reinit_screen(&self);

    /// Re-register screen textures
    fn reload_textures(&self);
}

/// User-visible text output
pub trait Console: Send + Sync {
    /// Print a line of text
    fn print(&self, text: &str);
}
