//! Video manager - mode application, change polling and the `vid_setmode` command

use tracing::instrument;

use vidcfg_engine::{EngineInterfaces, RendererError};
use vidcfg_sdk::{
    names, ModeRequest, RefRotation, RenderState, VideoGeometry, WindowGeometry, WindowMode,
};

use super::cvars::VideoCvars;
use crate::commands::{CommandInfo, CommandManager, CommandResult};
use crate::config::{CoreConfig, ForcedResolution};
use crate::cvars::{CvarRegistry, CvarValue};
use crate::error::FatalError;

const SETMODE_USAGE: &str = "Usage: vid_setmode <modenum>|<width height>";

/// Video Configuration Manager
///
/// Holds the cvar keys and the engine handle. The cvar registry itself is
/// owned by the host and passed into every operation.
#[derive(Debug)]
pub struct VideoManager {
    engine: EngineInterfaces,
    cvars: VideoCvars,
    /// Fixed render resolution policy
    forced: Option<ForcedResolution>,
    /// Centre of the logical window, used for mouse recentering
    window_center: (i32, i32),
}

impl VideoManager {
    /// Register the video cvars and the `vid_setmode` command
    ///
    /// Nothing is sent to the renderer until [`VideoManager::start`].
    #[instrument(skip_all)]
    pub fn register(
        cvars: &mut CvarRegistry,
        commands: &mut CommandManager,
        engine: EngineInterfaces,
        config: &CoreConfig,
    ) -> Self {
        let keys = VideoCvars::register(cvars);

        commands.register_restricted(names::VID_SETMODE, "display video mode", |ctx, info| {
            ctx.video.mode_command(ctx.cvars, info)
        });

        if let Some(forced) = config.forced_resolution {
            tracing::info!("Video mode locked to {}x{}", forced.width, forced.height);
        }

        Self {
            engine,
            cvars: keys,
            forced: config.forced_resolution,
            window_center: (0, 0),
        }
    }

    /// Initialize the renderer and apply the configured mode
    #[instrument(skip_all)]
    pub fn start(&mut self, cvars: &mut CvarRegistry) -> Result<(), FatalError> {
        let renderer = self.engine.renderer.clone();
        renderer.init().map_err(FatalError::RendererInit)?;

        let request = self.configured_request(cvars);
        let geometry = renderer
            .change_display_settings(request)
            .map_err(FatalError::InitialMode)?;
        self.finish_mode_change(cvars, geometry);

        tracing::info!(
            "Video initialized: {}x{} ({})",
            geometry.width,
            geometry.height,
            request.window_mode
        );
        Ok(())
    }

    /// Register everything and apply the configured mode
    pub fn init(
        cvars: &mut CvarRegistry,
        commands: &mut CommandManager,
        engine: EngineInterfaces,
        config: &CoreConfig,
    ) -> Result<Self, FatalError> {
        let mut video = Self::register(cvars, commands, engine, config);
        video.start(cvars)?;
        Ok(video)
    }

    /// Get the cvar keys
    pub fn cvars(&self) -> &VideoCvars {
        &self.cvars
    }

    /// Get the centre of the logical window
    pub fn window_center(&self) -> (i32, i32) {
        self.window_center
    }

    /// Store a realised video mode
    ///
    /// `width`/`height` are the logical window size, `render_width`/
    /// `render_height` the render target. All four must be positive.
    pub fn apply_mode(
        &mut self,
        cvars: &mut CvarRegistry,
        width: i32,
        height: i32,
        render_width: i32,
        render_height: i32,
        maximized: bool,
    ) {
        debug_assert!(width > 0 && height > 0, "window size must be positive");
        debug_assert!(
            render_width > 0 && render_height > 0,
            "render size must be positive"
        );
        debug_assert!(self.engine.is_main_thread());

        self.window_center = (width / 2, height / 2);

        // Restart-requiring values: no notification, or we'd loop
        cvars.direct_set(self.cvars.window_width, &width.to_string());
        cvars.direct_set(self.cvars.window_height, &height.to_string());
        cvars.direct_set(self.cvars.maximized, &maximized.to_value_string());

        for (key, value) in [
            (self.cvars.vid_width, render_width),
            (self.cvars.vid_height, render_height),
        ] {
            let Some(name) = cvars.get_cvar(key).map(|c| c.name().to_string()) else {
                continue;
            };
            let flags = cvars.flags(key);
            if let Err(err) = cvars.full_set(&name, &value.to_string(), flags) {
                tracing::warn!("Failed to store {}: {}", name, err);
            }
        }

        cvars.set_render_info_changed(false);

        let state = RenderState::for_render_size(render_width, render_height);
        self.engine.renderer.set_render_state(state);

        tracing::debug!(
            "Applied video mode: window {}x{}, render {}x{}{}",
            width,
            height,
            render_width,
            render_height,
            if state.wide_screen { " (wide)" } else { "" }
        );

        self.engine.renderer.reinit_screen();
    }

    /// Description of the display mode at `index`
    ///
    /// Returns None if `index` is out of range or the renderer has no mode there.
    pub fn mode_description(&self, index: i32) -> Option<String> {
        let index = usize::try_from(index).ok()?;
        let renderer = &self.engine.renderer;
        if index >= renderer.video_mode_count() {
            return None;
        }
        renderer.video_mode(index).map(|mode| mode.desc)
    }

    /// Poll for pending changes; called once per frame
    ///
    /// A pending mode change that the renderer can't apply is fatal.
    pub fn check_changes(&mut self, cvars: &mut CvarRegistry) -> Result<(), FatalError> {
        let renderer = self.engine.renderer.clone();

        if cvars.is_changed(self.cvars.levelshots) {
            renderer.reload_textures();
            cvars.clear_changed(self.cvars.levelshots);
        }

        if cvars.render_info_changed() {
            let request = self.configured_request(cvars);
            match renderer.set_mode(request) {
                Ok(geometry) => {
                    self.finish_mode_change(cvars, geometry);
                    renderer.reinit_screen();
                    cvars.set_render_info_changed(false);
                }
                Err(err) => {
                    tracing::error!("Can't re-initialize video subsystem: {}", err);
                    return Err(FatalError::VideoReinit(err));
                }
            }
        }

        Ok(())
    }

    /// Decide the render target size and screen rotation for a window
    ///
    /// This is the only place rotation is chosen. A forced resolution wins
    /// over everything and disables rotation. The result is always at least
    /// 1x1.
    pub fn display_transform(
        &self,
        cvars: &CvarRegistry,
        render_width: i32,
        render_height: i32,
    ) -> (i32, i32) {
        let renderer = &self.engine.renderer;

        if let Some(forced) = self.forced {
            renderer.set_rotation(RefRotation::None);
            return (forced.width.max(1), forced.height.max(1));
        }

        let rotation = RefRotation::from_bits(cvars.int(self.cvars.rotate).max(0) as u32);
        let scale = cvars.value(self.cvars.scale).max(1.0);

        if !renderer.set_display_transform(rotation, scale) {
            tracing::warn!("Failed to setup screen transform");
            self.engine.print("failed to setup screen transform");
            renderer.set_rotation(RefRotation::None);
            return (render_width.max(1), render_height.max(1));
        }

        let (mut width, mut height) = (render_width, render_height);
        if rotation.swaps_axes() {
            std::mem::swap(&mut width, &mut height);
        }
        renderer.set_rotation(rotation);

        let width = (width as f32 / scale) as i32;
        let height = (height as f32 / scale) as i32;
        (width.max(1), height.max(1))
    }

    /// Ask the renderer for a new window size
    ///
    /// The window mode comes from the `fullscreen` cvar, clamped into range.
    /// A forced resolution overrides `width` and `height`.
    pub fn request_mode_change(
        &mut self,
        cvars: &mut CvarRegistry,
        width: i32,
        height: i32,
    ) -> Result<WindowGeometry, RendererError> {
        let (width, height) = match self.forced {
            Some(forced) => (forced.width, forced.height),
            None => (width, height),
        };
        let request = ModeRequest {
            width,
            height,
            window_mode: self.window_mode(cvars),
        };

        let geometry = self.engine.renderer.change_display_settings(request)?;
        self.finish_mode_change(cvars, geometry);
        Ok(geometry)
    }

    /// Record a window move reported by the platform
    pub fn save_window_position(&self, cvars: &mut CvarRegistry, x: i32, y: i32) {
        cvars.direct_set(self.cvars.window_xpos, &x.to_string());
        cvars.direct_set(self.cvars.window_ypos, &y.to_string());
    }

    /// Snapshot of the current geometry
    pub fn geometry(&self, cvars: &CvarRegistry) -> VideoGeometry {
        let state = self.engine.renderer.render_state();
        VideoGeometry {
            window_width: cvars.int(self.cvars.window_width),
            window_height: cvars.int(self.cvars.window_height),
            render_width: state.width,
            render_height: state.height,
            window_x: cvars.int(self.cvars.window_xpos),
            window_y: cvars.int(self.cvars.window_ypos),
            maximized: cvars.bool(self.cvars.maximized),
            scale: cvars.value(self.cvars.scale),
            rotation: self.engine.renderer.rotation(),
        }
    }

    /// `vid_setmode` handler
    pub(crate) fn mode_command(
        &mut self,
        cvars: &mut CvarRegistry,
        info: &CommandInfo,
    ) -> CommandResult {
        let (width, height) = match info.arg_count() {
            2 => {
                let mode = i32::parse_value(info.arg(1))
                    .and_then(|index| usize::try_from(index).ok())
                    .and_then(|index| self.engine.renderer.video_mode(index));
                match mode {
                    Some(mode) => (mode.width, mode.height),
                    None => {
                        info.reply("unable to set mode, backend returned null");
                        return CommandResult::Handled;
                    }
                }
            }
            3 => match (i32::parse_value(info.arg(1)), i32::parse_value(info.arg(2))) {
                (Some(width), Some(height)) if width > 0 && height > 0 => (width, height),
                _ => {
                    info.reply(SETMODE_USAGE);
                    return CommandResult::Handled;
                }
            },
            _ => {
                info.reply(SETMODE_USAGE);
                return CommandResult::Handled;
            }
        };

        let window_mode = self.window_mode(cvars);
        match self.request_mode_change(cvars, width, height) {
            Ok(geometry) => {
                if let Some(forced) = self.forced {
                    info.reply_fmt(format_args!(
                        "Video mode locked to {}x{}",
                        forced.width, forced.height
                    ));
                } else {
                    info.reply_fmt(format_args!(
                        "Video mode set to {}x{} ({})",
                        geometry.width, geometry.height, window_mode
                    ));
                }
            }
            Err(err) => {
                tracing::warn!("vid_setmode failed: {}", err);
                info.reply_fmt(format_args!("Failed to set video mode {}x{}", width, height));
            }
        }

        CommandResult::Handled
    }

    fn window_mode(&self, cvars: &CvarRegistry) -> WindowMode {
        WindowMode::from_clamped(cvars.int(self.cvars.fullscreen))
    }

    /// Mode request built from the current cvars
    fn configured_request(&self, cvars: &CvarRegistry) -> ModeRequest {
        let (width, height) = match self.forced {
            Some(forced) => (forced.width, forced.height),
            None => (
                cvars.int(self.cvars.window_width),
                cvars.int(self.cvars.window_height),
            ),
        };
        ModeRequest {
            width,
            height,
            window_mode: self.window_mode(cvars),
        }
    }

    /// Run the display transform for a realised window and store the result
    fn finish_mode_change(&mut self, cvars: &mut CvarRegistry, geometry: WindowGeometry) {
        let (render_width, render_height) =
            self.display_transform(cvars, geometry.width, geometry.height);
        self.apply_mode(
            cvars,
            geometry.width.max(1),
            geometry.height.max(1),
            render_width,
            render_height,
            geometry.maximized,
        );
    }
}
