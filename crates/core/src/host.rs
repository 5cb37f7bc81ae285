//! Host - owns the configuration state and drives the per-frame poll
//!
//! All cvar writes and mode changes go through the [`Host`] on the thread
//! that created it.

use std::path::Path;

use tracing::instrument;

use vidcfg_engine::EngineInterfaces;
use vidcfg_sdk::names;

use crate::commands::{split_commands, tokenize, CommandInfo, CommandManager, CommandSource};
use crate::config::{ConfigResult, CoreConfig};
use crate::cvars::{CvarDef, CvarFlags, CvarRegistry};
use crate::error::FatalError;
use crate::video::VideoManager;

/// Mutable state handed to command callbacks
pub struct HostContext<'a> {
    pub cvars: &'a mut CvarRegistry,
    pub video: &'a mut VideoManager,
    pub engine: &'a EngineInterfaces,
}

/// Top-level owner of cvars, commands and the video manager
pub struct Host {
    engine: EngineInterfaces,
    cvars: CvarRegistry,
    commands: CommandManager,
    video: VideoManager,
    frame_count: u64,
}

impl Host {
    /// Register everything and apply the configured video mode
    ///
    /// If `video_config` is given, persisted video cvars are restored from it
    /// before the first mode is applied.
    #[instrument(skip_all)]
    pub fn new(
        engine: EngineInterfaces,
        config: &CoreConfig,
        video_config: Option<&Path>,
    ) -> Result<Self, FatalError> {
        tracing::info!("Host initializing...");

        let mut cvars = CvarRegistry::new();
        let mut commands = CommandManager::new();

        cvars.register(CvarDef::new(
            names::CL_ALLOW_LEVELSHOTS,
            "0",
            CvarFlags::ARCHIVE,
            "allow engine to use individual levelshots instead of 'loading' image",
        ));

        let mut video = VideoManager::register(&mut cvars, &mut commands, engine.clone(), config);

        if let Some(path) = video_config {
            if let Err(err) = crate::config::video::load(&mut cvars, path) {
                tracing::warn!("Ignoring video config {:?}: {}", path, err);
            }
        }

        video.start(&mut cvars)?;

        tracing::info!(
            "Host initialized ({} cvars, {} commands)",
            cvars.len(),
            commands.len()
        );

        Ok(Self {
            engine,
            cvars,
            commands,
            video,
            frame_count: 0,
        })
    }

    /// Get the cvar registry
    pub fn cvars(&self) -> &CvarRegistry {
        &self.cvars
    }

    /// Get the cvar registry for engine-side writes
    pub fn cvars_mut(&mut self) -> &mut CvarRegistry {
        &mut self.cvars
    }

    /// Get the command manager
    pub fn commands(&self) -> &CommandManager {
        &self.commands
    }

    /// Get the video manager
    pub fn video(&self) -> &VideoManager {
        &self.video
    }

    /// Get the engine interfaces
    pub fn engine(&self) -> &EngineInterfaces {
        &self.engine
    }

    /// Number of frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one frame: poll for pending configuration changes
    pub fn frame(&mut self) -> Result<(), FatalError> {
        self.frame_count += 1;
        tracing::trace!("Frame {}", self.frame_count);
        self.video.check_changes(&mut self.cvars)
    }

    /// Record a window move reported by the platform
    pub fn window_moved(&mut self, x: i32, y: i32) {
        self.video.save_window_position(&mut self.cvars, x, y);
    }

    /// Execute console text
    ///
    /// The text may contain several commands separated by `;` or newlines.
    pub fn execute(&mut self, text: &str, source: CommandSource) {
        for line in split_commands(text) {
            let args = tokenize(&line);
            if args.is_empty() {
                continue;
            }
            self.execute_tokens(args, line, source);
        }
    }

    fn execute_tokens(&mut self, args: Vec<String>, line: String, source: CommandSource) {
        let info = CommandInfo::new(args, line, source, self.engine.console.clone());
        let name = info.command_name();

        if let Some(key) = self.commands.find(name) {
            let Self {
                engine,
                cvars,
                commands,
                video,
                ..
            } = self;
            let mut ctx = HostContext {
                cvars,
                video,
                engine,
            };
            commands.execute(key, &mut ctx, &info);
            return;
        }

        if let Some(key) = self.cvars.find(name) {
            if info.arg_count() < 2 {
                if let Some(cvar) = self.cvars.get_cvar(key) {
                    info.reply(&cvar.to_string());
                }
                return;
            }

            if let Err(err) = self.cvars.set(name, info.arg(1)) {
                info.reply(&err.to_string());
            }
            return;
        }

        info.reply(&format!("Unknown command \"{}\"", name));
    }

    /// Restore the persisted video cvars
    ///
    /// Values are written without notification; the next mode change picks
    /// them up. Returns the number of cvars restored.
    pub fn load_video_config(&mut self, path: &Path) -> ConfigResult<usize> {
        crate::config::video::load(&mut self.cvars, path)
    }

    /// Save the persisted video cvars
    pub fn save_video_config(&self, path: &Path) -> ConfigResult<()> {
        crate::config::video::save(&self.cvars, path)
    }

    /// Shutdown the host
    pub fn shutdown(self) {
        tracing::info!("Host shutting down after {} frames", self.frame_count);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vidcfg_engine::{BufferConsole, HeadlessRenderer, Renderer};
    use vidcfg_sdk::WindowMode;

    use super::*;
    use crate::commands::CommandResult;
    use crate::config::test_dir;

    fn host() -> (Host, Arc<HeadlessRenderer>, Arc<BufferConsole>) {
        let renderer = Arc::new(HeadlessRenderer::default());
        let console = Arc::new(BufferConsole::default());
        let engine = EngineInterfaces::new(renderer.clone(), console.clone());
        let host = Host::new(engine, &CoreConfig::default(), None).unwrap();
        (host, renderer, console)
    }

    #[test]
    fn test_new_registers_video_subsystem() {
        let (host, renderer, _) = host();
        assert!(host.commands().find("vid_setmode").is_some());
        assert!(host.cvars().find("vid_width").is_some());
        assert_eq!(renderer.requests().len(), 1);
        assert_eq!(host.video().mode_description(0).as_deref(), Some("640x480"));
    }

    #[test]
    fn test_execute_setmode() {
        let (mut host, renderer, console) = host();
        host.execute("vid_setmode 1024 768", CommandSource::Local);

        assert_eq!(renderer.render_state().width, 1024);
        assert_eq!(
            console.last().as_deref(),
            Some("Video mode set to 1024x768 (windowed)")
        );
    }

    #[test]
    fn test_remote_source_cannot_run_restricted_command() {
        let (mut host, renderer, console) = host();
        let requests = renderer.requests().len();

        host.execute("vid_setmode 1024 768", CommandSource::Remote);

        assert_eq!(renderer.requests().len(), requests);
        assert_eq!(
            console.last().as_deref(),
            Some("vid_setmode is restricted and can't be run remotely")
        );
    }

    #[test]
    fn test_cvar_print_and_set() {
        let (mut host, _, console) = host();

        host.execute("fullscreen", CommandSource::Local);
        assert_eq!(
            console.last().as_deref(),
            Some("fullscreen is \"0\" (default \"0\")")
        );

        host.execute("fullscreen 1", CommandSource::Local);
        let key = host.cvars().find("fullscreen").unwrap();
        assert_eq!(host.cvars().int(key), 1);
        assert!(host.cvars().render_info_changed());

        host.execute("width 1920", CommandSource::Local);
        assert_eq!(console.last().as_deref(), Some("width is read-only"));
    }

    #[test]
    fn test_unknown_command() {
        let (mut host, _, console) = host();
        host.execute("bogus 1", CommandSource::Local);
        assert_eq!(console.last().as_deref(), Some("Unknown command \"bogus\""));
    }

    #[test]
    fn test_frame_applies_pending_change() {
        let (mut host, renderer, _) = host();
        host.execute("fullscreen 2; cl_allow_levelshots 1", CommandSource::Local);

        host.frame().unwrap();

        assert!(!host.cvars().render_info_changed());
        assert_eq!(
            renderer.last_request().map(|r| r.window_mode),
            Some(WindowMode::Borderless)
        );
        // Borderless realises the desktop size
        assert_eq!(renderer.render_state().width, 1920);
        assert_eq!(renderer.texture_reloads(), 1);
        assert_eq!(host.frame_count(), 1);
    }

    #[test]
    fn test_frame_failure_is_fatal() {
        let (mut host, renderer, _) = host();
        host.execute("fullscreen 1", CommandSource::Local);
        renderer.set_fail_mode_changes(true);

        assert!(matches!(host.frame(), Err(FatalError::VideoReinit(_))));
    }

    #[test]
    fn test_registered_command_from_context() {
        let (mut host, _, console) = host();
        host.commands.register("vid_center", "print window centre", |ctx, info| {
            let (x, y) = ctx.video.window_center();
            info.reply(&format!("{} {}", x, y));
            CommandResult::Handled
        });

        host.execute("vid_center", CommandSource::Local);
        assert_eq!(console.last().as_deref(), Some("320 240"));
    }

    #[test]
    fn test_video_config_round_trip() {
        let dir = test_dir("host-video");
        let path = dir.join("video.toml");

        let (mut host, _, _) = host();
        host.execute("vid_setmode 1280 1024", CommandSource::Local);
        host.window_moved(10, 20);
        host.save_video_config(&path).unwrap();
        host.shutdown();

        let renderer = Arc::new(HeadlessRenderer::default());
        let engine = EngineInterfaces::new(renderer.clone(), Arc::new(BufferConsole::default()));
        let host = Host::new(engine, &CoreConfig::default(), Some(&path)).unwrap();

        let request = renderer.last_request().unwrap();
        assert_eq!((request.width, request.height), (1280, 1024));
        let geometry = host.video().geometry(host.cvars());
        assert_eq!((geometry.window_x, geometry.window_y), (10, 20));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_video_config_after_start() {
        let dir = test_dir("host-video-late");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("video.toml");
        std::fs::write(&path, "[cvars]\nvid_rotate = \"2\"\n").unwrap();

        let (mut host, _, _) = host();
        assert_eq!(host.load_video_config(&path).unwrap(), 1);
        let key = host.cvars().find("vid_rotate").unwrap();
        assert_eq!(host.cvars().int(key), 2);
        assert!(!host.cvars().render_info_changed());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
