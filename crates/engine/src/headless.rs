//! Headless collaborators
//!
//! A renderer that keeps all of its state in memory and a couple of console
//! sinks. The client binary runs on these when no real backend is linked,
//! and the tests use them to observe what the video manager asked for.

use parking_lot::Mutex;

use vidcfg_sdk::{
    DisplayMode, ModeRequest, RefRotation, RenderState, WindowGeometry, WindowMode,
};

use crate::error::RendererError;
use crate::interfaces::{Console, Renderer};

/// Mutable renderer state
#[derive(Debug)]
struct HeadlessState {
    render_state: RenderState,
    rotation: RefRotation,
    requests: Vec<ModeRequest>,
    reinit_count: u32,
    texture_reloads: u32,
    fail_mode_changes: bool,
}

/// In-memory renderer backend
#[derive(Debug)]
pub struct HeadlessRenderer {
    modes: Vec<DisplayMode>,
    /// Overrides the enumerated mode count
    reported_mode_count: Option<usize>,
    /// Size reported for borderless windows
    desktop: (i32, i32),
    supports_transform: bool,
    fail_init: bool,
    state: Mutex<HeadlessState>,
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new(vec![
            DisplayMode::new(640, 480),
            DisplayMode::new(800, 600),
            DisplayMode::new(1024, 768),
            DisplayMode::new(1280, 1024),
            DisplayMode::new(1920, 1080),
        ])
    }
}

impl HeadlessRenderer {
    /// Create a renderer that enumerates `modes`
    pub fn new(modes: Vec<DisplayMode>) -> Self {
        Self {
            modes,
            reported_mode_count: None,
            desktop: (1920, 1080),
            supports_transform: true,
            fail_init: false,
            state: Mutex::new(HeadlessState {
                render_state: RenderState::default(),
                rotation: RefRotation::None,
                requests: Vec::new(),
                reinit_count: 0,
                texture_reloads: 0,
                fail_mode_changes: false,
            }),
        }
    }

    /// Set the desktop size used for borderless windows (builder pattern)
    pub fn with_desktop(mut self, width: i32, height: i32) -> Self {
        self.desktop = (width, height);
        self
    }

    /// Report `count` modes regardless of how many exist (builder pattern)
    ///
    /// Indices past the real modes return None, like a backend that
    /// drops a mode after enumerating it.
    pub fn with_reported_mode_count(mut self, count: usize) -> Self {
        self.reported_mode_count = Some(count);
        self
    }

    /// Disable screen transform support (builder pattern)
    pub fn without_transform(mut self) -> Self {
        self.supports_transform = false;
        self
    }

    /// Make `init` fail (builder pattern)
    pub fn with_failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// Make every subsequent mode change fail or succeed
    pub fn set_fail_mode_changes(&self, fail: bool) {
        self.state.lock().fail_mode_changes = fail;
    }

    /// All mode requests received so far
    pub fn requests(&self) -> Vec<ModeRequest> {
        self.state.lock().requests.clone()
    }

    /// Most recent mode request
    pub fn last_request(&self) -> Option<ModeRequest> {
        self.state.lock().requests.last().copied()
    }

    /// Number of screen re-initializations
    pub fn reinit_count(&self) -> u32 {
        self.state.lock().reinit_count
    }

    /// Number of texture reloads
    pub fn texture_reloads(&self) -> u32 {
        self.state.lock().texture_reloads
    }

    fn realise(&self, request: ModeRequest) -> Result<WindowGeometry, RendererError> {
        let mut state = self.state.lock();
        state.requests.push(request);

        if state.fail_mode_changes {
            tracing::warn!(
                "Headless renderer rejecting {}x{} ({})",
                request.width,
                request.height,
                request.window_mode
            );
            return Err(RendererError::ModeChange {
                width: request.width,
                height: request.height,
                mode: request.window_mode,
            });
        }

        let (width, height) = match request.window_mode {
            WindowMode::Borderless => self.desktop,
            WindowMode::Windowed | WindowMode::Fullscreen => (request.width, request.height),
        };

        Ok(WindowGeometry {
            width,
            height,
            maximized: false,
        })
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&self) -> Result<(), RendererError> {
        if self.fail_init {
            return Err(RendererError::Init("headless init disabled".to_string()));
        }
        tracing::debug!("Headless renderer initialized with {} modes", self.modes.len());
        Ok(())
    }

    fn video_mode_count(&self) -> usize {
        self.reported_mode_count.unwrap_or(self.modes.len())
    }

    fn video_mode(&self, index: usize) -> Option<DisplayMode> {
        self.modes.get(index).cloned()
    }

    fn change_display_settings(
        &self,
        request: ModeRequest,
    ) -> Result<WindowGeometry, RendererError> {
        self.realise(request)
    }

    fn set_mode(&self, request: ModeRequest) -> Result<WindowGeometry, RendererError> {
        self.realise(request)
    }

    fn set_display_transform(&self, rotation: RefRotation, scale: f32) -> bool {
        if !self.supports_transform {
            return false;
        }
        tracing::trace!("Display transform: {:?} x{}", rotation, scale);
        true
    }

    fn rotation(&self) -> RefRotation {
        self.state.lock().rotation
    }

    fn set_rotation(&self, rotation: RefRotation) {
        self.state.lock().rotation = rotation;
    }

    fn render_state(&self) -> RenderState {
        self.state.lock().render_state
    }

    fn set_render_state(&self, render_state: RenderState) {
        self.state.lock().render_state = render_state;
    }

    fn reinit_screen(&self) {
        self.state.lock().reinit_count += 1;
    }

    fn reload_textures(&self) {
        self.state.lock().texture_reloads += 1;
    }
}

/// Console that forwards every line to `tracing`
#[derive(Debug, Default)]
pub struct LogConsole;

impl Console for LogConsole {
    fn print(&self, text: &str) {
        tracing::info!("[Console] {}", text);
    }
}

/// Console that keeps printed lines in memory
#[derive(Debug, Default)]
pub struct BufferConsole {
    lines: Mutex<Vec<String>>,
}

impl BufferConsole {
    /// Lines printed so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Most recent line
    pub fn last(&self) -> Option<String> {
        self.lines.lock().last().cloned()
    }

    /// Drop all buffered lines
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Console for BufferConsole {
    fn print(&self, text: &str) {
        self.lines.lock().push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(width: i32, height: i32, window_mode: WindowMode) -> ModeRequest {
        ModeRequest {
            width,
            height,
            window_mode,
        }
    }

    #[test]
    fn test_windowed_request_realises_requested_size() {
        let renderer = HeadlessRenderer::default();
        let geometry = renderer
            .change_display_settings(request(800, 600, WindowMode::Windowed))
            .unwrap();
        assert_eq!((geometry.width, geometry.height), (800, 600));
        assert_eq!(renderer.requests().len(), 1);
    }

    #[test]
    fn test_borderless_uses_desktop_size() {
        let renderer = HeadlessRenderer::default().with_desktop(2560, 1440);
        let geometry = renderer
            .set_mode(request(800, 600, WindowMode::Borderless))
            .unwrap();
        assert_eq!((geometry.width, geometry.height), (2560, 1440));
    }

    #[test]
    fn test_failing_mode_change() {
        let renderer = HeadlessRenderer::default();
        renderer.set_fail_mode_changes(true);
        let result = renderer.set_mode(request(800, 600, WindowMode::Fullscreen));
        assert!(matches!(result, Err(RendererError::ModeChange { width: 800, .. })));
        // The request is still recorded
        assert_eq!(renderer.last_request(), Some(request(800, 600, WindowMode::Fullscreen)));
    }

    #[test]
    fn test_mode_enumeration() {
        let renderer = HeadlessRenderer::default();
        assert_eq!(renderer.video_mode_count(), 5);
        assert_eq!(renderer.video_mode(1).unwrap().desc, "800x600");
        assert!(renderer.video_mode(5).is_none());
    }

    #[test]
    fn test_buffer_console() {
        let console = BufferConsole::default();
        console.print("one");
        console.print("two");
        assert_eq!(console.last().as_deref(), Some("two"));
        console.clear();
        assert!(console.lines().is_empty());
    }
}
