//! Error types for renderer operations

use vidcfg_sdk::WindowMode;

/// Error type for renderer and platform operations
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    /// The platform refused the requested display settings
    #[error("Failed to set {width}x{height} ({mode})")]
    ModeChange {
        width: i32,
        height: i32,
        mode: WindowMode,
    },

    /// Renderer backend failed to start
    #[error("Renderer init failed: {0}")]
    Init(String),

    /// Operation not supported by this backend
    #[error("Unsupported: {0}")]
    Unsupported(String),
}
