//! Error types for the core crate

use vidcfg_engine::RendererError;

/// Errors from the console write path of the cvar registry
#[derive(Debug, thiserror::Error)]
pub enum CvarError {
    /// No cvar with that name
    #[error("Unknown cvar: {0}")]
    NotFound(String),

    /// Cvar can't be changed from the console
    #[error("{0} is read-only")]
    ReadOnly(String),

    /// Value can't be stored in this cvar
    #[error("Invalid value '{value}' for {name}")]
    InvalidValue { name: String, value: String },
}

/// Unrecoverable subsystem failure
///
/// The top-level loop turns this into a controlled shutdown.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    /// Renderer backend failed to start
    #[error("Can't initialize renderer: {0}")]
    RendererInit(#[source] RendererError),

    /// The configured mode couldn't be applied at startup
    #[error("Can't set initial video mode: {0}")]
    InitialMode(#[source] RendererError),

    /// A pending mode change couldn't be applied
    #[error("Can't re-initialize video subsystem: {0}")]
    VideoReinit(#[source] RendererError),
}
