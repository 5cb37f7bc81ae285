//! Video Configuration Manager
//!
//! Owns the display-configuration cvars and applies display modes through
//! the [`Renderer`](vidcfg_engine::Renderer) collaborator.
//!
//! # Lifecycle
//!
//! ```text
//! register ──► (load video.toml) ──► start ──► Stable
//!                                               │  ▲
//!                       VIDRESTART cvar written │  │ check_changes succeeds
//!                                               ▼  │
//!                                          ChangePending ──► FatalError
//!                                                        check_changes fails
//! ```
//!
//! The manager never keeps its own copy of the geometry. Window sizes live in
//! the cvars; the render target lives in the renderer's
//! [`RenderState`](vidcfg_sdk::RenderState), written only through
//! `Renderer::set_render_state`.

mod cvars;
mod manager;

pub use cvars::VideoCvars;
pub use manager::VideoManager;
