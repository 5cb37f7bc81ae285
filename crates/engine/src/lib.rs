//! vidcfg Engine - Renderer and Console Interfaces
//!
//! This crate handles:
//! - The [`Renderer`] and [`Console`] traits the video manager drives
//! - Bundling the collaborators into an [`EngineInterfaces`] handle
//! - A [`HeadlessRenderer`] that stands in for a real backend
//!
//! # Architecture
//!
//! Interfaces are constructed once at startup and handed to the host as an
//! [`EngineInterfaces`] value. There is no global storage; everything that
//! needs the renderer receives the handle explicitly.
//!
//! # Thread Safety
//!
//! Collaborators are `Send + Sync` so they can be shared behind `Arc`, but
//! all calls are expected from the thread that built the handle. That thread
//! ID is stored for runtime checks via [`EngineInterfaces::is_main_thread`].

pub mod error;
pub mod globals;
pub mod headless;
pub mod interfaces;

pub use error::RendererError;
pub use globals::EngineInterfaces;
pub use headless::{BufferConsole, HeadlessRenderer, LogConsole};
pub use interfaces::{Console, Renderer};
