//! vidcfg SDK - Video Subsystem Type Definitions
//!
//! This crate contains the plain data types shared between the video
//! configuration manager and the renderer it drives. It has no dependencies
//! and compiles quickly, allowing parallel compilation of dependent crates.
//!
//! # Modules
//!
//! - [`video`] - Window modes, rotations, display modes and render state
//! - [`names`] - Cvar and command names used by the video subsystem

pub mod names;
pub mod video;

pub use names::*;
pub use video::*;
