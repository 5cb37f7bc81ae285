//! vidcfg Core Logic
//!
//! This crate contains the configuration state of the video subsystem and
//! the logic that applies it: the cvar registry, the console command
//! dispatcher, config files and the video configuration manager.
//!
//! # Re-exports
//!
//! This crate re-exports the SDK and engine crates for convenience:
//! - [`sdk`] - Video type definitions and cvar names
//! - [`engine`] - Renderer and console interfaces

pub use vidcfg_engine as engine;
pub use vidcfg_sdk as sdk;

pub mod commands;
pub mod config;
pub mod cvars;
pub mod error;
pub mod host;
pub mod video;

// Re-export commonly used items
pub use commands::{CommandInfo, CommandKey, CommandManager, CommandResult, CommandSource};
pub use config::{ConfigError, ConfigResult, CoreConfig, ForcedResolution};
pub use cvars::{Cvar, CvarDef, CvarFlags, CvarKey, CvarRegistry, CvarValue};
pub use error::{CvarError, FatalError};
pub use host::{Host, HostContext};
pub use video::{VideoCvars, VideoManager};

#[cfg(test)]
mod tests {
    #[test]
    fn test_sdk_types_exist() {
        // Verify re-exported crates are accessible
        let _ = crate::sdk::WindowMode::default();
        let _: Option<&dyn crate::engine::Renderer> = None;
    }
}
