//! Console Command System
//!
//! Provides registration and dispatch of console commands.
//!
//! # Architecture
//!
//! ```text
//! console text → parse (split on ';' / newline, tokenize) → CommandManager → Rust callbacks
//! ```
//!
//! # Restricted commands
//!
//! Commands registered with [`CommandManager::register_restricted`] only run
//! when the text came from the local console or config files
//! ([`CommandSource::Local`]). Server-issued text ([`CommandSource::Remote`])
//! can't invoke them.
//!
//! # Example
//!
//! ```ignore
//! use vidcfg_core::commands::{CommandManager, CommandResult};
//!
//! let mut commands = CommandManager::new();
//! commands.register("echo", "Print text", |_ctx, info| {
//!     info.reply(&info.arg_string());
//!     CommandResult::Handled
//! });
//! ```

mod info;
mod manager;
mod parse;

pub use info::{CommandCallback, CommandInfo, CommandResult, CommandSource};
pub use manager::{CommandKey, CommandManager};
pub use parse::{split_commands, tokenize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api() {
        // Test that the public API is accessible
        let _source = CommandSource::Local;
        let _result = CommandResult::Handled;
        let _manager = CommandManager::new();
    }
}
