//! Command information types

use std::sync::Arc;

use vidcfg_engine::Console;

use crate::host::HostContext;

/// Where a command's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSource {
    /// Typed at the local console or read from a config file
    Local,
    /// Sent by a remote server
    Remote,
}

impl CommandSource {
    /// Returns true if restricted commands may run from this source
    pub fn is_trusted(&self) -> bool {
        matches!(self, Self::Local)
    }
}

/// Result of command execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum CommandResult {
    /// Not handled, try the next handler
    #[default]
    Continue = 0,
    /// Command was handled, stop processing
    Handled = 1,
}

/// Information about a command invocation
pub struct CommandInfo {
    /// Raw command arguments (index 0 is the command name)
    args: Vec<String>,

    /// Full command line
    raw_string: String,

    /// Origin of the command text
    source: CommandSource,

    /// Where replies go
    console: Arc<dyn Console>,
}

impl CommandInfo {
    /// Create new CommandInfo
    pub fn new(
        args: Vec<String>,
        raw_string: String,
        source: CommandSource,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            args,
            raw_string,
            source,
            console,
        }
    }

    /// Get the number of arguments (including command name at index 0)
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Get argument by index (0 = command name)
    ///
    /// Returns empty string if index is out of bounds.
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(|s| s.as_str()).unwrap_or("")
    }

    /// Get the command name (alias for arg(0))
    pub fn command_name(&self) -> &str {
        self.arg(0)
    }

    /// Get all arguments after command name as a single string
    pub fn arg_string(&self) -> String {
        if self.args.len() > 1 {
            self.args[1..].join(" ")
        } else {
            String::new()
        }
    }

    /// Get all arguments as a slice
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Get the full raw command string
    pub fn get_command_string(&self) -> &str {
        &self.raw_string
    }

    /// Get the command source
    pub fn source(&self) -> CommandSource {
        self.source
    }

    /// Reply to the command on the console
    pub fn reply(&self, message: &str) {
        self.console.print(message);
    }

    /// Reply with formatted message
    pub fn reply_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.reply(&args.to_string());
    }
}

impl std::fmt::Debug for CommandInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandInfo")
            .field("args", &self.args)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Type alias for command callback functions
pub type CommandCallback =
    Box<dyn Fn(&mut HostContext<'_>, &CommandInfo) -> CommandResult + Send + Sync>;
