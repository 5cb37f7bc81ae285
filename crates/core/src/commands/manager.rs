//! Command manager - registration and dispatch

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use super::info::{CommandCallback, CommandInfo, CommandResult};
use crate::host::HostContext;

new_key_type! {
    /// Handle for a registered command
    pub struct CommandKey;
}

/// Registered command information
struct CommandEntry {
    /// Command name as registered
    name: String,
    /// Command description
    description: String,
    /// Callback function
    callback: CommandCallback,
    /// Whether remote sources are refused
    restricted: bool,
}

/// Console command registry
pub struct CommandManager {
    /// Commands indexed by key
    commands: SlotMap<CommandKey, CommandEntry>,

    /// Lookup by command name (case-insensitive, lowercase)
    by_name: HashMap<String, CommandKey>,
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandManager {
    /// Create an empty command manager
    pub fn new() -> Self {
        Self {
            commands: SlotMap::with_key(),
            by_name: HashMap::new(),
        }
    }

    /// Register a command
    ///
    /// # Arguments
    /// * `name` - Command name
    /// * `description` - Help text for the command
    /// * `callback` - Function to call when command is executed
    ///
    /// # Returns
    /// A key to manage the command, or None if the name is taken
    pub fn register<F>(&mut self, name: &str, description: &str, callback: F) -> Option<CommandKey>
    where
        F: Fn(&mut HostContext<'_>, &CommandInfo) -> CommandResult + Send + Sync + 'static,
    {
        self.register_entry(name, description, false, Box::new(callback))
    }

    /// Register a restricted command
    ///
    /// Restricted commands refuse to run from [`CommandSource::Remote`](super::CommandSource::Remote).
    pub fn register_restricted<F>(
        &mut self,
        name: &str,
        description: &str,
        callback: F,
    ) -> Option<CommandKey>
    where
        F: Fn(&mut HostContext<'_>, &CommandInfo) -> CommandResult + Send + Sync + 'static,
    {
        self.register_entry(name, description, true, Box::new(callback))
    }

    fn register_entry(
        &mut self,
        name: &str,
        description: &str,
        restricted: bool,
        callback: CommandCallback,
    ) -> Option<CommandKey> {
        let name_lower = name.to_lowercase();

        // Check if already registered
        if self.by_name.contains_key(&name_lower) {
            tracing::warn!("Command '{}' already registered", name);
            return None;
        }

        let entry = CommandEntry {
            name: name.to_string(),
            description: description.to_string(),
            callback,
            restricted,
        };

        let key = self.commands.insert(entry);
        self.by_name.insert(name_lower, key);

        tracing::debug!(
            "Registered {}command: {}",
            if restricted { "restricted " } else { "" },
            name
        );
        Some(key)
    }

    /// Unregister a command by key
    pub fn unregister(&mut self, key: CommandKey) -> bool {
        if let Some(entry) = self.commands.remove(key) {
            self.by_name.remove(&entry.name.to_lowercase());
            tracing::debug!("Unregistered command: {}", entry.name);
            true
        } else {
            false
        }
    }

    /// Find command by name
    pub fn find(&self, name: &str) -> Option<CommandKey> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Execute a command by key
    pub fn execute(
        &self,
        key: CommandKey,
        ctx: &mut HostContext<'_>,
        info: &CommandInfo,
    ) -> CommandResult {
        let Some(entry) = self.commands.get(key) else {
            return CommandResult::Continue;
        };

        if entry.restricted && !info.source().is_trusted() {
            tracing::warn!("Refused restricted command '{}' from remote source", entry.name);
            info.reply(&format!("{} is restricted and can't be run remotely", entry.name));
            return CommandResult::Handled;
        }

        (entry.callback)(ctx, info)
    }

    /// Get command description
    pub fn get_description(&self, key: CommandKey) -> Option<&str> {
        self.commands.get(key).map(|e| e.description.as_str())
    }

    /// Get command name
    pub fn get_name(&self, key: CommandKey) -> Option<&str> {
        self.commands.get(key).map(|e| e.name.as_str())
    }

    /// Check whether a command is restricted
    pub fn is_restricted(&self, key: CommandKey) -> bool {
        self.commands.get(key).is_some_and(|e| e.restricted)
    }

    /// Iterate over all registered commands
    pub fn iter(&self) -> impl Iterator<Item = (CommandKey, &str, &str)> {
        self.commands
            .iter()
            .map(|(key, entry)| (key, entry.name.as_str(), entry.description.as_str()))
    }

    /// Get total number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if command manager has no registered commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
