//! Cvar registry - registration, lookup and the three write paths

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use super::flags::CvarFlags;
use super::value::{numeric, CvarValue};
use crate::error::CvarError;

new_key_type! {
    /// Handle for a registered cvar
    pub struct CvarKey;
}

/// Registration descriptor for a cvar
#[derive(Debug, Clone)]
pub struct CvarDef {
    pub name: String,
    pub default: String,
    pub flags: CvarFlags,
    pub description: String,
    /// Inclusive numeric bounds
    pub range: Option<(f32, f32)>,
}

impl CvarDef {
    /// Create a new cvar descriptor
    ///
    /// # Arguments
    /// * `name` - The cvar name (case-insensitive)
    /// * `default` - Default value string
    /// * `flags` - Initial flags
    /// * `description` - Help text
    pub fn new(
        name: impl Into<String>,
        default: impl Into<String>,
        flags: CvarFlags,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            flags,
            description: description.into(),
            range: None,
        }
    }

    /// Set inclusive numeric bounds (builder pattern)
    ///
    /// Writes through the validated paths are clamped into `[min, max]`.
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.range = Some((min, max));
        self
    }
}

/// A registered cvar
#[derive(Debug, Clone)]
pub struct Cvar {
    name: String,
    string: String,
    /// Cached numeric value of `string`
    value: f32,
    default: String,
    description: String,
    flags: CvarFlags,
    range: Option<(f32, f32)>,
}

impl Cvar {
    fn from_def(def: CvarDef) -> Self {
        Self {
            value: numeric(&def.default),
            string: def.default.clone(),
            name: def.name,
            default: def.default,
            description: def.description,
            flags: def.flags,
            range: def.range,
        }
    }

    /// Get the cvar name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current value string
    pub fn string(&self) -> &str {
        &self.string
    }

    /// Get the numeric value (0.0 if the string is not a number)
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Get the value truncated to an integer
    pub fn int(&self) -> i32 {
        self.value as i32
    }

    /// Get the default value string
    pub fn default_string(&self) -> &str {
        &self.default
    }

    /// Get the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the flags
    pub fn flags(&self) -> CvarFlags {
        self.flags
    }

    /// Get the numeric bounds, if any
    pub fn range(&self) -> Option<(f32, f32)> {
        self.range
    }

    /// Check if the current value equals the default
    pub fn is_default(&self) -> bool {
        self.string == self.default
    }

    /// Validate and clamp a value for this cvar
    ///
    /// Returns None if the cvar is ranged and `value` isn't a number.
    fn normalize(&self, value: &str) -> Option<String> {
        let Some((min, max)) = self.range else {
            return Some(value.to_string());
        };

        let parsed = f32::parse_value(value)?;
        let clamped = parsed.clamp(min, max);
        if clamped == parsed {
            Some(value.trim().to_string())
        } else {
            Some(clamped.to_value_string())
        }
    }

    fn store(&mut self, value: String) {
        self.value = numeric(&value);
        self.string = value;
    }
}

impl std::fmt::Display for Cvar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is \"{}\" (default \"{}\")", self.name, self.string, self.default)
    }
}

/// Registry of all cvars
#[derive(Debug, Default)]
pub struct CvarRegistry {
    /// Cvars indexed by key
    cvars: SlotMap<CvarKey, Cvar>,

    /// Lookup by name (case-insensitive, lowercase)
    by_name: HashMap<String, CvarKey>,

    /// Raised by writes to `VIDRESTART` cvars
    render_info_changed: bool,
}

impl CvarRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cvar
    ///
    /// Registering a name twice returns the key of the existing cvar.
    pub fn register(&mut self, def: CvarDef) -> CvarKey {
        let name_lower = def.name.to_lowercase();

        if let Some(&key) = self.by_name.get(&name_lower) {
            tracing::warn!("Cvar '{}' already registered", def.name);
            return key;
        }

        tracing::debug!("Registered cvar: {} = \"{}\"", def.name, def.default);
        let key = self.cvars.insert(Cvar::from_def(def));
        self.by_name.insert(name_lower, key);
        key
    }

    /// Find a cvar by name
    pub fn find(&self, name: &str) -> Option<CvarKey> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Get a cvar by key
    pub fn get_cvar(&self, key: CvarKey) -> Option<&Cvar> {
        self.cvars.get(key)
    }

    /// Read a cvar as a typed value
    pub fn get<T: CvarValue>(&self, key: CvarKey) -> Option<T> {
        self.cvars.get(key).and_then(|c| T::parse_value(&c.string))
    }

    /// Get the value string ("" for an unknown key)
    pub fn string(&self, key: CvarKey) -> &str {
        self.cvars.get(key).map(|c| c.string.as_str()).unwrap_or("")
    }

    /// Get the numeric value (0.0 for an unknown key)
    pub fn value(&self, key: CvarKey) -> f32 {
        self.cvars.get(key).map(|c| c.value).unwrap_or(0.0)
    }

    /// Get the numeric value truncated to an integer
    pub fn int(&self, key: CvarKey) -> i32 {
        self.value(key) as i32
    }

    /// Get the value as a boolean (non-zero is true)
    pub fn bool(&self, key: CvarKey) -> bool {
        self.value(key) != 0.0
    }

    /// Get the flags (empty for an unknown key)
    pub fn flags(&self, key: CvarKey) -> CvarFlags {
        self.cvars.get(key).map(|c| c.flags).unwrap_or_default()
    }

    /// Console write path
    ///
    /// Rejects read-only cvars and non-numeric values for ranged cvars.
    /// Out-of-range values are clamped silently.
    pub fn set(&mut self, name: &str, value: &str) -> Result<CvarKey, CvarError> {
        let key = self
            .find(name)
            .ok_or_else(|| CvarError::NotFound(name.to_string()))?;
        let cvar = &self.cvars[key];

        if cvar.flags.contains(CvarFlags::READ_ONLY) {
            return Err(CvarError::ReadOnly(cvar.name.clone()));
        }

        let normalized = cvar.normalize(value).ok_or_else(|| CvarError::InvalidValue {
            name: cvar.name.clone(),
            value: value.to_string(),
        })?;

        self.apply(key, normalized);
        Ok(key)
    }

    /// Engine write path with validation and notification
    ///
    /// Creates the cvar if it doesn't exist and replaces its flags. The
    /// `CHANGED` bit is preserved across the flag replacement.
    pub fn full_set(
        &mut self,
        name: &str,
        value: &str,
        flags: CvarFlags,
    ) -> Result<CvarKey, CvarError> {
        let key = match self.find(name) {
            Some(key) => key,
            None => self.register(CvarDef::new(name, value, flags, "")),
        };

        let cvar = &mut self.cvars[key];
        let normalized = cvar.normalize(value).ok_or_else(|| CvarError::InvalidValue {
            name: cvar.name.clone(),
            value: value.to_string(),
        })?;

        let changed = cvar.flags & CvarFlags::CHANGED;
        cvar.flags = (flags - CvarFlags::CHANGED) | changed;

        self.apply(key, normalized);
        Ok(key)
    }

    /// Engine write path that bypasses validation and notification
    pub fn direct_set(&mut self, key: CvarKey, value: &str) {
        if let Some(cvar) = self.cvars.get_mut(key) {
            if cvar.string != value {
                tracing::trace!("{} directly set to \"{}\"", cvar.name, value);
                cvar.store(value.to_string());
            }
        }
    }

    /// Reset a cvar to its default value
    ///
    /// Goes through change notification but ignores `READ_ONLY`.
    pub fn reset(&mut self, key: CvarKey) {
        if let Some(default) = self.cvars.get(key).map(|c| c.default.clone()) {
            self.apply(key, default);
        }
    }

    /// Check the `CHANGED` bit
    pub fn is_changed(&self, key: CvarKey) -> bool {
        self.flags(key).contains(CvarFlags::CHANGED)
    }

    /// Clear the `CHANGED` bit
    pub fn clear_changed(&mut self, key: CvarKey) {
        if let Some(cvar) = self.cvars.get_mut(key) {
            cvar.flags.remove(CvarFlags::CHANGED);
        }
    }

    /// Check if a `VIDRESTART` cvar changed since the flag was last cleared
    pub fn render_info_changed(&self) -> bool {
        self.render_info_changed
    }

    /// Raise or clear the render-info-changed flag
    pub fn set_render_info_changed(&mut self, changed: bool) {
        self.render_info_changed = changed;
    }

    /// Iterate over all registered cvars
    pub fn iter(&self) -> impl Iterator<Item = (CvarKey, &Cvar)> {
        self.cvars.iter()
    }

    /// Get total number of registered cvars
    pub fn len(&self) -> usize {
        self.cvars.len()
    }

    /// Check if the registry has no cvars
    pub fn is_empty(&self) -> bool {
        self.cvars.is_empty()
    }

    /// Store an already validated value and raise notifications
    fn apply(&mut self, key: CvarKey, value: String) {
        let cvar = &mut self.cvars[key];
        if cvar.string == value {
            return;
        }

        tracing::debug!("{} changed: \"{}\" -> \"{}\"", cvar.name, cvar.string, value);
        cvar.store(value);
        cvar.flags.insert(CvarFlags::CHANGED);

        if cvar.flags.contains(CvarFlags::VIDRESTART) {
            self.render_info_changed = true;
        }
    }
}
