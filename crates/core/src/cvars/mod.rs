//! Cvar System - Named configuration values with flags
//!
//! Cvars are string-valued settings with a cached numeric value, a flag set
//! and optional numeric bounds. They are registered once at startup and live
//! in a [`CvarRegistry`] until shutdown.
//!
//! There are three ways to write a cvar:
//!
//! 1. [`CvarRegistry::set`] - the console path. Honors `READ_ONLY`, validates
//!    ranged values and raises change notifications.
//! 2. [`CvarRegistry::full_set`] - engine path. Same validation and
//!    notification but may create the cvar and replaces its flags.
//! 3. [`CvarRegistry::direct_set`] - engine path that writes the value as-is
//!    with no checks and no notification.
//!
//! # Example
//!
//! ```ignore
//! use vidcfg_core::cvars::{CvarDef, CvarFlags, CvarRegistry};
//!
//! let mut cvars = CvarRegistry::new();
//! let key = cvars.register(
//!     CvarDef::new("vid_rotate", "0", CvarFlags::VIDRESTART, "screen rotation (0-3)")
//!         .with_range(0.0, 3.0),
//! );
//!
//! cvars.set("vid_rotate", "7")?;
//! assert_eq!(cvars.int(key), 3);
//! assert!(cvars.render_info_changed());
//! ```

mod flags;
mod registry;
mod value;

pub use flags::CvarFlags;
pub use registry::{Cvar, CvarDef, CvarKey, CvarRegistry};
pub use value::CvarValue;
