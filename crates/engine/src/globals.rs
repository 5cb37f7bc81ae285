//! Engine interface handle
//!
//! Interfaces are constructed once at startup and stored here. The handle is
//! cheap to clone; every clone refers to the same collaborators.

use std::sync::Arc;
use std::thread::ThreadId;

use crate::interfaces::{Console, Renderer};

/// Engine state containing all collaborator interfaces
#[derive(Clone)]
pub struct EngineInterfaces {
    /// Renderer and platform layer (required)
    pub renderer: Arc<dyn Renderer>,

    /// Console output (required)
    pub console: Arc<dyn Console>,

    /// Main thread ID for thread safety checks
    main_thread_id: ThreadId,
}

impl EngineInterfaces {
    /// Bundle the collaborators, recording the calling thread as the owner
    pub fn new(renderer: Arc<dyn Renderer>, console: Arc<dyn Console>) -> Self {
        tracing::debug!("Engine interfaces created");
        Self {
            renderer,
            console,
            main_thread_id: std::thread::current().id(),
        }
    }

    /// Check if we're on the thread that owns the interfaces
    pub fn is_main_thread(&self) -> bool {
        std::thread::current().id() == self.main_thread_id
    }

    /// Get the owning thread ID
    pub fn main_thread_id(&self) -> ThreadId {
        self.main_thread_id
    }

    /// Print to the console
    pub fn print(&self, text: &str) {
        self.console.print(text);
    }
}

impl std::fmt::Debug for EngineInterfaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineInterfaces")
            .field("main_thread_id", &self.main_thread_id)
            .finish_non_exhaustive()
    }
}
