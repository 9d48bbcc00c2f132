//! Tauri-managed shell state.
//!
//! One `AppState` instance is owned by the Tauri app and handed to controllers
//! through `Manager::state`, keeping the process-wide singleton contract
//! without ambient globals.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::lifecycle::LifecyclePolicy;

/// Process-wide shell state, managed by the Tauri app.
#[derive(Debug, Default)]
pub struct AppState {
    policy: LifecyclePolicy,
    window_memory: WindowStateMemory,
}

impl AppState {
    pub fn policy(&self) -> &LifecyclePolicy {
        &self.policy
    }

    pub fn window_memory(&self) -> &WindowStateMemory {
        &self.window_memory
    }
}

/// Remembers the main window's maximized state across hide cycles.
///
/// The runtime does not restore size state atomically with visibility, so the
/// shell records it when hiding and re-applies it after showing. In-memory
/// only; a fresh process starts non-maximized.
#[derive(Debug, Default)]
pub struct WindowStateMemory {
    was_maximized: AtomicBool,
}

impl WindowStateMemory {
    pub fn remember(&self, maximized: bool) {
        self.was_maximized.store(maximized, Ordering::SeqCst);
    }

    pub fn recall(&self) -> bool {
        self.was_maximized.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_starts_non_maximized() {
        let memory = WindowStateMemory::default();
        assert!(!memory.recall());
    }

    #[test]
    fn memory_round_trips_maximized_state() {
        // Maximized before a hide/show cycle means maximized after.
        let memory = WindowStateMemory::default();
        memory.remember(true);
        assert!(memory.recall());
        memory.remember(false);
        assert!(!memory.recall());
    }

    #[test]
    fn state_owns_a_cleared_policy() {
        let state = AppState::default();
        assert!(!state.policy().force_quit());
        assert!(!state.window_memory().recall());
    }
}
