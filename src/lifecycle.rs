//! Lifecycle policy: the decision point between "hide to tray" and "really quit".
//!
//! The policy holds a single one-way flag. Until an explicit quit action (tray
//! Exit, dialog Exit) sets it, a close request only hides the window; after
//! that, close requests are allowed to terminate the process. A fresh process
//! always starts with the flag cleared.

use std::sync::atomic::{AtomicBool, Ordering};

/// What a close request should do to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Suppress the close and hide the window (tray residency).
    Hide,
    /// Let the window actually close.
    AllowTerminate,
}

/// What to do when the last window has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    /// Let the process exit.
    Terminate,
    /// Keep the process resident with no open windows.
    Ignore,
}

/// Desktop platform, as far as exit conventions are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// One-way quit flag governing close-request handling.
#[derive(Debug, Default)]
pub struct LifecyclePolicy {
    force_quit: AtomicBool,
}

impl LifecyclePolicy {
    /// Mark the process as quitting. There is no way back within a process
    /// lifetime.
    pub fn request_quit(&self) {
        self.force_quit.store(true, Ordering::SeqCst);
    }

    pub fn force_quit(&self) -> bool {
        self.force_quit.load(Ordering::SeqCst)
    }

    /// Decide what a window close request should do right now.
    pub fn evaluate_close(&self) -> CloseDecision {
        if self.force_quit() {
            CloseDecision::AllowTerminate
        } else {
            CloseDecision::Hide
        }
    }

    /// Decide whether the process survives losing its last window.
    ///
    /// macOS apps conventionally stay resident with no open windows. Everywhere
    /// else, losing every window means the user closed through an OS path that
    /// bypasses the hide policy, so the process terminates regardless of the
    /// quit flag.
    pub fn evaluate_all_windows_closed(&self, platform: Platform) -> ExitDecision {
        match platform {
            Platform::MacOs => ExitDecision::Ignore,
            Platform::Windows | Platform::Linux => ExitDecision::Terminate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_defaults_to_hide() {
        let policy = LifecyclePolicy::default();
        assert!(!policy.force_quit());
        assert_eq!(policy.evaluate_close(), CloseDecision::Hide);
    }

    #[test]
    fn repeated_close_requests_keep_hiding() {
        // Hiding is idempotent; no number of close requests terminates.
        let policy = LifecyclePolicy::default();
        for _ in 0..100 {
            assert_eq!(policy.evaluate_close(), CloseDecision::Hide);
        }
        assert!(!policy.force_quit());
    }

    #[test]
    fn quit_flag_is_one_way() {
        // Once requested, every later close evaluates to AllowTerminate.
        let policy = LifecyclePolicy::default();
        policy.request_quit();
        assert!(policy.force_quit());
        for _ in 0..10 {
            assert_eq!(policy.evaluate_close(), CloseDecision::AllowTerminate);
        }
        // Requesting again changes nothing.
        policy.request_quit();
        assert_eq!(policy.evaluate_close(), CloseDecision::AllowTerminate);
    }

    #[test]
    fn hide_then_quit_scenario() {
        // Close hides while the flag is clear; a tray exit flips the flag and
        // close requests stop suppressing termination.
        let policy = LifecyclePolicy::default();
        assert_eq!(policy.evaluate_close(), CloseDecision::Hide);
        policy.request_quit();
        assert_eq!(policy.evaluate_close(), CloseDecision::AllowTerminate);
    }

    #[test]
    fn all_windows_closed_terminates_on_non_mac() {
        // Unconditional terminate off macOS, whatever the flag says.
        let policy = LifecyclePolicy::default();
        assert_eq!(
            policy.evaluate_all_windows_closed(Platform::Windows),
            ExitDecision::Terminate
        );
        assert_eq!(
            policy.evaluate_all_windows_closed(Platform::Linux),
            ExitDecision::Terminate
        );
        policy.request_quit();
        assert_eq!(
            policy.evaluate_all_windows_closed(Platform::Linux),
            ExitDecision::Terminate
        );
    }

    #[test]
    fn all_windows_closed_ignored_on_mac() {
        let policy = LifecyclePolicy::default();
        assert_eq!(
            policy.evaluate_all_windows_closed(Platform::MacOs),
            ExitDecision::Ignore
        );
        policy.request_quit();
        assert_eq!(
            policy.evaluate_all_windows_closed(Platform::MacOs),
            ExitDecision::Ignore
        );
    }
}
