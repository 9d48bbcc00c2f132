//! Shell configuration.
//!
//! Window defaults and tray texts. Nothing here is persisted; the struct
//! exists so the wiring and the page read one source of truth instead of
//! scattered literals.
//!
//! Uses `parking_lot::RwLock` behind a `lazy_static` global for thread-safe
//! access from commands and setup code.

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Global shell configuration.
    pub static ref SHELL_CONFIG: RwLock<ShellConfig> = RwLock::new(ShellConfig::default());
}

/// Shell-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// Default window width in logical pixels.
    pub window_width: f64,
    /// Default window height in logical pixels.
    pub window_height: f64,
    /// Main window title.
    pub window_title: String,
    /// Tooltip shown when hovering the tray icon.
    pub tray_tooltip: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            window_title: "Todo List".to_string(),
            tray_tooltip: "Todo List".to_string(),
        }
    }
}

/// Window size for the main window builder.
pub fn window_size() -> (f64, f64) {
    let cfg = SHELL_CONFIG.read();
    (cfg.window_width, cfg.window_height)
}

pub fn window_title() -> String {
    SHELL_CONFIG.read().window_title.clone()
}

pub fn tray_tooltip() -> String {
    SHELL_CONFIG.read().tray_tooltip.clone()
}

/// Get the current shell configuration (for the page).
#[tauri::command]
pub fn get_shell_config() -> ShellConfig {
    SHELL_CONFIG.read().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.window_width, 1200.0);
        assert_eq!(config.window_height, 800.0);
        assert_eq!(config.window_title, "Todo List");
        assert_eq!(config.tray_tooltip, "Todo List");
    }

    #[test]
    #[serial]
    fn test_accessors_track_global() {
        *SHELL_CONFIG.write() = ShellConfig::default();
        assert_eq!(window_size(), (1200.0, 800.0));

        SHELL_CONFIG.write().tray_tooltip = "Custom".to_string();
        assert_eq!(tray_tooltip(), "Custom");

        // Reset
        *SHELL_CONFIG.write() = ShellConfig::default();
    }

    #[test]
    #[serial]
    fn test_config_round_trips_through_json() {
        let config = ShellConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("windowWidth"));
        let back: ShellConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.window_title, config.window_title);
    }
}
