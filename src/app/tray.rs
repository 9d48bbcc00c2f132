//! System tray setup and event handling.
//!
//! The tray icon is created once, after the first window exists, and lives
//! for the process lifetime. Left click toggles window visibility; the menu
//! offers show and quit.

use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};
use tauri::{AppHandle, Manager};

use crate::app::{menu, window};
use crate::config;
use crate::error::{ShellError, ShellResult};
use crate::icons::{self, IconName};

const TRAY_ID: &str = "main-tray";

/// Create the tray icon. Calling this twice is a logic error; the shell's
/// setup sequencing guarantees a single call.
///
/// Icon resolution cannot fail (placeholder fallback), so a broken asset
/// never prevents the tray from existing.
pub fn init(app: &AppHandle) -> ShellResult<()> {
    if app.tray_by_id(TRAY_ID).is_some() {
        return Err(ShellError::Tray(format!("tray '{TRAY_ID}' already exists")));
    }

    let tray_menu = menu::build_menu(app, menu::tray_menu_spec())?;

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(icons::resolve(IconName::App))
        .tooltip(config::tray_tooltip())
        .menu(&tray_menu)
        .show_menu_on_left_click(false)
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                window::toggle_main_window(tray.app_handle());
            }
        })
        .build(app)
        .map_err(|e| ShellError::Tray(format!("failed to build tray icon: {e}")))?;

    log::info!("tray icon created");
    Ok(())
}
