//! Context-menu command bound to the page's right-click handler.

use tauri::{command, LogicalPosition, Manager, Position, WebviewWindow};

use crate::app::menu;

/// Pop the in-window context menu (refresh / exit options) at the given
/// content coordinates.
#[command]
pub fn show_context_menu(window: WebviewWindow, x: f64, y: f64) -> Result<(), String> {
    let spec = menu::context_menu_spec();
    let popup = menu::build_menu(window.app_handle(), spec).map_err(|e| e.to_string())?;

    window
        .popup_menu_at(&popup, Position::Logical(LogicalPosition { x, y }))
        .map_err(|e| format!("failed to pop context menu: {}", e))
}
