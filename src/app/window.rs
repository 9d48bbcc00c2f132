//! Primary window control: creation, show/hide/toggle, content-ready handling.
//!
//! The shell owns exactly one window, labeled "main". It is created hidden and
//! shown once its content finishes loading; after that it only ever hides and
//! shows again. The handle is destroyed only when the process really quits.

use tauri::webview::PageLoadEvent;
use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::app::state::AppState;
use crate::config;
use crate::error::{ShellError, ShellResult};
use crate::icons::{self, IconName};

pub const MAIN_WINDOW_LABEL: &str = "main";

/// What a tray click should do to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Show,
    Hide,
}

/// Pure toggle decision: a hidden or minimized window gets surfaced, a
/// visible one gets hidden.
pub fn toggle_action(visible: bool, minimized: bool) -> ToggleAction {
    if !visible || minimized {
        ToggleAction::Show
    } else {
        ToggleAction::Hide
    }
}

/// Create the main window, hidden, and kick off its content load.
///
/// Returns the existing handle if the window is already open, so there is
/// never more than one concurrent open. Creation failure is the shell's one
/// fatal error class; the caller decides how to terminate.
pub fn open(app: &AppHandle) -> ShellResult<WebviewWindow> {
    if let Some(existing) = app.get_webview_window(MAIN_WINDOW_LABEL) {
        return Ok(existing);
    }

    let (width, height) = config::window_size();
    let window = WebviewWindowBuilder::new(
        app,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App("index.html".into()),
    )
    .title(config::window_title())
    .inner_size(width, height)
    .visible(false)
    .on_page_load(|window, payload| {
        if let PageLoadEvent::Finished = payload.event() {
            handle_content_ready(&window);
        }
    })
    .build()
    .map_err(|e| ShellError::Window(format!("failed to create main window: {e}")))?;

    let _ = window.set_icon(icons::resolve(IconName::App));

    Ok(window)
}

/// Content finished loading: transition from hidden to shown.
///
/// Maximized state is re-applied after showing because the runtime does not
/// restore size state atomically with visibility.
pub fn handle_content_ready(window: &WebviewWindow) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }

    log::info!("main window content ready");
    if let Err(e) = window.show() {
        log::error!("failed to show main window: {}", e);
    }

    let state = window.app_handle().state::<AppState>();
    if state.window_memory().recall() {
        let _ = window.maximize();
    }
}

/// Surface the main window: unminimize if needed, show, focus. A no-op beyond
/// focusing when the window is already visible.
pub fn show_main_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        log::warn!("show requested but no main window exists");
        return;
    };

    if window.is_minimized().unwrap_or(false) {
        let _ = window.unminimize();
    }
    let _ = window.show();

    let state = app.state::<AppState>();
    if state.window_memory().recall() && !window.is_maximized().unwrap_or(false) {
        let _ = window.maximize();
    }

    let _ = window.set_focus();
}

/// Hide the main window, remembering its maximized state for the next show.
pub fn hide_main_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };

    let state = app.state::<AppState>();
    state
        .window_memory()
        .remember(window.is_maximized().unwrap_or(false));

    if let Err(e) = window.hide() {
        log::error!("failed to hide main window: {}", e);
    }
}

/// Tray-icon activation: show if hidden, hide if visible.
pub fn toggle_main_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };

    let visible = window.is_visible().unwrap_or(false);
    let minimized = window.is_minimized().unwrap_or(false);

    match toggle_action(visible, minimized) {
        ToggleAction::Show => show_main_window(app),
        ToggleAction::Hide => hide_main_window(app),
    }
}

/// Reload the window content in place (state-preserving reset).
pub fn refresh_main_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };

    if let Err(e) = window.eval("window.location.reload()") {
        log::error!("failed to refresh main window: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_window_gets_shown() {
        assert_eq!(toggle_action(false, false), ToggleAction::Show);
    }

    #[test]
    fn minimized_window_gets_shown_even_if_visible() {
        assert_eq!(toggle_action(true, true), ToggleAction::Show);
        assert_eq!(toggle_action(false, true), ToggleAction::Show);
    }

    #[test]
    fn visible_window_gets_hidden() {
        assert_eq!(toggle_action(true, false), ToggleAction::Hide);
    }

    #[test]
    fn two_toggles_restore_visibility() {
        // Net effect of two toggles is the original visibility.
        let mut visible = true;
        for _ in 0..2 {
            visible = match toggle_action(visible, false) {
                ToggleAction::Show => true,
                ToggleAction::Hide => false,
            };
        }
        assert!(visible);
    }
}
