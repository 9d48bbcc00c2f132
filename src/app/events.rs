//! Window and run-loop event routing through the lifecycle policy.

use tauri::{AppHandle, Manager, RunEvent, Window, WindowEvent};

use crate::app::state::AppState;
use crate::app::window;
use crate::lifecycle::{CloseDecision, ExitDecision, Platform};

/// Route the main window's close request through the lifecycle policy.
///
/// Registered on the Tauri builder's `on_window_event` hook.
pub fn handle_window_event(win: &Window, event: &WindowEvent) {
    if win.label() != window::MAIN_WINDOW_LABEL {
        return;
    }

    let WindowEvent::CloseRequested { api, .. } = event else {
        return;
    };

    let state = win.app_handle().state::<AppState>();
    match state.policy().evaluate_close() {
        CloseDecision::Hide => {
            api.prevent_close();
            state
                .window_memory()
                .remember(win.is_maximized().unwrap_or(false));
            if let Err(e) = win.hide() {
                log::error!("failed to hide main window: {}", e);
            }
        }
        CloseDecision::AllowTerminate => {
            log::info!("quit flagged; letting main window close");
        }
    }
}

/// Run-loop policy: platform conventions for "all windows closed" and the
/// macOS activate signal.
pub fn handle_run_event(app_handle: &AppHandle, event: RunEvent) {
    match event {
        RunEvent::ExitRequested { api, code, .. } => {
            // An explicit exit carries a code; no code means the last window
            // closed on its own and platform convention decides.
            if code.is_none() {
                let state = app_handle.state::<AppState>();
                let decision = state
                    .policy()
                    .evaluate_all_windows_closed(Platform::current());
                if decision == ExitDecision::Ignore {
                    api.prevent_exit();
                }
            }
        }

        #[cfg(target_os = "macos")]
        RunEvent::Reopen {
            has_visible_windows,
            ..
        } => {
            if !has_visible_windows {
                activate(app_handle);
            }
        }

        _ => {}
    }
}

/// Platform activate: surface the window, recreating it if it is gone.
pub fn activate(app: &AppHandle) {
    if app
        .get_webview_window(window::MAIN_WINDOW_LABEL)
        .is_none()
    {
        // The content-ready hook shows the recreated window.
        if let Err(e) = window::open(app) {
            log::error!("failed to recreate main window: {}", e);
        }
        return;
    }
    window::show_main_window(app);
}

/// Explicit quit (tray Exit, dialog Exit): flag the policy so close handling
/// stops suppressing, then ask the runtime to terminate.
pub fn request_shell_exit(app: &AppHandle) {
    log::info!("explicit quit requested");
    app.state::<AppState>().policy().request_quit();
    app.exit(0);
}
