//! Native message dialogs: the three-way exit prompt and the fatal
//! initialization error box.

use tauri::AppHandle;

use crate::app::{events, window};

const EXIT_LABEL: &str = "Exit";
const MINIMIZE_LABEL: &str = "Minimize";
const CANCEL_LABEL: &str = "Cancel";

/// What the user picked in the exit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Cancel,
    Minimize,
    Exit,
}

/// Map a dialog result to a choice. Anything that is not an explicit Exit or
/// Minimize (including dismissing the dialog) counts as Cancel, so the
/// destructive path is never taken by accident.
fn map_exit_choice(result: &rfd::MessageDialogResult) -> ExitChoice {
    match result {
        rfd::MessageDialogResult::Custom(label) => match label.as_str() {
            EXIT_LABEL => ExitChoice::Exit,
            MINIMIZE_LABEL => ExitChoice::Minimize,
            _ => ExitChoice::Cancel,
        },
        _ => ExitChoice::Cancel,
    }
}

/// Open the three-way exit dialog (Cancel / Minimize / Exit) without blocking
/// the event loop, then apply the choice.
pub fn prompt_exit_options(app: &AppHandle) {
    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        let result = rfd::AsyncMessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Exit Options")
            .set_description(
                "How would you like to exit?\n\
                 Choosing 'Minimize' keeps the app running in the background.",
            )
            .set_buttons(rfd::MessageButtons::YesNoCancelCustom(
                EXIT_LABEL.to_string(),
                MINIMIZE_LABEL.to_string(),
                CANCEL_LABEL.to_string(),
            ))
            .show()
            .await;

        match map_exit_choice(&result) {
            ExitChoice::Cancel => {}
            ExitChoice::Minimize => window::hide_main_window(&app),
            ExitChoice::Exit => events::request_shell_exit(&app),
        }
    });
}

/// Blocking error box for the single fatal path (window creation / content
/// load failure). The caller terminates the process afterwards.
pub fn show_fatal_init_error(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Initialization Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
