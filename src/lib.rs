//! Tray-resident shell for the to-do list window.
//!
//! Wires the lifecycle policy, window controller, tray and menus together in
//! response to runtime signals. All decision logic lives in the modules; this
//! file only sequences startup and registers handlers.

mod app;
mod commands;
mod config;
mod error;
mod icons;
mod lifecycle;

use app::state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let builder = tauri::Builder::default();

    // The single-instance guard must be the first plugin so a second launch
    // exits before any other initialization runs. The callback fires in the
    // instance that holds the lock and surfaces its window.
    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        log::info!("second launch attempt detected; surfacing main window");
        app::events::activate(app);
    }));

    builder
        .manage(AppState::default())
        .on_window_event(app::events::handle_window_event)
        .on_menu_event(app::menu::handle_menu_event)
        .invoke_handler(tauri::generate_handler![
            commands::menu::show_context_menu,
            commands::logging::write_log,
            commands::logging::get_log_dir,
            config::get_shell_config,
        ])
        .setup(|app| {
            if let Err(e) = commands::logging::init(app.handle()) {
                log::warn!("file logging unavailable: {}", e);
            }

            // Window creation / content load is the single fatal path.
            if let Err(e) = app::window::open(app.handle()) {
                log::error!("fatal: {}", e);
                app::dialog::show_fatal_init_error(&format!(
                    "Could not create the application window.\n\n{e}"
                ));
                app.handle().exit(1);
                return Ok(());
            }

            // Tray comes after the window so its handlers always have a
            // window to act on. Failure here is logged and absorbed.
            #[cfg(desktop)]
            if let Err(e) = app::tray::init(app.handle()) {
                log::error!("tray initialization failed: {}", e);
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(app::events::handle_run_event);
}
