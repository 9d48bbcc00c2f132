//! Application layer: managed state, window/tray lifecycle, menus, dialogs.

pub mod dialog;
pub mod events;
pub mod menu;
pub mod state;
pub mod window;

#[cfg(desktop)]
pub mod tray;
