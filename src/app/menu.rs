//! Declarative menu specs and menu-event routing.
//!
//! Menus are described as immutable `MenuSpec` values mapping typed actions to
//! labels and icon references; the Tauri menu objects are built from a spec at
//! creation time. Handlers dispatch on `MenuAction`, never on raw label or id
//! strings.

use tauri::menu::{IconMenuItem, Menu, MenuEvent, MenuItem};
use tauri::{AppHandle, Wry};

use crate::app::{dialog, events, window};
use crate::error::{ShellError, ShellResult};
use crate::icons::{self, IconName};

/// Everything a menu entry can do in this shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Surface the primary window.
    ShowWindow,
    /// Flag the quit and terminate.
    Quit,
    /// Reload the window content in place.
    Refresh,
    /// Open the three-way exit dialog.
    ExitOptions,
}

impl MenuAction {
    pub const fn id(self) -> &'static str {
        match self {
            MenuAction::ShowWindow => "menu.show",
            MenuAction::Quit => "menu.quit",
            MenuAction::Refresh => "menu.refresh",
            MenuAction::ExitOptions => "menu.exit-options",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "menu.show" => Some(MenuAction::ShowWindow),
            "menu.quit" => Some(MenuAction::Quit),
            "menu.refresh" => Some(MenuAction::Refresh),
            "menu.exit-options" => Some(MenuAction::ExitOptions),
            _ => None,
        }
    }
}

/// One entry in a menu spec.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub action: MenuAction,
    pub label: &'static str,
    pub icon: Option<IconName>,
}

/// An ordered, immutable menu description.
#[derive(Debug, Clone, Copy)]
pub struct MenuSpec {
    pub entries: &'static [MenuEntry],
}

const TRAY_MENU: MenuSpec = MenuSpec {
    entries: &[
        MenuEntry {
            action: MenuAction::ShowWindow,
            label: "Show App",
            icon: Some(IconName::Show),
        },
        MenuEntry {
            action: MenuAction::Quit,
            label: "Exit App",
            icon: Some(IconName::Quit),
        },
    ],
};

const CONTEXT_MENU: MenuSpec = MenuSpec {
    entries: &[
        MenuEntry {
            action: MenuAction::Refresh,
            label: "Refresh",
            icon: Some(IconName::Refresh),
        },
        MenuEntry {
            action: MenuAction::ExitOptions,
            label: "Exit Options",
            icon: Some(IconName::Quit),
        },
    ],
};

pub fn tray_menu_spec() -> &'static MenuSpec {
    &TRAY_MENU
}

pub fn context_menu_spec() -> &'static MenuSpec {
    &CONTEXT_MENU
}

/// Build a Tauri menu from a spec. Entries with an icon reference become
/// icon items; icon resolution never fails (placeholder fallback).
pub fn build_menu(app: &AppHandle, spec: &MenuSpec) -> ShellResult<Menu<Wry>> {
    let menu =
        Menu::new(app).map_err(|e| ShellError::Menu(format!("failed to create menu: {e}")))?;

    for entry in spec.entries {
        match entry.icon {
            Some(icon) => {
                let item = IconMenuItem::with_id(
                    app,
                    entry.action.id(),
                    entry.label,
                    true,
                    Some(icons::resolve(icon)),
                    None::<&str>,
                )
                .map_err(|e| ShellError::Menu(format!("failed to create '{}': {e}", entry.label)))?;
                menu.append(&item)
                    .map_err(|e| ShellError::Menu(format!("failed to append '{}': {e}", entry.label)))?;
            }
            None => {
                let item = MenuItem::with_id(app, entry.action.id(), entry.label, true, None::<&str>)
                    .map_err(|e| ShellError::Menu(format!("failed to create '{}': {e}", entry.label)))?;
                menu.append(&item)
                    .map_err(|e| ShellError::Menu(format!("failed to append '{}': {e}", entry.label)))?;
            }
        }
    }

    Ok(menu)
}

/// Single routing point for tray-menu and context-menu events.
pub fn handle_menu_event(app: &AppHandle, event: MenuEvent) {
    let Some(action) = MenuAction::from_id(event.id.as_ref()) else {
        return;
    };

    log::debug!("menu action: {:?}", action);
    match action {
        MenuAction::ShowWindow => window::show_main_window(app),
        MenuAction::Quit => events::request_shell_exit(app),
        MenuAction::Refresh => window::refresh_main_window(app),
        MenuAction::ExitOptions => dialog::prompt_exit_options(app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_ids_round_trip() {
        for action in [
            MenuAction::ShowWindow,
            MenuAction::Quit,
            MenuAction::Refresh,
            MenuAction::ExitOptions,
        ] {
            assert_eq!(MenuAction::from_id(action.id()), Some(action));
        }
        assert_eq!(MenuAction::from_id("menu.bogus"), None);
    }

    #[test]
    fn tray_menu_offers_show_then_quit() {
        let actions: Vec<_> = tray_menu_spec().entries.iter().map(|e| e.action).collect();
        assert_eq!(actions, vec![MenuAction::ShowWindow, MenuAction::Quit]);
    }

    #[test]
    fn context_menu_offers_refresh_then_exit_options() {
        let actions: Vec<_> = context_menu_spec()
            .entries
            .iter()
            .map(|e| e.action)
            .collect();
        assert_eq!(actions, vec![MenuAction::Refresh, MenuAction::ExitOptions]);
    }

    #[test]
    fn menu_ids_are_unique_across_specs() {
        let mut ids: Vec<_> = tray_menu_spec()
            .entries
            .iter()
            .chain(context_menu_spec().entries.iter())
            .map(|e| e.action.id())
            .collect();
        ids.sort_unstable();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }
}
