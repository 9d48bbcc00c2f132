//! Icon resolution for tray and menu use.
//!
//! Logical icon names map to PNGs embedded at compile time. Decoding failure
//! degrades to a transparent placeholder instead of propagating: a broken
//! asset must never keep the tray or a menu from existing.

use tauri::image::Image;

/// Menu/tray icons are rendered at 16x16.
const MENU_ICON_SIZE: u32 = 16;

/// Logical icon names used by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    /// Application icon (window, tray).
    App,
    /// "Show window" menu entry.
    Show,
    /// "Exit" menu entries.
    Quit,
    /// "Refresh" context-menu entry.
    Refresh,
}

impl IconName {
    fn bytes(self) -> &'static [u8] {
        match self {
            IconName::App => include_bytes!("../icons/32x32.png"),
            IconName::Show => include_bytes!("../icons/show.png"),
            IconName::Quit => include_bytes!("../icons/logout.png"),
            IconName::Refresh => include_bytes!("../icons/refresh.png"),
        }
    }
}

/// Resolve a logical icon to a bitmap, falling back to an empty placeholder.
pub fn resolve(name: IconName) -> Image<'static> {
    decode_or_empty(name.bytes())
}

fn decode_or_empty(bytes: &[u8]) -> Image<'static> {
    match Image::from_bytes(bytes) {
        Ok(icon) => icon,
        Err(e) => {
            log::warn!("icon decode failed, using empty placeholder: {}", e);
            empty()
        }
    }
}

/// Transparent 16x16 RGBA placeholder.
fn empty() -> Image<'static> {
    let rgba = vec![0u8; (MENU_ICON_SIZE * MENU_ICON_SIZE * 4) as usize];
    Image::new_owned(rgba, MENU_ICON_SIZE, MENU_ICON_SIZE)
}
