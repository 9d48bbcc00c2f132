//! Commands exposed to the page over the content bridge.

pub mod logging;
pub mod menu;
