pub mod config;
pub mod discovery;
pub mod launcher;
pub mod menu;
pub mod preferences;
pub mod session;
pub mod shared;
pub mod tui;
